//! Inline `<head>` script for server templates.
//!
//! The wasm module loads asynchronously, so it cannot set the theme before
//! first paint. Templates embed this snippet in `<head>` to set the root
//! attribute synchronously, and to define `confirmarExclusao` before any
//! deletion form can be submitted. The module takes over once it starts.

use crate::config::UiConfig;

/// Global name page markup calls before submitting a deletion.
pub const CONFIRM_GLOBAL: &str = "confirmarExclusao";

/// JavaScript string literal, safe inside an inline `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned())
        .to_string()
        .replace("</", "<\\/")
}

/// Build the pre-paint script for `config`.
///
/// Storage errors are swallowed, leaving the light default. The confirm
/// fallback is only installed when nothing defined the global yet.
pub fn pre_paint_script(config: &UiConfig) -> String {
    let key = js_string(&config.storage_key);
    let attr = js_string(&config.theme_attribute);
    let marker = js_string(&config.dark_marker);
    let global = js_string(CONFIRM_GLOBAL);
    let message = js_string(&config.delete_message);

    format!(
        r#"
(function(){{
    try {{
        var root = document.documentElement;
        if (localStorage.getItem({key}) === {marker}) {{
            root.setAttribute({attr}, {marker});
        }} else {{
            root.removeAttribute({attr});
        }}
    }} catch (e) {{}}
    window[{global}] = window[{global}] || function() {{
        return window.confirm({message});
    }};
}})();
"#
    )
}
