//! Architecture enforcement lint - browser APIs stay behind the host seams.
//!
//! The theme manager and deletion guard are written against the traits in
//! `src/host`. Only `src/web.rs` may talk to the browser directly; anything
//! else referencing web-sys or wasm-bindgen would stop compiling natively
//! and could no longer be tested against the in-memory host.

use std::fs;
use std::path::Path;
use syn::{Attribute, Expr, ExprLit, Item, Lit, MetaNameValue};
use walkdir::WalkDir;

/// Crate paths that indicate direct browser access
const BROWSER_CRATES: &[&str] = &["web_sys::", "wasm_bindgen::", "js_sys::", "#[wasm_bindgen"];

/// Files allowed to use browser crates (relative to src/)
const ALLOWED_FILES: &[&str] = &["web.rs"];

fn analyze_file(src_dir: &Path, path: &Path) -> Vec<(String, String)> {
    let rel = path
        .strip_prefix(src_dir)
        .unwrap_or(path)
        .display()
        .to_string()
        .replace('\\', "/");

    if ALLOWED_FILES.contains(&rel.as_str()) {
        return vec![];
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let code = line.split("//").next().unwrap_or("");
        for pattern in BROWSER_CRATES {
            if code.contains(pattern) {
                violations.push((format!("{}:{}", rel, line_no + 1), pattern.to_string()));
            }
        }
    }
    violations
}

#[test]
fn browser_apis_only_in_web_module() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();
    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(&src_dir, entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from("Browser APIs used outside src/web.rs:\n\n");
        for (location, pattern) in &all_violations {
            error_msg.push_str(&format!("  {} uses `{}`\n", location, pattern));
        }
        error_msg.push_str("\nAdd a method to a host trait and implement it in src/web.rs instead.");
        panic!("{}", error_msg);
    }
}

/// Whether `attrs` carry `#[cfg(target_arch = "wasm32")]`.
fn is_wasm_gated(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("cfg") {
            return false;
        }
        let Ok(meta) = attr.parse_args::<MetaNameValue>() else {
            return false;
        };
        let is_wasm = match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => s.value() == "wasm32",
            _ => false,
        };
        meta.path.is_ident("target_arch") && is_wasm
    })
}

fn web_mod_is_gated(source: &str) -> Option<bool> {
    let syntax = syn::parse_file(source).expect("Failed to parse lib source");
    syntax.items.iter().find_map(|item| match item {
        Item::Mod(m) if m.ident == "web" => Some(is_wasm_gated(&m.attrs)),
        _ => None,
    })
}

#[test]
fn detects_ungated_web_module() {
    assert_eq!(web_mod_is_gated("pub mod web;"), Some(false));
    assert_eq!(
        web_mod_is_gated("#[cfg(target_os = \"linux\")]\npub mod web;"),
        Some(false)
    );
}

#[test]
fn accepts_documented_gated_web_module() {
    let source = r#"
        /// Browser bindings.
        #[cfg(target_arch = "wasm32")]
        #[allow(dead_code)]
        pub mod web;
    "#;
    assert_eq!(web_mod_is_gated(source), Some(true));
}

#[test]
fn web_module_is_wasm_only() {
    let lib = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs"))
        .expect("Failed to read src/lib.rs");

    assert_eq!(
        web_mod_is_gated(&lib),
        Some(true),
        "src/lib.rs must declare `pub mod web;` behind #[cfg(target_arch = \"wasm32\")]"
    );
}
