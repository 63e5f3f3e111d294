//! Browser bindings: web-sys host implementations and wasm entry points.
//!
//! Start runs as soon as the module is instantiated: it applies the stored
//! theme, exposes `confirmarExclusao` on `window`, and schedules the
//! DOM-ready phase that binds the toggle's click handler.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::UiConfig;
use crate::error::HostError;
use crate::guard::DeletionGuard;
use crate::host::{ConfirmDialog, PreferenceStore, ThemeDocument};
use crate::manager::ThemeManager;
use crate::snippet::CONFIRM_GLOBAL;

/// Element id of the optional JSON config block.
const CONFIG_BLOCK_ID: &str = "ui-config";

type BrowserThemeManager = ThemeManager<LocalStorage, BrowserDocument>;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ============ Host implementations ============

/// `window.localStorage`, looked up on every access.
///
/// Reading the property itself throws when storage is disabled, so the
/// lookup is part of each fallible call.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, HostError> {
        let window = web_sys::window().ok_or(HostError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(HostError::StorageUnavailable),
            Err(e) => Err(HostError::Storage(js_error(e))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| HostError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| HostError::Storage(js_error(e)))
    }
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn root(&self) -> Result<Element, HostError> {
        self.document
            .document_element()
            .ok_or_else(|| HostError::Dom("document has no root element".to_string()))
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl ThemeDocument for BrowserDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.root()?
            .set_attribute(name, value)
            .map_err(|e| HostError::Dom(js_error(e)))
    }

    fn remove_root_attribute(&self, name: &str) -> Result<(), HostError> {
        self.root()?
            .remove_attribute(name)
            .map_err(|e| HostError::Dom(js_error(e)))
    }

    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, HostError> {
        let Some(element) = self.element_by_id(id) else {
            return Ok(false);
        };
        match element.dyn_into::<HtmlElement>() {
            Ok(html) => html.set_inner_text(text),
            Err(element) => element.set_text_content(Some(text)),
        }
        Ok(true)
    }
}

/// `window.confirm`.
pub struct BrowserDialog;

impl ConfirmDialog for BrowserDialog {
    fn confirm(&self, message: &str) -> Result<bool, HostError> {
        let window = web_sys::window().ok_or_else(|| HostError::Dialog("no window".to_string()))?;
        window
            .confirm_with_message(message)
            .map_err(|e| HostError::Dialog(js_error(e)))
    }
}

// ============ Entry points ============

fn load_config(document: &Document) -> UiConfig {
    let block = document
        .get_element_by_id(CONFIG_BLOCK_ID)
        .and_then(|el| el.text_content());
    UiConfig::from_block(block.as_deref())
}

/// Ask before deleting a user. Wired to deletion forms by page markup.
#[wasm_bindgen(js_name = confirmarExclusao)]
pub fn confirmar_exclusao() -> bool {
    let config = web_sys::window()
        .and_then(|w| w.document())
        .map(|d| load_config(&d))
        .unwrap_or_default();
    DeletionGuard::new(BrowserDialog, config.delete_message).confirm_deletion()
}

/// Make `confirmarExclusao()` callable from inline handlers.
fn expose_confirm_global(window: &web_sys::Window) {
    let confirm = Closure::<dyn FnMut() -> bool>::new(confirmar_exclusao);
    match js_sys::Reflect::set(window, &JsValue::from_str(CONFIRM_GLOBAL), confirm.as_ref()) {
        Ok(_) => confirm.forget(),
        Err(e) => tracing::warn!("Failed to expose {}: {}", CONFIRM_GLOBAL, js_error(e)),
    }
}

/// DOM-ready phase: bind the toggle and confirm its label.
fn on_document_ready(manager: &Rc<BrowserThemeManager>) {
    let toggle_id = manager.config().toggle_id.clone();
    if let Some(toggle) = manager.document().element_by_id(&toggle_id) {
        let handler_manager = Rc::clone(manager);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            handler_manager.toggle_theme();
        });
        if let Err(e) =
            toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to bind #{} click: {}", toggle_id, js_error(e));
        }
        // Lives as long as the page.
        on_click.forget();
    }
    manager.on_document_ready();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = load_config(&document);
    tracing::info!(
        "Starting user management ui v{} (toggle #{})",
        env!("CARGO_PKG_VERSION"),
        config.toggle_id
    );

    let manager = Rc::new(ThemeManager::new(
        LocalStorage,
        BrowserDocument::new(document.clone()),
        config,
    ));
    manager.apply_theme_from_storage();
    expose_confirm_global(&window);

    // The module may start after DOMContentLoaded has already fired.
    if !manager.document().is_loading() {
        on_document_ready(&manager);
        return;
    }

    let ready_manager = Rc::clone(&manager);
    let on_ready = Closure::<dyn FnMut()>::new(move || on_document_ready(&ready_manager));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to wait for DOMContentLoaded: {}", js_error(e));
    }
    on_ready.forget();
}
