//! Host seams the page script is written against.
//!
//! The browser bindings in `web` implement these over web-sys; `memory`
//! implements them in-process so the theme and guard logic run without a
//! browser. All methods take `&self`: the page is single-threaded and the
//! same host is shared between the start phase and event callbacks.

pub mod memory;

use crate::error::HostError;

// =============================================================================
// PreferenceStore - client-local key-value slot
// =============================================================================

/// Persistent key-value storage scoped to the page origin (localStorage).
pub trait PreferenceStore {
    /// Read a key. `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write a key.
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

// =============================================================================
// ThemeDocument - the parts of the DOM the theme touches
// =============================================================================

/// Root element attribute access plus text updates by element id.
pub trait ThemeDocument {
    /// Current value of an attribute on the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;

    fn remove_root_attribute(&self, name: &str) -> Result<(), HostError>;

    /// Replace the visible text of the element with `id`.
    ///
    /// Returns `Ok(false)` when no such element exists; absence is expected.
    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, HostError>;
}

// =============================================================================
// ConfirmDialog - blocking yes/no prompt
// =============================================================================

/// Blocking modal confirmation (window.confirm).
pub trait ConfirmDialog {
    /// `Ok(true)` only when the user explicitly accepts.
    fn confirm(&self, message: &str) -> Result<bool, HostError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        (**self).set(key, value)
    }
}

impl<T: ThemeDocument + ?Sized> ThemeDocument for &T {
    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        (**self).set_root_attribute(name, value)
    }

    fn remove_root_attribute(&self, name: &str) -> Result<(), HostError> {
        (**self).remove_root_attribute(name)
    }

    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, HostError> {
        (**self).set_element_text(id, text)
    }
}

impl<T: ConfirmDialog + ?Sized> ConfirmDialog for &T {
    fn confirm(&self, message: &str) -> Result<bool, HostError> {
        (**self).confirm(message)
    }
}
