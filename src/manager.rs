//! Theme manager: persisted preference, root attribute and toggle label.
//!
//! The root attribute is the single source of truth for styling. Storage is
//! read through on apply and written through on toggle, so the two agree
//! after every change made here. The toggle label is derived from the
//! attribute, never from storage.

use crate::config::UiConfig;
use crate::host::{PreferenceStore, ThemeDocument};
use crate::theme::Theme;

pub struct ThemeManager<S, D> {
    store: S,
    document: D,
    config: UiConfig,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeManager<S, D> {
    pub fn new(store: S, document: D, config: UiConfig) -> Self {
        Self {
            store,
            document,
            config,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Theme the document is currently showing.
    pub fn current_theme(&self) -> Theme {
        let value = self.document.root_attribute(&self.config.theme_attribute);
        Theme::from_marker(value.as_deref(), &self.config.dark_marker)
    }

    /// Stored preference; unreadable storage counts as nothing stored.
    fn stored_theme(&self) -> Theme {
        match self.store.get(&self.config.storage_key) {
            Ok(value) => Theme::from_marker(value.as_deref(), &self.config.dark_marker),
            Err(e) => {
                tracing::warn!("Theme preference unreadable, using light: {}", e);
                Theme::Light
            }
        }
    }

    /// Reflect the stored preference onto the document, then refresh the label.
    pub fn apply_theme_from_storage(&self) {
        let theme = self.stored_theme();
        let attribute = &self.config.theme_attribute;

        let result = if theme.is_dark() {
            self.document
                .set_root_attribute(attribute, &self.config.dark_marker)
        } else {
            self.document.remove_root_attribute(attribute)
        };
        if let Err(e) = result {
            tracing::debug!("Failed to update {} on root element: {}", attribute, e);
        }

        self.refresh_toggle_label();
    }

    /// Set the toggle's text from the document state. No toggle, no-op.
    pub fn refresh_toggle_label(&self) {
        let label = self.current_theme().label();
        match self.document.set_element_text(&self.config.toggle_id, label) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("No #{} element, label not updated", self.config.toggle_id)
            }
            Err(e) => {
                tracing::debug!("Failed to update #{} label: {}", self.config.toggle_id, e)
            }
        }
    }

    /// Flip the theme shown by the document and persist the result.
    ///
    /// The next value comes from the document, not storage. If the write
    /// fails the re-apply shows the old stored value, keeping document and
    /// storage equal. Returns the theme the document shows afterwards.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current_theme().opposite();
        // Dark is stored as the configured marker so the re-apply reads it back.
        let value = if next.is_dark() {
            self.config.dark_marker.as_str()
        } else {
            next.as_str()
        };
        if let Err(e) = self.store.set(&self.config.storage_key, value) {
            tracing::warn!("Failed to persist theme {}: {}", next, e);
        }
        self.apply_theme_from_storage();

        let shown = self.current_theme();
        tracing::debug!("Theme toggled to {}", shown);
        shown
    }

    /// DOM-ready phase: the toggle exists now, so confirm its label.
    pub fn on_document_ready(&self) {
        self.refresh_toggle_label();
    }
}
