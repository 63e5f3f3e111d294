//! Configuration management

use serde::Deserialize;

use crate::error::ConfigError;

/// Names and text the page script works with.
///
/// Every field has a default matching the page templates, so a page only
/// needs a config block to override something.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// localStorage key holding the preference
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Element id of the toggle control
    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,

    /// Attribute on the root element that stylesheets key off
    #[serde(default = "default_theme_attribute")]
    pub theme_attribute: String,

    /// Value meaning dark, both in storage and on the attribute
    #[serde(default = "default_dark_marker")]
    pub dark_marker: String,

    /// Message shown before deleting a user
    #[serde(default = "default_delete_message")]
    pub delete_message: String,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_toggle_id() -> String {
    "theme-toggle".to_string()
}

fn default_theme_attribute() -> String {
    "data-theme".to_string()
}

fn default_dark_marker() -> String {
    "dark".to_string()
}

fn default_delete_message() -> String {
    "Deseja realmente excluir este usuário? Esta ação não pode ser desfeita.".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            toggle_id: default_toggle_id(),
            theme_attribute: default_theme_attribute(),
            dark_marker: default_dark_marker(),
            delete_message: default_delete_message(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional config block, falling back to defaults.
    ///
    /// A blank or missing block is not worth a log line; a malformed one is.
    pub fn from_block(block: Option<&str>) -> Self {
        match block.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => match Self::from_json(json) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring ui config block: {}", e);
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = UiConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.dark_marker, "dark");
        assert!(config.delete_message.contains("excluir este usuário"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = UiConfig::from_json(r#"{"storage_key": "admin-theme"}"#)
            .expect("partial config should parse");
        assert_eq!(config.storage_key, "admin-theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.dark_marker, "dark");
    }

    #[test]
    fn empty_object_is_default() {
        let config = UiConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(UiConfig::from_json("{storage_key:").is_err());
        assert!(UiConfig::from_json(r#"{"storage_key": 7}"#).is_err());
    }

    #[test]
    fn block_falls_back_to_defaults() {
        assert_eq!(UiConfig::from_block(None), UiConfig::default());
        assert_eq!(UiConfig::from_block(Some("  \n ")), UiConfig::default());
        assert_eq!(UiConfig::from_block(Some("not json")), UiConfig::default());

        let config = UiConfig::from_block(Some(r#" {"toggle_id": "mode"} "#));
        assert_eq!(config.toggle_id, "mode");
    }
}
