//! Theme preference values.
//!
//! The preference is two-valued. Anything that is not the dark marker,
//! including an absent value, reads as light.

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal written to storage on toggle.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored or attribute value against the dark marker.
    pub fn from_marker(value: Option<&str>, dark_marker: &str) -> Self {
        match value {
            Some(v) if v == dark_marker => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Visible text of the toggle control (glyph + word).
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}\u{FE0F} Light",
            Theme::Dark => "\u{1F319} Dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
