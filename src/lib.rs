//! User Management UI - browser page script
//!
//! The client-side convenience layer of the user management web app.
//!
//! This library provides:
//! - Light/dark theme persisted in localStorage and reflected on `data-theme`
//! - Toggle control label kept in sync with the shown theme
//! - `confirmarExclusao()` confirmation gate before deleting a user
//! - The inline pre-paint script templates embed in `<head>`
//!
//! The logic is written against the traits in [`host`], so it runs natively
//! against [`host::memory`]; the wasm32 build adds the web-sys bindings.

pub mod config;
pub mod error;
pub mod guard;
pub mod host;
pub mod manager;
pub mod snippet;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::UiConfig;
pub use error::{ConfigError, HostError};
pub use guard::DeletionGuard;
pub use manager::ThemeManager;
pub use theme::Theme;
