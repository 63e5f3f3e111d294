//! Error types for host access and configuration.

use thiserror::Error;

/// Failure reported by a host seam (storage, document, dialog).
///
/// The manager and guard recover from all of these; nothing here reaches
/// page markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("client-local storage is unavailable")]
    StorageUnavailable,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("document update failed: {0}")]
    Dom(String),

    #[error("confirmation dialog failed: {0}")]
    Dialog(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Json(#[from] serde_json::Error),
}
