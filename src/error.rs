//! Error types for the fallible edges of the page session.
//!
//! Nothing here is fatal: callers log these and carry on with in-memory
//! behavior or default configuration.

/// Failure talking to the persisted preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No store exists in this environment (private mode, disabled storage).
    #[error("preference store is unavailable")]
    Unavailable,
    /// The store exists but rejected the read.
    #[error("failed to read preference {key:?}: {reason}")]
    Read { key: String, reason: String },
    /// The store exists but rejected the write (quota, security policy).
    #[error("failed to write preference {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Failure loading the embedded site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}
