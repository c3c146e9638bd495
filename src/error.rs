//! Fault taxonomy for the theme switch.
//!
//! Every variant describes a missing or misbehaving collaborator. The
//! controller logs and absorbs these; only configuration parsing hands one
//! back to the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by storage, DOM, and configuration collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No persistent key-value store exists for this page.
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// A storage call was rejected (quota, security policy).
    #[error("storage {op} failed: {message}")]
    Storage { op: &'static str, message: String },
    /// No element with this id exists in the document.
    #[error("element #{0} not found")]
    ElementMissing(String),
    /// A DOM attribute write or listener registration threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Configuration JSON could not be parsed.
    #[error("invalid theme config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
