//! Error types
//!
//! The aggregation core never fails on data quality: empty documents,
//! malformed triples and sentences without entities only shrink the output.
//! Errors come from configuration and from the I/O around it.

use std::io;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EventGraphError>;

/// Error type for configuration, stop-word loading and serialization failures.
#[derive(Debug, Error)]
pub enum EventGraphError {
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EventGraphError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EventGraphError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
