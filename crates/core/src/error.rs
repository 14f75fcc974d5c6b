//! Unified error types for the analytics pipeline.
//!
//! Three families matter to callers:
//! - validation errors → 4xx, never retried
//! - store errors → 5xx, retry policy left to the caller
//! - delivery errors → swallowed client-side, visible only in telemetry

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the analytics pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("missing required parameter: {0}")]
    MissingField(String),

    #[error("store error: {0}")]
    Store(String),

    /// Client-side delivery failure. Never surfaced to the host page
    /// or to API callers; counted in telemetry and dropped.
    #[error("delivery error: {0}")]
    Delivery(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }

    /// HTTP status code this error maps to at the API boundary.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::MissingField(_) => 400,
            Self::Serialization(_) => 400,
            Self::Store(_) => 500,
            Self::Delivery(_) => 500,
        }
    }
}
