//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while assembling requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint path: {0}")]
    InvalidPath(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The payload could not be serialized into a request body.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
