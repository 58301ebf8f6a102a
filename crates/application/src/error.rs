//! Scenario error types

use apivet_domain::{DomainError, StatusExpectation};
use thiserror::Error;

use crate::ports::HttpClientError;

/// Result type for scenario execution.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Everything that can make a scenario fail.
///
/// The variants keep transport failures, status mismatches, structural
/// problems with the response body, and value mismatches distinguishable,
/// so a report can say which layer broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// The exchange failed before a response arrived.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpClientError),

    /// The response arrived with an unexpected status code.
    #[error("expected {expected}, got {actual}")]
    StatusMismatch {
        /// Status the scenario expected.
        expected: StatusExpectation,
        /// Status the service returned.
        actual: u16,
    },

    /// A required field was absent or null in the response body.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name or JSON pointer that failed to resolve.
        field: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// A decoded field held the wrong value.
    #[error("field {field}: expected {expected}, got {actual}")]
    ValueMismatch {
        /// Field that held the wrong value.
        field: String,
        /// Value the scenario expected.
        expected: String,
        /// Value the service returned.
        actual: String,
    },

    /// The request could not be constructed.
    #[error("invalid request: {0}")]
    Request(#[from] DomainError),
}

impl ScenarioError {
    /// Short category label for reporting.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::StatusMismatch { .. } => "status",
            Self::MissingField { .. } | Self::Decode(_) => "structure",
            Self::ValueMismatch { .. } => "value",
            Self::Request(_) => "request",
        }
    }
}
