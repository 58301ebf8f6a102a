//! HTTP Request body types

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// The kind of request body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBodyKind {
    /// No body
    #[default]
    None,
    /// Raw body with an associated content type
    Raw {
        /// The content type (e.g., "application/json")
        content_type: String,
    },
}

/// HTTP request body with content and type information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestBody {
    /// The kind of body
    pub kind: RequestBodyKind,
    /// The body content as a string
    pub content: String,
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RequestBodyKind::None,
            content: String::new(),
        }
    }

    /// Creates a JSON body from pre-serialized content.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self {
            kind: RequestBodyKind::Raw {
                content_type: "application/json".to_string(),
            },
            content: content.into(),
        }
    }

    /// Serializes a payload into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the payload cannot be
    /// serialized.
    pub fn json_of<T: Serialize>(payload: &T) -> DomainResult<Self> {
        let content =
            serde_json::to_string(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(Self::json(content))
    }

    /// Returns whether the body is empty or none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, RequestBodyKind::None) || self.content.is_empty()
    }

    /// Returns the content type if the body declares one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match &self.kind {
            RequestBodyKind::None => None,
            RequestBodyKind::Raw { content_type } => Some(content_type),
        }
    }
}
