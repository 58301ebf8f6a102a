//! Assembled per-call request

use serde::Serialize;
use url::Url;

use super::{Headers, HttpMethod, RequestBody, RequestLog};
use crate::error::DomainResult;

/// A concrete HTTP request, assembled from a template plus the per-call
/// method, endpoint path, and payload.
///
/// Each scenario owns the specs it assembles; nothing is shared or reused
/// across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Fully resolved target URL
    pub url: Url,
    /// Headers to send, template defaults included
    pub headers: Headers,
    /// Request body
    pub body: RequestBody,
    /// Logging policy inherited from the template
    pub log: RequestLog,
}

impl RequestSpec {
    /// Attaches a JSON-serialized payload as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DomainError::InvalidBody`] if serialization fails.
    pub fn with_json_body<T: Serialize>(mut self, payload: &T) -> DomainResult<Self> {
        self.body = RequestBody::json_of(payload)?;
        Ok(self)
    }

    /// Adds a header to this request only.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::request::RequestTemplate;
    use serde_json::json;

    #[test]
    fn test_with_json_body() {
        let template = RequestTemplate::json(Url::parse("https://reqres.in").unwrap());
        let request = template
            .post("/api/users")
            .unwrap()
            .with_json_body(&json!({"name": "Cat"}))
            .unwrap();

        assert_eq!(request.body.content, r#"{"name":"Cat"}"#);
        assert_eq!(request.body.content_type(), Some("application/json"));
    }

    #[test]
    fn test_per_request_header_does_not_touch_template() {
        let template = RequestTemplate::bare(Url::parse("https://reqres.in").unwrap());
        let request = template
            .get("/api/users/2")
            .unwrap()
            .with_header("X-Trace", "1");

        assert!(request.headers.contains("x-trace"));
        assert!(template.get("/api/users/2").unwrap().headers.is_empty());
    }
}
