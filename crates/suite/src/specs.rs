//! Shared request templates and response expectations
//!
//! Built once at suite start and shared read-only by every scenario.
//! Per-scenario variation (path, payload, expected status) is layered on
//! clones; the shared templates themselves are never mutated.

use apivet_domain::{RequestTemplate, ResponseExpectation};
use url::Url;

/// The suite's shared request and response templates.
#[derive(Debug, Clone)]
pub struct SuiteSpecs {
    /// Request template that declares a JSON content type.
    pub json_request: RequestTemplate,
    /// Request template with no content type, for GETs, DELETEs, and the
    /// malformed-request scenario.
    pub bare_request: RequestTemplate,
    /// Response expectation that only logs.
    pub plain_response: ResponseExpectation,
    /// Response expectation that also requires a non-null `token` field.
    pub token_response: ResponseExpectation,
}

impl SuiteSpecs {
    /// Builds the shared templates for the given target service.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            json_request: RequestTemplate::json(base.clone()),
            bare_request: RequestTemplate::bare(base),
            plain_response: ResponseExpectation::new(),
            token_response: ResponseExpectation::new().expect_present("/token"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base() -> Url {
        Url::parse("https://reqres.in").unwrap()
    }

    #[test]
    fn test_json_template_declares_content_type() {
        let specs = SuiteSpecs::new(base());
        assert_eq!(specs.json_request.content_type(), Some("application/json"));
        assert_eq!(specs.bare_request.content_type(), None);
    }

    #[test]
    fn test_token_expectation_requires_token_pointer() {
        let specs = SuiteSpecs::new(base());
        assert_eq!(specs.token_response.required, vec!["/token"]);
        assert!(specs.plain_response.required.is_empty());
    }

    #[test]
    fn test_layering_leaves_shared_template_untouched() {
        let specs = SuiteSpecs::new(base());
        let per_call = specs.token_response.clone().with_status(200);

        assert!(specs.token_response.status.matches(500));
        assert!(!per_call.status.matches(500));
    }
}
