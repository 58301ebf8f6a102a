//! Response verifier.
//!
//! Runs the declarative checks from a `ResponseExpectation` against a
//! received response and produces the first failure, if any. Response-side
//! logging happens here, driven by the expectation's detail flags.

use apivet_application::{ScenarioError, ScenarioResult};
use apivet_domain::{ResponseExpectation, ResponseSpec};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Verifier that checks received responses against expectations.
///
/// Checks run in order: status first, then required-field presence. The
/// first failing check decides the error, so a 500 with a missing body
/// field reports the status mismatch, not the structure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseVerifier;

impl ResponseVerifier {
    /// Create a new verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Verify a response against an expectation.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::StatusMismatch`] when the status does not
    /// satisfy the expectation, [`ScenarioError::Decode`] when required
    /// fields are declared but the body is not valid JSON, and
    /// [`ScenarioError::MissingField`] when a required JSON pointer is
    /// absent or null.
    pub fn verify(
        &self,
        response: &ResponseSpec,
        expectation: &ResponseExpectation,
    ) -> ScenarioResult<()> {
        if expectation.log.status {
            info!(
                status = %response.status_code(),
                duration = %response.duration_display(),
                size = response.size,
                "response received"
            );
        }
        if expectation.log.body && !response.body.is_empty() {
            debug!(body = %response.body, "response body");
        }

        if !expectation.status.matches(response.status) {
            return Err(ScenarioError::StatusMismatch {
                expected: expectation.status,
                actual: response.status,
            });
        }

        if !expectation.required.is_empty() {
            let json = response.body_as_json().ok_or_else(|| {
                ScenarioError::Decode("response body is not valid JSON".to_string())
            })?;

            for pointer in &expectation.required {
                let present = json.pointer(pointer).is_some_and(|v| !v.is_null());
                if !present {
                    return Err(ScenarioError::MissingField {
                        field: pointer.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Decodes a response body into a typed model.
///
/// # Errors
///
/// Returns [`ScenarioError::Decode`] when the body cannot be parsed into
/// the target type.
pub fn decode<T: DeserializeOwned>(response: &ResponseSpec) -> ScenarioResult<T> {
    serde_json::from_str(&response.body).map_err(|e| ScenarioError::Decode(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use apivet_domain::StatusExpectation;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    fn json_response(status: u16, body: &str) -> ResponseSpec {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        ResponseSpec::new(status, headers, body.as_bytes().to_vec(), Duration::ZERO)
    }

    #[test]
    fn test_verify_passes_on_matching_status() {
        let verifier = ResponseVerifier::new();
        let response = json_response(200, r#"{"token":"abc"}"#);
        let expectation = ResponseExpectation::new().with_status(200);

        assert_eq!(verifier.verify(&response, &expectation), Ok(()));
    }

    #[test]
    fn test_verify_reports_status_mismatch() {
        let verifier = ResponseVerifier::new();
        let response = json_response(415, "");
        let expectation = ResponseExpectation::new().with_status(201);

        assert_eq!(
            verifier.verify(&response, &expectation),
            Err(ScenarioError::StatusMismatch {
                expected: StatusExpectation::Exact(201),
                actual: 415,
            })
        );
    }

    #[test]
    fn test_verify_requires_pointer_presence() {
        let verifier = ResponseVerifier::new();
        let response = json_response(200, r#"{"id":4}"#);
        let expectation = ResponseExpectation::new()
            .with_status(200)
            .expect_present("/token");

        assert_eq!(
            verifier.verify(&response, &expectation),
            Err(ScenarioError::MissingField {
                field: "/token".to_string(),
            })
        );
    }

    #[test]
    fn test_verify_treats_null_as_missing() {
        let verifier = ResponseVerifier::new();
        let response = json_response(200, r#"{"token":null}"#);
        let expectation = ResponseExpectation::new().expect_present("/token");

        assert_eq!(
            verifier.verify(&response, &expectation),
            Err(ScenarioError::MissingField {
                field: "/token".to_string(),
            })
        );
    }

    #[test]
    fn test_verify_reports_non_json_body_when_fields_required() {
        let verifier = ResponseVerifier::new();
        let response = json_response(200, "<html>oops</html>");
        let expectation = ResponseExpectation::new().expect_present("/token");

        assert!(matches!(
            verifier.verify(&response, &expectation),
            Err(ScenarioError::Decode(_))
        ));
    }

    #[test]
    fn test_verify_skips_body_when_no_fields_required() {
        let verifier = ResponseVerifier::new();
        let response = json_response(204, "");
        let expectation = ResponseExpectation::new().with_status(204);

        assert_eq!(verifier.verify(&response, &expectation), Ok(()));
    }

    #[test]
    fn test_status_checked_before_structure() {
        let verifier = ResponseVerifier::new();
        let response = json_response(500, "not json");
        let expectation = ResponseExpectation::new()
            .with_status(200)
            .expect_present("/token");

        assert!(matches!(
            verifier.verify(&response, &expectation),
            Err(ScenarioError::StatusMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_into_model() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Auth {
            token: String,
        }

        let response = json_response(200, r#"{"token":"QpwL5tke4Pnpja7X4"}"#);
        let auth: Auth = decode(&response).unwrap();
        assert_eq!(auth.token, "QpwL5tke4Pnpja7X4");
    }

    #[test]
    fn test_decode_failure_reports_decode_error() {
        #[derive(Debug, Deserialize)]
        struct Auth {
            #[allow(dead_code)]
            token: String,
        }

        let response = json_response(200, r#"{"id":4}"#);
        let result: ScenarioResult<Auth> = decode(&response);
        assert!(matches!(result, Err(ScenarioError::Decode(_))));
    }
}
