//! Response expectations
//!
//! Declarative checks applied to a [`ResponseSpec`](crate::ResponseSpec)
//! after an exchange completes. An expectation template is built once per
//! suite and reused across scenarios; per-call details (expected status)
//! are layered on a clone.

/// Which parts of a received response get logged during verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogDetail {
    /// Log the status line.
    pub status: bool,
    /// Log the response body.
    pub body: bool,
}

impl LogDetail {
    /// Logs both the status line and the body.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            status: true,
            body: true,
        }
    }

    /// Logs nothing.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            status: false,
            body: false,
        }
    }
}

impl Default for LogDetail {
    fn default() -> Self {
        Self::full()
    }
}

/// Expected status code for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusExpectation {
    /// Any status code is accepted.
    #[default]
    Any,
    /// Exact status code match.
    Exact(u16),
    /// Status code within an inclusive range.
    Range(u16, u16),
    /// Any 2xx status code.
    Success,
}

impl StatusExpectation {
    /// Checks whether the given status code satisfies this expectation.
    #[must_use]
    pub const fn matches(&self, status: u16) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => status == *expected,
            Self::Range(min, max) => status >= *min && status <= *max,
            Self::Success => status >= 200 && status < 300,
        }
    }

    /// Returns a human-readable description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Any => "any status".to_string(),
            Self::Exact(expected) => format!("status {expected}"),
            Self::Range(min, max) => format!("status in {min}..={max}"),
            Self::Success => "2xx status".to_string(),
        }
    }
}

impl std::fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A reusable set of checks for a received response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseExpectation {
    /// Expected status code.
    pub status: StatusExpectation,
    /// Logging detail applied when the response is verified.
    pub log: LogDetail,
    /// JSON pointers that must resolve to a non-null value in the body.
    pub required: Vec<String>,
}

impl ResponseExpectation {
    /// Creates an expectation that accepts any status and logs fully.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = StatusExpectation::Exact(status);
        self
    }

    /// Sets the status expectation directly.
    #[must_use]
    pub const fn with_status_expectation(mut self, status: StatusExpectation) -> Self {
        self.status = status;
        self
    }

    /// Sets the logging detail.
    #[must_use]
    pub const fn with_log(mut self, log: LogDetail) -> Self {
        self.log = log;
        self
    }

    /// Requires a JSON pointer (e.g. `/token`) to be present and non-null.
    #[must_use]
    pub fn expect_present(mut self, pointer: impl Into<String>) -> Self {
        self.required.push(pointer.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_expectation_exact() {
        let expectation = StatusExpectation::Exact(201);
        assert!(expectation.matches(201));
        assert!(!expectation.matches(200));
        assert_eq!(expectation.description(), "status 201");
    }

    #[test]
    fn test_status_expectation_range() {
        let expectation = StatusExpectation::Range(200, 299);
        assert!(expectation.matches(204));
        assert!(!expectation.matches(301));
    }

    #[test]
    fn test_status_expectation_success() {
        assert!(StatusExpectation::Success.matches(200));
        assert!(StatusExpectation::Success.matches(299));
        assert!(!StatusExpectation::Success.matches(415));
    }

    #[test]
    fn test_default_accepts_any_status() {
        let expectation = ResponseExpectation::new();
        assert!(expectation.status.matches(500));
        assert!(expectation.required.is_empty());
        assert!(expectation.log.status);
        assert!(expectation.log.body);
    }

    #[test]
    fn test_builder_layers_details() {
        let template = ResponseExpectation::new().expect_present("/token");
        let expectation = template.clone().with_status(200).expect_present("/id");

        assert_eq!(expectation.status, StatusExpectation::Exact(200));
        assert_eq!(expectation.required, vec!["/token", "/id"]);
        assert_eq!(template.required, vec!["/token"]);
    }
}
