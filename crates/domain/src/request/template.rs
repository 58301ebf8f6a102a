//! Reusable request defaults
//!
//! A [`RequestTemplate`] captures everything about issuing a request that
//! does not vary per scenario: the target host, default headers, the
//! declared content type, and how much of the outgoing request to log.
//! Templates are built once at startup and never mutated afterwards; every
//! per-call difference is injected through the assembled [`RequestSpec`].

use url::Url;

use super::{Headers, HttpMethod, RequestSpec};
use crate::error::{DomainError, DomainResult};

/// Logging policy for outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLog {
    /// Log the method and full URI when sending.
    pub uri: bool,
    /// Log the request body when sending.
    pub body: bool,
}

impl RequestLog {
    /// Logs both the URI and the body.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            uri: true,
            body: true,
        }
    }

    /// Logs nothing.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            uri: false,
            body: false,
        }
    }
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::full()
    }
}

/// Reusable defaults for issuing HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    base: Url,
    headers: Headers,
    content_type: Option<String>,
    log: RequestLog,
}

impl RequestTemplate {
    /// Creates a template that declares an `application/json` content type.
    #[must_use]
    pub fn json(base: Url) -> Self {
        Self {
            base,
            headers: Headers::new(),
            content_type: Some("application/json".to_string()),
            log: RequestLog::full(),
        }
    }

    /// Creates a template with no declared content type.
    ///
    /// Used for calls without a body, and for negative scenarios that rely
    /// on the content type being absent.
    #[must_use]
    pub fn bare(base: Url) -> Self {
        Self {
            base,
            headers: Headers::new(),
            content_type: None,
            log: RequestLog::full(),
        }
    }

    /// Adds a default header applied to every assembled request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Overrides the logging policy.
    #[must_use]
    pub const fn with_log(mut self, log: RequestLog) -> Self {
        self.log = log;
        self
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the declared content type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the logging policy.
    #[must_use]
    pub const fn log(&self) -> RequestLog {
        self.log
    }

    /// Assembles a concrete request for the given method and endpoint path.
    ///
    /// The template's defaults (headers, content type, log policy) are
    /// copied into the result; the template itself is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPath`] if the path cannot be joined
    /// onto the base URL.
    pub fn request(&self, method: HttpMethod, path: &str) -> DomainResult<RequestSpec> {
        let url = self
            .base
            .join(path)
            .map_err(|e| DomainError::InvalidPath(format!("{path}: {e}")))?;

        let mut headers = self.headers.clone();
        if let Some(content_type) = &self.content_type {
            if !headers.contains("content-type") {
                headers.add("Content-Type", content_type.clone());
            }
        }

        Ok(RequestSpec {
            method,
            url,
            headers,
            body: super::RequestBody::none(),
            log: self.log,
        })
    }

    /// Assembles a GET request for the given path.
    ///
    /// # Errors
    ///
    /// See [`RequestTemplate::request`].
    pub fn get(&self, path: &str) -> DomainResult<RequestSpec> {
        self.request(HttpMethod::Get, path)
    }

    /// Assembles a POST request for the given path.
    ///
    /// # Errors
    ///
    /// See [`RequestTemplate::request`].
    pub fn post(&self, path: &str) -> DomainResult<RequestSpec> {
        self.request(HttpMethod::Post, path)
    }

    /// Assembles a PUT request for the given path.
    ///
    /// # Errors
    ///
    /// See [`RequestTemplate::request`].
    pub fn put(&self, path: &str) -> DomainResult<RequestSpec> {
        self.request(HttpMethod::Put, path)
    }

    /// Assembles a DELETE request for the given path.
    ///
    /// # Errors
    ///
    /// See [`RequestTemplate::request`].
    pub fn delete(&self, path: &str) -> DomainResult<RequestSpec> {
        self.request(HttpMethod::Delete, path)
    }
}
