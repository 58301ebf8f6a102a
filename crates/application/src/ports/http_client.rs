//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use apivet_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Errors produced while executing an HTTP exchange.
///
/// These cover the transport layer only. A response that arrives with an
/// unexpected status or body is not a transport error; those are reported
/// by the verifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request did not complete in time.
    #[error("Request timed out")]
    Timeout,

    /// DNS resolution failed for the target host.
    #[error("Could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The target host refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port the connection was attempted on.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("Too many redirects (limit: {max})")]
    TooManyRedirects {
        /// Redirect limit that was hit.
        max: u32,
    },

    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body was rejected before sending.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Any other client error.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails at the transport level.
    /// Any response that arrives, whatever its status code, is returned
    /// as `Ok`.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}
