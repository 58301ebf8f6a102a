//! Execute Request Use Case
//!
//! The single use case every scenario goes through: sending a prepared
//! request and returning the raw response. Request-side logging happens
//! here, driven by the flags carried on the request itself.

use std::sync::Arc;

use apivet_domain::{RequestSpec, ResponseSpec};
use tracing::{debug, info};

use crate::ports::{HttpClient, HttpClientError};

/// Use case for executing HTTP requests.
///
/// Wraps the `HttpClient` port and applies the request's logging flags
/// before handing it to the transport.
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientError` when the exchange fails at the transport
    /// level. Responses with unexpected status codes are still `Ok`.
    pub async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        if request.log.uri {
            info!(method = %request.method, url = %request.url, "sending request");
        }
        if request.log.body && !request.body.content.is_empty() {
            debug!(body = %request.body.content, "request body");
        }

        self.client.execute(request).await
    }
}
