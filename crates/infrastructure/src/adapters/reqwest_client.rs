//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the suite.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use apivet_application::ports::{HttpClient, HttpClientError};
use apivet_domain::{HttpMethod, RequestBody, RequestBodyKind, RequestSpec, ResponseSpec};
use reqwest::{Client, Method};

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer. Timeouts are left to the client defaults so that
/// slow endpoints surface as slow scenarios rather than aborted ones.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "apivet/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent("apivet/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Builds the request body from domain `RequestBody`.
    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        match &body.kind {
            RequestBodyKind::None => Ok(builder),

            RequestBodyKind::Raw { .. } => {
                if body
                    .content_type()
                    .is_some_and(|ct| ct.contains("application/json"))
                    && !body.content.is_empty()
                {
                    // Reject malformed JSON before it goes on the wire
                    let _: serde_json::Value = serde_json::from_str(&body.content)
                        .map_err(|e| HttpClientError::InvalidBody(format!("Invalid JSON: {e}")))?;
                }
                Ok(builder.body(body.content.clone()))
            }
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        let host = error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string();

        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                let port = error.url().and_then(|u| u.port()).unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: 10 };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.url.clone();
        let headers: Vec<_> = request.headers.iter().cloned().collect();
        let body = request.body.clone();

        Box::pin(async move {
            let start = Instant::now();

            let mut builder = self.client.request(Self::to_reqwest_method(method), url);

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            // Add Content-Type if the body declares one and no header set it
            if let Some(content_type) = body.content_type() {
                let has_content_type = headers
                    .iter()
                    .any(|h| h.name.eq_ignore_ascii_case("content-type"));
                if !has_content_type {
                    builder = builder.header("Content-Type", content_type);
                }
            }

            builder = Self::build_body(builder, &body)?;

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

            let duration = start.elapsed();
            let status = response.status().as_u16();

            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::BodyRead(e.to_string()))?
                .to_vec();

            Ok(ResponseSpec::new(
                status,
                response_headers,
                body_bytes,
                duration,
            ))
        })
    }
}
