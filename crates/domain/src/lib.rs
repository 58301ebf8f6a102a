//! Core domain types for Apivet
//!
//! This crate contains the pure domain model for describing HTTP exchanges
//! against a REST API under test: request templates and specifications,
//! received responses, and the expectations verified against them.
//! It is pure Rust with no I/O dependencies.

pub mod error;
pub mod expectation;
pub mod request;
pub mod response;

pub use url::Url;

pub use error::{DomainError, DomainResult};
pub use expectation::{LogDetail, ResponseExpectation, StatusExpectation};
pub use request::{
    Header, Headers, HttpMethod, RequestBody, RequestBodyKind, RequestLog, RequestSpec,
    RequestTemplate,
};
pub use response::{ResponseSpec, StatusCode};
