//! Application layer for Apivet
//!
//! Use cases and ports that orchestrate the domain model. The application
//! layer owns the scenario error taxonomy and the request execution use
//! case; actual HTTP transport lives behind the [`HttpClient`] port.

pub mod check;
pub mod error;
pub mod execute_request;
pub mod ports;

pub use check::{expect_eq, expect_some};
pub use error::{ScenarioError, ScenarioResult};
pub use execute_request::ExecuteRequest;
pub use ports::{HttpClient, HttpClientError};
