//! Apivet - end-to-end suite for a reqres.in style user-management API
//!
//! The suite builds immutable request templates and response expectations
//! once, then runs a fixed set of scenarios against the target service:
//! register, login, fetch, create, update, a malformed-request rejection,
//! and delete. Outcomes are collected into a [`SuiteReport`].

pub mod models;
pub mod report;
pub mod scenarios;
pub mod specs;

pub use models::{AuthResult, Credentials, JobChange, JobResult, Support, UserData, UserDetail};
pub use report::{ScenarioOutcome, SuiteReport, run_all};
pub use scenarios::Scenarios;
pub use specs::SuiteSpecs;
