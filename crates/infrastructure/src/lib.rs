//! Apivet Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the response verifier
//! that runs declarative expectations against received responses.

pub mod adapters;
pub mod verify;

pub use adapters::ReqwestHttpClient;
pub use verify::{ResponseVerifier, decode};
