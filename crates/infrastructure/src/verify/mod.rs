//! Response verification

mod runner;

pub use runner::{ResponseVerifier, decode};
