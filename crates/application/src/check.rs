//! Literal value checks
//!
//! Small helpers scenarios use to compare decoded response fields against
//! expected values. Failures carry both sides so the report can show what
//! the service actually returned.

use std::fmt::Debug;

use crate::error::{ScenarioError, ScenarioResult};

/// Checks that a decoded field equals the expected value.
///
/// # Errors
///
/// Returns [`ScenarioError::ValueMismatch`] with both values rendered
/// when they differ.
pub fn expect_eq<T>(field: &str, actual: &T, expected: &T) -> ScenarioResult<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::ValueMismatch {
            field: field.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// Checks that an optional field is present, returning its value.
///
/// # Errors
///
/// Returns [`ScenarioError::MissingField`] when the value is `None`.
pub fn expect_some<T>(field: &str, value: Option<T>) -> ScenarioResult<T> {
    value.ok_or_else(|| ScenarioError::MissingField {
        field: field.to_string(),
    })
}
