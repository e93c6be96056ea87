//! Errors emitted by the habitability evaluator.

use thiserror::Error;

/// Evaluator-specific result.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors raised by this crate.
///
/// Validation errors are detected before any formula runs and carry the name
/// of the offending input field. Domain errors mean a valid-looking input
/// combination still produced a mathematically undefined intermediate; they
/// abort that single evaluation and nothing else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input outside its documented domain.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// Computation produced a mathematically undefined result.
    #[error("{0}")]
    Domain(String),
}

impl Error {
    /// Validation error for a named input field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject a non-finite intermediate before it can leak into output.
pub(crate) fn ensure_finite(value: f64, quantity: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Domain(format!(
            "{quantity} is not a finite number for these inputs"
        )))
    }
}
