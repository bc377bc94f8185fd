//! Core error type.
//!
//! The error surface is deliberately narrow: every malformed or
//! out-of-domain input collapses into a single `InvalidInput` kind that
//! names the offending field. Adjusters validate eagerly and never
//! return a default result on bad input.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CoreError {
    /// Construct an `InvalidInput` for the given field.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Reject non-finite values (NaN, ±inf) up front.
///
/// JSON and CSV boundaries can both smuggle NaN through an f64 field,
/// and a NaN multiplier would silently poison every downstream product.
pub(crate) fn require_finite(field: &'static str, value: f64) -> CoreResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::invalid_input(field, "must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_reports_field() {
        let err = CoreError::invalid_input("required_stock", "must be > 0");
        assert_eq!(err.field(), "required_stock");
        assert_eq!(
            err.to_string(),
            "invalid input for required_stock: must be > 0"
        );
    }

    #[test]
    fn require_finite_rejects_nan_and_inf() {
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
        assert!(require_finite("x", f64::NEG_INFINITY).is_err());
        assert_eq!(require_finite("x", 1.5).unwrap(), 1.5);
    }
}
