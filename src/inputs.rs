//! Input validation shared by the fee and valuation arithmetic.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for numeric arguments outside their documented range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A quantity that must be non-negative was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Name of the offending argument.
        field: &'static str,

        /// The rejected value.
        value: Decimal,
    },
}

/// Pass `value` through unchanged, or reject it if negative.
pub(crate) fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, InputError> {
    if value < Decimal::ZERO {
        Err(InputError::Negative { field, value })
    } else {
        Ok(value)
    }
}
