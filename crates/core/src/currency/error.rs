//! Conversion error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::rates::REFERENCE_CURRENCY;
use cambio_shared::AppError;

/// Errors raised while building a rate table or converting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code is absent from the rate table.
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    /// Amount is malformed, violates the money invariant, or overflows.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Rate table entry is zero or negative.
    #[error("Invalid rate for {code}: {rate} (must be positive)")]
    InvalidRate {
        /// Currency code of the offending entry.
        code: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Rate table has no entry for the pivot currency.
    #[error("Rate table has no entry for reference currency {reference}", reference = REFERENCE_CURRENCY)]
    MissingReferenceCurrency,

    /// Pivot currency entry is not exactly one.
    #[error("Reference currency {reference} must have rate 1, got {0}", reference = REFERENCE_CURRENCY)]
    InvalidReferenceRate(Decimal),

    /// Rate table has no entries.
    #[error("Rate table is empty")]
    EmptyRateTable,

    /// Rate table document is not a flat JSON object of code to rate.
    #[error("Failed to parse rate table: {0}")]
    RateTableParse(String),

    /// Rate table file could not be read.
    #[error("Failed to read rate table {path}: {message}")]
    RateTableIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnsupportedCurrency(code) => Self::UnsupportedCurrency(code),
            ConversionError::InvalidAmount(detail) => Self::InvalidAmount(detail),
            other => Self::Internal(other.to_string()),
        }
    }
}
