//! Money type in units + nanos form.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Whole units and billionths are kept as separate integers so an amount
//! round-trips through JSON without losing a single nano.

use serde::{Deserialize, Serialize};

/// Number of nanos in one whole currency unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Represents a monetary amount with currency.
///
/// A valid value keeps `|nanos| < NANOS_PER_UNIT` and `nanos` carries the
/// same sign as `units` (or is zero). See [`Money::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub currency_code: String,
    /// Whole units of the amount (e.g., dollars).
    pub units: i64,
    /// Fractional part in billionths of one unit.
    pub nanos: i32,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(currency_code, 0, 0)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.units < 0 || self.nanos < 0
    }

    /// Returns true if the nanos range and sign constraints hold.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        if self.nanos <= -NANOS_PER_UNIT || self.nanos >= NANOS_PER_UNIT {
            return false;
        }
        !((self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0))
    }

    /// Returns the amount as a total count of nanos.
    #[must_use]
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{}.{:09} {}",
            self.units.unsigned_abs(),
            self.nanos.unsigned_abs(),
            self.currency_code
        )
    }
}
