//! Carry normalization for intermediate amounts.
//!
//! Between conversion legs an amount lives as a pair of decimals: whole
//! units that may carry a fraction, and nanos that may be fractional or
//! exceed one unit. [`DecimalAmount::carry`] folds such a pair back into
//! whole units plus an in-range, sign-consistent nanos remainder.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use cambio_shared::{Money, NANOS_PER_UNIT};

use super::error::ConversionError;

/// Nanos per unit as a decimal.
const NANOS: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A possibly denormalized `(units, nanos)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAmount {
    /// Whole units, possibly fractional.
    pub units: Decimal,
    /// Billionths of a unit, possibly fractional or out of range.
    pub nanos: Decimal,
}

impl DecimalAmount {
    /// Creates a new pair without normalizing it.
    #[must_use]
    pub const fn new(units: Decimal, nanos: Decimal) -> Self {
        Self { units, nanos }
    }

    /// Lifts a [`Money`] value into decimal form.
    #[must_use]
    pub fn from_money(money: &Money) -> Self {
        Self::new(Decimal::from(money.units), Decimal::from(money.nanos))
    }

    /// Moves the fractional part of `units` into `nanos`, then moves whole
    /// units out of `nanos`.
    ///
    /// After carrying, `units` is integral, `|nanos| < 10^9`, and `nanos`
    /// is zero or has the sign of `units`. `nanos` may still be fractional.
    /// Returns `None` on decimal overflow.
    #[must_use]
    pub fn carry(self) -> Option<Self> {
        let whole = self.units.trunc();
        let mut nanos = self
            .nanos
            .checked_add(self.units.fract().checked_mul(NANOS)?)?;

        let spill = nanos.checked_div(NANOS)?.trunc();
        let mut units = whole.checked_add(spill)?;
        nanos = nanos.checked_sub(spill.checked_mul(NANOS)?)?;

        if units > Decimal::ZERO && nanos < Decimal::ZERO {
            units -= Decimal::ONE;
            nanos += NANOS;
        } else if units < Decimal::ZERO && nanos > Decimal::ZERO {
            units += Decimal::ONE;
            nanos -= NANOS;
        }

        Some(Self { units, nanos })
    }

    /// Rounds `nanos` to a whole number, half away from zero.
    #[must_use]
    pub fn round_nanos(self) -> Self {
        Self {
            units: self.units,
            nanos: self
                .nanos
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Floors both parts to whole numbers.
    #[must_use]
    pub fn floor(self) -> Self {
        Self {
            units: self.units.floor(),
            nanos: self.nanos.floor(),
        }
    }

    /// Divides both parts by `rate`. Returns `None` on overflow or a zero rate.
    #[must_use]
    pub fn checked_div(self, rate: Decimal) -> Option<Self> {
        Some(Self {
            units: self.units.checked_div(rate)?,
            nanos: self.nanos.checked_div(rate)?,
        })
    }

    /// Multiplies both parts by `rate`. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, rate: Decimal) -> Option<Self> {
        Some(Self {
            units: self.units.checked_mul(rate)?,
            nanos: self.nanos.checked_mul(rate)?,
        })
    }

    /// Converts a carried, floored pair into [`Money`].
    pub fn into_money(self, currency_code: &str) -> Result<Money, ConversionError> {
        let units = self
            .units
            .to_i64()
            .ok_or_else(|| ConversionError::InvalidAmount(format!("units overflow: {}", self.units)))?;
        let nanos = self
            .nanos
            .to_i32()
            .filter(|n| n.unsigned_abs() < NANOS_PER_UNIT.unsigned_abs())
            .ok_or_else(|| ConversionError::InvalidAmount(format!("nanos out of range: {}", self.nanos)))?;

        Ok(Money::new(currency_code, units, nanos))
    }
}
