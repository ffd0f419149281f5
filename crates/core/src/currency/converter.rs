//! Two-leg currency conversion through the reference currency.
//!
//! CRITICAL: Rounding strategy:
//! - Leg one (source -> EUR) rounds nanos half away from zero
//! - Leg two (EUR -> target) floors units and nanos
//! - Carry normalization after every arithmetic step
//!
//! The asymmetry is intentional. Collapsing the two legs into a single
//! `amount * to / from` changes results for repeating-decimal rates.

use std::sync::Arc;

use rust_decimal::Decimal;

use cambio_shared::Money;

use super::carry::DecimalAmount;
use super::error::ConversionError;
use super::rates::RateTable;

/// Converts amounts using an injected, immutable rate table.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Converter {
    rates: Arc<RateTable>,
}

impl Converter {
    /// Creates a converter over `rates`.
    #[must_use]
    pub const fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    /// Returns the supported currency codes in sorted order.
    #[must_use]
    pub fn supported_currencies(&self) -> Vec<&str> {
        self.rates.codes()
    }

    /// Converts `amount` into `to_code`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal_macros::dec;
    /// use cambio_core::currency::{Converter, RateTable};
    /// use cambio_shared::Money;
    ///
    /// let rates = RateTable::new([("EUR", dec!(1.0)), ("USD", dec!(1.1))]).unwrap();
    /// let converter = Converter::new(Arc::new(rates));
    ///
    /// let euros = converter.convert(&Money::new("USD", 100, 0), "EUR").unwrap();
    /// assert_eq!(euros, Money::new("EUR", 90, 909_090_909));
    /// ```
    pub fn convert(&self, amount: &Money, to_code: &str) -> Result<Money, ConversionError> {
        convert(amount, to_code, &self.rates)
    }
}

/// Converts `amount` into `to_code` using `rates`.
///
/// Fails with [`ConversionError::UnsupportedCurrency`] when either code is
/// missing from `rates`, and with [`ConversionError::InvalidAmount`] when
/// `amount` breaks the money invariant or the result overflows.
pub fn convert(amount: &Money, to_code: &str, rates: &RateTable) -> Result<Money, ConversionError> {
    let from_rate = rates.rate(&amount.currency_code)?;
    let to_rate = rates.rate(to_code)?;

    if !amount.is_valid() {
        return Err(ConversionError::InvalidAmount(format!(
            "units {} and nanos {} do not form a normalized amount",
            amount.units, amount.nanos
        )));
    }

    let euros = to_reference(DecimalAmount::from_money(amount), from_rate)?;
    from_reference(euros, to_rate)?.into_money(to_code)
}

/// Leg one: source currency to EUR, nanos rounded to whole.
fn to_reference(amount: DecimalAmount, rate: Decimal) -> Result<DecimalAmount, ConversionError> {
    amount
        .checked_div(rate)
        .and_then(DecimalAmount::carry)
        .map(DecimalAmount::round_nanos)
        .ok_or_else(overflow)
}

/// Leg two: EUR to target currency, floored. The trailing carry only
/// matters when flooring a negative remainder reaches a whole unit.
fn from_reference(euros: DecimalAmount, rate: Decimal) -> Result<DecimalAmount, ConversionError> {
    euros
        .checked_mul(rate)
        .and_then(DecimalAmount::carry)
        .map(DecimalAmount::floor)
        .and_then(DecimalAmount::carry)
        .ok_or_else(overflow)
}

fn overflow() -> ConversionError {
    ConversionError::InvalidAmount("arithmetic overflow during conversion".to_string())
}
