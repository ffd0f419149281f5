//! Exchange rate table against the reference currency.
//!
//! Every entry answers "how many units of this currency buy one unit of
//! the reference currency". The table is built once and never mutated;
//! callers share it behind an `Arc`.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;

use super::error::ConversionError;

/// The pivot currency every conversion routes through.
pub const REFERENCE_CURRENCY: &str = "EUR";

/// Rate table bundled with the service.
const EMBEDDED_RATES: &str = include_str!("../../data/currency_conversion.json");

/// Immutable mapping of currency code to rate-to-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table, rejecting empty input and non-positive rates.
    ///
    /// The table must also price [`REFERENCE_CURRENCY`] at exactly one,
    /// since every conversion pivots through it.
    pub fn new<I, S>(entries: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in entries {
            let code = code.into();
            if rate <= Decimal::ZERO {
                return Err(ConversionError::InvalidRate { code, rate });
            }
            rates.insert(code, rate);
        }

        if rates.is_empty() {
            return Err(ConversionError::EmptyRateTable);
        }

        match rates.get(REFERENCE_CURRENCY) {
            None => return Err(ConversionError::MissingReferenceCurrency),
            Some(&rate) if rate != Decimal::ONE => {
                return Err(ConversionError::InvalidReferenceRate(rate));
            }
            Some(_) => {}
        }

        Ok(Self { rates })
    }

    /// Parses a flat JSON object such as `{"EUR": "1.0", "USD": "1.1305"}`.
    ///
    /// Rates may be given as strings or JSON numbers.
    pub fn from_json_str(json: &str) -> Result<Self, ConversionError> {
        let entries: BTreeMap<String, Decimal> = serde_json::from_str(json)
            .map_err(|e| ConversionError::RateTableParse(e.to_string()))?;
        Self::new(entries)
    }

    /// Reads and parses a JSON rate table from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConversionError::RateTableIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the rate table bundled with the service.
    pub fn embedded() -> Result<Self, ConversionError> {
        Self::from_json_str(EMBEDDED_RATES)
    }

    /// Looks up the rate for `code`.
    pub fn rate(&self, code: &str) -> Result<Decimal, ConversionError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ConversionError::UnsupportedCurrency(code.to_string()))
    }

    /// Returns the supported currency codes in sorted order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }

    /// Returns the number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries. Never true for a constructed table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
