//! Multi-currency handling and exchange rates.

pub mod carry;
pub mod converter;
pub mod error;
pub mod rates;

#[cfg(test)]
mod props;

pub use carry::DecimalAmount;
pub use converter::{Converter, convert};
pub use error::ConversionError;
pub use rates::{REFERENCE_CURRENCY, RateTable};
