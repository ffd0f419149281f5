//! Core conversion logic for Cambio.
//!
//! This crate contains pure arithmetic with ZERO web or I/O dependencies
//! outside the one-time rate table load.
//!
//! # Modules
//!
//! - `currency` - Rate tables, carry normalization, and the two-leg converter

pub mod currency;

pub use currency::{ConversionError, Converter, RateTable};
