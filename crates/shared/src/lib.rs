//! Shared types, errors, and configuration for Cambio.
//!
//! This crate provides common types used across all other crates:
//! - Money in units + nanos form
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, RatesConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{Money, NANOS_PER_UNIT};
