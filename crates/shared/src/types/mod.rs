//! Common types used across the application.

pub mod money;

pub use money::{Money, NANOS_PER_UNIT};
