//! Metron Core - Fundamental types
//!
//! This crate provides the core types used throughout Metron:
//! - `number`: Decimal formatting and rounding for `f64` values
//! - `MeasurementSystem`: Metric or imperial grouping of units
//! - `ConversionError`: Errors raised when converting to an unknown unit

pub mod number;
mod system;
mod error;

pub use system::MeasurementSystem;
pub use error::ConversionError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConversionError, MeasurementSystem};
    pub use crate::number::{format, format_with_precision, round};
}
