//! Error Types for AQI Calculation Failures
//!
//! ## Design
//!
//! The error system follows the same constraints as the rest of the core:
//!
//! 1. **No Heap Allocation**: The offending pollutant name is copied into a
//!    fixed-capacity [`heapless::String`], truncated at
//!    [`MAX_POLLUTANT_NAME`] bytes.
//!
//! 2. **Terminal**: Both variants end a single calculation attempt. Nothing is
//!    retried or recovered; callers surface the message as-is.
//!
//! ## Error Categories
//!
//! - `InvalidPollutant`: identifier is not one of the six table keys
//! - `ConcentrationOutOfRange`: no breakpoint contains the concentration
//!   (negative, above the top breakpoint, inside a gap, or NaN)
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use airindex_core::{compute, AqiError};
//!
//! fn describe(pollutant: &str, concentration: f64) -> &'static str {
//!     match compute(concentration, pollutant) {
//!         Ok(_) => "ok",
//!         Err(AqiError::InvalidPollutant { .. }) => "pick one of the six pollutants",
//!         Err(AqiError::ConcentrationOutOfRange { .. }) => "reading outside the tables",
//!     }
//! }
//!
//! assert_eq!(describe("SO2", 20.0), "ok");
//! assert_eq!(describe("SO2", 5000.0), "reading outside the tables");
//! ```

use heapless::String;
use thiserror_no_std::Error;

use crate::pollutant::Pollutant;

/// Capacity of the inline copy of an unrecognised pollutant name
pub const MAX_POLLUTANT_NAME: usize = 32;

/// Result type for AQI operations
pub type AqiResult<T> = Result<T, AqiError>;

/// AQI calculation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Pollutant identifier is not a key of the breakpoint table
    #[error("Invalid pollutant: {name}")]
    InvalidPollutant {
        /// The identifier as given, truncated to [`MAX_POLLUTANT_NAME`] bytes
        name: String<MAX_POLLUTANT_NAME>,
    },

    /// Concentration not covered by any breakpoint of the pollutant
    #[error("Concentration out of range for AQI calculation ({concentration} for {pollutant})")]
    ConcentrationOutOfRange {
        /// Pollutant whose table was scanned
        pollutant: Pollutant,
        /// The rejected concentration
        concentration: f64,
    },
}

impl AqiError {
    /// Build an `InvalidPollutant` error, truncating on a char boundary
    pub fn invalid_pollutant(name: &str) -> Self {
        let mut inline = String::new();
        for c in name.chars() {
            if inline.push(c).is_err() {
                break;
            }
        }
        AqiError::InvalidPollutant { name: inline }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidPollutant { name } =>
                defmt::write!(fmt, "Invalid pollutant: {=str}", name.as_str()),
            Self::ConcentrationOutOfRange { pollutant, concentration } =>
                defmt::write!(fmt, "Concentration {} out of range for {}", concentration, pollutant),
        }
    }
}
