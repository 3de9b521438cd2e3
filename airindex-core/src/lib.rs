//! Core AQI engine for AirIndex
//!
//! Converts a pollutant concentration into an Air Quality Index value by
//! piecewise-linear interpolation over fixed regulatory breakpoint tables.
//!
//! Key constraints:
//! - Tables are `'static` data, never mutated
//! - No heap allocation (builds under `no_std`)
//! - Pure, reentrant calculation
//!
//! ```
//! use airindex_core::{compute, AqiError};
//!
//! assert_eq!(compute(10.0, "PM2.5"), Ok(42));
//!
//! match compute(10.0, "XYZ") {
//!     Err(AqiError::InvalidPollutant { .. }) => {}, // Unknown identifier
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod breakpoints;
pub mod calculator;
pub mod category;
pub mod errors;
pub mod pollutant;

// Public API
pub use breakpoints::{breakpoints, Breakpoint};
pub use calculator::{assess, calculate, compute, Assessment};
pub use category::AqiCategory;
pub use errors::{AqiError, AqiResult};
pub use pollutant::Pollutant;

/// Highest AQI value any breakpoint table maps to.
pub const AQI_MAX: u16 = 500;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
