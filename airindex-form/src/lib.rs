//! Interactive form for the AirIndex AQI calculator
//!
//! A single screen with three controls: a pollutant selection, a
//! non-negative concentration field and a calculate trigger. Each trigger
//! calls [`airindex_core`] synchronously and prints either the index or the
//! error reason. No state survives between calculations beyond the two field
//! values.
//!
//! ```
//! use std::io::Cursor;
//! use airindex_form::{FormConfig, Session};
//!
//! // Pick PM2.5, enter 10, calculate, quit
//! let input = Cursor::new("1\n10\n\nq\n");
//! let mut session = Session::new(input, Vec::new(), FormConfig::default());
//! assert_eq!(session.run().unwrap(), 1);
//!
//! let output = String::from_utf8(session.into_output()).unwrap();
//! assert!(output.contains("The AQI for PM2.5 with a concentration of 10.00 is 42."));
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod form;
pub mod render;
pub mod session;

pub use config::FormConfig;
pub use form::{CalculatorForm, FormOutcome, InputError};
pub use session::{run_once, OneShotStatus, Session};
