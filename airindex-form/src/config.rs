//! Form defaults
//!
//! Compile-time settings only; nothing is read from files or the environment.

use airindex_core::Pollutant;

/// Settings for the calculator form
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Selection shown before the user picks one
    pub initial_pollutant: Pollutant,

    /// Value of the numeric field before the user types one
    pub initial_concentration: f64,

    /// Lowest value the numeric field accepts
    pub min_concentration: f64,

    /// Decimal places used when echoing concentrations
    pub decimals: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_pollutant: Pollutant::ALL[0],
            initial_concentration: 0.0,
            min_concentration: 0.0,
            decimals: 2,
        }
    }
}

impl FormConfig {
    /// Start the form on a different pollutant
    pub fn with_pollutant(mut self, pollutant: Pollutant) -> Self {
        self.initial_pollutant = pollutant;
        self
    }

    /// Echo concentrations with `decimals` places
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}
