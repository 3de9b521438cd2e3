//! Form fields and the calculate action
//!
//! [`CalculatorForm`] holds the two field values (selected pollutant and
//! concentration) and turns a trigger into a [`FormOutcome`]. Field input is
//! validated here; the calculation itself is delegated to `airindex-core`.

use airindex_core::{assess, AqiError, Assessment, Pollutant};
use log::{debug, info, warn};
use thiserror::Error;

use crate::config::FormConfig;

/// Rejected field input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Selection is neither a list number nor a pollutant identifier
    #[error("Unknown selection '{0}': enter 1-6 or a pollutant name")]
    UnknownSelection(String),

    /// Concentration text is not a finite number
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Concentration below the field minimum
    #[error("Concentration {value} is below the minimum of {min}")]
    BelowMinimum {
        /// The rejected value
        value: f64,
        /// Field minimum
        min: f64,
    },
}

/// Result of pressing the calculate trigger
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// The core returned an index
    Success(Assessment),
    /// The core rejected the query
    Failure(AqiError),
}

impl FormOutcome {
    /// Check whether the calculation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, FormOutcome::Success(_))
    }
}

/// State of the single-screen form
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    config: FormConfig,
    pollutant: Pollutant,
    concentration: f64,
}

impl CalculatorForm {
    /// Create a form with fields set to the configured initial values
    pub fn new(config: FormConfig) -> Self {
        Self {
            pollutant: config.initial_pollutant,
            concentration: config.initial_concentration,
            config,
        }
    }

    /// Entries of the selection control, in display order
    pub fn options(&self) -> &'static [Pollutant] {
        &Pollutant::ALL
    }

    /// Currently selected pollutant
    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    /// Current value of the numeric field
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Settings the form was built with
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Select a pollutant by 1-based list number or by identifier
    pub fn select(&mut self, choice: &str) -> Result<Pollutant, InputError> {
        let choice = choice.trim();
        let by_number = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.options().get(idx).copied());

        let pollutant = by_number
            .or_else(|| Pollutant::from_name(choice))
            .ok_or_else(|| InputError::UnknownSelection(choice.to_string()))?;

        debug!("Selected {}", pollutant);
        self.pollutant = pollutant;
        Ok(pollutant)
    }

    /// Set the numeric field from text
    ///
    /// Only finite values at or above the configured minimum are accepted;
    /// on error the field keeps its previous value.
    pub fn enter_concentration(&mut self, text: &str) -> Result<f64, InputError> {
        let text = text.trim();
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotANumber(text.to_string()))?;

        if value < self.config.min_concentration {
            return Err(InputError::BelowMinimum {
                value,
                min: self.config.min_concentration,
            });
        }

        self.concentration = value;
        Ok(value)
    }

    /// Run the calculation for the current field values
    pub fn submit(&self) -> FormOutcome {
        info!(
            "Calculating AQI for {} at {}",
            self.pollutant, self.concentration
        );
        evaluate(self.pollutant, self.concentration)
    }
}

/// Calculate and wrap the result for display, logging rejections
pub fn evaluate(pollutant: Pollutant, concentration: f64) -> FormOutcome {
    match assess(concentration, pollutant) {
        Ok(assessment) => {
            debug!("{} -> AQI {} ({})", pollutant, assessment.aqi, assessment.category);
            FormOutcome::Success(assessment)
        }
        Err(error) => {
            warn!("Calculation rejected: {}", error);
            FormOutcome::Failure(error)
        }
    }
}

/// Calculate for a pollutant identifier that has not been validated yet
pub fn evaluate_named(pollutant: &str, concentration: f64) -> FormOutcome {
    match pollutant.parse::<Pollutant>() {
        Ok(pollutant) => evaluate(pollutant, concentration),
        Err(error) => {
            warn!("Calculation rejected: {}", error);
            FormOutcome::Failure(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults() {
        let form = CalculatorForm::new(FormConfig::default());
        assert_eq!(form.pollutant(), Pollutant::Pm25);
        assert_eq!(form.concentration(), 0.0);
        assert_eq!(form.options().len(), 6);
    }

    #[test]
    fn select_by_number_and_name() {
        let mut form = CalculatorForm::new(FormConfig::default());
        assert_eq!(form.select("3"), Ok(Pollutant::O3));
        assert_eq!(form.select(" CO "), Ok(Pollutant::Co));
        assert_eq!(form.pollutant(), Pollutant::Co);
    }

    #[test]
    fn select_rejects_unknown() {
        let mut form = CalculatorForm::new(FormConfig::default());
        assert!(matches!(form.select("0"), Err(InputError::UnknownSelection(_))));
        assert!(matches!(form.select("7"), Err(InputError::UnknownSelection(_))));
        assert!(matches!(form.select("XYZ"), Err(InputError::UnknownSelection(_))));
        assert_eq!(form.pollutant(), Pollutant::Pm25);
    }

    #[test]
    fn concentration_must_be_non_negative_number() {
        let mut form = CalculatorForm::new(FormConfig::default());
        assert_eq!(form.enter_concentration("12.5"), Ok(12.5));
        assert!(matches!(form.enter_concentration("-1"), Err(InputError::BelowMinimum { .. })));
        assert!(matches!(form.enter_concentration("abc"), Err(InputError::NotANumber(_))));
        assert!(matches!(form.enter_concentration("NaN"), Err(InputError::NotANumber(_))));
        assert!(matches!(form.enter_concentration("inf"), Err(InputError::NotANumber(_))));
        assert_eq!(form.concentration(), 12.5);
    }

    #[test]
    fn submit_success_and_failure() {
        let mut form = CalculatorForm::new(FormConfig::default());
        form.enter_concentration("10").unwrap();
        match form.submit() {
            FormOutcome::Success(assessment) => assert_eq!(assessment.aqi, 42),
            other => panic!("unexpected {:?}", other),
        }

        form.select("O3").unwrap();
        form.enter_concentration("1000").unwrap();
        assert!(matches!(
            form.submit(),
            FormOutcome::Failure(AqiError::ConcentrationOutOfRange { .. })
        ));
    }

    #[test]
    fn evaluate_named_reports_invalid_pollutant() {
        assert!(matches!(
            evaluate_named("XYZ", 10.0),
            FormOutcome::Failure(AqiError::InvalidPollutant { .. })
        ));
        assert!(evaluate_named("PM10", 100.0).is_success());
    }
}
