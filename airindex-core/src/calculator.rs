//! AQI calculation
//!
//! Maps `(concentration, pollutant)` to an integer index:
//!
//! 1. Select the breakpoint table of the pollutant
//! 2. Scan it in ascending order for the first row with
//!    `c_low <= concentration <= c_high`
//! 3. Interpolate linearly inside that row
//! 4. Round to the nearest integer (halves away from zero)
//!
//! First match wins, so a concentration sitting on a shared edge of two rows
//! would take the lower row. No published table has shared edges today.
//!
//! Everything here is pure and reentrant: the tables are constant data and
//! there is no shared mutable state.
//!
//! ```
//! use airindex_core::{assess, calculate, compute, AqiCategory, Pollutant};
//!
//! assert_eq!(compute(100.0, "PM10"), Ok(73));
//! assert_eq!(calculate(0.06, Pollutant::O3), Ok(67));
//!
//! let assessment = assess(10.0, Pollutant::Pm25)?;
//! assert_eq!(assessment.aqi, 42);
//! assert_eq!(assessment.category, AqiCategory::Good);
//! # Ok::<(), airindex_core::AqiError>(())
//! ```

use crate::{
    breakpoints::{breakpoints, Breakpoint},
    category::AqiCategory,
    errors::{AqiError, AqiResult},
    pollutant::Pollutant,
};

/// Compute the AQI for a concentration of a pollutant given by identifier
///
/// Fails with [`AqiError::InvalidPollutant`] for an unknown identifier and
/// [`AqiError::ConcentrationOutOfRange`] when no breakpoint contains the
/// concentration.
pub fn compute(concentration: f64, pollutant: &str) -> AqiResult<u16> {
    let pollutant: Pollutant = pollutant.parse()?;
    calculate(concentration, pollutant)
}

/// Compute the AQI for a concentration of an already-parsed pollutant
pub fn calculate(concentration: f64, pollutant: Pollutant) -> AqiResult<u16> {
    let row = find_breakpoint(breakpoints(pollutant), concentration).ok_or_else(|| {
        log_debug!("{} concentration {} matches no breakpoint", pollutant, concentration);
        AqiError::ConcentrationOutOfRange { pollutant, concentration }
    })?;

    let aqi = round_aqi(row.interpolate(concentration));
    log_debug!(
        "{} concentration {} -> AQI {} (row {}-{})",
        pollutant, concentration, aqi, row.c_low, row.c_high
    );

    Ok(aqi)
}

/// Compute and classify in one step
pub fn assess(concentration: f64, pollutant: Pollutant) -> AqiResult<Assessment> {
    let aqi = calculate(concentration, pollutant)?;
    Ok(Assessment {
        pollutant,
        concentration,
        aqi,
        category: AqiCategory::from_aqi(aqi),
    })
}

/// Outcome of a successful calculation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Pollutant the concentration was measured for
    pub pollutant: Pollutant,
    /// Concentration as given
    pub concentration: f64,
    /// Rounded index
    pub aqi: u16,
    /// Health band of `aqi`
    pub category: AqiCategory,
}

/// First row containing the concentration, scanning in ascending order
fn find_breakpoint(table: &[Breakpoint], concentration: f64) -> Option<&Breakpoint> {
    table.iter().find(|row| row.contains(concentration))
}

/// Round to the nearest integer index
///
/// Inputs come from a row that was matched, so they are finite and inside
/// `[aqi_low, aqi_high]` up to floating-point noise.
fn round_aqi(raw: f64) -> u16 {
    libm::round(raw) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(compute(10.0, "PM2.5"), Ok(42));
        assert_eq!(compute(100.0, "PM10"), Ok(73));
        assert_eq!(compute(0.06, "O3"), Ok(67));
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            compute(-1.0, "PM2.5"),
            Err(AqiError::ConcentrationOutOfRange { pollutant: Pollutant::Pm25, .. })
        ));
        assert!(matches!(
            compute(1000.0, "O3"),
            Err(AqiError::ConcentrationOutOfRange { pollutant: Pollutant::O3, .. })
        ));
    }

    #[test]
    fn invalid_pollutant() {
        assert_eq!(compute(10.0, "XYZ"), Err(AqiError::invalid_pollutant("XYZ")));
    }

    #[test]
    fn pollutant_checked_before_concentration() {
        assert!(matches!(compute(-5.0, "XYZ"), Err(AqiError::InvalidPollutant { .. })));
    }

    #[test]
    fn gap_between_rows_is_out_of_range() {
        // PM2.5 rows are 0.0-12.0 and 12.1-35.4
        assert!(matches!(
            calculate(12.05, Pollutant::Pm25),
            Err(AqiError::ConcentrationOutOfRange { .. })
        ));
    }

    #[test]
    fn non_finite_is_out_of_range() {
        assert!(calculate(f64::NAN, Pollutant::Co).is_err());
        assert!(calculate(f64::INFINITY, Pollutant::Co).is_err());
        assert!(calculate(f64::NEG_INFINITY, Pollutant::Co).is_err());
    }

    #[test]
    fn top_edges() {
        assert_eq!(calculate(500.4, Pollutant::Pm25), Ok(500));
        assert_eq!(calculate(0.200, Pollutant::O3), Ok(300));
        assert!(calculate(500.5, Pollutant::Pm25).is_err());
    }

    #[test]
    fn first_match_wins_on_shared_edge() {
        let table = [
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(10.0, 20.0, 51, 100),
        ];
        let row = find_breakpoint(&table, 10.0).map(|row| row.aqi_high);
        assert_eq!(row, Some(50));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_aqi(41.5), 42);
        assert_eq!(round_aqi(42.5), 43);
        assert_eq!(round_aqi(41.49), 41);
    }

    #[test]
    fn assessment_carries_category() {
        let assessment = assess(40.0, Pollutant::Pm25).unwrap();
        assert_eq!(assessment.aqi, 112);
        assert_eq!(assessment.category, AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(assessment.concentration, 40.0);
    }
}
