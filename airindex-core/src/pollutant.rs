//! Regulated pollutants
//!
//! The closed set of six substances that carry a breakpoint table. The
//! identifiers (`PM2.5`, `PM10`, `O3`, `NO2`, `SO2`, `CO`) are the exact
//! strings accepted by [`crate::compute`]; matching is case-sensitive.

use core::fmt;
use core::str::FromStr;

use crate::errors::AqiError;

/// Pollutant enumeration
///
/// Maps to a breakpoint table in [`crate::breakpoints`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Pollutant {
    /// Fine particulate matter, 24-hour average
    #[cfg_attr(feature = "serde", serde(rename = "PM2.5"))]
    Pm25 = 0,
    /// Coarse particulate matter, 24-hour average
    #[cfg_attr(feature = "serde", serde(rename = "PM10"))]
    Pm10 = 1,
    /// Ozone, 8-hour average
    #[cfg_attr(feature = "serde", serde(rename = "O3"))]
    O3 = 2,
    /// Nitrogen dioxide, 1-hour average
    #[cfg_attr(feature = "serde", serde(rename = "NO2"))]
    No2 = 3,
    /// Sulfur dioxide, 1-hour average
    #[cfg_attr(feature = "serde", serde(rename = "SO2"))]
    So2 = 4,
    /// Carbon monoxide, 8-hour average
    #[cfg_attr(feature = "serde", serde(rename = "CO"))]
    Co = 5,
}

impl Pollutant {
    /// All pollutants, in selection order
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Get the regulatory identifier
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }

    /// Get the unit the breakpoint concentrations are expressed in
    pub const fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::O3 | Pollutant::Co => "ppm",
            Pollutant::No2 | Pollutant::So2 => "ppb",
        }
    }

    /// Look up a pollutant by its exact identifier
    pub fn from_name(name: &str) -> Option<Pollutant> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AqiError::invalid_pollutant(s))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pollutant {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for pollutant in Pollutant::ALL {
            assert_eq!(pollutant.name().parse::<Pollutant>(), Ok(pollutant));
        }
    }

    #[test]
    fn selection_order() {
        let names: Vec<&str> = Pollutant::ALL.iter().map(Pollutant::name).collect();
        assert_eq!(names, ["PM2.5", "PM10", "O3", "NO2", "SO2", "CO"]);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("pm2.5".parse::<Pollutant>().is_err());
        assert!("o3".parse::<Pollutant>().is_err());
        assert!(" O3".parse::<Pollutant>().is_err());
    }

    #[test]
    fn units() {
        assert_eq!(Pollutant::Pm25.unit(), "µg/m³");
        assert_eq!(Pollutant::O3.unit(), "ppm");
        assert_eq!(Pollutant::So2.unit(), "ppb");
    }
}
