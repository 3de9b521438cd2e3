//! Regulatory AQI Breakpoint Tables
//!
//! ## Background
//!
//! An AQI breakpoint pairs a concentration sub-range with the AQI sub-range it
//! maps onto. Inside one breakpoint the index is a straight line:
//!
//! ```text
//! I = (I_hi - I_lo) / (C_hi - C_lo) × (C - C_lo) + I_lo
//!
//! Where:
//! - C = measured concentration
//! - C_lo, C_hi = concentration bounds of the breakpoint containing C
//! - I_lo, I_hi = AQI bounds of that breakpoint
//! ```
//!
//! Chaining the breakpoints of one pollutant gives a piecewise-linear curve
//! from 0 up to the top of the table (500, or 300 for ozone).
//!
//! ## Table Layout
//!
//! ```text
//! Pollutant | Rows | Unit   | Top concentration
//! ----------|------|--------|------------------
//! PM2.5     | 7    | µg/m³  | 500.4
//! PM10      | 7    | µg/m³  | 604
//! O3        | 5    | ppm    | 0.200
//! NO2       | 7    | ppb    | 2049
//! SO2       | 7    | ppb    | 1004
//! CO        | 7    | ppm    | 50.4
//! ```
//!
//! Rows are ascending and never overlap. Published bounds are truncated to
//! the reporting precision of each pollutant, so consecutive rows leave a
//! small gap (e.g. PM2.5 12.0 → 12.1). A concentration inside a gap matches no
//! row.
//!
//! All tables are compile-time constants selected by a `match` on [`Pollutant`]:
//! nothing is built or mutated at runtime.

use crate::pollutant::Pollutant;

/// One interpolation interval of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Lowest concentration of the interval (inclusive)
    pub c_low: f64,
    /// Highest concentration of the interval (inclusive)
    pub c_high: f64,
    /// AQI at `c_low`
    pub aqi_low: u16,
    /// AQI at `c_high`
    pub aqi_high: u16,
}

impl Breakpoint {
    /// Create a breakpoint row
    pub const fn new(c_low: f64, c_high: f64, aqi_low: u16, aqi_high: u16) -> Self {
        Self { c_low, c_high, aqi_low, aqi_high }
    }

    /// Check whether a concentration lies inside the interval, bounds included
    ///
    /// NaN is never contained.
    pub fn contains(&self, concentration: f64) -> bool {
        self.c_low <= concentration && concentration <= self.c_high
    }

    /// Linear interpolation of the AQI at `concentration`, before rounding
    pub fn interpolate(&self, concentration: f64) -> f64 {
        let aqi_span = f64::from(self.aqi_high) - f64::from(self.aqi_low);
        let c_span = self.c_high - self.c_low;
        aqi_span / c_span * (concentration - self.c_low) + f64::from(self.aqi_low)
    }
}

/// Get the ordered breakpoint table for a pollutant
pub const fn breakpoints(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25_BREAKPOINTS,
        Pollutant::Pm10 => &PM10_BREAKPOINTS,
        Pollutant::O3 => &O3_BREAKPOINTS,
        Pollutant::No2 => &NO2_BREAKPOINTS,
        Pollutant::So2 => &SO2_BREAKPOINTS,
        Pollutant::Co => &CO_BREAKPOINTS,
    }
}

impl Pollutant {
    /// Get the breakpoint table for this pollutant
    pub const fn breakpoints(&self) -> &'static [Breakpoint] {
        breakpoints(*self)
    }

    /// Lowest and highest concentration covered by the table
    ///
    /// Gaps between rows are inside this span but still out of range.
    pub fn concentration_range(&self) -> (f64, f64) {
        let table = self.breakpoints();
        match (table.first(), table.last()) {
            (Some(first), Some(last)) => (first.c_low, last.c_high),
            _ => (0.0, 0.0),
        }
    }
}

const fn bp(c_low: f64, c_high: f64, aqi_low: u16, aqi_high: u16) -> Breakpoint {
    Breakpoint::new(c_low, c_high, aqi_low, aqi_high)
}

/// PM2.5, 24-hour (µg/m³)
const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0, 50),
    bp(12.1, 35.4, 51, 100),
    bp(35.5, 55.4, 101, 150),
    bp(55.5, 150.4, 151, 200),
    bp(150.5, 250.4, 201, 300),
    bp(250.5, 350.4, 301, 400),
    bp(350.5, 500.4, 401, 500),
];

/// PM10, 24-hour (µg/m³)
const PM10_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 154.0, 51, 100),
    bp(155.0, 254.0, 101, 150),
    bp(255.0, 354.0, 151, 200),
    bp(355.0, 424.0, 201, 300),
    bp(425.0, 504.0, 301, 400),
    bp(505.0, 604.0, 401, 500),
];

/// Ozone, 8-hour (ppm); the 8-hour table stops at AQI 300
const O3_BREAKPOINTS: [Breakpoint; 5] = [
    bp(0.000, 0.054, 0, 50),
    bp(0.055, 0.070, 51, 100),
    bp(0.071, 0.085, 101, 150),
    bp(0.086, 0.105, 151, 200),
    bp(0.106, 0.200, 201, 300),
];

/// NO2, 1-hour (ppb)
const NO2_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 53.0, 0, 50),
    bp(54.0, 100.0, 51, 100),
    bp(101.0, 360.0, 101, 150),
    bp(361.0, 649.0, 151, 200),
    bp(650.0, 1249.0, 201, 300),
    bp(1250.0, 1649.0, 301, 400),
    bp(1650.0, 2049.0, 401, 500),
];

/// SO2, 1-hour (ppb)
const SO2_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 35.0, 0, 50),
    bp(36.0, 75.0, 51, 100),
    bp(76.0, 185.0, 101, 150),
    bp(186.0, 304.0, 151, 200),
    bp(305.0, 604.0, 201, 300),
    bp(605.0, 804.0, 301, 400),
    bp(805.0, 1004.0, 401, 500),
];

/// CO, 8-hour (ppm)
const CO_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 4.4, 0, 50),
    bp(4.5, 9.4, 51, 100),
    bp(9.5, 12.4, 101, 150),
    bp(12.5, 15.4, 151, 200),
    bp(15.5, 30.4, 201, 300),
    bp(30.5, 40.4, 301, 400),
    bp(40.5, 50.4, 401, 500),
];
