//! Shared fixtures for integration tests
//!
//! - Reference readings with known AQI values
//! - proptest strategies over the covered concentration ranges

#![allow(dead_code)]

use airindex_core::{Breakpoint, Pollutant};
use proptest::prelude::*;

/// A reading with its expected index
#[derive(Debug, Clone, Copy)]
pub struct ReferenceReading {
    pub pollutant: &'static str,
    pub concentration: f64,
    pub expected_aqi: u16,
}

/// Hand-checked readings: `(aqi_high - aqi_low) / (c_high - c_low) * (c - c_low) + aqi_low`
pub const REFERENCE_READINGS: &[ReferenceReading] = &[
    // (0.0, 12.0, 0, 50): 41.67
    ReferenceReading { pollutant: "PM2.5", concentration: 10.0, expected_aqi: 42 },
    // (55, 154, 51, 100): 73.27
    ReferenceReading { pollutant: "PM10", concentration: 100.0, expected_aqi: 73 },
    // (0.055, 0.070, 51, 100): 67.33
    ReferenceReading { pollutant: "O3", concentration: 0.06, expected_aqi: 67 },
    // (101, 360, 101, 150): 118.97
    ReferenceReading { pollutant: "NO2", concentration: 196.0, expected_aqi: 119 },
    // (76, 185, 101, 150): 112.24
    ReferenceReading { pollutant: "SO2", concentration: 101.0, expected_aqi: 112 },
    // (4.5, 9.4, 51, 100): 67.0
    ReferenceReading { pollutant: "CO", concentration: 6.1, expected_aqi: 67 },
];

/// Any pollutant
pub fn any_pollutant() -> impl Strategy<Value = Pollutant> {
    prop::sample::select(Pollutant::ALL.to_vec())
}

/// A pollutant together with one of its rows
pub fn any_row() -> impl Strategy<Value = (Pollutant, Breakpoint)> {
    any_pollutant().prop_flat_map(|pollutant| {
        prop::sample::select(pollutant.breakpoints().to_vec())
            .prop_map(move |row| (pollutant, row))
    })
}

/// A concentration inside one of the pollutant's rows
pub fn covered_concentration(pollutant: Pollutant) -> impl Strategy<Value = f64> {
    prop::sample::select(pollutant.breakpoints().to_vec())
        .prop_flat_map(|row| row.c_low..=row.c_high)
}

/// A pollutant and two ordered concentrations, each inside some row
pub fn ordered_covered_pair() -> impl Strategy<Value = (Pollutant, f64, f64)> {
    any_pollutant().prop_flat_map(|pollutant| {
        (
            Just(pollutant),
            covered_concentration(pollutant),
            covered_concentration(pollutant),
        )
            .prop_map(|(pollutant, a, b)| if a <= b { (pollutant, a, b) } else { (pollutant, b, a) })
    })
}
