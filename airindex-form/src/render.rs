//! Message text shown to the user

use airindex_core::Pollutant;

use crate::form::FormOutcome;

/// Form title
pub const TITLE: &str = "AQI Calculator";

/// Line under the title
pub const DESCRIPTION: &str =
    "Calculate the Air Quality Index (AQI) for a given pollutant concentration.";

/// Label of the trigger control
pub const TRIGGER_LABEL: &str = "Calculate AQI";

/// Label of the numeric field for the selected pollutant
pub fn concentration_label(pollutant: Pollutant) -> String {
    format!("Enter the concentration of {} (in µg/m³ or ppm):", pollutant)
}

/// Numbered selection list, marking the current choice
pub fn selection_list(options: &[Pollutant], selected: Pollutant) -> String {
    let mut out = String::from("Select the pollutant\n");
    for (idx, option) in options.iter().enumerate() {
        let marker = if *option == selected { '*' } else { ' ' };
        out.push_str(&format!(" {} {}) {} [{}]\n", marker, idx + 1, option, option.unit()));
    }
    out
}

/// Hint for text typed at the trigger instead of Enter
pub fn ignored_trigger_input(input: &str) -> String {
    format!("Input '{}' ignored: press Enter to calculate", input)
}

/// Success or error message for a calculation
pub fn outcome_message(outcome: &FormOutcome, decimals: usize) -> String {
    match outcome {
        FormOutcome::Success(assessment) => format!(
            "The AQI for {} with a concentration of {:.*} is {}.\n{}: {}",
            assessment.pollutant,
            decimals,
            assessment.concentration,
            assessment.aqi,
            assessment.category.label(),
            assessment.category.advisory(),
        ),
        FormOutcome::Failure(error) => format!("Error: {}", error),
    }
}
