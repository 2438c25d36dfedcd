use crate::models::{RangeSelection, DEFAULT_RANGE};

/// Print the selector help: available windows and loop commands.
pub fn execute() {
    let tags = RangeSelection::ALL_RANGES
        .iter()
        .map(|range| range.tag())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Select a window by tag: {}", tags);
    println!(
        "Unknown tags fall back to {}. Other commands: help, quit",
        DEFAULT_RANGE.tag()
    );
}
