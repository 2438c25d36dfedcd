/// Format a price for display, e.g. `$512.34`.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a percentage with an explicit sign on gains, e.g. `+8.10%`.
pub fn format_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(format_currency(512.345), "$512.35");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn percent_signs_gains_only() {
        assert_eq!(format_percent(8.1), "+8.10%");
        assert_eq!(format_percent(-25.0), "-25.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
