/// Round to two decimal places, halves away from zero.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format with exactly two decimals after rounding halves away from zero.
pub fn format_hundredths(value: f64) -> String {
    format!("{:.2}", round_to_hundredths(value))
}
