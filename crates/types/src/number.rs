//! Minimal decimal rendering for content-stream operands.

/// Formats a number with at most four decimal places, dropping trailing zeros
/// and a dangling decimal point.
///
/// Small negative values round to `-0`, which PDF readers accept.
pub fn number_to_str(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Rounds to eight decimal places. Used to absorb floating-point noise before
/// operations whose domain is bounded (`acos`, `sqrt`, `ceil`).
pub fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}
