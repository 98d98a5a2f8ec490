/// Rounds a value to a fixed number of decimal places, halves away from zero.
///
/// # Arguments
/// - `value`: The value to round.
/// - `decimals`: The number of decimal places to keep.
///
/// # Returns
/// - An `f64` holding the rounded value. Non-finite inputs are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Rounds a mass to the centi-kilogram, the resolution of the weighing records.
pub fn round_mass(value: f64) -> f64 { round_to(value, 2) }

/// Rounds a pilot mass boundary to one decimal.
pub fn round_pilot_mass(value: f64) -> f64 { round_to(value, 1) }

/// Returns the smallest of the given values together with its index.
///
/// The first occurrence wins ties, so callers list their bounds in order of precedence.
///
/// # Returns
/// - `None` if `values` is empty.
pub fn min_with_index(values: &[f64]) -> Option<(f64, usize)> {
    values.iter().enumerate().fold(None, |acc, (i, &v)| match acc {
        Some((best, _)) if best <= v => acc,
        _ => Some((v, i)),
    })
}

/// Returns the largest of the given values together with its index.
///
/// The first occurrence wins ties.
///
/// # Returns
/// - `None` if `values` is empty.
pub fn max_with_index(values: &[f64]) -> Option<(f64, usize)> {
    values.iter().enumerate().fold(None, |acc, (i, &v)| match acc {
        Some((best, _)) if best >= v => acc,
        _ => Some((v, i)),
    })
}
