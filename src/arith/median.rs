//! Median of three values

/// Median of `x`, `y` and `z`.
///
/// Checks whether `y`, then `x`, lies between the other two; otherwise the
/// answer is `z`. A NaN input fails every range test and falls through to `z`.
pub fn median(x: f64, y: f64, z: f64) -> f64 {
    if (x <= y && y <= z) || (z <= y && y <= x) {
        y
    } else if (y <= x && x <= z) || (z <= x && x <= y) {
        x
    } else {
        z
    }
}
