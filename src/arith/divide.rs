//! Integer division with remainder

use crate::errors::{LabError, Result};
use std::fmt;

/// Result of dividing two integers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Division {
    /// Quotient truncated toward zero
    pub quotient: i32,
    /// Remainder with the sign of the dividend
    pub remainder: i32,
    /// Quotient computed in floating point, independent of the integer pair
    pub real_quotient: f64,
}

/// Divide `x` by `y`.
///
/// Quotient and remainder follow C semantics: `divide(-7, 2)` gives `-3` rem `-1`.
/// A zero divisor and `i32::MIN / -1` are rejected.
pub fn divide(x: i32, y: i32) -> Result<Division> {
    if y == 0 {
        return Err(LabError::invalid(format!("cannot divide {} by zero", x)));
    }
    let quotient = x
        .checked_div(y)
        .ok_or_else(|| LabError::invalid(format!("{} / {} overflows", x, y)))?;
    let remainder = x
        .checked_rem(y)
        .ok_or_else(|| LabError::invalid(format!("{} % {} overflows", x, y)))?;

    Ok(Division {
        quotient,
        remainder,
        real_quotient: f64::from(x) / f64::from(y),
    })
}

impl fmt::Display for Division {
    /// `printf("%4d rem %4d\n%8.3f\n", ...)` layout
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:4} rem {:4}\n{:8.3}\n",
            self.quotient, self.remainder, self.real_quotient
        )
    }
}
