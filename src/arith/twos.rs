//! Two's-complement subtraction overflow check
//!
//! `x - y` overflows exactly when the operands have different signs and the
//! wrapped difference takes the sign of `y`. Same-sign operands never overflow.

/// Outcome of a checked 32-bit subtraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtraction {
    /// The difference fits in an `i32`
    Safe(i32),
    /// The true difference lies outside the `i32` range
    Overflow,
}

impl Subtraction {
    pub fn is_safe(self) -> bool {
        matches!(self, Subtraction::Safe(_))
    }
}

/// Compute `x - y` and classify it by comparing sign bits
pub fn check_subtraction(x: i32, y: i32) -> Subtraction {
    let result = x.wrapping_sub(y);
    let operands_differ = (x < 0) != (y < 0);
    let result_flipped = (x < 0) != (result < 0);

    if operands_differ && result_flipped {
        Subtraction::Overflow
    } else {
        Subtraction::Safe(result)
    }
}

/// `true` (printed as `1`) when `x - y` is representable, `false` (`0`) on overflow
pub fn subtract_is_safe(x: i32, y: i32) -> bool {
    check_subtraction(x, y).is_safe()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_subtractions() {
        assert!(subtract_is_safe(1, 5));
        assert!(subtract_is_safe(-5, -1));
        assert!(subtract_is_safe(0, i32::MAX));
        assert!(subtract_is_safe(-1, i32::MAX));
        assert!(subtract_is_safe(i32::MIN, -1));
        assert_eq!(check_subtraction(3, 10), Subtraction::Safe(-7));
    }

    #[test]
    fn test_overflowing_subtractions() {
        assert!(!subtract_is_safe(i32::MIN, 1));
        assert!(!subtract_is_safe(0, i32::MIN));
        assert!(!subtract_is_safe(i32::MAX, -1));
        assert!(!subtract_is_safe(-2, i32::MAX));
        assert_eq!(check_subtraction(i32::MAX, i32::MIN), Subtraction::Overflow);
    }

    #[test]
    fn test_agrees_with_checked_sub() {
        let samples = [
            i32::MIN,
            i32::MIN + 1,
            -65_536,
            -1,
            0,
            1,
            65_536,
            i32::MAX - 1,
            i32::MAX,
        ];
        for &x in &samples {
            for &y in &samples {
                let expected = x.checked_sub(y);
                match check_subtraction(x, y) {
                    Subtraction::Safe(v) => assert_eq!(Some(v), expected, "{} - {}", x, y),
                    Subtraction::Overflow => assert_eq!(expected, None, "{} - {}", x, y),
                }
            }
        }
    }
}
