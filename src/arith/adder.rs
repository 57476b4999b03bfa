//! Fixed-width binary adder
//!
//! A [`Word`] holds [`WORD_BITS`] binary digits, most significant first, so
//! `"00000001"` is the value 1. [`sum`] adds two words with the grade-school
//! long addition algorithm: walk from the least significant digit carrying a
//! single bit of state.
//!
//! # Carry state machine
//!
//! ```text
//! x y carry | out carry'
//! ----------+-----------
//! 0 0   0   |  0    0
//! 1 0   0   |  1    0      (either order)
//! 1 1   0   |  0    1
//! 0 0   1   |  1    0
//! 1 0   1   |  0    1      (either order)
//! 1 1   1   |  1    1
//! ```
//!
//! i.e. `out = x ^ y ^ carry` and `carry' = majority(x, y, carry)`.

use crate::constants::WORD_BITS;
use crate::errors::{LabError, Result};
use std::fmt;

/// Eight binary digits, most significant at index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Word([u8; WORD_BITS]);

impl Word {
    /// Build a word from digits that must each be 0 or 1
    pub fn from_bits(bits: [u8; WORD_BITS]) -> Result<Self> {
        if let Some(pos) = bits.iter().position(|&b| b > 1) {
            return Err(LabError::invalid(format!(
                "digit {} at position {} is not binary",
                bits[pos], pos
            )));
        }
        Ok(Word(bits))
    }

    /// Parse a string of exactly eight `'0'`/`'1'` characters
    pub fn parse(text: &str) -> Result<Self> {
        let count = text.chars().count();
        if count != WORD_BITS {
            return Err(LabError::invalid(format!(
                "'{}' has {} digits, expected {}",
                text, count, WORD_BITS
            )));
        }

        let mut bits = [0u8; WORD_BITS];
        for (slot, ch) in bits.iter_mut().zip(text.chars()) {
            *slot = match ch {
                '0' => 0,
                '1' => 1,
                other => {
                    return Err(LabError::invalid(format!(
                        "'{}' contains non-binary character '{}'",
                        text, other
                    )))
                }
            };
        }
        Ok(Word(bits))
    }

    /// Binary representation of `value`
    pub fn from_value(value: u8) -> Self {
        let mut bits = [0u8; WORD_BITS];
        for (i, slot) in bits.iter_mut().enumerate() {
            *slot = (value >> (WORD_BITS - 1 - i)) & 1;
        }
        Word(bits)
    }

    /// Unsigned value of the digits
    pub fn value(&self) -> u8 {
        self.0.iter().fold(0u8, |acc, &bit| (acc << 1) | bit)
    }

    pub fn bits(&self) -> &[u8; WORD_BITS] {
        &self.0
    }
}

impl fmt::Display for Word {
    /// Digits left to right with no separators
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Outcome of adding two words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum {
    /// Low eight bits of the sum
    pub word: Word,
    /// A carry escaped the most significant digit
    pub overflow: bool,
}

impl Sum {
    /// Text printed by the `sum` program: the digits, then `overflow` if set
    pub fn report(&self) -> String {
        if self.overflow {
            format!("{}\noverflow\n", self.word)
        } else {
            format!("{}\n", self.word)
        }
    }
}

/// Ripple-carry addition of `x` and `y`
pub fn sum(x: &Word, y: &Word) -> Sum {
    let mut out = [0u8; WORD_BITS];
    let mut carry = 0u8;

    for i in (0..WORD_BITS).rev() {
        let (a, b) = (x.0[i], y.0[i]);
        out[i] = a ^ b ^ carry;
        carry = (a & b) | (a & carry) | (b & carry);
    }

    Sum {
        word: Word(out),
        overflow: carry == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let w = Word::parse("00000101").unwrap();
        assert_eq!(w.value(), 5);
        assert_eq!(w.bits(), &[0, 0, 0, 0, 0, 1, 0, 1]);
        assert_eq!(w.to_string(), "00000101");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Word::parse("0101").is_err());
        assert!(Word::parse("000000001").is_err());
        assert!(Word::parse("0000000x").is_err());
        assert!(Word::parse("").is_err());
    }

    #[test]
    fn test_from_bits_validates_digits() {
        assert!(Word::from_bits([0, 0, 0, 0, 0, 0, 0, 2]).is_err());
        let w = Word::from_bits([1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(w.value(), 128);
    }

    #[test]
    fn test_simple_sum() {
        let s = sum(&Word::from_value(3), &Word::from_value(5));
        assert_eq!(s.word.to_string(), "00001000");
        assert!(!s.overflow);
        assert_eq!(s.report(), "00001000\n");
    }

    #[test]
    fn test_overflow_sum() {
        let s = sum(&Word::parse("11111111").unwrap(), &Word::parse("00000001").unwrap());
        assert_eq!(s.word.value(), 0);
        assert!(s.overflow);
        assert_eq!(s.report(), "00000000\noverflow\n");
    }

    #[test]
    fn test_all_ones_plus_all_ones() {
        let ones = Word::from_value(255);
        let s = sum(&ones, &ones);
        assert_eq!(s.word.to_string(), "11111110");
        assert!(s.overflow);
    }
}
