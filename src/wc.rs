//! Streaming word, line and character counter
//!
//! Characters are counted as bytes, lines as `\n` bytes, and words as maximal
//! runs of non-whitespace bytes (ASCII whitespace: space, tab, newline,
//! carriage return, form feed).

use std::fmt;
use std::io::{self, BufRead, BufReader, Read};

/// Totals produced by [`count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub words: usize,
    pub lines: usize,
    pub chars: usize,
}

impl Counts {
    /// Feed a chunk of input. `in_word` carries state across chunks.
    fn feed(&mut self, chunk: &[u8], in_word: &mut bool) {
        self.chars += chunk.len();
        for &byte in chunk {
            if byte == b'\n' {
                self.lines += 1;
            }
            if byte.is_ascii_whitespace() {
                *in_word = false;
            } else if !*in_word {
                *in_word = true;
                self.words += 1;
            }
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word Count: {}", self.words)?;
        writeln!(f, "Line Count: {}", self.lines)?;
        writeln!(f, "Character Count: {}", self.chars)
    }
}

/// Count words, lines and characters until end of input
pub fn count<R: Read>(reader: R) -> io::Result<Counts> {
    let mut reader = BufReader::new(reader);
    let mut counts = Counts::default();
    let mut in_word = false;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            break;
        }
        let consumed = chunk.len();
        counts.feed(chunk, &mut in_word);
        reader.consume(consumed);
    }

    Ok(counts)
}

/// Count an in-memory string
pub fn count_str(text: &str) -> Counts {
    let mut counts = Counts::default();
    counts.feed(text.as_bytes(), &mut false);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(count("".as_bytes()).unwrap(), Counts::default());
    }

    #[test]
    fn test_simple_line() {
        let counts = count("a b\n".as_bytes()).unwrap();
        assert_eq!(
            counts,
            Counts {
                words: 2,
                lines: 1,
                chars: 4
            }
        );
    }

    #[test]
    fn test_whitespace_runs() {
        let counts = count_str("  hello \t\t world\n\n  again");
        assert_eq!(counts.words, 3);
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.chars, 25);
    }

    #[test]
    fn test_only_whitespace() {
        let counts = count_str(" \n\t \n");
        assert_eq!(counts.words, 0);
        assert_eq!(counts.lines, 2);
    }

    /// Hands out one byte per read call
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((&byte, rest)), Some(slot)) => {
                    *slot = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_word_spanning_chunks() {
        let counts = count(Trickle(b"ab  cd\nef")).unwrap();
        assert_eq!(counts.words, 3);
        assert_eq!(counts.lines, 1);
        assert_eq!(counts.chars, 9);
    }

    #[test]
    fn test_report_format() {
        let text = count_str("one two\n").to_string();
        assert_eq!(text, "Word Count: 2\nLine Count: 1\nCharacter Count: 8\n");
    }
}
