//! Pair parsing, line reading and run-length expansion

use crate::constants::DEFAULT_DECODE_LIMIT;
use crate::errors::{LabError, Result};
use std::io::{BufRead, Read};

/// Decode `encoded` with [`DEFAULT_DECODE_LIMIT`]
pub fn decode(encoded: &[i32]) -> Result<Vec<i32>> {
    decode_with_limit(encoded, DEFAULT_DECODE_LIMIT)
}

/// Expand `(run_length, value)` pairs into a flat sequence.
///
/// The total length is computed and checked before anything is allocated, and
/// the returned vector has no spare capacity. Errors:
/// - odd-length input or a negative run: [`LabError::InvalidArgument`]
/// - total above `limit` or not reservable: [`LabError::ResourceExhausted`],
///   reporting the running total at the first pair that crossed the limit
pub fn decode_with_limit(encoded: &[i32], limit: usize) -> Result<Vec<i32>> {
    if encoded.len() % 2 != 0 {
        return Err(LabError::invalid(format!(
            "encoded sequence has odd length {}",
            encoded.len()
        )));
    }

    let mut total: usize = 0;
    for (pair, chunk) in encoded.chunks_exact(2).enumerate() {
        let run = usize::try_from(chunk[0]).map_err(|_| {
            LabError::invalid(format!("pair {} has negative run length {}", pair, chunk[0]))
        })?;
        total = match total.checked_add(run) {
            Some(next) if next <= limit => next,
            next => {
                return Err(LabError::ResourceExhausted {
                    requested: next.unwrap_or(usize::MAX),
                    limit,
                })
            }
        };
    }

    let mut decoded = Vec::new();
    decoded
        .try_reserve_exact(total)
        .map_err(|_| LabError::ResourceExhausted {
            requested: total,
            limit,
        })?;
    for chunk in encoded.chunks_exact(2) {
        // run lengths were validated above
        decoded.extend(std::iter::repeat(chunk[1]).take(chunk[0] as usize));
    }
    Ok(decoded)
}

/// Extract comma-separated integers from `line`.
///
/// Whitespace around each token is ignored; an empty or blank line yields no
/// values. Any other token that is not an `i32` is rejected.
pub fn parse_pairs(line: &str) -> Result<Vec<i32>> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    line.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i32>()
                .map_err(|_| LabError::invalid(format!("'{}' is not an integer", token)))
        })
        .collect()
}

/// Read one line from `reader` without its `\n` (or `\r\n`) terminator.
///
/// Returns `None` at end of input. A line longer than `max_length` bytes is
/// rejected instead of being silently truncated.
pub fn read_line<R: BufRead>(reader: &mut R, max_length: usize) -> Result<Option<String>> {
    let mut buf = Vec::new();
    // room for the longest line plus a `\r\n` terminator
    let limit = max_length as u64 + 2;
    let read = reader.by_ref().take(limit).read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    if buf.len() > max_length {
        return Err(LabError::invalid(format!(
            "line exceeds {} characters",
            max_length
        )));
    }

    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| LabError::invalid("line is not valid UTF-8"))
}
