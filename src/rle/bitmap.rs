//! Encoded bitmap files and glyph rendering

use super::decode::{decode_with_limit, parse_pairs, read_line};
use crate::constants::{DEFAULT_DECODE_LIMIT, GLYPH_OFF, GLYPH_ON, MAX_LINE_LENGTH};
use crate::errors::{LabError, Result};
use rustc_hash::FxHashMap;
use std::io::BufRead;

/// Maps decoded cell values to printable glyphs
#[derive(Debug, Clone)]
pub struct Palette {
    glyphs: FxHashMap<i32, char>,
}

impl Palette {
    /// A palette with no glyphs at all
    pub fn empty() -> Self {
        Palette {
            glyphs: FxHashMap::default(),
        }
    }

    /// Set (or replace) the glyph for `value`
    pub fn with(mut self, value: i32, glyph: char) -> Self {
        self.glyphs.insert(value, glyph);
        self
    }

    pub fn glyph(&self, value: i32) -> Option<char> {
        self.glyphs.get(&value).copied()
    }

    /// Parse a `VALUE=CHAR` override such as `1=@`
    pub fn parse_override(arg: &str) -> Result<(i32, char)> {
        let (value, glyph) = arg
            .split_once('=')
            .ok_or_else(|| LabError::invalid(format!("glyph '{}' is not VALUE=CHAR", arg)))?;
        let value = value
            .trim()
            .parse::<i32>()
            .map_err(|_| LabError::invalid(format!("glyph value '{}' is not an integer", value)))?;

        let mut chars = glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok((value, ch)),
            _ => Err(LabError::invalid(format!(
                "glyph '{}' must be a single character",
                glyph
            ))),
        }
    }

    /// Render one decoded row; values without a glyph are skipped
    pub fn render_row(&self, row: &[i32]) -> String {
        row.iter().filter_map(|&v| self.glyph(v)).collect()
    }
}

impl Default for Palette {
    /// `1` draws [`GLYPH_ON`], `0` draws [`GLYPH_OFF`]
    fn default() -> Self {
        Palette::empty().with(1, GLYPH_ON).with(0, GLYPH_OFF)
    }
}

/// A decoded bitmap: one vector of cell values per row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    pub rows: Vec<Vec<i32>>,
}

impl Bitmap {
    /// Parse a bitmap file with the default decode limit
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        Self::parse_with_limit(reader, DEFAULT_DECODE_LIMIT)
    }

    /// Parse a bitmap file.
    ///
    /// The first line holds the row count, each following line one encoded
    /// row. Lines after the declared rows are ignored. `limit` bounds the
    /// decoded length of the whole file, summed over all rows.
    pub fn parse_with_limit<R: BufRead>(mut reader: R, limit: usize) -> Result<Self> {
        let header = read_line(&mut reader, MAX_LINE_LENGTH)?
            .ok_or_else(|| LabError::invalid("bitmap file is empty"))?;
        let count = header.trim().parse::<usize>().map_err(|_| {
            LabError::invalid(format!("row count '{}' is not a non-negative integer", header.trim()))
        })?;

        let mut rows = Vec::new();
        let mut used: usize = 0;
        for row in 0..count {
            let line = read_line(&mut reader, MAX_LINE_LENGTH)?.ok_or_else(|| {
                LabError::invalid(format!("expected {} rows, found {}", count, row))
            })?;
            let pairs = parse_pairs(&line)
                .map_err(|e| LabError::invalid(format!("row {}: {}", row + 1, e)))?;
            let decoded = decode_with_limit(&pairs, limit - used).map_err(|e| match e {
                LabError::ResourceExhausted { requested, .. } => LabError::ResourceExhausted {
                    requested: used.saturating_add(requested),
                    limit,
                },
                other => other,
            })?;
            used += decoded.len();
            rows.push(decoded);
        }

        Ok(Bitmap { rows })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// One text line per row
    pub fn render(&self, palette: &Palette) -> Vec<String> {
        self.rows.iter().map(|row| palette.render_row(row)).collect()
    }
}
