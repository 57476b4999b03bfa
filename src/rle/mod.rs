//! Run-length encoded bitmaps
//!
//! An encoded row is a flat sequence of `(run_length, value)` pairs. Decoding
//! expands each pair into `run_length` copies of `value`, pair by pair.
//!
//! - [`decode`]: pair expansion with validation and an allocation limit
//! - [`bitmap`]: the text file format (row count, then one encoded row per
//!   line) and glyph rendering
//!
//! # File format
//!
//! ```text
//! 2
//! 3,1,2,0
//! 1,0,4,1
//! ```
//!
//! decodes to the rows `[1, 1, 1, 0, 0]` and `[0, 1, 1, 1, 1]`.

pub mod bitmap;
pub mod decode;

pub use bitmap::{Bitmap, Palette};
pub use decode::{decode, decode_with_limit, parse_pairs, read_line};
