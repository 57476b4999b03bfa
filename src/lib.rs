//! # Introduction
//!
//! labkit collects a handful of classic systems-programming exercises behind
//! one command-line tool and a small library. The exercises share no state;
//! each module stands alone.
//!
//! ## Modules
//!
//! 1. [`list`]: owned singly-linked integer list with splice
//!    ([`list::IntList::insert_all`]) and split ([`list::IntList::split_at`]).
//! 2. [`rle`]: run-length decoding and the encoded bitmap file format.
//! 3. [`arith`]: integer division, median of three, two's-complement
//!    subtraction check and an 8-bit ripple-carry adder.
//! 4. [`wc`]: streaming word/line/character counter.
//! 5. [`cli`]: argument handling and one runner per program.
//! 6. [`ui`]: ratatui bitmap viewer; not part of the stable library API.
//!
//! ## Errors
//!
//! Fallible operations return [`errors::Result`]. Caller mistakes (bad input,
//! indices past the end, oversized decodes) are errors, never panics.

pub mod arith;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod list;
pub mod rle;
pub mod ui;
pub mod wc;

pub use errors::{LabError, Result};
