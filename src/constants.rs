// Constants shared by the exercises

/// Width of the words handled by the binary adder
pub const WORD_BITS: usize = 8;

/// Upper bound on the number of values a single run-length decode may produce
/// Keeps a hostile encoding like `2147483647,1` from allocating gigabytes
pub const DEFAULT_DECODE_LIMIT: usize = 16 * 1024 * 1024;

/// Longest encoded bitmap line accepted, not counting the terminator
pub const MAX_LINE_LENGTH: usize = 4096;

/// Glyph printed for a set bitmap cell
pub const GLYPH_ON: char = '#';

/// Glyph printed for a clear bitmap cell
pub const GLYPH_OFF: char = ' ';

/// Insertion index used by the list demo when none is given
pub const DEFAULT_LIST_INDEX: usize = 5;
