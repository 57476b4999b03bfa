//! Error types shared by every exercise
//!
//! [`LabError`] covers the three failure kinds the programs can surface
//! (bad input, positions out of range, exhausted resources) plus I/O.
//! Each kind maps to a fixed process exit code through [`LabError::exit_code`].

use thiserror::Error;

/// Errors returned by library operations and program runners
#[derive(Debug, Error)]
pub enum LabError {
    /// Bad command-line input or malformed data
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A list or array position beyond the current length
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Requested allocation exceeds the configured limit or cannot be reserved
    #[error("resource exhausted: requested {requested} elements, limit is {limit}")]
    ResourceExhausted { requested: usize, limit: usize },

    /// File or stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabError {
    /// Shorthand for an [`LabError::InvalidArgument`] with a formatted message
    pub fn invalid(message: impl Into<String>) -> Self {
        LabError::InvalidArgument(message.into())
    }

    /// Process exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            LabError::InvalidArgument(_) => 1,
            LabError::Io(_) => 2,
            LabError::IndexOutOfRange { .. } => 3,
            LabError::ResourceExhausted { .. } => 4,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LabError>;
