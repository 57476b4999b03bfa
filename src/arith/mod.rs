//! Small numeric exercises
//!
//! - [`divide`]: truncating quotient and remainder plus a real quotient
//! - [`median`]: median of three by pairwise range tests
//! - [`twos`]: two's-complement subtraction overflow check
//! - [`adder`]: 8-bit ripple-carry adder over bit arrays
//!
//! All functions are pure. Inputs a C program would silently mishandle
//! (zero divisors, `i32::MIN / -1`, non-binary digits) are rejected with
//! [`LabError::InvalidArgument`](crate::errors::LabError::InvalidArgument).

pub mod adder;
pub mod divide;
pub mod median;
pub mod twos;

pub use adder::{sum, Sum, Word};
pub use divide::{divide, Division};
pub use median::median;
pub use twos::{check_subtraction, subtract_is_safe, Subtraction};
