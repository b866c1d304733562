//! Error types.
//!
//! Division by zero and an unsupported print base are reported as
//! ordinary `Result`s rather than treated as unrecoverable programming
//! errors, so tests can probe the failure without tearing down the
//! process, and so the CLI can report a clean message.

use thiserror::Error;

/// Errors from the fatal-in-the-original-engine category.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrCalcError {
    /// `divmod`/`div`/`rem` was asked to divide by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A base outside `{2, 8, 10, 16}` was requested (only reachable
    /// from string-configured call sites such as the CLI; the library's
    /// own `Base` enum cannot hold an unsupported value).
    #[error("unsupported base: {0}")]
    UnsupportedBase(u32),
}

/// Errors from [`crate::ingress::from_str`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside `[0-9A-Fa-f]` appeared in the digit string.
    #[error("invalid digit {digit:?} at offset {offset}")]
    InvalidDigit { digit: char, offset: usize },
    /// A digit was syntactically valid but `>= base`.
    #[error("digit {digit:?} at offset {offset} is out of range for base {base}")]
    DigitOutOfRange { digit: char, offset: usize, base: u32 },
    /// The digit string was empty.
    #[error("empty digit string")]
    EmptyInput,
}
