//! # `strcalc`
//!
//! A fixed-width, nibble-addressed arbitrary-precision integer
//! calculator for two's-complement values, the kind of engine an
//! optimizing compiler's constant-folding pass leans on to evaluate
//! target-width arithmetic on the host.
//!
//! ## Architecture
//!
//! Every value is a [`buffer::Buffer`]: a little-endian `Vec` of
//! nibbles (`0..=15`), sized to `precision / 2` nibbles by the owning
//! [`calculator::Calculator`] — double the `precision / 4` nibbles a
//! single value needs, so multiplication has headroom for a full
//! double-width product before truncation.
//!
//! A [`calculator::Calculator`] is constructed once per precision and
//! then threaded through every operation:
//! * [`ingress`] builds a `Buffer` from a host integer, raw bytes, a
//!   bit window, or a digit string.
//! * [`arith`] adds, subtracts, negates, multiplies, and divides.
//! * [`bitwise`] provides the nibble-parallel boolean operators.
//! * [`shift`] provides logical/arithmetic shifts with bit-loss carry
//!   reporting.
//! * [`inspect`] answers read-only questions: sign, individual bits,
//!   population count, highest/lowest set bit, comparison.
//! * [`extremes`] generates the minimum/maximum value of a bit width
//!   and truncates or sign-extends an existing value to a new one.
//! * [`egress`] reads a `Buffer` back out as a host integer, raw
//!   bytes, or a printable string in binary, octal, decimal, or hex.
//!
//! Carry/overflow/remainder-nonzero flags are returned directly by the
//! operation that produces them; [`calculator::Calculator::carry_flag`]
//! additionally mirrors the most recent one for callers migrating code
//! written against a single persistent flag.
//!
//! ## Errors
//!
//! Conditions that would otherwise be fatal programming errors —
//! division by zero, an unsupported print base — surface here as
//! ordinary [`error::StrCalcError`] values instead. Parsing a digit
//! string can additionally fail with [`error::ParseError`].

pub mod arith;
pub mod bitwise;
pub mod buffer;
pub mod calculator;
pub mod cli;
pub mod egress;
pub mod error;
pub mod extremes;
pub mod ingress;
pub mod inspect;
pub mod shift;
mod tables;

pub use buffer::{Buffer, Word};
pub use calculator::{Base, Calculator, Endian, Sign};
pub use error::{ParseError, StrCalcError};
