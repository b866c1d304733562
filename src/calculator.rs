//! The `Calculator`: owns the precision, the scratch buffer, and the
//! legacy-compatibility carry flag.

use std::cell::{Cell, Ref, RefCell};

use crate::buffer::Buffer;

/// Sign of a value being constructed or printed, passed separately from
/// the magnitude the way `sc_val_from_str`'s `sign` parameter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Byte order for [`crate::ingress`]'s `from_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Printable/parseable radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Bin,
    Oct,
    Dec,
    HexLower,
    HexUpper,
}

impl Base {
    /// Numeric radix (2, 8, 10, or 16).
    pub fn radix(self) -> u32 {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::HexLower | Base::HexUpper => 16,
        }
    }

    /// Parse a radix the way the CLI accepts `--base 2|8|10|16`.
    ///
    /// Hex always parses to [`Base::HexLower`]; callers who want
    /// upper-case digits ask for it explicitly via `--upper`.
    pub fn from_radix(radix: u32) -> Result<Self, crate::error::StrCalcError> {
        match radix {
            2 => Ok(Base::Bin),
            8 => Ok(Base::Oct),
            10 => Ok(Base::Dec),
            16 => Ok(Base::HexLower),
            other => Err(crate::error::StrCalcError::UnsupportedBase(other)),
        }
    }
}

/// The calculator engine: a fixed precision, a scratch [`Buffer`], an
/// output string buffer, and a carry-flag compatibility cell.
///
/// Not `Sync` (owns `RefCell`/`Cell`): share one per thread rather than
/// across threads. See the crate's concurrency notes in `SPEC_FULL.md`.
pub struct Calculator {
    precision: u32,
    n: usize,
    scratch: RefCell<Buffer>,
    out_string: RefCell<String>,
    carry: Cell<bool>,
}

impl Calculator {
    /// Construct a calculator for values up to `precision` bits wide.
    /// `precision` is rounded up to the next multiple of 4. Panics if
    /// `precision == 0`: a zero-width calculator is a caller bug, not a
    /// representable configuration (see `DESIGN.md`).
    pub fn new(precision: u32) -> Self {
        assert!(precision > 0, "precision must be nonzero");
        let precision = (precision + 3) & !3;
        // N = precision / 2 nibbles: double the precision/4 nibbles a
        // single value needs, so multiply has headroom for a full
        // double-width product before truncation.
        let n = (precision / 2) as usize;
        log::debug!("Calculator::new(precision={precision}) -> n={n} nibbles");
        Calculator {
            precision,
            n,
            scratch: RefCell::new(Buffer::zeroed(n)),
            out_string: RefCell::new(String::with_capacity(precision as usize + 1)),
            carry: Cell::new(false),
        }
    }

    /// The (rounded-up) precision this calculator was constructed with.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of nibbles in every [`Buffer`] this calculator produces.
    pub fn buffer_length(&self) -> usize {
        self.n
    }

    /// A fresh, zero-filled buffer of this calculator's width.
    pub fn zero(&self) -> Buffer {
        Buffer::zeroed(self.n)
    }

    /// Borrow the scratch (result) buffer last written by a
    /// scratch-writing operation.
    pub fn result(&self) -> Ref<'_, Buffer> {
        self.scratch.borrow()
    }

    /// The carry flag as left by the most recent carry-reporting
    /// operation. Prefer the value each operation returns directly;
    /// this exists only for callers written against a "read the flag
    /// after the call" style.
    pub fn carry_flag(&self) -> bool {
        self.carry.get()
    }

    pub(crate) fn set_carry(&self, value: bool) {
        self.carry.set(value);
    }

    pub(crate) fn write_scratch(&self, value: &Buffer) {
        self.scratch.borrow_mut().copy_from(value);
    }

    pub(crate) fn out_string_capacity(&self) -> usize {
        self.precision as usize + 1
    }

    pub(crate) fn out_string_mut(&self) -> std::cell::RefMut<'_, String> {
        self.out_string.borrow_mut()
    }

    /// The number of nibbles needed to hold one `precision`-bit value
    /// (half of `buffer_length`).
    pub(crate) fn max_value_size(&self) -> usize {
        (self.precision / 4) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_rounds_up_to_multiple_of_4() {
        let c = Calculator::new(30);
        assert_eq!(c.precision(), 32);
        assert_eq!(c.buffer_length(), 16);
    }

    #[test]
    fn precision_exact_multiple_of_4_is_unchanged() {
        let c = Calculator::new(64);
        assert_eq!(c.precision(), 64);
        assert_eq!(c.buffer_length(), 32);
    }

    #[test]
    #[should_panic(expected = "precision must be nonzero")]
    fn zero_precision_panics() {
        Calculator::new(0);
    }

    #[test]
    fn base_from_radix_rejects_unsupported() {
        assert_eq!(Base::from_radix(2).unwrap(), Base::Bin);
        assert!(Base::from_radix(7).is_err());
    }
}
