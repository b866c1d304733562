//! Addition, subtraction, negation, multiplication, and truncating
//! division-with-remainder.

use crate::buffer::{Buffer, Word};
use crate::calculator::Calculator;
use crate::error::StrCalcError;

fn whole_sign_negative(a: &Buffer) -> bool {
    a.get(a.len() - 1) > 7
}

/// `sum := a[i] + b[i] + carry`, nibble by nibble. Returns the result
/// buffer and whether a carry propagated out of the top nibble.
fn raw_add(a: &Buffer, b: &Buffer) -> (Buffer, bool) {
    let n = a.len();
    let mut out = Buffer::zeroed(n);
    let mut carry: u32 = 0;
    for i in 0..n {
        let sum = a.get(i) as u32 + b.get(i) as u32 + carry;
        out.set(i, (sum & 0xF) as Word);
        carry = sum >> 4;
    }
    (out, carry != 0)
}

/// `do_inc`: ripple a +1 through the buffer, dropping any carry past
/// the top nibble. Exposed crate-wide since ingress needs the same
/// "increment then negate" dance for `i64::MIN`.
pub(crate) fn raw_increment(a: &Buffer) -> Buffer {
    let mut out = a.clone();
    for i in 0..out.len() {
        if out.get(i) == 15 {
            out.set(i, 0);
        } else {
            out.set(i, out.get(i) + 1);
            break;
        }
    }
    out
}

/// Bitwise NOT followed by increment. A carry out of the top nibble is
/// intentionally dropped, matching two's-complement `MIN` negation.
pub(crate) fn raw_negate(a: &Buffer) -> Buffer {
    let n = a.len();
    let mut out = Buffer::zeroed(n);
    for i in 0..n {
        out.set(i, a.get(i) ^ 0xF);
    }
    raw_increment(&out)
}

fn raw_sub(a: &Buffer, b: &Buffer) -> (Buffer, bool) {
    raw_add(a, &raw_negate(b))
}

/// Schoolbook long multiplication over nibbles, always on magnitudes.
/// `max_value_size` nibbles hold one operand's worth of significant
/// digits; the temporary product needs `2 * max_value_size` nibbles of
/// headroom before being truncated to the caller-visible `n` nibbles.
fn raw_mul_magnitude(a: &Buffer, b: &Buffer, max_value_size: usize) -> Vec<Word> {
    let mut temp = vec![0u32; 2 * max_value_size];
    for c_outer in 0..max_value_size {
        let bv = b.get(c_outer) as u32;
        if bv == 0 {
            continue;
        }
        let mut carry: u32 = 0;
        for c_inner in 0..max_value_size {
            let mul = a.get(c_inner) as u32 * bv;
            let sum = temp[c_inner + c_outer] + mul + carry;
            temp[c_inner + c_outer] = sum & 0xF;
            carry = sum >> 4;
        }
        temp[max_value_size + c_outer] = carry;
    }
    temp.into_iter().map(|w| w as Word).collect()
}

fn compare_magnitude(a: &Buffer, b: &Buffer) -> std::cmp::Ordering {
    for i in (0..a.len()).rev() {
        let (av, bv) = (a.get(i), b.get(i));
        if av != bv {
            return av.cmp(&bv);
        }
    }
    std::cmp::Ordering::Equal
}

fn is_zero_magnitude(a: &Buffer) -> bool {
    a.iter().all(|&w| w == 0)
}

/// Whether every nibble is zero, with no notion of sign. Exposed for
/// `egress::print`'s decimal conversion loop.
pub(crate) fn is_zero(a: &Buffer) -> bool {
    is_zero_magnitude(a)
}

/// Long division in base 16, MSN to LSN, on absolute values.
fn raw_divmod_magnitude(dividend: &Buffer, divisor: &Buffer) -> (Buffer, Buffer) {
    let n = dividend.len();
    let mut quot = Buffer::zeroed(n);
    let mut rem = Buffer::zeroed(n);

    if is_zero_magnitude(dividend) {
        return (quot, rem);
    }
    match compare_magnitude(dividend, divisor) {
        std::cmp::Ordering::Equal => {
            quot.set(0, 1);
            return (quot, rem);
        }
        std::cmp::Ordering::Less => {
            rem.copy_from(dividend);
            return (quot, rem);
        }
        std::cmp::Ordering::Greater => {}
    }

    let minus_divisor = raw_negate(divisor);
    for c in (0..n).rev() {
        push_nibble(&mut rem, dividend.get(c));
        push_nibble(&mut quot, 0);

        if compare_magnitude(&rem, divisor) != std::cmp::Ordering::Less {
            let (mut r, _) = raw_add(&rem, &minus_divisor);
            while !whole_sign_negative_as_value(&r, n) {
                quot.set(0, (quot.get(0) + 1) & 0xF);
                let (next, _) = raw_add(&r, &minus_divisor);
                r = next;
            }
            let (back, _) = raw_add(&r, divisor);
            rem = back;
        }
    }
    (quot, rem)
}

/// During division the running remainder is treated as a signed value
/// of the same width to decide "is it still >= 0"; `do_sign` in the
/// source reads the top nibble the same way regardless of what the
/// buffer conceptually holds at that point.
fn whole_sign_negative_as_value(buf: &Buffer, n: usize) -> bool {
    buf.get(n - 1) > 7
}

fn push_nibble(buf: &mut Buffer, digit: Word) {
    let n = buf.len();
    for i in (0..n - 1).rev() {
        let v = buf.get(i);
        buf.set(i + 1, v);
    }
    buf.set(0, digit);
}

impl Calculator {
    fn assert_width(&self, buf: &Buffer) {
        assert_eq!(
            buf.len(),
            self.buffer_length(),
            "buffer width does not match this calculator"
        );
    }

    /// `a + b`. Returns the sum and whether a carry propagated out of
    /// the top nibble (overflow, in two's-complement terms).
    pub fn add(&self, a: &Buffer, b: &Buffer) -> (Buffer, bool) {
        self.assert_width(a);
        self.assert_width(b);
        let (out, carry) = raw_add(a, b);
        self.write_scratch(&out);
        self.set_carry(carry);
        (out, carry)
    }

    /// Like [`Calculator::add`] but writes the sum into a caller-owned
    /// `out`. `out` aliasing `a` or `b` is fine: the sum is always
    /// computed into a local temporary first.
    pub fn add_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) -> bool {
        let (result, carry) = self.add(a, b);
        out.copy_from(&result);
        carry
    }

    /// `a - b`, computed as `add(a, neg(b))`.
    pub fn sub(&self, a: &Buffer, b: &Buffer) -> (Buffer, bool) {
        self.assert_width(a);
        self.assert_width(b);
        let (out, carry) = raw_sub(a, b);
        self.write_scratch(&out);
        self.set_carry(carry);
        (out, carry)
    }

    pub fn sub_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) -> bool {
        let (result, carry) = self.sub(a, b);
        out.copy_from(&result);
        carry
    }

    /// `-a`, via bitwise NOT then increment.
    pub fn neg(&self, a: &Buffer) -> Buffer {
        self.assert_width(a);
        let out = raw_negate(a);
        self.write_scratch(&out);
        self.set_carry(false);
        out
    }

    pub fn neg_into(&self, a: &Buffer, out: &mut Buffer) {
        let result = self.neg(a);
        out.copy_from(&result);
    }

    /// `a * b`, truncated to this calculator's width.
    pub fn mul(&self, a: &Buffer, b: &Buffer) -> Buffer {
        self.assert_width(a);
        self.assert_width(b);
        let max_value_size = self.max_value_size();
        let n = self.buffer_length();

        let neg_a = whole_sign_negative(a);
        let neg_b = whole_sign_negative(b);
        let (abs_a, abs_b);
        let a_mag = if neg_a {
            abs_a = raw_negate(a);
            &abs_a
        } else {
            a
        };
        let b_mag = if neg_b {
            abs_b = raw_negate(b);
            &abs_b
        } else {
            b
        };

        let product = raw_mul_magnitude(a_mag, b_mag, max_value_size);
        let mut out = Buffer::zeroed(n);
        for i in 0..n {
            out.set(i, product.get(i).copied().unwrap_or(0));
        }
        let out = if neg_a ^ neg_b { raw_negate(&out) } else { out };
        self.write_scratch(&out);
        self.set_carry(false);
        out
    }

    pub fn mul_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) {
        let result = self.mul(a, b);
        out.copy_from(&result);
    }

    /// `(quotient, remainder, carry)` for truncating division, or
    /// [`StrCalcError::DivisionByZero`] if `divisor` is zero.
    ///
    /// `carry` is true iff the remainder is non-zero — an admittedly
    /// surprising choice to report "had a remainder" via the carry
    /// flag for division, kept for parity with the other arithmetic
    /// operations' carry-reporting contract.
    pub fn divmod(
        &self,
        dividend: &Buffer,
        divisor: &Buffer,
    ) -> Result<(Buffer, Buffer, bool), StrCalcError> {
        self.assert_width(dividend);
        self.assert_width(divisor);
        if is_zero_magnitude(divisor) {
            log::debug!("divmod: division by zero rejected");
            return Err(StrCalcError::DivisionByZero);
        }

        let div_neg = whole_sign_negative(dividend);
        let divisor_neg = whole_sign_negative(divisor);

        let abs_dividend = if div_neg {
            raw_negate(dividend)
        } else {
            dividend.clone()
        };
        let abs_divisor = if divisor_neg {
            raw_negate(divisor)
        } else {
            divisor.clone()
        };

        let (mut quot, mut rem) = raw_divmod_magnitude(&abs_dividend, &abs_divisor);

        let carry = !is_zero_magnitude(&rem);

        if div_neg ^ divisor_neg {
            quot = raw_negate(&quot);
        }
        if div_neg {
            rem = raw_negate(&rem);
        }

        self.set_carry(carry);
        Ok((quot, rem, carry))
    }

    /// The quotient half of [`Calculator::divmod`].
    pub fn div(&self, dividend: &Buffer, divisor: &Buffer) -> Result<Buffer, StrCalcError> {
        let (q, _, carry) = self.divmod(dividend, divisor)?;
        self.write_scratch(&q);
        self.set_carry(carry);
        Ok(q)
    }

    pub fn div_into(&self, dividend: &Buffer, divisor: &Buffer, out: &mut Buffer) -> Result<(), StrCalcError> {
        let result = self.div(dividend, divisor)?;
        out.copy_from(&result);
        Ok(())
    }

    /// The remainder half of [`Calculator::divmod`].
    pub fn rem(&self, dividend: &Buffer, divisor: &Buffer) -> Result<Buffer, StrCalcError> {
        let (_, r, carry) = self.divmod(dividend, divisor)?;
        self.write_scratch(&r);
        self.set_carry(carry);
        Ok(r)
    }

    pub fn rem_into(&self, dividend: &Buffer, divisor: &Buffer, out: &mut Buffer) -> Result<(), StrCalcError> {
        let result = self.rem(dividend, divisor)?;
        out.copy_from(&result);
        Ok(())
    }

    /// Like [`Calculator::divmod`] but writes the quotient and
    /// remainder into caller-owned buffers.
    pub fn divmod_into(
        &self,
        dividend: &Buffer,
        divisor: &Buffer,
        quot_out: &mut Buffer,
        rem_out: &mut Buffer,
    ) -> Result<bool, StrCalcError> {
        let (q, r, carry) = self.divmod(dividend, divisor)?;
        quot_out.copy_from(&q);
        rem_out.copy_from(&r);
        Ok(carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingress::from_long;

    #[test]
    fn add_reports_overflow_carry() {
        let c = Calculator::new(8);
        let max = from_long(&c, 127);
        let one = from_long(&c, 1);
        let (sum, carry) = c.add(&max, &one);
        assert_eq!(crate::egress::to_long(&c, &sum), -128);
        assert!(carry);
    }

    #[test]
    fn sub_equals_add_negate() {
        let c = Calculator::new(32);
        let a = from_long(&c, 1000);
        let b = from_long(&c, 37);
        let (direct, dc) = c.sub(&a, &b);
        let negb = c.neg(&b);
        let (via_add, ac) = c.add(&a, &negb);
        assert_eq!(direct.as_slice(), via_add.as_slice());
        assert_eq!(dc, ac);
    }

    #[test]
    fn negate_involution_including_min() {
        let c = Calculator::new(64);
        let min = from_long(&c, i64::MIN);
        let once = c.neg(&min);
        let twice = c.neg(&once);
        assert_eq!(twice.as_slice(), min.as_slice());
    }

    #[test]
    fn mul_negative_times_negative() {
        let c = Calculator::new(64);
        let a = from_long(&c, -3);
        let b = from_long(&c, -7);
        let product = c.mul(&a, &b);
        assert_eq!(crate::egress::to_long(&c, &product), 21);
    }

    #[test]
    fn divmod_truncates_toward_zero() {
        let c = Calculator::new(64);
        let dividend = from_long(&c, -17);
        let divisor = from_long(&c, 5);
        let (q, r, carry) = c.divmod(&dividend, &divisor).unwrap();
        assert_eq!(crate::egress::to_long(&c, &q), -3);
        assert_eq!(crate::egress::to_long(&c, &r), -2);
        assert!(carry);
    }

    #[test]
    fn divmod_by_zero_is_an_error() {
        let c = Calculator::new(32);
        let dividend = from_long(&c, 10);
        let zero = c.zero();
        assert_eq!(
            c.divmod(&dividend, &zero).unwrap_err(),
            StrCalcError::DivisionByZero
        );
    }

    #[test]
    fn divmod_shortcut_equal_operands() {
        let c = Calculator::new(32);
        let v = from_long(&c, 42);
        let (q, r, carry) = c.divmod(&v, &v).unwrap();
        assert_eq!(crate::egress::to_long(&c, &q), 1);
        assert_eq!(crate::egress::to_long(&c, &r), 0);
        assert!(!carry);
    }

    #[test]
    fn divmod_shortcut_dividend_smaller() {
        let c = Calculator::new(32);
        let dividend = from_long(&c, 3);
        let divisor = from_long(&c, 100);
        let (q, r, _) = c.divmod(&dividend, &divisor).unwrap();
        assert_eq!(crate::egress::to_long(&c, &q), 0);
        assert_eq!(crate::egress::to_long(&c, &r), 3);
    }
}
