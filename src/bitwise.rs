//! Nibble-parallel bitwise operations. All of these report no carry —
//! they always clear the flag.

use crate::buffer::Buffer;
use crate::calculator::Calculator;

impl Calculator {
    fn assert_width(&self, buf: &Buffer) {
        assert_eq!(
            buf.len(),
            self.buffer_length(),
            "buffer width does not match this calculator"
        );
    }

    pub fn not(&self, a: &Buffer) -> Buffer {
        self.assert_width(a);
        let mut out = Buffer::zeroed(a.len());
        for i in 0..a.len() {
            out.set(i, a.get(i) ^ 0xF);
        }
        self.write_scratch(&out);
        self.set_carry(false);
        out
    }

    pub fn not_into(&self, a: &Buffer, out: &mut Buffer) {
        let result = self.not(a);
        out.copy_from(&result);
    }

    pub fn and(&self, a: &Buffer, b: &Buffer) -> Buffer {
        self.binop(a, b, |x, y| x & y)
    }

    pub fn and_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) {
        let result = self.and(a, b);
        out.copy_from(&result);
    }

    pub fn andnot(&self, a: &Buffer, b: &Buffer) -> Buffer {
        self.binop(a, b, |x, y| x & (0xF ^ y))
    }

    pub fn andnot_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) {
        let result = self.andnot(a, b);
        out.copy_from(&result);
    }

    pub fn or(&self, a: &Buffer, b: &Buffer) -> Buffer {
        self.binop(a, b, |x, y| x | y)
    }

    pub fn or_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) {
        let result = self.or(a, b);
        out.copy_from(&result);
    }

    pub fn xor(&self, a: &Buffer, b: &Buffer) -> Buffer {
        self.binop(a, b, |x, y| x ^ y)
    }

    pub fn xor_into(&self, a: &Buffer, b: &Buffer, out: &mut Buffer) {
        let result = self.xor(a, b);
        out.copy_from(&result);
    }

    fn binop(&self, a: &Buffer, b: &Buffer, f: impl Fn(u8, u8) -> u8) -> Buffer {
        self.assert_width(a);
        self.assert_width(b);
        let n = a.len();
        let mut out = Buffer::zeroed(n);
        for i in 0..n {
            out.set(i, f(a.get(i), b.get(i)) & 0xF);
        }
        self.write_scratch(&out);
        self.set_carry(false);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingress::from_ulong;

    #[test]
    fn and_or_xor_not_are_bitwise() {
        let c = Calculator::new(8);
        let a = from_ulong(&c, 0b1100_1010);
        let b = from_ulong(&c, 0b1010_0110);
        assert_eq!(c.and(&a, &b).get(0) & 0xF, 0b0010);
        assert_eq!(c.or(&a, &b).get(1) & 0xF, 0b1110);
        let x = c.xor(&a, &b);
        assert_eq!(x.get(0), 0b1100 ^ 0b0110);
        let notted = c.not(&a);
        assert_eq!(notted.get(0), (!0b1010u8) & 0xF);
    }

    #[test]
    fn andnot_clears_bits_present_in_operand() {
        let c = Calculator::new(8);
        let a = from_ulong(&c, 0xFF);
        let b = from_ulong(&c, 0x0F);
        let out = c.andnot(&a, &b);
        assert_eq!(out.get(0), 0);
        assert_eq!(out.get(1), 0xF);
    }

    #[test]
    fn bitwise_ops_clear_carry() {
        let c = Calculator::new(8);
        c.add(&from_ulong(&c, 255), &from_ulong(&c, 1));
        assert!(c.carry_flag());
        let a = from_ulong(&c, 1);
        c.and(&a, &a);
        assert!(!c.carry_flag());
    }
}
