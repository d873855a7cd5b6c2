use std::fmt::Debug;
use std::mem::size_of;
use std::ops::RangeInclusive;

/// Helper methods to inspect and manipulate bits.
/// Bit indexes run from lsb to msb (right to left).
pub trait Bits
where
    Self: Clone + Sized + Into<u128> + TryFrom<u128>,
    <Self as TryFrom<u128>>::Error: Debug,
{
    fn is_bit_on(&self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < (size_of::<Self>() * 8) as u8);
        let bitwise: u128 = <Self as Into<u128>>::into(self.clone());
        let mask: u128 = 0b1 << bit_idx;
        (bitwise & mask) != 0
    }

    fn is_bit_off(&self, bit_idx: u8) -> bool {
        !self.is_bit_on(bit_idx)
    }

    fn get_bit(&self, bit_idx: u8) -> bool {
        self.is_bit_on(bit_idx)
    }

    fn set_bit_on(&mut self, bit_idx: u8) {
        debug_assert!(bit_idx < (size_of::<Self>() * 8) as u8);
        let mut bitwise: u128 = <Self as Into<u128>>::into(self.clone());
        bitwise |= 0b1 << bit_idx;
        *self = <Self as TryFrom<u128>>::try_from(bitwise).unwrap();
    }

    fn set_bit_off(&mut self, bit_idx: u8) {
        let mut bitwise: u128 = <Self as Into<u128>>::into(self.clone());
        bitwise &= !(0b1 << bit_idx);
        *self = <Self as TryFrom<u128>>::try_from(bitwise).unwrap();
    }

    fn set_bit(&mut self, bit_idx: u8, value: bool) {
        match value {
            false => self.set_bit_off(bit_idx),
            true => self.set_bit_on(bit_idx),
        }
    }

    /// Extracts the bits in `bits_range` (inclusive on both ends),
    /// shifted down so the lowest requested bit lands at position 0.
    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self {
        let start = bits_range.start();
        let length = bits_range.len() as u32;

        let mut mask = (2_u128.pow(length)) - 1;
        mask <<= start;

        let value: u128 = <Self as Into<u128>>::into(self.clone());

        <Self as TryFrom<u128>>::try_from((value & mask) >> start).unwrap()
    }
}

impl Bits for u32 {}
impl Bits for u16 {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_is_on() {
        let b = 0b110011101_u32;
        assert!(b.is_bit_on(0));
        assert!(!b.is_bit_on(1));
        assert!(b.is_bit_on(2));
        assert!(b.is_bit_on(8));
        assert!(!b.is_bit_on(31));
    }

    #[test]
    fn test_is_off() {
        let b = 0b110011101_u16;
        assert!(!b.is_bit_off(0));
        assert!(b.is_bit_off(1));
        assert!(b.is_bit_off(15));
    }

    #[test]
    fn test_set_on_off() {
        let mut b = 0b110011101_u32;
        b.set_bit_on(1);
        b.set_bit_off(2);
        assert_eq!(b, 0b110011011);
    }

    #[test]
    fn set_bit_round_trip() {
        let original = rand::thread_rng().gen_range(1..=u32::MAX - 1);
        let mut copy = original;
        for i in 0..32 {
            copy.set_bit(i, original.get_bit(i));
        }
        assert_eq!(original, copy);
    }

    #[test]
    fn get_bits() {
        let b = 0b1011001110_u32;
        assert_eq!(b.get_bits(0..=3), 0b1110);
        assert_eq!(b.get_bits(1..=1), 0b1);
        assert_eq!(b.get_bits(4..=7), 0b1100);
        assert_eq!(b.get_bits(0..=9), 0b10_1100_1110);
        assert_eq!(b.get_bits(28..=31), 0b0);
    }

    #[test]
    #[should_panic]
    fn invalid_index() {
        let b = 0u32;
        b.is_bit_on(32);
    }
}
