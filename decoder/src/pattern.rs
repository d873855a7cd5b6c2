use crate::bitwise::Bits;

/// A compiled bit pattern: a masked-equality test over an instruction word.
///
/// The textual form is a string over `{0, 1, x}` read left to right from the
/// most significant bit. `0` and `1` constrain the corresponding bit, `x`
/// leaves it free (operand fields and bits that do not affect identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitPattern {
    mask: u32,
    expected: u32,
    width: u8,
}

impl TryFrom<&str> for BitPattern {
    type Error = String;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::compile(pattern)
    }
}

impl BitPattern {
    /// Compiles a `{0,1,x}` string into a `(mask, expected)` pair.
    ///
    /// The leftmost character maps to the highest bit position. Patterns
    /// longer than 32 characters or containing anything outside the
    /// `{0,1,x}` alphabet are transcription defects and are rejected.
    pub fn compile(pattern: &str) -> Result<Self, String> {
        let width = pattern.len();
        if width > 32 {
            return Err(format!(
                "pattern \"{pattern}\" is {width} characters long, the word width is at most 32"
            ));
        }

        let mut mask: u32 = 0;
        let mut expected: u32 = 0;
        for (idx, c) in pattern.chars().enumerate() {
            let bit_idx = (width - 1 - idx) as u8;
            match c {
                '0' => mask.set_bit_on(bit_idx),
                '1' => {
                    mask.set_bit_on(bit_idx);
                    expected.set_bit_on(bit_idx);
                }
                'x' => {}
                _ => {
                    return Err(format!(
                        "pattern \"{pattern}\" contains invalid character '{c}' at index {idx}"
                    ));
                }
            }
        }

        Ok(Self {
            mask,
            expected,
            width: width as u8,
        })
    }

    /// The O(1) test: all constrained bits of `word` hold their required
    /// values. Free bits never participate.
    #[must_use]
    pub const fn matches(&self, word: u32) -> bool {
        (word & self.mask) == self.expected
    }

    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    #[must_use]
    pub const fn expected(&self) -> u32 {
        self.expected
    }

    /// Number of characters the pattern was compiled from.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// A word equal to the pattern with every free bit cleared.
    #[must_use]
    pub const fn example_word(&self) -> u32 {
        self.expected
    }

    /// The free (`x`) positions, within the pattern's width. Downstream
    /// formatting layers use this to locate operand fields in a matched word.
    #[must_use]
    pub const fn wildcard_mask(&self) -> u32 {
        let width_mask = if self.width == 32 {
            u32::MAX
        } else {
            (1_u32 << self.width) - 1
        };
        !self.mask & width_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn compile_all_constrained() {
        let p = BitPattern::compile("1010").unwrap();
        assert_eq!(p.mask(), 0b1111);
        assert_eq!(p.expected(), 0b1010);
        assert_eq!(p.width(), 4);
        assert_eq!(p.wildcard_mask(), 0);
    }

    #[test]
    fn compile_with_wildcards() {
        let p = BitPattern::compile("1x0x").unwrap();
        assert_eq!(p.mask(), 0b1010);
        assert_eq!(p.expected(), 0b1000);
        assert_eq!(p.wildcard_mask(), 0b0101);
    }

    #[test]
    fn leftmost_character_is_msb() {
        let p = BitPattern::compile("1xxxxxxxxxxxxxxx").unwrap();
        assert_eq!(p.mask(), 0x8000);
        assert_eq!(p.expected(), 0x8000);
    }

    #[test]
    fn matches_ignores_free_bits() {
        let p = BitPattern::compile("11011110xxxxxxxx").unwrap();
        assert!(p.matches(0xDE00));
        assert!(p.matches(0xDEFF));
        assert!(p.matches(0xDE42));
        assert!(!p.matches(0xDF00));
    }

    #[test]
    fn full_width_pattern() {
        let p = BitPattern::compile("xxxx001010001111xxxxxxxxxxxxxxxx").unwrap();
        assert_eq!(p.width(), 32);
        assert_eq!(p.mask(), 0x0FFF_0000);
        assert_eq!(p.expected(), 0x028F_0000);
        assert!(p.matches(0xE28F_0042));
        assert!(!p.matches(0xE28E_0042));
    }

    #[test]
    fn rejects_oversized_pattern() {
        let too_long = "x".repeat(33);
        assert!(BitPattern::compile(&too_long).is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(BitPattern::compile("10z0").is_err());
        assert!(BitPattern::compile("10 0").is_err());
    }

    #[test]
    fn try_from_round_trip() {
        let p: BitPattern = "0101".try_into().unwrap();
        assert!(p.matches(0b0101));
    }

    #[test]
    fn random_free_bits_always_match() {
        let p = BitPattern::compile("1101xxxxxxxxxxxx").unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let noise: u32 = rng.gen_range(0..=0xFFF);
            assert!(p.matches(0xD000 | noise));
        }
    }

    #[test]
    fn flipping_a_constrained_bit_breaks_the_match() {
        let p = BitPattern::compile("11011110xxxxxxxx").unwrap();
        let word = p.example_word();
        for bit in 0..16 {
            let mut flipped = word;
            flipped.set_bit(bit, !word.get_bit(bit));
            if p.mask().get_bit(bit) {
                assert!(!p.matches(flipped), "bit {bit} should be constrained");
            } else {
                assert!(p.matches(flipped), "bit {bit} should be free");
            }
        }
    }
}
