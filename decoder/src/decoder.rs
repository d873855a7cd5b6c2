//! The decode driver.
//!
//! `decode` picks the table for the active mode and scans it front to
//! back, returning the first entry whose pattern matches. The scan is the
//! whole algorithm: the tables carry the knowledge, the driver only
//! honors their order.

use crate::instruction::InstructionId;
use crate::mode::Mode;
use crate::table::TableEntry;
use crate::tables::{arm, thumb, thumb2, thumbee};

/// Halfword prefixes that open a 32-bit encoding in the Thumb stream.
const WIDE_PREFIXES: [u16; 3] = [0b11101, 0b11110, 0b11111];

/// Outcome of a table scan.
///
/// `NoMatch` means no entry's constrained bits were satisfied. It is not
/// the same thing as decoding to [`InstructionId::Undefined`]: undefined
/// encodings are real table entries for architecturally reserved bit
/// combinations.
///
/// [`InstructionId::Undefined`]: crate::instruction::InstructionId::Undefined
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The first entry in table order whose pattern matched.
    Found(&'static TableEntry),
    /// No entry matched.
    NoMatch,
}

impl Lookup {
    /// The matched entry, if any.
    #[must_use]
    pub const fn entry(self) -> Option<&'static TableEntry> {
        match self {
            Self::Found(entry) => Some(entry),
            Self::NoMatch => None,
        }
    }
}

/// True when a halfword is the first half of a 32-bit Thumb-2 encoding.
#[must_use]
pub const fn is_wide_halfword(halfword: u16) -> bool {
    let prefix = halfword >> 11;
    prefix == WIDE_PREFIXES[0] || prefix == WIDE_PREFIXES[1] || prefix == WIDE_PREFIXES[2]
}

/// Decodes one instruction word in the given mode.
///
/// Returns an error when the word does not fit the mode's width. A word
/// that fits but matches nothing decodes to [`Lookup::NoMatch`].
///
/// In ThumbEE, narrow words are checked against the ThumbEE table before
/// falling through to the plain Thumb table. A 32-bit word whose first
/// halfword carries a wide prefix is checked against the ThumbEE wide
/// table, then the general Thumb-2 table.
pub fn decode(word: u32, mode: Mode) -> Result<Lookup, String> {
    let result = match mode {
        Mode::Arm => scan(&arm::TABLE, word),
        Mode::Thumb => {
            let halfword = narrow(word, mode)?;
            scan(&thumb::TABLE, u32::from(halfword))
        }
        Mode::Thumb2 => scan(&thumb2::TABLE, word),
        Mode::ThumbEe => {
            if word > u32::from(u16::MAX) {
                let first = (word >> 16) as u16;
                if !is_wide_halfword(first) {
                    return Err(format!(
                        "word 0x{word:08X} is too wide for a narrow ThumbEE encoding \
                         and its first halfword 0x{first:04X} is not a wide prefix"
                    ));
                }
                scan_chain(&[&thumbee::THUMB2_TABLE, &thumb2::TABLE], word)
            } else {
                scan_chain(&[&thumbee::TABLE, &thumb::TABLE], word)
            }
        }
    };

    match result {
        Lookup::NoMatch => {
            logger::log(format!("no match for 0x{word:08X} in {mode} mode"));
        }
        Lookup::Found(entry) if entry.id() == InstructionId::Undefined => {
            logger::log(format!("undefined encoding 0x{word:08X} in {mode} mode"));
        }
        Lookup::Found(_) => {}
    }

    Ok(result)
}

fn narrow(word: u32, mode: Mode) -> Result<u16, String> {
    u16::try_from(word)
        .map_err(|_| format!("word 0x{word:08X} does not fit a 16-bit {mode} encoding"))
}

fn scan(table: &'static [TableEntry], word: u32) -> Lookup {
    table
        .iter()
        .find(|entry| entry.matches(word))
        .map_or(Lookup::NoMatch, Lookup::Found)
}

fn scan_chain(tables: &[&'static [TableEntry]], word: u32) -> Lookup {
    for table in tables {
        if let Lookup::Found(entry) = scan(table, word) {
            return Lookup::Found(entry);
        }
    }

    Lookup::NoMatch
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::instruction::InstructionId as Id;

    fn id_of(word: u32, mode: Mode) -> Id {
        match decode(word, mode).unwrap() {
            Lookup::Found(entry) => entry.id(),
            Lookup::NoMatch => panic!("no match for 0x{word:08X} in {mode} mode"),
        }
    }

    #[test]
    fn adr_wins_over_add_immediate() {
        // add with pc as the base register is adr, listed first.
        assert_eq!(id_of(0xE28F_0000, Mode::Arm), Id::AdrAdd);
        assert_eq!(id_of(0xE280_0000, Mode::Arm), Id::AddImm);
    }

    #[test]
    fn arm_undefined_space_is_a_real_entry() {
        // "111001111111xxxxxxxxxxxxxxx1xxxx" with every x as 0.
        assert_eq!(id_of(0xE7F0_0010, Mode::Arm), Id::Undefined);
    }

    #[test]
    fn thumb_undefined_wins_over_conditional_branch() {
        // 0xDEFF sits in the "1101xxxx" branch space but the permanently
        // undefined row is listed first.
        assert_eq!(id_of(0xDEFF, Mode::Thumb), Id::Undefined);
        assert_eq!(id_of(0xDF01, Mode::Thumb), Id::Svc);
        assert_eq!(id_of(0xD0FF, Mode::Thumb), Id::BCond);
    }

    #[test]
    fn thumb_rejects_wide_words() {
        let err = decode(0x0001_0000, Mode::Thumb).unwrap_err();
        assert!(err.contains("16-bit"));
    }

    #[test]
    fn no_match_is_distinguished_from_undefined() {
        // 0xDE00..=0xDEFF is undefined, a real entry. 0x4701 is a bx
        // encoding with nonzero trailing bits, which no entry claims.
        assert_eq!(id_of(0xDE00, Mode::Thumb), Id::Undefined);
        assert_eq!(decode(0x4701, Mode::Thumb).unwrap(), Lookup::NoMatch);
    }

    #[test]
    fn decode_is_deterministic() {
        let first = decode(0xE28F_0000, Mode::Arm).unwrap();
        for _ in 0..8 {
            assert_eq!(decode(0xE28F_0000, Mode::Arm).unwrap(), first);
        }
    }

    #[test]
    fn thumbee_narrow_hits_its_own_table_first() {
        assert_eq!(id_of(0xC000, Mode::ThumbEe), Id::Hb);
        // chka precedes the hbp row that also covers its bits.
        assert_eq!(id_of(0xCA80, Mode::ThumbEe), Id::Chka);
        assert_eq!(id_of(0xCA00, Mode::ThumbEe), Id::Hbp);
    }

    #[test]
    fn thumbee_narrow_falls_through_to_thumb() {
        // A plain Thumb encoding untouched by ThumbEE.
        assert_eq!(id_of(0x4770, Mode::ThumbEe), Id::Bx);
        assert_eq!(id_of(0xDEFF, Mode::ThumbEe), Id::Undefined);
    }

    #[test]
    fn thumbee_wide_words_check_the_wide_table_first() {
        assert_eq!(id_of(0xF3BF_8F1F, Mode::ThumbEe), Id::Enterx);
        assert_eq!(id_of(0xF3BF_8F0F, Mode::ThumbEe), Id::Leavex);
        // A general Thumb-2 encoding reached through the fallthrough.
        assert_eq!(id_of(0xF3BF_8F4F, Mode::ThumbEe), Id::Dsb);
    }

    #[test]
    fn thumbee_rejects_wide_words_without_a_wide_prefix() {
        let err = decode(0x1234_5678, Mode::ThumbEe).unwrap_err();
        assert!(err.contains("wide prefix"));
    }

    #[test]
    fn wide_halfword_prefixes() {
        assert!(is_wide_halfword(0xE800));
        assert!(is_wide_halfword(0xF000));
        assert!(is_wide_halfword(0xF800));
        assert!(!is_wide_halfword(0xE000));
        assert!(!is_wide_halfword(0x4770));
    }

    #[test]
    fn every_entry_decodes_to_itself() {
        // A word built from an entry's literal bits, wildcards cleared,
        // must decode to some entry at or before it in the table.
        let cases: [(&[crate::table::TableEntry], Mode); 3] = [
            (&arm::TABLE, Mode::Arm),
            (&thumb::TABLE, Mode::Thumb),
            (&thumb2::TABLE, Mode::Thumb2),
        ];
        for (table, mode) in cases {
            for (position, entry) in table.iter().enumerate() {
                let word = entry.pattern().example_word();
                let lookup = decode(word, mode).unwrap();
                let Lookup::Found(hit) = lookup else {
                    panic!("0x{word:08X} missed in {mode} mode");
                };
                let hit_position = table
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, hit))
                    .unwrap();
                assert!(
                    hit_position <= position,
                    "0x{word:08X} ({:?}) resolved to a later entry {:?}",
                    entry.id(),
                    hit.id(),
                );
            }
        }
    }

    #[test]
    fn random_operand_bits_never_break_an_entry() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let tables: [&[crate::table::TableEntry]; 4] = [
            &arm::TABLE,
            &thumb::TABLE,
            &thumb2::TABLE,
            &thumbee::TABLE,
        ];
        for table in tables {
            for entry in table {
                let free = entry.pattern().wildcard_mask();
                for _ in 0..4 {
                    let noise: u32 = rng.gen_range(0..=u32::MAX) & free;
                    assert!(entry.matches(entry.pattern().example_word() | noise));
                }
            }
        }
    }

    #[test]
    fn flipping_a_required_bit_breaks_the_match() {
        for entry in thumb::TABLE.iter() {
            let word = entry.pattern().example_word();
            let mask = entry.pattern().mask();
            for bit in 0..16_u32 {
                if mask & (1 << bit) != 0 {
                    assert!(!entry.matches(word ^ (1 << bit)));
                }
            }
        }
    }

    #[test]
    fn table_widths_are_uniform() {
        for entry in arm::TABLE.iter() {
            assert_eq!(entry.pattern().width(), arm::WIDTH);
        }
        for entry in thumb::TABLE.iter() {
            assert_eq!(entry.pattern().width(), thumb::WIDTH);
        }
        for entry in thumb2::TABLE.iter() {
            assert_eq!(entry.pattern().width(), thumb2::WIDTH);
        }
        for entry in thumbee::TABLE.iter() {
            assert_eq!(entry.pattern().width(), thumbee::WIDTH);
        }
    }

    #[test]
    fn no_table_repeats_an_identity() {
        let tables: [&[crate::table::TableEntry]; 4] = [
            &arm::TABLE,
            &thumb::TABLE,
            &thumb2::TABLE,
            &thumbee::TABLE,
        ];
        for table in tables {
            let mut seen = std::collections::HashSet::new();
            for entry in table {
                assert!(seen.insert(entry.id()), "{:?} repeats", entry.id());
            }
        }
    }
}
