//! ThumbEE (T32EE) encoding tables.
//!
//! ThumbEE reuses the Thumb encoding space almost entirely. `TABLE` holds
//! only the encodings ThumbEE adds or repurposes (handler branches, null
//! checks and the base-register loads reclaimed from the 16-bit `ldm`/`stm`
//! space). `THUMB2_TABLE` holds the two state-change instructions carved
//! out of the 32-bit hint space. A word that matches neither falls through
//! to the plain Thumb tables.

use once_cell::sync::Lazy;

use crate::instruction::InstructionId as Id;
use crate::table::{Row, TableEntry, build_table};

pub const WIDTH: u8 = 16;
pub const WIDE_WIDTH: u8 = 32;

pub static TABLE: Lazy<Vec<TableEntry>> = Lazy::new(|| build_table(WIDTH, ROWS));

pub static THUMB2_TABLE: Lazy<Vec<TableEntry>> =
    Lazy::new(|| build_table(WIDE_WIDTH, WIDE_ROWS));

#[rustfmt::skip]
static ROWS: &[Row] = &[
    // Null check and handler branches. chka is a corner of the hbp
    // encoding and must come first.
    (Id::Chka,          Some("chka"), "110010101xxxxxxx"),
    (Id::Hb,            Some("hb"),   "110000xxxxxxxxxx"),
    (Id::Hbl,           Some("hbl"),  "110001xxxxxxxxxx"),
    (Id::Hblp,          Some("hblp"), "1100100xxxxxxxxx"),
    (Id::Hbp,           Some("hbp"),  "11001010xxxxxxxx"),
    // Loads and stores reclaimed from the ldm/stm space.
    (Id::LdrRegScaled,  Some("ldr"),  "110010110xxxxxxx"),
    (Id::StrRegScaled,  Some("str"),  "110010111xxxxxxx"),
    (Id::LdrCoprocRel,  Some("ldr"),  "1100110xxxxxxxxx"),
    (Id::LdrR9Rel,      Some("ldr"),  "110011100xxxxxxx"),
    (Id::LdrR10Rel,     Some("ldr"),  "110011101xxxxxxx"),
    (Id::StrR9Rel,      Some("str"),  "110011110xxxxxxx"),
];

#[rustfmt::skip]
static WIDE_ROWS: &[Row] = &[
    (Id::Enterx, Some("enterx"), "111100111011xxxx10x0xxxx00011111"),
    (Id::Leavex, Some("leavex"), "111100111011xxxx10x0xxxx00001111"),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn narrow_table_is_sixteen_bits_wide() {
        for entry in TABLE.iter() {
            assert_eq!(entry.pattern().width(), WIDTH);
        }
    }

    #[test]
    fn chka_precedes_hbp() {
        let chka = TABLE
            .iter()
            .position(|e| e.id() == Id::Chka)
            .unwrap();
        let hbp = TABLE.iter().position(|e| e.id() == Id::Hbp).unwrap();
        assert!(chka < hbp);
    }

    #[test]
    fn enterx_and_leavex_differ_in_one_bit() {
        let enterx = THUMB2_TABLE
            .iter()
            .find(|e| e.id() == Id::Enterx)
            .unwrap();
        let leavex = THUMB2_TABLE
            .iter()
            .find(|e| e.id() == Id::Leavex)
            .unwrap();
        assert!(enterx.matches(0xF3BF_8F1F));
        assert!(leavex.matches(0xF3BF_8F0F));
        assert!(!enterx.matches(0xF3BF_8F0F));
    }
}
