//! Thumb-state (T16) encoding table.
//!
//! Same first-match-wins discipline as the ARM table. The orderings that
//! matter here:
//!
//! - the undefined encoding `11011110` and `svc` come before the
//!   conditional branch row `1101`, which covers both;
//! - the hint encodings are `it` with mask = 0000 and come before it;
//! - `mov` register is the shift-by-zero corner of `lsl` immediate;
//! - the specific `1011` miscellaneous rows come before nothing general,
//!   but are kept grouped so the space reads like the reference manual.

use once_cell::sync::Lazy;

use crate::instruction::InstructionId as Id;
use crate::table::{Row, TableEntry, build_table};

pub const WIDTH: u8 = 16;

pub static TABLE: Lazy<Vec<TableEntry>> = Lazy::new(|| build_table(WIDTH, ROWS));

#[rustfmt::skip]
static ROWS: &[Row] = &[
    // Shift by immediate; mov register is lsl #0.
    (Id::MovReg,   Some("mov"),   "0000000000xxxxxx"),
    (Id::LslImm,   Some("lsl"),   "00000xxxxxxxxxxx"),
    (Id::LsrImm,   Some("lsr"),   "00001xxxxxxxxxxx"),
    (Id::AsrImm,   Some("asr"),   "00010xxxxxxxxxxx"),

    // Three-register and three-bit-immediate add/subtract.
    (Id::AddReg,   Some("add"),   "0001100xxxxxxxxx"),
    (Id::SubReg,   Some("sub"),   "0001101xxxxxxxxx"),
    (Id::AddImm3,  Some("add"),   "0001110xxxxxxxxx"),
    (Id::SubImm3,  Some("sub"),   "0001111xxxxxxxxx"),

    // Move/compare/add/subtract with 8-bit immediate.
    (Id::MovImm,   Some("mov"),   "00100xxxxxxxxxxx"),
    (Id::CmpImm,   Some("cmp"),   "00101xxxxxxxxxxx"),
    (Id::AddImm8,  Some("add"),   "00110xxxxxxxxxxx"),
    (Id::SubImm8,  Some("sub"),   "00111xxxxxxxxxxx"),

    // Register ALU operations.
    (Id::AndReg,   Some("and"),   "0100000000xxxxxx"),
    (Id::EorReg,   Some("eor"),   "0100000001xxxxxx"),
    (Id::LslReg,   Some("lsl"),   "0100000010xxxxxx"),
    (Id::LsrReg,   Some("lsr"),   "0100000011xxxxxx"),
    (Id::AsrReg,   Some("asr"),   "0100000100xxxxxx"),
    (Id::AdcReg,   Some("adc"),   "0100000101xxxxxx"),
    (Id::SbcReg,   Some("sbc"),   "0100000110xxxxxx"),
    (Id::RorReg,   Some("ror"),   "0100000111xxxxxx"),
    (Id::TstReg,   Some("tst"),   "0100001000xxxxxx"),
    (Id::RsbImm,   Some("neg"),   "0100001001xxxxxx"),
    (Id::CmpReg,   Some("cmp"),   "0100001010xxxxxx"),
    (Id::CmnReg,   Some("cmn"),   "0100001011xxxxxx"),
    (Id::OrrReg,   Some("orr"),   "0100001100xxxxxx"),
    (Id::Mul,      Some("mul"),   "0100001101xxxxxx"),
    (Id::BicReg,   Some("bic"),   "0100001110xxxxxx"),
    (Id::MvnReg,   Some("mvn"),   "0100001111xxxxxx"),

    // High-register operations and branch-exchange.
    (Id::AddHi,    Some("add"),   "01000100xxxxxxxx"),
    (Id::CmpHi,    Some("cmp"),   "01000101xxxxxxxx"),
    (Id::MovHi,    Some("mov"),   "01000110xxxxxxxx"),
    (Id::Bx,       Some("bx"),    "010001110xxxx000"),
    (Id::BlxReg,   Some("blx"),   "010001111xxxx000"),

    // pc-relative load.
    (Id::LdrLit,   Some("ldr"),   "01001xxxxxxxxxxx"),

    // Load/store with register offset.
    (Id::StrReg,   Some("str"),   "0101000xxxxxxxxx"),
    (Id::StrhReg,  Some("strh"),  "0101001xxxxxxxxx"),
    (Id::StrbReg,  Some("strb"),  "0101010xxxxxxxxx"),
    (Id::LdrsbReg, Some("ldrsb"), "0101011xxxxxxxxx"),
    (Id::LdrReg,   Some("ldr"),   "0101100xxxxxxxxx"),
    (Id::LdrhReg,  Some("ldrh"),  "0101101xxxxxxxxx"),
    (Id::LdrbReg,  Some("ldrb"),  "0101110xxxxxxxxx"),
    (Id::LdrshReg, Some("ldrsh"), "0101111xxxxxxxxx"),

    // Load/store with immediate offset.
    (Id::StrImm,   Some("str"),   "01100xxxxxxxxxxx"),
    (Id::LdrImm,   Some("ldr"),   "01101xxxxxxxxxxx"),
    (Id::StrbImm,  Some("strb"),  "01110xxxxxxxxxxx"),
    (Id::LdrbImm,  Some("ldrb"),  "01111xxxxxxxxxxx"),
    (Id::StrhImm,  Some("strh"),  "10000xxxxxxxxxxx"),
    (Id::LdrhImm,  Some("ldrh"),  "10001xxxxxxxxxxx"),
    (Id::StrSpImm, Some("str"),   "10010xxxxxxxxxxx"),
    (Id::LdrSpImm, Some("ldr"),   "10011xxxxxxxxxxx"),

    // pc- and sp-relative address generation.
    (Id::AdrAdd,   Some("adr"),   "10100xxxxxxxxxxx"),
    (Id::AddSpImm, Some("add"),   "10101xxxxxxxxxxx"),

    // Miscellaneous (1011) space.
    (Id::AddSpImm7, Some("add"),  "101100000xxxxxxx"),
    (Id::SubSpImm7, Some("sub"),  "101100001xxxxxxx"),
    (Id::Cbz,      Some("cbz"),   "101100x1xxxxxxxx"),
    (Id::Cbnz,     Some("cbnz"),  "101110x1xxxxxxxx"),
    (Id::Sxth,     Some("sxth"),  "1011001000xxxxxx"),
    (Id::Sxtb,     Some("sxtb"),  "1011001001xxxxxx"),
    (Id::Uxth,     Some("uxth"),  "1011001010xxxxxx"),
    (Id::Uxtb,     Some("uxtb"),  "1011001011xxxxxx"),
    (Id::Push,     Some("push"),  "1011010xxxxxxxxx"),
    (Id::Setend,   Some("setend"),"101101100101x000"),
    (Id::Cps,      Some("cps"),   "10110110011x0xxx"),
    (Id::Rev,      Some("rev"),   "1011101000xxxxxx"),
    (Id::Rev16,    Some("rev16"), "1011101001xxxxxx"),
    (Id::Revsh,    Some("revsh"), "1011101011xxxxxx"),
    (Id::Pop,      Some("pop"),   "1011110xxxxxxxxx"),
    (Id::Bkpt,     Some("bkpt"),  "10111110xxxxxxxx"),
    // Hints are the mask = 0000 corner of it.
    (Id::Nop,      Some("nop"),   "1011111100000000"),
    (Id::Yield,    Some("yield"), "1011111100010000"),
    (Id::Wfe,      Some("wfe"),   "1011111100100000"),
    (Id::Wfi,      Some("wfi"),   "1011111100110000"),
    (Id::Sev,      Some("sev"),   "1011111101000000"),
    (Id::It,       Some("it"),    "10111111xxxxxxxx"),

    // Multiple load/store.
    (Id::Stmia,    Some("stm"),   "11000xxxxxxxxxxx"),
    (Id::Ldmia,    Some("ldm"),   "11001xxxxxxxxxxx"),

    // Conditional branch space. The 1110 condition is architecturally
    // undefined and 1111 is svc; both must precede the general branch row.
    (Id::Undefined, None,         "11011110xxxxxxxx"),
    (Id::Svc,      Some("svc"),   "11011111xxxxxxxx"),
    (Id::BCond,    Some("b"),     "1101xxxxxxxxxxxx"),

    // Unconditional branch and the two-halfword bl/blx pair.
    (Id::B,        Some("b"),     "11100xxxxxxxxxxx"),
    (Id::BlxSuffix, Some("blx"),  "11101xxxxxxxxxx0"),
    (Id::BlPrefix, Some("bl"),    "11110xxxxxxxxxxx"),
    (Id::BlSuffix, Some("bl"),    "11111xxxxxxxxxxx"),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn position(id: Id) -> usize {
        TABLE.iter().position(|e| e.id() == id).unwrap()
    }

    #[test]
    fn every_pattern_is_sixteen_bits_wide() {
        for entry in TABLE.iter() {
            assert_eq!(entry.pattern().width(), WIDTH);
        }
    }

    #[test]
    fn mov_register_precedes_lsl_immediate() {
        // lsl with a zero shift amount encodes mov.
        assert!(position(Id::MovReg) < position(Id::LslImm));
        let mov = &TABLE[position(Id::MovReg)];
        assert!(mov.matches(0x0008));
    }

    #[test]
    fn undefined_and_svc_precede_the_conditional_branch() {
        assert!(position(Id::Undefined) < position(Id::BCond));
        assert!(position(Id::Svc) < position(Id::BCond));
    }

    #[test]
    fn hint_rows_precede_it() {
        assert!(position(Id::Nop) < position(Id::It));
        assert!(position(Id::Sev) < position(Id::It));
    }
}
