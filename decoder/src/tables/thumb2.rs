//! Thumb-2 (T32, 32-bit) encoding table.
//!
//! Patterns are written as the two halfwords concatenated, first halfword
//! first, 32 characters exactly. Ordering notes:
//!
//! - `pop`/`push` are the sp-writeback corners of `ldm`/`stm` and come
//!   first, like in the ARM table;
//! - the exclusive, table-branch and dual rows all live under
//!   `1110 100x x1xx` and the general `ldrd`/`strd` rows would cover the
//!   exclusives, so everything specific in that space is listed first;
//! - in the data-processing rows the test instructions (`tst`, `teq`,
//!   `cmp`, `cmn`) and the Rn = 1111 / Rd = 1111 special forms (`mov`,
//!   `mvn`, shifts, `adr`) come before the general row of the same opcode;
//! - hints, barriers and the other misc-control rows come before the
//!   conditional branch row, which otherwise covers their encodings;
//! - hint (Rt = 1111) and literal (Rn = 1111) loads come before the
//!   general load rows.

use once_cell::sync::Lazy;

use crate::instruction::InstructionId as Id;
use crate::table::{Row, TableEntry, build_table};

pub const WIDTH: u8 = 32;

pub static TABLE: Lazy<Vec<TableEntry>> = Lazy::new(|| build_table(WIDTH, ROWS));

#[rustfmt::skip]
static ROWS: &[Row] = &[
    // Load/store multiple, srs/rfe corners first.
    (Id::SrsDb,    Some("srsdb"),  "1110100000x01101xxxxxxxxxxxxxxxx"),
    (Id::RfeDb,    Some("rfedb"),  "1110100000x1xxxx1100000000000000"),
    (Id::Srs,      Some("srs"),    "1110100110x01101xxxxxxxxxxxxxxxx"),
    (Id::Rfe,      Some("rfe"),    "1110100110x1xxxx1100000000000000"),
    (Id::Pop,      Some("pop"),    "1110100010111101xxxxxxxxxxxxxxxx"),
    (Id::Push,     Some("push"),   "1110100100101101xxxxxxxxxxxxxxxx"),
    (Id::Stmia,    Some("stm"),    "1110100010x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmia,    Some("ldm"),    "1110100010x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stmdb,    Some("stmdb"),  "1110100100x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmdb,    Some("ldmdb"),  "1110100100x1xxxxxxxxxxxxxxxxxxxx"),

    // Exclusives, table branches and dual transfers. The strex/ldrex and
    // tbb/tbh rows must precede the general strd/ldrd rows below.
    (Id::Strex,    Some("strex"),  "111010000100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldrex,    Some("ldrex"),  "111010000101xxxxxxxx1111xxxxxxxx"),
    (Id::Tbb,      Some("tbb"),    "111010001101xxxx111100000000xxxx"),
    (Id::Tbh,      Some("tbh"),    "111010001101xxxx111100000001xxxx"),
    (Id::Strexb,   Some("strexb"), "111010001100xxxxxxxx11110100xxxx"),
    (Id::Strexh,   Some("strexh"), "111010001100xxxxxxxx11110101xxxx"),
    (Id::Strexd,   Some("strexd"), "111010001100xxxxxxxxxxxx0111xxxx"),
    (Id::Ldrexb,   Some("ldrexb"), "111010001101xxxxxxxx11110100xxxx"),
    (Id::Ldrexh,   Some("ldrexh"), "111010001101xxxxxxxx11110101xxxx"),
    (Id::Ldrexd,   Some("ldrexd"), "111010001101xxxxxxxxxxxx0111xxxx"),
    (Id::LdrdLit,  Some("ldrd"),   "1110100xx1x11111xxxxxxxxxxxxxxxx"),
    (Id::LdrdImm,  Some("ldrd"),   "1110100xx1x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrdImm,  Some("strd"),   "1110100xx1x0xxxxxxxxxxxxxxxxxxxx"),

    // Data-processing, shifted register. Tests and pc/special corners
    // before the general opcode rows.
    (Id::TstReg,   Some("tst"),    "111010100001xxxx0xxx1111xxxxxxxx"),
    (Id::AndReg,   Some("and"),    "11101010000xxxxxxxxxxxxxxxxxxxxx"),
    (Id::BicReg,   Some("bic"),    "11101010001xxxxxxxxxxxxxxxxxxxxx"),
    (Id::MovReg,   Some("mov"),    "11101010010x11110000xxxx0000xxxx"),
    (Id::Rrx,      Some("rrx"),    "11101010010x11110000xxxx0011xxxx"),
    (Id::LslImm,   Some("lsl"),    "11101010010x1111xxxxxxxxxx00xxxx"),
    (Id::LsrImm,   Some("lsr"),    "11101010010x1111xxxxxxxxxx01xxxx"),
    (Id::AsrImm,   Some("asr"),    "11101010010x1111xxxxxxxxxx10xxxx"),
    (Id::RorImm,   Some("ror"),    "11101010010x1111xxxxxxxxxx11xxxx"),
    (Id::OrrReg,   Some("orr"),    "11101010010xxxxxxxxxxxxxxxxxxxxx"),
    (Id::MvnReg,   Some("mvn"),    "11101010011x1111xxxxxxxxxxxxxxxx"),
    (Id::OrnReg,   Some("orn"),    "11101010011xxxxxxxxxxxxxxxxxxxxx"),
    (Id::TeqReg,   Some("teq"),    "111010101001xxxx0xxx1111xxxxxxxx"),
    (Id::EorReg,   Some("eor"),    "11101010100xxxxxxxxxxxxxxxxxxxxx"),
    (Id::Pkhbt,    Some("pkhbt"),  "111010101100xxxxxxxxxxxxxx00xxxx"),
    (Id::Pkhtb,    Some("pkhtb"),  "111010101100xxxxxxxxxxxxxx10xxxx"),
    (Id::CmnReg,   Some("cmn"),    "111010110001xxxx0xxx1111xxxxxxxx"),
    (Id::AddSpReg, Some("add"),    "11101011000x1101xxxxxxxxxxxxxxxx"),
    (Id::AddReg,   Some("add"),    "11101011000xxxxxxxxxxxxxxxxxxxxx"),
    (Id::AdcReg,   Some("adc"),    "11101011010xxxxxxxxxxxxxxxxxxxxx"),
    (Id::SbcReg,   Some("sbc"),    "11101011011xxxxxxxxxxxxxxxxxxxxx"),
    (Id::CmpReg,   Some("cmp"),    "111010111011xxxx0xxx1111xxxxxxxx"),
    (Id::SubSpReg, Some("sub"),    "11101011101x1101xxxxxxxxxxxxxxxx"),
    (Id::SubReg,   Some("sub"),    "11101011101xxxxxxxxxxxxxxxxxxxxx"),
    (Id::RsbReg,   Some("rsb"),    "11101011110xxxxxxxxxxxxxxxxxxxxx"),

    // VFP data-processing (coprocessor 101x, bit 4 = 0). Must precede the
    // general coprocessor rows, which cover the whole 11101110 space.
    (Id::Vmla,     Some("vmla"),   "111011100x00xxxxxxxx101xx0x0xxxx"),
    (Id::Vmls,     Some("vmls"),   "111011100x00xxxxxxxx101xx1x0xxxx"),
    (Id::Vnmls,    Some("vnmls"),  "111011100x01xxxxxxxx101xx0x0xxxx"),
    (Id::Vnmla,    Some("vnmla"),  "111011100x01xxxxxxxx101xx1x0xxxx"),
    (Id::Vmul,     Some("vmul"),   "111011100x10xxxxxxxx101xx0x0xxxx"),
    (Id::Vnmul,    Some("vnmul"),  "111011100x10xxxxxxxx101xx1x0xxxx"),
    (Id::Vadd,     Some("vadd"),   "111011100x11xxxxxxxx101xx0x0xxxx"),
    (Id::Vsub,     Some("vsub"),   "111011100x11xxxxxxxx101xx1x0xxxx"),
    (Id::Vdiv,     Some("vdiv"),   "111011101x00xxxxxxxx101xx0x0xxxx"),
    (Id::Vfnms,    Some("vfnms"),  "111011101x01xxxxxxxx101xx0x0xxxx"),
    (Id::Vfnma,    Some("vfnma"),  "111011101x01xxxxxxxx101xx1x0xxxx"),
    (Id::Vfma,     Some("vfma"),   "111011101x10xxxxxxxx101xx0x0xxxx"),
    (Id::Vfms,     Some("vfms"),   "111011101x10xxxxxxxx101xx1x0xxxx"),
    (Id::VmovReg,  Some("vmov"),   "111011101x110000xxxx101x01x0xxxx"),
    (Id::Vabs,     Some("vabs"),   "111011101x110000xxxx101x11x0xxxx"),
    (Id::Vneg,     Some("vneg"),   "111011101x110001xxxx101x01x0xxxx"),
    (Id::Vsqrt,    Some("vsqrt"),  "111011101x110001xxxx101x11x0xxxx"),
    (Id::Vcvtb,    Some("vcvtb"),  "111011101x11001xxxxx101x01x0xxxx"),
    (Id::Vcvtt,    Some("vcvtt"),  "111011101x11001xxxxx101x11x0xxxx"),
    (Id::Vcmp,     Some("vcmp"),   "111011101x110100xxxx101x01x0xxxx"),
    (Id::Vcmpe,    Some("vcmpe"),  "111011101x110100xxxx101x11x0xxxx"),
    (Id::VcmpZero, Some("vcmp"),   "111011101x110101xxxx101x01x0xxxx"),
    (Id::VcmpeZero, Some("vcmpe"), "111011101x110101xxxx101x11x0xxxx"),
    (Id::VcvtPrecision, Some("vcvt"), "111011101x110111xxxx101x11x0xxxx"),
    (Id::VcvtFromInt, Some("vcvt"), "111011101x111000xxxx101xx1x0xxxx"),
    (Id::VcvtFromFixed, Some("vcvt"), "111011101x11101xxxxx101xx1x0xxxx"),
    (Id::VcvtToInt, Some("vcvt"),  "111011101x11110xxxxx101xx1x0xxxx"),
    (Id::VcvtToFixed, Some("vcvt"), "111011101x11111xxxxx101xx1x0xxxx"),
    (Id::VmovImm,  Some("vmov"),   "111011101x11xxxxxxxx101x0000xxxx"),

    // VFP register transfers (coprocessor 101x, bit 4 = 1).
    (Id::VmovToSreg,   Some("vmov"), "111011100000xxxxxxxx1010x0010000"),
    (Id::VmovFromSreg, Some("vmov"), "111011100001xxxxxxxx1010x0010000"),
    (Id::Vmsr,     Some("vmsr"),   "1110111011100001xxxx101000010000"),
    (Id::Vmrs,     Some("vmrs"),   "1110111011110001xxxx101000010000"),
    (Id::VmovToScalar, Some("vmov"), "111011100xx0xxxxxxxx1011xxx10000"),
    (Id::VmovFromScalar, Some("vmov"), "11101110xxx1xxxxxxxx1011xxx10000"),

    // VFP extension load/store. Core-pair moves first (the stc/ldc rows
    // below cover them), then vpush/vpop, then the general forms.
    (Id::VmovFromCorePair, Some("vmov"), "111011000100xxxxxxxx101x00x1xxxx"),
    (Id::VmovToCorePair, Some("vmov"), "111011000101xxxxxxxx101x00x1xxxx"),
    (Id::Vpush,    Some("vpush"),  "111011010x101101xxxx101xxxxxxxxx"),
    (Id::Vpop,     Some("vpop"),   "111011001x111101xxxx101xxxxxxxxx"),
    (Id::Vstr,     Some("vstr"),   "11101101xx00xxxxxxxx101xxxxxxxxx"),
    (Id::Vldr,     Some("vldr"),   "11101101xx01xxxxxxxx101xxxxxxxxx"),
    (Id::Vstm,     Some("vstm"),   "1110110xxxx0xxxxxxxx101xxxxxxxxx"),
    (Id::Vldm,     Some("vldm"),   "1110110xxxx1xxxxxxxx101xxxxxxxxx"),

    // Coprocessor, both the 1110 and 1111 prefixed spaces.
    (Id::Mcrr,     Some("mcrr"),   "111011000100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mrrc,     Some("mrrc"),   "111011000101xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stc,      Some("stc"),    "1110110xxxx0xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdcLit,   Some("ldc"),    "1110110xxxx11111xxxxxxxxxxxxxxxx"),
    (Id::LdcImm,   Some("ldc"),    "1110110xxxx1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mcr,      Some("mcr"),    "11101110xxx0xxxxxxxxxxxxxxx1xxxx"),
    (Id::Mrc,      Some("mrc"),    "11101110xxx1xxxxxxxxxxxxxxx1xxxx"),
    (Id::Cdp,      Some("cdp"),    "11101110xxxxxxxxxxxxxxxxxxx0xxxx"),
    (Id::Mcrr2,    Some("mcrr2"),  "111111000100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mrrc2,    Some("mrrc2"),  "111111000101xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stc2,     Some("stc2"),   "1111110xxxx0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldc2Lit,  Some("ldc2"),   "1111110xxxx11111xxxxxxxxxxxxxxxx"),
    (Id::Ldc2Imm,  Some("ldc2"),   "1111110xxxx1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mcr2,     Some("mcr2"),   "11111110xxx0xxxxxxxxxxxxxxx1xxxx"),
    (Id::Mrc2,     Some("mrc2"),   "11111110xxx1xxxxxxxxxxxxxxx1xxxx"),
    (Id::Cdp2,     Some("cdp2"),   "11111110xxxxxxxxxxxxxxxxxxx0xxxx"),

    // Data-processing, modified immediate (second halfword bit 15 = 0).
    (Id::TstImm,   Some("tst"),    "11110x000001xxxx0xxx1111xxxxxxxx"),
    (Id::AndImm,   Some("and"),    "11110x00000xxxxx0xxxxxxxxxxxxxxx"),
    (Id::BicImm,   Some("bic"),    "11110x00001xxxxx0xxxxxxxxxxxxxxx"),
    (Id::MovImm,   Some("mov"),    "11110x00010x11110xxxxxxxxxxxxxxx"),
    (Id::OrrImm,   Some("orr"),    "11110x00010xxxxx0xxxxxxxxxxxxxxx"),
    (Id::MvnImm,   Some("mvn"),    "11110x00011x11110xxxxxxxxxxxxxxx"),
    (Id::OrnImm,   Some("orn"),    "11110x00011xxxxx0xxxxxxxxxxxxxxx"),
    (Id::TeqImm,   Some("teq"),    "11110x001001xxxx0xxx1111xxxxxxxx"),
    (Id::EorImm,   Some("eor"),    "11110x00100xxxxx0xxxxxxxxxxxxxxx"),
    (Id::CmnImm,   Some("cmn"),    "11110x010001xxxx0xxx1111xxxxxxxx"),
    (Id::AddSpImm, Some("add"),    "11110x01000x11010xxxxxxxxxxxxxxx"),
    (Id::AddImm,   Some("add"),    "11110x01000xxxxx0xxxxxxxxxxxxxxx"),
    (Id::AdcImm,   Some("adc"),    "11110x01010xxxxx0xxxxxxxxxxxxxxx"),
    (Id::SbcImm,   Some("sbc"),    "11110x01011xxxxx0xxxxxxxxxxxxxxx"),
    (Id::CmpImm,   Some("cmp"),    "11110x011011xxxx0xxx1111xxxxxxxx"),
    (Id::SubSpImm, Some("sub"),    "11110x01101x11010xxxxxxxxxxxxxxx"),
    (Id::SubImm,   Some("sub"),    "11110x01101xxxxx0xxxxxxxxxxxxxxx"),
    (Id::RsbImm,   Some("rsb"),    "11110x01110xxxxx0xxxxxxxxxxxxxxx"),

    // Data-processing, plain binary immediate. adr is the Rn = 1111
    // corner of addw/subw and must come first.
    (Id::AdrAdd,   Some("adr"),    "11110x10000011110xxxxxxxxxxxxxxx"),
    (Id::Addw,     Some("addw"),   "11110x100000xxxx0xxxxxxxxxxxxxxx"),
    (Id::Movw,     Some("movw"),   "11110x100100xxxx0xxxxxxxxxxxxxxx"),
    (Id::AdrSub,   Some("adr"),    "11110x10101011110xxxxxxxxxxxxxxx"),
    (Id::Subw,     Some("subw"),   "11110x101010xxxx0xxxxxxxxxxxxxxx"),
    (Id::Movt,     Some("movt"),   "11110x101100xxxx0xxxxxxxxxxxxxxx"),
    (Id::Ssat16,   Some("ssat16"), "11110x110010xxxx0000xxxx0000xxxx"),
    (Id::Ssat,     Some("ssat"),   "11110x1100x0xxxx0xxxxxxxxx0xxxxx"),
    (Id::Sbfx,     Some("sbfx"),   "11110x110100xxxx0xxxxxxxxx0xxxxx"),
    (Id::Bfc,      Some("bfc"),    "11110x11011011110xxxxxxxxx0xxxxx"),
    (Id::Bfi,      Some("bfi"),    "11110x110110xxxx0xxxxxxxxx0xxxxx"),
    (Id::Usat16,   Some("usat16"), "11110x111010xxxx0000xxxx0000xxxx"),
    (Id::Usat,     Some("usat"),   "11110x1110x0xxxx0xxxxxxxxx0xxxxx"),
    (Id::Ubfx,     Some("ubfx"),   "11110x111100xxxx0xxxxxxxxx0xxxxx"),

    // Branches and miscellaneous control (second halfword bit 15 = 1).
    // Everything in the cond = 111x space must precede the conditional
    // branch row that otherwise covers it.
    (Id::Nop,      Some("nop"),    "111100111010xxxx10x0x00000000000"),
    (Id::Yield,    Some("yield"),  "111100111010xxxx10x0x00000000001"),
    (Id::Wfe,      Some("wfe"),    "111100111010xxxx10x0x00000000010"),
    (Id::Wfi,      Some("wfi"),    "111100111010xxxx10x0x00000000011"),
    (Id::Sev,      Some("sev"),    "111100111010xxxx10x0x00000000100"),
    (Id::Dbg,      Some("dbg"),    "111100111010xxxx10x0x0001111xxxx"),
    (Id::Cps,      Some("cps"),    "111100111010xxxx10x0xxxxxxxxxxxx"),
    (Id::Clrex,    Some("clrex"),  "111100111011xxxx10x0xxxx0010xxxx"),
    (Id::Dsb,      Some("dsb"),    "111100111011xxxx10x0xxxx0100xxxx"),
    (Id::Dmb,      Some("dmb"),    "111100111011xxxx10x0xxxx0101xxxx"),
    (Id::Isb,      Some("isb"),    "111100111011xxxx10x0xxxx0110xxxx"),
    (Id::MsrReg,   Some("msr"),    "111100111000xxxx10x0xxxxxxxxxxxx"),
    (Id::Bxj,      Some("bxj"),    "111100111100xxxx10x0xxxxxxxxxxxx"),
    (Id::SubsPcLr, Some("subs"),   "111100111101111010x01111xxxxxxxx"),
    (Id::Mrs,      Some("mrs"),    "11110011111xxxxx10x0xxxxxxxxxxxx"),
    (Id::Smc,      Some("smc"),    "111101111111xxxx1000xxxxxxxxxxxx"),
    (Id::Undefined, Some("udf"),   "111101111111xxxx1010xxxxxxxxxxxx"),
    (Id::BCond,    Some("b"),      "11110xxxxxxxxxxx10x0xxxxxxxxxxxx"),
    (Id::B,        Some("b"),      "11110xxxxxxxxxxx10x1xxxxxxxxxxxx"),
    (Id::BlxImm,   Some("blx"),    "11110xxxxxxxxxxx11x0xxxxxxxxxxx0"),
    (Id::Bl,       Some("bl"),     "11110xxxxxxxxxxx11x1xxxxxxxxxxxx"),

    // Load/store single. Preload hints (Rt = 1111), literal (Rn = 1111)
    // and unprivileged rows first, then the register / short-immediate /
    // long-immediate forms per size.
    (Id::PldLit,   Some("pld"),    "11111000x00111111111xxxxxxxxxxxx"),
    (Id::PldImm,   Some("pld"),    "111110001001xxxx1111xxxxxxxxxxxx"),
    (Id::PldImmNeg,Some("pld"),    "111110000001xxxx11111100xxxxxxxx"),
    (Id::PldwImm,  Some("pldw"),   "111110001011xxxx1111xxxxxxxxxxxx"),
    (Id::PldwImmNeg,Some("pldw"),  "111110000011xxxx11111100xxxxxxxx"),
    (Id::PldReg,   Some("pld"),    "111110000001xxxx1111000000xxxxxx"),
    (Id::PliLit,   Some("pli"),    "11111001x00111111111xxxxxxxxxxxx"),
    (Id::PliImm,   Some("pli"),    "111110011001xxxx1111xxxxxxxxxxxx"),
    (Id::PliImmNeg,Some("pli"),    "111110010001xxxx11111100xxxxxxxx"),
    (Id::PliReg,   Some("pli"),    "111110010001xxxx1111000000xxxxxx"),
    (Id::LdrLit,   Some("ldr"),    "11111000x1011111xxxxxxxxxxxxxxxx"),
    (Id::LdrbLit,  Some("ldrb"),   "11111000x0011111xxxxxxxxxxxxxxxx"),
    (Id::LdrhLit,  Some("ldrh"),   "11111000x0111111xxxxxxxxxxxxxxxx"),
    (Id::LdrsbLit, Some("ldrsb"),  "11111001x0011111xxxxxxxxxxxxxxxx"),
    (Id::LdrshLit, Some("ldrsh"),  "11111001x0111111xxxxxxxxxxxxxxxx"),
    (Id::Strt,     Some("strt"),   "111110000100xxxxxxxx1110xxxxxxxx"),
    (Id::Ldrt,     Some("ldrt"),   "111110000101xxxxxxxx1110xxxxxxxx"),
    (Id::Strbt,    Some("strbt"),  "111110000000xxxxxxxx1110xxxxxxxx"),
    (Id::Ldrbt,    Some("ldrbt"),  "111110000001xxxxxxxx1110xxxxxxxx"),
    (Id::Strht,    Some("strht"),  "111110000010xxxxxxxx1110xxxxxxxx"),
    (Id::Ldrht,    Some("ldrht"),  "111110000011xxxxxxxx1110xxxxxxxx"),
    (Id::Ldrsbt,   Some("ldrsbt"), "111110010001xxxxxxxx1110xxxxxxxx"),
    (Id::Ldrsht,   Some("ldrsht"), "111110010011xxxxxxxx1110xxxxxxxx"),
    (Id::StrbReg,  Some("strb"),   "111110000000xxxxxxxx000000xxxxxx"),
    (Id::StrbImm8, Some("strb"),   "111110000000xxxxxxxx1xxxxxxxxxxx"),
    (Id::StrbImm,  Some("strb"),   "111110001000xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrhReg,  Some("strh"),   "111110000010xxxxxxxx000000xxxxxx"),
    (Id::StrhImm8, Some("strh"),   "111110000010xxxxxxxx1xxxxxxxxxxx"),
    (Id::StrhImm,  Some("strh"),   "111110001010xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrReg,   Some("str"),    "111110000100xxxxxxxx000000xxxxxx"),
    (Id::StrImm8,  Some("str"),    "111110000100xxxxxxxx1xxxxxxxxxxx"),
    (Id::StrImm,   Some("str"),    "111110001100xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrbReg,  Some("ldrb"),   "111110000001xxxxxxxx000000xxxxxx"),
    (Id::LdrbImm8, Some("ldrb"),   "111110000001xxxxxxxx1xxxxxxxxxxx"),
    (Id::LdrbImm,  Some("ldrb"),   "111110001001xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrhReg,  Some("ldrh"),   "111110000011xxxxxxxx000000xxxxxx"),
    (Id::LdrhImm8, Some("ldrh"),   "111110000011xxxxxxxx1xxxxxxxxxxx"),
    (Id::LdrhImm,  Some("ldrh"),   "111110001011xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrReg,   Some("ldr"),    "111110000101xxxxxxxx000000xxxxxx"),
    (Id::LdrImm8,  Some("ldr"),    "111110000101xxxxxxxx1xxxxxxxxxxx"),
    (Id::LdrImm,   Some("ldr"),    "111110001101xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrsbReg, Some("ldrsb"),  "111110010001xxxxxxxx000000xxxxxx"),
    (Id::LdrsbImm8,Some("ldrsb"),  "111110010001xxxxxxxx1xxxxxxxxxxx"),
    (Id::LdrsbImm, Some("ldrsb"),  "111110011001xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrshReg, Some("ldrsh"),  "111110010011xxxxxxxx000000xxxxxx"),
    (Id::LdrshImm8,Some("ldrsh"),  "111110010011xxxxxxxx1xxxxxxxxxxx"),
    (Id::LdrshImm, Some("ldrsh"),  "111110011011xxxxxxxxxxxxxxxxxxxx"),

    // Data-processing, register (shifts, extends).
    (Id::LslReg,   Some("lsl"),    "111110100000xxxx1111xxxx0000xxxx"),
    (Id::LsrReg,   Some("lsr"),    "111110100010xxxx1111xxxx0000xxxx"),
    (Id::AsrReg,   Some("asr"),    "111110100100xxxx1111xxxx0000xxxx"),
    (Id::RorReg,   Some("ror"),    "111110100110xxxx1111xxxx0000xxxx"),
    (Id::Sxth,     Some("sxth"),   "11111010000011111111xxxx10xxxxxx"),
    (Id::Sxtah,    Some("sxtah"),  "111110100000xxxx1111xxxx10xxxxxx"),
    (Id::Uxth,     Some("uxth"),   "11111010000111111111xxxx10xxxxxx"),
    (Id::Uxtah,    Some("uxtah"),  "111110100001xxxx1111xxxx10xxxxxx"),
    (Id::Sxtb16,   Some("sxtb16"), "11111010001011111111xxxx10xxxxxx"),
    (Id::Sxtab16,  Some("sxtab16"),"111110100010xxxx1111xxxx10xxxxxx"),
    (Id::Uxtb16,   Some("uxtb16"), "11111010001111111111xxxx10xxxxxx"),
    (Id::Uxtab16,  Some("uxtab16"),"111110100011xxxx1111xxxx10xxxxxx"),
    (Id::Sxtb,     Some("sxtb"),   "11111010010011111111xxxx10xxxxxx"),
    (Id::Sxtab,    Some("sxtab"),  "111110100100xxxx1111xxxx10xxxxxx"),
    (Id::Uxtb,     Some("uxtb"),   "11111010010111111111xxxx10xxxxxx"),
    (Id::Uxtab,    Some("uxtab"),  "111110100101xxxx1111xxxx10xxxxxx"),

    // Parallel add/subtract, signed then saturating/halving/unsigned.
    (Id::Sadd16,   Some("sadd16"), "111110101001xxxx1111xxxx0000xxxx"),
    (Id::Sasx,     Some("sasx"),   "111110101010xxxx1111xxxx0000xxxx"),
    (Id::Ssax,     Some("ssax"),   "111110101110xxxx1111xxxx0000xxxx"),
    (Id::Ssub16,   Some("ssub16"), "111110101101xxxx1111xxxx0000xxxx"),
    (Id::Sadd8,    Some("sadd8"),  "111110101000xxxx1111xxxx0000xxxx"),
    (Id::Ssub8,    Some("ssub8"),  "111110101100xxxx1111xxxx0000xxxx"),
    (Id::Qadd16,   Some("qadd16"), "111110101001xxxx1111xxxx0001xxxx"),
    (Id::Qasx,     Some("qasx"),   "111110101010xxxx1111xxxx0001xxxx"),
    (Id::Qsax,     Some("qsax"),   "111110101110xxxx1111xxxx0001xxxx"),
    (Id::Qsub16,   Some("qsub16"), "111110101101xxxx1111xxxx0001xxxx"),
    (Id::Qadd8,    Some("qadd8"),  "111110101000xxxx1111xxxx0001xxxx"),
    (Id::Qsub8,    Some("qsub8"),  "111110101100xxxx1111xxxx0001xxxx"),
    (Id::Shadd16,  Some("shadd16"),"111110101001xxxx1111xxxx0010xxxx"),
    (Id::Shasx,    Some("shasx"),  "111110101010xxxx1111xxxx0010xxxx"),
    (Id::Shsax,    Some("shsax"),  "111110101110xxxx1111xxxx0010xxxx"),
    (Id::Shsub16,  Some("shsub16"),"111110101101xxxx1111xxxx0010xxxx"),
    (Id::Shadd8,   Some("shadd8"), "111110101000xxxx1111xxxx0010xxxx"),
    (Id::Shsub8,   Some("shsub8"), "111110101100xxxx1111xxxx0010xxxx"),
    (Id::Uadd16,   Some("uadd16"), "111110101001xxxx1111xxxx0100xxxx"),
    (Id::Uasx,     Some("uasx"),   "111110101010xxxx1111xxxx0100xxxx"),
    (Id::Usax,     Some("usax"),   "111110101110xxxx1111xxxx0100xxxx"),
    (Id::Usub16,   Some("usub16"), "111110101101xxxx1111xxxx0100xxxx"),
    (Id::Uadd8,    Some("uadd8"),  "111110101000xxxx1111xxxx0100xxxx"),
    (Id::Usub8,    Some("usub8"),  "111110101100xxxx1111xxxx0100xxxx"),
    (Id::Uqadd16,  Some("uqadd16"),"111110101001xxxx1111xxxx0101xxxx"),
    (Id::Uqasx,    Some("uqasx"),  "111110101010xxxx1111xxxx0101xxxx"),
    (Id::Uqsax,    Some("uqsax"),  "111110101110xxxx1111xxxx0101xxxx"),
    (Id::Uqsub16,  Some("uqsub16"),"111110101101xxxx1111xxxx0101xxxx"),
    (Id::Uqadd8,   Some("uqadd8"), "111110101000xxxx1111xxxx0101xxxx"),
    (Id::Uqsub8,   Some("uqsub8"), "111110101100xxxx1111xxxx0101xxxx"),
    (Id::Uhadd16,  Some("uhadd16"),"111110101001xxxx1111xxxx0110xxxx"),
    (Id::Uhasx,    Some("uhasx"),  "111110101010xxxx1111xxxx0110xxxx"),
    (Id::Uhsax,    Some("uhsax"),  "111110101110xxxx1111xxxx0110xxxx"),
    (Id::Uhsub16,  Some("uhsub16"),"111110101101xxxx1111xxxx0110xxxx"),
    (Id::Uhadd8,   Some("uhadd8"), "111110101000xxxx1111xxxx0110xxxx"),
    (Id::Uhsub8,   Some("uhsub8"), "111110101100xxxx1111xxxx0110xxxx"),

    // Miscellaneous operations.
    (Id::Qadd,     Some("qadd"),   "111110101000xxxx1111xxxx1000xxxx"),
    (Id::Qdadd,    Some("qdadd"),  "111110101000xxxx1111xxxx1001xxxx"),
    (Id::Qsub,     Some("qsub"),   "111110101000xxxx1111xxxx1010xxxx"),
    (Id::Qdsub,    Some("qdsub"),  "111110101000xxxx1111xxxx1011xxxx"),
    (Id::Rev,      Some("rev"),    "111110101001xxxx1111xxxx1000xxxx"),
    (Id::Rev16,    Some("rev16"),  "111110101001xxxx1111xxxx1001xxxx"),
    (Id::Rbit,     Some("rbit"),   "111110101001xxxx1111xxxx1010xxxx"),
    (Id::Revsh,    Some("revsh"),  "111110101001xxxx1111xxxx1011xxxx"),
    (Id::Sel,      Some("sel"),    "111110101010xxxx1111xxxx1000xxxx"),
    (Id::Clz,      Some("clz"),    "111110101011xxxx1111xxxx1000xxxx"),

    // Multiplies and multiply-accumulate. The Ra = 1111 products come
    // before the accumulating rows that cover them.
    (Id::Mul,      Some("mul"),    "111110110000xxxx1111xxxx0000xxxx"),
    (Id::Mla,      Some("mla"),    "111110110000xxxxxxxxxxxx0000xxxx"),
    (Id::Mls,      Some("mls"),    "111110110000xxxxxxxxxxxx0001xxxx"),
    (Id::Smulxy,   Some("smul"),   "111110110001xxxx1111xxxx00xxxxxx"),
    (Id::Smlaxy,   Some("smla"),   "111110110001xxxxxxxxxxxx00xxxxxx"),
    (Id::Smuad,    Some("smuad"),  "111110110010xxxx1111xxxx000xxxxx"),
    (Id::Smlad,    Some("smlad"),  "111110110010xxxxxxxxxxxx000xxxxx"),
    (Id::Smulwy,   Some("smulw"),  "111110110011xxxx1111xxxx000xxxxx"),
    (Id::Smlawy,   Some("smlaw"),  "111110110011xxxxxxxxxxxx000xxxxx"),
    (Id::Smusd,    Some("smusd"),  "111110110100xxxx1111xxxx000xxxxx"),
    (Id::Smlsd,    Some("smlsd"),  "111110110100xxxxxxxxxxxx000xxxxx"),
    (Id::Smmul,    Some("smmul"),  "111110110101xxxx1111xxxx000xxxxx"),
    (Id::Smmla,    Some("smmla"),  "111110110101xxxxxxxxxxxx000xxxxx"),
    (Id::Smmls,    Some("smmls"),  "111110110110xxxxxxxxxxxx000xxxxx"),
    (Id::Usad8,    Some("usad8"),  "111110110111xxxx1111xxxx0000xxxx"),
    (Id::Usada8,   Some("usada8"), "111110110111xxxxxxxxxxxx0000xxxx"),

    // Long multiplies and divides.
    (Id::Smull,    Some("smull"),  "111110111000xxxxxxxxxxxx0000xxxx"),
    (Id::Sdiv,     Some("sdiv"),   "111110111001xxxxxxxxxxxx1111xxxx"),
    (Id::Umull,    Some("umull"),  "111110111010xxxxxxxxxxxx0000xxxx"),
    (Id::Udiv,     Some("udiv"),   "111110111011xxxxxxxxxxxx1111xxxx"),
    (Id::Smlal,    Some("smlal"),  "111110111100xxxxxxxxxxxx0000xxxx"),
    (Id::Smlalxy,  Some("smlal"),  "111110111100xxxxxxxxxxxx10xxxxxx"),
    (Id::Smlald,   Some("smlald"), "111110111100xxxxxxxxxxxx110xxxxx"),
    (Id::Smlsld,   Some("smlsld"), "111110111101xxxxxxxxxxxx110xxxxx"),
    (Id::Umlal,    Some("umlal"),  "111110111110xxxxxxxxxxxx0000xxxx"),
    (Id::Umaal,    Some("umaal"),  "111110111110xxxxxxxxxxxx0110xxxx"),

    // Advanced SIMD, three registers of the same length. The U bit moves
    // to bit 28 in the Thumb stream, everything else matches the A32
    // layout.
    (Id::Vand,     Some("vand"),   "111011110x00xxxxxxxx0001xxx1xxxx"),
    (Id::Vbic,     Some("vbic"),   "111011110x01xxxxxxxx0001xxx1xxxx"),
    (Id::Vorr,     Some("vorr"),   "111011110x10xxxxxxxx0001xxx1xxxx"),
    (Id::Vorn,     Some("vorn"),   "111011110x11xxxxxxxx0001xxx1xxxx"),
    (Id::Veor,     Some("veor"),   "111111110x00xxxxxxxx0001xxx1xxxx"),
    (Id::Vbsl,     Some("vbsl"),   "111111110x01xxxxxxxx0001xxx1xxxx"),
    (Id::Vbit,     Some("vbit"),   "111111110x10xxxxxxxx0001xxx1xxxx"),
    (Id::Vbif,     Some("vbif"),   "111111110x11xxxxxxxx0001xxx1xxxx"),
    (Id::Vqadd,    Some("vqadd"),  "111x11110xxxxxxxxxxx0000xxx1xxxx"),
    (Id::Vqsub,    Some("vqsub"),  "111x11110xxxxxxxxxxx0010xxx1xxxx"),
    (Id::VcgtReg,  Some("vcgt"),   "111x11110xxxxxxxxxxx0011xxx0xxxx"),
    (Id::VcgeReg,  Some("vcge"),   "111x11110xxxxxxxxxxx0011xxx1xxxx"),
    (Id::VshlReg,  Some("vshl"),   "111x11110xxxxxxxxxxx0100xxx0xxxx"),
    (Id::VqshlReg, Some("vqshl"),  "111x11110xxxxxxxxxxx0100xxx1xxxx"),
    (Id::Vrshl,    Some("vrshl"),  "111x11110xxxxxxxxxxx0101xxx0xxxx"),
    (Id::Vqrshl,   Some("vqrshl"), "111x11110xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vmax,     Some("vmax"),   "111x11110xxxxxxxxxxx0110xxx0xxxx"),
    (Id::Vmin,     Some("vmin"),   "111x11110xxxxxxxxxxx0110xxx1xxxx"),
    (Id::Vabd,     Some("vabd"),   "111x11110xxxxxxxxxxx0111xxx0xxxx"),
    (Id::Vaba,     Some("vaba"),   "111x11110xxxxxxxxxxx0111xxx1xxxx"),
    (Id::VaddInt,  Some("vadd"),   "111011110xxxxxxxxxxx1000xxx0xxxx"),
    (Id::VsubInt,  Some("vsub"),   "111111110xxxxxxxxxxx1000xxx0xxxx"),
    (Id::Vtst,     Some("vtst"),   "111011110xxxxxxxxxxx1000xxx1xxxx"),
    (Id::VceqInt,  Some("vceq"),   "111111110xxxxxxxxxxx1000xxx1xxxx"),
    (Id::VmlaInt,  Some("vmla"),   "111011110xxxxxxxxxxx1001xxx0xxxx"),
    (Id::VmlsInt,  Some("vmls"),   "111111110xxxxxxxxxxx1001xxx0xxxx"),
    (Id::VmulInt,  Some("vmul"),   "111011110xxxxxxxxxxx1001xxx1xxxx"),
    (Id::VmulPoly, Some("vmul"),   "111111110xxxxxxxxxxx1001xxx1xxxx"),
    (Id::Vpmax,    Some("vpmax"),  "111x11110xxxxxxxxxxx1010xxx0xxxx"),
    (Id::Vpmin,    Some("vpmin"),  "111x11110xxxxxxxxxxx1010xxx1xxxx"),
    (Id::Vqdmulh,  Some("vqdmulh"), "111011110xxxxxxxxxxx1011xxx0xxxx"),
    (Id::Vqrdmulh, Some("vqrdmulh"), "111111110xxxxxxxxxxx1011xxx0xxxx"),
    (Id::VpaddInt, Some("vpadd"),  "111011110xxxxxxxxxxx1011xxx1xxxx"),
    (Id::VaddFp,   Some("vadd"),   "111011110x0xxxxxxxxx1101xxx0xxxx"),
    (Id::VsubFp,   Some("vsub"),   "111011110x1xxxxxxxxx1101xxx0xxxx"),
    (Id::VpaddFp,  Some("vpadd"),  "111111110x0xxxxxxxxx1101xxx0xxxx"),
    (Id::VabdFp,   Some("vabd"),   "111111110x1xxxxxxxxx1101xxx0xxxx"),
    (Id::VmlaFp,   Some("vmla"),   "111011110x0xxxxxxxxx1101xxx1xxxx"),
    (Id::VmlsFp,   Some("vmls"),   "111011110x1xxxxxxxxx1101xxx1xxxx"),
    (Id::VmulFp,   Some("vmul"),   "111111110x0xxxxxxxxx1101xxx1xxxx"),
    (Id::VceqFp,   Some("vceq"),   "111011110x0xxxxxxxxx1110xxx0xxxx"),
    (Id::VcgeFp,   Some("vcge"),   "111111110x0xxxxxxxxx1110xxx0xxxx"),
    (Id::VcgtFp,   Some("vcgt"),   "111111110x1xxxxxxxxx1110xxx0xxxx"),
    (Id::VmaxFp,   Some("vmax"),   "111011110x0xxxxxxxxx1111xxx0xxxx"),
    (Id::VminFp,   Some("vmin"),   "111011110x1xxxxxxxxx1111xxx0xxxx"),
    (Id::Vrecps,   Some("vrecps"), "111011110x0xxxxxxxxx1111xxx1xxxx"),
    (Id::Vrsqrts,  Some("vrsqrts"), "111011110x1xxxxxxxxx1111xxx1xxxx"),

    // Advanced SIMD, one register and a modified immediate. One family
    // row; cmode and op select vmov/vorr/vbic/vmvn at operand level.
    // Must precede the shift rows, which leave imm6 free.
    (Id::VmovModImm, None,          "111x11111x000xxxxxxxxxxx0xx1xxxx"),

    // Advanced SIMD, two registers and a shift amount (bit 4 = 1).
    // vmovl is the zero-shift corner of vshll and goes first.
    (Id::Vshr,     Some("vshr"),  "111x11111xxxxxxxxxxx0000xxx1xxxx"),
    (Id::Vsra,     Some("vsra"),  "111x11111xxxxxxxxxxx0001xxx1xxxx"),
    (Id::Vrshr,    Some("vrshr"), "111x11111xxxxxxxxxxx0010xxx1xxxx"),
    (Id::Vrsra,    Some("vrsra"), "111x11111xxxxxxxxxxx0011xxx1xxxx"),
    (Id::Vsri,     Some("vsri"),  "111111111xxxxxxxxxxx0100xxx1xxxx"),
    (Id::VshlImm,  Some("vshl"),  "111011111xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vsli,     Some("vsli"),  "111111111xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vqshlu,   Some("vqshlu"), "111111111xxxxxxxxxxx0110xxx1xxxx"),
    (Id::VqshlImm, Some("vqshl"), "111x11111xxxxxxxxxxx0111xxx1xxxx"),
    (Id::Vshrn,    Some("vshrn"), "111011111xxxxxxxxxxx100000x1xxxx"),
    (Id::Vrshrn,   Some("vrshrn"), "111011111xxxxxxxxxxx100001x1xxxx"),
    (Id::Vqshrun,  Some("vqshrun"), "111111111xxxxxxxxxxx100000x1xxxx"),
    (Id::Vqrshrun, Some("vqrshrun"), "111111111xxxxxxxxxxx100001x1xxxx"),
    (Id::Vqshrn,   Some("vqshrn"), "111x11111xxxxxxxxxxx100100x1xxxx"),
    (Id::Vqrshrn,  Some("vqrshrn"), "111x11111xxxxxxxxxxx100101x1xxxx"),
    (Id::Vmovl,    Some("vmovl"), "111x11111xxxx000xxxx101000x1xxxx"),
    (Id::Vshll,    Some("vshll"), "111x11111xxxxxxxxxxx101000x1xxxx"),
    (Id::VcvtFixedSimd, Some("vcvt"),  "111x11111xxxxxxxxxxx111x0xx1xxxx"),

    // Advanced SIMD permutes and two-register miscellany (bits [21:20]
    // = 11). Listed before the long and scalar rows, whose size field
    // stays free.
    (Id::Vext,     Some("vext"),  "111011111x11xxxxxxxxxxxxxxx0xxxx"),
    (Id::Vtbl,     Some("vtbl"),  "111111111x11xxxxxxxx10xxx0x0xxxx"),
    (Id::Vtbx,     Some("vtbx"),  "111111111x11xxxxxxxx10xxx1x0xxxx"),
    (Id::VdupScalar, Some("vdup"),  "111111111x11xxxxxxxx11000xx0xxxx"),
    (Id::Vrev64,   Some("vrev64"), "111111111x11xx00xxxx00000xx0xxxx"),
    (Id::Vrev32,   Some("vrev32"), "111111111x11xx00xxxx00001xx0xxxx"),
    (Id::Vrev16,   Some("vrev16"), "111111111x11xx00xxxx00010xx0xxxx"),
    (Id::Vpaddl,   Some("vpaddl"), "111111111x11xx00xxxx0010xxx0xxxx"),
    (Id::Vcls,     Some("vcls"),  "111111111x11xx00xxxx01000xx0xxxx"),
    (Id::Vclz,     Some("vclz"),  "111111111x11xx00xxxx01001xx0xxxx"),
    (Id::Vcnt,     Some("vcnt"),  "111111111x11xx00xxxx01010xx0xxxx"),
    (Id::VmvnReg,  Some("vmvn"),  "111111111x11xx00xxxx01011xx0xxxx"),
    (Id::Vpadal,   Some("vpadal"), "111111111x11xx00xxxx0110xxx0xxxx"),
    (Id::Vqabs,    Some("vqabs"), "111111111x11xx00xxxx01110xx0xxxx"),
    (Id::Vqneg,    Some("vqneg"), "111111111x11xx00xxxx01111xx0xxxx"),
    (Id::VcgtZero, Some("vcgt"),  "111111111x11xx01xxxx0x000xx0xxxx"),
    (Id::VcgeZero, Some("vcge"),  "111111111x11xx01xxxx0x001xx0xxxx"),
    (Id::VceqZero, Some("vceq"),  "111111111x11xx01xxxx0x010xx0xxxx"),
    (Id::VcleZero, Some("vcle"),  "111111111x11xx01xxxx0x011xx0xxxx"),
    (Id::VcltZero, Some("vclt"),  "111111111x11xx01xxxx0x100xx0xxxx"),
    (Id::VabsSimd, Some("vabs"),  "111111111x11xx01xxxx0x110xx0xxxx"),
    (Id::VnegSimd, Some("vneg"),  "111111111x11xx01xxxx0x111xx0xxxx"),
    (Id::Vswp,     Some("vswp"),  "111111111x11xx10xxxx00000xx0xxxx"),
    (Id::Vtrn,     Some("vtrn"),  "111111111x11xx10xxxx00001xx0xxxx"),
    (Id::Vuzp,     Some("vuzp"),  "111111111x11xx10xxxx00010xx0xxxx"),
    (Id::Vzip,     Some("vzip"),  "111111111x11xx10xxxx00011xx0xxxx"),
    (Id::Vmovn,    Some("vmovn"), "111111111x11xx10xxxx001000x0xxxx"),
    (Id::Vqmovun,  Some("vqmovun"), "111111111x11xx10xxxx001001x0xxxx"),
    (Id::Vqmovn,   Some("vqmovn"), "111111111x11xx10xxxx00101xx0xxxx"),
    (Id::VshllMax, Some("vshll"), "111111111x11xx10xxxx001100x0xxxx"),
    (Id::Vcvth,    Some("vcvt"),  "111111111x11xx10xxxx0110x0x0xxxx"),
    (Id::Vrecpe,   Some("vrecpe"), "111111111x11xx11xxxx0010xxx0xxxx"),
    (Id::Vrsqrte,  Some("vrsqrte"), "111111111x11xx11xxxx0011xxx0xxxx"),
    (Id::VcvtIntSimd, Some("vcvt"),  "111111111x11xx11xxxx011xxxx0xxxx"),

    // Advanced SIMD, three registers of different lengths (bit 6 = 0).
    (Id::Vaddl,    Some("vaddl"), "111x11111xxxxxxxxxxx0000x0x0xxxx"),
    (Id::Vaddw,    Some("vaddw"), "111x11111xxxxxxxxxxx0001x0x0xxxx"),
    (Id::Vsubl,    Some("vsubl"), "111x11111xxxxxxxxxxx0010x0x0xxxx"),
    (Id::Vsubw,    Some("vsubw"), "111x11111xxxxxxxxxxx0011x0x0xxxx"),
    (Id::Vaddhn,   Some("vaddhn"), "111011111xxxxxxxxxxx0100x0x0xxxx"),
    (Id::Vraddhn,  Some("vraddhn"), "111111111xxxxxxxxxxx0100x0x0xxxx"),
    (Id::Vabal,    Some("vabal"), "111x11111xxxxxxxxxxx0101x0x0xxxx"),
    (Id::Vsubhn,   Some("vsubhn"), "111011111xxxxxxxxxxx0110x0x0xxxx"),
    (Id::Vrsubhn,  Some("vrsubhn"), "111111111xxxxxxxxxxx0110x0x0xxxx"),
    (Id::Vabdl,    Some("vabdl"), "111x11111xxxxxxxxxxx0111x0x0xxxx"),
    (Id::Vmlal,    Some("vmlal"), "111x11111xxxxxxxxxxx1000x0x0xxxx"),
    (Id::Vqdmlal,  Some("vqdmlal"), "111011111xxxxxxxxxxx1001x0x0xxxx"),
    (Id::Vmlsl,    Some("vmlsl"), "111x11111xxxxxxxxxxx1010x0x0xxxx"),
    (Id::Vqdmlsl,  Some("vqdmlsl"), "111011111xxxxxxxxxxx1011x0x0xxxx"),
    (Id::Vmull,    Some("vmull"), "111x11111xxxxxxxxxxx1100x0x0xxxx"),
    (Id::Vqdmull,  Some("vqdmull"), "111011111xxxxxxxxxxx1101x0x0xxxx"),
    (Id::VmullPoly, Some("vmull"), "111011111xxxxxxxxxxx1110x0x0xxxx"),

    // Advanced SIMD, two registers and a scalar (bit 6 = 1).
    (Id::VmlaScalar, Some("vmla"),  "111x11111xxxxxxxxxxx0000x1x0xxxx"),
    (Id::VmlalScalar, Some("vmlal"), "111x11111xxxxxxxxxxx0010x1x0xxxx"),
    (Id::VqdmlalScalar, Some("vqdmlal"), "111011111xxxxxxxxxxx0011x1x0xxxx"),
    (Id::VmlsScalar, Some("vmls"),  "111x11111xxxxxxxxxxx0100x1x0xxxx"),
    (Id::VmlslScalar, Some("vmlsl"), "111x11111xxxxxxxxxxx0110x1x0xxxx"),
    (Id::VqdmlslScalar, Some("vqdmlsl"), "111011111xxxxxxxxxxx0111x1x0xxxx"),
    (Id::VmulScalar, Some("vmul"),  "111x11111xxxxxxxxxxx1000x1x0xxxx"),
    (Id::VmullScalar, Some("vmull"), "111x11111xxxxxxxxxxx1010x1x0xxxx"),
    (Id::VqdmullScalar, Some("vqdmull"), "111011111xxxxxxxxxxx1011x1x0xxxx"),
    (Id::VqdmulhScalar, Some("vqdmulh"), "111x11111xxxxxxxxxxx1100x1x0xxxx"),
    (Id::VqrdmulhScalar, Some("vqrdmulh"), "111x11111xxxxxxxxxxx1101x1x0xxxx"),

    // Advanced SIMD element and structure load/store. Family rows only.
    (Id::VstMulti,  None,          "111110010x00xxxxxxxxxxxxxxxxxxxx"),
    (Id::VldMulti,  None,          "111110010x10xxxxxxxxxxxxxxxxxxxx"),
    (Id::VstSingle, None,          "111110011x00xxxxxxxxxxxxxxxxxxxx"),
    (Id::VldSingle, None,          "111110011x10xxxxxxxxxxxxxxxxxxxx"),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn position(id: Id) -> usize {
        TABLE.iter().position(|e| e.id() == id).unwrap()
    }

    #[test]
    fn every_pattern_is_thirty_two_bits_wide() {
        for entry in TABLE.iter() {
            assert_eq!(entry.pattern().width(), WIDTH);
        }
    }

    #[test]
    fn pop_and_push_precede_the_ldm_and_stm_generals() {
        assert!(position(Id::Pop) < position(Id::Ldmia));
        assert!(position(Id::Push) < position(Id::Stmdb));
        let pop = &TABLE[position(Id::Pop)];
        assert!(pop.matches(0xE8BD_4000));
    }

    #[test]
    fn table_branches_precede_the_dual_transfers() {
        assert!(position(Id::Tbb) < position(Id::LdrdImm));
        assert!(position(Id::Tbh) < position(Id::LdrdImm));
        assert!(position(Id::Ldrex) < position(Id::LdrdImm));
    }

    #[test]
    fn tests_precede_their_general_opcode_rows() {
        assert!(position(Id::TstReg) < position(Id::AndReg));
        assert!(position(Id::TeqReg) < position(Id::EorReg));
        assert!(position(Id::CmpReg) < position(Id::SubReg));
        assert!(position(Id::CmnImm) < position(Id::AddImm));
    }

    #[test]
    fn misc_control_rows_precede_the_conditional_branch() {
        assert!(position(Id::Dsb) < position(Id::BCond));
        assert!(position(Id::MsrReg) < position(Id::BCond));
        assert!(position(Id::Undefined) < position(Id::BCond));
    }

    #[test]
    fn preload_and_literal_rows_precede_the_general_loads() {
        assert!(position(Id::PldImm) < position(Id::LdrbImm));
        assert!(position(Id::LdrLit) < position(Id::LdrImm));
    }

    #[test]
    fn vfp_rows_precede_the_general_coprocessor_rows() {
        assert!(position(Id::Vadd) < position(Id::Cdp));
        assert!(position(Id::Vmrs) < position(Id::Mrc));
        assert!(position(Id::Vldr) < position(Id::LdcImm));
        assert!(position(Id::VmovFromCorePair) < position(Id::Mcrr));
    }

    #[test]
    fn simd_specific_rows_precede_their_generals() {
        assert!(position(Id::VmovModImm) < position(Id::Vshr));
        assert!(position(Id::Vmovl) < position(Id::Vshll));
        assert!(position(Id::Vtbl) < position(Id::Vmlal));
        assert!(position(Id::Vext) < position(Id::Vaddl));
        assert!(position(Id::Vrev64) < position(Id::VmlaScalar));
        assert!(TABLE[position(Id::VmovModImm)].matches(0xEF80_0010));
        assert!(TABLE[position(Id::Vrev32)].matches(0xFFB0_0080));
    }

    #[test]
    fn mul_with_ra_pc_precedes_mla() {
        assert!(position(Id::Mul) < position(Id::Mla));
        let mul = &TABLE[position(Id::Mul)];
        assert!(mul.matches(0xFB00_F101));
    }
}
