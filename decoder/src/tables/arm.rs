//! ARM-state (A32) encoding table.
//!
//! Entries are scanned top to bottom and the first match wins, so the order
//! below is part of the data: a specific encoding is always listed before
//! any general encoding whose pattern also covers it. The big orderings at
//! play here:
//!
//! - the unconditional space (cond = 1111) comes first, otherwise `b`/`bl`
//!   and the coprocessor rows would swallow `blx` and the `*2` coprocessor
//!   variants;
//! - miscellaneous rows (`bx`, `mrs`, saturating add/sub, halfword
//!   multiplies) come before the data-processing register rows that share
//!   the 000x opcode space;
//! - multiplies and synchronization (bits [7:4] = 1001) come before the
//!   extra load/store rows (bits [7:4] = 1x11);
//! - literal (Rn = 1111) and unprivileged (P = 0, W = 1) forms come before
//!   the general immediate/register forms that cover them;
//! - `adr` comes before `add`/`sub` immediate, `mov` before the
//!   shift-by-immediate rows, `pop`/`push` before `ldm`/`stm`.

use once_cell::sync::Lazy;

use crate::instruction::InstructionId as Id;
use crate::table::{Row, TableEntry, build_table};

pub const WIDTH: u8 = 32;

pub static TABLE: Lazy<Vec<TableEntry>> = Lazy::new(|| build_table(WIDTH, ROWS));

#[rustfmt::skip]
static ROWS: &[Row] = &[
    // Unconditional space (cond = 1111). Must stay ahead of every
    // cond = xxxx row below.
    (Id::Cps,      Some("cps"),    "111100010000xxx00000000xxx0xxxxx"),
    (Id::Setend,   Some("setend"), "1111000100000001000000x000000000"),
    (Id::PliImm,   Some("pli"),    "11110100x101xxxx1111xxxxxxxxxxxx"),
    (Id::PldwImm,  Some("pldw"),   "11110101x001xxxx1111xxxxxxxxxxxx"),
    (Id::PldLit,   Some("pld"),    "11110101x10111111111xxxxxxxxxxxx"),
    (Id::PldImm,   Some("pld"),    "11110101x101xxxx1111xxxxxxxxxxxx"),
    (Id::PliReg,   Some("pli"),    "11110110x101xxxx1111xxxxxxx0xxxx"),
    (Id::PldwReg,  Some("pldw"),   "11110111x001xxxx1111xxxxxxx0xxxx"),
    (Id::PldReg,   Some("pld"),    "11110111x101xxxx1111xxxxxxx0xxxx"),
    (Id::Clrex,    Some("clrex"),  "11110101011111111111000000011111"),
    (Id::Dsb,      Some("dsb"),    "1111010101111111111100000100xxxx"),
    (Id::Dmb,      Some("dmb"),    "1111010101111111111100000101xxxx"),
    (Id::Isb,      Some("isb"),    "1111010101111111111100000110xxxx"),
    (Id::Srs,      Some("srs"),    "1111100xx1x0110100000101000xxxxx"),
    (Id::Rfe,      Some("rfe"),    "1111100xx0x1xxxx0000101000000000"),
    (Id::BlxImm,   Some("blx"),    "1111101xxxxxxxxxxxxxxxxxxxxxxxxx"),
    (Id::Mcrr2,    Some("mcrr2"),  "111111000100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mrrc2,    Some("mrrc2"),  "111111000101xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stc2,     Some("stc2"),   "1111110xxxx0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldc2Lit,  Some("ldc2"),   "1111110xxxx11111xxxxxxxxxxxxxxxx"),
    (Id::Ldc2Imm,  Some("ldc2"),   "1111110xxxx1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mcr2,     Some("mcr2"),   "11111110xxx0xxxxxxxxxxxxxxx1xxxx"),
    (Id::Mrc2,     Some("mrc2"),   "11111110xxx1xxxxxxxxxxxxxxx1xxxx"),
    (Id::Cdp2,     Some("cdp2"),   "11111110xxxxxxxxxxxxxxxxxxx0xxxx"),

    // Advanced SIMD, three registers of the same length (bits [31:25] =
    // 1111001). The opcode nibble, the U bit and bit 4 identify the
    // operation; sz picks the element size and stays free.
    (Id::Vand,     Some("vand"),   "111100100x00xxxxxxxx0001xxx1xxxx"),
    (Id::Vbic,     Some("vbic"),   "111100100x01xxxxxxxx0001xxx1xxxx"),
    (Id::Vorr,     Some("vorr"),   "111100100x10xxxxxxxx0001xxx1xxxx"),
    (Id::Vorn,     Some("vorn"),   "111100100x11xxxxxxxx0001xxx1xxxx"),
    (Id::Veor,     Some("veor"),   "111100110x00xxxxxxxx0001xxx1xxxx"),
    (Id::Vbsl,     Some("vbsl"),   "111100110x01xxxxxxxx0001xxx1xxxx"),
    (Id::Vbit,     Some("vbit"),   "111100110x10xxxxxxxx0001xxx1xxxx"),
    (Id::Vbif,     Some("vbif"),   "111100110x11xxxxxxxx0001xxx1xxxx"),
    (Id::Vqadd,    Some("vqadd"),  "1111001x0xxxxxxxxxxx0000xxx1xxxx"),
    (Id::Vqsub,    Some("vqsub"),  "1111001x0xxxxxxxxxxx0010xxx1xxxx"),
    (Id::VcgtReg,  Some("vcgt"),   "1111001x0xxxxxxxxxxx0011xxx0xxxx"),
    (Id::VcgeReg,  Some("vcge"),   "1111001x0xxxxxxxxxxx0011xxx1xxxx"),
    (Id::VshlReg,  Some("vshl"),   "1111001x0xxxxxxxxxxx0100xxx0xxxx"),
    (Id::VqshlReg, Some("vqshl"),  "1111001x0xxxxxxxxxxx0100xxx1xxxx"),
    (Id::Vrshl,    Some("vrshl"),  "1111001x0xxxxxxxxxxx0101xxx0xxxx"),
    (Id::Vqrshl,   Some("vqrshl"), "1111001x0xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vmax,     Some("vmax"),   "1111001x0xxxxxxxxxxx0110xxx0xxxx"),
    (Id::Vmin,     Some("vmin"),   "1111001x0xxxxxxxxxxx0110xxx1xxxx"),
    (Id::Vabd,     Some("vabd"),   "1111001x0xxxxxxxxxxx0111xxx0xxxx"),
    (Id::Vaba,     Some("vaba"),   "1111001x0xxxxxxxxxxx0111xxx1xxxx"),
    (Id::VaddInt,  Some("vadd"),   "111100100xxxxxxxxxxx1000xxx0xxxx"),
    (Id::VsubInt,  Some("vsub"),   "111100110xxxxxxxxxxx1000xxx0xxxx"),
    (Id::Vtst,     Some("vtst"),   "111100100xxxxxxxxxxx1000xxx1xxxx"),
    (Id::VceqInt,  Some("vceq"),   "111100110xxxxxxxxxxx1000xxx1xxxx"),
    (Id::VmlaInt,  Some("vmla"),   "111100100xxxxxxxxxxx1001xxx0xxxx"),
    (Id::VmlsInt,  Some("vmls"),   "111100110xxxxxxxxxxx1001xxx0xxxx"),
    (Id::VmulInt,  Some("vmul"),   "111100100xxxxxxxxxxx1001xxx1xxxx"),
    (Id::VmulPoly, Some("vmul"),   "111100110xxxxxxxxxxx1001xxx1xxxx"),
    (Id::Vpmax,    Some("vpmax"),  "1111001x0xxxxxxxxxxx1010xxx0xxxx"),
    (Id::Vpmin,    Some("vpmin"),  "1111001x0xxxxxxxxxxx1010xxx1xxxx"),
    (Id::Vqdmulh,  Some("vqdmulh"), "111100100xxxxxxxxxxx1011xxx0xxxx"),
    (Id::Vqrdmulh, Some("vqrdmulh"), "111100110xxxxxxxxxxx1011xxx0xxxx"),
    (Id::VpaddInt, Some("vpadd"),  "111100100xxxxxxxxxxx1011xxx1xxxx"),
    (Id::VaddFp,   Some("vadd"),   "111100100x0xxxxxxxxx1101xxx0xxxx"),
    (Id::VsubFp,   Some("vsub"),   "111100100x1xxxxxxxxx1101xxx0xxxx"),
    (Id::VpaddFp,  Some("vpadd"),  "111100110x0xxxxxxxxx1101xxx0xxxx"),
    (Id::VabdFp,   Some("vabd"),   "111100110x1xxxxxxxxx1101xxx0xxxx"),
    (Id::VmlaFp,   Some("vmla"),   "111100100x0xxxxxxxxx1101xxx1xxxx"),
    (Id::VmlsFp,   Some("vmls"),   "111100100x1xxxxxxxxx1101xxx1xxxx"),
    (Id::VmulFp,   Some("vmul"),   "111100110x0xxxxxxxxx1101xxx1xxxx"),
    (Id::VceqFp,   Some("vceq"),   "111100100x0xxxxxxxxx1110xxx0xxxx"),
    (Id::VcgeFp,   Some("vcge"),   "111100110x0xxxxxxxxx1110xxx0xxxx"),
    (Id::VcgtFp,   Some("vcgt"),   "111100110x1xxxxxxxxx1110xxx0xxxx"),
    (Id::VmaxFp,   Some("vmax"),   "111100100x0xxxxxxxxx1111xxx0xxxx"),
    (Id::VminFp,   Some("vmin"),   "111100100x1xxxxxxxxx1111xxx0xxxx"),
    (Id::Vrecps,   Some("vrecps"), "111100100x0xxxxxxxxx1111xxx1xxxx"),
    (Id::Vrsqrts,  Some("vrsqrts"), "111100100x1xxxxxxxxx1111xxx1xxxx"),

    // Advanced SIMD, one register and a modified immediate. One family
    // row; cmode and op select vmov/vorr/vbic/vmvn at operand level.
    // Must precede the shift rows, which leave imm6 free.
    (Id::VmovModImm, None,          "1111001x1x000xxxxxxxxxxx0xx1xxxx"),

    // Advanced SIMD, two registers and a shift amount (bit 4 = 1).
    // vmovl is the zero-shift corner of vshll and goes first.
    (Id::Vshr,     Some("vshr"),  "1111001x1xxxxxxxxxxx0000xxx1xxxx"),
    (Id::Vsra,     Some("vsra"),  "1111001x1xxxxxxxxxxx0001xxx1xxxx"),
    (Id::Vrshr,    Some("vrshr"), "1111001x1xxxxxxxxxxx0010xxx1xxxx"),
    (Id::Vrsra,    Some("vrsra"), "1111001x1xxxxxxxxxxx0011xxx1xxxx"),
    (Id::Vsri,     Some("vsri"),  "111100111xxxxxxxxxxx0100xxx1xxxx"),
    (Id::VshlImm,  Some("vshl"),  "111100101xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vsli,     Some("vsli"),  "111100111xxxxxxxxxxx0101xxx1xxxx"),
    (Id::Vqshlu,   Some("vqshlu"), "111100111xxxxxxxxxxx0110xxx1xxxx"),
    (Id::VqshlImm, Some("vqshl"), "1111001x1xxxxxxxxxxx0111xxx1xxxx"),
    (Id::Vshrn,    Some("vshrn"), "111100101xxxxxxxxxxx100000x1xxxx"),
    (Id::Vrshrn,   Some("vrshrn"), "111100101xxxxxxxxxxx100001x1xxxx"),
    (Id::Vqshrun,  Some("vqshrun"), "111100111xxxxxxxxxxx100000x1xxxx"),
    (Id::Vqrshrun, Some("vqrshrun"), "111100111xxxxxxxxxxx100001x1xxxx"),
    (Id::Vqshrn,   Some("vqshrn"), "1111001x1xxxxxxxxxxx100100x1xxxx"),
    (Id::Vqrshrn,  Some("vqrshrn"), "1111001x1xxxxxxxxxxx100101x1xxxx"),
    (Id::Vmovl,    Some("vmovl"), "1111001x1xxxx000xxxx101000x1xxxx"),
    (Id::Vshll,    Some("vshll"), "1111001x1xxxxxxxxxxx101000x1xxxx"),
    (Id::VcvtFixedSimd, Some("vcvt"),  "1111001x1xxxxxxxxxxx111x0xx1xxxx"),

    // Advanced SIMD permutes and two-register miscellany (bits [21:20]
    // = 11). Listed before the long and scalar rows, whose size field
    // stays free.
    (Id::Vext,     Some("vext"),  "111100101x11xxxxxxxxxxxxxxx0xxxx"),
    (Id::Vtbl,     Some("vtbl"),  "111100111x11xxxxxxxx10xxx0x0xxxx"),
    (Id::Vtbx,     Some("vtbx"),  "111100111x11xxxxxxxx10xxx1x0xxxx"),
    (Id::VdupScalar, Some("vdup"),  "111100111x11xxxxxxxx11000xx0xxxx"),
    (Id::Vrev64,   Some("vrev64"), "111100111x11xx00xxxx00000xx0xxxx"),
    (Id::Vrev32,   Some("vrev32"), "111100111x11xx00xxxx00001xx0xxxx"),
    (Id::Vrev16,   Some("vrev16"), "111100111x11xx00xxxx00010xx0xxxx"),
    (Id::Vpaddl,   Some("vpaddl"), "111100111x11xx00xxxx0010xxx0xxxx"),
    (Id::Vcls,     Some("vcls"),  "111100111x11xx00xxxx01000xx0xxxx"),
    (Id::Vclz,     Some("vclz"),  "111100111x11xx00xxxx01001xx0xxxx"),
    (Id::Vcnt,     Some("vcnt"),  "111100111x11xx00xxxx01010xx0xxxx"),
    (Id::VmvnReg,  Some("vmvn"),  "111100111x11xx00xxxx01011xx0xxxx"),
    (Id::Vpadal,   Some("vpadal"), "111100111x11xx00xxxx0110xxx0xxxx"),
    (Id::Vqabs,    Some("vqabs"), "111100111x11xx00xxxx01110xx0xxxx"),
    (Id::Vqneg,    Some("vqneg"), "111100111x11xx00xxxx01111xx0xxxx"),
    (Id::VcgtZero, Some("vcgt"),  "111100111x11xx01xxxx0x000xx0xxxx"),
    (Id::VcgeZero, Some("vcge"),  "111100111x11xx01xxxx0x001xx0xxxx"),
    (Id::VceqZero, Some("vceq"),  "111100111x11xx01xxxx0x010xx0xxxx"),
    (Id::VcleZero, Some("vcle"),  "111100111x11xx01xxxx0x011xx0xxxx"),
    (Id::VcltZero, Some("vclt"),  "111100111x11xx01xxxx0x100xx0xxxx"),
    (Id::VabsSimd, Some("vabs"),  "111100111x11xx01xxxx0x110xx0xxxx"),
    (Id::VnegSimd, Some("vneg"),  "111100111x11xx01xxxx0x111xx0xxxx"),
    (Id::Vswp,     Some("vswp"),  "111100111x11xx10xxxx00000xx0xxxx"),
    (Id::Vtrn,     Some("vtrn"),  "111100111x11xx10xxxx00001xx0xxxx"),
    (Id::Vuzp,     Some("vuzp"),  "111100111x11xx10xxxx00010xx0xxxx"),
    (Id::Vzip,     Some("vzip"),  "111100111x11xx10xxxx00011xx0xxxx"),
    (Id::Vmovn,    Some("vmovn"), "111100111x11xx10xxxx001000x0xxxx"),
    (Id::Vqmovun,  Some("vqmovun"), "111100111x11xx10xxxx001001x0xxxx"),
    (Id::Vqmovn,   Some("vqmovn"), "111100111x11xx10xxxx00101xx0xxxx"),
    (Id::VshllMax, Some("vshll"), "111100111x11xx10xxxx001100x0xxxx"),
    (Id::Vcvth,    Some("vcvt"),  "111100111x11xx10xxxx0110x0x0xxxx"),
    (Id::Vrecpe,   Some("vrecpe"), "111100111x11xx11xxxx0010xxx0xxxx"),
    (Id::Vrsqrte,  Some("vrsqrte"), "111100111x11xx11xxxx0011xxx0xxxx"),
    (Id::VcvtIntSimd, Some("vcvt"),  "111100111x11xx11xxxx011xxxx0xxxx"),

    // Advanced SIMD, three registers of different lengths (bit 6 = 0).
    (Id::Vaddl,    Some("vaddl"), "1111001x1xxxxxxxxxxx0000x0x0xxxx"),
    (Id::Vaddw,    Some("vaddw"), "1111001x1xxxxxxxxxxx0001x0x0xxxx"),
    (Id::Vsubl,    Some("vsubl"), "1111001x1xxxxxxxxxxx0010x0x0xxxx"),
    (Id::Vsubw,    Some("vsubw"), "1111001x1xxxxxxxxxxx0011x0x0xxxx"),
    (Id::Vaddhn,   Some("vaddhn"), "111100101xxxxxxxxxxx0100x0x0xxxx"),
    (Id::Vraddhn,  Some("vraddhn"), "111100111xxxxxxxxxxx0100x0x0xxxx"),
    (Id::Vabal,    Some("vabal"), "1111001x1xxxxxxxxxxx0101x0x0xxxx"),
    (Id::Vsubhn,   Some("vsubhn"), "111100101xxxxxxxxxxx0110x0x0xxxx"),
    (Id::Vrsubhn,  Some("vrsubhn"), "111100111xxxxxxxxxxx0110x0x0xxxx"),
    (Id::Vabdl,    Some("vabdl"), "1111001x1xxxxxxxxxxx0111x0x0xxxx"),
    (Id::Vmlal,    Some("vmlal"), "1111001x1xxxxxxxxxxx1000x0x0xxxx"),
    (Id::Vqdmlal,  Some("vqdmlal"), "111100101xxxxxxxxxxx1001x0x0xxxx"),
    (Id::Vmlsl,    Some("vmlsl"), "1111001x1xxxxxxxxxxx1010x0x0xxxx"),
    (Id::Vqdmlsl,  Some("vqdmlsl"), "111100101xxxxxxxxxxx1011x0x0xxxx"),
    (Id::Vmull,    Some("vmull"), "1111001x1xxxxxxxxxxx1100x0x0xxxx"),
    (Id::Vqdmull,  Some("vqdmull"), "111100101xxxxxxxxxxx1101x0x0xxxx"),
    (Id::VmullPoly, Some("vmull"), "111100101xxxxxxxxxxx1110x0x0xxxx"),

    // Advanced SIMD, two registers and a scalar (bit 6 = 1).
    (Id::VmlaScalar, Some("vmla"),  "1111001x1xxxxxxxxxxx0000x1x0xxxx"),
    (Id::VmlalScalar, Some("vmlal"), "1111001x1xxxxxxxxxxx0010x1x0xxxx"),
    (Id::VqdmlalScalar, Some("vqdmlal"), "111100101xxxxxxxxxxx0011x1x0xxxx"),
    (Id::VmlsScalar, Some("vmls"),  "1111001x1xxxxxxxxxxx0100x1x0xxxx"),
    (Id::VmlslScalar, Some("vmlsl"), "1111001x1xxxxxxxxxxx0110x1x0xxxx"),
    (Id::VqdmlslScalar, Some("vqdmlsl"), "111100101xxxxxxxxxxx0111x1x0xxxx"),
    (Id::VmulScalar, Some("vmul"),  "1111001x1xxxxxxxxxxx1000x1x0xxxx"),
    (Id::VmullScalar, Some("vmull"), "1111001x1xxxxxxxxxxx1010x1x0xxxx"),
    (Id::VqdmullScalar, Some("vqdmull"), "111100101xxxxxxxxxxx1011x1x0xxxx"),
    (Id::VqdmulhScalar, Some("vqdmulh"), "1111001x1xxxxxxxxxxx1100x1x0xxxx"),
    (Id::VqrdmulhScalar, Some("vqrdmulh"), "1111001x1xxxxxxxxxxx1101x1x0xxxx"),

    // Advanced SIMD element and structure load/store. Family rows only;
    // the type field that separates vst1 from vst4 is operand-level.
    (Id::VstMulti,  None,          "111101000x00xxxxxxxxxxxxxxxxxxxx"),
    (Id::VldMulti,  None,          "111101000x10xxxxxxxxxxxxxxxxxxxx"),
    (Id::VstSingle, None,          "111101001x00xxxxxxxxxxxxxxxxxxxx"),
    (Id::VldSingle, None,          "111101001x10xxxxxxxxxxxxxxxxxxxx"),

    // Miscellaneous (op = 00010xx0, S = 0). Must precede the
    // data-processing register rows.
    (Id::Bx,       Some("bx"),     "xxxx000100101111111111110001xxxx"),
    (Id::Bxj,      Some("bxj"),    "xxxx000100101111111111110010xxxx"),
    (Id::BlxReg,   Some("blx"),    "xxxx000100101111111111110011xxxx"),
    (Id::Bkpt,     Some("bkpt"),   "xxxx00010010xxxxxxxxxxxx0111xxxx"),
    (Id::Clz,      Some("clz"),    "xxxx000101101111xxxx11110001xxxx"),
    (Id::Mrs,      Some("mrs"),    "xxxx00010x001111xxxx000000000000"),
    (Id::MsrReg,   Some("msr"),    "xxxx00010x10xxxx111100000000xxxx"),
    (Id::Qadd,     Some("qadd"),   "xxxx00010000xxxxxxxx00000101xxxx"),
    (Id::Qsub,     Some("qsub"),   "xxxx00010010xxxxxxxx00000101xxxx"),
    (Id::Qdadd,    Some("qdadd"),  "xxxx00010100xxxxxxxx00000101xxxx"),
    (Id::Qdsub,    Some("qdsub"),  "xxxx00010110xxxxxxxx00000101xxxx"),
    (Id::Smlaxy,   Some("smla"),   "xxxx00010000xxxxxxxxxxxx1xx0xxxx"),
    (Id::Smlawy,   Some("smlaw"),  "xxxx00010010xxxxxxxxxxxx1x00xxxx"),
    (Id::Smulwy,   Some("smulw"),  "xxxx00010010xxxxxxxxxxxx1x10xxxx"),
    (Id::Smlalxy,  Some("smlal"),  "xxxx00010100xxxxxxxxxxxx1xx0xxxx"),
    (Id::Smulxy,   Some("smul"),   "xxxx00010110xxxxxxxxxxxx1xx0xxxx"),

    // Multiplies and synchronization (bits [7:4] = 1001).
    (Id::Mul,      Some("mul"),    "xxxx0000000xxxxxxxxxxxxx1001xxxx"),
    (Id::Mla,      Some("mla"),    "xxxx0000001xxxxxxxxxxxxx1001xxxx"),
    (Id::Umaal,    Some("umaal"),  "xxxx00000100xxxxxxxxxxxx1001xxxx"),
    (Id::Mls,      Some("mls"),    "xxxx00000110xxxxxxxxxxxx1001xxxx"),
    (Id::Umull,    Some("umull"),  "xxxx0000100xxxxxxxxxxxxx1001xxxx"),
    (Id::Umlal,    Some("umlal"),  "xxxx0000101xxxxxxxxxxxxx1001xxxx"),
    (Id::Smull,    Some("smull"),  "xxxx0000110xxxxxxxxxxxxx1001xxxx"),
    (Id::Smlal,    Some("smlal"),  "xxxx0000111xxxxxxxxxxxxx1001xxxx"),
    (Id::Swp,      Some("swp"),    "xxxx00010000xxxxxxxx00001001xxxx"),
    (Id::Swpb,     Some("swpb"),   "xxxx00010100xxxxxxxx00001001xxxx"),
    (Id::Strex,    Some("strex"),  "xxxx00011000xxxxxxxx11111001xxxx"),
    (Id::Ldrex,    Some("ldrex"),  "xxxx00011001xxxxxxxx11111001xxxx"),
    (Id::Strexd,   Some("strexd"), "xxxx00011010xxxxxxxx11111001xxxx"),
    (Id::Ldrexd,   Some("ldrexd"), "xxxx00011011xxxxxxxx11111001xxxx"),
    (Id::Strexb,   Some("strexb"), "xxxx00011100xxxxxxxx11111001xxxx"),
    (Id::Ldrexb,   Some("ldrexb"), "xxxx00011101xxxxxxxx11111001xxxx"),
    (Id::Strexh,   Some("strexh"), "xxxx00011110xxxxxxxx11111001xxxx"),
    (Id::Ldrexh,   Some("ldrexh"), "xxxx00011111xxxxxxxx11111001xxxx"),

    // Extra load/store (bits [7:4] = 1011, 1101, 1111). Unprivileged and
    // literal forms first, they are sub-cases of the general rows.
    (Id::Strht,    Some("strht"),  "xxxx0000x110xxxxxxxxxxxx1011xxxx"),
    (Id::StrhtReg, Some("strht"),  "xxxx0000x010xxxxxxxx00001011xxxx"),
    (Id::Ldrht,    Some("ldrht"),  "xxxx0000x111xxxxxxxxxxxx1011xxxx"),
    (Id::LdrhtReg, Some("ldrht"),  "xxxx0000x011xxxxxxxx00001011xxxx"),
    (Id::Ldrsbt,   Some("ldrsbt"), "xxxx0000x111xxxxxxxxxxxx1101xxxx"),
    (Id::LdrsbtReg, Some("ldrsbt"), "xxxx0000x011xxxxxxxx00001101xxxx"),
    (Id::Ldrsht,   Some("ldrsht"), "xxxx0000x111xxxxxxxxxxxx1111xxxx"),
    (Id::LdrshtReg, Some("ldrsht"), "xxxx0000x011xxxxxxxx00001111xxxx"),
    (Id::StrhReg,  Some("strh"),   "xxxx000xx0x0xxxxxxxx00001011xxxx"),
    (Id::LdrhReg,  Some("ldrh"),   "xxxx000xx0x1xxxxxxxx00001011xxxx"),
    (Id::StrhImm,  Some("strh"),   "xxxx000xx1x0xxxxxxxxxxxx1011xxxx"),
    (Id::LdrhLit,  Some("ldrh"),   "xxxx000xx1x11111xxxxxxxx1011xxxx"),
    (Id::LdrhImm,  Some("ldrh"),   "xxxx000xx1x1xxxxxxxxxxxx1011xxxx"),
    (Id::LdrdReg,  Some("ldrd"),   "xxxx000xx0x0xxxxxxxx00001101xxxx"),
    (Id::LdrsbReg, Some("ldrsb"),  "xxxx000xx0x1xxxxxxxx00001101xxxx"),
    (Id::LdrdLit,  Some("ldrd"),   "xxxx000xx1x01111xxxxxxxx1101xxxx"),
    (Id::LdrdImm,  Some("ldrd"),   "xxxx000xx1x0xxxxxxxxxxxx1101xxxx"),
    (Id::LdrsbLit, Some("ldrsb"),  "xxxx000xx1x11111xxxxxxxx1101xxxx"),
    (Id::LdrsbImm, Some("ldrsb"),  "xxxx000xx1x1xxxxxxxxxxxx1101xxxx"),
    (Id::StrdReg,  Some("strd"),   "xxxx000xx0x0xxxxxxxx00001111xxxx"),
    (Id::LdrshReg, Some("ldrsh"),  "xxxx000xx0x1xxxxxxxx00001111xxxx"),
    (Id::StrdImm,  Some("strd"),   "xxxx000xx1x0xxxxxxxxxxxx1111xxxx"),
    (Id::LdrshLit, Some("ldrsh"),  "xxxx000xx1x11111xxxxxxxx1111xxxx"),
    (Id::LdrshImm, Some("ldrsh"),  "xxxx000xx1x1xxxxxxxxxxxx1111xxxx"),

    // Data-processing, register and register-shifted register.
    // mov and rrx are the imm5 = 0 corners of the shift rows, keep them first.
    (Id::AndReg,   Some("and"),    "xxxx0000000xxxxxxxxxxxxxxxx0xxxx"),
    (Id::AndRsr,   Some("and"),    "xxxx0000000xxxxxxxxxxxxx0xx1xxxx"),
    (Id::EorReg,   Some("eor"),    "xxxx0000001xxxxxxxxxxxxxxxx0xxxx"),
    (Id::EorRsr,   Some("eor"),    "xxxx0000001xxxxxxxxxxxxx0xx1xxxx"),
    (Id::SubReg,   Some("sub"),    "xxxx0000010xxxxxxxxxxxxxxxx0xxxx"),
    (Id::SubRsr,   Some("sub"),    "xxxx0000010xxxxxxxxxxxxx0xx1xxxx"),
    (Id::RsbReg,   Some("rsb"),    "xxxx0000011xxxxxxxxxxxxxxxx0xxxx"),
    (Id::RsbRsr,   Some("rsb"),    "xxxx0000011xxxxxxxxxxxxx0xx1xxxx"),
    (Id::AddReg,   Some("add"),    "xxxx0000100xxxxxxxxxxxxxxxx0xxxx"),
    (Id::AddRsr,   Some("add"),    "xxxx0000100xxxxxxxxxxxxx0xx1xxxx"),
    (Id::AdcReg,   Some("adc"),    "xxxx0000101xxxxxxxxxxxxxxxx0xxxx"),
    (Id::AdcRsr,   Some("adc"),    "xxxx0000101xxxxxxxxxxxxx0xx1xxxx"),
    (Id::SbcReg,   Some("sbc"),    "xxxx0000110xxxxxxxxxxxxxxxx0xxxx"),
    (Id::SbcRsr,   Some("sbc"),    "xxxx0000110xxxxxxxxxxxxx0xx1xxxx"),
    (Id::RscReg,   Some("rsc"),    "xxxx0000111xxxxxxxxxxxxxxxx0xxxx"),
    (Id::RscRsr,   Some("rsc"),    "xxxx0000111xxxxxxxxxxxxx0xx1xxxx"),
    (Id::TstReg,   Some("tst"),    "xxxx00010001xxxxxxxxxxxxxxx0xxxx"),
    (Id::TstRsr,   Some("tst"),    "xxxx00010001xxxxxxxxxxxx0xx1xxxx"),
    (Id::TeqReg,   Some("teq"),    "xxxx00010011xxxxxxxxxxxxxxx0xxxx"),
    (Id::TeqRsr,   Some("teq"),    "xxxx00010011xxxxxxxxxxxx0xx1xxxx"),
    (Id::CmpReg,   Some("cmp"),    "xxxx00010101xxxxxxxxxxxxxxx0xxxx"),
    (Id::CmpRsr,   Some("cmp"),    "xxxx00010101xxxxxxxxxxxx0xx1xxxx"),
    (Id::CmnReg,   Some("cmn"),    "xxxx00010111xxxxxxxxxxxxxxx0xxxx"),
    (Id::CmnRsr,   Some("cmn"),    "xxxx00010111xxxxxxxxxxxx0xx1xxxx"),
    (Id::OrrReg,   Some("orr"),    "xxxx0001100xxxxxxxxxxxxxxxx0xxxx"),
    (Id::OrrRsr,   Some("orr"),    "xxxx0001100xxxxxxxxxxxxx0xx1xxxx"),
    (Id::MovReg,   Some("mov"),    "xxxx0001101xxxxxxxxx00000000xxxx"),
    (Id::LslImm,   Some("lsl"),    "xxxx0001101xxxxxxxxxxxxxx000xxxx"),
    (Id::LslReg,   Some("lsl"),    "xxxx0001101xxxxxxxxxxxxx0001xxxx"),
    (Id::LsrImm,   Some("lsr"),    "xxxx0001101xxxxxxxxxxxxxx010xxxx"),
    (Id::LsrReg,   Some("lsr"),    "xxxx0001101xxxxxxxxxxxxx0011xxxx"),
    (Id::AsrImm,   Some("asr"),    "xxxx0001101xxxxxxxxxxxxxx100xxxx"),
    (Id::AsrReg,   Some("asr"),    "xxxx0001101xxxxxxxxxxxxx0101xxxx"),
    (Id::Rrx,      Some("rrx"),    "xxxx0001101xxxxxxxxx00000110xxxx"),
    (Id::RorImm,   Some("ror"),    "xxxx0001101xxxxxxxxxxxxxx110xxxx"),
    (Id::RorReg,   Some("ror"),    "xxxx0001101xxxxxxxxxxxxx0111xxxx"),
    (Id::BicReg,   Some("bic"),    "xxxx0001110xxxxxxxxxxxxxxxx0xxxx"),
    (Id::BicRsr,   Some("bic"),    "xxxx0001110xxxxxxxxxxxxx0xx1xxxx"),
    (Id::MvnReg,   Some("mvn"),    "xxxx0001111xxxxxxxxxxxxxxxx0xxxx"),
    (Id::MvnRsr,   Some("mvn"),    "xxxx0001111xxxxxxxxxxxxx0xx1xxxx"),

    // Data-processing, immediate. The hint rows sit in the msr-immediate
    // space with mask = 0000, so they go first; adr is add/sub immediate
    // with Rn = pc and must precede both.
    (Id::Nop,      Some("nop"),    "xxxx0011001000001111000000000000"),
    (Id::Yield,    Some("yield"),  "xxxx0011001000001111000000000001"),
    (Id::Wfe,      Some("wfe"),    "xxxx0011001000001111000000000010"),
    (Id::Wfi,      Some("wfi"),    "xxxx0011001000001111000000000011"),
    (Id::Sev,      Some("sev"),    "xxxx0011001000001111000000000100"),
    (Id::Dbg,      Some("dbg"),    "xxxx001100100000111100001111xxxx"),
    (Id::MsrImm,   Some("msr"),    "xxxx00110x10xxxx1111xxxxxxxxxxxx"),
    (Id::Movw,     Some("movw"),   "xxxx00110000xxxxxxxxxxxxxxxxxxxx"),
    (Id::Movt,     Some("movt"),   "xxxx00110100xxxxxxxxxxxxxxxxxxxx"),
    (Id::AndImm,   Some("and"),    "xxxx0010000xxxxxxxxxxxxxxxxxxxxx"),
    (Id::EorImm,   Some("eor"),    "xxxx0010001xxxxxxxxxxxxxxxxxxxxx"),
    (Id::AdrSub,   Some("adr"),    "xxxx001001001111xxxxxxxxxxxxxxxx"),
    (Id::SubImm,   Some("sub"),    "xxxx0010010xxxxxxxxxxxxxxxxxxxxx"),
    (Id::RsbImm,   Some("rsb"),    "xxxx0010011xxxxxxxxxxxxxxxxxxxxx"),
    (Id::AdrAdd,   Some("adr"),    "xxxx001010001111xxxxxxxxxxxxxxxx"),
    (Id::AddImm,   Some("add"),    "xxxx0010100xxxxxxxxxxxxxxxxxxxxx"),
    (Id::AdcImm,   Some("adc"),    "xxxx0010101xxxxxxxxxxxxxxxxxxxxx"),
    (Id::SbcImm,   Some("sbc"),    "xxxx0010110xxxxxxxxxxxxxxxxxxxxx"),
    (Id::RscImm,   Some("rsc"),    "xxxx0010111xxxxxxxxxxxxxxxxxxxxx"),
    (Id::TstImm,   Some("tst"),    "xxxx00110001xxxxxxxxxxxxxxxxxxxx"),
    (Id::TeqImm,   Some("teq"),    "xxxx00110011xxxxxxxxxxxxxxxxxxxx"),
    (Id::CmpImm,   Some("cmp"),    "xxxx00110101xxxxxxxxxxxxxxxxxxxx"),
    (Id::CmnImm,   Some("cmn"),    "xxxx00110111xxxxxxxxxxxxxxxxxxxx"),
    (Id::OrrImm,   Some("orr"),    "xxxx0011100xxxxxxxxxxxxxxxxxxxxx"),
    (Id::MovImm,   Some("mov"),    "xxxx0011101xxxxxxxxxxxxxxxxxxxxx"),
    (Id::BicImm,   Some("bic"),    "xxxx0011110xxxxxxxxxxxxxxxxxxxxx"),
    (Id::MvnImm,   Some("mvn"),    "xxxx0011111xxxxxxxxxxxxxxxxxxxxx"),

    // Media (op = 011, bit 4 = 1). Parallel add/subtract first, then
    // packing, saturation, extension, sums and bit-field rows.
    (Id::Sadd16,   Some("sadd16"), "xxxx01100001xxxxxxxx11110001xxxx"),
    (Id::Sasx,     Some("sasx"),   "xxxx01100001xxxxxxxx11110011xxxx"),
    (Id::Ssax,     Some("ssax"),   "xxxx01100001xxxxxxxx11110101xxxx"),
    (Id::Ssub16,   Some("ssub16"), "xxxx01100001xxxxxxxx11110111xxxx"),
    (Id::Sadd8,    Some("sadd8"),  "xxxx01100001xxxxxxxx11111001xxxx"),
    (Id::Ssub8,    Some("ssub8"),  "xxxx01100001xxxxxxxx11111111xxxx"),
    (Id::Qadd16,   Some("qadd16"), "xxxx01100010xxxxxxxx11110001xxxx"),
    (Id::Qasx,     Some("qasx"),   "xxxx01100010xxxxxxxx11110011xxxx"),
    (Id::Qsax,     Some("qsax"),   "xxxx01100010xxxxxxxx11110101xxxx"),
    (Id::Qsub16,   Some("qsub16"), "xxxx01100010xxxxxxxx11110111xxxx"),
    (Id::Qadd8,    Some("qadd8"),  "xxxx01100010xxxxxxxx11111001xxxx"),
    (Id::Qsub8,    Some("qsub8"),  "xxxx01100010xxxxxxxx11111111xxxx"),
    (Id::Shadd16,  Some("shadd16"),"xxxx01100011xxxxxxxx11110001xxxx"),
    (Id::Shasx,    Some("shasx"),  "xxxx01100011xxxxxxxx11110011xxxx"),
    (Id::Shsax,    Some("shsax"),  "xxxx01100011xxxxxxxx11110101xxxx"),
    (Id::Shsub16,  Some("shsub16"),"xxxx01100011xxxxxxxx11110111xxxx"),
    (Id::Shadd8,   Some("shadd8"), "xxxx01100011xxxxxxxx11111001xxxx"),
    (Id::Shsub8,   Some("shsub8"), "xxxx01100011xxxxxxxx11111111xxxx"),
    (Id::Uadd16,   Some("uadd16"), "xxxx01100101xxxxxxxx11110001xxxx"),
    (Id::Uasx,     Some("uasx"),   "xxxx01100101xxxxxxxx11110011xxxx"),
    (Id::Usax,     Some("usax"),   "xxxx01100101xxxxxxxx11110101xxxx"),
    (Id::Usub16,   Some("usub16"), "xxxx01100101xxxxxxxx11110111xxxx"),
    (Id::Uadd8,    Some("uadd8"),  "xxxx01100101xxxxxxxx11111001xxxx"),
    (Id::Usub8,    Some("usub8"),  "xxxx01100101xxxxxxxx11111111xxxx"),
    (Id::Uqadd16,  Some("uqadd16"),"xxxx01100110xxxxxxxx11110001xxxx"),
    (Id::Uqasx,    Some("uqasx"),  "xxxx01100110xxxxxxxx11110011xxxx"),
    (Id::Uqsax,    Some("uqsax"),  "xxxx01100110xxxxxxxx11110101xxxx"),
    (Id::Uqsub16,  Some("uqsub16"),"xxxx01100110xxxxxxxx11110111xxxx"),
    (Id::Uqadd8,   Some("uqadd8"), "xxxx01100110xxxxxxxx11111001xxxx"),
    (Id::Uqsub8,   Some("uqsub8"), "xxxx01100110xxxxxxxx11111111xxxx"),
    (Id::Uhadd16,  Some("uhadd16"),"xxxx01100111xxxxxxxx11110001xxxx"),
    (Id::Uhasx,    Some("uhasx"),  "xxxx01100111xxxxxxxx11110011xxxx"),
    (Id::Uhsax,    Some("uhsax"),  "xxxx01100111xxxxxxxx11110101xxxx"),
    (Id::Uhsub16,  Some("uhsub16"),"xxxx01100111xxxxxxxx11110111xxxx"),
    (Id::Uhadd8,   Some("uhadd8"), "xxxx01100111xxxxxxxx11111001xxxx"),
    (Id::Uhsub8,   Some("uhsub8"), "xxxx01100111xxxxxxxx11111111xxxx"),
    (Id::Pkhbt,    Some("pkhbt"),  "xxxx01101000xxxxxxxxxxxxx001xxxx"),
    (Id::Pkhtb,    Some("pkhtb"),  "xxxx01101000xxxxxxxxxxxxx101xxxx"),
    (Id::Sel,      Some("sel"),    "xxxx01101000xxxxxxxx11111011xxxx"),
    (Id::Ssat16,   Some("ssat16"), "xxxx01101010xxxxxxxx11110011xxxx"),
    (Id::Ssat,     Some("ssat"),   "xxxx0110101xxxxxxxxxxxxxxx01xxxx"),
    (Id::Usat16,   Some("usat16"), "xxxx01101110xxxxxxxx11110011xxxx"),
    (Id::Usat,     Some("usat"),   "xxxx0110111xxxxxxxxxxxxxxx01xxxx"),
    (Id::Sxtb16,   Some("sxtb16"), "xxxx011010001111xxxxxx000111xxxx"),
    (Id::Sxtab16,  Some("sxtab16"),"xxxx01101000xxxxxxxxxx000111xxxx"),
    (Id::Sxtb,     Some("sxtb"),   "xxxx011010101111xxxxxx000111xxxx"),
    (Id::Sxtab,    Some("sxtab"),  "xxxx01101010xxxxxxxxxx000111xxxx"),
    (Id::Sxth,     Some("sxth"),   "xxxx011010111111xxxxxx000111xxxx"),
    (Id::Sxtah,    Some("sxtah"),  "xxxx01101011xxxxxxxxxx000111xxxx"),
    (Id::Uxtb16,   Some("uxtb16"), "xxxx011011001111xxxxxx000111xxxx"),
    (Id::Uxtab16,  Some("uxtab16"),"xxxx01101100xxxxxxxxxx000111xxxx"),
    (Id::Uxtb,     Some("uxtb"),   "xxxx011011101111xxxxxx000111xxxx"),
    (Id::Uxtab,    Some("uxtab"),  "xxxx01101110xxxxxxxxxx000111xxxx"),
    (Id::Uxth,     Some("uxth"),   "xxxx011011111111xxxxxx000111xxxx"),
    (Id::Uxtah,    Some("uxtah"),  "xxxx01101111xxxxxxxxxx000111xxxx"),
    (Id::Rev,      Some("rev"),    "xxxx01101011xxxxxxxx11110011xxxx"),
    (Id::Rev16,    Some("rev16"),  "xxxx01101011xxxxxxxx11111011xxxx"),
    (Id::Rbit,     Some("rbit"),   "xxxx01101111xxxxxxxx11110011xxxx"),
    (Id::Revsh,    Some("revsh"),  "xxxx01101111xxxxxxxx11111011xxxx"),
    (Id::Smuad,    Some("smuad"),  "xxxx01110000xxxx1111xxxx00x1xxxx"),
    (Id::Smlad,    Some("smlad"),  "xxxx01110000xxxxxxxxxxxx00x1xxxx"),
    (Id::Smusd,    Some("smusd"),  "xxxx01110000xxxx1111xxxx01x1xxxx"),
    (Id::Smlsd,    Some("smlsd"),  "xxxx01110000xxxxxxxxxxxx01x1xxxx"),
    (Id::Sdiv,     Some("sdiv"),   "xxxx01110001xxxx1111xxxx0001xxxx"),
    (Id::Udiv,     Some("udiv"),   "xxxx01110011xxxx1111xxxx0001xxxx"),
    (Id::Smlald,   Some("smlald"), "xxxx01110100xxxxxxxxxxxx00x1xxxx"),
    (Id::Smlsld,   Some("smlsld"), "xxxx01110100xxxxxxxxxxxx01x1xxxx"),
    (Id::Smmul,    Some("smmul"),  "xxxx01110101xxxx1111xxxx00x1xxxx"),
    (Id::Smmla,    Some("smmla"),  "xxxx01110101xxxxxxxxxxxx00x1xxxx"),
    (Id::Smmls,    Some("smmls"),  "xxxx01110101xxxxxxxxxxxx11x1xxxx"),
    (Id::Usad8,    Some("usad8"),  "xxxx01111000xxxx1111xxxx0001xxxx"),
    (Id::Usada8,   Some("usada8"), "xxxx01111000xxxxxxxxxxxx0001xxxx"),
    (Id::Sbfx,     Some("sbfx"),   "xxxx0111101xxxxxxxxxxxxxx101xxxx"),
    (Id::Bfc,      Some("bfc"),    "xxxx0111110xxxxxxxxxxxxxx0011111"),
    (Id::Bfi,      Some("bfi"),    "xxxx0111110xxxxxxxxxxxxxx001xxxx"),
    // Architecturally undefined space; must precede ubfx, whose pattern
    // also covers op = 01111111 words.
    (Id::Undefined, None,          "111001111111xxxxxxxxxxxxxxx1xxxx"),
    (Id::Udf,      Some("udf"),    "xxxx01111111xxxxxxxxxxxx1111xxxx"),
    (Id::Ubfx,     Some("ubfx"),   "xxxx0111111xxxxxxxxxxxxxx101xxxx"),

    // Load/store word and byte. Literal and unprivileged rows first.
    (Id::LdrLit,   Some("ldr"),    "xxxx010xx0x11111xxxxxxxxxxxxxxxx"),
    (Id::LdrbLit,  Some("ldrb"),   "xxxx010xx1x11111xxxxxxxxxxxxxxxx"),
    (Id::Strt,     Some("strt"),   "xxxx0100x010xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrtReg,  Some("strt"),   "xxxx0110x010xxxxxxxxxxxxxxx0xxxx"),
    (Id::Ldrt,     Some("ldrt"),   "xxxx0100x011xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrtReg,  Some("ldrt"),   "xxxx0110x011xxxxxxxxxxxxxxx0xxxx"),
    (Id::Strbt,    Some("strbt"),  "xxxx0100x110xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrbtReg, Some("strbt"),  "xxxx0110x110xxxxxxxxxxxxxxx0xxxx"),
    (Id::Ldrbt,    Some("ldrbt"),  "xxxx0100x111xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrbtReg, Some("ldrbt"),  "xxxx0110x111xxxxxxxxxxxxxxx0xxxx"),
    (Id::StrImm,   Some("str"),    "xxxx010xx0x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrImm,   Some("ldr"),    "xxxx010xx0x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrbImm,  Some("strb"),   "xxxx010xx1x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdrbImm,  Some("ldrb"),   "xxxx010xx1x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::StrReg,   Some("str"),    "xxxx011xx0x0xxxxxxxxxxxxxxx0xxxx"),
    (Id::LdrReg,   Some("ldr"),    "xxxx011xx0x1xxxxxxxxxxxxxxx0xxxx"),
    (Id::StrbReg,  Some("strb"),   "xxxx011xx1x0xxxxxxxxxxxxxxx0xxxx"),
    (Id::LdrbReg,  Some("ldrb"),   "xxxx011xx1x1xxxxxxxxxxxxxxx0xxxx"),

    // Block transfer. pop and push are the writeback-to-sp corners,
    // the user-register and exception-return forms carry bit 22.
    (Id::Pop,      Some("pop"),    "xxxx100010111101xxxxxxxxxxxxxxxx"),
    (Id::Push,     Some("push"),   "xxxx100100101101xxxxxxxxxxxxxxxx"),
    (Id::LdmExcRet, Some("ldm"),   "xxxx100xx1x1xxxx1xxxxxxxxxxxxxxx"),
    (Id::LdmUser,  Some("ldm"),    "xxxx100xx101xxxx0xxxxxxxxxxxxxxx"),
    (Id::StmUser,  Some("stm"),    "xxxx100xx100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stmda,    Some("stmda"),  "xxxx100000x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmda,    Some("ldmda"),  "xxxx100000x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stmia,    Some("stm"),    "xxxx100010x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmia,    Some("ldm"),    "xxxx100010x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stmdb,    Some("stmdb"),  "xxxx100100x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmdb,    Some("ldmdb"),  "xxxx100100x1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stmib,    Some("stmib"),  "xxxx100110x0xxxxxxxxxxxxxxxxxxxx"),
    (Id::Ldmib,    Some("ldmib"),  "xxxx100110x1xxxxxxxxxxxxxxxxxxxx"),

    // Branches.
    (Id::B,        Some("b"),      "xxxx1010xxxxxxxxxxxxxxxxxxxxxxxx"),
    (Id::Bl,       Some("bl"),     "xxxx1011xxxxxxxxxxxxxxxxxxxxxxxx"),

    // VFP data-processing (coprocessor 101x, bit 4 = 0). Must precede the
    // general coprocessor rows, which cover the whole 1110 space.
    (Id::Vmla,     Some("vmla"),   "xxxx11100x00xxxxxxxx101xx0x0xxxx"),
    (Id::Vmls,     Some("vmls"),   "xxxx11100x00xxxxxxxx101xx1x0xxxx"),
    (Id::Vnmls,    Some("vnmls"),  "xxxx11100x01xxxxxxxx101xx0x0xxxx"),
    (Id::Vnmla,    Some("vnmla"),  "xxxx11100x01xxxxxxxx101xx1x0xxxx"),
    (Id::Vmul,     Some("vmul"),   "xxxx11100x10xxxxxxxx101xx0x0xxxx"),
    (Id::Vnmul,    Some("vnmul"),  "xxxx11100x10xxxxxxxx101xx1x0xxxx"),
    (Id::Vadd,     Some("vadd"),   "xxxx11100x11xxxxxxxx101xx0x0xxxx"),
    (Id::Vsub,     Some("vsub"),   "xxxx11100x11xxxxxxxx101xx1x0xxxx"),
    (Id::Vdiv,     Some("vdiv"),   "xxxx11101x00xxxxxxxx101xx0x0xxxx"),
    (Id::Vfnms,    Some("vfnms"),  "xxxx11101x01xxxxxxxx101xx0x0xxxx"),
    (Id::Vfnma,    Some("vfnma"),  "xxxx11101x01xxxxxxxx101xx1x0xxxx"),
    (Id::Vfma,     Some("vfma"),   "xxxx11101x10xxxxxxxx101xx0x0xxxx"),
    (Id::Vfms,     Some("vfms"),   "xxxx11101x10xxxxxxxx101xx1x0xxxx"),
    (Id::VmovReg,  Some("vmov"),   "xxxx11101x110000xxxx101x01x0xxxx"),
    (Id::Vabs,     Some("vabs"),   "xxxx11101x110000xxxx101x11x0xxxx"),
    (Id::Vneg,     Some("vneg"),   "xxxx11101x110001xxxx101x01x0xxxx"),
    (Id::Vsqrt,    Some("vsqrt"),  "xxxx11101x110001xxxx101x11x0xxxx"),
    (Id::Vcvtb,    Some("vcvtb"),  "xxxx11101x11001xxxxx101x01x0xxxx"),
    (Id::Vcvtt,    Some("vcvtt"),  "xxxx11101x11001xxxxx101x11x0xxxx"),
    (Id::Vcmp,     Some("vcmp"),   "xxxx11101x110100xxxx101x01x0xxxx"),
    (Id::Vcmpe,    Some("vcmpe"),  "xxxx11101x110100xxxx101x11x0xxxx"),
    (Id::VcmpZero, Some("vcmp"),   "xxxx11101x110101xxxx101x01x0xxxx"),
    (Id::VcmpeZero, Some("vcmpe"), "xxxx11101x110101xxxx101x11x0xxxx"),
    (Id::VcvtPrecision, Some("vcvt"), "xxxx11101x110111xxxx101x11x0xxxx"),
    (Id::VcvtFromInt, Some("vcvt"), "xxxx11101x111000xxxx101xx1x0xxxx"),
    (Id::VcvtFromFixed, Some("vcvt"), "xxxx11101x11101xxxxx101xx1x0xxxx"),
    (Id::VcvtToInt, Some("vcvt"),  "xxxx11101x11110xxxxx101xx1x0xxxx"),
    (Id::VcvtToFixed, Some("vcvt"), "xxxx11101x11111xxxxx101xx1x0xxxx"),
    (Id::VmovImm,  Some("vmov"),   "xxxx11101x11xxxxxxxx101x0000xxxx"),

    // VFP register transfers (coprocessor 101x, bit 4 = 1). Must precede
    // the general mcr/mrc rows.
    (Id::VmovToSreg,   Some("vmov"), "xxxx11100000xxxxxxxx1010x0010000"),
    (Id::VmovFromSreg, Some("vmov"), "xxxx11100001xxxxxxxx1010x0010000"),
    (Id::Vmsr,     Some("vmsr"),   "xxxx111011100001xxxx101000010000"),
    (Id::Vmrs,     Some("vmrs"),   "xxxx111011110001xxxx101000010000"),
    (Id::VmovToScalar, Some("vmov"), "xxxx11100xx0xxxxxxxx1011xxx10000"),
    (Id::VmovFromScalar, Some("vmov"), "xxxx1110xxx1xxxxxxxx1011xxx10000"),

    // VFP extension load/store (coprocessor 101x). The core-pair moves
    // sit in the P = 0, U = 0, W = 0 corner, ahead of mcrr/mrrc; vpush,
    // vpop and the single-register forms precede the multiple forms.
    (Id::VmovFromCorePair, Some("vmov"), "xxxx11000100xxxxxxxx101x00x1xxxx"),
    (Id::VmovToCorePair, Some("vmov"), "xxxx11000101xxxxxxxx101x00x1xxxx"),
    (Id::Vpush,    Some("vpush"),  "xxxx11010x101101xxxx101xxxxxxxxx"),
    (Id::Vpop,     Some("vpop"),   "xxxx11001x111101xxxx101xxxxxxxxx"),
    (Id::Vstr,     Some("vstr"),   "xxxx1101xx00xxxxxxxx101xxxxxxxxx"),
    (Id::Vldr,     Some("vldr"),   "xxxx1101xx01xxxxxxxx101xxxxxxxxx"),
    (Id::Vstm,     Some("vstm"),   "xxxx110xxxx0xxxxxxxx101xxxxxxxxx"),
    (Id::Vldm,     Some("vldm"),   "xxxx110xxxx1xxxxxxxx101xxxxxxxxx"),

    // Coprocessor and supervisor call. The 64-bit register transfers are
    // the P = 0, U = 0, W = 0 corner of stc/ldc, keep them first.
    (Id::Mcrr,     Some("mcrr"),   "xxxx11000100xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mrrc,     Some("mrrc"),   "xxxx11000101xxxxxxxxxxxxxxxxxxxx"),
    (Id::Stc,      Some("stc"),    "xxxx110xxxx0xxxxxxxxxxxxxxxxxxxx"),
    (Id::LdcLit,   Some("ldc"),    "xxxx110xxxx11111xxxxxxxxxxxxxxxx"),
    (Id::LdcImm,   Some("ldc"),    "xxxx110xxxx1xxxxxxxxxxxxxxxxxxxx"),
    (Id::Mcr,      Some("mcr"),    "xxxx1110xxx0xxxxxxxxxxxxxxx1xxxx"),
    (Id::Mrc,      Some("mrc"),    "xxxx1110xxx1xxxxxxxxxxxxxxx1xxxx"),
    (Id::Cdp,      Some("cdp"),    "xxxx1110xxxxxxxxxxxxxxxxxxx0xxxx"),
    (Id::Svc,      Some("svc"),    "xxxx1111xxxxxxxxxxxxxxxxxxxxxxxx"),
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
    fn adr_rows_precede_their_add_and_sub_generals() {
        assert!(position(Id::AdrAdd) < position(Id::AddImm));
        assert!(position(Id::AdrSub) < position(Id::SubImm));
    }

    #[test]
    fn undefined_space_precedes_ubfx() {
        assert!(position(Id::Undefined) < position(Id::Ubfx));
    }

    #[test]
    fn hint_rows_precede_msr_immediate() {
        assert!(position(Id::Nop) < position(Id::MsrImm));
        assert!(position(Id::Wfi) < position(Id::MsrImm));
    }

    #[test]
    fn bx_matches_its_canonical_word() {
        let bx = &TABLE[position(Id::Bx)];
        assert!(bx.matches(0xE12F_FF10));
        assert!(!bx.matches(0xE12F_FF20));
        assert_eq!(bx.mnemonic(), Some("bx"));
    }

    #[test]
    fn literal_loads_precede_immediate_loads() {
        assert!(position(Id::LdrLit) < position(Id::LdrImm));
        assert!(position(Id::LdrdLit) < position(Id::LdrdImm));
    }

    #[test]
    fn simd_specific_rows_precede_their_generals() {
        assert!(position(Id::VmovModImm) < position(Id::Vshr));
        assert!(position(Id::Vmovl) < position(Id::Vshll));
        assert!(position(Id::Vtbl) < position(Id::Vmlal));
        assert!(position(Id::Vext) < position(Id::Vaddl));
        assert!(position(Id::Vrev64) < position(Id::VmlaScalar));
        // A shift word whose imm6 lands in the modified-immediate corner.
        let modimm = &TABLE[position(Id::VmovModImm)];
        assert!(modimm.matches(0xF280_0010));
        assert!(TABLE[position(Id::Vmull)].matches(0xF280_0C00));
    }

    #[test]
    fn vfp_rows_precede_the_general_coprocessor_rows() {
        assert!(position(Id::Vadd) < position(Id::Cdp));
        assert!(position(Id::Vmrs) < position(Id::Mrc));
        assert!(position(Id::Vldr) < position(Id::LdcImm));
        assert!(position(Id::VmovFromCorePair) < position(Id::Mcrr));
        assert!(position(Id::Vpop) < position(Id::Vldm));
    }
}
