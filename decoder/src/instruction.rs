//! Instruction identities.
//!
//! One closed enum across every table. An identity may appear in more
//! than one table (`AddImm` exists in A32, T16 and T32 form) but never
//! twice in the same table, so a decode result names the encoding
//! variant, not just the operation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionId {
    // A32 encodings.
    Cps,
    Setend,
    PliImm,
    PldwImm,
    PldLit,
    PldImm,
    PliReg,
    PldwReg,
    PldReg,
    Clrex,
    Dsb,
    Dmb,
    Isb,
    Srs,
    Rfe,
    BlxImm,
    Mcrr2,
    Mrrc2,
    Stc2,
    Ldc2Lit,
    Ldc2Imm,
    Mcr2,
    Mrc2,
    Cdp2,
    Vand,
    Vbic,
    Vorr,
    Vorn,
    Veor,
    Vbsl,
    Vbit,
    Vbif,
    Vqadd,
    Vqsub,
    VcgtReg,
    VcgeReg,
    VshlReg,
    VqshlReg,
    Vrshl,
    Vqrshl,
    Vmax,
    Vmin,
    Vabd,
    Vaba,
    VaddInt,
    VsubInt,
    Vtst,
    VceqInt,
    VmlaInt,
    VmlsInt,
    VmulInt,
    VmulPoly,
    Vpmax,
    Vpmin,
    Vqdmulh,
    Vqrdmulh,
    VpaddInt,
    VaddFp,
    VsubFp,
    VpaddFp,
    VabdFp,
    VmlaFp,
    VmlsFp,
    VmulFp,
    VceqFp,
    VcgeFp,
    VcgtFp,
    VmaxFp,
    VminFp,
    Vrecps,
    Vrsqrts,
    VmovModImm,
    Vshr,
    Vsra,
    Vrshr,
    Vrsra,
    Vsri,
    VshlImm,
    Vsli,
    Vqshlu,
    VqshlImm,
    Vshrn,
    Vrshrn,
    Vqshrun,
    Vqrshrun,
    Vqshrn,
    Vqrshrn,
    Vmovl,
    Vshll,
    VcvtFixedSimd,
    Vext,
    Vtbl,
    Vtbx,
    VdupScalar,
    Vrev64,
    Vrev32,
    Vrev16,
    Vpaddl,
    Vcls,
    Vclz,
    Vcnt,
    VmvnReg,
    Vpadal,
    Vqabs,
    Vqneg,
    VcgtZero,
    VcgeZero,
    VceqZero,
    VcleZero,
    VcltZero,
    VabsSimd,
    VnegSimd,
    Vswp,
    Vtrn,
    Vuzp,
    Vzip,
    Vmovn,
    Vqmovun,
    Vqmovn,
    VshllMax,
    Vcvth,
    Vrecpe,
    Vrsqrte,
    VcvtIntSimd,
    Vaddl,
    Vaddw,
    Vsubl,
    Vsubw,
    Vaddhn,
    Vraddhn,
    Vabal,
    Vsubhn,
    Vrsubhn,
    Vabdl,
    Vmlal,
    Vqdmlal,
    Vmlsl,
    Vqdmlsl,
    Vmull,
    Vqdmull,
    VmullPoly,
    VmlaScalar,
    VmlalScalar,
    VqdmlalScalar,
    VmlsScalar,
    VmlslScalar,
    VqdmlslScalar,
    VmulScalar,
    VmullScalar,
    VqdmullScalar,
    VqdmulhScalar,
    VqrdmulhScalar,
    VstMulti,
    VldMulti,
    VstSingle,
    VldSingle,
    Bx,
    Bxj,
    BlxReg,
    Bkpt,
    Clz,
    Mrs,
    MsrReg,
    Qadd,
    Qsub,
    Qdadd,
    Qdsub,
    Smlaxy,
    Smlawy,
    Smulwy,
    Smlalxy,
    Smulxy,
    Mul,
    Mla,
    Umaal,
    Mls,
    Umull,
    Umlal,
    Smull,
    Smlal,
    Swp,
    Swpb,
    Strex,
    Ldrex,
    Strexd,
    Ldrexd,
    Strexb,
    Ldrexb,
    Strexh,
    Ldrexh,
    Strht,
    StrhtReg,
    Ldrht,
    LdrhtReg,
    Ldrsbt,
    LdrsbtReg,
    Ldrsht,
    LdrshtReg,
    StrhReg,
    LdrhReg,
    StrhImm,
    LdrhLit,
    LdrhImm,
    LdrdReg,
    LdrsbReg,
    LdrdLit,
    LdrdImm,
    LdrsbLit,
    LdrsbImm,
    StrdReg,
    LdrshReg,
    StrdImm,
    LdrshLit,
    LdrshImm,
    AndReg,
    AndRsr,
    EorReg,
    EorRsr,
    SubReg,
    SubRsr,
    RsbReg,
    RsbRsr,
    AddReg,
    AddRsr,
    AdcReg,
    AdcRsr,
    SbcReg,
    SbcRsr,
    RscReg,
    RscRsr,
    TstReg,
    TstRsr,
    TeqReg,
    TeqRsr,
    CmpReg,
    CmpRsr,
    CmnReg,
    CmnRsr,
    OrrReg,
    OrrRsr,
    MovReg,
    LslImm,
    LslReg,
    LsrImm,
    LsrReg,
    AsrImm,
    AsrReg,
    Rrx,
    RorImm,
    RorReg,
    BicReg,
    BicRsr,
    MvnReg,
    MvnRsr,
    Nop,
    Yield,
    Wfe,
    Wfi,
    Sev,
    Dbg,
    MsrImm,
    Movw,
    Movt,
    AndImm,
    EorImm,
    AdrSub,
    SubImm,
    RsbImm,
    AdrAdd,
    AddImm,
    AdcImm,
    SbcImm,
    RscImm,
    TstImm,
    TeqImm,
    CmpImm,
    CmnImm,
    OrrImm,
    MovImm,
    BicImm,
    MvnImm,
    Sadd16,
    Sasx,
    Ssax,
    Ssub16,
    Sadd8,
    Ssub8,
    Qadd16,
    Qasx,
    Qsax,
    Qsub16,
    Qadd8,
    Qsub8,
    Shadd16,
    Shasx,
    Shsax,
    Shsub16,
    Shadd8,
    Shsub8,
    Uadd16,
    Uasx,
    Usax,
    Usub16,
    Uadd8,
    Usub8,
    Uqadd16,
    Uqasx,
    Uqsax,
    Uqsub16,
    Uqadd8,
    Uqsub8,
    Uhadd16,
    Uhasx,
    Uhsax,
    Uhsub16,
    Uhadd8,
    Uhsub8,
    Pkhbt,
    Pkhtb,
    Sel,
    Ssat16,
    Ssat,
    Usat16,
    Usat,
    Sxtb16,
    Sxtab16,
    Sxtb,
    Sxtab,
    Sxth,
    Sxtah,
    Uxtb16,
    Uxtab16,
    Uxtb,
    Uxtab,
    Uxth,
    Uxtah,
    Rev,
    Rev16,
    Rbit,
    Revsh,
    Smuad,
    Smlad,
    Smusd,
    Smlsd,
    Sdiv,
    Udiv,
    Smlald,
    Smlsld,
    Smmul,
    Smmla,
    Smmls,
    Usad8,
    Usada8,
    Sbfx,
    Bfc,
    Bfi,
    Undefined,
    Udf,
    Ubfx,
    LdrLit,
    LdrbLit,
    Strt,
    StrtReg,
    Ldrt,
    LdrtReg,
    Strbt,
    StrbtReg,
    Ldrbt,
    LdrbtReg,
    StrImm,
    LdrImm,
    StrbImm,
    LdrbImm,
    StrReg,
    LdrReg,
    StrbReg,
    LdrbReg,
    Pop,
    Push,
    LdmExcRet,
    LdmUser,
    StmUser,
    Stmda,
    Ldmda,
    Stmia,
    Ldmia,
    Stmdb,
    Ldmdb,
    Stmib,
    Ldmib,
    B,
    Bl,
    Vmla,
    Vmls,
    Vnmls,
    Vnmla,
    Vmul,
    Vnmul,
    Vadd,
    Vsub,
    Vdiv,
    Vfnms,
    Vfnma,
    Vfma,
    Vfms,
    VmovReg,
    Vabs,
    Vneg,
    Vsqrt,
    Vcvtb,
    Vcvtt,
    Vcmp,
    Vcmpe,
    VcmpZero,
    VcmpeZero,
    VcvtPrecision,
    VcvtFromInt,
    VcvtFromFixed,
    VcvtToInt,
    VcvtToFixed,
    VmovImm,
    VmovToSreg,
    VmovFromSreg,
    Vmsr,
    Vmrs,
    VmovToScalar,
    VmovFromScalar,
    VmovFromCorePair,
    VmovToCorePair,
    Vpush,
    Vpop,
    Vstr,
    Vldr,
    Vstm,
    Vldm,
    Mcrr,
    Mrrc,
    Stc,
    LdcLit,
    LdcImm,
    Mcr,
    Mrc,
    Cdp,
    Svc,
    // Introduced by the 16-bit T16 table.
    AddImm3,
    SubImm3,
    AddImm8,
    SubImm8,
    AddHi,
    CmpHi,
    MovHi,
    StrSpImm,
    LdrSpImm,
    AddSpImm,
    AddSpImm7,
    SubSpImm7,
    Cbz,
    Cbnz,
    It,
    BCond,
    BlxSuffix,
    BlPrefix,
    BlSuffix,
    // Introduced by the T32 table.
    SrsDb,
    RfeDb,
    Tbb,
    Tbh,
    OrnReg,
    AddSpReg,
    SubSpReg,
    OrnImm,
    SubSpImm,
    Addw,
    Subw,
    SubsPcLr,
    Smc,
    PldImmNeg,
    PldwImmNeg,
    PliLit,
    PliImmNeg,
    StrbImm8,
    StrhImm8,
    StrImm8,
    LdrbImm8,
    LdrhImm8,
    LdrImm8,
    LdrsbImm8,
    LdrshImm8,
    // ThumbEE only.
    Chka,
    Hb,
    Hbl,
    Hblp,
    Hbp,
    LdrRegScaled,
    StrRegScaled,
    LdrCoprocRel,
    LdrR9Rel,
    LdrR10Rel,
    StrR9Rel,
    Enterx,
    Leavex,
}

impl Display for InstructionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_uses_the_variant_name() {
        assert_eq!(InstructionId::Undefined.to_string(), "Undefined");
        assert_eq!(InstructionId::AdrAdd.to_string(), "AdrAdd");
    }

    #[test]
    fn identities_compare_by_variant() {
        assert_eq!(InstructionId::Bx, InstructionId::Bx);
        assert_ne!(InstructionId::Strht, InstructionId::StrhtReg);
    }
}
