//! The BN254 base field, a 254 bit prime field with q = 7 mod 8 and no special shape,
//! reduced by generic Montgomery reduction.

use crate::{
    biginteger::{BigInteger, BigInteger256, Chunk},
    fields::{Fp, FpParameters, NotSpecial},
};

pub type Fq = Fp<FqParameters, 5, 56>;

pub struct FqParameters;

impl FpParameters<5, 56> for FqParameters {
    type Reduction = NotSpecial;

    /// MODULUS =
    /// 2188824287183927522224640574525727508869631115729782366268903789464522\
    /// 6208583
    const MODULUS: BigInteger256 = BigInteger([
        0x208C16D87CFD47,
        0x6A916871CA8D3C,
        0xB68181585D9781,
        0xE131A029B85045,
        0x30644E72,
    ]);

    const MODULUS_BITS: u32 = 254;

    /// -MODULUS^-1 mod 2^56
    const M_CONST: Chunk = 0xD20782E4866389;
}
