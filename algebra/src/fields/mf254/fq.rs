//! The prime field of q = 0x3ffffffb * 2^224 - 1, with q = 7 mod 8. Since q = -1 mod
//! 2^56 its Montgomery reduction needs a single multiply-accumulate sweep per limb.

use crate::{
    biginteger::{BigInteger, BigInteger256, Chunk},
    fields::{Fp, FpParameters, MontgomeryFriendly},
};

pub type Fq = Fp<FqParameters, 5, 56>;

pub struct FqParameters;

impl FpParameters<5, 56> for FqParameters {
    type Reduction = MontgomeryFriendly;

    /// MODULUS =
    /// 2894802217452931552013954727883690152821934279822441889716153359646023\
    /// 1163903
    const MODULUS: BigInteger256 = BigInteger([
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0x3FFFFFFA,
    ]);

    const MODULUS_BITS: u32 = 254;

    /// MODULUS = M_CONST * 2^224 - 1
    const M_CONST: Chunk = 0x3FFFFFFB;
}
