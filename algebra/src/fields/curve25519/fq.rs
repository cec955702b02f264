//! The Curve25519 base field, the pseudo-Mersenne prime 2^255 - 19 with q = 5 mod 8.

use crate::{
    biginteger::{BigInteger, BigInteger256, Chunk},
    fields::{Fp, FpParameters, PseudoMersenne},
};

pub type Fq = Fp<FqParameters, 5, 56>;

pub struct FqParameters;

impl FpParameters<5, 56> for FqParameters {
    type Reduction = PseudoMersenne;

    /// MODULUS = 2^255 - 19 =
    /// 5789604461865809771178549250434395392663499233282028201972879200395656\
    /// 4819949
    const MODULUS: BigInteger256 = BigInteger([
        0xFFFFFFFFFFFFED,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0x7FFFFFFF,
    ]);

    const MODULUS_BITS: u32 = 255;

    const M_CONST: Chunk = 19;
}
