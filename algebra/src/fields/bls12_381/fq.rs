//! The BLS12-381 base field, a 381 bit prime field with q = 3 mod 8, reduced by generic
//! Montgomery reduction.

use crate::{
    biginteger::{BigInteger, BigInteger384, Chunk},
    fields::{Fp, FpParameters, NotSpecial},
};

pub type Fq = Fp<FqParameters, 7, 58>;

pub struct FqParameters;

impl FpParameters<7, 58> for FqParameters {
    type Reduction = NotSpecial;

    /// MODULUS =
    /// 4002409555221667393417789825735904156556882819939007885332058136124031\
    /// 650490837864442687629129015664037894272559787
    const MODULUS: BigInteger384 = BigInteger([
        0x1FEFFFFFFFFAAAB,
        0x2FFFFAC54FFFFEE,
        0x12A0F6B0F6241EA,
        0x213CE144AFD9CC3,
        0x2434BACD764774B,
        0x25FF9A692C6E9ED,
        0x1A0111EA3,
    ]);

    const MODULUS_BITS: u32 = 381;

    /// -MODULUS^-1 mod 2^58
    const M_CONST: Chunk = 0x1F3FFFCFFFCFFFD;
}
