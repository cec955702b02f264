//! The Goldilocks prime field, 2^448 - 2^224 - 1 with q = 7 mod 8.

use crate::{
    biginteger::{BigInteger, BigInteger448, Chunk},
    fields::{Fp, FpParameters, GeneralisedMersenne},
};

pub type Fq = Fp<FqParameters, 8, 58>;

pub struct FqParameters;

impl FpParameters<8, 58> for FqParameters {
    type Reduction = GeneralisedMersenne;

    /// MODULUS = 2^448 - 2^224 - 1 =
    /// 7268387242956068905493238078880045343536413606873180602814901991806123\
    /// 28166730772686396383698676545930088884461843637361053498018365439
    const MODULUS: BigInteger448 = BigInteger([
        0x3FFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFF,
        0x3FBFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFF,
        0x3FFFFFFFFFF,
    ]);

    const MODULUS_BITS: u32 = 448;

    const M_CONST: Chunk = 1;
}
