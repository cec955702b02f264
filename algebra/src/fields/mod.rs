//! Prime fields over radix-limited big integers with lazy reduction.
//!
//! A field is described by a zero-sized parameter struct implementing [`FpParameters`],
//! which fixes the modulus and the [`ModularReduction`] strategy matching its shape.
//! Elements are [`Fp`] values kept in the strategy's residue form together with a bound
//! on how far they are from being fully reduced.

use crate::biginteger::{BigInteger, Chunk};

pub mod models;
pub use self::models::*;

pub mod stats;
pub use self::stats::*;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;

#[cfg(feature = "bn254")]
pub mod bn254;

#[cfg(feature = "curve25519")]
pub mod curve25519;

#[cfg(feature = "goldilocks")]
pub mod goldilocks;

#[cfg(feature = "mf254")]
pub mod mf254;

#[cfg(test)]
pub(crate) mod tests;

/// Constants describing a prime field of `N` limbs in radix `2^B`.
pub trait FpParameters<const N: usize, const B: u32>: 'static + Send + Sync + Sized {
    /// The reduction strategy matching the shape of the modulus.
    type Reduction: ModularReduction<N, B>;

    /// The modulus of the field.
    const MODULUS: BigInteger<N, B>;

    /// The number of bits needed to represent the `Self::MODULUS`.
    const MODULUS_BITS: u32;

    /// Strategy constant: `c` for `2^k - c` and `c * 2^(B * (N - 1)) - 1` shaped
    /// moduli, `-MODULUS^-1 mod 2^B` for generic Montgomery reduction.
    const M_CONST: Chunk;

    /// Length of the big-endian encoding of an element.
    const MODULUS_BYTES: usize = ((Self::MODULUS_BITS + 7) / 8) as usize;

    /// Residue class of the modulus mod 8, which selects the square root algorithm.
    const MOD8: Chunk = Self::MODULUS.0[0] & 7;

    /// Bits of the modulus held by the top limb.
    const TOP_BITS: u32 = Self::MODULUS_BITS % B;

    /// Ceiling on the excess of an element, and on the product of the excesses of two
    /// factors. Below it every value and every product fits the limbs.
    const FEXCESS: Chunk = 1 << (N as u32 * B - Self::MODULUS_BITS);
}
