//! Multi-precision arithmetic for elliptic curve cryptography.
//!
//! Big integers are arrays of signed limbs in radix `2^B`, leaving headroom above each
//! limb so that carries can be propagated lazily. Prime fields built on them track how
//! far each element is from full reduction and reduce double length products with the
//! strategy matching the shape of the modulus: pseudo-Mersenne, generalised Mersenne,
//! Montgomery-friendly, or generic Montgomery.

pub mod biginteger;
pub use self::biginteger::*;

pub mod fields;
pub use self::fields::*;
