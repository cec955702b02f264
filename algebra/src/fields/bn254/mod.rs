//! Base field Fq of the BN254 pairing-friendly curve.
pub mod fq;
pub use self::fq::*;

#[cfg(test)]
mod tests;
