//! Base field of the BLS12-381 curve.
pub mod fq;
pub use self::fq::*;

#[cfg(test)]
mod tests;
