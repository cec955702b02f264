//! A 254 bit Montgomery-friendly prime field.
pub mod fq;
pub use self::fq::*;
