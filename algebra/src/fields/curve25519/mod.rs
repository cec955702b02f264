//! Base field of Curve25519.
pub mod fq;
pub use self::fq::*;
