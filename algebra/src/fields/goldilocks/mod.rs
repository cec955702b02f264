//! Base field of Ed448-Goldilocks.
pub mod fq;
pub use self::fq::*;
