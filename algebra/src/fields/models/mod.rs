//! Field arithmetic shared by every parameter set:
//!
//! - `Fp`, an element with a tracked excess and lazy reduction,
//! - the reduction strategies for pseudo-Mersenne, generalised Mersenne,
//!   Montgomery-friendly and generic moduli.

pub mod fp;
pub use self::fp::*;

pub mod reduction;
pub use self::reduction::*;
