//! The M-Pin two factor authentication protocol over the BN254 pairing.
//!
//! A trusted authority holding a master secret `s` issues each client the secret
//! `s * H(ID)` and each server `s * Q`. The client splits its secret into a PIN and a
//! token it can store; logging in proves knowledge of both through a pairing check on
//! the server, optionally bound to a daily time permit. The full variant also derives a
//! shared session key. Shares from several authorities recombine by point addition.
//!
//! Group elements, scalars and keys cross the API as [`Octet`]s. Hashing onto G1 uses
//! the BN254 base field from `algebra`; pairings come from arkworks.

pub mod client;
pub use self::client::*;

mod curve;

pub mod error;
pub use self::error::*;

pub mod hash;
pub use self::hash::{get_y, hash_all, hash_id};

pub mod kangaroo;
pub use self::kangaroo::*;

pub mod octet;
pub use self::octet::*;

pub mod parameters;
pub use self::parameters::*;

pub mod permit;
pub use self::permit::*;

pub mod secrets;
pub use self::secrets::*;

pub mod server;
pub use self::server::*;

pub mod time;
pub use self::time::*;
