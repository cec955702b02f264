//! Protocol constants, encoding sizes and the server's freshness policy.

use crate::{time::get_time, MpinError, Result};
use digest::Digest;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::env;

/// Length of an encoded base field element.
pub const FS: usize = 32;
/// Length of an encoded scalar.
pub const GS: usize = 32;
/// Length of an uncompressed G1 point, `0x04 || x || y`.
pub const G1S: usize = 2 * FS + 1;
/// Length of a G2 point, `x.c0 || x.c1 || y.c0 || y.c1`.
pub const G2S: usize = 4 * FS;
/// Length of a GT element, its twelve base field coefficients.
pub const GTS: usize = 12 * FS;
/// Length of a session key.
pub const PAS: usize = 16;

/// Deployment constants of the protocol.
pub trait MpinParameters: 'static + Send + Sync {
    /// PINs are integers in `[0, MAXPIN)`, and the PIN error search stops at this bound.
    const MAXPIN: u32;

    /// Number of bits processed when multiplying by a PIN. `2^PBLEN` must cover `MAXPIN`.
    const PBLEN: u32;

    /// Length of the validity period of a time permit.
    const TIME_SLOT_MINUTES: u32;

    /// Number of jumps of the kangaroo walks, of lengths `2^i`.
    const TS: usize;

    /// Steps of the tame kangaroo.
    const TRAP: usize;

    /// Hash for identities, challenges, transcripts and session keys.
    type Hash: Digest;
}

/// `MAXPIN = 10000` with SHA-256 and one day time permits.
pub struct DefaultParameters;

impl MpinParameters for DefaultParameters {
    const MAXPIN: u32 = 10000;
    const PBLEN: u32 = 14;
    const TIME_SLOT_MINUTES: u32 = 1440;
    const TS: usize = 8;
    const TRAP: usize = 600;
    type Hash = Sha256;
}

/// Timestamp acceptance policy of a server.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPolicy {
    /// Largest accepted distance in seconds between a client timestamp and the server
    /// clock. `None` accepts any timestamp.
    pub max_clock_skew: Option<u32>,
}

impl ServerPolicy {
    /// Reads `MPIN_MAX_CLOCK_SKEW` (seconds). An unset or invalid value leaves the skew
    /// unbounded.
    pub fn from_env() -> Self {
        let max_clock_skew = env::var("MPIN_MAX_CLOCK_SKEW")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(val) => Some(val),
                Err(_) => {
                    error!("Invalid MPIN_MAX_CLOCK_SKEW! Accepting any timestamp...");
                    None
                }
            });
        Self { max_clock_skew }
    }

    /// Checks `timestamp` against the current time.
    pub fn check(&self, timestamp: u32) -> Result<()> {
        self.check_at(timestamp, get_time())
    }

    /// Checks `timestamp` against the server time `now`.
    pub fn check_at(&self, timestamp: u32, now: u32) -> Result<()> {
        match self.max_clock_skew {
            Some(max_clock_skew) if timestamp.abs_diff(now) > max_clock_skew => {
                warn!("rejecting timestamp {}, server time is {}", timestamp, now);
                Err(MpinError::StaleTimestamp {
                    timestamp,
                    max_clock_skew,
                })
            }
            _ => Ok(()),
        }
    }
}
