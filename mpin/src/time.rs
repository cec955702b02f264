use crate::MpinParameters;
use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, the timestamp hashed into login challenges.
pub fn get_time() -> u32 {
    seconds_since_epoch(SystemTime::now())
}

/// Index of the current time permit slot.
pub fn today<P: MpinParameters>() -> u32 {
    get_time() / (60 * P::TIME_SLOT_MINUTES)
}

/// A clock set before the epoch reads as 0.
fn seconds_since_epoch(now: SystemTime) -> u32 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as u32,
        Err(e) => {
            warn!(
                "System clock is {:?} before the Unix epoch! Using timestamp 0...",
                e.duration()
            );
            0
        }
    }
}
