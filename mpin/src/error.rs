use thiserror::Error;

/// Failures reported by the protocol operations.
///
/// A rejected login is not an error: it is reported through
/// [`Verification::Rejected`](crate::Verification::Rejected).
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpinError {
    #[error("group element is malformed, off the curve or outside the prime order subgroup")]
    InvalidPoint,

    #[error("PIN is outside the range [0, MAXPIN)")]
    BadPin,

    #[error("timestamp {timestamp} is more than {max_clock_skew} seconds away from the server clock")]
    StaleTimestamp { timestamp: u32, max_clock_skew: u32 },

    #[error("octet of capacity {capacity} cannot hold {requested} bytes")]
    OctetOverflow { capacity: usize, requested: usize },

    #[error("scalar is empty, longer than a group element or not invertible")]
    InvalidScalar,
}

impl MpinError {
    /// Numeric status code, as used by existing M-Pin deployments.
    pub fn code(&self) -> i32 {
        match self {
            MpinError::InvalidScalar => -11,
            MpinError::StaleTimestamp { .. } => -13,
            MpinError::InvalidPoint => -14,
            MpinError::OctetOverflow { .. } => -16,
            MpinError::BadPin => -19,
        }
    }
}

pub type Result<T> = std::result::Result<T, MpinError>;
