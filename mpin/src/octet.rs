use crate::{MpinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A length tagged byte buffer with a fixed capacity.
///
/// Every encoded group element, scalar, hash and key crosses the API as an octet.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octet {
    val: Vec<u8>,
    max: usize,
}

impl Octet {
    /// An empty octet able to hold `max` bytes.
    pub fn new(max: usize) -> Self {
        Self {
            val: Vec::with_capacity(max),
            max,
        }
    }

    /// An octet holding exactly `bytes`, with no room to spare.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            val: bytes.to_vec(),
            max: bytes.len(),
        }
    }

    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        hex::decode(s).map(Self::from)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.val)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.val
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.val.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max
    }

    pub fn clear(&mut self) {
        self.val.clear();
    }

    /// Appends `bytes`, failing without modifying the octet if they do not fit.
    pub fn join_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let requested = self.val.len() + bytes.len();
        if requested > self.max {
            return Err(MpinError::OctetOverflow {
                capacity: self.max,
                requested,
            });
        }
        self.val.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn join_octet(&mut self, other: &Octet) -> Result<()> {
        self.join_bytes(&other.val)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.val
    }
}

impl From<Vec<u8>> for Octet {
    fn from(val: Vec<u8>) -> Self {
        let max = val.len();
        Self { val, max }
    }
}

impl AsRef<[u8]> for Octet {
    fn as_ref(&self) -> &[u8] {
        &self.val
    }
}

impl fmt::Debug for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octet({}/{}: {})", self.val.len(), self.max, self.to_hex())
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
