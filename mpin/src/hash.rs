//! Hashing of identities, challenges, transcripts and session keys.

use crate::{
    curve::{fq_to_bytes, scalar_to_octet},
    MpinParameters, Octet, Result, FS, PAS,
};
use ark_bn254::{Fq12, Fr, G1Affine};
use ark_ff::PrimeField;
use byteorder::{BigEndian, ByteOrder};
use digest::Digest;

/// `H(n || data)`, truncated or zero padded to `FS` bytes. The 4 byte big-endian prefix
/// is only hashed when `n` is given.
pub(crate) fn hash_with_prefix<P: MpinParameters>(n: Option<u32>, data: &[&[u8]]) -> [u8; FS] {
    let mut hasher = P::Hash::new();
    if let Some(n) = n {
        let mut prefix = [0u8; 4];
        BigEndian::write_u32(&mut prefix, n);
        hasher.update(prefix);
    }
    for d in data {
        hasher.update(*d);
    }
    let digest = hasher.finalize();

    let mut out = [0u8; FS];
    let len = digest.len().min(FS);
    out[..len].copy_from_slice(&digest[..len]);
    out
}

/// Hash of a client identity.
pub fn hash_id<P: MpinParameters>(id: &[u8]) -> Octet {
    Octet::from_bytes(&hash_with_prefix::<P>(None, &[id]))
}

/// Hash binding a client identity hash to a time permit slot.
pub(crate) fn permit_hash<P: MpinParameters>(date: u32, hid: &[u8]) -> [u8; FS] {
    hash_with_prefix::<P>(Some(date), &[hid])
}

pub(crate) fn challenge<P: MpinParameters>(timestamp: u32, u: &Octet, message: &[u8]) -> Fr {
    let h = hash_with_prefix::<P>(Some(timestamp), &[u.as_bytes(), message]);
    Fr::from_be_bytes_mod_order(&h)
}

/// Login challenge `y = H(timestamp || U || message) mod r`, with `U` replaced by `UT`
/// when a time permit is in use.
pub fn get_y<P: MpinParameters>(timestamp: u32, u: &Octet, message: &[u8]) -> Octet {
    scalar_to_octet(&challenge::<P>(timestamp, u, message))
}

/// Transcript hash of the key agreement. `ut` replaces `u` when a time permit is in use.
pub fn hash_all<P: MpinParameters>(
    hid: &Octet,
    u: &Octet,
    ut: Option<&Octet>,
    y: &Octet,
    v: &Octet,
    z: &Octet,
    t: &Octet,
) -> Result<Octet> {
    let mut transcript = Octet::new(10 * FS + 4);
    transcript.join_octet(hid)?;
    transcript.join_octet(ut.unwrap_or(u))?;
    transcript.join_octet(v)?;
    transcript.join_octet(y)?;
    transcript.join_octet(z)?;
    transcript.join_octet(t)?;
    Ok(Octet::from_bytes(&hash_with_prefix::<P>(
        None,
        &[transcript.as_bytes()],
    )))
}

/// Session key from the first four base field coefficients of `g` and the affine
/// coordinates of `w`.
pub(crate) fn session_key<P: MpinParameters>(g: &Fq12, w: &G1Affine) -> Octet {
    let c = &g.c0;
    let mut hasher = P::Hash::new();
    for f in [&c.c0.c0, &c.c0.c1, &c.c1.c0, &c.c1.c1] {
        hasher.update(fq_to_bytes(f));
    }
    hasher.update(fq_to_bytes(&w.x));
    hasher.update(fq_to_bytes(&w.y));
    let digest = hasher.finalize();
    Octet::from_bytes(&digest[..PAS])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultParameters;
    use sha2::{Sha256, Sha512};

    struct Sha512Parameters;

    impl MpinParameters for Sha512Parameters {
        const MAXPIN: u32 = 10000;
        const PBLEN: u32 = 14;
        const TIME_SLOT_MINUTES: u32 = 1440;
        const TS: usize = 8;
        const TRAP: usize = 600;
        type Hash = Sha512;
    }

    #[test]
    fn prefix_layout() {
        let id = b"testUser@miracl.com";
        assert_eq!(
            hash_id::<DefaultParameters>(id).as_bytes(),
            Sha256::digest(id).as_slice()
        );

        let mut prefixed = vec![0x00, 0x00, 0x48, 0xd4];
        prefixed.extend_from_slice(id);
        assert_eq!(
            &permit_hash::<DefaultParameters>(18644, id)[..],
            Sha256::digest(&prefixed).as_slice()
        );
        assert_ne!(
            permit_hash::<DefaultParameters>(18644, id),
            permit_hash::<DefaultParameters>(18645, id)
        );
    }

    #[test]
    fn long_digests_are_truncated() {
        let id = b"testUser@miracl.com";
        let h = hash_id::<Sha512Parameters>(id);
        assert_eq!(h.len(), FS);
        assert_eq!(h.as_bytes(), &Sha512::digest(id)[..FS]);
    }

    #[test]
    fn hash_all_rejects_oversized_transcripts() {
        let small = Octet::from_bytes(&[1u8; FS]);
        let point = Octet::from_bytes(&[2u8; 2 * FS + 1]);
        assert!(
            hash_all::<DefaultParameters>(&small, &point, None, &small, &point, &point, &point)
                .is_ok()
        );

        let huge = Octet::from_bytes(&[3u8; 4 * FS]);
        assert!(matches!(
            hash_all::<DefaultParameters>(&small, &huge, None, &small, &huge, &huge, &huge),
            Err(crate::MpinError::OctetOverflow { .. })
        ));
    }
}
