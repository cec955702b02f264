//! Encoding of time permits as strings indistinguishable from random.
//!
//! A permit `TP` is written as the sum of two points, each given by an abscissa from
//! which the next valid abscissa is found by incrementing. The first abscissa is
//! uniform; the second is uniform in the gap that precedes the abscissa of
//! `TP - W`, so the encoding reveals nothing about `TP`.

use crate::{
    curve::{g1_from_octet, g1_to_octet, get_x, map_from, set_x},
    MpinError, Octet, Result, FS, G1S,
};
use algebra::fields::bn254::Fq;
use ark_ec::{AffineRepr, CurveGroup};
use log::warn;
use rand::Rng;
use rand_core::CryptoRngCore;

const UNCOMPRESSED_BIT: u8 = 0x04;

/// Abscissa `v` and parity of `p`, and the length `r` of the gap of invalid abscissas
/// before `v`, counting `v` itself.
fn unmap(p: &ark_bn254::G1Affine) -> Option<(Fq, bool, u64)> {
    let (x, odd) = get_x(p)?;
    let mut v = x;
    let mut r = 0;
    loop {
        v -= Fq::one();
        r += 1;
        if set_x(&v, odd).is_some() {
            return Some((v, odd, r));
        }
    }
}

/// Re-encodes the time permit `tp` as a tag byte with bit 2 clear and two abscissas.
pub fn encoding(rng: &mut dyn CryptoRngCore, tp: &Octet) -> Result<Octet> {
    let p = g1_from_octet(tp)?;

    let u: Fq = rng.gen();
    let su = rng.gen::<bool>();
    let w = map_from(u, su);

    let (mut v, sv, gap) =
        unmap(&(p.into_group() - w).into_affine()).ok_or(MpinError::InvalidPoint)?;
    let m = rng.gen_range(0..gap);
    v += Fq::from_u64(m + 1);

    let mut out = Vec::with_capacity(G1S);
    out.push(su as u8 + 2 * sv as u8);
    out.extend_from_slice(&u.to_bytes());
    out.extend_from_slice(&v.to_bytes());
    Ok(Octet::from(out))
}

/// Inverse of [`encoding`].
pub fn decoding(tp: &Octet) -> Result<Octet> {
    let bytes = tp.as_bytes();
    if bytes.len() != G1S || bytes[0] & UNCOMPRESSED_BIT != 0 {
        warn!("rejecting encoded time permit with a point tag");
        return Err(MpinError::InvalidPoint);
    }
    let su = bytes[0] & 1 == 1;
    let sv = (bytes[0] >> 1) & 1 == 1;
    let u = Fq::from_bytes_mod_order(&bytes[1..FS + 1]);
    let v = Fq::from_bytes_mod_order(&bytes[FS + 1..]);

    let p = map_from(u, su).into_group() + map_from(v, sv);
    Ok(g1_to_octet(&p.into_affine()))
}
