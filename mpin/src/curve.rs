//! Encodings of BN254 group elements and scalars, hashing to G1 and PIN arithmetic.

use crate::{MpinError, MpinParameters, Octet, Result, FS, G1S, G2S, GS, GTS};
use algebra::fields::bn254::Fq as BaseField;
use ark_bn254::{Bn254, Fq, Fq12, Fq2, Fq6, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::PairingOutput, AffineRepr, Group};
use ark_ff::{BigInteger, PrimeField, Zero};
use log::warn;

pub(crate) type Gt = PairingOutput<Bn254>;

const UNCOMPRESSED_TAG: u8 = 0x04;

pub(crate) fn fq_to_bytes(f: &Fq) -> Vec<u8> {
    f.into_bigint().to_bytes_be()
}

/// Reads a canonical big-endian encoding, rejecting values not below the modulus.
fn fq_from_bytes(bytes: &[u8]) -> Option<Fq> {
    let f = Fq::from_be_bytes_mod_order(bytes);
    if fq_to_bytes(&f) == bytes {
        Some(f)
    } else {
        None
    }
}

fn fq2_to_bytes(f: &Fq2, out: &mut Vec<u8>) {
    out.extend_from_slice(&fq_to_bytes(&f.c0));
    out.extend_from_slice(&fq_to_bytes(&f.c1));
}

fn fq2_from_bytes(bytes: &[u8]) -> Option<Fq2> {
    Some(Fq2::new(
        fq_from_bytes(&bytes[..FS])?,
        fq_from_bytes(&bytes[FS..2 * FS])?,
    ))
}

fn invalid_point(what: &str) -> MpinError {
    warn!("rejecting {}", what);
    MpinError::InvalidPoint
}

/// `0x04 || x || y`. The point at infinity has no affine coordinates and is written as
/// zeros, which no decoder accepts.
pub(crate) fn g1_to_octet(p: &G1Affine) -> Octet {
    let mut out = Vec::with_capacity(G1S);
    out.push(UNCOMPRESSED_TAG);
    match p.xy() {
        Some((x, y)) => {
            out.extend_from_slice(&fq_to_bytes(x));
            out.extend_from_slice(&fq_to_bytes(y));
        }
        None => out.resize(G1S, 0),
    }
    Octet::from(out)
}

/// Decodes a G1 point, checking it lies in the prime order subgroup.
pub(crate) fn g1_from_octet(o: &Octet) -> Result<G1Affine> {
    let bytes = o.as_bytes();
    if bytes.len() != G1S || bytes[0] != UNCOMPRESSED_TAG {
        return Err(invalid_point("malformed G1 encoding"));
    }
    let x = fq_from_bytes(&bytes[1..FS + 1]).ok_or_else(|| invalid_point("G1 x out of range"))?;
    let y = fq_from_bytes(&bytes[FS + 1..]).ok_or_else(|| invalid_point("G1 y out of range"))?;
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(invalid_point("G1 point off the curve"));
    }
    Ok(p)
}

/// `x.c0 || x.c1 || y.c0 || y.c1`, zeros for the point at infinity.
pub(crate) fn g2_to_octet(p: &G2Affine) -> Octet {
    let mut out = Vec::with_capacity(G2S);
    match p.xy() {
        Some((x, y)) => {
            fq2_to_bytes(x, &mut out);
            fq2_to_bytes(y, &mut out);
        }
        None => out.resize(G2S, 0),
    }
    Octet::from(out)
}

/// Decodes a G2 point, checking it lies in the prime order subgroup.
pub(crate) fn g2_from_octet(o: &Octet) -> Result<G2Affine> {
    let bytes = o.as_bytes();
    if bytes.len() != G2S {
        return Err(invalid_point("malformed G2 encoding"));
    }
    let x = fq2_from_bytes(&bytes[..2 * FS]).ok_or_else(|| invalid_point("G2 x out of range"))?;
    let y = fq2_from_bytes(&bytes[2 * FS..]).ok_or_else(|| invalid_point("G2 y out of range"))?;
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(invalid_point("G2 point off the curve or outside the subgroup"));
    }
    Ok(p)
}

/// The twelve base field coefficients in tower order.
pub(crate) fn gt_to_octet(g: &Gt) -> Octet {
    let mut out = Vec::with_capacity(GTS);
    for c in [&g.0.c0, &g.0.c1] {
        for f in [&c.c0, &c.c1, &c.c2] {
            fq2_to_bytes(f, &mut out);
        }
    }
    Octet::from(out)
}

/// Decodes a GT element. Only the range of the coefficients is checked.
pub(crate) fn gt_from_octet(o: &Octet) -> Result<Gt> {
    let bytes = o.as_bytes();
    if bytes.len() != GTS {
        return Err(invalid_point("malformed GT encoding"));
    }
    let mut coefficients = bytes.chunks(2 * FS).map(fq2_from_bytes);
    let mut next = || {
        coefficients
            .next()
            .flatten()
            .ok_or_else(|| invalid_point("GT coefficient out of range"))
    };
    let c0 = Fq6::new(next()?, next()?, next()?);
    let c1 = Fq6::new(next()?, next()?, next()?);
    Ok(PairingOutput(Fq12::new(c0, c1)))
}

pub(crate) fn scalar_to_octet(s: &Fr) -> Octet {
    Octet::from(s.into_bigint().to_bytes_be())
}

/// Reads a big-endian scalar of at most `GS` bytes and reduces it modulo the group order.
pub(crate) fn scalar_from_octet(o: &Octet) -> Result<Fr> {
    if o.is_empty() || o.len() > GS {
        return Err(MpinError::InvalidScalar);
    }
    Ok(Fr::from_be_bytes_mod_order(o.as_bytes()))
}

fn to_base_field(f: &Fq) -> Option<BaseField> {
    BaseField::from_bytes(&fq_to_bytes(f))
}

fn from_base_field(f: &BaseField) -> Fq {
    Fq::from_be_bytes_mod_order(&f.to_bytes())
}

/// The point with abscissa `x` whose ordinate has parity `odd`, if `x^3 + 3` is a square.
pub(crate) fn set_x(x: &BaseField, odd: bool) -> Option<G1Affine> {
    let rhs = x.square() * x + BaseField::from_u64(3);
    let mut y = rhs.sqrt()?;
    if y.is_odd() != odd {
        y = -y;
    }
    Some(G1Affine::new_unchecked(
        from_base_field(x),
        from_base_field(&y),
    ))
}

/// Abscissa and ordinate parity of a finite point.
pub(crate) fn get_x(p: &G1Affine) -> Option<(BaseField, bool)> {
    let (x, y) = p.xy()?;
    let x = to_base_field(x)?;
    let odd = to_base_field(y)?.is_odd();
    Some((x, odd))
}

/// First valid point at or after abscissa `x`.
pub(crate) fn map_from(mut x: BaseField, odd: bool) -> G1Affine {
    loop {
        if let Some(p) = set_x(&x, odd) {
            return p;
        }
        x += BaseField::one();
    }
}

/// Hashes a digest onto G1 by try-and-increment. G1 has cofactor 1.
pub(crate) fn map_to_g1(h: &[u8]) -> G1Affine {
    map_from(BaseField::from_bytes_mod_order(h), false)
}

/// Fails with `BadPin` unless `pin` lies in `[0, MAXPIN)`.
pub(crate) fn check_pin<P: MpinParameters>(pin: u32) -> Result<()> {
    if pin >= P::MAXPIN {
        warn!("rejecting PIN outside [0, {})", P::MAXPIN);
        return Err(MpinError::BadPin);
    }
    Ok(())
}

/// `pin * base` by a ladder over `PBLEN` bits, so that every PIN costs the same.
pub(crate) fn pin_mul<P: MpinParameters, G: Group>(base: &G, pin: u32) -> Result<G> {
    check_pin::<P>(pin)?;
    let mut r0 = G::zero();
    let mut r1 = *base;
    for i in (0..P::PBLEN).rev() {
        if (pin >> i) & 1 == 1 {
            r0 += &r1;
            r1.double_in_place();
        } else {
            r1 += &r0;
            r0.double_in_place();
        }
    }
    Ok(r0)
}

pub(crate) fn hid_point(hid: &[u8]) -> G1Projective {
    map_to_g1(hid).into_group()
}
