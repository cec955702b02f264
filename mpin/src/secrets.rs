//! Randomness, secret issuance, share recombination and PIN extraction.

use crate::{
    curve::{
        check_pin, g1_from_octet, g1_to_octet, g2_from_octet, g2_to_octet, hid_point, map_to_g1,
        pin_mul, scalar_from_octet, scalar_to_octet,
    },
    hash::{hash_id, permit_hash},
    MpinError, MpinParameters, Octet, Result, GS,
};
use ark_bn254::{Fr, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, PrimeField};
use digest::Digest;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRngCore, SeedableRng};
use sha2::Sha256;

/// Source of an ephemeral scalar: drawn from a generator, or supplied by the caller.
pub enum Ephemeral<'a> {
    Random(&'a mut dyn CryptoRngCore),
    Supplied(&'a Octet),
}

impl Ephemeral<'_> {
    pub(crate) fn scalar(self) -> Result<Fr> {
        match self {
            Ephemeral::Random(rng) => Ok(random_scalar(rng)),
            Ephemeral::Supplied(x) => scalar_from_octet(x),
        }
    }
}

/// Uniform scalar, reduced from twice its length in random bytes.
pub(crate) fn random_scalar(rng: &mut dyn CryptoRngCore) -> Fr {
    let mut bytes = [0u8; 2 * GS];
    rng.fill_bytes(&mut bytes);
    Fr::from_be_bytes_mod_order(&bytes)
}

/// A ChaCha20 generator seeded with the SHA-256 hash of `seed`.
pub fn create_csprng(seed: &[u8]) -> ChaCha20Rng {
    ChaCha20Rng::from_seed(Sha256::digest(seed).into())
}

/// A random scalar, such as a master secret share.
pub fn random_generate(rng: &mut dyn CryptoRngCore) -> Octet {
    scalar_to_octet(&random_scalar(rng))
}

/// Server secret `s * Q`, for the fixed generator `Q` of G2.
pub fn get_server_secret(s: &Octet) -> Result<Octet> {
    let s = scalar_from_octet(s)?;
    Ok(g2_to_octet(&(G2Affine::generator() * s).into_affine()))
}

/// Client secret `s * H(ID)`, from the identity hash `hid`.
pub fn get_client_secret(s: &Octet, hid: &Octet) -> Result<Octet> {
    let s = scalar_from_octet(s)?;
    Ok(g1_to_octet(&(hid_point(hid.as_bytes()) * s).into_affine()))
}

/// Time permit `s * H(date || H(ID))` for the slot `date`.
pub fn get_client_permit<P: MpinParameters>(date: u32, s: &Octet, hid: &Octet) -> Result<Octet> {
    let s = scalar_from_octet(s)?;
    let w = map_to_g1(&permit_hash::<P>(date, hid.as_bytes()));
    Ok(g1_to_octet(&(w * s).into_affine()))
}

/// Token `CS - pin * H(ID)`, the client secret with the PIN taken out.
pub fn extract_pin<P: MpinParameters>(id: &[u8], pin: u32, cs: &Octet) -> Result<Octet> {
    check_pin::<P>(pin)?;
    let p = hid_point(hash_id::<P>(id).as_bytes());
    let cs = g1_from_octet(cs)?;
    let token = cs.into_group() - pin_mul::<P, _>(&p, pin)?;
    Ok(g1_to_octet(&token.into_affine()))
}

/// Sum of two G1 shares.
pub fn recombine_g1(r1: &Octet, r2: &Octet) -> Result<Octet> {
    let r1 = g1_from_octet(r1)?;
    let r2 = g1_from_octet(r2)?;
    Ok(g1_to_octet(&(r1.into_group() + r2.into_group()).into_affine()))
}

/// Sum of two G2 shares.
pub fn recombine_g2(w1: &Octet, w2: &Octet) -> Result<Octet> {
    let w1 = g2_from_octet(w1)?;
    let w2 = g2_from_octet(w2)?;
    Ok(g2_to_octet(&(w1.into_group() + w2.into_group()).into_affine()))
}

/// What [`get_g1_multiple`] multiplies.
pub enum G1Base<'a> {
    /// An encoded G1 point.
    Point(&'a Octet),
    /// A hash, mapped onto G1 first.
    Hash(&'a Octet),
}

/// `x * G` on G1, returning `x` and the multiple.
pub fn get_g1_multiple(x: Ephemeral<'_>, base: G1Base<'_>) -> Result<(Octet, Octet)> {
    let g = match base {
        G1Base::Point(p) => g1_from_octet(p)?.into_group(),
        G1Base::Hash(h) => hid_point(h.as_bytes()),
    };
    let x = x.scalar()?;
    Ok((scalar_to_octet(&x), g1_to_octet(&(g * x).into_affine())))
}

/// How [`get_g2_multiple`] uses its scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Multiplier {
    /// `x * G`.
    Scalar,
    /// `x^-1 * G`.
    Inverse,
}

/// A multiple of the G2 point `g`, returning `x` and the multiple.
pub fn get_g2_multiple(
    x: Ephemeral<'_>,
    multiplier: Multiplier,
    g: &Octet,
) -> Result<(Octet, Octet)> {
    let g = g2_from_octet(g)?;
    let x = x.scalar()?;
    let k = match multiplier {
        Multiplier::Scalar => x,
        Multiplier::Inverse => x.inverse().ok_or(MpinError::InvalidScalar)?,
    };
    Ok((scalar_to_octet(&x), g2_to_octet(&(g * k).into_affine())))
}
