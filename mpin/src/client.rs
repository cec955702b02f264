//! Client side of the one-pass and three-pass logins and of the key agreement.

use crate::{
    curve::{
        check_pin, g1_from_octet, g1_to_octet, gt_from_octet, gt_to_octet, hid_point, map_to_g1,
        pin_mul, scalar_from_octet, scalar_to_octet,
    },
    hash::{get_y, hash_id, permit_hash, session_key},
    Ephemeral, MpinParameters, Octet, Result,
};
use ark_bn254::{Bn254, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use log::debug;

/// A time permit together with the slot it was issued for.
#[derive(Copy, Clone, Debug)]
pub struct TimePermit<'a> {
    pub date: u32,
    pub permit: &'a Octet,
}

/// Output of [`client_1`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientFirstPass {
    /// The ephemeral scalar `x`.
    pub x: Octet,
    /// Reconstructed secret `SEC = token + pin * H(ID)`, plus the time permit if any.
    pub sec: Octet,
    /// `U = x * H(ID)`.
    pub u: Octet,
    /// `UT = x * (H(ID) + H(date || H(ID)))`, when a time permit is in use.
    pub ut: Option<Octet>,
}

impl ClientFirstPass {
    /// The commitment the challenge is computed over.
    pub fn commitment(&self) -> &Octet {
        self.ut.as_ref().unwrap_or(&self.u)
    }
}

/// First pass: rebuilds the client secret from the token and PIN, and commits to `x`.
pub fn client_1<P: MpinParameters>(
    id: &[u8],
    x: Ephemeral<'_>,
    pin: u32,
    token: &Octet,
    permit: Option<TimePermit<'_>>,
) -> Result<ClientFirstPass> {
    check_pin::<P>(pin)?;
    let hid = hash_id::<P>(id);
    let p = hid_point(hid.as_bytes());
    let token = g1_from_octet(token)?;
    let mut sec = token.into_group() + pin_mul::<P, _>(&p, pin)?;
    let x = x.scalar()?;

    let u = g1_to_octet(&(p * x).into_affine());
    let ut = match permit {
        Some(TimePermit { date, permit }) => {
            sec += g1_from_octet(permit)?;
            let w = map_to_g1(&permit_hash::<P>(date, hid.as_bytes()));
            Some(g1_to_octet(&((p + w) * x).into_affine()))
        }
        None => None,
    };

    Ok(ClientFirstPass {
        x: scalar_to_octet(&x),
        sec: g1_to_octet(&sec.into_affine()),
        u,
        ut,
    })
}

/// Second pass: `V = -(x + y) * SEC` for the server challenge `y`.
pub fn client_2(x: &Octet, y: &Octet, sec: &Octet) -> Result<Octet> {
    let x = scalar_from_octet(x)?;
    let y = scalar_from_octet(y)?;
    let sec = g1_from_octet(sec)?;
    Ok(g1_to_octet(&(sec * (-(x + y))).into_affine()))
}

/// Output of the one-pass [`client`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOutput {
    pub x: Octet,
    /// Challenge derived from the timestamp and the commitment.
    pub y: Octet,
    pub u: Octet,
    pub ut: Option<Octet>,
    pub v: Octet,
}

/// One-pass login: both passes, with the challenge computed locally from `timestamp`
/// and `message`.
pub fn client<P: MpinParameters>(
    id: &[u8],
    x: Ephemeral<'_>,
    pin: u32,
    token: &Octet,
    permit: Option<TimePermit<'_>>,
    message: &[u8],
    timestamp: u32,
) -> Result<ClientOutput> {
    let first = client_1::<P>(id, x, pin, token, permit)?;
    let y = get_y::<P>(timestamp, first.commitment(), message);
    let v = client_2(&first.x, &y, &first.sec)?;
    debug!("client pass complete for timestamp {}", timestamp);
    Ok(ClientOutput {
        x: first.x,
        y,
        u: first.u,
        ut: first.ut,
        v,
    })
}

/// Pairings reused by [`client_key`]: `g1 = e(token, Q)` and `g2 = e(H(ID), Q)`.
pub fn precompute(token: &Octet, hid: &Octet) -> Result<(Octet, Octet)> {
    let t = g1_from_octet(token)?;
    let q = G2Affine::generator();
    let g1 = Bn254::pairing(t, q);
    let g2 = Bn254::pairing(map_to_g1(hid.as_bytes()), q);
    Ok((gt_to_octet(&g1), gt_to_octet(&g2)))
}

/// Client session key `H((g1 * g2^pin)^(r + h), x * T)`.
///
/// `r` is the scalar behind the `Z = r * H(ID)` sent to the server, `x` the login
/// ephemeral, `h` the transcript hash and `t` the server's `T = w * H(ID)`.
pub fn client_key<P: MpinParameters>(
    g1: &Octet,
    g2: &Octet,
    pin: u32,
    r: &Octet,
    x: &Octet,
    h: &Octet,
    t: &Octet,
) -> Result<Octet> {
    let g1 = gt_from_octet(g1)?;
    let g2 = gt_from_octet(g2)?;
    let r = scalar_from_octet(r)?;
    let x = scalar_from_octet(x)?;
    let h = scalar_from_octet(h)?;
    let t = g1_from_octet(t)?;

    let g = (g1 + pin_mul::<P, _>(&g2, pin)?) * (r + h);
    let w = (t * x).into_affine();
    Ok(session_key::<P>(&g.0, &w))
}
