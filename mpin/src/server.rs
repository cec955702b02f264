//! Server side of the one-pass and three-pass logins and of the key agreement.

use crate::{
    curve::{
        g1_from_octet, g1_to_octet, g2_from_octet, gt_to_octet, map_to_g1, scalar_from_octet,
    },
    hash::{get_y, hash_id, permit_hash, session_key},
    kangaroo::{kangaroo, PinError},
    MpinError, MpinParameters, Octet, Result, ServerPolicy,
};
use ark_bn254::{Bn254, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::Zero;
use log::debug;

/// Identity points recomputed by [`server_1`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerIds {
    /// `H(ID)` on G1.
    pub hid: Octet,
    /// `H(ID) + H(date || H(ID))`, when time permits are in use.
    pub htid: Option<Octet>,
}

/// Pairing values from which the PIN error of a rejected login can be searched.
///
/// `e * f^k` is the identity for the error `k` between the PIN entered and the PIN the
/// token was made for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinErrorWitness {
    pub e: Octet,
    pub f: Octet,
}

impl PinErrorWitness {
    /// Runs the kangaroo search on the witness.
    pub fn search<P: MpinParameters>(&self) -> Result<PinError> {
        kangaroo::<P>(&self.e, &self.f)
    }
}

/// Outcome of the pairing check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Accepted,
    Rejected { pin_error: Option<PinErrorWitness> },
}

impl Verification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verification::Accepted)
    }
}

/// First pass: the identity points of the claimed `id`, for the slot `date` if time
/// permits are in use.
pub fn server_1<P: MpinParameters>(date: Option<u32>, id: &[u8]) -> ServerIds {
    let hid = hash_id::<P>(id);
    let p = map_to_g1(hid.as_bytes());
    let htid = date.map(|date| {
        let w = map_to_g1(&permit_hash::<P>(date, hid.as_bytes()));
        g1_to_octet(&(p + w).into_affine())
    });
    ServerIds {
        hid: g1_to_octet(&p),
        htid,
    }
}

/// Second pass: checks `e(V, Q) * e(y * HTID + UT, SS) = 1`, using `HID` and `U` when no
/// time permit is in use. With `diagnose`, a rejection carries the witness for the PIN
/// error search.
pub fn server_2(
    ids: &ServerIds,
    y: &Octet,
    ss: &Octet,
    u: &Octet,
    ut: Option<&Octet>,
    v: &Octet,
    diagnose: bool,
) -> Result<Verification> {
    let (h, commitment) = match (&ids.htid, ut) {
        (Some(htid), Some(ut)) => (htid, ut),
        (None, _) => (&ids.hid, u),
        (Some(_), None) => {
            debug!("time permit in use but no UT received");
            return Err(MpinError::InvalidPoint);
        }
    };
    let y = scalar_from_octet(y)?;
    let ss = g2_from_octet(ss)?;
    let v = g1_from_octet(v)?;
    let h = g1_from_octet(h)?;
    let commitment = g1_from_octet(commitment)?;

    let q = G2Affine::generator();
    let r = (h * y + commitment).into_affine();
    let g = Bn254::multi_pairing([v, r], [q, ss]);
    if g.is_zero() {
        return Ok(Verification::Accepted);
    }

    debug!("pairing check failed");
    let pin_error = if diagnose {
        // the error is in the PIN only, so it is measured against the plain identity
        let u = g1_from_octet(u)?;
        let hid = g1_from_octet(&ids.hid)?;
        let f = Bn254::pairing(hid * y + u, q);
        Some(PinErrorWitness {
            e: gt_to_octet(&g),
            f: gt_to_octet(&f),
        })
    } else {
        None
    };
    Ok(Verification::Rejected { pin_error })
}

/// Output of the one-pass [`server`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerOutput {
    pub ids: ServerIds,
    /// Challenge derived from the timestamp and the commitment.
    pub y: Octet,
    pub verification: Verification,
}

/// One-pass login: checks the timestamp against `policy`, recomputes the challenge and
/// runs both passes.
#[allow(clippy::too_many_arguments)]
pub fn server<P: MpinParameters>(
    date: Option<u32>,
    timestamp: u32,
    policy: &ServerPolicy,
    ss: &Octet,
    u: &Octet,
    ut: Option<&Octet>,
    v: &Octet,
    id: &[u8],
    message: &[u8],
    diagnose: bool,
) -> Result<ServerOutput> {
    policy.check(timestamp)?;
    let ids = server_1::<P>(date, id);
    let y = get_y::<P>(timestamp, ut.unwrap_or(u), message);
    let verification = server_2(&ids, &y, ss, u, ut, v, diagnose)?;
    Ok(ServerOutput {
        ids,
        y,
        verification,
    })
}

/// Server session key `H(e(Z + h * HID, SS), w * U)`, with `UT` in place of `U` when a
/// time permit is in use.
///
/// `z` is the client's `Z = r * H(ID)`, `w` the scalar behind the `T = w * H(ID)` sent
/// to the client and `h` the transcript hash.
pub fn server_key<P: MpinParameters>(
    z: &Octet,
    ss: &Octet,
    w: &Octet,
    h: &Octet,
    hid: &Octet,
    u: &Octet,
    ut: Option<&Octet>,
) -> Result<Octet> {
    let z = g1_from_octet(z)?;
    let ss = g2_from_octet(ss)?;
    let w = scalar_from_octet(w)?;
    let h = scalar_from_octet(h)?;
    let hid = g1_from_octet(hid)?;
    let u = g1_from_octet(ut.unwrap_or(u))?;

    let r = hid * h + z;
    let g = Bn254::pairing(r, ss);
    let u = (u * w).into_affine();
    Ok(session_key::<P>(&g.0, &u))
}
