//! Recovery of the PIN error of a rejected login by Pollard's kangaroo method.

use crate::{
    curve::{gt_from_octet, Gt},
    MpinParameters, Octet, Result,
};
use ark_ff::{PrimeField, Zero};
use log::{debug, trace};

/// Result of the PIN error search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinError {
    /// The PIN entered was off by this amount.
    Found(i32),
    /// The walks did not meet within the search bound.
    NotFound,
}

/// Jump taken from `g`, keyed by its first base field coefficient.
fn jump<P: MpinParameters>(g: &Gt) -> usize {
    (g.0.c0.c0.c0.into_bigint().0[0] % P::TS as u64) as usize
}

/// Finds `k` in `(-MAXPIN, MAXPIN)` with `e * f^k = 1`.
///
/// A tame kangaroo jumps `TRAP` times from the identity, leaving a trap at `f^dn`. A
/// wild kangaroo starting from `e` follows the same jump rule until it lands in the
/// trap, runs `MAXPIN` past it, or exhausts its step budget.
pub fn kangaroo<P: MpinParameters>(e: &Octet, f: &Octet) -> Result<PinError> {
    let ge = gt_from_octet(e)?;
    let gf = gt_from_octet(f)?;

    let mut table = Vec::with_capacity(P::TS);
    let mut distance = Vec::with_capacity(P::TS);
    table.push(gf);
    distance.push(1i64);
    for m in 1..P::TS {
        table.push(table[m - 1] + table[m - 1]);
        distance.push(2 * distance[m - 1]);
    }

    let mut trap = Gt::zero();
    let mut dn = 0i64;
    for _ in 0..P::TRAP {
        let i = jump::<P>(&trap);
        trap += table[i];
        dn += distance[i];
    }
    trace!("trap set at distance {}", dn);

    let mut wild = ge;
    let mut dm = 0i64;
    let mut steps = 0;
    while dm - dn < P::MAXPIN as i64 {
        steps += 1;
        if steps > 4 * P::TRAP {
            break;
        }
        let i = jump::<P>(&wild);
        wild += table[i];
        dm += distance[i];
        if wild == trap {
            let k = (dm - dn) as i32;
            debug!("PIN error {} found after {} steps", k, steps);
            return Ok(PinError::Found(k));
        }
    }
    debug!("PIN error not found after {} steps", steps);
    Ok(PinError::NotFound)
}
