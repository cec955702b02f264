//! Reduction of double length products, one strategy per modulus shape.

use crate::{
    biginteger::{BigInteger, Chunk, DChunk, DoubleBigInteger},
    fields::FpParameters,
};

/// Turns double length products back into single length residues.
///
/// `reduce` expects a normalised product of two residues whose excesses multiply to at
/// most `FEXCESS`; it never fails and never checks this.
pub trait ModularReduction<const N: usize, const B: u32>: 'static + Send + Sync {
    /// Bound on the excess of every value returned by `reduce`.
    const REDUCED_EXCESS: Chunk;

    fn reduce<P: FpParameters<N, B>>(d: &DoubleBigInteger<N, B>) -> BigInteger<N, B>;

    /// Maps a plain value in `[0, p)` to residue form.
    fn to_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B>;

    /// Maps a residue back to a plain value, not necessarily fully reduced.
    fn from_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B>;
}

/// Moduli `2^k - c` for a small `c`, held in `M_CONST`.
pub struct PseudoMersenne;

/// Moduli `2^(2k) - 2^k - 1`, such as the Goldilocks prime.
pub struct GeneralisedMersenne;

/// Moduli `c * 2^(B * (N - 1)) - 1`, for which `-p^-1 mod 2^B` is 1.
pub struct MontgomeryFriendly;

/// Any other odd modulus, reduced by Comba style Montgomery reduction.
pub struct NotSpecial;

impl<const N: usize, const B: u32> ModularReduction<N, B> for PseudoMersenne {
    const REDUCED_EXCESS: Chunk = 3;

    fn reduce<P: FpParameters<N, B>>(d: &DoubleBigInteger<N, B>) -> BigInteger<N, B> {
        let (mut t, mut b) = d.split(P::MODULUS_BITS);

        // 2^MODULUS_BITS = c, fold the high part back in
        let carry = t.pmul(P::M_CONST);
        let tw = t.0[N - 1];
        t.0[N - 1] &= (1 << P::TOP_BITS) - 1;
        t.0[0] += P::M_CONST * ((tw >> P::TOP_BITS) + (carry << (B - P::TOP_BITS)));

        b.add(&t);
        b.norm();
        b
    }

    #[inline]
    fn to_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        *a
    }

    #[inline]
    fn from_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        *a
    }
}

impl<const N: usize, const B: u32> ModularReduction<N, B> for GeneralisedMersenne {
    const REDUCED_EXCESS: Chunk = 2;

    fn reduce<P: FpParameters<N, B>>(d: &DoubleBigInteger<N, B>) -> BigInteger<N, B> {
        let n = P::MODULUS_BITS;
        let half = n / 2;

        // 2^n = 2^half + 1
        let (t, b) = d.split(n);
        let mut r = t;
        r.add(&b);

        let mut shifted = DoubleBigInteger::from_single(&t);
        shifted.muln(half);
        let (mut t, b) = shifted.split(n);
        r.add(&t);
        r.add(&b);
        r.norm();
        t.muln(half);
        r.add(&t);
        r.norm();

        let carry = r.0[N - 1] >> P::TOP_BITS;
        r.0[N - 1] &= (1 << P::TOP_BITS) - 1;
        r.0[0] += carry;
        // the carry lands on bit `half`, which may straddle two limbs
        let k = (half / B) as usize;
        let s = half % B;
        r.0[k] += (carry << s) & BigInteger::<N, B>::BMASK;
        r.0[k + 1] += carry >> (B - s);
        r.norm();
        r
    }

    #[inline]
    fn to_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        *a
    }

    #[inline]
    fn from_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        *a
    }
}

impl<const N: usize, const B: u32> ModularReduction<N, B> for MontgomeryFriendly {
    const REDUCED_EXCESS: Chunk = 2;

    fn reduce<P: FpParameters<N, B>>(d: &DoubleBigInteger<N, B>) -> BigInteger<N, B> {
        let mut d = *d;
        let w = d.limbs_mut();
        // The multiplier for limb i is the limb itself. Adding it times p clears limb i
        // and adds it times c at limb N + i - 1.
        for i in 0..N {
            let t = (w[i] as DChunk) * (P::M_CONST as DChunk) + w[N + i - 1] as DChunk;
            w[N + i - 1] = (t as Chunk) & BigInteger::<N, B>::BMASK;
            w[N + i] += (t >> B) as Chunk;
        }
        let mut r = d.upper();
        r.norm();
        r
    }

    #[inline]
    fn to_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        montgomery_to_residue::<P, N, B>(a)
    }

    #[inline]
    fn from_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        Self::reduce::<P>(&DoubleBigInteger::from_single(a))
    }
}

impl<const N: usize, const B: u32> ModularReduction<N, B> for NotSpecial {
    const REDUCED_EXCESS: Chunk = 2;

    fn reduce<P: FpParameters<N, B>>(d: &DoubleBigInteger<N, B>) -> BigInteger<N, B> {
        let mask = BigInteger::<N, B>::BMASK;
        let md = &P::MODULUS.0;
        let w = d.limbs();
        let mut v = [0 as Chunk; N];
        let mut r = BigInteger::<N, B>::zero();

        let mut t = w[0] as DChunk;
        v[0] = (t as Chunk).wrapping_mul(P::M_CONST) & mask;
        t += (v[0] as DChunk) * (md[0] as DChunk);
        let mut c = (t >> B) + w[1] as DChunk;

        for k in 1..N {
            let mut t = c;
            for i in 0..k {
                t += (v[i] as DChunk) * (md[k - i] as DChunk);
            }
            v[k] = (t as Chunk).wrapping_mul(P::M_CONST) & mask;
            t += (v[k] as DChunk) * (md[0] as DChunk);
            c = (t >> B) + w[k + 1] as DChunk;
        }

        for k in N..2 * N - 1 {
            let mut t = c;
            for i in k + 1 - N..N {
                t += (v[i] as DChunk) * (md[k - i] as DChunk);
            }
            r.0[k - N] = (t as Chunk) & mask;
            c = (t >> B) + w[k + 1] as DChunk;
        }
        r.0[N - 1] = c as Chunk;
        r.norm();
        r
    }

    #[inline]
    fn to_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        montgomery_to_residue::<P, N, B>(a)
    }

    #[inline]
    fn from_residue<P: FpParameters<N, B>>(a: &BigInteger<N, B>) -> BigInteger<N, B> {
        Self::reduce::<P>(&DoubleBigInteger::from_single(a))
    }
}

/// `a * 2^(N * B) mod p`, by shifting into the high half and dividing.
fn montgomery_to_residue<P: FpParameters<N, B>, const N: usize, const B: u32>(
    a: &BigInteger<N, B>,
) -> BigInteger<N, B> {
    let mut d = DoubleBigInteger::from_single(a);
    d.muln(N as u32 * B);
    d.dmod(&P::MODULUS)
}
