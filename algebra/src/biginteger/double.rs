use super::{
    cmove_limbs, comp_limbs, fshl_limbs, fshr_limbs, norm_limbs, shl_limbs, shr_limbs, BigInteger,
    Chunk,
};
use std::cmp::Ordering;

/// Double length accumulator for products, `2N` limbs in radix `2^B`.
///
/// Stored as two halves so the length stays expressible without generic const
/// expressions. `limbs()` views them as one little-endian sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DoubleBigInteger<const N: usize, const B: u32>(pub [[Chunk; N]; 2]);

impl<const N: usize, const B: u32> DoubleBigInteger<N, B> {
    #[inline]
    pub fn zero() -> Self {
        Self([[0; N]; 2])
    }

    /// Widens `a`, moving the excess bits of its top limb into the next one.
    pub fn from_single(a: &BigInteger<N, B>) -> Self {
        let mut r = Self::zero();
        r.0[0] = a.0;
        r.0[0][N - 1] = a.0[N - 1] & BigInteger::<N, B>::BMASK;
        r.0[1][0] = a.0[N - 1] >> B;
        r
    }

    #[inline]
    pub fn limbs(&self) -> &[Chunk] {
        self.0.as_flattened()
    }

    #[inline]
    pub fn limbs_mut(&mut self) -> &mut [Chunk] {
        self.0.as_flattened_mut()
    }

    #[inline]
    pub fn norm(&mut self) {
        norm_limbs::<B>(self.limbs_mut());
    }

    #[inline]
    pub fn sub(&mut self, other: &Self) {
        for (a, b) in self.limbs_mut().iter_mut().zip(other.limbs().iter()) {
            *a -= b;
        }
    }

    #[inline]
    pub fn comp(&self, other: &Self) -> Ordering {
        comp_limbs(self.limbs(), other.limbs())
    }

    #[inline]
    pub fn cmove(&mut self, other: &Self, d: bool) {
        cmove_limbs(self.limbs_mut(), other.limbs(), d);
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0[1][N - 1] < 0
    }

    #[inline]
    pub fn fshl(&mut self, n: u32) {
        fshl_limbs::<B>(self.limbs_mut(), n);
    }

    #[inline]
    pub fn fshr(&mut self, n: u32) {
        fshr_limbs::<B>(self.limbs_mut(), n);
    }

    /// Shift left by `k` bits.
    #[inline]
    pub fn muln(&mut self, k: u32) {
        shl_limbs::<B>(self.limbs_mut(), k);
    }

    /// Shift right by `k` bits.
    #[inline]
    pub fn divn(&mut self, k: u32) {
        shr_limbs::<B>(self.limbs_mut(), k);
    }

    /// Splits the normalised value at bit `n`, which must fall inside the low half,
    /// into `(self >> n, self mod 2^n)`. The quotient must fit in `N` limbs.
    pub fn split(&self, n: u32) -> (BigInteger<N, B>, BigInteger<N, B>) {
        let d = self.limbs();
        let mask = BigInteger::<N, B>::BMASK;
        let q = (n / B) as usize;
        let m = n % B;
        debug_assert!(q < N);

        let mut low = BigInteger::zero();
        low.0[..q].copy_from_slice(&d[..q]);
        low.0[q] = d[q] & ((1 << m) - 1);

        let mut high = BigInteger::zero();
        for j in 0..N {
            let lo = d.get(q + j).copied().unwrap_or(0) >> m;
            let hi = d.get(q + j + 1).copied().unwrap_or(0) << (B - m);
            high.0[j] = if j == N - 1 { lo | hi } else { lo | (hi & mask) };
        }
        (high, low)
    }

    /// The low `N` limbs.
    #[inline]
    pub fn lower(&self) -> BigInteger<N, B> {
        BigInteger(self.0[0])
    }

    /// The high `N` limbs.
    #[inline]
    pub fn upper(&self) -> BigInteger<N, B> {
        BigInteger(self.0[1])
    }

    /// `self mod m` by binary long division.
    pub fn dmod(&self, m: &BigInteger<N, B>) -> BigInteger<N, B> {
        let mut b = *self;
        b.norm();
        let mut m = Self::from_single(m);
        if b.comp(&m) == Ordering::Less {
            return b.lower();
        }
        let mut k = 0;
        loop {
            m.fshl(1);
            k += 1;
            if b.comp(&m) == Ordering::Less {
                break;
            }
        }
        while k > 0 {
            m.fshr(1);
            let mut r = b;
            r.sub(&m);
            r.norm();
            b.cmove(&r, !r.is_negative());
            k -= 1;
        }
        b.lower()
    }
}

impl<const N: usize, const B: u32> Default for DoubleBigInteger<N, B> {
    fn default() -> Self {
        Self::zero()
    }
}
