//! Fixed-width big integers in a reduced radix.
//!
//! A `BigInteger<N, B>` stores `N` signed 64-bit limbs, each holding `B < 63` bits once
//! normalised. The spare high bits of every limb absorb carries between normalisations,
//! and the top limb is never masked, so it can carry the excess of an unreduced field
//! element. Products land in a `DoubleBigInteger` with twice as many limbs.
//!
//! Limbs are signed: subtraction may leave negative limbs behind, which `norm` resolves
//! with arithmetic shifts. Comparisons and bit queries expect normalised inputs.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

pub mod double;
pub use self::double::*;

#[cfg(test)]
mod tests;

pub type Chunk = i64;
pub type DChunk = i128;

/// 5 limbs of 56 bits, room for moduli up to 280 bits.
pub type BigInteger256 = BigInteger<5, 56>;

/// 7 limbs of 58 bits, room for moduli up to 406 bits.
pub type BigInteger384 = BigInteger<7, 58>;

/// 8 limbs of 58 bits, room for moduli up to 464 bits.
pub type BigInteger448 = BigInteger<8, 58>;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger<const N: usize, const B: u32>(pub [Chunk; N]);

impl<const N: usize, const B: u32> BigInteger<N, B> {
    /// Mask of the bits of a normalised limb.
    pub const BMASK: Chunk = (1 << B) - 1;

    /// Largest small multiplier for which a limb-wise product cannot overflow a limb.
    pub const NEXCESS: Chunk = 1 << (Chunk::BITS - 1 - B);

    #[inline]
    pub fn zero() -> Self {
        Self([0; N])
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn from_u64(mut v: u64) -> Self {
        let mut r = Self::zero();
        for limb in r.0.iter_mut() {
            *limb = (v & (Self::BMASK as u64)) as Chunk;
            v >>= B;
        }
        r
    }

    /// Propagates carries so that every limb but the top one lies in `[0, 2^B)`.
    #[inline]
    pub fn norm(&mut self) {
        norm_limbs::<B>(&mut self.0);
    }

    /// Limb-wise addition, no carries.
    #[inline]
    pub fn add(&mut self, other: &Self) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a += b;
        }
    }

    /// Limb-wise subtraction, no borrows.
    #[inline]
    pub fn sub(&mut self, other: &Self) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a -= b;
        }
    }

    pub fn inc(&mut self, n: Chunk) {
        self.0[0] += n;
        self.norm();
    }

    pub fn dec(&mut self, n: Chunk) {
        self.0[0] -= n;
        self.norm();
    }

    /// Limb-wise multiplication by a small constant. `c` must stay below `NEXCESS`.
    #[inline]
    pub fn imul(&mut self, c: Chunk) {
        debug_assert!(c.abs() < Self::NEXCESS);
        for a in self.0.iter_mut() {
            *a *= c;
        }
    }

    /// Normalising multiplication by a constant. Every limb, the top one included, is
    /// masked to `B` bits and whatever overflows the top limb is returned.
    pub fn pmul(&mut self, c: Chunk) -> Chunk {
        self.norm();
        let mut carry: DChunk = 0;
        for a in self.0.iter_mut() {
            let t = (*a as DChunk) * (c as DChunk) + carry;
            *a = (t as Chunk) & Self::BMASK;
            carry = t >> B;
        }
        carry as Chunk
    }

    /// Exact product with a constant, widened to double length.
    pub fn pxmul(&self, c: Chunk) -> DoubleBigInteger<N, B> {
        let mut a = *self;
        a.norm();
        let mut r = DoubleBigInteger::zero();
        let w = r.limbs_mut();
        let mut carry: DChunk = 0;
        for i in 0..N {
            let t = (a.0[i] as DChunk) * (c as DChunk) + carry;
            w[i] = (t as Chunk) & Self::BMASK;
            carry = t >> B;
        }
        w[N] = carry as Chunk;
        r
    }

    /// Comba multiplication: column sums are accumulated in 128 bits before splitting.
    pub fn mul(&self, other: &Self) -> DoubleBigInteger<N, B> {
        let mut r = DoubleBigInteger::zero();
        let w = r.limbs_mut();
        let mut carry: DChunk = 0;
        for k in 0..2 * N - 1 {
            let mut t = carry;
            for i in k.saturating_sub(N - 1)..=k.min(N - 1) {
                t += (self.0[i] as DChunk) * (other.0[k - i] as DChunk);
            }
            w[k] = (t as Chunk) & Self::BMASK;
            carry = t >> B;
        }
        w[2 * N - 1] = carry as Chunk;
        r
    }

    /// Squaring, doubling the cross products of each column.
    pub fn square(&self) -> DoubleBigInteger<N, B> {
        let mut r = DoubleBigInteger::zero();
        let w = r.limbs_mut();
        let mut carry: DChunk = 0;
        for k in 0..2 * N - 1 {
            let mut cross: DChunk = 0;
            let lo = k.saturating_sub(N - 1);
            let mut i = lo;
            while 2 * i < k {
                cross += (self.0[i] as DChunk) * (self.0[k - i] as DChunk);
                i += 1;
            }
            let mut t = carry + 2 * cross;
            if k % 2 == 0 {
                let h = self.0[k / 2] as DChunk;
                t += h * h;
            }
            w[k] = (t as Chunk) & Self::BMASK;
            carry = t >> B;
        }
        w[2 * N - 1] = carry as Chunk;
        r
    }

    /// Three-way comparison of normalised values.
    #[inline]
    pub fn comp(&self, other: &Self) -> Ordering {
        comp_limbs(&self.0, &other.0)
    }

    /// Replaces `self` by `other` if `d` holds, without branching on the limbs.
    #[inline]
    pub fn cmove(&mut self, other: &Self, d: bool) {
        cmove_limbs(&mut self.0, &other.0, d);
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0[N - 1] < 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        (self.0[i / B as usize] >> (i % B as usize)) & 1 == 1
    }

    /// The lowest `n` bits.
    #[inline]
    pub fn last_bits(&self, n: u32) -> Chunk {
        let mut a = *self;
        a.norm();
        a.0[0] & ((1 << n) - 1)
    }

    pub fn num_bits(&self) -> u32 {
        let mut a = *self;
        a.norm();
        match a.0.iter().rposition(|&l| l != 0) {
            Some(k) => k as u32 * B + (Chunk::BITS - a.0[k].leading_zeros()),
            None => 0,
        }
    }

    /// Shift left by fewer than `B` bits.
    #[inline]
    pub fn fshl(&mut self, n: u32) {
        fshl_limbs::<B>(&mut self.0, n);
    }

    /// Shift right by fewer than `B` bits.
    #[inline]
    pub fn fshr(&mut self, n: u32) {
        fshr_limbs::<B>(&mut self.0, n);
    }

    #[inline]
    pub fn mul2(&mut self) {
        self.fshl(1);
    }

    #[inline]
    pub fn div2(&mut self) {
        self.fshr(1);
    }

    /// Shift left by `k` bits.
    #[inline]
    pub fn muln(&mut self, k: u32) {
        shl_limbs::<B>(&mut self.0, k);
    }

    /// Shift right by `k` bits.
    #[inline]
    pub fn divn(&mut self, k: u32) {
        shr_limbs::<B>(&mut self.0, k);
    }

    /// `self mod m` by binary long division.
    pub fn mod_by(&mut self, m: &Self) {
        self.norm();
        if self.comp(m) == Ordering::Less {
            return;
        }
        let mut m = *m;
        let mut k = 0;
        loop {
            m.fshl(1);
            k += 1;
            if self.comp(&m) == Ordering::Less {
                break;
            }
        }
        while k > 0 {
            m.fshr(1);
            let mut r = *self;
            r.sub(&m);
            r.norm();
            self.cmove(&r, !r.is_negative());
            k -= 1;
        }
    }

    /// Inverse of `self` modulo the odd prime `p` by the binary extended Euclidean
    /// algorithm. `self` must not be divisible by `p`.
    pub fn invmodp(&self, p: &Self) -> Self {
        let one = Self::one();
        let mut u = *self;
        u.mod_by(p);
        debug_assert!(!u.is_zero());
        let mut v = *p;
        let mut x1 = one;
        let mut x2 = Self::zero();

        while u != one && v != one {
            while u.is_even() {
                u.div2();
                if x1.is_odd() {
                    x1.add(p);
                    x1.norm();
                }
                x1.div2();
            }
            while v.is_even() {
                v.div2();
                if x2.is_odd() {
                    x2.add(p);
                    x2.norm();
                }
                x2.div2();
            }
            if u.comp(&v) != Ordering::Less {
                u.sub(&v);
                u.norm();
                if x1.comp(&x2) != Ordering::Less {
                    x1.sub(&x2);
                } else {
                    let mut t = *p;
                    t.sub(&x2);
                    x1.add(&t);
                }
                x1.norm();
            } else {
                v.sub(&u);
                v.norm();
                if x2.comp(&x1) != Ordering::Less {
                    x2.sub(&x1);
                } else {
                    let mut t = *p;
                    t.sub(&x1);
                    x2.add(&t);
                }
                x2.norm();
            }
        }
        if u == one {
            x1
        } else {
            x2
        }
    }

    /// Jacobi symbol `(self / p)` for odd `p > 1`, and 0 when undefined.
    pub fn jacobi(&self, p: &Self) -> i32 {
        let one = Self::one();
        let zero = Self::zero();
        if p.is_even() || self.is_zero() || p.comp(&one) != Ordering::Greater {
            return 0;
        }
        let mut x = *self;
        x.mod_by(p);
        let mut n = *p;
        let mut m = 0;
        while n.comp(&one) == Ordering::Greater {
            if x == zero {
                return 0;
            }
            let n8 = n.last_bits(3);
            let mut k = 0;
            while x.is_even() {
                k += 1;
                x.div2();
            }
            if k % 2 == 1 {
                m += (n8 * n8 - 1) / 8;
            }
            m += (n8 - 1) * (x.last_bits(2) - 1) / 4;
            let mut t = n;
            t.mod_by(&x);
            n = x;
            x = t;
            m %= 2;
        }
        if m == 0 {
            1
        } else {
            -1
        }
    }

    /// Uniform sample in `[0, m)`. Twice the bit length of `m` is drawn and reduced, so
    /// the bias is negligible.
    pub fn random_below<R: Rng + ?Sized>(m: &Self, rng: &mut R) -> Self {
        let mut d = DoubleBigInteger::<N, B>::zero();
        let mut remaining = 2 * m.num_bits();
        for limb in d.limbs_mut().iter_mut() {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(B);
            *limb = (rng.gen::<u64>() >> (u64::BITS - take)) as Chunk;
            remaining -= take;
        }
        d.dmod(m)
    }

    /// Big-endian encoding of the normalised value into `out`, most significant bytes
    /// dropped when `out` is short.
    pub fn write_bytes(&self, out: &mut [u8]) {
        let mut c = *self;
        c.norm();
        for byte in out.iter_mut().rev() {
            *byte = (c.0[0] & 0xff) as u8;
            c.fshr(8);
        }
    }

    pub fn to_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.write_bytes(&mut out);
        out
    }

    /// Reads a big-endian value. The input must fit in `N * B` bits.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut r = Self::zero();
        for &byte in bytes {
            r.fshl(8);
            r.0[0] += byte as Chunk;
        }
        r
    }
}

impl<const N: usize, const B: u32> Default for BigInteger<N, B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, const B: u32> Ord for BigInteger<N, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comp(other)
    }
}

impl<const N: usize, const B: u32> PartialOrd for BigInteger<N, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize, const B: u32> Debug for BigInteger<N, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "BigInteger(")?;
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:#x}", l)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize, const B: u32> Display for BigInteger<N, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let bytes = self.to_bytes((N * B as usize + 7) / 8);
        for b in bytes {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize, const B: u32> Distribution<BigInteger<N, B>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInteger<N, B> {
        let mut r = BigInteger::zero();
        for limb in r.0.iter_mut() {
            *limb = (rng.gen::<u64>() >> (u64::BITS - B)) as Chunk;
        }
        r
    }
}

// Limb kernels shared by the single and double length integers.

pub(crate) fn norm_limbs<const B: u32>(a: &mut [Chunk]) {
    let mask: Chunk = (1 << B) - 1;
    let top = a.len() - 1;
    let mut carry = 0;
    for limb in a[..top].iter_mut() {
        let d = *limb + carry;
        *limb = d & mask;
        carry = d >> B;
    }
    a[top] += carry;
}

pub(crate) fn comp_limbs(a: &[Chunk], b: &[Chunk]) -> Ordering {
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

pub(crate) fn cmove_limbs(a: &mut [Chunk], b: &[Chunk], d: bool) {
    let mask = -(d as Chunk);
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x ^= (*x ^ y) & mask;
    }
}

pub(crate) fn fshl_limbs<const B: u32>(a: &mut [Chunk], n: u32) {
    debug_assert!(n < B);
    let mask: Chunk = (1 << B) - 1;
    let top = a.len() - 1;
    a[top] = (a[top] << n) | (a[top - 1] >> (B - n));
    for i in (1..top).rev() {
        a[i] = ((a[i] << n) & mask) | (a[i - 1] >> (B - n));
    }
    a[0] = (a[0] << n) & mask;
}

pub(crate) fn fshr_limbs<const B: u32>(a: &mut [Chunk], n: u32) {
    debug_assert!(n < B);
    let mask: Chunk = (1 << B) - 1;
    let top = a.len() - 1;
    for i in 0..top {
        a[i] = (a[i] >> n) | ((a[i + 1] << (B - n)) & mask);
    }
    a[top] >>= n;
}

pub(crate) fn shl_limbs<const B: u32>(a: &mut [Chunk], k: u32) {
    let mask: Chunk = (1 << B) - 1;
    let len = a.len();
    let n = k % B;
    let m = (k / B) as usize;
    if m >= len {
        a.iter_mut().for_each(|l| *l = 0);
        return;
    }
    let top = len - 1;
    let mut high = a[top - m] << n;
    if top >= m + 1 {
        high |= a[top - m - 1] >> (B - n);
    }
    for i in (m + 1..top).rev() {
        a[i] = ((a[i - m] << n) & mask) | (a[i - m - 1] >> (B - n));
    }
    if m < top {
        a[m] = (a[0] << n) & mask;
    }
    a[top] = high;
    a[..m].iter_mut().for_each(|l| *l = 0);
}

pub(crate) fn shr_limbs<const B: u32>(a: &mut [Chunk], k: u32) {
    let mask: Chunk = (1 << B) - 1;
    let len = a.len();
    let n = k % B;
    let m = (k / B) as usize;
    if m >= len {
        a.iter_mut().for_each(|l| *l = 0);
        return;
    }
    let top = len - 1;
    for i in 0..top - m {
        a[i] = (a[m + i] >> n) | ((a[m + i + 1] << (B - n)) & mask);
    }
    a[top - m] = a[top] >> n;
    a[top - m + 1..].iter_mut().for_each(|l| *l = 0);
}
