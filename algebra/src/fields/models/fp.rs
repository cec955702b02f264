use log::trace;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    biginteger::{BigInteger, Chunk},
    fields::{FieldOp, FpParameters, ModularReduction, ReductionObserver, ReductionStats},
};

/// An element of the prime field described by `P`.
///
/// The value is held in residue form together with its excess `xes`, a bound such that
/// `value < xes * p`. Every operation keeps `xes <= P::FEXCESS` and the product of the
/// excesses of two factors below the same ceiling, forcing a full reduction whenever an
/// operation would step over it. Limbs are always left normalised.
pub struct Fp<P, const N: usize, const B: u32> {
    value: BigInteger<N, B>,
    xes: Chunk,
    _parameters: PhantomData<P>,
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Fp<P, N, B> {
    #[inline]
    fn from_parts(value: BigInteger<N, B>, xes: Chunk) -> Self {
        Self {
            value,
            xes,
            _parameters: PhantomData,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(BigInteger::zero(), 1)
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_big(&BigInteger::one())
    }

    /// The element congruent to the plain value `a`.
    pub fn from_big(a: &BigInteger<N, B>) -> Self {
        let mut a = *a;
        a.mod_by(&P::MODULUS);
        Self::from_parts(P::Reduction::to_residue::<P>(&a), 1)
    }

    /// The plain value in `[0, p)`.
    pub fn into_big(&self) -> BigInteger<N, B> {
        let mut r = P::Reduction::from_residue::<P>(&self.value);
        r.mod_by(&P::MODULUS);
        r
    }

    #[inline]
    pub fn from_u64(v: u64) -> Self {
        Self::from_big(&BigInteger::from_u64(v))
    }

    /// Reads a big-endian encoding of `MODULUS_BYTES` bytes, rejecting values not below
    /// the modulus.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != P::MODULUS_BYTES {
            return None;
        }
        let a = BigInteger::from_bytes(bytes);
        if a >= P::MODULUS {
            return None;
        }
        Some(Self::from_big(&a))
    }

    /// Reads a big-endian integer of at most `MODULUS_BYTES` bytes and reduces it.
    pub fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::from_big(&BigInteger::from_bytes(bytes))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.into_big().to_bytes(P::MODULUS_BYTES)
    }

    /// Current excess bound, 1 for a fully reduced element.
    #[inline]
    pub fn excess(&self) -> Chunk {
        self.xes
    }

    /// Fully reduces the residue.
    #[inline]
    pub fn reduce(&mut self) {
        self.value.mod_by(&P::MODULUS);
        self.xes = 1;
    }

    #[inline]
    fn reduced(&self) -> BigInteger<N, B> {
        let mut v = self.value;
        v.mod_by(&P::MODULUS);
        v
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.reduced().is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Parity of the plain value.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.into_big().is_odd()
    }

    pub(crate) fn add_with<O: ReductionObserver>(&self, other: &Self, observer: &mut O) -> Self {
        let mut value = self.value;
        value.add(&other.value);
        value.norm();
        let mut r = Self::from_parts(value, self.xes + other.xes);
        let forced = r.xes > P::FEXCESS;
        if forced {
            trace!("sum too large, reducing: excess {}", r.xes);
            r.reduce();
        }
        observer.observe(FieldOp::Add, forced);
        r
    }

    pub(crate) fn neg_with<O: ReductionObserver>(&self, observer: &mut O) -> Self {
        // smallest power of two k with k >= xes, so that k * p - a is not negative
        let sb = Chunk::BITS - (self.xes - 1).leading_zeros();
        let mut value = P::MODULUS;
        value.fshl(sb);
        value.sub(&self.value);
        value.norm();
        let mut r = Self::from_parts(value, (1 << sb) + 1);
        let forced = r.xes > P::FEXCESS;
        if forced {
            trace!("negation too large, reducing: excess {}", r.xes);
            r.reduce();
        }
        observer.observe(FieldOp::Neg, forced);
        r
    }

    pub(crate) fn sub_with<O: ReductionObserver>(&self, other: &Self, observer: &mut O) -> Self {
        let n = other.neg_with(observer);
        self.add_with(&n, observer)
    }

    pub(crate) fn mul_with<O: ReductionObserver>(&self, other: &Self, observer: &mut O) -> Self {
        let mut a = *self;
        let forced = a.xes * other.xes > P::FEXCESS;
        if forced {
            trace!("product too large, reducing: excess {} * {}", a.xes, other.xes);
            a.reduce();
        }
        observer.observe(FieldOp::Mul, forced);
        let d = a.value.mul(&other.value);
        Self::from_parts(P::Reduction::reduce::<P>(&d), P::Reduction::REDUCED_EXCESS)
    }

    pub(crate) fn square_with<O: ReductionObserver>(&self, observer: &mut O) -> Self {
        let mut a = *self;
        let forced = a.xes * a.xes > P::FEXCESS;
        if forced {
            trace!("square too large, reducing: excess {}", a.xes);
            a.reduce();
        }
        observer.observe(FieldOp::Square, forced);
        let d = a.value.square();
        Self::from_parts(P::Reduction::reduce::<P>(&d), P::Reduction::REDUCED_EXCESS)
    }

    #[inline]
    pub fn double(&self) -> Self {
        self.add_with(self, &mut ())
    }

    #[inline]
    pub fn square(&self) -> Self {
        self.square_with(&mut ())
    }

    /// Multiplication by a small signed integer.
    pub fn imul(&self, c: i32) -> Self {
        let k = c.unsigned_abs() as Chunk;
        let xes = self.xes * k;
        let r = if k < BigInteger::<N, B>::NEXCESS && xes <= P::FEXCESS {
            let mut value = self.value;
            value.imul(k);
            value.norm();
            Self::from_parts(value, xes.max(1))
        } else if xes <= P::FEXCESS {
            let mut value = self.value;
            value.pmul(k);
            Self::from_parts(value, xes)
        } else {
            trace!("scaled value too large, reducing: excess {} * {}", self.xes, k);
            Self::from_parts(self.value.pxmul(k).dmod(&P::MODULUS), 1)
        };
        if c < 0 {
            -r
        } else {
            r
        }
    }

    /// Halves the element: odd residues get the modulus added before the shift.
    pub fn div2(&self) -> Self {
        let mut value = self.value;
        if value.is_odd() {
            value.add(&P::MODULUS);
            value.norm();
        }
        value.div2();
        Self::from_parts(value, self.xes)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(Self::from_big(&self.into_big().invmodp(&P::MODULUS)))
    }

    /// `self^e` by square and multiply, scanning `e` from its least significant bit.
    /// The running time depends on `e`.
    pub fn pow(&self, e: &BigInteger<N, B>) -> Self {
        let mut e = *e;
        e.norm();
        let mut w = *self;
        let mut r = Self::one();
        loop {
            let bit = e.is_odd();
            e.div2();
            if bit {
                r *= w;
            }
            if e.is_zero() {
                break;
            }
            w = w.square();
        }
        r.reduce();
        r
    }

    /// Whether the element is a non-zero square, by the Jacobi symbol.
    #[inline]
    pub fn is_qr(&self) -> bool {
        self.into_big().jacobi(&P::MODULUS) == 1
    }

    /// A square root, `None` for a non-residue.
    ///
    /// # Panics
    ///
    /// If the modulus is 1 mod 8, which none of the supported parameter sets is.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        if !self.is_qr() {
            return None;
        }
        let r = match P::MOD8 {
            5 => {
                // Atkin: v = (2a)^((p - 5) / 8), i = 2a v^2, r = a v (i - 1)
                let mut e = P::MODULUS;
                e.dec(5);
                e.fshr(3);
                let i = self.double();
                let v = i.pow(&e);
                let i = i * v * v;
                *self * v * (i - Self::one())
            }
            3 | 7 => {
                let mut e = P::MODULUS;
                e.inc(1);
                e.fshr(2);
                self.pow(&e)
            }
            _ => panic!("square roots are only available for moduli 3, 5 or 7 mod 8"),
        };
        Some(r)
    }

    /// Operations that report their reductions to `stats`.
    #[inline]
    pub fn counted(stats: &mut ReductionStats) -> CountedOps<'_, P, N, B> {
        CountedOps {
            stats,
            _parameters: PhantomData,
        }
    }
}

/// Field operations tallied into borrowed [`ReductionStats`].
pub struct CountedOps<'a, P, const N: usize, const B: u32> {
    stats: &'a mut ReductionStats,
    _parameters: PhantomData<P>,
}

impl<'a, P: FpParameters<N, B>, const N: usize, const B: u32> CountedOps<'a, P, N, B> {
    pub fn add(&mut self, a: &Fp<P, N, B>, b: &Fp<P, N, B>) -> Fp<P, N, B> {
        a.add_with(b, &mut *self.stats)
    }

    pub fn sub(&mut self, a: &Fp<P, N, B>, b: &Fp<P, N, B>) -> Fp<P, N, B> {
        a.sub_with(b, &mut *self.stats)
    }

    pub fn neg(&mut self, a: &Fp<P, N, B>) -> Fp<P, N, B> {
        a.neg_with(&mut *self.stats)
    }

    pub fn mul(&mut self, a: &Fp<P, N, B>, b: &Fp<P, N, B>) -> Fp<P, N, B> {
        a.mul_with(b, &mut *self.stats)
    }

    pub fn square(&mut self, a: &Fp<P, N, B>) -> Fp<P, N, B> {
        a.square_with(&mut *self.stats)
    }
}

impl<P, const N: usize, const B: u32> Copy for Fp<P, N, B> {}

impl<P, const N: usize, const B: u32> Clone for Fp<P, N, B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> PartialEq for Fp<P, N, B> {
    fn eq(&self, other: &Self) -> bool {
        self.reduced() == other.reduced()
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Eq for Fp<P, N, B> {}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Default for Fp<P, N, B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Debug for Fp<P, N, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({}, xes = {})", self.into_big(), self.xes)
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Display for Fp<P, N, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_big())
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Distribution<Fp<P, N, B>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P, N, B> {
        Fp::from_big(&BigInteger::random_below(&P::MODULUS, rng))
    }
}

impl<P: FpParameters<N, B>, const N: usize, const B: u32> Neg for Fp<P, N, B> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.neg_with(&mut ())
    }
}

macro_rules! impl_fp_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $with:ident) => {
        impl<P: FpParameters<N, B>, const N: usize, const B: u32> $trait for Fp<P, N, B> {
            type Output = Self;

            #[inline]
            fn $method(self, other: Self) -> Self {
                self.$with(&other, &mut ())
            }
        }

        impl<'a, P: FpParameters<N, B>, const N: usize, const B: u32> $trait<&'a Fp<P, N, B>>
            for Fp<P, N, B>
        {
            type Output = Self;

            #[inline]
            fn $method(self, other: &'a Fp<P, N, B>) -> Self {
                self.$with(other, &mut ())
            }
        }

        impl<P: FpParameters<N, B>, const N: usize, const B: u32> $assign_trait for Fp<P, N, B> {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                *self = self.$with(&other, &mut ());
            }
        }

        impl<'a, P: FpParameters<N, B>, const N: usize, const B: u32> $assign_trait<&'a Fp<P, N, B>>
            for Fp<P, N, B>
        {
            #[inline]
            fn $assign_method(&mut self, other: &'a Fp<P, N, B>) {
                *self = self.$with(other, &mut ());
            }
        }
    };
}

impl_fp_op!(Add, add, AddAssign, add_assign, add_with);
impl_fp_op!(Sub, sub, SubAssign, sub_assign, sub_with);
impl_fp_op!(Mul, mul, MulAssign, mul_assign, mul_with);
