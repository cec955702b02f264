use crate::{
    biginteger::BigInteger,
    fields::{Fp, FpParameters, ReductionStats},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub(crate) const ITERATIONS: usize = 100;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn test_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(1231275789u64)
}

/// Decodes a big-endian hex vector of `MODULUS_BYTES` bytes.
pub(crate) fn fe<P: FpParameters<N, B>, const N: usize, const B: u32>(s: &str) -> Fp<P, N, B> {
    Fp::from_bytes(&hex::decode(s).unwrap()).unwrap()
}

pub(crate) fn to_hex<P: FpParameters<N, B>, const N: usize, const B: u32>(
    a: &Fp<P, N, B>,
) -> String {
    hex::encode(a.to_bytes())
}

fn random_element<P: FpParameters<N, B>, const N: usize, const B: u32, R: Rng>(
    rng: &mut R,
) -> Fp<P, N, B> {
    rng.gen()
}

pub(crate) fn field_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    init_logger();
    let mut rng = test_rng();
    let zero = Fp::<P, N, B>::zero();
    let one = Fp::<P, N, B>::one();
    assert!(zero.is_zero());
    assert!(one.is_one());
    assert_eq!(zero + one, one);
    assert_eq!(one * one, one);
    assert_eq!(-zero, zero);

    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);
        let b: Fp<P, N, B> = random_element(&mut rng);
        let c: Fp<P, N, B> = random_element(&mut rng);

        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a + zero, a);
        assert_eq!(a * zero, zero);
        assert_eq!(a * one, a);

        assert!((a + -a).is_zero());
        assert_eq!(-(-a), a);
        assert_eq!(a - b, -(b - a));
        assert_eq!((a - b) + b, a);
        assert_eq!(a.double(), a + a);
        assert_eq!(a.square(), a * a);

        let mut d = a;
        d += b;
        d -= c;
        d *= a;
        assert_eq!(d, (a + b - c) * a);
    }
}

pub(crate) fn inverse_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    assert!(Fp::<P, N, B>::zero().inverse().is_none());
    assert_eq!(Fp::<P, N, B>::one().inverse(), Some(Fp::one()));
    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);
        if a.is_zero() {
            continue;
        }
        let inv = a.inverse().unwrap();
        assert!((a * inv).is_one());
        assert_eq!(inv.inverse().unwrap(), a);
    }
}

pub(crate) fn small_ops_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);

        assert_eq!(a.div2().double(), a);

        let mut acc = Fp::zero();
        for k in 0..40i32 {
            assert_eq!(a.imul(k), acc);
            assert_eq!(a.imul(-k), -acc);
            acc += a;
        }
        // scalars large enough to take the widening path
        let k = i32::MAX;
        assert_eq!(a.imul(k), a * Fp::from_u64(k as u64));
        assert_eq!(a.imul(-k), -(a * Fp::from_u64(k as u64)));

        let mut acc = Fp::one();
        for e in 0..20u64 {
            assert_eq!(a.pow(&BigInteger::from_u64(e)), acc);
            acc *= a;
        }
    }
}

pub(crate) fn fermat_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    let mut e = P::MODULUS;
    e.dec(1);
    for _ in 0..10 {
        let a: Fp<P, N, B> = random_element(&mut rng);
        if a.is_zero() {
            continue;
        }
        assert!(a.pow(&e).is_one());
        assert_eq!(a.pow(&P::MODULUS), a);
    }
}

pub(crate) fn bytes_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), P::MODULUS_BYTES);
        assert_eq!(Fp::<P, N, B>::from_bytes(&bytes), Some(a));
        assert_eq!(Fp::<P, N, B>::from_big(&a.into_big()), a);
        assert!(a.into_big() < P::MODULUS);
    }

    let p = P::MODULUS.to_bytes(P::MODULUS_BYTES);
    assert!(Fp::<P, N, B>::from_bytes(&p).is_none());
    assert!(Fp::<P, N, B>::from_bytes(&p[1..]).is_none());
    assert!(Fp::<P, N, B>::from_bytes_mod_order(&p).is_zero());

    let mut p_plus_one = P::MODULUS;
    p_plus_one.inc(1);
    let a = Fp::<P, N, B>::from_bytes_mod_order(&p_plus_one.to_bytes(P::MODULUS_BYTES));
    assert!(a.is_one());
}

pub(crate) fn sqrt_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    assert_eq!(Fp::<P, N, B>::zero().sqrt(), Some(Fp::zero()));
    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);
        let a2 = a.square();
        let r = a2.sqrt().unwrap();
        assert!(r == a || r == -a);
        assert!(a2.is_qr() || a2.is_zero());

        match a.sqrt() {
            Some(r) => assert_eq!(r.square(), a),
            None => assert!(!a.is_qr()),
        }
    }
}

/// Products of random residues agree with plain multiplication followed by division.
pub(crate) fn reduction_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fp<P, N, B> = random_element(&mut rng);
        let b: Fp<P, N, B> = random_element(&mut rng);
        let expected = a.into_big().mul(&b.into_big()).dmod(&P::MODULUS);
        assert_eq!((a * b).into_big(), expected);
        let expected = a.into_big().square().dmod(&P::MODULUS);
        assert_eq!(a.square().into_big(), expected);
    }
}

/// Long chains of lazy additions and negations keep the excess under its ceiling and
/// still agree with a fully reduced computation.
pub(crate) fn excess_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    init_logger();
    let mut rng = test_rng();
    let mut stats = ReductionStats::default();

    let mut lazy: Fp<P, N, B> = random_element(&mut rng);
    let mut eager = lazy;
    for i in 0..2000 {
        let b: Fp<P, N, B> = random_element(&mut rng);
        let mut ops = Fp::counted(&mut stats);
        lazy = match i % 4 {
            0 => ops.add(&lazy, &lazy),
            1 => ops.sub(&lazy, &b),
            2 => ops.neg(&lazy),
            _ => ops.add(&lazy, &b),
        };
        if i % 50 == 49 {
            lazy = ops.mul(&lazy, &b);
            lazy = ops.square(&lazy);
        }
        assert!(lazy.excess() <= P::FEXCESS);

        eager = match i % 4 {
            0 => eager + eager,
            1 => eager - b,
            2 => -eager,
            _ => eager + b,
        };
        eager.reduce();
        if i % 50 == 49 {
            eager = (eager * b).square();
        }
        assert_eq!(lazy, eager);
    }

    assert_eq!(stats.tadd, 1500);
    assert_eq!(stats.tneg, 1000);
    assert_eq!(stats.tmul, 40);
    assert_eq!(stats.tsqr, 40);
    assert!(stats.radd + stats.rneg > 0);
    assert!(stats.radd <= stats.tadd && stats.rneg <= stats.tneg);
    assert!(stats.rmul <= stats.tmul && stats.rsqr <= stats.tsqr);
}

pub(crate) fn primefield_test<P: FpParameters<N, B>, const N: usize, const B: u32>() {
    field_test::<P, N, B>();
    inverse_test::<P, N, B>();
    small_ops_test::<P, N, B>();
    fermat_test::<P, N, B>();
    bytes_test::<P, N, B>();
    sqrt_test::<P, N, B>();
    reduction_test::<P, N, B>();
    excess_test::<P, N, B>();
}

/// Known answers for a pair of elements `a` and `b`, all big-endian hex.
pub(crate) struct Vectors {
    pub a: &'static str,
    pub b: &'static str,
    pub product: &'static str,
    pub sum: &'static str,
    pub difference: &'static str,
    pub a_inverse: &'static str,
    pub a_times_minus_seven: &'static str,
    pub a_half: &'static str,
    pub a_pow_b: &'static str,
    pub a_squared: &'static str,
    /// The root of `a_squared` other than `a`.
    pub other_root: &'static str,
    pub smallest_non_residue: u64,
}

pub(crate) fn vectors_test<P: FpParameters<N, B>, const N: usize, const B: u32>(v: &Vectors) {
    let a = fe::<P, N, B>(v.a);
    let b = fe::<P, N, B>(v.b);
    assert_eq!(to_hex(&a), v.a);
    assert_eq!(to_hex(&(a * b)), v.product);
    assert_eq!(to_hex(&(a + b)), v.sum);
    assert_eq!(to_hex(&(a - b)), v.difference);
    assert_eq!(to_hex(&a.inverse().unwrap()), v.a_inverse);
    assert_eq!(to_hex(&a.imul(-7)), v.a_times_minus_seven);
    assert_eq!(to_hex(&a.div2()), v.a_half);
    assert_eq!(to_hex(&a.square()), v.a_squared);

    let e = BigInteger::<N, B>::from_bytes(&hex::decode(v.b).unwrap());
    assert_eq!(to_hex(&a.pow(&e)), v.a_pow_b);

    let root = to_hex(&a.square().sqrt().unwrap());
    assert!(root == v.a || root == v.other_root);

    for k in 2..v.smallest_non_residue {
        assert!(Fp::<P, N, B>::from_u64(k).is_qr());
    }
    let nr = Fp::<P, N, B>::from_u64(v.smallest_non_residue);
    assert!(!nr.is_qr());
    assert!(nr.sqrt().is_none());
}
