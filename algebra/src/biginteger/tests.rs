use super::*;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const MODULUS: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";
const A: &str = "0dbd9d7381e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f902b";
const B: &str = "23445bb31738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d8";

fn big(s: &str) -> BigInteger256 {
    BigInteger256::from_bytes(&hex::decode(s).unwrap())
}

fn hex32(a: &BigInteger256) -> String {
    hex::encode(a.to_bytes(32))
}

#[test]
fn test_bytes_and_limbs() {
    let p = big(MODULUS);
    assert_eq!(
        p.0,
        [0x208C16D87CFD47, 0x6A916871CA8D3C, 0xB68181585D9781, 0xE131A029B85045, 0x30644E72]
    );
    assert_eq!(hex32(&p), MODULUS);
    assert_eq!(p.num_bits(), 254);
    assert_eq!(p.last_bits(3), 7);
    assert_eq!(format!("{}", BigInteger256::from_u64(0xabcd)).trim_start_matches('0'), "abcd");

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..100 {
        let a = BigInteger256::random_below(&p, &mut rng);
        assert!(a < p);
        assert_eq!(BigInteger256::from_bytes(&a.to_bytes(32)), a);
    }
}

#[test]
fn test_mul_and_dmod() {
    let p = big(MODULUS);
    let a = big(A);
    let b = big(B);

    let ab = a.mul(&b);
    assert_eq!(
        hex32(&ab.dmod(&p)),
        "21e24601bc9e3063dce81b3d1e6ccd7cf6e6f0e7049128845da865ec83854981"
    );
    assert_eq!(
        hex32(&a.square().dmod(&p)),
        "2c56ae40138dce36c9867faead359164d58f52ffccabf90ad085bfeb54571645"
    );

    let (high, low) = ab.split(254);
    assert_eq!(hex32(&high), "07925f4284f5806c4f686795ffeeb11e975ce0e9da47a5e8808c60f19595f075");
    assert_eq!(hex32(&low), "2b4164c40a7a65032f6d2f7136c962c633cb9d6843e90aeca35b034749e21448");

    assert_eq!(
        hex32(&a.pxmul(19).dmod(&p)),
        "131d27543e32bb6faf3b956c92949ae61d273a16e87d08a79d367cdaf416c0ce"
    );
}

#[test]
fn test_square_matches_mul() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..100 {
        let a: BigInteger448 = rng.gen();
        assert_eq!(a.square(), a.mul(&a));
    }
}

#[test]
fn test_shifts() {
    let a = big(A);

    let mut x = a;
    x.muln(20);
    assert_eq!(
        hex::encode(x.to_bytes(35)),
        "00dbd9d7381e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f902b00000"
    );
    x.divn(20);
    assert_eq!(x, a);

    let mut y = a;
    y.divn(77);
    assert_eq!(hex32(&y), "000000000000000000006deceb9c0f3a77af4712eca076c823aca98cc2eaecee");

    let mut z = a;
    z.mul2();
    z.div2();
    assert_eq!(z, a);

    let mut w = a;
    w.divn(56 * 5);
    assert!(w.is_zero());

    let mut d = a.mul(&big(B));
    let (high, _) = d.split(254);
    d.divn(254);
    assert_eq!(d.lower(), high);
    assert!(d.upper().is_zero());
}

#[test]
fn test_mod_by() {
    let mut m = BigInteger256::one();
    m.muln(100);
    m.inc(277);
    let mut a = big(A);
    a.mod_by(&m);
    assert_eq!(hex32(&a), "000000000000000000000000000000000000000c0dced5f4ed70b78f144e5472");
}

#[test]
fn test_signed_limbs() {
    let a = big(A);
    let b = big(B);
    let mut d = a;
    d.sub(&b);
    d.norm();
    assert!(d.is_negative());
    d.add(&b);
    d.norm();
    assert_eq!(d, a);

    let mut one = BigInteger256::zero();
    one.dec(1);
    assert!(one.is_negative());
    one.inc(2);
    assert_eq!(one, BigInteger256::one());
}

#[test]
fn test_invmodp() {
    let p = big(MODULUS);
    let a = big(A);
    let inv = a.invmodp(&p);
    assert_eq!(hex32(&inv), "0851a33e21de8f319d7e157f6ab1b62ec90488e2d32b7f05c3b1708c4351927d");
    assert_eq!(a.mul(&inv).dmod(&p), BigInteger256::one());
}

#[test]
fn test_jacobi() {
    let p = big(MODULUS);
    let a = big(A);
    let b = big(B);
    assert_eq!(a.jacobi(&p), -1);
    assert_eq!(b.jacobi(&p), -1);
    assert_eq!(a.mul(&b).dmod(&p).jacobi(&p), 1);
    assert_eq!(a.square().dmod(&p).jacobi(&p), 1);
    assert_eq!(BigInteger256::zero().jacobi(&p), 0);
    // 2 is a square modulo a prime p = 7 mod 8
    assert_eq!(BigInteger256::from_u64(2).jacobi(&p), 1);
}
