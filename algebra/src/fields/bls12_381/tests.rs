use crate::fields::{
    bls12_381::{Fq, FqParameters},
    tests::{primefield_test, vectors_test, Vectors},
};

#[test]
fn test_fq() {
    primefield_test::<FqParameters, 7, 58>();
}

#[test]
fn test_fq_vectors() {
    vectors_test::<FqParameters, 7, 58>(&Vectors {
        a: "070aa3f7a461f444637194ad3bfdf0b3a16c560044d4b90d9b5178fef3934f6e9ce8f03296ccb4439e8e86f287921216",
        b: "0d6aca3b9a2dcf6703e12b9b04ea4b7ad2087e78e5b0c00d3613621077284088d7191f50f22d78f7dd6342cdd0988d76",
        product: "00ca8ac4ec98ad89e01d650289cf04678275dfa393467e517b258961f3912618a80a0fa45a0c77a629fadba40b088e9f",
        sum: "14756e333e8fc3ab6752c04840e83c2e7374d4792a85791ad164db0f6abb8ff774020f8388fa2d3b7bf1c9c0582a9f8c",
        difference: "13a0eba643b40b77aaac10c87a5f521033db230c52a90bbfcc6ee98f731c0509e47bd0e055f33b4b7b2a4424b6f92f4b",
        a_inverse: "0f0751bb75eed6f9cbfa84d6ebddafb7906095ec8c9f3b4430743905317fe395b0904aa8e5d241dd9f1cc22c5dc96d4f",
        a_times_minus_seven: "02b7a80ef4521f55de1c3eafe2a5c4c55ef83d080539161f8f275649445ac041f2f96e9b430f12261e184f5e4b00d6bc",
        a_half: "038551fbd230fa2231b8ca569dfef859d0b62b00226a5c86cda8bc7f79c9a7b74e7478194b665a21cf47437943c9090b",
        a_pow_b: "015e62bb375efe774c9e5b27efe1eb2110b5938260fd1bc1cd9d1a0e8369ea6d4e77263089790c61b90317d4d70fc88f",
        a_squared: "049789ba3b5e51dc49a56d110aa06e09756efa548b6004d6b05956a2cb488f0cc271a38338163bf1b8aca76c64e425b6",
        other_root: "12f66df2951df255e7aa1309074dbc23c30af584aeb059b1cbdf59a2031da6b581c30fcc1a874bbc1b70790d786d9895",
        smallest_non_residue: 2,
    });
}

#[test]
fn test_fq_sqrt_three_mod_eight() {
    assert_eq!(<FqParameters as crate::fields::FpParameters<7, 58>>::MOD8, 3);
    // -1 is a non-residue when q = 3 mod 4
    assert!(!(-Fq::one()).is_qr());
    assert!((-Fq::one()).sqrt().is_none());
    let nine = Fq::from_u64(9);
    let r = nine.sqrt().unwrap();
    assert!(r == Fq::from_u64(3) || r == -Fq::from_u64(3));
}
