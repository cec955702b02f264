use crate::fields::{
    tests::{primefield_test, vectors_test, Vectors},
    bn254::FqParameters,
};

#[test]
fn test_fq() {
    primefield_test::<FqParameters, 5, 56>();
}

#[test]
fn test_fq_vectors() {
    vectors_test::<FqParameters, 5, 56>(&Vectors {
        a: "1cead21d7734d7c1c7fde805ec99108ddb5b5fab8f4d3e27dda1494c73cf256d",
        b: "1e72e7a1830c71c2cdcc69292f45e678309d6b79965eda32dae445508201e2bd",
        product: "07594a2ffd9f7892fb8d1091c353fc835f0bd2b2984068033f734b11daf14834",
        sum: "0af96b4c190fa95add7a0b789a5d9ea874776093bd3a4dcd7c6502861d540ae3",
        difference: "2edc38eed55a0628b281c4933ed48273423f5ec361602e823edd9012ca4a3ff7",
        a_inverse: "1f4d9779340546c0c3b61f5c9dadcf3928b91b7a7fec81f759753064078bfd56",
        a_times_minus_seven: "2789c97023863a8421a004670f5745f2f60777261f1c41ab1d39bb5b0fc6ec68",
        a_half: "26a790482c333bf5c02716de370d3475b96e651e7bdf845a8ce0eab1a626115a",
        a_pow_b: "00ebb9d6afeea1848a0df7d924a5205dd318c303895e50f4d62cf20cbf8fcc4c",
        a_squared: "1780aa7df6692a1cd671b3a947e421a537a730611ee6c14233b86afd038cd8ac",
        other_root: "13797c5569fcc867f0525db094e847cfbc260ae5d9248c655e7f42ca64add7da",
        smallest_non_residue: 3,
    });
}
