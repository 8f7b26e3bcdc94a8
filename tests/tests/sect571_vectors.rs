//! Known-answer tests for GF(2^571) against published curve parameters and
//! the schoolbook oracle

use binfield_algorithms::field::sect571::{ExtendedElement, FieldElement, FIELD_WORDS};
use binfield_tests::oracle;
use binfield_tests::vectors::{field_element, BinaryCurveVector, SECT571K1, SECT571R1};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y² + xy == x³ + a·x² + b
fn assert_base_point_on_curve(curve: &BinaryCurveVector) {
    let a = field_element(curve.a);
    let b = field_element(curve.b);
    let x = field_element(curve.gx);
    let y = field_element(curve.gy);

    let lhs = y.square().add(&x.mul(&y));
    let x2 = x.square();
    let rhs = x2.mul(&x).add(&a.mul(&x2)).add(&b);
    assert_eq!(lhs, rhs, "{} base point must satisfy curve equation", curve.name);

    // Same equation with both sides accumulated before a single reduction
    let mut acc = ExtendedElement::zero();
    acc.square_add(&y);
    acc.multiply_add(&x, &y);
    acc.multiply_add(&x2, &x);
    acc.multiply_add(&a, &x2);
    assert_eq!(acc.reduce(), b, "{} deferred reduction", curve.name);
}

#[test]
fn test_sect571k1_base_point_on_curve() {
    assert_base_point_on_curve(&SECT571K1);
}

#[test]
fn test_sect571r1_base_point_on_curve() {
    assert_base_point_on_curve(&SECT571R1);
}

#[test]
fn test_corrupted_base_point_is_rejected() {
    let x = field_element(SECT571K1.gx);
    let y = field_element(SECT571K1.gy).add_one();
    let lhs = y.square().add(&x.mul(&y));
    let rhs = x.square().mul(&x).add_one();
    assert_ne!(lhs, rhs);
}

#[test]
fn test_base_point_products_match_oracle() {
    for curve in [&SECT571K1, &SECT571R1] {
        let x = field_element(curve.gx);
        let y = field_element(curve.gy);
        let expected = oracle::mul_mod(&x.to_integer(), &y.to_integer());
        assert_eq!(x.mul(&y).to_integer(), expected, "{}", curve.name);
        assert_eq!(
            x.square().to_integer(),
            oracle::mul_mod(&x.to_integer(), &x.to_integer()),
            "{}",
            curve.name
        );
    }
}

#[test]
fn test_one_times_one_is_one() {
    let one = FieldElement::from_integer(&BigUint::from(1u8)).unwrap();
    assert_eq!(one.mul(&one), one);
    assert_eq!(one.mul(&one).to_integer(), BigUint::from(1u8));
}

#[test]
fn test_square_x570_matches_long_division() {
    let y = FieldElement::from_integer(&(BigUint::from(1u8) << 570u32)).unwrap();
    let expected = oracle::monomial_mod(1140);
    assert_eq!(y.square().to_integer(), expected);

    let set: Vec<u64> = (0..expected.bits()).filter(|&i| expected.bit(i)).collect();
    assert_eq!(set, vec![0, 2, 3, 18, 569]);
}

#[test]
fn test_every_high_monomial_reduces_like_oracle() {
    for e in 571u64..1152 {
        let mut words = [0u64; 2 * FIELD_WORDS];
        words[(e / 64) as usize] = 1 << (e % 64);
        let reduced = ExtendedElement::from_words(&words).unwrap().reduce();
        assert_eq!(reduced.to_integer(), oracle::monomial_mod(e), "x^{}", e);
    }
}

#[test]
fn test_random_products_match_oracle() {
    let mut rng = ChaCha20Rng::seed_from_u64(571);
    for _ in 0..50 {
        let a = FieldElement::random(&mut rng);
        let b = FieldElement::random(&mut rng);
        let (ia, ib) = (a.to_integer(), b.to_integer());

        let expected = oracle::mul_mod(&ia, &ib);
        assert_eq!(a.mul(&b).to_integer(), expected);
        assert_eq!(a.mul_wordwise(&b).to_integer(), expected);
        assert_eq!(a.square().to_integer(), oracle::mul_mod(&ia, &ia));
    }
}

#[test]
fn test_from_integer_rejects_out_of_range() {
    let too_wide = BigUint::from(1u8) << 571u32;
    assert!(FieldElement::from_integer(&too_wide).is_err());

    let max = (BigUint::from(1u8) << 571u32) - BigUint::from(1u8);
    let fe = FieldElement::from_integer(&max).unwrap();
    assert_eq!(fe.to_integer(), max);
}
