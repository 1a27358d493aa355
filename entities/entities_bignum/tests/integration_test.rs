//! Integration tests for entities_bignum crate
//!
//! These tests verify big number arithmetic laws end-to-end.

use entities_bignum::*;
use proptest::prelude::*;

#[test]
fn test_big_number_operations_integration() {
    let big1 = BigNum::from_i64(1234567890123456i64);
    let big2 = BigNum::from_i64(-987654321098765i64);

    let sum = &big1 + &big2;
    assert_eq!(sum, BigNum::from_i64(246913569024691));

    let diff = &big1 - &big2;
    assert_eq!(diff, BigNum::from_i64(2222222211222221));

    // Product exceeds i64 and must not truncate
    let prod = &big1 * &big2;
    assert_eq!(prod.div(&big2), Ok(big1.clone()));
    assert!(prod.byte_length() > 8);

    assert_eq!(big1.div(&big2), Ok(BigNum::from_i64(-1)));
}

#[test]
fn test_large_numbers() {
    let a = BigNum::from_u64(u64::MAX);
    let sum = &a + &BigNum::one();
    assert_eq!(sum, BigNum::one() << 64);
    assert_eq!(sum.to_u64_word(), 0);
    assert_eq!(sum.to_i32(), i32::MAX);
}

#[test]
fn test_shift_round_trip_large() {
    let x = BigNum::from_i64(-0x1234_5678);
    let shifted = &x << 300;
    assert_eq!(shifted.bit_length(), 29 + 300);
    assert_eq!(&shifted >> 300, x);
}

proptest! {
    #[test]
    fn prop_total_order(a in any::<i64>(), b in any::<i64>()) {
        let x = BigNum::from_i64(a);
        let y = BigNum::from_i64(b);
        let holds = [x < y, x == y, x > y].iter().filter(|&&h| h).count();
        prop_assert_eq!(holds, 1);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert!(x == x.clone());
    }

    #[test]
    fn prop_division_identity(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let x = BigNum::from_i64(a);
        let y = BigNum::from_i64(b);
        let q = x.div(&y).unwrap();
        let r = x.rem(&y).unwrap();
        prop_assert_eq!(&(&q * &y) + &r, x.clone());
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
    }

    #[test]
    fn prop_magnitude_bytes_are_minimal(a in any::<i64>()) {
        let x = BigNum::from_i64(a);
        let bytes = x.magnitude_be_bytes();
        prop_assert!(bytes.first().map_or(true, |&b| b != 0));
        prop_assert_eq!(BigNum::from_sign_magnitude(a < 0, &bytes), x);
    }
}
