//! Integration tests for usecases_script crate
//!
//! These tests verify that numbers pushed into a script read back through the
//! vector codec they were encoded with.

use entities_bignum::BigNum;
use infrastructure_bignum_encoding::MpiCodec;
use usecases_script::{Opcode, Script};

/// Read the data of a single direct push (length byte < OP_PUSHDATA1)
fn single_push_data(script: &Script) -> &[u8] {
    let bytes = script.as_bytes();
    let len = bytes[0] as usize;
    assert!(len < Opcode::OpPushData1.to_u8() as usize);
    assert_eq!(bytes.len(), 1 + len);
    &bytes[1..]
}

#[test]
fn test_pushed_numbers_decode_back() {
    for n in [0i64, 17, -2, 127, 128, -128, 255, 65535, -65535, i64::MAX, i64::MIN] {
        let mut script = Script::new();
        script.push_int64(n);
        let data = single_push_data(&script);
        assert_eq!(MpiCodec::from_vch(data), BigNum::from_i64(n), "n = {}", n);
    }
}

#[test]
fn test_small_ints_are_single_bytes() {
    for n in (1..=16).chain(std::iter::once(-1)) {
        let mut script = Script::new();
        script.push_int64(n);
        assert_eq!(script.len(), 1);
        assert_eq!(Some(script.as_bytes()[0]), Opcode::small_int(n).map(u8::from));
    }
}

#[test]
fn test_push_bignum_beyond_i64() {
    let big = (BigNum::one() << 100) + BigNum::from_i64(3);
    let mut script = Script::new();
    script.push_bignum(&big).unwrap();
    assert_eq!(MpiCodec::from_vch(single_push_data(&script)), big);
}
