//! Big Number Operations
//!
//! Provides arbitrary precision signed integer arithmetic for the consensus
//! encodings (script numbers, difficulty targets, serialized integers).
//!
//! `BigNum` owns a `malachite` [`Integer`] and exposes sign-and-magnitude
//! semantics on top of it:
//! - there is no negative zero
//! - division truncates toward zero and the remainder takes the dividend's sign
//! - shifts act on the magnitude and keep the sign
//!
//! Nothing outside this module sees the `Integer`. Codecs reach the value only
//! through [`BigNum::from_sign_magnitude`] and [`BigNum::magnitude_be_bytes`].

use std::fmt;
use std::ops::{
    Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use malachite::num::arithmetic::traits::UnsignedAbs;
use malachite::{Integer, Natural};

use crate::error::ArithmeticError;

const WORD_BYTES: usize = 8;

/// Arbitrary precision signed integer
///
/// Ordering is by signed value: every negative value is less than zero, and
/// among negatives the larger magnitude is the smaller value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNum {
    value: Integer,
}

impl BigNum {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0u32),
        }
    }

    /// The value one
    pub fn one() -> Self {
        Self {
            value: Integer::from(1u32),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Build a value from a sign flag and a big-endian magnitude.
    ///
    /// Leading zero bytes are accepted and ignored. A zero magnitude yields
    /// zero regardless of `negative`.
    pub fn from_sign_magnitude(negative: bool, magnitude_be: &[u8]) -> Self {
        Self::from_natural(negative, natural_from_be_bytes(magnitude_be))
    }

    /// Minimal big-endian bytes of the magnitude (no leading zero bytes).
    ///
    /// Zero yields an empty vector.
    pub fn magnitude_be_bytes(&self) -> Vec<u8> {
        natural_to_be_bytes(&self.magnitude())
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Number of bytes in the minimal magnitude encoding
    pub fn byte_length(&self) -> usize {
        self.magnitude_be_bytes().len()
    }

    /// Number of significant bits in the magnitude; zero for the value zero
    pub fn bit_length(&self) -> u64 {
        let bytes = self.magnitude_be_bytes();
        match bytes.first() {
            None => 0,
            Some(&lead) => (bytes.len() as u64 - 1) * 8 + u64::from(8 - lead.leading_zeros()),
        }
    }

    /// Low 64 bits of the magnitude.
    ///
    /// The sign is ignored and higher bits are silently dropped.
    pub fn to_u64_word(&self) -> u64 {
        low_word(&self.magnitude())
    }

    /// Low 32 bits of the magnitude, with the same truncation as [`Self::to_u64_word`]
    pub fn to_u32_word(&self) -> u32 {
        self.to_u64_word() as u32
    }

    /// Saturating projection to i32.
    ///
    /// A magnitude above `i32::MAX` clamps to `i32::MAX` for non-negative
    /// values and to `i32::MIN` for negative ones.
    pub fn to_i32(&self) -> i32 {
        if self.magnitude() > Natural::from(i32::MAX as u32) {
            return if self.is_negative() { i32::MIN } else { i32::MAX };
        }
        let word = self.to_u64_word() as i64;
        if self.is_negative() {
            -word as i32
        } else {
            word as i32
        }
    }

    /// Truncating division: x / y, quotient rounded toward zero
    ///
    /// Returns `DivisionByZero` if `divisor` is zero
    pub fn div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value / &divisor.value,
        })
    }

    /// Remainder of truncating division: x % y, same sign as `self`
    ///
    /// Returns `DivisionByZero` if `divisor` is zero
    pub fn rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value % &divisor.value,
        })
    }

    /// Add one in place
    pub fn inc(&mut self) -> &mut Self {
        self.value += Integer::from(1u32);
        self
    }

    /// Subtract one in place
    pub fn dec(&mut self) -> &mut Self {
        self.value -= Integer::from(1u32);
        self
    }

    fn magnitude(&self) -> Natural {
        (&self.value).unsigned_abs()
    }

    fn from_natural(negative: bool, magnitude: Natural) -> Self {
        let value = Integer::from(magnitude);
        Self {
            value: if negative { -value } else { value },
        }
    }
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigNum {
                fn from(value: $t) -> Self {
                    Self {
                        value: Integer::from(value),
                    }
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait<&BigNum> for &BigNum {
            type Output = BigNum;

            fn $method(self, rhs: &BigNum) -> BigNum {
                BigNum {
                    value: &self.value $op &rhs.value,
                }
            }
        }

        impl $trait for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: BigNum) -> BigNum {
                BigNum {
                    value: self.value $op rhs.value,
                }
            }
        }

        impl $assign_trait<&BigNum> for BigNum {
            fn $assign_method(&mut self, rhs: &BigNum) {
                *self = &*self $op rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);

impl Neg for &BigNum {
    type Output = BigNum;

    fn neg(self) -> BigNum {
        BigNum {
            value: -&self.value,
        }
    }
}

impl Neg for BigNum {
    type Output = BigNum;

    fn neg(self) -> BigNum {
        BigNum { value: -self.value }
    }
}

impl Shl<u32> for &BigNum {
    type Output = BigNum;

    fn shl(self, shift: u32) -> BigNum {
        BigNum {
            value: &self.value << u64::from(shift),
        }
    }
}

impl Shl<u32> for BigNum {
    type Output = BigNum;

    fn shl(self, shift: u32) -> BigNum {
        &self << shift
    }
}

impl ShlAssign<u32> for BigNum {
    fn shl_assign(&mut self, shift: u32) {
        *self = &*self << shift;
    }
}

/// Magnitude shift with the sign kept.
///
/// Once `2^shift` exceeds the magnitude the result is exactly zero.
impl Shr<u32> for &BigNum {
    type Output = BigNum;

    fn shr(self, shift: u32) -> BigNum {
        if u64::from(shift) >= self.bit_length() {
            return BigNum::zero();
        }
        BigNum::from_natural(self.is_negative(), self.magnitude() >> u64::from(shift))
    }
}

impl Shr<u32> for BigNum {
    type Output = BigNum;

    fn shr(self, shift: u32) -> BigNum {
        &self >> shift
    }
}

impl ShrAssign<u32> for BigNum {
    fn shr_assign(&mut self, shift: u32) {
        *self = &*self >> shift;
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Lowercase hex of the magnitude, `-` prefixed when negative, `0` for zero
impl fmt::LowerHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.magnitude_be_bytes();
        if bytes.is_empty() {
            return f.write_str("0");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        f.write_str(hex.trim_start_matches('0'))
    }
}

fn natural_from_be_bytes(bytes: &[u8]) -> Natural {
    let (head, tail) = bytes.split_at(bytes.len() % WORD_BYTES);
    let mut value = Natural::from(0u32);
    for chunk in std::iter::once(head).chain(tail.chunks(WORD_BYTES)) {
        let word = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        value = (value << (chunk.len() as u64 * 8)) + Natural::from(word);
    }
    value
}

fn natural_to_be_bytes(value: &Natural) -> Vec<u8> {
    let zero = Natural::from(0u32);
    let mut words = Vec::new();
    let mut rest = value.clone();
    while rest > zero {
        words.push(low_word(&rest));
        rest >>= 64u64;
    }
    let mut bytes: Vec<u8> = words.iter().rev().flat_map(|w| w.to_be_bytes()).collect();
    let leading = bytes.iter().take_while(|&&b| b == 0).count();
    bytes.drain(..leading);
    bytes
}

fn low_word(value: &Natural) -> u64 {
    // The mask keeps the value inside u64, so the conversion cannot fail
    u64::try_from(&(value & &Natural::from(u64::MAX))).unwrap_or(0)
}
