//! Text Codec Module
//!
//! Renders a [`BigNum`] in bases 2 through 16 and parses hex text.
//!
//! The hex parser is permissive: it stops at the first character that is not
//! a hex digit and never reports an error.

use entities_bignum::BigNum;

use crate::common::EncodeError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Text codec
pub struct TextCodec;

impl TextCodec {
    /// Render in `base` by repeated division of the magnitude.
    ///
    /// Digits come from `0123456789abcdef`; negative values get a leading `-`
    /// and zero renders as `"0"`.
    pub fn to_string_radix(value: &BigNum, base: u32) -> Result<String, EncodeError> {
        if !(2..=16).contains(&base) {
            return Err(EncodeError::UnsupportedBase(base));
        }
        if value.is_zero() {
            return Ok("0".to_string());
        }

        let divisor = BigNum::from(base);
        let mut rest = if value.is_negative() { -value } else { value.clone() };
        let mut text = Vec::new();
        while !rest.is_zero() {
            let digit = rest.rem(&divisor)?.to_u32_word() as usize;
            text.push(DIGITS[digit]);
            rest = rest.div(&divisor)?;
        }
        if value.is_negative() {
            text.push(b'-');
        }
        text.reverse();
        Ok(text.into_iter().map(char::from).collect())
    }

    /// Base 16 rendering
    pub fn to_hex(value: &BigNum) -> String {
        format!("{:x}", value)
    }

    /// Parse hex text.
    ///
    /// Leading whitespace is skipped, then an optional `-`, then an optional
    /// `0x`/`0X` prefix and any whitespace after it. Hex digits are consumed up
    /// to the first other character; whatever follows is ignored. No digits
    /// yields zero.
    pub fn from_hex(text: &str) -> BigNum {
        let mut rest = text.trim_start();
        let negative = match rest.strip_prefix('-') {
            Some(unsigned) => {
                rest = unsigned;
                true
            }
            None => false,
        };
        if let Some(body) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = body;
        }
        rest = rest.trim_start();

        let nibbles: Vec<u8> = rest
            .chars()
            .map_while(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();
        let magnitude: Vec<u8> = nibbles
            .rchunks(2)
            .rev()
            .map(|pair| match pair {
                [high, low] => (high << 4) | low,
                [low] => *low,
                _ => 0,
            })
            .collect();
        BigNum::from_sign_magnitude(negative, &magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string_radix_hex() {
        assert_eq!(TextCodec::to_string_radix(&BigNum::from_i64(255), 16).unwrap(), "ff");
        assert_eq!(TextCodec::to_string_radix(&BigNum::from_i64(-255), 16).unwrap(), "-ff");
        assert_eq!(TextCodec::to_string_radix(&BigNum::zero(), 16).unwrap(), "0");
    }

    #[test]
    fn test_to_string_radix_other_bases() {
        let v = BigNum::from_i64(255);
        assert_eq!(TextCodec::to_string_radix(&v, 10).unwrap(), "255");
        assert_eq!(TextCodec::to_string_radix(&v, 2).unwrap(), "11111111");
        assert_eq!(TextCodec::to_string_radix(&v, 8).unwrap(), "377");
        assert_eq!(TextCodec::to_string_radix(&BigNum::from_i64(-35), 7).unwrap(), "-50");
    }

    #[test]
    fn test_to_string_radix_rejects_bases() {
        let v = BigNum::one();
        assert_eq!(TextCodec::to_string_radix(&v, 1), Err(EncodeError::UnsupportedBase(1)));
        assert_eq!(TextCodec::to_string_radix(&v, 17), Err(EncodeError::UnsupportedBase(17)));
        assert_eq!(TextCodec::to_string_radix(&v, 0), Err(EncodeError::UnsupportedBase(0)));
    }

    #[test]
    fn test_decimal_matches_display() {
        let v = (BigNum::one() << 200) - BigNum::from_i64(12345);
        assert_eq!(TextCodec::to_string_radix(&v, 10).unwrap(), v.to_string());
        assert_eq!(TextCodec::to_string_radix(&-&v, 16).unwrap(), TextCodec::to_hex(&-&v));
    }

    #[test]
    fn test_from_hex_prefixes() {
        assert_eq!(TextCodec::from_hex("  -0x1A"), BigNum::from_i64(-26));
        assert_eq!(TextCodec::from_hex("0XfF"), BigNum::from_i64(255));
        assert_eq!(TextCodec::from_hex("0x  10"), BigNum::from_i64(16));
        assert_eq!(TextCodec::from_hex("abc"), BigNum::from_i64(0xabc));
    }

    #[test]
    fn test_from_hex_stops_at_garbage() {
        // Permissive by contract: trailing junk is ignored, not rejected
        assert_eq!(TextCodec::from_hex("1Azz"), BigNum::from_i64(26));
        assert_eq!(TextCodec::from_hex("12 34"), BigNum::from_i64(0x12));
        assert_eq!(TextCodec::from_hex("-7g"), BigNum::from_i64(-7));
    }

    #[test]
    fn test_from_hex_without_digits_is_zero() {
        assert!(TextCodec::from_hex("").is_zero());
        assert!(TextCodec::from_hex("   ").is_zero());
        assert!(TextCodec::from_hex("-").is_zero());
        assert!(TextCodec::from_hex("0x").is_zero());
        assert!(TextCodec::from_hex("zz12").is_zero());
        assert!(!TextCodec::from_hex("-0").is_negative());
    }

    #[test]
    fn test_from_hex_large() {
        let text = format!("1{}", "0".repeat(64));
        assert_eq!(TextCodec::from_hex(&text), BigNum::one() << 256);
        assert_eq!(TextCodec::to_hex(&TextCodec::from_hex(&text)), text);
    }
}
