//! Compact Codec Module
//!
//! The 32-bit "compact" (nBits) form of a proof-of-work target:
//!
//! ```text
//!  31      24 23 22                    0
//! +----------+--+-----------------------+
//! | exponent |s |       mantissa        |
//! +----------+--+-----------------------+
//! ```
//!
//! `value = (-1)^s * mantissa * 256^(exponent - 3)`. The exponent is the byte
//! length of the magnitude, the mantissa its top three bytes. Everything below
//! those three bytes is dropped on encode, so only values that came out of
//! [`CompactCodec::decode`] survive a round trip.
//!
//! Targets are unsigned in practice; the sign bit is kept for bit-exactness.

use entities_bignum::BigNum;

const SIGN_FLAG: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;
const MANTISSA_BYTES: u32 = 3;

/// Compact difficulty target codec
pub struct CompactCodec;

impl CompactCodec {
    /// Expand a compact code. Every 32-bit input has a defined value.
    pub fn decode(compact: u32) -> BigNum {
        let size = compact >> 24;
        let negative = compact & SIGN_FLAG != 0;
        let word = compact & MANTISSA_MASK;

        let magnitude = if size <= MANTISSA_BYTES {
            BigNum::from(word >> (8 * (MANTISSA_BYTES - size)))
        } else {
            BigNum::from(word) << (8 * (size - MANTISSA_BYTES))
        };
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Compress a value, keeping only the top three magnitude bytes.
    ///
    /// Zero encodes as `0x00000000`.
    pub fn encode(value: &BigNum) -> u32 {
        let mut size = value.byte_length() as u32;
        let mut compact = if size <= MANTISSA_BYTES {
            value.to_u32_word() << (8 * (MANTISSA_BYTES - size))
        } else {
            (value >> (8 * (size - MANTISSA_BYTES))).to_u32_word()
        };

        // A set 0x00800000 would read back as the sign
        if compact & SIGN_FLAG != 0 {
            compact >>= 8;
            size += 1;
        }
        compact |= size << 24;
        if value.is_negative() {
            compact |= SIGN_FLAG;
        }
        compact
    }
}
