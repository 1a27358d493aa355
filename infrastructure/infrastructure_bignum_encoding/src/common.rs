//! Common Encoding/Decoding Utilities
//!
//! Shared byte-buffer builders for the sign-and-magnitude ("MPI") layout and
//! the error types of every codec in this crate.
//!
//! ## Layout
//!
//! A value is written as its minimal big-endian magnitude. The most
//! significant bit of the first byte is reserved for the sign:
//! - if the magnitude already uses that bit, a guard byte is prepended
//!   (`0x80` when negative, `0x00` otherwise)
//! - otherwise a negative value sets the bit in the leading magnitude byte
//!
//! Zero is the empty sequence.

use entities_bignum::ArithmeticError;

/// Sign bit of the leading byte
pub(crate) const SIGN_BIT: u8 = 0x80;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Text base outside the supported digit alphabet
    #[error("unsupported base {0}, expected 2..=16")]
    UnsupportedBase(u32),
    /// Encoded body does not fit a 32-bit length prefix
    #[error("encoded value of {0} bytes does not fit a 32-bit length prefix")]
    ValueTooLarge(usize),
    /// Arithmetic failure while producing digits
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input ends before the announced data does
    #[error("buffer too short: needed {needed} bytes, {available} available")]
    BufferTooShort { needed: usize, available: usize },
}

/// Build the sign-and-magnitude bytes for a sign and a big-endian magnitude.
///
/// Leading zero bytes of `magnitude_be` are stripped first, so the output is
/// always minimal. A zero magnitude yields an empty vector regardless of
/// `negative`.
pub fn encode_sign_magnitude(negative: bool, magnitude_be: &[u8]) -> Vec<u8> {
    let start = magnitude_be.iter().take_while(|&&b| b == 0).count();
    let magnitude = &magnitude_be[start..];

    let mut out = Vec::with_capacity(magnitude.len() + 1);
    match magnitude.first() {
        None => return out,
        Some(&lead) if lead & SIGN_BIT != 0 => out.push(0),
        Some(_) => {}
    }
    out.extend_from_slice(magnitude);
    if negative {
        out[0] |= SIGN_BIT;
    }
    out
}

/// Split sign-and-magnitude bytes into the sign and the big-endian magnitude.
///
/// Every input has a defined reading: the leading byte's top bit is the sign
/// and is cleared before the rest is taken as magnitude. The returned
/// magnitude may carry leading zero bytes (the cleared guard byte).
pub fn decode_sign_magnitude(bytes: &[u8]) -> (bool, Vec<u8>) {
    let mut magnitude = bytes.to_vec();
    let negative = match magnitude.first_mut() {
        Some(lead) if *lead & SIGN_BIT != 0 => {
            *lead &= !SIGN_BIT;
            true
        }
        _ => false,
    };
    (negative, magnitude)
}
