//! MPI Codec Module
//!
//! Canonical sign-and-magnitude bytes of a [`BigNum`].
//!
//! Three renderings of the same encoding are provided:
//! - [`MpiCodec::encode`]/[`MpiCodec::decode`]: big-endian, unframed
//! - [`MpiCodec::to_vch`]/[`MpiCodec::from_vch`]: byte-reversed (least
//!   significant first, sign bit in the last byte), the form scripts and the
//!   generic serializer carry
//! - [`MpiCodec::encode_framed`]/[`MpiCodec::decode_framed`]: big-endian with a
//!   4-byte big-endian length prefix

use entities_bignum::BigNum;

use crate::common::{decode_sign_magnitude, encode_sign_magnitude, DecodeError, EncodeError};

/// Size of the big-endian length prefix in framed encodings
pub const FRAME_HEADER_LEN: usize = 4;

/// Sign-and-magnitude byte codec
pub struct MpiCodec;

impl MpiCodec {
    /// Encode to minimal big-endian sign-and-magnitude bytes; zero is empty
    pub fn encode(value: &BigNum) -> Vec<u8> {
        encode_sign_magnitude(value.is_negative(), &value.magnitude_be_bytes())
    }

    /// Decode big-endian sign-and-magnitude bytes.
    ///
    /// Total: every byte sequence decodes to some value, and an empty input
    /// is zero. Non-minimal input (extra zero bytes) is accepted.
    pub fn decode(bytes: &[u8]) -> BigNum {
        let (negative, magnitude) = decode_sign_magnitude(bytes);
        BigNum::from_sign_magnitude(negative, &magnitude)
    }

    /// Encode to the byte-reversed vector form
    pub fn to_vch(value: &BigNum) -> Vec<u8> {
        let mut bytes = Self::encode(value);
        bytes.reverse();
        bytes
    }

    /// Decode the byte-reversed vector form
    pub fn from_vch(vch: &[u8]) -> BigNum {
        let bytes: Vec<u8> = vch.iter().rev().copied().collect();
        Self::decode(&bytes)
    }

    /// Encode with a 4-byte big-endian length prefix
    pub fn encode_framed(value: &BigNum) -> Result<Vec<u8>, EncodeError> {
        let body = Self::encode(value);
        let len = u32::try_from(body.len()).map_err(|_| EncodeError::ValueTooLarge(body.len()))?;

        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + body.len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Decode a length-prefixed encoding from the front of `data`.
    ///
    /// # Returns
    ///
    /// * `Ok((value, bytes_consumed))` - Decoded value and the length of the frame
    /// * `Err(DecodeError::BufferTooShort)` - Prefix or body is incomplete
    pub fn decode_framed(data: &[u8]) -> Result<(BigNum, usize), DecodeError> {
        if data.len() < FRAME_HEADER_LEN {
            tracing::debug!(available = data.len(), "framed bignum: truncated length prefix");
            return Err(DecodeError::BufferTooShort {
                needed: FRAME_HEADER_LEN,
                available: data.len(),
            });
        }
        let len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let end = FRAME_HEADER_LEN.saturating_add(len);
        if data.len() < end {
            tracing::debug!(needed = end, available = data.len(), "framed bignum: truncated body");
            return Err(DecodeError::BufferTooShort {
                needed: end,
                available: data.len(),
            });
        }
        Ok((Self::decode(&data[FRAME_HEADER_LEN..end]), end))
    }

    /// Length of [`Self::encode_framed`]'s output without building it
    pub fn framed_size(value: &BigNum) -> usize {
        FRAME_HEADER_LEN + Self::encode(value).len()
    }
}
