//! Uint256 Codec Module
//!
//! Conversion between [`BigNum`] and the fixed-width [`Uint256`].
//!
//! Both directions go through the sign-and-magnitude byte layout rather than
//! through arithmetic. `to_u256` drops the sign and keeps only the low 256
//! bits of the magnitude: larger values truncate silently, which callers rely
//! on for compatibility.

use entities_bignum::uint256::UINT256_BYTES;
use entities_bignum::{BigNum, Uint256};

use crate::common::{encode_sign_magnitude, SIGN_BIT};
use crate::mpi_codec::MpiCodec;

/// Uint256 interop codec
pub struct Uint256Codec;

impl Uint256Codec {
    /// Build a non-negative value from a 256-bit quantity
    pub fn from_u256(value: &Uint256) -> BigNum {
        let mut big_endian = value.to_le_bytes();
        big_endian.reverse();
        MpiCodec::decode(&encode_sign_magnitude(false, &big_endian))
    }

    /// Low 256 bits of the magnitude; the sign is discarded
    pub fn to_u256(value: &BigNum) -> Uint256 {
        let mut mpi = MpiCodec::encode(value);
        let Some(lead) = mpi.first_mut() else {
            return Uint256::ZERO;
        };
        *lead &= !SIGN_BIT;

        let mut bytes = [0u8; UINT256_BYTES];
        for (slot, byte) in bytes.iter_mut().zip(mpi.iter().rev()) {
            *slot = *byte;
        }
        Uint256::from_le_bytes(bytes)
    }
}
