//! Fixed-Width 256-bit Values
//!
//! `Uint256` is the opaque 256-bit unsigned quantity used for hashes and
//! proof-of-work targets. It carries no arithmetic; conversions to and from
//! [`BigNum`](crate::BigNum) live in the encoding layer.
//!
//! Bytes are stored little-endian (least significant byte first), which is the
//! order hashes are serialized in. Text forms are most significant first.

use std::cmp::Ordering;
use std::fmt;

/// Width in bytes
pub const UINT256_BYTES: usize = 32;

/// 256-bit unsigned value, little-endian byte storage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint256([u8; UINT256_BYTES]);

impl Uint256 {
    pub const ZERO: Self = Self([0u8; UINT256_BYTES]);
    pub const MAX: Self = Self([0xffu8; UINT256_BYTES]);

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; UINT256_BYTES];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    pub fn from_le_bytes(bytes: [u8; UINT256_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_le_bytes(self) -> [u8; UINT256_BYTES] {
        self.0
    }

    pub fn as_le_bytes(&self) -> &[u8; UINT256_BYTES] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Parse most-significant-first hex text.
    ///
    /// Leading whitespace and an optional `0x`/`0X` prefix are skipped, then
    /// hex digits are consumed up to the first non-hex character. When more
    /// than 64 digits are present only the last 64 (least significant) are
    /// kept. Never fails: no digits gives zero.
    pub fn from_be_hex(text: &str) -> Self {
        let trimmed = text.trim_start();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let digits: Vec<u8> = body
            .chars()
            .map_while(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        let mut bytes = [0u8; UINT256_BYTES];
        for (slot, pair) in bytes.iter_mut().zip(digits.rchunks(2)) {
            *slot = match pair {
                [high, low] => (high << 4) | low,
                [low] => *low,
                _ => 0,
            };
        }
        Self(bytes)
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 64 lowercase hex digits, most significant first
impl fmt::LowerHex for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64_is_little_endian() {
        let v = Uint256::from_u64(0x0102);
        assert_eq!(v.as_le_bytes()[0], 0x02);
        assert_eq!(v.as_le_bytes()[1], 0x01);
        assert!(v.as_le_bytes()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_ordering_uses_most_significant_byte() {
        let mut high = [0u8; UINT256_BYTES];
        high[31] = 1;
        let high = Uint256::from_le_bytes(high);
        let low = Uint256::from_u64(u64::MAX);
        assert!(low < high);
        assert!(Uint256::ZERO < low);
        assert!(high < Uint256::MAX);
    }

    #[test]
    fn test_display() {
        let text = Uint256::from_u64(0xff).to_string();
        assert_eq!(text.len(), 64);
        assert!(text.ends_with("00ff"));
        assert_eq!(Uint256::MAX.to_string(), "f".repeat(64));
    }

    #[test]
    fn test_from_be_hex() {
        assert_eq!(Uint256::from_be_hex("0x1a2b"), Uint256::from_u64(0x1a2b));
        assert_eq!(Uint256::from_be_hex("  abc"), Uint256::from_u64(0xabc));
        assert_eq!(Uint256::from_be_hex("12zz34"), Uint256::from_u64(0x12));
        assert_eq!(Uint256::from_be_hex(""), Uint256::ZERO);
        assert_eq!(Uint256::from_be_hex(&"f".repeat(64)), Uint256::MAX);
        // Extra leading digits fall off the top
        let long = format!("7{}", "0".repeat(63) + "1");
        assert_eq!(Uint256::from_be_hex(&long), Uint256::from_u64(1));
    }

    #[test]
    fn test_display_round_trips_through_hex() {
        let v = Uint256::from_u64(0xdead_beef_0000_0001);
        assert_eq!(Uint256::from_be_hex(&v.to_string()), v);
    }
}
