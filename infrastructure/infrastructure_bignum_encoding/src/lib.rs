//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the byte and text representations of [`BigNum`] that are part of
//! the node's wire and consensus protocol.
//!
//! ## Codecs
//!
//! - **[`mpi_codec`](mpi_codec/index.html)**: Canonical big-endian
//!   sign-and-magnitude bytes, the byte-reversed vector form used by scripts,
//!   and the 4-byte length framing used inside serialized structures.
//!
//! - **[`compact_codec`](compact_codec/index.html)**: The lossy 32-bit
//!   "nBits" encoding of proof-of-work targets.
//!
//! - **[`text_codec`](text_codec/index.html)**: Arbitrary base rendering and
//!   the permissive hex parser.
//!
//! - **[`uint256_codec`](uint256_codec/index.html)**: Conversion to and from the
//!   fixed-width [`Uint256`](entities_bignum::Uint256).
//!
//! ## Architecture
//!
//! Every codec reaches the value only through the byte builders exported by
//! `entities_bignum`; the sign-byte rules shared by the MPI and 256-bit paths
//! live in `common`.
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): BigNum and Uint256 types

mod common;

pub mod compact_codec;
pub mod mpi_codec;
pub mod text_codec;
pub mod uint256_codec;

pub use compact_codec::CompactCodec;
pub use mpi_codec::MpiCodec;
pub use text_codec::TextCodec;
pub use uint256_codec::Uint256Codec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};

// Re-export the byte-buffer builders for callers that frame bytes themselves
pub use common::{decode_sign_magnitude, encode_sign_magnitude};

pub use entities_bignum::BigNum;
