//! Entities Layer: Big Numbers
//!
//! Provides the value types every numeric encoding in the node is built on:
//! - [`BigNum`]: arbitrary precision signed integer
//! - [`Uint256`]: fixed-width 256-bit unsigned value used for hashes and targets
//! - [`ArithmeticError`]: failure of a fallible arithmetic operation
//!
//! ## Architecture
//!
//! This crate sits at the bottom of the layer stack and depends on nothing but
//! `malachite` for the arithmetic itself. All byte, compact and text encodings
//! live in `infrastructure_bignum_encoding` and are built on top of the two
//! byte-level builders exposed here ([`BigNum::from_sign_magnitude`] and
//! [`BigNum::magnitude_be_bytes`]).
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): codecs

pub mod bignum;
pub mod error;
pub mod uint256;

pub use bignum::BigNum;
pub use error::ArithmeticError;
pub use uint256::Uint256;
