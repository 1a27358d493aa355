//! Use Cases Layer: Script Building
//!
//! Provides the script builder used to embed numbers and data in scripts.
//!
//! ## Modules
//!
//! - **[`opcodes`](opcodes/index.html)**: The opcode values the builder emits
//! - **[`script`](script/index.html)**: The `Script` byte builder with the
//!   small-integer push helper and data-push framing
//!
//! ## Architecture
//!
//! Numbers other than -1 and 1..=16 are pushed as data in the byte-reversed
//! sign-and-magnitude form produced by `infrastructure_bignum_encoding`.
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): MPI codec

pub mod opcodes;
pub mod script;

pub use opcodes::Opcode;
pub use script::{Script, ScriptError};
