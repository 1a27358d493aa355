//! Script Builder
//!
//! `Script` is a byte buffer with typed push operations. Data pushes use the
//! shortest length framing:
//!
//! | data length        | framing                               |
//! |--------------------|---------------------------------------|
//! | `< 0x4c`           | one length byte                       |
//! | `<= 0xff`          | `OP_PUSHDATA1` + u8 length            |
//! | `<= 0xffff`        | `OP_PUSHDATA2` + u16 length (LE)      |
//! | `<= 0xffff_ffff`   | `OP_PUSHDATA4` + u32 length (LE)      |

use entities_bignum::BigNum;
use infrastructure_bignum_encoding::MpiCodec;

use crate::opcodes::Opcode;

/// Script building errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// Data does not fit the largest push framing
    #[error("push of {0} bytes exceeds the 32-bit length limit")]
    PushTooLarge(usize),
}

/// Script byte builder
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script {
    bytes: Vec<u8>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append a bare opcode
    pub fn push_opcode(&mut self, op: Opcode) -> &mut Self {
        self.bytes.push(op.to_u8());
        self
    }

    /// Push a small integer.
    ///
    /// -1 and 1..=16 become a single opcode; every other value (0 included)
    /// is pushed as data in the byte-reversed sign-and-magnitude form.
    pub fn push_int64(&mut self, n: i64) -> &mut Self {
        if let Some(op) = Opcode::small_int(n) {
            return self.push_opcode(op);
        }
        // At most nine bytes, always under the single-byte length limit
        let vch = MpiCodec::to_vch(&BigNum::from_i64(n));
        self.write_push(&vch);
        self
    }

    /// Push an arbitrary number as data
    pub fn push_bignum(&mut self, value: &BigNum) -> Result<&mut Self, ScriptError> {
        self.push_slice(&MpiCodec::to_vch(value))
    }

    /// Push raw data with the shortest length framing
    pub fn push_slice(&mut self, data: &[u8]) -> Result<&mut Self, ScriptError> {
        if u32::try_from(data.len()).is_err() {
            return Err(ScriptError::PushTooLarge(data.len()));
        }
        self.write_push(data);
        Ok(self)
    }

    fn write_push(&mut self, data: &[u8]) {
        let len = data.len();
        tracing::trace!(len, "script data push");
        if len < Opcode::OpPushData1.to_u8() as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(Opcode::OpPushData1.to_u8());
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(Opcode::OpPushData2.to_u8());
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(Opcode::OpPushData4.to_u8());
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
