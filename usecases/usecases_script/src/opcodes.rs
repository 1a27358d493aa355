//! Script Opcodes
//!
//! Only the opcodes the builder emits are listed.

/// Script opcode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push an empty byte vector (also "false")
    Op0 = 0x00,
    /// Next byte is the data length
    OpPushData1 = 0x4c,
    /// Next two bytes (little-endian) are the data length
    OpPushData2 = 0x4d,
    /// Next four bytes (little-endian) are the data length
    OpPushData4 = 0x4e,
    /// Push the number -1
    Op1Negate = 0x4f,
    OpReserved = 0x50,
    /// Push the number 1 (also "true")
    Op1 = 0x51,
    Op2 = 0x52,
    Op3 = 0x53,
    Op4 = 0x54,
    Op5 = 0x55,
    Op6 = 0x56,
    Op7 = 0x57,
    Op8 = 0x58,
    Op9 = 0x59,
    Op10 = 0x5a,
    Op11 = 0x5b,
    Op12 = 0x5c,
    Op13 = 0x5d,
    Op14 = 0x5e,
    Op15 = 0x5f,
    Op16 = 0x60,
}

impl Opcode {
    pub const FALSE: Opcode = Opcode::Op0;
    pub const TRUE: Opcode = Opcode::Op1;

    /// The byte value of the opcode
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Single-byte opcode for -1 and 1..=16; `None` for everything else.
    ///
    /// Zero is not included: it is pushed as empty data, which happens to be
    /// the byte `Op0`.
    pub fn small_int(n: i64) -> Option<Opcode> {
        const SMALL: [Opcode; 16] = [
            Opcode::Op1,
            Opcode::Op2,
            Opcode::Op3,
            Opcode::Op4,
            Opcode::Op5,
            Opcode::Op6,
            Opcode::Op7,
            Opcode::Op8,
            Opcode::Op9,
            Opcode::Op10,
            Opcode::Op11,
            Opcode::Op12,
            Opcode::Op13,
            Opcode::Op14,
            Opcode::Op15,
            Opcode::Op16,
        ];
        match n {
            -1 => Some(Opcode::Op1Negate),
            1..=16 => Some(SMALL[(n - 1) as usize]),
            _ => None,
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op.to_u8()
    }
}
