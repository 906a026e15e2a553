//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502 and the [`ResolvedAddress`] type the
//! address resolver produces for each instruction. A mode determines how many
//! operand bytes follow the opcode and how the effective operand location is
//! computed from them and the registers.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectIndexed, IndexedIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant stored in the instruction stream itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// Signed 8-bit offset from the address after the instruction.
    ///
    /// Used only by the eight branch instructions.
    Relative,

    /// Zero page address plus X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address plus Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// 16-bit address plus X, full 16-bit addition.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address plus Y, full 16-bit addition.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// 16-bit pointer dereferenced to a 16-bit target.
    ///
    /// Example: JMP ($FFFC). Only JMP uses this mode. The historical
    /// hardware defect where a pointer ending in 0xFF fails to carry into
    /// the high byte is not reproduced.
    Indirect,

    /// Zero-page pointer dereferenced (with zero-page wraparound), then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexed,

    /// Zero-page pointer plus X (8-bit wraparound), then dereferenced with
    /// zero-page wraparound.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode for this mode.
    pub fn operand_len(self) -> u16 {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectIndexed
            | IndexedIndirect => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }
}

/// The operand location computed for one instruction.
///
/// Register-only instructions (Implied and Accumulator modes) carry no
/// memory operand; everything else resolves to a 16-bit address. A resolved
/// address is computed fresh per instruction, consumed immediately by the
/// execution unit, and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    addr: u16,
    register_only: bool,
}

impl ResolvedAddress {
    /// A memory operand at the given address.
    pub fn memory(addr: u16) -> Self {
        Self {
            addr,
            register_only: false,
        }
    }

    /// No memory operand; the instruction works on a register.
    pub fn register() -> Self {
        Self {
            addr: 0,
            register_only: true,
        }
    }

    /// The resolved 16-bit operand address.
    ///
    /// Meaningless (always zero) when [`is_register_only`] returns true.
    ///
    /// [`is_register_only`]: ResolvedAddress::is_register_only
    pub fn addr(self) -> u16 {
        self.addr
    }

    /// True when the instruction has no memory operand.
    pub fn is_register_only(self) -> bool {
        self.register_only
    }
}
