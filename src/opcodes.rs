//! # Opcode Decode Table
//!
//! The immutable 256-entry table mapping every raw opcode byte to its
//! instruction tag, addressing mode and fixed cycle cost. The table is the
//! single source of truth for decoding: it is total, so the engine never
//! faults on an unknown byte. Undocumented opcodes decode like any other;
//! whether their execution body exists is the execution unit's concern.
//!
//! Cycle costs are the base costs only. Page-cross penalties are not
//! modeled.

use crate::addressing::AddressingMode;

/// Instruction tag: one of the 78 operations the decode table can produce.
///
/// 56 documented 6502 operations plus 22 undocumented ones. Many opcode
/// bytes share a tag (the addressing-mode variants of one mnemonic), and a
/// handful of undocumented bytes alias documented tags outright (0xEB is
/// SBC, the 1-byte NOPs 0x1A/0x3A/0x5A/0x7A/0xDA/0xFA are NOP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Documented operations
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented operations (decode only; execution is unimplemented)
    Ahx,
    Alr,
    Anc,
    Arr,
    Axs,
    Dcp,
    Dop,
    Isc,
    Kil,
    Las,
    Lax,
    Lxa,
    Rla,
    Rra,
    Sax,
    Shx,
    Shy,
    Slo,
    Sre,
    Tas,
    Top,
    Xaa,
}

impl Instruction {
    /// The assembler mnemonic, as rendered in trace lines.
    pub fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Adc => "ADC",
            Ahx => "AHX",
            Alr => "ALR",
            Anc => "ANC",
            And => "AND",
            Arr => "ARR",
            Asl => "ASL",
            Axs => "AXS",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dcp => "DCP",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Dop => "DOP",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Isc => "ISC",
            Jmp => "JMP",
            Jsr => "JSR",
            Kil => "KIL",
            Las => "LAS",
            Lax => "LAX",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Lxa => "LXA",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rla => "RLA",
            Rol => "ROL",
            Ror => "ROR",
            Rra => "RRA",
            Rti => "RTI",
            Rts => "RTS",
            Sax => "SAX",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Shx => "SHX",
            Shy => "SHY",
            Slo => "SLO",
            Sre => "SRE",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tas => "TAS",
            Tax => "TAX",
            Tay => "TAY",
            Top => "TOP",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Xaa => "XAA",
        }
    }

    /// True for the 56 documented operations; false for the 22 undocumented
    /// tags, whose execution yields an `UnimplementedOpcode` outcome.
    pub fn is_documented(self) -> bool {
        use Instruction::*;
        !matches!(
            self,
            Ahx
            | Alr
            | Anc
            | Arr
            | Axs
            | Dcp
            | Dop
            | Isc
            | Kil
            | Las
            | Lax
            | Lxa
            | Rla
            | Rra
            | Sax
            | Shx
            | Shy
            | Slo
            | Sre
            | Tas
            | Top
            | Xaa
        )
    }
}

/// One decode-table entry: everything known about an opcode byte before
/// execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// The instruction this byte performs.
    pub instruction: Instruction,
    /// How the operand bytes that follow are interpreted.
    pub mode: AddressingMode,
    /// Fixed cycle cost charged after execution.
    pub cycles: u8,
}

const fn op(instruction: Instruction, mode: AddressingMode, cycles: u8) -> Opcode {
    Opcode {
        instruction,
        mode,
        cycles,
    }
}

/// Complete 256-entry decode table indexed by opcode byte.
#[rustfmt::skip]
pub const OPCODE_TABLE: [Opcode; 256] = {
    use AddressingMode::*;
    use Instruction::*;
    [
    op(Brk, Implied, 7),                        // 0x00
    op(Ora, IndexedIndirect, 6),                // 0x01
    op(Kil, Implied, 2),                        // 0x02
    op(Slo, IndexedIndirect, 8),                // 0x03
    op(Dop, ZeroPage, 3),                       // 0x04
    op(Ora, ZeroPage, 3),                       // 0x05
    op(Asl, ZeroPage, 5),                       // 0x06
    op(Slo, ZeroPage, 5),                       // 0x07
    op(Php, Implied, 3),                        // 0x08
    op(Ora, Immediate, 2),                      // 0x09
    op(Asl, Accumulator, 2),                    // 0x0A
    op(Anc, Immediate, 2),                      // 0x0B
    op(Top, Absolute, 4),                       // 0x0C
    op(Ora, Absolute, 4),                       // 0x0D
    op(Asl, Absolute, 6),                       // 0x0E
    op(Slo, Absolute, 6),                       // 0x0F
    op(Bpl, Relative, 2),                       // 0x10
    op(Ora, IndirectIndexed, 5),                // 0x11
    op(Kil, Implied, 2),                        // 0x12
    op(Slo, IndirectIndexed, 8),                // 0x13
    op(Dop, ZeroPageX, 4),                      // 0x14
    op(Ora, ZeroPageX, 4),                      // 0x15
    op(Asl, ZeroPageX, 6),                      // 0x16
    op(Slo, ZeroPageX, 6),                      // 0x17
    op(Clc, Implied, 2),                        // 0x18
    op(Ora, AbsoluteY, 4),                      // 0x19
    op(Nop, Implied, 2),                        // 0x1A
    op(Slo, AbsoluteY, 7),                      // 0x1B
    op(Top, AbsoluteX, 4),                      // 0x1C
    op(Ora, AbsoluteX, 4),                      // 0x1D
    op(Asl, AbsoluteX, 7),                      // 0x1E
    op(Slo, AbsoluteX, 7),                      // 0x1F
    op(Jsr, Absolute, 6),                       // 0x20
    op(And, IndexedIndirect, 6),                // 0x21
    op(Kil, Implied, 2),                        // 0x22
    op(Rla, IndexedIndirect, 8),                // 0x23
    op(Bit, ZeroPage, 3),                       // 0x24
    op(And, ZeroPage, 3),                       // 0x25
    op(Rol, ZeroPage, 5),                       // 0x26
    op(Rla, ZeroPage, 5),                       // 0x27
    op(Plp, Implied, 4),                        // 0x28
    op(And, Immediate, 2),                      // 0x29
    op(Rol, Accumulator, 2),                    // 0x2A
    op(Anc, Immediate, 2),                      // 0x2B
    op(Bit, Absolute, 4),                       // 0x2C
    op(And, Absolute, 4),                       // 0x2D
    op(Rol, Absolute, 6),                       // 0x2E
    op(Rla, Absolute, 6),                       // 0x2F
    op(Bmi, Relative, 2),                       // 0x30
    op(And, IndirectIndexed, 5),                // 0x31
    op(Kil, Implied, 2),                        // 0x32
    op(Rla, IndirectIndexed, 8),                // 0x33
    op(Dop, ZeroPageX, 4),                      // 0x34
    op(And, ZeroPageX, 4),                      // 0x35
    op(Rol, ZeroPageX, 6),                      // 0x36
    op(Rla, ZeroPageX, 6),                      // 0x37
    op(Sec, Implied, 2),                        // 0x38
    op(And, AbsoluteY, 4),                      // 0x39
    op(Nop, Implied, 2),                        // 0x3A
    op(Rla, AbsoluteY, 7),                      // 0x3B
    op(Top, AbsoluteX, 4),                      // 0x3C
    op(And, AbsoluteX, 4),                      // 0x3D
    op(Rol, AbsoluteX, 7),                      // 0x3E
    op(Rla, AbsoluteX, 7),                      // 0x3F
    op(Rti, Implied, 6),                        // 0x40
    op(Eor, IndexedIndirect, 6),                // 0x41
    op(Kil, Implied, 2),                        // 0x42
    op(Sre, IndexedIndirect, 8),                // 0x43
    op(Dop, ZeroPage, 3),                       // 0x44
    op(Eor, ZeroPage, 3),                       // 0x45
    op(Lsr, ZeroPage, 5),                       // 0x46
    op(Sre, ZeroPage, 5),                       // 0x47
    op(Pha, Implied, 3),                        // 0x48
    op(Eor, Immediate, 2),                      // 0x49
    op(Lsr, Accumulator, 2),                    // 0x4A
    op(Alr, Immediate, 2),                      // 0x4B
    op(Jmp, Absolute, 3),                       // 0x4C
    op(Eor, Absolute, 4),                       // 0x4D
    op(Lsr, Absolute, 6),                       // 0x4E
    op(Sre, Absolute, 6),                       // 0x4F
    op(Bvc, Relative, 2),                       // 0x50
    op(Eor, IndirectIndexed, 5),                // 0x51
    op(Kil, Implied, 2),                        // 0x52
    op(Sre, IndirectIndexed, 8),                // 0x53
    op(Dop, ZeroPageX, 4),                      // 0x54
    op(Eor, ZeroPageX, 4),                      // 0x55
    op(Lsr, ZeroPageX, 6),                      // 0x56
    op(Sre, ZeroPageX, 6),                      // 0x57
    op(Cli, Implied, 2),                        // 0x58
    op(Eor, AbsoluteY, 4),                      // 0x59
    op(Nop, Implied, 2),                        // 0x5A
    op(Sre, AbsoluteY, 7),                      // 0x5B
    op(Top, AbsoluteX, 4),                      // 0x5C
    op(Eor, AbsoluteX, 4),                      // 0x5D
    op(Lsr, AbsoluteX, 7),                      // 0x5E
    op(Sre, AbsoluteX, 7),                      // 0x5F
    op(Rts, Implied, 6),                        // 0x60
    op(Adc, IndexedIndirect, 6),                // 0x61
    op(Kil, Implied, 2),                        // 0x62
    op(Rra, IndexedIndirect, 8),                // 0x63
    op(Dop, ZeroPage, 3),                       // 0x64
    op(Adc, ZeroPage, 3),                       // 0x65
    op(Ror, ZeroPage, 5),                       // 0x66
    op(Rra, ZeroPage, 5),                       // 0x67
    op(Pla, Implied, 4),                        // 0x68
    op(Adc, Immediate, 2),                      // 0x69
    op(Ror, Accumulator, 2),                    // 0x6A
    op(Arr, Immediate, 2),                      // 0x6B
    op(Jmp, Indirect, 5),                       // 0x6C
    op(Adc, Absolute, 4),                       // 0x6D
    op(Ror, Absolute, 6),                       // 0x6E
    op(Rra, Absolute, 6),                       // 0x6F
    op(Bvs, Relative, 2),                       // 0x70
    op(Adc, IndirectIndexed, 5),                // 0x71
    op(Kil, Implied, 2),                        // 0x72
    op(Rra, IndirectIndexed, 8),                // 0x73
    op(Dop, ZeroPageX, 4),                      // 0x74
    op(Adc, ZeroPageX, 4),                      // 0x75
    op(Ror, ZeroPageX, 6),                      // 0x76
    op(Rra, ZeroPageX, 6),                      // 0x77
    op(Sei, Implied, 2),                        // 0x78
    op(Adc, AbsoluteY, 4),                      // 0x79
    op(Nop, Implied, 2),                        // 0x7A
    op(Rra, AbsoluteY, 7),                      // 0x7B
    op(Top, AbsoluteX, 4),                      // 0x7C
    op(Adc, AbsoluteX, 4),                      // 0x7D
    op(Ror, AbsoluteX, 7),                      // 0x7E
    op(Rra, AbsoluteX, 7),                      // 0x7F
    op(Dop, Immediate, 2),                      // 0x80
    op(Sta, IndexedIndirect, 6),                // 0x81
    op(Dop, Immediate, 2),                      // 0x82
    op(Sax, IndexedIndirect, 6),                // 0x83
    op(Sty, ZeroPage, 3),                       // 0x84
    op(Sta, ZeroPage, 3),                       // 0x85
    op(Stx, ZeroPage, 3),                       // 0x86
    op(Sax, ZeroPage, 3),                       // 0x87
    op(Dey, Implied, 2),                        // 0x88
    op(Dop, Immediate, 2),                      // 0x89
    op(Txa, Implied, 2),                        // 0x8A
    op(Xaa, Immediate, 2),                      // 0x8B
    op(Sty, Absolute, 4),                       // 0x8C
    op(Sta, Absolute, 4),                       // 0x8D
    op(Stx, Absolute, 4),                       // 0x8E
    op(Sax, Absolute, 4),                       // 0x8F
    op(Bcc, Relative, 2),                       // 0x90
    op(Sta, IndirectIndexed, 6),                // 0x91
    op(Kil, Implied, 2),                        // 0x92
    op(Ahx, IndirectIndexed, 6),                // 0x93
    op(Sty, ZeroPageX, 4),                      // 0x94
    op(Sta, ZeroPageX, 4),                      // 0x95
    op(Stx, ZeroPageY, 4),                      // 0x96
    op(Sax, ZeroPageY, 4),                      // 0x97
    op(Tya, Implied, 2),                        // 0x98
    op(Sta, AbsoluteY, 5),                      // 0x99
    op(Txs, Implied, 2),                        // 0x9A
    op(Tas, AbsoluteY, 5),                      // 0x9B
    op(Shy, AbsoluteX, 5),                      // 0x9C
    op(Sta, AbsoluteX, 5),                      // 0x9D
    op(Shx, AbsoluteY, 5),                      // 0x9E
    op(Ahx, AbsoluteY, 5),                      // 0x9F
    op(Ldy, Immediate, 2),                      // 0xA0
    op(Lda, IndexedIndirect, 6),                // 0xA1
    op(Ldx, Immediate, 2),                      // 0xA2
    op(Lax, IndexedIndirect, 6),                // 0xA3
    op(Ldy, ZeroPage, 3),                       // 0xA4
    op(Lda, ZeroPage, 3),                       // 0xA5
    op(Ldx, ZeroPage, 3),                       // 0xA6
    op(Lax, ZeroPage, 3),                       // 0xA7
    op(Tay, Implied, 2),                        // 0xA8
    op(Lda, Immediate, 2),                      // 0xA9
    op(Tax, Implied, 2),                        // 0xAA
    op(Lxa, Immediate, 2),                      // 0xAB
    op(Ldy, Absolute, 4),                       // 0xAC
    op(Lda, Absolute, 4),                       // 0xAD
    op(Ldx, Absolute, 4),                       // 0xAE
    op(Lax, Absolute, 4),                       // 0xAF
    op(Bcs, Relative, 2),                       // 0xB0
    op(Lda, IndirectIndexed, 5),                // 0xB1
    op(Kil, Implied, 2),                        // 0xB2
    op(Lax, IndirectIndexed, 5),                // 0xB3
    op(Ldy, ZeroPageX, 4),                      // 0xB4
    op(Lda, ZeroPageX, 4),                      // 0xB5
    op(Ldx, ZeroPageY, 4),                      // 0xB6
    op(Lax, ZeroPageY, 4),                      // 0xB7
    op(Clv, Implied, 2),                        // 0xB8
    op(Lda, AbsoluteY, 4),                      // 0xB9
    op(Tsx, Implied, 2),                        // 0xBA
    op(Las, AbsoluteY, 4),                      // 0xBB
    op(Ldy, AbsoluteX, 4),                      // 0xBC
    op(Lda, AbsoluteX, 4),                      // 0xBD
    op(Ldx, AbsoluteY, 4),                      // 0xBE
    op(Lax, AbsoluteY, 4),                      // 0xBF
    op(Cpy, Immediate, 2),                      // 0xC0
    op(Cmp, IndexedIndirect, 6),                // 0xC1
    op(Dop, Immediate, 2),                      // 0xC2
    op(Dcp, IndexedIndirect, 8),                // 0xC3
    op(Cpy, ZeroPage, 3),                       // 0xC4
    op(Cmp, ZeroPage, 3),                       // 0xC5
    op(Dec, ZeroPage, 5),                       // 0xC6
    op(Dcp, ZeroPage, 5),                       // 0xC7
    op(Iny, Implied, 2),                        // 0xC8
    op(Cmp, Immediate, 2),                      // 0xC9
    op(Dex, Implied, 2),                        // 0xCA
    op(Axs, Immediate, 2),                      // 0xCB
    op(Cpy, Absolute, 4),                       // 0xCC
    op(Cmp, Absolute, 4),                       // 0xCD
    op(Dec, Absolute, 6),                       // 0xCE
    op(Dcp, Absolute, 6),                       // 0xCF
    op(Bne, Relative, 2),                       // 0xD0
    op(Cmp, IndirectIndexed, 5),                // 0xD1
    op(Kil, Implied, 2),                        // 0xD2
    op(Dcp, IndirectIndexed, 8),                // 0xD3
    op(Dop, ZeroPageX, 4),                      // 0xD4
    op(Cmp, ZeroPageX, 4),                      // 0xD5
    op(Dec, ZeroPageX, 6),                      // 0xD6
    op(Dcp, ZeroPageX, 6),                      // 0xD7
    op(Cld, Implied, 2),                        // 0xD8
    op(Cmp, AbsoluteY, 4),                      // 0xD9
    op(Nop, Implied, 2),                        // 0xDA
    op(Dcp, AbsoluteY, 7),                      // 0xDB
    op(Top, AbsoluteX, 4),                      // 0xDC
    op(Cmp, AbsoluteX, 4),                      // 0xDD
    op(Dec, AbsoluteX, 7),                      // 0xDE
    op(Dcp, AbsoluteX, 7),                      // 0xDF
    op(Cpx, Immediate, 2),                      // 0xE0
    op(Sbc, IndexedIndirect, 6),                // 0xE1
    op(Dop, Immediate, 2),                      // 0xE2
    op(Isc, IndexedIndirect, 8),                // 0xE3
    op(Cpx, ZeroPage, 3),                       // 0xE4
    op(Sbc, ZeroPage, 3),                       // 0xE5
    op(Inc, ZeroPage, 5),                       // 0xE6
    op(Isc, ZeroPage, 5),                       // 0xE7
    op(Inx, Implied, 2),                        // 0xE8
    op(Sbc, Immediate, 2),                      // 0xE9
    op(Nop, Implied, 2),                        // 0xEA
    op(Sbc, Immediate, 2),                      // 0xEB
    op(Cpx, Absolute, 4),                       // 0xEC
    op(Sbc, Absolute, 4),                       // 0xED
    op(Inc, Absolute, 6),                       // 0xEE
    op(Isc, Absolute, 6),                       // 0xEF
    op(Beq, Relative, 2),                       // 0xF0
    op(Sbc, IndirectIndexed, 5),                // 0xF1
    op(Kil, Implied, 2),                        // 0xF2
    op(Isc, IndirectIndexed, 8),                // 0xF3
    op(Dop, ZeroPageX, 4),                      // 0xF4
    op(Sbc, ZeroPageX, 4),                      // 0xF5
    op(Inc, ZeroPageX, 6),                      // 0xF6
    op(Isc, ZeroPageX, 6),                      // 0xF7
    op(Sed, Implied, 2),                        // 0xF8
    op(Sbc, AbsoluteY, 4),                      // 0xF9
    op(Nop, Implied, 2),                        // 0xFA
    op(Isc, AbsoluteY, 7),                      // 0xFB
    op(Top, AbsoluteX, 4),                      // 0xFC
    op(Sbc, AbsoluteX, 4),                      // 0xFD
    op(Inc, AbsoluteX, 7),                      // 0xFE
    op(Isc, AbsoluteX, 7),                      // 0xFF
    ]
};
