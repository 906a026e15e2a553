//! # Trace Formatter
//!
//! Renders the fixed-width diagnostic line for the instruction the CPU is
//! about to execute, in the format popularized by the nestest golden log:
//!
//! ```text
//! C000  A2 10     LDX #$10                        A:00 X:00 Y:00 P:34 SP:FD CYC:  0
//! ```
//!
//! The line has three parts: the program counter and raw instruction bytes,
//! a disassembly chosen from one template per addressing mode (indirect
//! forms show both the pointer and the dereferenced value), and a register
//! dump starting at column 48. `CYC` is the PPU dot position derived as
//! `(cycles * 3) mod 341`; it is cosmetic and enforces nothing.
//!
//! Formatting never mutates the CPU: operand bytes and operand values are
//! peeked directly off the bus.

use crate::cpu::Cpu;
use crate::opcodes::{Instruction, OPCODE_TABLE};
use crate::{AddressingMode, MemoryBus};

/// Width of a complete trace line in characters.
pub const TRACE_LINE_WIDTH: usize = 81;

/// Column where the register dump starts.
const REGISTER_COLUMN: usize = 48;

/// PPU dots per scanline; the `CYC` counter wraps here.
const DOTS_PER_SCANLINE: u64 = 341;

/// Renders the trace line for the instruction at the current PC.
///
/// # Examples
///
/// ```
/// use nes6502::{trace_line, Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(0xC000, &[0xA2, 0x10]); // LDX #$10
/// let cpu = Cpu::new(memory);
///
/// let line = trace_line(&cpu);
/// assert!(line.starts_with("C000  A2 10     LDX #$10"));
/// assert_eq!(line.len(), 81);
/// ```
pub fn trace_line<M: MemoryBus>(cpu: &Cpu<M>) -> String {
    let pc = cpu.pc;
    let opcode = cpu.memory.read(pc);
    let entry = &OPCODE_TABLE[opcode as usize];

    let head = format!(
        "{:04X}  {:02X} {}",
        pc,
        opcode,
        disassemble(cpu, entry.instruction, entry.mode)
    );

    let ppu_dot = (cpu.cycles * 3) % DOTS_PER_SCANLINE;
    format!(
        "{:<width$}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:3}",
        head,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.status.bits(),
        cpu.sp,
        ppu_dot,
        width = REGISTER_COLUMN,
    )
}

/// Renders the operand-bytes + mnemonic + operand portion of the line.
///
/// One template per addressing mode; the byte columns are padded so the
/// mnemonic always starts at the same offset regardless of operand width.
fn disassemble<M: MemoryBus>(
    cpu: &Cpu<M>,
    instruction: Instruction,
    mode: AddressingMode,
) -> String {
    let name = instruction.mnemonic();
    let pc = cpu.pc;
    let memory = &cpu.memory;
    let op1 = memory.read(pc.wrapping_add(1));
    let op2 = memory.read(pc.wrapping_add(2));

    use AddressingMode::*;
    match mode {
        Implied => format!("       {name}"),
        Accumulator => format!("       {name} A"),
        Immediate => format!("{op1:02X}     {name} #${op1:02X}"),
        ZeroPage => {
            let val = memory.read(op1 as u16);
            format!("{op1:02X}     {name} ${op1:02X} = {val:02X}")
        }
        Absolute => {
            let addr = (op2 as u16) << 8 | op1 as u16;
            // Jump targets are code, not data; showing the byte there would
            // just be noise.
            if matches!(instruction, Instruction::Jmp | Instruction::Jsr) {
                format!("{op1:02X} {op2:02X}  {name} ${addr:04X}")
            } else {
                let val = memory.read(addr);
                format!("{op1:02X} {op2:02X}  {name} ${addr:04X} = {val:02X}")
            }
        }
        Relative => {
            let target = pc.wrapping_add(2).wrapping_add(op1 as i8 as u16);
            format!("{op1:02X}     {name} ${target:04X}")
        }
        ZeroPageX => {
            let addr = op1.wrapping_add(cpu.x);
            let val = memory.read(addr as u16);
            format!("{op1:02X}     {name} ${op1:02X},X @ {addr:02X} = {val:02X}")
        }
        ZeroPageY => {
            let addr = op1.wrapping_add(cpu.y);
            let val = memory.read(addr as u16);
            format!("{op1:02X}     {name} ${op1:02X},Y @ {addr:02X} = {val:02X}")
        }
        AbsoluteX => {
            let base = (op2 as u16) << 8 | op1 as u16;
            let addr = base.wrapping_add(cpu.x as u16);
            let val = memory.read(addr);
            format!("{op1:02X} {op2:02X}  {name} ${base:04X},X @ {addr:04X} = {val:02X}")
        }
        AbsoluteY => {
            let base = (op2 as u16) << 8 | op1 as u16;
            let addr = base.wrapping_add(cpu.y as u16);
            let val = memory.read(addr);
            format!("{op1:02X} {op2:02X}  {name} ${base:04X},Y @ {addr:04X} = {val:02X}")
        }
        Indirect => {
            let pointer = (op2 as u16) << 8 | op1 as u16;
            let target = memory.read16(pointer);
            format!("{op1:02X} {op2:02X}  {name} (${pointer:04X}) = {target:04X}")
        }
        IndirectIndexed => {
            let base = memory.zero_page_read16(op1);
            let addr = base.wrapping_add(cpu.y as u16);
            let val = memory.read(addr);
            format!("{op1:02X}     {name} (${op1:02X}),Y = {base:04X} @ {addr:04X} = {val:02X}")
        }
        IndexedIndirect => {
            let pointer = op1.wrapping_add(cpu.x);
            let addr = memory.zero_page_read16(pointer);
            let val = memory.read(addr);
            format!("{op1:02X}     {name} (${op1:02X},X) @ {pointer:02X} = {addr:04X} = {val:02X}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cpu, FlatMemory};

    fn cpu_with(program: &[u8]) -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load_program(0xC000, program);
        Cpu::new(memory)
    }

    #[test]
    fn immediate_line_matches_reference_format() {
        let cpu = cpu_with(&[0xA2, 0x10]); // LDX #$10
        assert_eq!(
            trace_line(&cpu),
            "C000  A2 10     LDX #$10                        A:00 X:00 Y:00 P:34 SP:FD CYC:  0"
        );
    }

    #[test]
    fn every_line_is_exactly_81_chars() {
        let programs: &[&[u8]] = &[
            &[0xEA],             // NOP, implied
            &[0x0A],             // ASL A
            &[0xA9, 0x42],       // LDA #$42
            &[0xA5, 0x10],       // LDA $10
            &[0xAD, 0x00, 0x02], // LDA $0200
            &[0xD0, 0xFE],       // BNE
            &[0xB5, 0x10],       // LDA $10,X
            &[0xB6, 0x10],       // LDX $10,Y
            &[0xBD, 0x00, 0x02], // LDA $0200,X
            &[0xB9, 0x00, 0x02], // LDA $0200,Y
            &[0x6C, 0x00, 0x02], // JMP ($0200)
            &[0xB1, 0x40],       // LDA ($40),Y
            &[0xA1, 0x40],       // LDA ($40,X)
        ];
        for program in programs {
            let cpu = cpu_with(program);
            let line = trace_line(&cpu);
            assert_eq!(line.len(), TRACE_LINE_WIDTH, "line: {line:?}");
        }
    }

    #[test]
    fn jump_targets_omit_the_dereferenced_byte() {
        let cpu = cpu_with(&[0x4C, 0x00, 0xC0]); // JMP $C000
        let line = trace_line(&cpu);
        assert!(line.contains("JMP $C000 "), "line: {line:?}");
        assert!(!line.contains("JMP $C000 ="), "line: {line:?}");
    }

    #[test]
    fn relative_target_is_sign_extended() {
        let cpu = cpu_with(&[0xD0, 0xFC]); // BNE -4
        let line = trace_line(&cpu);
        assert!(line.contains("BNE $BFFE"), "line: {line:?}");
    }

    #[test]
    fn indirect_indexed_shows_pointer_base_and_value() {
        let mut cpu = cpu_with(&[0xB1, 0x40]); // LDA ($40),Y
        cpu.memory_mut().write(0x0040, 0x00);
        cpu.memory_mut().write(0x0041, 0x02);
        cpu.set_y(0x05);
        cpu.memory_mut().write(0x0205, 0x99);
        let line = trace_line(&cpu);
        assert!(
            line.contains("LDA ($40),Y = 0200 @ 0205 = 99"),
            "line: {line:?}"
        );
    }

    #[test]
    fn cycle_counter_wraps_at_scanline_width() {
        let mut cpu = cpu_with(&[0xEA]);
        cpu.cycles = 114; // 114 * 3 = 342, one past a full scanline
        let line = trace_line(&cpu);
        assert!(line.ends_with("CYC:  1"), "line: {line:?}");
    }
}
