//! # CPU State and Execution
//!
//! The [`Cpu`] struct holds the register file and drives the
//! fetch-decode-execute loop. One [`step`] executes exactly one instruction:
//! fetch the opcode, look it up in the decode table, resolve the addressing
//! mode (advancing PC past the operand bytes), dispatch to the instruction
//! handler, then charge the opcode's fixed cycle cost. The whole sequence is
//! synchronous with no suspension points, and instructions execute in strict
//! program order.
//!
//! [`step`]: Cpu::step
//!
//! ## Register file
//!
//! - **PC**: 16-bit program counter, always interpreted modulo 65536
//! - **SP**: 8-bit stack pointer into page 0x0100-0x01FF, wraps modulo 256
//! - **A/X/Y**: 8-bit general registers
//! - **Status**: packed flag byte (see [`Status`])
//! - **Cycle counter**: monotonically increasing; feeds the trace line's
//!   cosmetic PPU-dot position and enforces nothing

use crate::addressing::{AddressingMode, ResolvedAddress};
use crate::status::Status;
use crate::{instructions, ExecutionError, MemoryBus, OPCODE_TABLE};

/// Base address of the stack page.
pub(crate) const STACK_PAGE: u16 = 0x0100;

/// Program counter value after power-on or reset.
pub const RESET_PC: u16 = 0xC000;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait; the
/// bus is moved in at construction and accessible through
/// [`memory`]/[`memory_mut`].
///
/// [`memory`]: Cpu::memory
/// [`memory_mut`]: Cpu::memory_mut
///
/// # Examples
///
/// ```
/// use nes6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(0xC000, &[0xE8]); // INX
///
/// let mut cpu = Cpu::new(memory);
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 1);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct Cpu<M: MemoryBus> {
    pub(crate) pc: u16,
    pub(crate) sp: u8,
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) status: Status,
    pub(crate) cycles: u64,
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU owning the given memory bus, in power-on state.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            status: Status::power_on(),
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Restores the register file to power-on state.
    ///
    /// PC=0xC000, SP=0xFD, A=X=Y=0, status with interrupt disable and the
    /// two non-existent bits set, cycle counter cleared. The memory bus is
    /// not touched; callers reset it separately when they want a full
    /// power cycle.
    pub fn reset(&mut self) {
        self.pc = RESET_PC;
        self.sp = 0xFD;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = Status::power_on();
        self.cycles = 0;
    }

    /// Fetches the byte at PC and advances PC past it.
    fn next_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Fetches a little-endian 16-bit value at PC and advances PC past it.
    fn next_word(&mut self) -> u16 {
        let value = self.memory.read16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Resolves an addressing mode into an operand location, consuming the
    /// operand bytes at PC.
    ///
    /// For Immediate the returned address is the operand's own location in
    /// the instruction stream; callers dereference it like any other memory
    /// operand. For Relative the signed offset is applied to the PC value
    /// after the offset byte has been consumed.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> ResolvedAddress {
        use AddressingMode::*;
        match mode {
            Implied | Accumulator => ResolvedAddress::register(),
            Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                ResolvedAddress::memory(addr)
            }
            ZeroPage => ResolvedAddress::memory(self.next_byte() as u16),
            Absolute => ResolvedAddress::memory(self.next_word()),
            Relative => {
                let offset = self.next_byte() as i8;
                ResolvedAddress::memory(self.pc.wrapping_add(offset as u16))
            }
            ZeroPageX => {
                let base = self.next_byte();
                ResolvedAddress::memory(base.wrapping_add(self.x) as u16)
            }
            ZeroPageY => {
                let base = self.next_byte();
                ResolvedAddress::memory(base.wrapping_add(self.y) as u16)
            }
            AbsoluteX => {
                let base = self.next_word();
                ResolvedAddress::memory(base.wrapping_add(self.x as u16))
            }
            AbsoluteY => {
                let base = self.next_word();
                ResolvedAddress::memory(base.wrapping_add(self.y as u16))
            }
            Indirect => {
                let pointer = self.next_word();
                ResolvedAddress::memory(self.memory.read16(pointer))
            }
            IndirectIndexed => {
                let pointer = self.next_byte();
                let base = self.memory.zero_page_read16(pointer);
                ResolvedAddress::memory(base.wrapping_add(self.y as u16))
            }
            IndexedIndirect => {
                let pointer = self.next_byte().wrapping_add(self.x);
                ResolvedAddress::memory(self.memory.zero_page_read16(pointer))
            }
        }
    }

    /// Executes exactly one instruction.
    ///
    /// The clock advances by the opcode's fixed cost whether or not the
    /// instruction body is implemented, and PC always ends up past the
    /// operand bytes, so execution can continue over undocumented opcodes.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.next_byte();
        let entry = &OPCODE_TABLE[opcode as usize];
        let addr = self.resolve(entry.mode);

        let result = instructions::execute(self, opcode, entry.instruction, addr);
        self.cycles += entry.cycles as u64;
        result
    }

    // ========== Stack operations ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE + self.sp as u16)
    }

    pub(crate) fn pull16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        hi << 8 | lo
    }

    // ========== Register accessors ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns total cycles executed since power-on or reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the packed status register wholesale (no masking; this is a
    /// debugging accessor, not the PLP path).
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Mutable access to the status register's flag accessors.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Renders the diagnostic trace line for the instruction about to
    /// execute. See [`crate::trace`].
    pub fn trace_line(&self) -> String {
        crate::trace::trace_line(self)
    }
}
