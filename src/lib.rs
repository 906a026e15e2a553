//! # 6502 CPU Core for NES Emulation
//!
//! An instruction-accurate NMOS 6502 execution engine: the CPU half of a
//! classic 8-bit console. The crate decodes all 256 opcode bytes, resolves
//! the 13 addressing modes, executes the 56 documented instructions with
//! hardware-exact flag semantics, and renders a fixed-format trace line per
//! instruction so execution can be verified byte-for-byte against a golden
//! reference log.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! // LDA #$42 at the power-on program counter
//! memory.load_program(0xC000, &[0xA9, 0x42]);
//!
//! let mut cpu = Cpu::new(memory);
//! assert_eq!(cpu.pc(), 0xC000);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from the memory implementation
//!   via the [`MemoryBus`] trait; the bus is owned externally and the core
//!   never allocates or frees it.
//! - **Table-driven decode**: every opcode byte maps through the immutable
//!   [`OPCODE_TABLE`] to an [`Instruction`] tag, an [`AddressingMode`] and a
//!   fixed cycle cost. There is no illegal-instruction trap.
//! - **Verifiability**: [`trace_line`] produces the diagnostic line used by
//!   the [`verify`] harness to diff live execution against a reference log.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, fetch-decode-execute, stack discipline
//! - `status` - packed status register with masked flag accessors
//! - `addressing` - addressing modes and resolved operand locations
//! - `opcodes` - instruction tags and the 256-entry decode table
//! - `memory` - `MemoryBus` trait and a flat test implementation
//! - `trace` - fixed-format trace line formatter
//! - `verify` - golden-log verification harness
//! - `debugger` - line-mode debug command semantics

pub mod addressing;
pub mod cpu;
pub mod debugger;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod trace;
pub mod verify;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, ResolvedAddress};
pub use cpu::Cpu;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, Opcode, OPCODE_TABLE};
pub use status::Status;
pub use trace::{trace_line, TRACE_LINE_WIDTH};
pub use verify::{verify_lines, verify_log, Mismatch, VerifyReport};

/// Errors that can occur during CPU execution.
///
/// Execution never faults on unknown bytes: every opcode decodes to a tag
/// and addressing mode, and the clock and program counter advance even when
/// the instruction body is unimplemented. The error exists so callers (and
/// tests) can see exactly which undocumented opcodes remain unfinished
/// instead of having them masquerade as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// An undocumented opcode decoded correctly but has no execution body.
    UnimplementedOpcode {
        /// The raw opcode byte that was fetched.
        opcode: u8,
        /// The instruction tag the byte decoded to.
        instruction: Instruction,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode {
                opcode,
                instruction,
            } => {
                write!(
                    f,
                    "Opcode 0x{:02X} ({}) is not implemented",
                    opcode,
                    instruction.mnemonic()
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
