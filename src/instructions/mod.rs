//! # Instruction Implementations
//!
//! One module per instruction category, each holding small handler
//! functions over `(cpu, resolved address)`. Dispatch is a closed match on
//! the instruction tag; the 22 undocumented tags fall through to a distinct
//! "unimplemented" outcome rather than a silent no-op, so tests can assert
//! exactly which opcodes remain unfinished.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **inc_dec**: INC, DEC, INX, DEX, INY, DEY
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack_ops**: PHA, PLA, PHP, PLP
//! - **flags**: CLC, SEC, CLD, SED, CLI, SEI, CLV
//! - **transfer**: TAX, TAY, TSX, TXA, TXS, TYA

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack_ops;
pub(crate) mod transfer;

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus};

/// Dispatches one decoded instruction to its handler.
///
/// Never fatal: undocumented tags report `UnimplementedOpcode` and the
/// caller keeps going (the clock and PC have already moved on).
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    instruction: Instruction,
    addr: ResolvedAddress,
) -> Result<(), ExecutionError> {
    use Instruction::*;
    match instruction {
        Lda => load_store::lda(cpu, addr),
        Ldx => load_store::ldx(cpu, addr),
        Ldy => load_store::ldy(cpu, addr),
        Sta => load_store::sta(cpu, addr),
        Stx => load_store::stx(cpu, addr),
        Sty => load_store::sty(cpu, addr),

        Adc => alu::adc(cpu, addr),
        Sbc => alu::sbc(cpu, addr),
        And => alu::and(cpu, addr),
        Ora => alu::ora(cpu, addr),
        Eor => alu::eor(cpu, addr),
        Bit => alu::bit(cpu, addr),
        Cmp => alu::cmp(cpu, addr),
        Cpx => alu::cpx(cpu, addr),
        Cpy => alu::cpy(cpu, addr),

        Asl => shifts::asl(cpu, addr),
        Lsr => shifts::lsr(cpu, addr),
        Rol => shifts::rol(cpu, addr),
        Ror => shifts::ror(cpu, addr),

        Inc => inc_dec::inc(cpu, addr),
        Dec => inc_dec::dec(cpu, addr),
        Inx => inc_dec::inx(cpu),
        Dex => inc_dec::dex(cpu),
        Iny => inc_dec::iny(cpu),
        Dey => inc_dec::dey(cpu),

        Bcc => branches::bcc(cpu, addr),
        Bcs => branches::bcs(cpu, addr),
        Beq => branches::beq(cpu, addr),
        Bne => branches::bne(cpu, addr),
        Bmi => branches::bmi(cpu, addr),
        Bpl => branches::bpl(cpu, addr),
        Bvc => branches::bvc(cpu, addr),
        Bvs => branches::bvs(cpu, addr),

        Jmp => control::jmp(cpu, addr),
        Jsr => control::jsr(cpu, addr),
        Rts => control::rts(cpu),
        Rti => control::rti(cpu),
        Brk => control::brk(cpu),
        Nop => control::nop(cpu),

        Pha => stack_ops::pha(cpu),
        Pla => stack_ops::pla(cpu),
        Php => stack_ops::php(cpu),
        Plp => stack_ops::plp(cpu),

        Clc => flags::clc(cpu),
        Sec => flags::sec(cpu),
        Cld => flags::cld(cpu),
        Sed => flags::sed(cpu),
        Cli => flags::cli(cpu),
        Sei => flags::sei(cpu),
        Clv => flags::clv(cpu),

        Tax => transfer::tax(cpu),
        Tay => transfer::tay(cpu),
        Tsx => transfer::tsx(cpu),
        Txa => transfer::txa(cpu),
        Txs => transfer::txs(cpu),
        Tya => transfer::tya(cpu),

        Ahx | Alr | Anc | Arr | Axs | Dcp | Dop | Isc | Kil | Las | Lax | Lxa | Rla | Rra
        | Sax | Shx | Shy | Slo | Sre | Tas | Top | Xaa => {
            return Err(ExecutionError::UnimplementedOpcode {
                opcode,
                instruction,
            });
        }
    }
    Ok(())
}
