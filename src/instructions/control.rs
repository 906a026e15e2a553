//! # Jumps, Calls and Interrupt Returns
//!
//! JSR pushes PC-1 and RTS compensates with +1 on the way back out; RTI
//! does not adjust, because the pushed value is already the resume address.
//! BRK is a composite of the JSR push path aimed at the IRQ vector
//! location, the PHP status push, and SEI.

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::instructions::{flags, stack_ops};
use crate::MemoryBus;

/// Location of the IRQ/BRK vector.
const IRQ_VECTOR: u16 = 0xFFFE;

pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    cpu.pc = addr.addr();
}

pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push16(return_addr);
    cpu.pc = addr.addr();
}

pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pull16().wrapping_add(1);
}

pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    stack_ops::plp(cpu);
    cpu.pc = cpu.pull16();
}

pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) {
    jsr(cpu, ResolvedAddress::memory(IRQ_VECTOR));
    stack_ops::php(cpu);
    flags::sei(cpu);
}

pub(crate) fn nop<M: MemoryBus>(_cpu: &mut Cpu<M>) {}
