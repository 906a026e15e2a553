//! # Register Transfer Instructions
//!
//! Every transfer sets Zero/Negative from the copied value except TXS,
//! which moves X into the stack pointer without touching flags.

use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
}
