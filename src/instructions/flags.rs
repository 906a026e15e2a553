//! # Flag Instructions
//!
//! Each sets or clears exactly one status bit. There is no SEV; Overflow
//! can only be cleared directly.

use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_carry(false);
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_carry(true);
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_decimal(false);
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_decimal(true);
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_interrupt_disable(false);
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_interrupt_disable(true);
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set_overflow(false);
}
