//! # Load and Store Instructions
//!
//! Loads set Zero and Negative from the loaded byte; stores affect no flags.

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let value = cpu.memory.read(addr.addr());
    cpu.a = value;
    cpu.status.set_zn(value);
}

pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let value = cpu.memory.read(addr.addr());
    cpu.x = value;
    cpu.status.set_zn(value);
}

pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let value = cpu.memory.read(addr.addr());
    cpu.y = value;
    cpu.status.set_zn(value);
}

pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    cpu.memory.write(addr.addr(), cpu.a);
}

pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    cpu.memory.write(addr.addr(), cpu.x);
}

pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    cpu.memory.write(addr.addr(), cpu.y);
}
