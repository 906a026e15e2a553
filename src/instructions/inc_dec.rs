//! # Increment and Decrement Instructions
//!
//! All wrap modulo 256 and set Zero/Negative; the memory variants are
//! read-modify-write.

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let result = cpu.memory.read(addr.addr()).wrapping_add(1);
    cpu.memory.write(addr.addr(), result);
    cpu.status.set_zn(result);
}

pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let result = cpu.memory.read(addr.addr()).wrapping_sub(1);
    cpu.memory.write(addr.addr(), result);
    cpu.status.set_zn(result);
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
}
