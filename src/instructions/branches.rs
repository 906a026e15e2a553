//! # Branch Instructions
//!
//! A branch either assigns PC to the resolved target or leaves PC where the
//! address resolver already put it (just past the two-byte instruction).

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::MemoryBus;

fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress, condition: bool) {
    if condition {
        cpu.pc = addr.addr();
    }
}

pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = !cpu.status.carry();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = cpu.status.carry();
    branch_if(cpu, addr, taken);
}

pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = cpu.status.zero();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = !cpu.status.zero();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = cpu.status.negative();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = !cpu.status.negative();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = !cpu.status.overflow();
    branch_if(cpu, addr, taken);
}

pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let taken = cpu.status.overflow();
    branch_if(cpu, addr, taken);
}
