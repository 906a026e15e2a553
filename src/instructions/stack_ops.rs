//! # Stack Instructions
//!
//! PHP pushes the status byte with the two non-existent bits forced to 1;
//! PLP writes every status bit except those two, which keep their prior
//! value. PLA is the only pull that touches flags (Zero/Negative).

use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let a = cpu.a;
    cpu.push(a);
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.status.set_zn(value);
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.status.push_value();
    cpu.push(value);
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.pull();
    cpu.status.pull_from(value);
}
