//! # Arithmetic and Logic Instructions
//!
//! ADC, SBC, the three bitwise operations, BIT and the three compares.
//! The carry/overflow formulas reproduce NMOS hardware exactly:
//!
//! - ADC: carry out when the widened sum exceeds 0xFF; overflow when both
//!   inputs share a sign and the result's sign differs from A's.
//! - SBC: borrow is the inverted carry; carry out when the widened signed
//!   result is non-negative; overflow when the inputs' signs differ and the
//!   result's sign differs from A's.

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::MemoryBus;

pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let a = cpu.a;
    let operand = cpu.memory.read(addr.addr());
    let carry_in = cpu.status.carry() as u16;

    let result = a as u16 + operand as u16 + carry_in;
    let truncated = result as u8;

    cpu.a = truncated;
    cpu.status.set_carry(result > 0xFF);
    cpu.status
        .set_overflow((a ^ operand) & 0x80 == 0 && (truncated ^ a) & 0x80 != 0);
    cpu.status.set_zn(truncated);
}

pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let a = cpu.a;
    let operand = cpu.memory.read(addr.addr());
    let borrow = 1 - cpu.status.carry() as i16;

    let result = a as i16 - operand as i16 - borrow;
    let truncated = result as u8;

    cpu.a = truncated;
    cpu.status.set_carry(result >= 0);
    cpu.status
        .set_overflow((a ^ operand) & 0x80 != 0 && (truncated ^ a) & 0x80 != 0);
    cpu.status.set_zn(truncated);
}

pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let result = cpu.a & cpu.memory.read(addr.addr());
    cpu.a = result;
    cpu.status.set_zn(result);
}

pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let result = cpu.a | cpu.memory.read(addr.addr());
    cpu.a = result;
    cpu.status.set_zn(result);
}

pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let result = cpu.a ^ cpu.memory.read(addr.addr());
    cpu.a = result;
    cpu.status.set_zn(result);
}

/// BIT leaves A untouched: Z from A & M, V and N copied straight out of the
/// operand's bits 6 and 7.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let value = cpu.memory.read(addr.addr());
    cpu.status.set_zero(value & cpu.a == 0);
    cpu.status.set_overflow(value & 0x40 != 0);
    cpu.status.set_negative(value & 0x80 != 0);
}

/// Shared compare: carry when operand <= register, Z/N from the wrapped
/// difference. No register is mutated.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, operand: u8) {
    let diff = register.wrapping_sub(operand);
    cpu.status.set_carry(operand <= register);
    cpu.status.set_zn(diff);
}

pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let operand = cpu.memory.read(addr.addr());
    let register = cpu.a;
    compare(cpu, register, operand);
}

pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let operand = cpu.memory.read(addr.addr());
    let register = cpu.x;
    compare(cpu, register, operand);
}

pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    let operand = cpu.memory.read(addr.addr());
    let register = cpu.y;
    compare(cpu, register, operand);
}
