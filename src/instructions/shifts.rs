//! # Shift and Rotate Instructions
//!
//! All four operate on the accumulator when the resolved address has no
//! memory operand (Accumulator mode), otherwise read-modify-write on the
//! addressed cell. Carry takes the bit shifted off; the rotates fold the
//! previous carry into the vacated bit. Zero and Negative come from the
//! result.

use crate::addressing::ResolvedAddress;
use crate::cpu::Cpu;
use crate::status::Status;
use crate::MemoryBus;

/// Applies a shift to the accumulator or the addressed memory cell and
/// recomputes Z/N from the result.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    addr: ResolvedAddress,
    op: impl FnOnce(&mut Status, u8) -> u8,
) {
    let result = if addr.is_register_only() {
        let result = op(&mut cpu.status, cpu.a);
        cpu.a = result;
        result
    } else {
        let value = cpu.memory.read(addr.addr());
        let result = op(&mut cpu.status, value);
        cpu.memory.write(addr.addr(), result);
        result
    };
    cpu.status.set_zn(result);
}

pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    read_modify_write(cpu, addr, |status, value| {
        status.set_carry(value & 0x80 != 0);
        value << 1
    });
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    read_modify_write(cpu, addr, |status, value| {
        status.set_carry(value & 0x01 != 0);
        value >> 1
    });
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    read_modify_write(cpu, addr, |status, value| {
        let carry_in = status.carry() as u8;
        status.set_carry(value & 0x80 != 0);
        value << 1 | carry_in
    });
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, addr: ResolvedAddress) {
    read_modify_write(cpu, addr, |status, value| {
        let carry_in = status.carry() as u8;
        status.set_carry(value & 0x01 != 0);
        value >> 1 | carry_in << 7
    });
}
