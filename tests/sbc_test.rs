//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! Tests cover:
//! - Subtraction with carry (no borrow) and with borrow in
//! - Carry as the inverse-borrow flag
//! - Signed overflow in both directions

use nes6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_program(0xC000, program);
    Cpu::new(memory)
}

#[test]
fn test_sbc_basic_no_borrow() {
    let mut cpu = setup_cpu(&[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.status_mut().set_carry(true); // carry set = no borrow in

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.status().carry()); // no borrow out
    assert!(!cpu.status().zero());
    assert!(!cpu.status().overflow());
}

#[test]
fn test_sbc_borrow_in_subtracts_one_more() {
    let mut cpu = setup_cpu(&[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.status_mut().set_carry(false); // borrow in

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.status().carry());
}

#[test]
fn test_sbc_borrow_out_clears_carry() {
    let mut cpu = setup_cpu(&[0xE9, 0x20]); // SBC #$20
    cpu.set_a(0x10);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.status().carry()); // borrow happened
    assert!(cpu.status().negative());
}

#[test]
fn test_sbc_zero_result() {
    let mut cpu = setup_cpu(&[0xE9, 0x42]); // SBC #$42
    cpu.set_a(0x42);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().zero());
    assert!(cpu.status().carry());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu(&[0xE9, 0x01]); // SBC #$01
    cpu.set_a(0x80); // -128
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F); // -128 - 1 overflows to +127
    assert!(cpu.status().overflow());
    assert!(cpu.status().carry());
}

#[test]
fn test_sbc_zero_page() {
    let mut cpu = setup_cpu(&[0xE5, 0x30]); // SBC $30
    cpu.memory_mut().write(0x0030, 0x05);
    cpu.set_a(0x0A);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sbc_undocumented_alias_0xeb() {
    let mut cpu = setup_cpu(&[0xEB, 0x01]); // SBC #$01 (unofficial encoding)
    cpu.set_a(0x05);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x04);
}
