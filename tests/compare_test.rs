//! Tests for the compare instructions (CMP, CPX, CPY) and BIT.
//!
//! Compares never mutate the register; carry means "register >= operand".
//! BIT takes Zero from A AND M but Overflow and Negative straight from the
//! operand's bits 6 and 7.

use nes6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_program(0xC000, program);
    Cpu::new(memory)
}

// ========== CMP / CPX / CPY ==========

#[test]
fn test_cmp_equal_sets_zero_and_carry() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]); // CMP #$42
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42); // unchanged
    assert!(cpu.status().zero());
    assert!(cpu.status().carry());
    assert!(!cpu.status().negative());
}

#[test]
fn test_cmp_greater_sets_carry_only() {
    let mut cpu = setup_cpu(&[0xC9, 0x10]); // CMP #$10
    cpu.set_a(0x50);

    cpu.step().unwrap();

    assert!(cpu.status().carry());
    assert!(!cpu.status().zero());
}

#[test]
fn test_cmp_less_clears_carry_sets_negative() {
    let mut cpu = setup_cpu(&[0xC9, 0x50]); // CMP #$50
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert!(!cpu.status().carry());
    assert!(!cpu.status().zero());
    assert!(cpu.status().negative()); // 0x10 - 0x50 = 0xC0
}

#[test]
fn test_cpx_and_cpy() {
    let mut cpu = setup_cpu(&[0xE0, 0x05, 0xC0, 0x09]); // CPX #$05; CPY #$09
    cpu.set_x(0x05);
    cpu.set_y(0x08);

    cpu.step().unwrap();
    assert!(cpu.status().zero());
    assert!(cpu.status().carry());

    cpu.step().unwrap();
    assert!(!cpu.status().zero());
    assert!(!cpu.status().carry()); // Y < operand
}

// ========== Logical Operations ==========

#[test]
fn test_and_ora_eor() {
    let mut cpu = setup_cpu(&[
        0x29, 0x0F, // AND #$0F
        0x09, 0xF0, // ORA #$F0
        0x49, 0xFF, // EOR #$FF
    ]);
    cpu.set_a(0x3C);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x0C);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xFC);
    assert!(cpu.status().negative());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x03);
    assert!(!cpu.status().negative());
}

// ========== BIT ==========

#[test]
fn test_bit_zero_from_and_flags_from_operand() {
    let mut cpu = setup_cpu(&[0x24, 0x10]); // BIT $10
    cpu.memory_mut().write(0x0010, 0xC0); // bits 7 and 6 set
    cpu.set_a(0x0F);

    cpu.step().unwrap();

    assert!(cpu.status().zero()); // 0x0F & 0xC0 == 0
    assert!(cpu.status().overflow()); // operand bit 6
    assert!(cpu.status().negative()); // operand bit 7
    assert_eq!(cpu.a(), 0x0F); // A untouched
}

#[test]
fn test_bit_nonzero_intersection() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x02]); // BIT $0200
    cpu.memory_mut().write(0x0200, 0x01);
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert!(!cpu.status().zero());
    assert!(!cpu.status().overflow());
    assert!(!cpu.status().negative());
}
