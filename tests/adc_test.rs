//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Basic addition with and without carry-in
//! - Carry, Zero, Overflow and Negative flag formulas
//! - The classic signed-overflow corner cases
//! - A sample of addressing modes

use nes6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_program(0xC000, program);
    Cpu::new(memory)
}

// ========== Basic Operation ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu(&[0x69, 0x10]); // ADC #$10
    cpu.set_a(0x50);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x60);
    assert!(!cpu.status().carry());
    assert!(!cpu.status().zero());
    assert!(!cpu.status().overflow());
    assert!(!cpu.status().negative());
    assert_eq!(cpu.pc(), 0xC002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu(&[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x16);
    assert!(!cpu.status().carry());
}

// ========== Flag Corner Cases ==========

#[test]
fn test_adc_carry_and_zero_on_wraparound() {
    let mut cpu = setup_cpu(&[0x69, 0x01]); // ADC #$01
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().carry());
    assert!(cpu.status().zero());
    assert!(!cpu.status().overflow()); // -1 + 1 = 0 is not signed overflow
}

#[test]
fn test_adc_signed_overflow_positive() {
    let mut cpu = setup_cpu(&[0x69, 0x01]); // ADC #$01
    cpu.set_a(0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80); // +127 + 1 overflows to -128
    assert!(cpu.status().overflow());
    assert!(cpu.status().negative());
    assert!(!cpu.status().carry());
}

#[test]
fn test_adc_signed_overflow_negative() {
    let mut cpu = setup_cpu(&[0x69, 0xFF]); // ADC #$FF (-1)
    cpu.set_a(0x80); // -128

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F); // -128 + -1 overflows to +127
    assert!(cpu.status().overflow());
    assert!(cpu.status().carry());
    assert!(!cpu.status().negative());
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu(&[0x69, 0xFF]); // ADC #$FF (-1)
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0F);
    assert!(!cpu.status().overflow());
    assert!(cpu.status().carry());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu(&[0x65, 0x42]); // ADC $42
    cpu.memory_mut().write(0x0042, 0x20);
    cpu.set_a(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x25);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_adc_absolute_x() {
    let mut cpu = setup_cpu(&[0x7D, 0x00, 0x02]); // ADC $0200,X
    cpu.set_x(0x05);
    cpu.memory_mut().write(0x0205, 0x11);
    cpu.set_a(0x11);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x22);
    assert_eq!(cpu.cycles(), 4); // no page-cross penalty modeled
}

#[test]
fn test_adc_indirect_indexed() {
    let mut cpu = setup_cpu(&[0x71, 0x40]); // ADC ($40),Y
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x03);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0302, 0x07);
    cpu.set_a(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x08);
}
