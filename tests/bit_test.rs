//! Tests for the BIT (Bit Test) instruction.
//!
//! Z comes from `A & m`; V and N mirror bits 6 and 7 of the memory operand;
//! the accumulator is never modified.

use mos6502::{MemoryBus, CPU};

#[test]
fn test_bit_zero_from_accumulator_mask() {
    let mut cpu = CPU::new();
    cpu.load(&[0x24, 0x10]).unwrap(); // BIT $10
    cpu.memory_mut().write(0x0010, 0x0F);
    cpu.set_a(0xF0);

    assert!(cpu.step());

    assert!(cpu.flag_z()); // 0xF0 & 0x0F == 0
    assert_eq!(cpu.a(), 0xF0); // A untouched
}

#[test]
fn test_bit_nonzero_mask_clears_z() {
    let mut cpu = CPU::new();
    cpu.load(&[0x24, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0x18);
    cpu.set_a(0x08);

    assert!(cpu.step());

    assert!(!cpu.flag_z());
}

#[test]
fn test_bit_copies_bits_six_and_seven() {
    let mut cpu = CPU::new();
    cpu.load(&[0x24, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0b1100_0000);
    cpu.set_a(0x00);

    assert!(cpu.step());

    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(cpu.flag_z()); // A & m == 0
}

#[test]
fn test_bit_v_and_n_track_memory_not_result() {
    // N/V come from the operand even when the masked result is nonzero
    let mut cpu = CPU::new();
    cpu.load(&[0x24, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0b0100_0001);
    cpu.set_a(0x01);

    assert!(cpu.step());

    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_bit_absolute() {
    let mut cpu = CPU::new();
    cpu.load(&[0x2C, 0x00, 0x44]).unwrap(); // BIT $4400
    cpu.memory_mut().write(0x4400, 0b1000_0000);
    cpu.set_a(0xFF);

    assert!(cpu.step());

    assert!(cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x0603);
}
