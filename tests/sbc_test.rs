//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! SBC is ADC of the operand's complement: with C set there is no borrow,
//! with C clear an extra 1 is subtracted.

use mos6502::{MemoryBus, CPU};

#[test]
fn test_sbc_basic_no_borrow() {
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xA9, 0x05, 0xE9, 0x03]).unwrap(); // SEC; LDA #$05; SBC #$03

    assert!(cpu.step());
    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c()); // no borrow
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_with_borrow_pending() {
    // C clear subtracts one more
    let mut cpu = CPU::new();
    cpu.load(&[0xE9, 0x03]).unwrap();
    cpu.set_a(0x05);

    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    // 0x03 - 0x05 underflows: carry clears, result wraps
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE9, 0x05]).unwrap(); // SEC; SBC #$05
    cpu.set_a(0x03);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0xFE);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_to_zero() {
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE9, 0x42]).unwrap();
    cpu.set_a(0x42);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    // 0x80 (-128) - 0x01 = 0x7F: negative minus positive turning positive
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE9, 0x01]).unwrap();
    cpu.set_a(0x80);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_no_overflow_same_signs() {
    // 0x50 - 0x10: both positive, no signed overflow possible
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE9, 0x10]).unwrap();
    cpu.set_a(0x50);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x40);
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_zero_page() {
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE5, 0x10]).unwrap(); // SEC; SBC $10
    cpu.memory_mut().write(0x0010, 0x22);
    cpu.set_a(0x55);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_sbc_absolute() {
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xED, 0x00, 0x20]).unwrap(); // SEC; SBC $2000
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_a(0x10);

    assert!(cpu.step());
    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x0F);
}

#[test]
fn test_sbc_adc_restore() {
    // SEC; SBC #$17; CLC... ADC with the flag state SBC left behind
    // restores A when the same operand is added back with matching carry
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0xE9, 0x17, 0x18, 0x69, 0x17]).unwrap();
    cpu.set_a(0x40);

    assert!(cpu.step()); // SEC
    assert!(cpu.step()); // SBC
    assert_eq!(cpu.a(), 0x29);

    assert!(cpu.step()); // CLC
    assert!(cpu.step()); // ADC
    assert_eq!(cpu.a(), 0x40);
}
