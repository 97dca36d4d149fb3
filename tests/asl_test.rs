//! Tests for the ASL (Arithmetic Shift Left) instruction.

use mos6502::{MemoryBus, CPU};

#[test]
fn test_asl_accumulator() {
    let mut cpu = CPU::new();
    cpu.load(&[0x0A]).unwrap(); // ASL A
    cpu.set_a(0b0100_0001);

    assert!(cpu.step());

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_asl_carries_out_bit_seven() {
    let mut cpu = CPU::new();
    cpu.load(&[0x0A]).unwrap();
    cpu.set_a(0b1000_0000);

    assert!(cpu.step());

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_asl_zero_page_writes_back() {
    let mut cpu = CPU::new();
    cpu.load(&[0x06, 0x20]).unwrap(); // ASL $20
    cpu.memory_mut().write(0x0020, 0x41);

    assert!(cpu.step());

    assert_eq!(cpu.memory().read_raw(0x0020), 0x82);
    assert_eq!(cpu.a(), 0x00); // accumulator untouched
    assert!(cpu.flag_n());
}

#[test]
fn test_asl_absolute_x() {
    let mut cpu = CPU::new();
    cpu.load(&[0x1E, 0x00, 0x30]).unwrap(); // ASL $3000,X
    cpu.memory_mut().write(0x3002, 0x01);
    cpu.set_x(0x02);

    assert!(cpu.step());

    assert_eq!(cpu.memory().read_raw(0x3002), 0x02);
    assert!(!cpu.flag_c());
}
