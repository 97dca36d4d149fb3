//! Tests for the RTI (Return from Interrupt) instruction.
//!
//! RTI pops the status register through the Break-clearing discipline, then
//! pops PC with no increment (unlike RTS).

use mos6502::{MemoryBus, CPU};

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = CPU::new();
    cpu.load(&[0x40]).unwrap(); // RTI
    // Hand-build an interrupt frame: PC 0x1234, status with C and N set
    cpu.memory_mut().write(0x01FD, 0x12); // PC high
    cpu.memory_mut().write(0x01FC, 0x34); // PC low
    cpu.memory_mut().write(0x01FB, 0b1010_0001); // N, bit5, C
    cpu.set_sp(0xFA);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x1234); // no +1, unlike RTS
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_rti_forces_unused_and_clears_break() {
    let mut cpu = CPU::new();
    cpu.load(&[0x40]).unwrap();
    // Frame whose status byte has Break set and Unused clear
    cpu.memory_mut().write(0x01FD, 0x06);
    cpu.memory_mut().write(0x01FC, 0x00);
    cpu.memory_mut().write(0x01FB, 0b0001_0001);
    cpu.set_sp(0xFA);

    assert!(cpu.step());

    let bits = cpu.status().bits();
    assert_eq!(bits & 0x20, 0x20, "Unused must read as 1");
    assert_eq!(bits & 0x10, 0x00, "Break must be cleared on pop");
}

#[test]
fn test_brk_rti_roundtrip() {
    let mut cpu = CPU::new();
    cpu.load(&[0x38, 0x00]).unwrap(); // SEC; BRK

    assert!(cpu.step());
    assert!(cpu.step()); // BRK pushed PC=0x0602 and status

    // Jump elsewhere and come back via RTI
    cpu.load_at(&[0x40], 0x0700).unwrap(); // RTI, PC now 0x0700

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x0602);
    assert!(cpu.flag_c());
    assert_eq!(cpu.sp(), 0xFD);
}
