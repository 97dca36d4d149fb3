//! Tests for the eight conditional branch instructions.
//!
//! Each branch inspects one flag; the destination is the address after the
//! operand byte plus the sign-extended offset.

use mos6502::CPU;

/// Runs a single two-byte branch placed at 0x0600 and returns the PC
/// afterwards.
fn branch_pc(opcode: u8, offset: u8, prepare: impl FnOnce(&mut CPU)) -> u16 {
    let mut cpu = CPU::new();
    cpu.load(&[opcode, offset]).unwrap();
    prepare(&mut cpu);

    assert!(cpu.step());
    cpu.pc()
}

// ========== Taken / Not Taken per Flag ==========

#[test]
fn test_beq_taken_when_zero_set() {
    assert_eq!(branch_pc(0xF0, 0x04, |cpu| cpu.set_flag_z(true)), 0x0606);
}

#[test]
fn test_beq_not_taken_when_zero_clear() {
    assert_eq!(branch_pc(0xF0, 0x04, |cpu| cpu.set_flag_z(false)), 0x0602);
}

#[test]
fn test_bne_taken_when_zero_clear() {
    assert_eq!(branch_pc(0xD0, 0x04, |cpu| cpu.set_flag_z(false)), 0x0606);
}

#[test]
fn test_bne_not_taken_when_zero_set() {
    assert_eq!(branch_pc(0xD0, 0x04, |cpu| cpu.set_flag_z(true)), 0x0602);
}

#[test]
fn test_bcs_taken_when_carry_set() {
    assert_eq!(branch_pc(0xB0, 0x04, |cpu| cpu.set_flag_c(true)), 0x0606);
}

#[test]
fn test_bcc_taken_when_carry_clear() {
    assert_eq!(branch_pc(0x90, 0x04, |cpu| cpu.set_flag_c(false)), 0x0606);
}

#[test]
fn test_bcc_not_taken_when_carry_set() {
    assert_eq!(branch_pc(0x90, 0x04, |cpu| cpu.set_flag_c(true)), 0x0602);
}

#[test]
fn test_bmi_taken_when_negative_set() {
    assert_eq!(branch_pc(0x30, 0x04, |cpu| cpu.set_flag_n(true)), 0x0606);
}

#[test]
fn test_bpl_taken_when_negative_clear() {
    assert_eq!(branch_pc(0x10, 0x04, |cpu| cpu.set_flag_n(false)), 0x0606);
}

#[test]
fn test_bvs_taken_when_overflow_set() {
    assert_eq!(branch_pc(0x70, 0x04, |cpu| cpu.set_flag_v(true)), 0x0606);
}

#[test]
fn test_bvc_taken_when_overflow_clear() {
    assert_eq!(branch_pc(0x50, 0x04, |cpu| cpu.set_flag_v(false)), 0x0606);
}

// ========== Offset Arithmetic ==========

#[test]
fn test_backward_branch() {
    // Offset 0xFC is -4: from 0x0602 back to 0x05FE
    assert_eq!(branch_pc(0xF0, 0xFC, |cpu| cpu.set_flag_z(true)), 0x05FE);
}

#[test]
fn test_most_negative_offset() {
    // 0x80 is -128: 0x0602 - 128 = 0x0582
    assert_eq!(branch_pc(0xF0, 0x80, |cpu| cpu.set_flag_z(true)), 0x0582);
}

#[test]
fn test_most_positive_offset() {
    // 0x7F is +127: 0x0602 + 127 = 0x0681
    assert_eq!(branch_pc(0xF0, 0x7F, |cpu| cpu.set_flag_z(true)), 0x0681);
}

#[test]
fn test_zero_offset_lands_after_operand() {
    assert_eq!(branch_pc(0xF0, 0x00, |cpu| cpu.set_flag_z(true)), 0x0602);
}

#[test]
fn test_branch_does_not_touch_flags() {
    let mut cpu = CPU::new();
    cpu.load(&[0xF0, 0x02]).unwrap();
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);
    let status_before = cpu.status();

    assert!(cpu.step());

    assert_eq!(cpu.status(), status_before);
}
