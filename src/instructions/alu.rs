//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, BIT, and the
//! compares CMP, CPX, CPY.
//!
//! ADC and SBC share one nine-bit adder core on the CPU
//! ([`CPU::add_with_carry`](crate::CPU)); SBC is ADC of the operand's
//! complement. Decimal mode is stored but deliberately not honoured.

use crate::cpu::Target;
use crate::{MemoryBus, Status, CPU};

/// ADC - Add with Carry.
///
/// Adds the operand and the carry flag to the accumulator. Carry is bit 8 of
/// the nine-bit sum; Overflow is set when both operands share a sign that
/// the result does not.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.add_with_carry(value);
}

/// SBC - Subtract with Carry.
///
/// `A - m - (1 - C)`, computed as `A + !m + C` through the ADC core so both
/// instructions agree on every flag.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.add_with_carry(!value);
}

/// AND - Logical AND with the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.a &= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// ORA - Logical inclusive OR with the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.a |= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// EOR - Exclusive OR with the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.a ^= value;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// BIT - Bit test.
///
/// Z comes from `A & m`; V and N come straight from bits 6 and 7 of the
/// memory operand. The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;

    cpu.status.set(Status::ZERO, value & cpu.a == 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
}

/// CMP - Compare with the accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    let register = cpu.a;
    cpu.compare(register, value);
}

/// CPX - Compare with the X register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    let register = cpu.x;
    cpu.compare(register, value);
}

/// CPY - Compare with the Y register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    let register = cpu.y;
    cpu.compare(register, value);
}
