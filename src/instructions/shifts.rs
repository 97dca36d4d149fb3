//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each reads the operand, moves the outgoing bit into
//! Carry, and writes the result back through the same target - memory for
//! the addressed modes, register A for the Accumulator mode.

use crate::cpu::Target;
use crate::{MemoryBus, Status, CPU};

/// ASL - Arithmetic Shift Left.
///
/// Carry takes bit 7; bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let input = cpu.read_target(target) as u8;
    let result = input << 1;

    cpu.status.set(Status::CARRY, input & 0x80 != 0);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}

/// LSR - Logical Shift Right.
///
/// Carry takes bit 0; bit 7 becomes 0, so N is always clear afterwards.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let input = cpu.read_target(target) as u8;
    let result = input >> 1;

    cpu.status.set(Status::CARRY, input & 0x01 != 0);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}

/// ROL - Rotate Left through Carry.
///
/// The old carry enters at bit 0; bit 7 becomes the new carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let input = cpu.read_target(target) as u8;
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = input << 1 | carry_in;

    cpu.status.set(Status::CARRY, input & 0x80 != 0);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}

/// ROR - Rotate Right through Carry.
///
/// The old carry enters at bit 7; bit 0 becomes the new carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let input = cpu.read_target(target) as u8;
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = input >> 1 | carry_in << 7;

    cpu.status.set(Status::CARRY, input & 0x01 != 0);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}
