//! # Status Flag Instructions
//!
//! CLC, SEC, CLD, SED, CLI, SEI, CLV. Each sets or clears exactly one flag;
//! there is no SEV on the 6502.

use crate::cpu::Target;
use crate::{MemoryBus, Status, CPU};

/// CLC - Clear Carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.remove(Status::CARRY);
}

/// SEC - Set Carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.insert(Status::CARRY);
}

/// CLD - Clear Decimal mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.remove(Status::DECIMAL);
}

/// SED - Set Decimal mode.
///
/// The flag is stored faithfully even though ADC/SBC ignore it.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.insert(Status::DECIMAL);
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// CLV - Clear Overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.remove(Status::OVERFLOW);
}
