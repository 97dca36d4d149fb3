//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, NOP.
//!
//! JSR pushes the address of its own last byte (PC - 1); RTS compensates by
//! adding one after the pop. RTI restores PC exactly as pushed, with no
//! adjustment.

use crate::cpu::Target;
use crate::{MemoryBus, Status, CPU};

/// JMP - Jump.
///
/// Loads PC with the resolved address. The Indirect mode's page-wrap quirk
/// is handled in the resolver, so by the time JMP runs the destination is
/// final.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    cpu.branch(target);
}

/// JSR - Jump to Subroutine.
///
/// Pushes `PC - 1` (the address of the last operand byte) and jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push16(return_address);
    cpu.branch(target);
}

/// RTS - Return from Subroutine.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.pc = cpu.pop16().wrapping_add(1);
}

/// RTI - Return from Interrupt.
///
/// Pops the status register (Break cleared, Unused forced), then PC. Unlike
/// RTS there is no +1: the pushed PC is the resume address itself.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.pop_status();
    cpu.pc = cpu.pop16();
}

/// BRK - Force Interrupt.
///
/// Sets InterruptDisable, pushes PC, then pushes the status image with the
/// Break bit set. Vectoring through 0xFFFE/F is out of scope here, so PC is
/// left where the fetch put it and execution continues in place.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);

    let pc = cpu.pc;
    cpu.push16(pc);
    let status = cpu.status.pushed();
    cpu.push8(status);
}

/// NOP - No Operation.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>, _target: Target) {}
