//! # Register Transfer Instructions
//!
//! TAX, TAY, TSX, TXA, TYA copy a register and set N/Z on the destination.
//! TXS is the odd one out: it loads the stack pointer and touches no flags.

use crate::cpu::Target;
use crate::{MemoryBus, CPU};

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.x = cpu.a;
    let result = cpu.x;
    cpu.set_nz(result);
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.y = cpu.a;
    let result = cpu.y;
    cpu.set_nz(result);
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.x = cpu.sp;
    let result = cpu.x;
    cpu.set_nz(result);
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.a = cpu.x;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// TXS - Transfer X to Stack Pointer. No flags are affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.sp = cpu.x;
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.a = cpu.y;
    let result = cpu.a;
    cpu.set_nz(result);
}
