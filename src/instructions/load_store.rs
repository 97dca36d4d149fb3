//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set their register and N/Z; STA, STX, STY write the
//! register through the target and touch no flags.

use crate::cpu::Target;
use crate::{MemoryBus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.a = value;
    cpu.set_nz(value);
}

/// LDX - Load X register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.x = value;
    cpu.set_nz(value);
}

/// LDY - Load Y register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.read_target(target) as u8;
    cpu.y = value;
    cpu.set_nz(value);
}

/// STA - Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.a;
    cpu.write_target(target, value);
}

/// STX - Store X register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.x;
    cpu.write_target(target, value);
}

/// STY - Store Y register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let value = cpu.y;
    cpu.write_target(target, value);
}
