//! # Increment and Decrement Instructions
//!
//! INC/DEC operate on memory through the target; INX/INY/DEX/DEY operate on
//! the index registers. All wrap silently modulo 256 and set N/Z from the
//! new value.

use crate::cpu::Target;
use crate::{MemoryBus, CPU};

/// INC - Increment a memory location.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let result = (cpu.read_target(target) as u8).wrapping_add(1);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}

/// DEC - Decrement a memory location.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, target: Target) {
    let result = (cpu.read_target(target) as u8).wrapping_sub(1);
    cpu.set_nz(result);
    cpu.write_target(target, result);
}

/// INX - Increment the X register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_nz(result);
}

/// INY - Increment the Y register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_nz(result);
}

/// DEX - Decrement the X register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_nz(result);
}

/// DEY - Decrement the Y register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_nz(result);
}
