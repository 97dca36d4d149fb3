//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. PHP pushes the status image with the Break bit
//! forced set; PLP pops through the status discipline that clears it again.

use crate::cpu::Target;
use crate::{MemoryBus, CPU};

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    let value = cpu.a;
    cpu.push8(value);
}

/// PHP - Push Processor Status.
///
/// The pushed byte always has Break and Unused set; the in-register status
/// is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    let value = cpu.status.pushed();
    cpu.push8(value);
}

/// PLA - Pull Accumulator.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.a = cpu.pop8();
    let result = cpu.a;
    cpu.set_nz(result);
}

/// PLP - Pull Processor Status.
///
/// Unused comes back set and Break clear regardless of what was on the
/// stack.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>, _target: Target) {
    cpu.pop_status();
}
