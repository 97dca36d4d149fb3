//! Fuzz target for CPU execution.
//!
//! Creates an arbitrary register file, status byte, and program, then runs a
//! bounded step loop to hunt for panics and invariant violations.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{MemoryBus, Status, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    /// Accumulator register
    a: u8,
    /// X index register
    x: u8,
    /// Y index register
    y: u8,
    /// Stack pointer
    sp: u8,
    /// Raw status byte; installed through the Unused-bit discipline
    status: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Program bytes loaded at the default 0x0600
    program: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new();

    for (i, &byte) in input.zero_page.iter().enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }

    if cpu.load(&input.program).is_err() {
        // Program longer than the space above 0x0600; nothing to run
        return;
    }

    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(Status::from_bits_retain(input.registers.status));

    // Bounded run: halting on an undocumented opcode is fine, panicking is
    // not
    for _ in 0..1024 {
        if !cpu.step() {
            break;
        }

        // Observed status always carries bit 5
        assert!(cpu.status().contains(Status::UNUSED));
    }
});
