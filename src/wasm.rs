//! WASM API for the 6502 interpreter.
//!
//! Provides a JavaScript-callable wrapper around [`CPU`] over the flat 64 KiB
//! memory: construct, reset, load, single-step, and inspect registers and
//! memory. Enabled with the `wasm` feature.

use crate::{FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-facing CPU handle.
///
/// Wraps a `CPU<FlatMemory>` so the generic parameter never crosses the
/// binding boundary.
#[wasm_bindgen]
pub struct WasmCpu {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl WasmCpu {
    /// Creates a CPU in the power-on state over zeroed memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCpu {
        WasmCpu { cpu: CPU::new() }
    }

    /// Restores the power-on state and zeroes memory. Programs must be
    /// reloaded afterwards.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Loads a program at the given offset and points PC at it.
    ///
    /// Throws if the program does not fit in memory.
    pub fn load(&mut self, program: &[u8], offset: u16) -> Result<(), JsValue> {
        self.cpu
            .load_at(program, offset)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Loads a program at the default address 0x0600.
    pub fn load_default(&mut self, program: &[u8]) -> Result<(), JsValue> {
        self.cpu
            .load(program)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Executes one instruction; returns false when the CPU halts on an
    /// undocumented opcode.
    pub fn step(&mut self) -> bool {
        self.cpu.step()
    }

    /// Runs until halt or until `max_steps` instructions have retired.
    /// Returns the number of instructions executed.
    pub fn run(&mut self, max_steps: u32) -> u32 {
        let mut executed = 0;
        while executed < max_steps && self.cpu.step() {
            executed += 1;
        }
        executed
    }

    /// Accumulator register.
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    /// X index register.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    /// Y index register.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    /// Stack pointer.
    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Program counter.
    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Packed status register byte (bit 5 always set).
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    /// Reads one byte of memory.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read_raw(addr)
    }

    /// Writes one byte of memory.
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }
}

impl Default for WasmCpu {
    fn default() -> Self {
        Self::new()
    }
}
