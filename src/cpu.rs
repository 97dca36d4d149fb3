//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register** (P): packed flag byte, see [`Status`]
//! - **Memory**: an owned [`MemoryBus`], `FlatMemory` by default
//!
//! ## Execution Model
//!
//! [`CPU::step`] executes exactly one instruction: fetch the opcode at PC,
//! look it up in [`OPCODE_TABLE`], resolve the addressing mode into a
//! [`Target`], and run the handler. An undocumented opcode makes `step`
//! return `false`; everything else returns `true`.

use crate::{AddressingMode, FlatMemory, LoadError, MemoryBus, Status, OPCODE_TABLE};
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::Mnemonic;

/// Base address of the stack page. The stack occupies 0x0100-0x01FF.
const STACK_BASE: u16 = 0x0100;

/// Stack pointer value at power-on and after reset.
const INITIAL_STACK_POINTER: u8 = 0xFD;

/// Program counter value at power-on and after reset.
const INITIAL_PROGRAM_COUNTER: u16 = 0x0600;

/// Operand reference produced by the addressing-mode resolver.
///
/// Every instruction handler receives exactly one `Target`; what it refers
/// to depends on the addressing mode:
///
/// - `Implicit`: no operand at all (CLC, RTS, ...)
/// - `Accumulator`: the operand is register A (ASL A, ...)
/// - `Memory(addr)`: the operand lives at the resolved memory address
/// - `Value(v)`: an immediate or pre-resolved 16-bit datum; never written
///
/// Reading an `Implicit` target or writing an `Implicit`/`Value` target is a
/// dispatch-table bug, not an emulated-program condition, and trips a
/// `debug_assert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// No operand.
    Implicit,
    /// Operand is the accumulator register.
    Accumulator,
    /// Operand lives at this memory address.
    Memory(u16),
    /// Immediate or pre-resolved value; read-only.
    Value(u16),
}

impl Target {
    /// The address or datum the resolver produced, without dereferencing.
    ///
    /// Jumps and branches use this: `JMP $1234` needs the address 0x1234
    /// itself, not the byte stored there.
    pub(crate) fn value(self) -> u16 {
        match self {
            Target::Memory(addr) => addr,
            Target::Value(value) => value,
            Target::Implicit | Target::Accumulator => {
                debug_assert!(false, "target has no resolved value");
                0
            }
        }
    }
}

/// 6502 CPU state and execution context.
///
/// Owns the full architectural state: registers, status flags, and the
/// memory bus. Generic over the bus implementation; the default is the flat
/// 64 KiB [`FlatMemory`] the interpreter core assumes.
///
/// # Examples
///
/// ```
/// use mos6502::CPU;
///
/// let mut cpu = CPU::new();
///
/// // LDA #$42; STA $10
/// cpu.load(&[0xA9, 0x42, 0x85, 0x10]).unwrap();
/// assert_eq!(cpu.pc(), 0x0600);
///
/// assert!(cpu.step());
/// assert!(cpu.step());
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.memory().read_raw(0x0010), 0x42);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Packed status register
    pub(crate) status: Status,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU in the power-on state over a fresh, zeroed 64 KiB
    /// memory.
    ///
    /// Power-on state: `A = X = Y = 0`, `SP = 0xFD`, `PC = 0x0600`,
    /// `P = 0x24` (Unused and InterruptDisable set).
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the power-on state over the given memory bus.
    ///
    /// The bus contents are taken as-is; use [`CPU::load_at`] to place a
    /// program, or pre-populate the bus before handing it over.
    pub fn with_memory(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: INITIAL_STACK_POINTER,
            pc: INITIAL_PROGRAM_COUNTER,
            status: Status::power_on(),
            memory,
        }
    }

    /// Restores the power-on architectural state and zeroes all memory.
    ///
    /// Programs are not reloaded: after `reset()` the memory is blank and PC
    /// points at 0x0600, so the caller must `load` again before stepping.
    pub fn reset(&mut self) {
        // Zeroing goes through the bus so custom implementations observe it.
        for addr in 0..=0xFFFFu16 {
            self.memory.write(addr, 0x00);
        }

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = INITIAL_STACK_POINTER;
        self.pc = INITIAL_PROGRAM_COUNTER;
        self.status = Status::power_on();
    }

    /// Copies `program` into memory at `offset` and sets `PC = offset`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfRange`] if the program does not fit below
    /// the end of the 64 KiB address space. Memory and PC are untouched on
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_at(&[0xEA], 0x8000).unwrap(); // NOP at 0x8000
    /// assert_eq!(cpu.pc(), 0x8000);
    ///
    /// assert!(cpu.load_at(&[0x00, 0x00], 0xFFFF).is_err());
    /// ```
    pub fn load_at(&mut self, program: &[u8], offset: u16) -> Result<(), LoadError> {
        if offset as usize + program.len() > 0x1_0000 {
            return Err(LoadError::OutOfRange {
                offset,
                len: program.len(),
            });
        }

        for (i, &byte) in program.iter().enumerate() {
            self.memory.write(offset + i as u16, byte);
        }
        self.pc = offset;

        Ok(())
    }

    /// Copies `program` to the default load address 0x0600 and sets PC there.
    ///
    /// Shorthand for `load_at(program, 0x0600)`.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.load_at(program, INITIAL_PROGRAM_COUNTER)
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC, incrementing PC past it
    /// 2. Look the opcode up in [`OPCODE_TABLE`]; an undocumented opcode
    ///    returns `false` (halt) with no further state change
    /// 3. Resolve the addressing mode, advancing PC over the operand bytes
    /// 4. Run the instruction handler with the resolved [`Target`]
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load(&[0xE8, 0x02]).unwrap(); // INX, then an undocumented opcode
    ///
    /// assert!(cpu.step());
    /// assert_eq!(cpu.x(), 0x01);
    /// assert!(!cpu.step()); // 0x02 is undefined: halt
    /// ```
    pub fn step(&mut self) -> bool {
        let opcode = self.read8(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let Some(instruction) = OPCODE_TABLE[opcode as usize] else {
            return false;
        };

        let target = self.operand_target(instruction.mode);
        self.execute(instruction.mnemonic, target);

        true
    }

    /// Dispatches a decoded instruction to its handler.
    fn execute(&mut self, mnemonic: Mnemonic, target: Target) {
        use Mnemonic::*;

        match mnemonic {
            Adc => alu::adc(self, target),
            And => alu::and(self, target),
            Asl => shifts::asl(self, target),
            Bcc => branches::bcc(self, target),
            Bcs => branches::bcs(self, target),
            Beq => branches::beq(self, target),
            Bit => alu::bit(self, target),
            Bmi => branches::bmi(self, target),
            Bne => branches::bne(self, target),
            Bpl => branches::bpl(self, target),
            Brk => control::brk(self, target),
            Bvc => branches::bvc(self, target),
            Bvs => branches::bvs(self, target),
            Clc => flags::clc(self, target),
            Cld => flags::cld(self, target),
            Cli => flags::cli(self, target),
            Clv => flags::clv(self, target),
            Cmp => alu::cmp(self, target),
            Cpx => alu::cpx(self, target),
            Cpy => alu::cpy(self, target),
            Dec => inc_dec::dec(self, target),
            Dex => inc_dec::dex(self, target),
            Dey => inc_dec::dey(self, target),
            Eor => alu::eor(self, target),
            Inc => inc_dec::inc(self, target),
            Inx => inc_dec::inx(self, target),
            Iny => inc_dec::iny(self, target),
            Jmp => control::jmp(self, target),
            Jsr => control::jsr(self, target),
            Lda => load_store::lda(self, target),
            Ldx => load_store::ldx(self, target),
            Ldy => load_store::ldy(self, target),
            Lsr => shifts::lsr(self, target),
            Nop => control::nop(self, target),
            Ora => alu::ora(self, target),
            Pha => stack::pha(self, target),
            Php => stack::php(self, target),
            Pla => stack::pla(self, target),
            Plp => stack::plp(self, target),
            Rol => shifts::rol(self, target),
            Ror => shifts::ror(self, target),
            Rti => control::rti(self, target),
            Rts => control::rts(self, target),
            Sbc => alu::sbc(self, target),
            Sec => flags::sec(self, target),
            Sed => flags::sed(self, target),
            Sei => flags::sei(self, target),
            Sta => load_store::sta(self, target),
            Stx => load_store::stx(self, target),
            Sty => load_store::sty(self, target),
            Tax => transfer::tax(self, target),
            Tay => transfer::tay(self, target),
            Tsx => transfer::tsx(self, target),
            Txa => transfer::txa(self, target),
            Txs => transfer::txs(self, target),
            Tya => transfer::tya(self, target),
        }
    }

    // ========== Addressing-Mode Resolution ==========

    /// Resolves an addressing mode into a [`Target`], consuming the operand
    /// bytes at PC.
    ///
    /// PC always ends up past the full operand: an instruction either
    /// consumes all of its operand bytes or (for Implicit/Accumulator)
    /// none.
    pub(crate) fn operand_target(&mut self, mode: AddressingMode) -> Target {
        match mode {
            // Instruction makes the target implicit, e.g. CLC
            AddressingMode::Implicit => Target::Implicit,

            // Operate on the accumulator, e.g. ASL A
            AddressingMode::Accumulator => Target::Accumulator,

            // Use the byte after the opcode as the value, e.g. LDX #$00
            AddressingMode::Immediate => Target::Value(u16::from(self.fetch8())),

            // Use the 16-bit address embedded in the instruction,
            // e.g. JMP $1234
            AddressingMode::Absolute => Target::Memory(self.fetch16()),

            // Like Absolute, plus register X, e.g. LDA $1234,X
            AddressingMode::AbsoluteX => {
                Target::Memory(self.fetch16().wrapping_add(u16::from(self.x)))
            }

            // Like Absolute, plus register Y, e.g. LDA $1234,Y
            AddressingMode::AbsoluteY => {
                Target::Memory(self.fetch16().wrapping_add(u16::from(self.y)))
            }

            // Use the address stored at the embedded address, e.g. JMP ($1234)
            AddressingMode::Indirect => {
                let ptr = self.fetch16();
                // Hardware bug: a pointer ending in 0xFF wraps within its
                // page for the high byte instead of crossing into the next.
                let high_ptr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let address =
                    u16::from(self.read8(ptr)) | u16::from(self.read8(high_ptr)) << 8;
                Target::Memory(address)
            }

            // Zero page pointer indexed by X before the dereference,
            // e.g. LDA ($12,X)
            AddressingMode::IndirectX => {
                let zp = self.fetch8().wrapping_add(self.x);
                Target::Memory(self.read16(u16::from(zp), true))
            }

            // Zero page pointer dereferenced, then indexed by Y,
            // e.g. LDA ($12),Y
            AddressingMode::IndirectY => {
                let zp = self.fetch8();
                Target::Memory(
                    self.read16(u16::from(zp), true)
                        .wrapping_add(u16::from(self.y)),
                )
            }

            // Signed 8-bit offset from the address after the operand byte
            AddressingMode::Relative => {
                let offset = self.fetch8() as i8;
                // i8 -> u16 sign-extends, so wrapping_add walks both ways
                Target::Value(self.pc.wrapping_add(offset as u16))
            }

            // One-byte address into the zero page, e.g. LDA $80
            AddressingMode::ZeroPage => Target::Memory(u16::from(self.fetch8())),

            // Like ZeroPage, plus register X, wrapping within the page
            AddressingMode::ZeroPageX => {
                Target::Memory(u16::from(self.fetch8().wrapping_add(self.x)))
            }

            // Like ZeroPage, plus register Y, wrapping within the page
            AddressingMode::ZeroPageY => {
                Target::Memory(u16::from(self.fetch8().wrapping_add(self.y)))
            }
        }
    }

    /// Reads the byte at PC and increments PC past it.
    fn fetch8(&mut self) -> u8 {
        let value = self.read8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and increments PC past it.
    fn fetch16(&mut self) -> u16 {
        let value = self.read16(self.pc, false);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    // ========== Memory Access Primitives ==========

    /// Reads one byte from memory.
    pub(crate) fn read8(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Reads a little-endian 16-bit word starting at `addr`.
    ///
    /// With `wrap_in_page` set, both bytes are fetched from the zero page
    /// and the high byte's address wraps modulo 256; this is the pointer
    /// behaviour of the indirect addressing modes.
    pub(crate) fn read16(&self, addr: u16, wrap_in_page: bool) -> u16 {
        let low_addr = if wrap_in_page { addr & 0x00FF } else { addr };
        let high_addr = if wrap_in_page {
            u16::from((low_addr as u8).wrapping_add(1))
        } else {
            low_addr.wrapping_add(1)
        };

        u16::from(self.read8(low_addr)) | u16::from(self.read8(high_addr)) << 8
    }

    /// Writes one byte to memory.
    pub(crate) fn write8(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Pushes a byte onto the stack page and decrements SP.
    pub(crate) fn push8(&mut self, value: u8) {
        self.write8(STACK_BASE + u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes a 16-bit word, high byte first.
    pub(crate) fn push16(&mut self, value: u16) {
        self.push8((value >> 8) as u8);
        self.push8(value as u8);
    }

    /// Increments SP and reads the byte it now points at.
    pub(crate) fn pop8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read8(STACK_BASE + u16::from(self.sp))
    }

    /// Pops a 16-bit word, low byte first.
    pub(crate) fn pop16(&mut self) -> u16 {
        let low = self.pop8();
        let high = self.pop8();
        u16::from(low) | u16::from(high) << 8
    }

    /// Pops a status byte and installs it as `P`.
    ///
    /// Unused is forced set and Break forced clear; the Break bit only ever
    /// exists on pushed copies.
    pub(crate) fn pop_status(&mut self) {
        let byte = self.pop8();
        self.status = Status::from_popped(byte);
    }

    // ========== Target Access ==========

    /// Reads the operand a target refers to.
    pub(crate) fn read_target(&self, target: Target) -> u16 {
        match target {
            Target::Implicit => {
                debug_assert!(false, "read from an implicit target");
                0
            }
            Target::Accumulator => u16::from(self.a),
            Target::Memory(addr) => u16::from(self.read8(addr)),
            Target::Value(value) => value,
        }
    }

    /// Writes the operand a target refers to.
    pub(crate) fn write_target(&mut self, target: Target, value: u8) {
        match target {
            Target::Accumulator => self.a = value,
            Target::Memory(addr) => self.write8(addr, value),
            Target::Implicit | Target::Value(_) => {
                debug_assert!(false, "write to a read-only target");
            }
        }
    }

    // ========== Instruction Helpers ==========

    /// Updates Zero and Negative from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.status.set_nz(value);
    }

    /// Shared core of ADC and SBC: `A + value + C` in nine bits.
    ///
    /// Carry is bit 8 of the sum; Overflow is set when the operands agree in
    /// sign and the result disagrees. Decimal mode is stored but not
    /// honoured here.
    pub(crate) fn add_with_carry(&mut self, value: u8) {
        let carry = u16::from(self.status.contains(Status::CARRY));
        let sum = u16::from(self.a) + u16::from(value) + carry;
        let result = sum as u8;

        self.status.set(Status::CARRY, sum > 0xFF);
        self.status.set(
            Status::OVERFLOW,
            (self.a ^ result) & (value ^ result) & 0x80 != 0,
        );
        self.set_nz(result);

        self.a = result;
    }

    /// Flag effect of CMP/CPX/CPY: compare a register against an operand.
    pub(crate) fn compare(&mut self, register: u8, value: u8) {
        self.status.set(Status::ZERO, register == value);
        self.status.set(Status::CARRY, register >= value);
        self.status
            .set(Status::NEGATIVE, register.wrapping_sub(value) & 0x80 != 0);
    }

    /// Transfers control to the destination a Relative or jump target
    /// resolved to.
    pub(crate) fn branch(&mut self, target: Target) {
        self.pc = target.value();
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the packed status register.
    ///
    /// Bit 5 (Unused) is always set in the returned value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(cpu.status().bits(), 0x24);
    /// ```
    pub fn status(&self) -> Status {
        self.status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    // ========== Register Setters (for embedders and tests) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the whole status register.
    ///
    /// The Unused bit is forced set so the stored value keeps the observable
    /// invariant.
    pub fn set_status(&mut self, status: Status) {
        self.status = status | Status::UNUSED;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This is how tests and embedders write to memory directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CPU, MemoryBus};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.memory_mut().write(0x0600, 0xEA); // NOP
    /// assert!(cpu.step());
    /// ```
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let cpu = CPU::new();

        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.pc(), 0x0600);
        assert_eq!(cpu.status().bits(), 0x24);
    }

    #[test]
    fn test_stack_roundtrip() {
        let mut cpu = CPU::new();

        cpu.push8(0x11);
        cpu.push8(0x22);
        assert_eq!(cpu.sp(), 0xFB);
        assert_eq!(cpu.memory().read_raw(0x01FD), 0x11);
        assert_eq!(cpu.memory().read_raw(0x01FC), 0x22);

        assert_eq!(cpu.pop8(), 0x22);
        assert_eq!(cpu.pop8(), 0x11);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_push16_order() {
        let mut cpu = CPU::new();

        cpu.push16(0x1234);
        // High byte first, so it sits at the higher address
        assert_eq!(cpu.memory().read_raw(0x01FD), 0x12);
        assert_eq!(cpu.memory().read_raw(0x01FC), 0x34);
        assert_eq!(cpu.pop16(), 0x1234);
    }

    #[test]
    fn test_read16_page_wrap() {
        let mut cpu = CPU::new();
        cpu.memory_mut().write(0x00FF, 0x34);
        cpu.memory_mut().write(0x0000, 0x12);
        cpu.memory_mut().write(0x0100, 0x99);

        // Wrapping read stays inside the zero page
        assert_eq!(cpu.read16(0x00FF, true), 0x1234);
        // Plain read crosses into the next page
        assert_eq!(cpu.read16(0x00FF, false), 0x9934);
    }

    #[test]
    fn test_target_value_of_memory_and_value() {
        assert_eq!(Target::Memory(0x1234).value(), 0x1234);
        assert_eq!(Target::Value(0x00FE).value(), 0x00FE);
    }

    #[test]
    fn test_relative_target_sign_extension() {
        let mut cpu = CPU::new();
        cpu.load_at(&[0xFE], 0x0700).unwrap(); // offset -2

        let target = cpu.operand_target(AddressingMode::Relative);
        assert_eq!(target, Target::Value(0x06FF));

        cpu.load_at(&[0x7F], 0x0700).unwrap(); // offset +127
        let target = cpu.operand_target(AddressingMode::Relative);
        assert_eq!(target, Target::Value(0x0780));
    }
}
