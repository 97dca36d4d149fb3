//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor. Each mode determines how the CPU interprets the operand bytes
//! that follow an opcode and how it produces the operand reference for the
//! instruction.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes follow the opcode
/// and how the CPU turns them into a [`Target`](crate::Target).
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within the page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within the page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the address after the operand byte.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($1234)
    ///
    /// A pointer whose low byte is 0xFF fetches its high byte from the start
    /// of the same page, not the next one (the indirect-jump hardware bug).
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes after the opcode.
    pub const fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
