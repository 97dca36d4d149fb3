//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry dispatch table that serves as the
//! single source of truth for instruction decoding: for each opcode byte,
//! which instruction runs and with which addressing mode.
//!
//! The table covers the **151 documented instructions** of the NMOS 6502.
//! The remaining 105 undocumented opcodes are `None`: encountering one makes
//! [`CPU::step`](crate::CPU::step) return `false` (halt). The table is
//! `const` data, built once and shared immutably.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode as A;
use self::Mnemonic as M;

/// The 56 documented 6502 instruction mnemonics.
///
/// Each variant names one instruction handler; the exhaustive dispatch match
/// lives in [`CPU::step`](crate::CPU::step)'s execute path, so an unhandled
/// mnemonic is a compile error rather than a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
}

/// Decoded form of a single opcode byte: what runs, and how the operand
/// bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction to execute.
    pub mnemonic: Mnemonic,
    /// Addressing mode for the operand bytes following the opcode.
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Option<Opcode> {
    Some(Opcode { mnemonic, mode })
}

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// `None` marks the 105 undocumented opcodes.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub const OPCODE_TABLE: [Option<Opcode>; 256] = [
    /* 0x00 */ op(M::Brk, A::Implicit),
    /* 0x01 */ op(M::Ora, A::IndirectX),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ op(M::Ora, A::ZeroPage),
    /* 0x06 */ op(M::Asl, A::ZeroPage),
    /* 0x07 */ None,
    /* 0x08 */ op(M::Php, A::Implicit),
    /* 0x09 */ op(M::Ora, A::Immediate),
    /* 0x0A */ op(M::Asl, A::Accumulator),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ op(M::Ora, A::Absolute),
    /* 0x0E */ op(M::Asl, A::Absolute),
    /* 0x0F */ None,
    /* 0x10 */ op(M::Bpl, A::Relative),
    /* 0x11 */ op(M::Ora, A::IndirectY),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ op(M::Ora, A::ZeroPageX),
    /* 0x16 */ op(M::Asl, A::ZeroPageX),
    /* 0x17 */ None,
    /* 0x18 */ op(M::Clc, A::Implicit),
    /* 0x19 */ op(M::Ora, A::AbsoluteY),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ op(M::Ora, A::AbsoluteX),
    /* 0x1E */ op(M::Asl, A::AbsoluteX),
    /* 0x1F */ None,
    /* 0x20 */ op(M::Jsr, A::Absolute),
    /* 0x21 */ op(M::And, A::IndirectX),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ op(M::Bit, A::ZeroPage),
    /* 0x25 */ op(M::And, A::ZeroPage),
    /* 0x26 */ op(M::Rol, A::ZeroPage),
    /* 0x27 */ None,
    /* 0x28 */ op(M::Plp, A::Implicit),
    /* 0x29 */ op(M::And, A::Immediate),
    /* 0x2A */ op(M::Rol, A::Accumulator),
    /* 0x2B */ None,
    /* 0x2C */ op(M::Bit, A::Absolute),
    /* 0x2D */ op(M::And, A::Absolute),
    /* 0x2E */ op(M::Rol, A::Absolute),
    /* 0x2F */ None,
    /* 0x30 */ op(M::Bmi, A::Relative),
    /* 0x31 */ op(M::And, A::IndirectY),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ op(M::And, A::ZeroPageX),
    /* 0x36 */ op(M::Rol, A::ZeroPageX),
    /* 0x37 */ None,
    /* 0x38 */ op(M::Sec, A::Implicit),
    /* 0x39 */ op(M::And, A::AbsoluteY),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ op(M::And, A::AbsoluteX),
    /* 0x3E */ op(M::Rol, A::AbsoluteX),
    /* 0x3F */ None,
    /* 0x40 */ op(M::Rti, A::Implicit),
    /* 0x41 */ op(M::Eor, A::IndirectX),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ op(M::Eor, A::ZeroPage),
    /* 0x46 */ op(M::Lsr, A::ZeroPage),
    /* 0x47 */ None,
    /* 0x48 */ op(M::Pha, A::Implicit),
    /* 0x49 */ op(M::Eor, A::Immediate),
    /* 0x4A */ op(M::Lsr, A::Accumulator),
    /* 0x4B */ None,
    /* 0x4C */ op(M::Jmp, A::Absolute),
    /* 0x4D */ op(M::Eor, A::Absolute),
    /* 0x4E */ op(M::Lsr, A::Absolute),
    /* 0x4F */ None,
    /* 0x50 */ op(M::Bvc, A::Relative),
    /* 0x51 */ op(M::Eor, A::IndirectY),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ op(M::Eor, A::ZeroPageX),
    /* 0x56 */ op(M::Lsr, A::ZeroPageX),
    /* 0x57 */ None,
    /* 0x58 */ op(M::Cli, A::Implicit),
    /* 0x59 */ op(M::Eor, A::AbsoluteY),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ op(M::Eor, A::AbsoluteX),
    /* 0x5E */ op(M::Lsr, A::AbsoluteX),
    /* 0x5F */ None,
    /* 0x60 */ op(M::Rts, A::Implicit),
    /* 0x61 */ op(M::Adc, A::IndirectX),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ op(M::Adc, A::ZeroPage),
    /* 0x66 */ op(M::Ror, A::ZeroPage),
    /* 0x67 */ None,
    /* 0x68 */ op(M::Pla, A::Implicit),
    /* 0x69 */ op(M::Adc, A::Immediate),
    /* 0x6A */ op(M::Ror, A::Accumulator),
    /* 0x6B */ None,
    /* 0x6C */ op(M::Jmp, A::Indirect),
    /* 0x6D */ op(M::Adc, A::Absolute),
    /* 0x6E */ op(M::Ror, A::Absolute),
    /* 0x6F */ None,
    /* 0x70 */ op(M::Bvs, A::Relative),
    /* 0x71 */ op(M::Adc, A::IndirectY),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ op(M::Adc, A::ZeroPageX),
    /* 0x76 */ op(M::Ror, A::ZeroPageX),
    /* 0x77 */ None,
    /* 0x78 */ op(M::Sei, A::Implicit),
    /* 0x79 */ op(M::Adc, A::AbsoluteY),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ op(M::Adc, A::AbsoluteX),
    /* 0x7E */ op(M::Ror, A::AbsoluteX),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ op(M::Sta, A::IndirectX),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ op(M::Sty, A::ZeroPage),
    /* 0x85 */ op(M::Sta, A::ZeroPage),
    /* 0x86 */ op(M::Stx, A::ZeroPage),
    /* 0x87 */ None,
    /* 0x88 */ op(M::Dey, A::Implicit),
    /* 0x89 */ None,
    /* 0x8A */ op(M::Txa, A::Implicit),
    /* 0x8B */ None,
    /* 0x8C */ op(M::Sty, A::Absolute),
    /* 0x8D */ op(M::Sta, A::Absolute),
    /* 0x8E */ op(M::Stx, A::Absolute),
    /* 0x8F */ None,
    /* 0x90 */ op(M::Bcc, A::Relative),
    /* 0x91 */ op(M::Sta, A::IndirectY),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ op(M::Sty, A::ZeroPageX),
    /* 0x95 */ op(M::Sta, A::ZeroPageX),
    /* 0x96 */ op(M::Stx, A::ZeroPageY),
    /* 0x97 */ None,
    /* 0x98 */ op(M::Tya, A::Implicit),
    /* 0x99 */ op(M::Sta, A::AbsoluteY),
    /* 0x9A */ op(M::Txs, A::Implicit),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ op(M::Sta, A::AbsoluteX),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ op(M::Ldy, A::Immediate),
    /* 0xA1 */ op(M::Lda, A::IndirectX),
    /* 0xA2 */ op(M::Ldx, A::Immediate),
    /* 0xA3 */ None,
    /* 0xA4 */ op(M::Ldy, A::ZeroPage),
    /* 0xA5 */ op(M::Lda, A::ZeroPage),
    /* 0xA6 */ op(M::Ldx, A::ZeroPage),
    /* 0xA7 */ None,
    /* 0xA8 */ op(M::Tay, A::Implicit),
    /* 0xA9 */ op(M::Lda, A::Immediate),
    /* 0xAA */ op(M::Tax, A::Implicit),
    /* 0xAB */ None,
    /* 0xAC */ op(M::Ldy, A::Absolute),
    /* 0xAD */ op(M::Lda, A::Absolute),
    /* 0xAE */ op(M::Ldx, A::Absolute),
    /* 0xAF */ None,
    /* 0xB0 */ op(M::Bcs, A::Relative),
    /* 0xB1 */ op(M::Lda, A::IndirectY),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ op(M::Ldy, A::ZeroPageX),
    /* 0xB5 */ op(M::Lda, A::ZeroPageX),
    /* 0xB6 */ op(M::Ldx, A::ZeroPageY),
    /* 0xB7 */ None,
    /* 0xB8 */ op(M::Clv, A::Implicit),
    /* 0xB9 */ op(M::Lda, A::AbsoluteY),
    /* 0xBA */ op(M::Tsx, A::Implicit),
    /* 0xBB */ None,
    /* 0xBC */ op(M::Ldy, A::AbsoluteX),
    /* 0xBD */ op(M::Lda, A::AbsoluteX),
    /* 0xBE */ op(M::Ldx, A::AbsoluteY),
    /* 0xBF */ None,
    /* 0xC0 */ op(M::Cpy, A::Immediate),
    /* 0xC1 */ op(M::Cmp, A::IndirectX),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ op(M::Cpy, A::ZeroPage),
    /* 0xC5 */ op(M::Cmp, A::ZeroPage),
    /* 0xC6 */ op(M::Dec, A::ZeroPage),
    /* 0xC7 */ None,
    /* 0xC8 */ op(M::Iny, A::Implicit),
    /* 0xC9 */ op(M::Cmp, A::Immediate),
    /* 0xCA */ op(M::Dex, A::Implicit),
    /* 0xCB */ None,
    /* 0xCC */ op(M::Cpy, A::Absolute),
    /* 0xCD */ op(M::Cmp, A::Absolute),
    /* 0xCE */ op(M::Dec, A::Absolute),
    /* 0xCF */ None,
    /* 0xD0 */ op(M::Bne, A::Relative),
    /* 0xD1 */ op(M::Cmp, A::IndirectY),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ op(M::Cmp, A::ZeroPageX),
    /* 0xD6 */ op(M::Dec, A::ZeroPageX),
    /* 0xD7 */ None,
    /* 0xD8 */ op(M::Cld, A::Implicit),
    /* 0xD9 */ op(M::Cmp, A::AbsoluteY),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ op(M::Cmp, A::AbsoluteX),
    /* 0xDE */ op(M::Dec, A::AbsoluteX),
    /* 0xDF */ None,
    /* 0xE0 */ op(M::Cpx, A::Immediate),
    /* 0xE1 */ op(M::Sbc, A::IndirectX),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ op(M::Cpx, A::ZeroPage),
    /* 0xE5 */ op(M::Sbc, A::ZeroPage),
    /* 0xE6 */ op(M::Inc, A::ZeroPage),
    /* 0xE7 */ None,
    /* 0xE8 */ op(M::Inx, A::Implicit),
    /* 0xE9 */ op(M::Sbc, A::Immediate),
    /* 0xEA */ op(M::Nop, A::Implicit),
    /* 0xEB */ None,
    /* 0xEC */ op(M::Cpx, A::Absolute),
    /* 0xED */ op(M::Sbc, A::Absolute),
    /* 0xEE */ op(M::Inc, A::Absolute),
    /* 0xEF */ None,
    /* 0xF0 */ op(M::Beq, A::Relative),
    /* 0xF1 */ op(M::Sbc, A::IndirectY),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ op(M::Sbc, A::ZeroPageX),
    /* 0xF6 */ op(M::Inc, A::ZeroPageX),
    /* 0xF7 */ None,
    /* 0xF8 */ op(M::Sed, A::Implicit),
    /* 0xF9 */ op(M::Sbc, A::AbsoluteY),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ op(M::Sbc, A::AbsoluteX),
    /* 0xFE */ op(M::Inc, A::AbsoluteX),
    /* 0xFF */ None,
];
