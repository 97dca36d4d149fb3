//! # Status Register
//!
//! The processor status register `P` packed as a single byte. The whole byte
//! moves atomically through `PHP`/`PLP`/`BRK`/`RTI`, so the flags are stored
//! packed rather than as independent booleans.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag | Meaning |
//! |---|---|---|
//! | 7 | N | Negative: bit 7 of the last result |
//! | 6 | V | Overflow: signed overflow from ADC/SBC, bit 6 after BIT |
//! | 5 | - | Unused: reads as 1 |
//! | 4 | B | Break: set on pushed copies for software BRK/PHP |
//! | 3 | D | Decimal: stored only, not honoured by ADC/SBC |
//! | 2 | I | Interrupt disable: stored only |
//! | 1 | Z | Zero: last result was zero |
//! | 0 | C | Carry: arithmetic carry/borrow, shift out-bit |

use bitflags::bitflags;

bitflags! {
    /// Packed 6502 status register.
    ///
    /// The stored value keeps [`Status::UNUSED`] set at all times, so any
    /// externally observed image of `P` has bit 5 set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::Status;
    ///
    /// let status = Status::power_on();
    /// assert_eq!(status.bits(), 0x24);
    /// assert!(status.contains(Status::INTERRUPT_DISABLE));
    /// assert!(!status.contains(Status::CARRY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry flag (bit 0).
        const CARRY = 0b0000_0001;
        /// Zero flag (bit 1).
        const ZERO = 0b0000_0010;
        /// Interrupt disable flag (bit 2).
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode flag (bit 3). Stored but not interpreted.
        const DECIMAL = 0b0000_1000;
        /// Break flag (bit 4). A convention on pushed copies, not a latch.
        const BREAK = 0b0001_0000;
        /// Unused bit 5. Reads as 1.
        const UNUSED = 0b0010_0000;
        /// Overflow flag (bit 6).
        const OVERFLOW = 0b0100_0000;
        /// Negative flag (bit 7).
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Power-on / reset value: Unused and InterruptDisable set (`0x24`).
    pub const fn power_on() -> Self {
        Self::UNUSED.union(Self::INTERRUPT_DISABLE)
    }

    /// Byte image pushed onto the stack by `PHP` and `BRK`.
    ///
    /// The pushed copy always carries Break and Unused set; that is how 6502
    /// software distinguishes a software break from a hardware interrupt
    /// push.
    pub const fn pushed(self) -> u8 {
        self.union(Self::BREAK).union(Self::UNUSED).bits()
    }

    /// Rebuilds the register from a byte popped off the stack.
    ///
    /// Unused is forced set and Break forced clear: the in-register `P` never
    /// holds a Break bit, only pushed copies do.
    pub const fn from_popped(byte: u8) -> Self {
        Self::from_bits_retain(byte)
            .union(Self::UNUSED)
            .difference(Self::BREAK)
    }

    /// Updates Zero and Negative from the low 8 bits of a result.
    pub fn set_nz(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}
