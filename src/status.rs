//! # Packed Status Register
//!
//! The six-flag processor status register, stored as a single packed byte so
//! the stack push/pull masking behavior is reproducible byte-for-byte.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Mask | Flag |
//! |-----|------|------|
//! | 7 | 0x80 | N (Negative) |
//! | 6 | 0x40 | V (oVerflow) |
//! | 5 | 0x20 | expansion bit (does not physically exist) |
//! | 4 | 0x10 | B (Break, does not physically exist) |
//! | 3 | 0x08 | D (Decimal, ignored by this CPU) |
//! | 2 | 0x04 | I (Interrupt disable) |
//! | 1 | 0x02 | Z (Zero) |
//! | 0 | 0x01 | C (Carry) |
//!
//! Bits 4 and 5 have no flip-flops on the real chip. Any value pushed to the
//! stack via PHP or BRK has them forced to 1; any value pulled into the live
//! register via PLP or RTI leaves them untouched.

/// Packed processor status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    /// Carry flag mask.
    pub const CARRY: u8 = 0x01;
    /// Zero flag mask.
    pub const ZERO: u8 = 0x02;
    /// Interrupt disable flag mask.
    pub const INTERRUPT_DISABLE: u8 = 0x04;
    /// Decimal mode flag mask.
    pub const DECIMAL: u8 = 0x08;
    /// Break flag mask (no physical flip-flop).
    pub const BREAK: u8 = 0x10;
    /// Expansion bit mask (no physical flip-flop).
    pub const EXPANSION: u8 = 0x20;
    /// Overflow flag mask.
    pub const OVERFLOW: u8 = 0x40;
    /// Negative flag mask.
    pub const NEGATIVE: u8 = 0x80;

    /// Mask of the status bits that do not physically exist on the CPU.
    pub const GHOST_MASK: u8 = Self::BREAK | Self::EXPANSION;

    /// Power-on value: interrupt disable set, ghost bits set.
    pub fn power_on() -> Self {
        Status(Self::GHOST_MASK | Self::INTERRUPT_DISABLE)
    }

    /// Builds a status register from a raw byte, unmasked.
    pub fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    /// The packed status byte.
    pub fn bits(self) -> u8 {
        self.0
    }

    fn get(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    fn set(&mut self, mask: u8, value: bool) {
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    pub fn carry(self) -> bool {
        self.get(Self::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Self::CARRY, value);
    }

    pub fn zero(self) -> bool {
        self.get(Self::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Self::ZERO, value);
    }

    pub fn interrupt_disable(self) -> bool {
        self.get(Self::INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Self::INTERRUPT_DISABLE, value);
    }

    pub fn decimal(self) -> bool {
        self.get(Self::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Self::DECIMAL, value);
    }

    pub fn overflow(self) -> bool {
        self.get(Self::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Self::OVERFLOW, value);
    }

    pub fn negative(self) -> bool {
        self.get(Self::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Self::NEGATIVE, value);
    }

    /// Sets Zero and Negative from an operation result.
    pub fn set_zn(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }

    /// The byte a status-push instruction (PHP, BRK) stores on the stack:
    /// the live bits with the two non-existent bits forced to 1.
    pub fn push_value(self) -> u8 {
        self.0 | Self::GHOST_MASK
    }

    /// Applies a byte pulled from the stack (PLP, RTI): every bit is copied
    /// except the two non-existent ones, which retain their prior value.
    pub fn pull_from(&mut self, value: u8) {
        self.0 = (self.0 & Self::GHOST_MASK) | (value & !Self::GHOST_MASK);
    }
}
