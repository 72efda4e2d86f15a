use bitflags::bitflags;

bitflags! {
    /// Processor status register P.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const IRQ_DISABLE = 1 << 2;
        /// Stored and restored, but arithmetic ignores it on the 2A03.
        const DECIMAL = 1 << 3;
        /// Only exists in the copy pushed by PHP/BRK.
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

/// Register file of the 6502.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: Status,
}

impl Registers {
    /// Status as pushed by PHP and BRK, with B and bit 5 set.
    #[inline]
    pub fn pushed_status(&self) -> u8 {
        (self.p | Status::BREAK | Status::UNUSED).bits()
    }

    /// Status restored by PLP and RTI: B is dropped and bit 5 forced on.
    #[inline]
    pub fn restore_status(&mut self, value: u8) {
        self.p = (Status::from_bits_retain(value) - Status::BREAK) | Status::UNUSED;
    }
}
