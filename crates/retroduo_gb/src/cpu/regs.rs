/// Register file of the SM83.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    /// 16-bit pair selected by the `rp` opcode field (BC, DE, HL, SP).
    #[inline]
    pub(crate) fn rp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub(crate) fn set_rp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// 16-bit pair selected by the `rp2` field used by PUSH/POP (AF instead
    /// of SP).
    #[inline]
    pub(crate) fn rp2(&self, index: u8) -> u16 {
        match index & 0x03 {
            3 => self.af(),
            other => self.rp(other),
        }
    }

    #[inline]
    pub(crate) fn set_rp2(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            3 => self.set_af(value),
            other => self.set_rp(other, value),
        }
    }
}

/// 8-bit operand encoded in the low three bits (or bits 3-5) of an opcode.
///
/// `HlIndirect` is the memory byte at (HL) and is resolved through the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlIndirect,
    A,
}

impl Reg8 {
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlIndirect,
            _ => Reg8::A,
        }
    }

    #[inline]
    pub fn is_memory(self) -> bool {
        self == Reg8::HlIndirect
    }
}

/// Flag bits in the F register.
///
/// bit 7: Z (zero), bit 6: N (subtract), bit 5: H (half carry),
/// bit 4: C (carry). Bits 0-3 always read as zero.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}
