//! Loopy scroll registers.
//!
//! `v` and `t` are laid out as `yyy NN YYYYY XXXXX`: fine Y, nametable
//! select, coarse Y and coarse X.

use super::Ppu;

impl Ppu {
    pub(super) fn write_scroll(&mut self, value: u8) {
        if !self.w {
            self.t = (self.t & !0x001F) | (value >> 3) as u16;
            self.x = value & 0x07;
        } else {
            self.t = (self.t & !0x73E0)
                | (((value & 0x07) as u16) << 12)
                | (((value & 0xF8) as u16) << 2);
        }
        self.w = !self.w;
    }

    pub(super) fn write_addr(&mut self, value: u8) {
        if !self.w {
            // Bit 14 is cleared by the high byte write.
            self.t = (self.t & 0x00FF) | (((value & 0x3F) as u16) << 8);
        } else {
            self.t = (self.t & 0xFF00) | value as u16;
            self.v = self.t;
        }
        self.w = !self.w;
    }

    /// Step `v` one tile right, wrapping into the horizontally adjacent
    /// nametable.
    pub(super) fn increment_x(v: u16) -> u16 {
        if v & 0x001F == 31 {
            (v & !0x001F) ^ 0x0400
        } else {
            v + 1
        }
    }

    /// Step `v` one pixel row down. Coarse Y 29 wraps into the vertically
    /// adjacent nametable; 30 and 31 (attribute rows) wrap without it.
    pub(super) fn increment_y(&mut self) {
        let v = self.v;
        if v & 0x7000 != 0x7000 {
            self.v = v + 0x1000;
            return;
        }
        let mut v = v & !0x7000;
        let coarse_y = (v & 0x03E0) >> 5;
        let coarse_y = match coarse_y {
            29 => {
                v ^= 0x0800;
                0
            }
            31 => 0,
            y => y + 1,
        };
        self.v = (v & !0x03E0) | (coarse_y << 5);
    }

    pub(super) fn copy_horizontal(&mut self) {
        self.v = (self.v & !0x041F) | (self.t & 0x041F);
    }

    pub(super) fn copy_vertical(&mut self) {
        self.v = (self.v & !0x7BE0) | (self.t & 0x7BE0);
    }
}
