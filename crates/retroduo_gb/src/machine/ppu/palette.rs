/// Shades for DMG palette indices 0..3, lightest first.
pub(super) const DMG_SHADES: [u8; 4] = [0xFF, 0xAA, 0x55, 0x00];

/// Eight CGB palettes of four little-endian RGB555 colors, addressed
/// through an index register with optional auto-increment (bit 7).
pub(super) struct ColorPalettes {
    data: [u8; 64],
    index: u8,
}

impl ColorPalettes {
    pub(super) fn new() -> Self {
        Self {
            data: [0xFF; 64],
            index: 0,
        }
    }

    pub(super) fn read_index(&self) -> u8 {
        self.index | 0x40
    }

    pub(super) fn write_index(&mut self, value: u8) {
        self.index = value & 0xBF;
    }

    pub(super) fn read_data(&self) -> u8 {
        self.data[(self.index & 0x3F) as usize]
    }

    pub(super) fn write_data(&mut self, value: u8) {
        self.data[(self.index & 0x3F) as usize] = value;
        if self.index & 0x80 != 0 {
            self.index = 0x80 | (self.index.wrapping_add(1) & 0x3F);
        }
    }

    /// 24-bit color for `color` (0..3) of `palette` (0..7).
    pub(super) fn rgb(&self, palette: u8, color: u8) -> [u8; 3] {
        let offset = (palette as usize & 7) * 8 + (color as usize & 3) * 2;
        let raw = u16::from_le_bytes([self.data[offset], self.data[offset + 1]]);
        [
            expand5((raw & 0x1F) as u8),
            expand5(((raw >> 5) & 0x1F) as u8),
            expand5(((raw >> 10) & 0x1F) as u8),
        ]
    }
}

#[inline]
fn expand5(c: u8) -> u8 {
    (c << 3) | (c >> 2)
}

/// Gray level for `color` through a DMG palette register.
#[inline]
pub(super) fn dmg_shade(palette: u8, color: u8) -> u8 {
    DMG_SHADES[((palette >> (color * 2)) & 0x03) as usize]
}
