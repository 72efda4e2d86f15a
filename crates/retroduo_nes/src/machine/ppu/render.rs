use crate::SCREEN_WIDTH;

use super::super::cartridge::Cartridge;
use super::palette::MASTER_PALETTE;
use super::{Ppu, STATUS_OVERFLOW, STATUS_SPRITE0};

const MAX_SPRITES_PER_LINE: usize = 8;

/// One row of a background tile: two bitplanes plus its attribute palette.
#[derive(Clone, Copy, Default)]
struct TileRow {
    lo: u8,
    hi: u8,
    palette: u8,
}

#[inline]
fn pixel(lo: u8, hi: u8, bit: u8) -> u8 {
    ((lo >> bit) & 1) | (((hi >> bit) & 1) << 1)
}

impl Ppu {
    /// Draw visible line `line` into the back buffer.
    ///
    /// The background walks `v` tile by tile from the scroll position the
    /// line started with, so mid-line scroll writes are not seen.
    pub(super) fn render_line(&mut self, line: u16, cart: &Cartridge) {
        let backdrop = self.palette[0];
        let mut colors = [backdrop; SCREEN_WIDTH];
        let mut bg_opaque = [false; SCREEN_WIDTH];

        if self.show_background() {
            self.render_background(cart, &mut colors, &mut bg_opaque);
        }

        let (sprites, overflow) = self.sprites_on_line(line);
        if overflow && self.rendering_enabled() {
            self.status |= STATUS_OVERFLOW;
        }
        if self.show_sprites() {
            self.render_sprites(line, &sprites, cart, &mut colors, &bg_opaque);
        }

        let row = line as usize * SCREEN_WIDTH;
        for (x, &color) in colors.iter().enumerate() {
            MASTER_PALETTE[(color & 0x3F) as usize].write_rgb24(&mut self.back, row + x);
        }
    }

    fn fetch_tile_row(&self, v: u16, cart: &Cartridge) -> TileRow {
        let tile = self.read_vram(0x2000 | (v & 0x0FFF), cart);
        let attr_addr = 0x23C0 | (v & 0x0C00) | ((v >> 4) & 0x38) | ((v >> 2) & 0x07);
        let attr = self.read_vram(attr_addr, cart);
        let shift = ((v >> 4) & 0x04) | (v & 0x02);

        let base = if self.ctrl & 0x10 != 0 { 0x1000 } else { 0 };
        let fine_y = (v >> 12) & 0x07;
        let addr = base + tile as u16 * 16 + fine_y;
        TileRow {
            lo: self.read_vram(addr, cart),
            hi: self.read_vram(addr + 8, cart),
            palette: (attr >> shift) & 0x03,
        }
    }

    fn render_background(
        &self,
        cart: &Cartridge,
        colors: &mut [u8; SCREEN_WIDTH],
        opaque: &mut [bool; SCREEN_WIDTH],
    ) {
        let show_left = self.mask & 0x02 != 0;
        let mut v = self.v;
        let mut fine_x = self.x;
        let mut tile = self.fetch_tile_row(v, cart);

        for x in 0..SCREEN_WIDTH {
            let color = pixel(tile.lo, tile.hi, 7 - fine_x);
            if color != 0 && (x >= 8 || show_left) {
                colors[x] = self.palette[(tile.palette * 4 + color) as usize];
                opaque[x] = true;
            }

            if fine_x == 7 {
                fine_x = 0;
                v = Self::increment_x(v);
                tile = self.fetch_tile_row(v, cart);
            } else {
                fine_x += 1;
            }
        }
    }

    /// OAM indices of the sprites on `line`, at most eight in OAM order,
    /// plus whether a ninth was found.
    pub(in crate::machine) fn sprites_on_line(&self, line: u16) -> (Vec<usize>, bool) {
        let height = self.sprite_height();
        let mut found = Vec::with_capacity(MAX_SPRITES_PER_LINE);
        for index in 0..64 {
            // Sprites appear one line below their OAM Y.
            let top = self.oam[index * 4] as u16 + 1;
            if line < top || line >= top + height {
                continue;
            }
            if found.len() == MAX_SPRITES_PER_LINE {
                return (found, true);
            }
            found.push(index);
        }
        (found, false)
    }

    fn sprite_row_addr(&self, tile: u8, row: u16) -> u16 {
        if self.sprite_height() == 16 {
            let table = (tile & 0x01) as u16 * 0x1000;
            let tile = (tile & 0xFE) as u16 + (row >> 3);
            table + tile * 16 + (row & 0x07)
        } else {
            let table = if self.ctrl & 0x08 != 0 { 0x1000 } else { 0 };
            table + tile as u16 * 16 + row
        }
    }

    /// Lower OAM index wins where sprites overlap, even when it is hidden
    /// behind the background.
    fn render_sprites(
        &mut self,
        line: u16,
        sprites: &[usize],
        cart: &Cartridge,
        colors: &mut [u8; SCREEN_WIDTH],
        bg_opaque: &[bool; SCREEN_WIDTH],
    ) {
        let show_left = self.mask & 0x04 != 0;
        let height = self.sprite_height();
        let mut claimed = [false; SCREEN_WIDTH];

        for &index in sprites {
            let base = index * 4;
            let top = self.oam[base] as u16 + 1;
            let tile = self.oam[base + 1];
            let attr = self.oam[base + 2];
            let left = self.oam[base + 3] as usize;

            let mut row = line - top;
            if attr & 0x80 != 0 {
                row = height - 1 - row;
            }
            let addr = self.sprite_row_addr(tile, row);
            let lo = self.read_vram(addr, cart);
            let hi = self.read_vram(addr + 8, cart);

            for col in 0..8u8 {
                let x = left + col as usize;
                if x >= SCREEN_WIDTH {
                    break;
                }
                if x < 8 && !show_left {
                    continue;
                }
                let bit = if attr & 0x40 != 0 { col } else { 7 - col };
                let color = pixel(lo, hi, bit);
                if color == 0 {
                    continue;
                }
                if index == 0 && bg_opaque[x] && x != 255 {
                    self.status |= STATUS_SPRITE0;
                }
                if claimed[x] {
                    continue;
                }
                claimed[x] = true;
                if attr & 0x20 != 0 && bg_opaque[x] {
                    continue;
                }
                colors[x] = self.palette[0x10 + ((attr & 0x03) * 4 + color) as usize];
            }
        }
    }
}
