use crate::SCREEN_WIDTH;

use super::palette::dmg_shade;
use super::Ppu;

const MAX_SPRITES_PER_LINE: usize = 10;

/// Background pixel facts needed to resolve sprite priority.
#[derive(Copy, Clone, Default)]
struct BgPixel {
    color: u8,
    /// CGB map attribute bit 7: BG wins over sprites.
    priority: bool,
}

impl Ppu {
    pub(super) fn render_line(&mut self) {
        let ly = self.ly;
        let mut bg = [BgPixel::default(); SCREEN_WIDTH];

        // On DMG, LCDC.0 blanks background and window. On CGB it only
        // removes their priority over sprites.
        let bg_enabled = self.cgb || self.lcdc & 0x01 != 0;
        if bg_enabled {
            self.render_background(ly, &mut bg);
            self.render_window(ly, &mut bg);
        } else {
            for x in 0..SCREEN_WIDTH {
                self.put_pixel(x, [0xFF; 3]);
            }
        }

        if self.lcdc & 0x02 != 0 {
            self.render_sprites(ly, &bg);
        }
    }

    fn put_pixel(&mut self, x: usize, rgb: [u8; 3]) {
        let index = (self.ly as usize * SCREEN_WIDTH + x) * 3;
        self.back[index..index + 3].copy_from_slice(&rgb);
    }

    /// VRAM offset of the first row of BG/window tile `tile`.
    fn bg_tile_base(&self, tile: u8) -> u16 {
        if self.lcdc & 0x10 != 0 {
            0x8000 + tile as u16 * 16
        } else {
            (0x9000i32 + (tile as i8 as i32) * 16) as u16
        }
    }

    /// Color index of one pixel of a map tile. `map_x`/`map_y` are in the
    /// 256x256 map space.
    fn map_pixel(&self, map_base: u16, map_x: u8, map_y: u8) -> (u8, u8) {
        let map_addr = map_base + (map_y as u16 / 8) * 32 + map_x as u16 / 8;
        let tile = self.vram_banked(0, map_addr);
        let attr = if self.cgb {
            self.vram_banked(1, map_addr)
        } else {
            0
        };

        let mut row = (map_y & 7) as u16;
        let mut col = map_x & 7;
        if attr & 0x40 != 0 {
            row = 7 - row;
        }
        if attr & 0x20 != 0 {
            col = 7 - col;
        }
        let bank = (attr >> 3) & 0x01;
        let addr = self.bg_tile_base(tile) + row * 2;
        let lo = self.vram_banked(bank, addr);
        let hi = self.vram_banked(bank, addr + 1);
        let bit = 7 - col;
        let color = (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1);
        (color, attr)
    }

    fn bg_rgb(&self, color: u8, attr: u8) -> [u8; 3] {
        if self.cgb {
            self.bg_palettes.rgb(attr & 0x07, color)
        } else {
            let shade = dmg_shade(self.bgp, color);
            [shade; 3]
        }
    }

    fn render_background(&mut self, ly: u8, bg: &mut [BgPixel; SCREEN_WIDTH]) {
        let map_base = if self.lcdc & 0x08 != 0 { 0x9C00 } else { 0x9800 };
        let map_y = ly.wrapping_add(self.scy);
        for x in 0..SCREEN_WIDTH {
            let map_x = (x as u8).wrapping_add(self.scx);
            let (color, attr) = self.map_pixel(map_base, map_x, map_y);
            bg[x] = BgPixel {
                color,
                priority: attr & 0x80 != 0,
            };
            let rgb = self.bg_rgb(color, attr);
            self.put_pixel(x, rgb);
        }
    }

    fn render_window(&mut self, ly: u8, bg: &mut [BgPixel; SCREEN_WIDTH]) {
        if self.lcdc & 0x20 == 0 || ly < self.wy || self.wx > 166 {
            return;
        }
        let map_base = if self.lcdc & 0x40 != 0 { 0x9C00 } else { 0x9800 };
        let start = self.wx as i16 - 7;
        let map_y = self.window_line;
        let mut drawn = false;
        for x in start.max(0) as usize..SCREEN_WIDTH {
            let map_x = (x as i16 - start) as u8;
            let (color, attr) = self.map_pixel(map_base, map_x, map_y);
            bg[x] = BgPixel {
                color,
                priority: attr & 0x80 != 0,
            };
            let rgb = self.bg_rgb(color, attr);
            self.put_pixel(x, rgb);
            drawn = true;
        }
        if drawn {
            self.window_line = self.window_line.wrapping_add(1);
        }
    }

    /// OAM indices of the sprites shown on line `ly`, highest priority
    /// first.
    pub(in crate::machine) fn sprites_on_line(&self, ly: u8) -> Vec<usize> {
        let height: i16 = if self.lcdc & 0x04 != 0 { 16 } else { 8 };
        let mut selected: Vec<usize> = (0..40)
            .filter(|&i| {
                let top = self.oam[i * 4] as i16 - 16;
                (top..top + height).contains(&(ly as i16))
            })
            .take(MAX_SPRITES_PER_LINE)
            .collect();

        // DMG-style ordering: smaller X wins, ties go to the lower OAM
        // index, which the stable sort preserves.
        if self.opri & 0x01 != 0 {
            selected.sort_by_key(|&i| self.oam[i * 4 + 1]);
        }
        selected
    }

    fn render_sprites(&mut self, ly: u8, bg: &[BgPixel; SCREEN_WIDTH]) {
        let tall = self.lcdc & 0x04 != 0;
        let height: i16 = if tall { 16 } else { 8 };
        let mut claimed = [false; SCREEN_WIDTH];

        for index in self.sprites_on_line(ly) {
            let base = index * 4;
            let top = self.oam[base] as i16 - 16;
            let left = self.oam[base + 1] as i16 - 8;
            let mut tile = self.oam[base + 2];
            let attr = self.oam[base + 3];
            if tall {
                tile &= 0xFE;
            }

            let mut row = ly as i16 - top;
            if attr & 0x40 != 0 {
                row = height - 1 - row;
            }
            let bank = if self.cgb { (attr >> 3) & 0x01 } else { 0 };
            let addr = 0x8000 + tile as u16 * 16 + row as u16 * 2;
            let lo = self.vram_banked(bank, addr);
            let hi = self.vram_banked(bank, addr + 1);

            for col in 0..8i16 {
                let x = left + col;
                if !(0..SCREEN_WIDTH as i16).contains(&x) {
                    continue;
                }
                let x = x as usize;
                if claimed[x] {
                    continue;
                }
                let bit = if attr & 0x20 != 0 { col } else { 7 - col } as u8;
                let color = (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1);
                if color == 0 {
                    continue;
                }
                claimed[x] = true;

                if self.sprite_hidden(attr, bg[x]) {
                    continue;
                }
                let rgb = if self.cgb {
                    self.obj_palettes.rgb(attr & 0x07, color)
                } else {
                    let palette = if attr & 0x10 != 0 { self.obp1 } else { self.obp0 };
                    [dmg_shade(palette, color); 3]
                };
                self.put_pixel(x, rgb);
            }
        }
    }

    fn sprite_hidden(&self, attr: u8, bg: BgPixel) -> bool {
        if bg.color == 0 {
            return false;
        }
        if self.cgb {
            // LCDC.0 clear on CGB gives sprites priority everywhere.
            self.lcdc & 0x01 != 0 && (bg.priority || attr & 0x80 != 0)
        } else {
            attr & 0x80 != 0
        }
    }
}
