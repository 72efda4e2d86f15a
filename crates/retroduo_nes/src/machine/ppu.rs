//! 2C02 picture processing unit, rendered a scanline at a time.
//!
//! A frame is 262 lines of 341 dots. Lines 0-239 are visible and are drawn
//! whole when their last dot passes; line 241 starts VBlank (flag, NMI and
//! the back/front buffer swap) and line 261 is the pre-render line that
//! clears the status flags and reloads the vertical scroll.

mod palette;
mod render;
mod scroll;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::cartridge::{Cartridge, Mirroring};

pub(super) const DOTS_PER_LINE: u32 = 341;
pub(super) const LINES_PER_FRAME: u16 = 262;
const VISIBLE_LINES: u16 = 240;
const VBLANK_LINE: u16 = 241;
const PRE_RENDER_LINE: u16 = 261;
const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 3;

const STATUS_OVERFLOW: u8 = 0x20;
const STATUS_SPRITE0: u8 = 0x40;
const STATUS_VBLANK: u8 = 0x80;

pub(super) struct Ppu {
    ctrl: u8,
    mask: u8,
    status: u8,
    oam_addr: u8,
    pub(super) oam: [u8; 256],
    /// Two 1 KiB nametables; the cartridge picks the mirroring.
    vram: [u8; 0x800],
    palette: [u8; 32],

    /// Current VRAM address (15 bits).
    v: u16,
    /// Temporary VRAM address, the top-left of the next frame.
    t: u16,
    /// Fine X scroll.
    x: u8,
    /// First/second write toggle shared by PPUSCROLL and PPUADDR.
    w: bool,
    /// PPUDATA read buffer.
    read_buffer: u8,

    dot: u32,
    line: u16,
    nmi_pending: bool,

    front: Vec<u8>,
    back: Vec<u8>,
    frames: u64,
}

impl Ppu {
    pub(super) fn new() -> Self {
        Self {
            ctrl: 0,
            mask: 0,
            status: 0,
            oam_addr: 0,
            oam: [0; 256],
            vram: [0; 0x800],
            palette: [0; 32],
            v: 0,
            t: 0,
            x: 0,
            w: false,
            read_buffer: 0,
            dot: 0,
            line: 0,
            nmi_pending: false,
            front: vec![0; FRAME_BYTES],
            back: vec![0; FRAME_BYTES],
            frames: 0,
        }
    }

    pub(super) fn frame(&self) -> &[u8] {
        &self.front
    }

    pub(super) fn frame_count(&self) -> u64 {
        self.frames
    }

    #[inline]
    fn show_background(&self) -> bool {
        self.mask & 0x08 != 0
    }

    #[inline]
    fn show_sprites(&self) -> bool {
        self.mask & 0x10 != 0
    }

    #[inline]
    pub(super) fn rendering_enabled(&self) -> bool {
        self.show_background() || self.show_sprites()
    }

    #[inline]
    fn sprite_height(&self) -> u16 {
        if self.ctrl & 0x20 != 0 {
            16
        } else {
            8
        }
    }

    /// True once per VBlank entry with NMI enabled; clears the request.
    pub(super) fn take_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }

    /// Advance by `dots` PPU clocks (three per CPU cycle).
    pub(super) fn step(&mut self, dots: u32, cart: &mut Cartridge) {
        self.dot += dots;
        while self.dot >= DOTS_PER_LINE {
            self.dot -= DOTS_PER_LINE;
            self.finish_line(cart);
        }
    }

    fn finish_line(&mut self, cart: &mut Cartridge) {
        let line = self.line;
        if line < VISIBLE_LINES {
            self.render_line(line, cart);
        }
        if (line < VISIBLE_LINES || line == PRE_RENDER_LINE) && self.rendering_enabled() {
            self.increment_y();
            self.copy_horizontal();
            if line == PRE_RENDER_LINE {
                self.copy_vertical();
            }
            cart.clock_scanline();
        }

        self.line += 1;
        if self.line == LINES_PER_FRAME {
            self.line = 0;
        }

        match self.line {
            VBLANK_LINE => {
                std::mem::swap(&mut self.front, &mut self.back);
                self.frames += 1;
                self.status |= STATUS_VBLANK;
                if self.ctrl & 0x80 != 0 {
                    self.nmi_pending = true;
                }
            }
            PRE_RENDER_LINE => {
                self.status &= !(STATUS_VBLANK | STATUS_SPRITE0 | STATUS_OVERFLOW);
            }
            _ => {}
        }
    }

    /// Map a nametable address (0x2000-0x3EFF) into the 2 KiB of VRAM.
    fn nametable_index(addr: u16, mirroring: Mirroring) -> usize {
        let index = (addr as usize - 0x2000) & 0x0FFF;
        let table = index / 0x400;
        let physical = match mirroring {
            Mirroring::Vertical => table & 1,
            Mirroring::Horizontal => table >> 1,
        };
        physical * 0x400 + (index & 0x3FF)
    }

    pub(super) fn read_vram(&self, addr: u16, cart: &Cartridge) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => cart.ppu_read(addr),
            0x2000..=0x3EFF => self.vram[Self::nametable_index(addr, cart.mirroring())],
            _ => self.palette[palette::index(addr)],
        }
    }

    pub(super) fn write_vram(&mut self, addr: u16, value: u8, cart: &mut Cartridge) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => cart.ppu_write(addr, value),
            0x2000..=0x3EFF => self.vram[Self::nametable_index(addr, cart.mirroring())] = value,
            _ => self.palette[palette::index(addr)] = value & 0x3F,
        }
    }

    /// CPU read of 0x2000-0x2007.
    pub(super) fn read_register(&mut self, addr: u16, cart: &Cartridge) -> u8 {
        match addr & 7 {
            2 => {
                let value = (self.status & 0xE0) | (self.read_buffer & 0x1F);
                self.status &= !STATUS_VBLANK;
                self.w = false;
                value
            }
            4 => self.oam[self.oam_addr as usize],
            7 => {
                let addr = self.v & 0x3FFF;
                let value = if addr >= 0x3F00 {
                    // Palette reads are immediate; the buffer gets the
                    // nametable byte underneath.
                    self.read_buffer = self.read_vram(addr - 0x1000, cart);
                    self.read_vram(addr, cart)
                } else {
                    let buffered = self.read_buffer;
                    self.read_buffer = self.read_vram(addr, cart);
                    buffered
                };
                self.increment_v();
                value
            }
            // Write-only registers read back the last bus value.
            _ => self.read_buffer,
        }
    }

    /// CPU write of 0x2000-0x2007.
    pub(super) fn write_register(&mut self, addr: u16, value: u8, cart: &mut Cartridge) {
        match addr & 7 {
            0 => {
                let was_enabled = self.ctrl & 0x80 != 0;
                self.ctrl = value;
                self.t = (self.t & !0x0C00) | (((value & 0x03) as u16) << 10);
                // Enabling NMI during VBlank fires immediately.
                if !was_enabled && value & 0x80 != 0 && self.status & STATUS_VBLANK != 0 {
                    self.nmi_pending = true;
                }
            }
            1 => self.mask = value,
            3 => self.oam_addr = value,
            4 => {
                self.oam[self.oam_addr as usize] = value;
                self.oam_addr = self.oam_addr.wrapping_add(1);
            }
            5 => self.write_scroll(value),
            6 => self.write_addr(value),
            7 => {
                self.write_vram(self.v, value, cart);
                self.increment_v();
            }
            _ => {}
        }
    }

    /// One byte of OAM DMA, written at the current OAMADDR.
    pub(super) fn write_oam_dma(&mut self, value: u8) {
        self.oam[self.oam_addr as usize] = value;
        self.oam_addr = self.oam_addr.wrapping_add(1);
    }

    fn increment_v(&mut self) {
        let step = if self.ctrl & 0x04 != 0 { 32 } else { 1 };
        self.v = self.v.wrapping_add(step) & 0x7FFF;
    }
}

#[cfg(test)]
impl Ppu {
    pub(super) fn line(&self) -> u16 {
        self.line
    }

    pub(super) fn status(&self) -> u8 {
        self.status
    }
}
