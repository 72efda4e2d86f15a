//! Scanline-based LCD controller.
//!
//! Each line is 456 dots: mode 2 (OAM scan) for 80 dots, mode 3 (pixel
//! transfer) until dot 252 and mode 0 (HBlank) for the remainder. Lines
//! 144-153 are VBlank. The whole line is rendered at the mode 3 → 0
//! transition into a back buffer which is swapped to the front when
//! VBlank begins, so `frame()` always shows the last completed picture.

mod palette;
mod render;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use palette::ColorPalettes;

pub(super) const DOTS_PER_LINE: u32 = 456;
pub(super) const LINES_PER_FRAME: u8 = 154;
const VISIBLE_LINES: u8 = 144;
const MODE2_END: u32 = 80;
const MODE3_END: u32 = 252;
const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Transfer = 3,
}

pub(super) struct Ppu {
    cgb: bool,
    /// Two 8 KiB banks back to back; bank 1 only exists on CGB.
    vram: Vec<u8>,
    vram_bank: u8,
    oam: [u8; 0xA0],

    lcdc: u8,
    /// Interrupt select bits 3..6 only; mode and coincidence are derived.
    stat_select: u8,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    wy: u8,
    wx: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    /// Object priority mode (0xFF6C); bit 0 set selects X-coordinate
    /// ordering like the DMG.
    opri: u8,
    bg_palettes: ColorPalettes,
    obj_palettes: ColorPalettes,

    dot: u32,
    mode: Mode,
    /// Internal window line counter; only advances on lines where the
    /// window actually produced pixels.
    window_line: u8,
    /// Logical OR of all enabled STAT sources, for edge detection.
    stat_line: bool,
    /// HBlank entries since the bus last collected them, for HDMA.
    hblanks: u32,

    front: Vec<u8>,
    back: Vec<u8>,
    frames: u64,
}

impl Ppu {
    pub(super) fn new(cgb: bool) -> Self {
        Self {
            cgb,
            vram: vec![0; 0x4000],
            vram_bank: 0,
            oam: [0; 0xA0],
            lcdc: 0,
            stat_select: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            wy: 0,
            wx: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            opri: if cgb { 0x00 } else { 0x01 },
            bg_palettes: ColorPalettes::new(),
            obj_palettes: ColorPalettes::new(),
            dot: 0,
            mode: Mode::HBlank,
            window_line: 0,
            stat_line: false,
            hblanks: 0,
            front: vec![0xFF; FRAME_BYTES],
            back: vec![0xFF; FRAME_BYTES],
            frames: 0,
        }
    }

    /// LCD on with the background enabled, the state left by the boot ROM.
    pub(super) fn init_post_boot(&mut self) {
        self.lcdc = 0x91;
        self.stat_select = 0x00;
        self.bgp = 0xFC;
        self.obp0 = 0xFF;
        self.obp1 = 0xFF;
        self.ly = 0;
        self.dot = 0;
        self.mode = Mode::OamScan;
    }

    #[inline]
    pub(super) fn lcd_enabled(&self) -> bool {
        self.lcdc & 0x80 != 0
    }

    pub(super) fn frame(&self) -> &[u8] {
        &self.front
    }

    pub(super) fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of HBlank periods entered since the last call.
    pub(super) fn take_hblanks(&mut self) -> u32 {
        std::mem::take(&mut self.hblanks)
    }

    /// Advance by `dots` PPU clocks, requesting VBlank (bit 0) and STAT
    /// (bit 1) interrupts in `if_reg`.
    pub(super) fn step(&mut self, dots: u32, if_reg: &mut u8) {
        if !self.lcd_enabled() {
            return;
        }

        let mut remaining = dots;
        while remaining > 0 {
            let boundary = if self.ly < VISIBLE_LINES {
                if self.dot < MODE2_END {
                    MODE2_END
                } else if self.dot < MODE3_END {
                    MODE3_END
                } else {
                    DOTS_PER_LINE
                }
            } else {
                DOTS_PER_LINE
            };
            let chunk = remaining.min(boundary - self.dot);
            self.dot += chunk;
            remaining -= chunk;

            if self.ly < VISIBLE_LINES && self.dot == MODE2_END {
                self.mode = Mode::Transfer;
            } else if self.ly < VISIBLE_LINES && self.dot == MODE3_END {
                self.render_line();
                self.mode = Mode::HBlank;
                self.hblanks += 1;
            } else if self.dot == DOTS_PER_LINE {
                self.dot = 0;
                self.next_line(if_reg);
            }
            self.update_stat_line(if_reg);
        }
    }

    fn next_line(&mut self, if_reg: &mut u8) {
        self.ly += 1;
        if self.ly == VISIBLE_LINES {
            self.mode = Mode::VBlank;
            *if_reg |= 0x01;
            std::mem::swap(&mut self.front, &mut self.back);
            self.frames += 1;
            self.window_line = 0;
        } else if self.ly == LINES_PER_FRAME {
            self.ly = 0;
            self.mode = Mode::OamScan;
        } else if self.ly < VISIBLE_LINES {
            self.mode = Mode::OamScan;
        }
    }

    fn stat_sources(&self) -> bool {
        let s = self.stat_select;
        (s & 0x40 != 0 && self.ly == self.lyc)
            || (s & 0x08 != 0 && self.mode == Mode::HBlank)
            || (s & 0x10 != 0 && self.mode == Mode::VBlank)
            || (s & 0x20 != 0 && self.mode == Mode::OamScan)
    }

    /// STAT requests INT $48 only on a rising edge of the combined line.
    fn update_stat_line(&mut self, if_reg: &mut u8) {
        let line = self.lcd_enabled() && self.stat_sources();
        if line && !self.stat_line {
            *if_reg |= 0x02;
        }
        self.stat_line = line;
    }

    // --- CPU-visible memory ---

    #[inline]
    fn vram_blocked(&self) -> bool {
        self.lcd_enabled() && self.mode == Mode::Transfer
    }

    #[inline]
    fn oam_blocked(&self) -> bool {
        self.lcd_enabled() && matches!(self.mode, Mode::OamScan | Mode::Transfer)
    }

    pub(super) fn read_vram(&self, addr: u16) -> u8 {
        if self.vram_blocked() {
            return 0xFF;
        }
        self.vram_banked(self.vram_bank, addr)
    }

    pub(super) fn write_vram(&mut self, addr: u16, value: u8) {
        if self.vram_blocked() {
            return;
        }
        self.write_vram_raw(addr, value);
    }

    /// VRAM write from HDMA, which the PPU does not lock out.
    pub(super) fn write_vram_raw(&mut self, addr: u16, value: u8) {
        let index = self.vram_bank as usize * 0x2000 + (addr as usize & 0x1FFF);
        self.vram[index] = value;
    }

    #[inline]
    fn vram_banked(&self, bank: u8, addr: u16) -> u8 {
        self.vram[bank as usize * 0x2000 + (addr as usize & 0x1FFF)]
    }

    pub(super) fn read_oam(&self, addr: u16) -> u8 {
        if self.oam_blocked() {
            return 0xFF;
        }
        self.oam[(addr - 0xFE00) as usize]
    }

    pub(super) fn write_oam(&mut self, addr: u16, value: u8) {
        if self.oam_blocked() {
            return;
        }
        self.oam[(addr - 0xFE00) as usize] = value;
    }

    /// OAM write from the DMA engine.
    pub(super) fn write_oam_raw(&mut self, index: usize, value: u8) {
        self.oam[index] = value;
    }

    // --- registers ---

    pub(super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc,
            0xFF41 => {
                let mode = if self.lcd_enabled() { self.mode as u8 } else { 0 };
                let coincidence = if self.ly == self.lyc { 0x04 } else { 0 };
                0x80 | self.stat_select | coincidence | mode
            }
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            0xFF4F if self.cgb => 0xFE | self.vram_bank,
            0xFF68 if self.cgb => self.bg_palettes.read_index(),
            0xFF69 if self.cgb => self.bg_palettes.read_data(),
            0xFF6A if self.cgb => self.obj_palettes.read_index(),
            0xFF6B if self.cgb => self.obj_palettes.read_data(),
            0xFF6C if self.cgb => 0xFE | self.opri,
            _ => 0xFF,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8, if_reg: &mut u8) {
        match addr {
            0xFF40 => self.write_lcdc(value),
            0xFF41 => self.stat_select = value & 0x78,
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => self.lyc = value,
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            0xFF4F if self.cgb => self.vram_bank = value & 0x01,
            0xFF68 if self.cgb => self.bg_palettes.write_index(value),
            0xFF69 if self.cgb => self.bg_palettes.write_data(value),
            0xFF6A if self.cgb => self.obj_palettes.write_index(value),
            0xFF6B if self.cgb => self.obj_palettes.write_data(value),
            0xFF6C if self.cgb => self.opri = value & 0x01,
            _ => {}
        }
        self.update_stat_line(if_reg);
    }

    fn write_lcdc(&mut self, value: u8) {
        let was_enabled = self.lcd_enabled();
        self.lcdc = value;
        let now_enabled = self.lcd_enabled();

        if was_enabled && !now_enabled {
            self.ly = 0;
            self.dot = 0;
            self.mode = Mode::HBlank;
            self.stat_line = false;
            self.window_line = 0;
            self.front.fill(0xFF);
            self.back.fill(0xFF);
            log::debug!("GB PPU: LCD off");
        } else if !was_enabled && now_enabled {
            self.ly = 0;
            self.dot = 0;
            self.mode = Mode::OamScan;
            log::debug!("GB PPU: LCD on");
        }
    }
}

#[cfg(test)]
impl Ppu {
    pub(super) fn ly(&self) -> u8 {
        self.ly
    }

    pub(super) fn write_vram_bank(&mut self, bank: u8, addr: u16, value: u8) {
        self.vram[bank as usize * 0x2000 + (addr as usize & 0x1FFF)] = value;
    }
}
