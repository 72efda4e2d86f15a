use super::GameBoyBus;

const OAM_SIZE: u8 = 0xA0;
const HDMA_BLOCK: u16 = 0x10;

/// OAM DMA (0xFF46): one byte copied per CPU step while active.
#[derive(Default)]
pub(super) struct OamDma {
    /// Last value written to 0xFF46.
    pub(super) register: u8,
    pub(super) active: bool,
    pub(super) index: u8,
}

/// CGB VRAM DMA (HDMA1-5).
#[derive(Default)]
pub(super) struct Hdma {
    pub(super) source: u16,
    pub(super) dest: u16,
    /// 16-byte blocks still to copy in HBlank mode.
    pub(super) remaining: u8,
    pub(super) hblank_active: bool,
    /// Set when an HBlank transfer was stopped early; `remaining` keeps the
    /// blocks it did not copy.
    pub(super) cancelled: bool,
}

impl GameBoyBus {
    pub(super) fn write_oam_dma(&mut self, value: u8) {
        self.oam_dma.register = value;
        if value <= 0xDF {
            self.oam_dma.active = true;
            self.oam_dma.index = 0;
        }
    }

    /// Copy the next byte of the OAM DMA transfer. A source register above
    /// 0xDF while a transfer is running is an impossible state and faults.
    pub(super) fn oam_dma_step(&mut self) {
        if !self.oam_dma.active {
            return;
        }
        if self.oam_dma.register > 0xDF {
            let reason = format!(
                "OAM DMA active with source register 0x{:02X}",
                self.oam_dma.register
            );
            log::error!("GB bus fault: {reason}");
            self.fault = Some(reason);
            self.oam_dma.active = false;
            return;
        }
        let source = ((self.oam_dma.register as u16) << 8) | self.oam_dma.index as u16;
        let value = self.read8_mmio(source);
        self.ppu.write_oam_raw(self.oam_dma.index as usize, value);
        self.oam_dma.index += 1;
        if self.oam_dma.index == OAM_SIZE {
            self.oam_dma.active = false;
            self.oam_dma.index = 0;
        }
    }

    pub(super) fn write_hdma(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF51 => self.hdma.source = (self.hdma.source & 0x00FF) | ((value as u16) << 8),
            0xFF52 => self.hdma.source = (self.hdma.source & 0xFF00) | (value as u16 & 0xF0),
            0xFF53 => {
                self.hdma.dest = (self.hdma.dest & 0x00FF) | (((value as u16) & 0x1F) << 8)
            }
            0xFF54 => self.hdma.dest = (self.hdma.dest & 0xFF00) | (value as u16 & 0xF0),
            0xFF55 => self.write_hdma5(value),
            _ => {}
        }
    }

    fn write_hdma5(&mut self, value: u8) {
        if self.hdma.hblank_active && value & 0x80 == 0 {
            // Writing with bit 7 clear during an HBlank DMA stops it.
            self.hdma.hblank_active = false;
            self.hdma.cancelled = true;
            log::debug!(
                "GB HDMA: HBlank transfer cancelled with {} blocks left",
                self.hdma.remaining
            );
            return;
        }

        let blocks = (value & 0x7F) + 1;
        self.hdma.cancelled = false;
        if value & 0x80 != 0 {
            self.hdma.remaining = blocks;
            self.hdma.hblank_active = true;
            // With the LCD off there is no HBlank; copy one block now so the
            // transfer still makes progress.
            if !self.ppu.lcd_enabled() {
                self.hdma_hblank_block();
            }
        } else {
            for _ in 0..blocks {
                self.hdma_copy_block();
            }
            self.hdma.remaining = 0;
        }
    }

    /// Bit 7 is clear while an HBlank transfer runs. A cancelled transfer
    /// reads back bit 7 set over the length it stopped at.
    pub(super) fn read_hdma5(&self) -> u8 {
        let length = self.hdma.remaining.wrapping_sub(1) & 0x7F;
        if self.hdma.hblank_active {
            length
        } else if self.hdma.cancelled {
            0x80 | length
        } else {
            0xFF
        }
    }

    /// Copy one 16-byte block from `source` into VRAM at `dest` and advance
    /// both pointers.
    fn hdma_copy_block(&mut self) {
        for i in 0..HDMA_BLOCK {
            let value = self.read8_mmio(self.hdma.source.wrapping_add(i));
            let dest = 0x8000 | (self.hdma.dest.wrapping_add(i) & 0x1FFF);
            self.ppu.write_vram_raw(dest, value);
        }
        self.hdma.source = self.hdma.source.wrapping_add(HDMA_BLOCK);
        self.hdma.dest = (self.hdma.dest + HDMA_BLOCK) & 0x1FF0;
    }

    pub(super) fn hdma_hblank_block(&mut self) {
        if !self.hdma.hblank_active {
            return;
        }
        self.hdma_copy_block();
        self.hdma.remaining = self.hdma.remaining.saturating_sub(1);
        if self.hdma.remaining == 0 {
            self.hdma.hblank_active = false;
        }
    }
}
