use super::GameBoyBus;

impl GameBoyBus {
    pub(crate) fn read8_mmio(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),
            0x8000..=0x9FFF => self.ppu.read_vram(addr),
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),
            0xC000..=0xDFFF => self.wram[self.wram_index(addr)],
            // Echo RAM mirrors 0xC000..0xDDFF.
            0xE000..=0xFDFF => self.read8_mmio(addr - 0x2000),
            0xFE00..=0xFE9F => self.ppu.read_oam(addr),
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF7F => self.read_io(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie_reg | 0xE0,
        }
    }

    fn read_io(&self, addr: u16) -> u8 {
        match addr {
            0xFF00 => self.joypad.read(),
            0xFF01 => self.serial.sb,
            0xFF02 => self.serial.read_sc(),
            0xFF04 => self.timer.read_div(),
            0xFF05 => self.timer.tima,
            0xFF06 => self.timer.tma,
            0xFF07 => self.timer.read_tac(),
            0xFF0F => self.if_reg | 0xE0,
            0xFF10..=0xFF3F => self.apu.read_register(addr),
            0xFF46 => self.oam_dma.register,
            0xFF40..=0xFF4B | 0xFF4F | 0xFF68..=0xFF6C => self.ppu.read_register(addr),
            0xFF4D if self.is_cgb() => {
                let speed = if self.double_speed { 0x80 } else { 0x00 };
                0x7E | speed | self.key1_armed as u8
            }
            0xFF55 if self.is_cgb() => self.read_hdma5(),
            0xFF70 if self.is_cgb() => 0xF8 | self.wram_bank,
            _ => 0xFF,
        }
    }
}
