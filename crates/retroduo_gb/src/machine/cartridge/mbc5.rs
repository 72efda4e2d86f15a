use super::{ram_offset, rom_offset};

/// MBC5: 9-bit ROM bank (bank 0 selectable in the upper window) and up to
/// 16 RAM banks. Rumble motor bits are ignored.
pub(in super::super) struct Mbc5Cartridge {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
    rom_bank_low8: u8,
    rom_bank_high1: u8,
    ram_bank: u8,
    ram_enable: bool,
}

impl Mbc5Cartridge {
    pub(super) fn new(rom: &[u8], ram: Vec<u8>) -> Self {
        Self {
            rom: rom.to_vec(),
            ram,
            rom_bank_low8: 1,
            rom_bank_high1: 0,
            ram_bank: 0,
            ram_enable: false,
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            ((self.rom_bank_high1 as usize) << 8) | self.rom_bank_low8 as usize
        };
        let index = rom_offset(self.rom.len(), bank, addr);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enable = (value & 0x0F) == 0x0A,
            0x2000..=0x2FFF => self.rom_bank_low8 = value,
            0x3000..=0x3FFF => self.rom_bank_high1 = value & 0x01,
            0x4000..=0x5FFF => self.ram_bank = value & 0x0F,
            _ => {}
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        match ram_offset(self.ram.len(), self.ram_bank as usize, addr) {
            Some(i) => self.ram[i],
            None => 0xFF,
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        if let Some(i) = ram_offset(self.ram.len(), self.ram_bank as usize, addr) {
            self.ram[i] = value;
        }
    }
}
