use super::{ram_offset, rom_offset};

/// 32 KiB ROM with no bank controller, optionally with 8 KiB of RAM.
pub(in super::super) struct RomOnlyCartridge {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
}

impl RomOnlyCartridge {
    pub(super) fn new(rom: &[u8], ram: Vec<u8>) -> Self {
        Self {
            rom: rom.to_vec(),
            ram,
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let bank = (addr as usize) >> 14;
        let index = rom_offset(self.rom.len(), bank, addr);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        match ram_offset(self.ram.len(), 0, addr) {
            Some(i) => self.ram[i],
            None => 0xFF,
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if let Some(i) = ram_offset(self.ram.len(), 0, addr) {
            self.ram[i] = value;
        }
    }
}
