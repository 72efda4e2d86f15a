use super::{ram_offset, rom_offset};

/// MBC1: 5-bit ROM bank register plus a 2-bit register that either extends
/// the ROM bank or selects the RAM bank, depending on the banking mode.
pub(in super::super) struct Mbc1Cartridge {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
    rom_bank_low5: u8,
    bank_high2: u8,
    ram_enable: bool,
    /// 0: bank 0 fixed at 0x0000 and RAM bank 0. 1: the high bits also
    /// apply to the 0x0000 window and select the RAM bank.
    banking_mode: u8,
}

impl Mbc1Cartridge {
    pub(super) fn new(rom: &[u8], ram: Vec<u8>) -> Self {
        Self {
            rom: rom.to_vec(),
            ram,
            rom_bank_low5: 1,
            bank_high2: 0,
            ram_enable: false,
            banking_mode: 0,
        }
    }

    fn rom_bank(&self, addr: u16) -> usize {
        let high = (self.bank_high2 as usize) << 5;
        if addr < 0x4000 {
            if self.banking_mode == 1 {
                high
            } else {
                0
            }
        } else {
            high | self.rom_bank_low5 as usize
        }
    }

    fn ram_bank(&self) -> usize {
        if self.banking_mode == 1 {
            self.bank_high2 as usize
        } else {
            0
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let index = rom_offset(self.rom.len(), self.rom_bank(addr), addr);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enable = (value & 0x0F) == 0x0A,
            0x2000..=0x3FFF => {
                // Bank 0 cannot be selected in the switchable window; the
                // zero check only looks at the 5 register bits.
                self.rom_bank_low5 = (value & 0x1F).max(1);
                log::debug!("MBC1 ROM bank low bits = {}", self.rom_bank_low5);
            }
            0x4000..=0x5FFF => self.bank_high2 = value & 0x03,
            0x6000..=0x7FFF => self.banking_mode = value & 0x01,
            _ => {}
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        match ram_offset(self.ram.len(), self.ram_bank(), addr) {
            Some(i) => self.ram[i],
            None => 0xFF,
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        if let Some(i) = ram_offset(self.ram.len(), self.ram_bank(), addr) {
            self.ram[i] = value;
        }
    }
}
