use super::{ram_offset, rom_offset};

/// MBC3: 7-bit ROM bank, four RAM banks and the RTC register window.
///
/// The clock registers can be selected, latched, read and written, but the
/// clock itself does not advance.
pub(in super::super) struct Mbc3Cartridge {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
    rom_bank: u8,
    /// 0x00-0x03 selects a RAM bank, 0x08-0x0C an RTC register.
    ram_rtc_select: u8,
    ram_enable: bool,
    latch_clock: u8,
    rtc: [u8; 5],
    rtc_latched: [u8; 5],
}

impl Mbc3Cartridge {
    pub(super) fn new(rom: &[u8], ram: Vec<u8>) -> Self {
        Self {
            rom: rom.to_vec(),
            ram,
            rom_bank: 1,
            ram_rtc_select: 0,
            ram_enable: false,
            latch_clock: 0xFF,
            rtc: [0; 5],
            rtc_latched: [0; 5],
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            self.rom_bank as usize
        };
        let index = rom_offset(self.rom.len(), bank, addr);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enable = (value & 0x0F) == 0x0A,
            0x2000..=0x3FFF => self.rom_bank = (value & 0x7F).max(1),
            0x4000..=0x5FFF => self.ram_rtc_select = value & 0x0F,
            0x6000..=0x7FFF => {
                // Writing 0 then 1 copies the live clock into the latch.
                if self.latch_clock == 0 && value == 1 {
                    self.rtc_latched = self.rtc;
                }
                self.latch_clock = value;
            }
            _ => {}
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        match self.ram_rtc_select {
            0x00..=0x03 => match ram_offset(self.ram.len(), self.ram_rtc_select as usize, addr) {
                Some(i) => self.ram[i],
                None => 0xFF,
            },
            0x08..=0x0C => self.rtc_latched[(self.ram_rtc_select - 0x08) as usize],
            _ => 0xFF,
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        match self.ram_rtc_select {
            0x00..=0x03 => {
                if let Some(i) = ram_offset(self.ram.len(), self.ram_rtc_select as usize, addr) {
                    self.ram[i] = value;
                }
            }
            0x08..=0x0C => {
                let reg = (self.ram_rtc_select - 0x08) as usize;
                self.rtc[reg] = value;
                self.rtc_latched[reg] = value;
            }
            _ => {}
        }
    }
}
