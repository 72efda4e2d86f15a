use super::{bank_offset, Mirroring};

const PRG_BANK: usize = 0x2000;
const CHR_1K: usize = 0x0400;

/// Mapper 4 (MMC3): 8 KiB PRG banks, 1/2 KiB CHR banks, switchable
/// mirroring and a scanline counter IRQ.
#[derive(Debug)]
pub(in super::super) struct Mmc3 {
    /// Bank select: bits 0-2 pick R0-R7, bit 6 PRG mode, bit 7 CHR A12
    /// inversion.
    select: u8,
    /// R0/R1 2 KiB CHR, R2-R5 1 KiB CHR, R6/R7 8 KiB PRG.
    regs: [u8; 8],
    mirroring: Mirroring,
    irq_latch: u8,
    irq_counter: u8,
    irq_reload: bool,
    irq_enabled: bool,
    irq_pending: bool,
}

impl Mmc3 {
    pub(super) fn new(mirroring: Mirroring) -> Self {
        Self {
            select: 0,
            regs: [0, 2, 4, 5, 6, 7, 0, 1],
            mirroring,
            irq_latch: 0,
            irq_counter: 0,
            irq_reload: false,
            irq_enabled: false,
            irq_pending: false,
        }
    }

    pub(super) fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub(super) fn prg_offset(&self, addr: u16, prg_len: usize) -> usize {
        let banks = (prg_len / PRG_BANK).max(1);
        let second_last = banks.saturating_sub(2);
        let r6 = (self.regs[6] & 0x3F) as usize;
        let r7 = (self.regs[7] & 0x3F) as usize;
        let swap = self.select & 0x40 != 0;

        let bank = match (addr - 0x8000) / PRG_BANK as u16 {
            0 if swap => second_last,
            0 => r6,
            1 => r7,
            2 if swap => r6,
            2 => second_last,
            _ => banks - 1,
        };
        bank_offset(prg_len, PRG_BANK, bank, addr as usize)
    }

    pub(super) fn chr_offset(&self, addr: u16, chr_len: usize) -> usize {
        // With inversion the 2 KiB pair moves to 0x1000.
        let addr = if self.select & 0x80 != 0 {
            addr ^ 0x1000
        } else {
            addr
        };
        let bank_1k = match addr {
            0x0000..=0x07FF => (self.regs[0] & 0xFE) as usize + ((addr as usize >> 10) & 1),
            0x0800..=0x0FFF => (self.regs[1] & 0xFE) as usize + ((addr as usize >> 10) & 1),
            0x1000..=0x13FF => self.regs[2] as usize,
            0x1400..=0x17FF => self.regs[3] as usize,
            0x1800..=0x1BFF => self.regs[4] as usize,
            _ => self.regs[5] as usize,
        };
        bank_offset(chr_len, CHR_1K, bank_1k, addr as usize)
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        let even = addr & 1 == 0;
        match (addr, even) {
            (0x8000..=0x9FFF, true) => self.select = value,
            (0x8000..=0x9FFF, false) => {
                let index = (self.select & 0x07) as usize;
                self.regs[index] = value;
                log::debug!("NES MMC3: R{} = 0x{:02X}", index, value);
            }
            (0xA000..=0xBFFF, true) => {
                self.mirroring = if value & 1 == 0 {
                    Mirroring::Vertical
                } else {
                    Mirroring::Horizontal
                };
            }
            // PRG RAM protect is left open.
            (0xA000..=0xBFFF, false) => {}
            (0xC000..=0xDFFF, true) => self.irq_latch = value,
            (0xC000..=0xDFFF, false) => {
                self.irq_counter = 0;
                self.irq_reload = true;
            }
            (0xE000..=0xFFFF, true) => {
                self.irq_enabled = false;
                self.irq_pending = false;
            }
            (0xE000..=0xFFFF, false) => self.irq_enabled = true,
            _ => {}
        }
    }

    /// Clock the scanline counter, once per rendered line.
    pub(super) fn clock_scanline(&mut self) {
        if self.irq_counter == 0 || self.irq_reload {
            self.irq_counter = self.irq_latch;
            self.irq_reload = false;
        } else {
            self.irq_counter -= 1;
        }
        if self.irq_counter == 0 && self.irq_enabled {
            self.irq_pending = true;
        }
    }

    pub(super) fn irq_pending(&self) -> bool {
        self.irq_pending
    }
}
