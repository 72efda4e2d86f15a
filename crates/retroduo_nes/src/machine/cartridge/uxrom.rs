use super::{bank_offset, PRG_UNIT};

/// Mapper 2: switchable 16 KiB bank at 0x8000, last bank fixed at 0xC000.
#[derive(Debug, Default)]
pub(in super::super) struct Uxrom {
    bank: usize,
}

impl Uxrom {
    pub(super) fn prg_offset(&self, addr: u16, prg_len: usize) -> usize {
        let banks = (prg_len / PRG_UNIT).max(1);
        let bank = if addr < 0xC000 { self.bank } else { banks - 1 };
        bank_offset(prg_len, PRG_UNIT, bank, addr as usize)
    }

    pub(super) fn chr_offset(&self, addr: u16) -> usize {
        addr as usize
    }

    pub(super) fn write_register(&mut self, value: u8, prg_len: usize) {
        let banks = (prg_len / PRG_UNIT).max(1);
        self.bank = (value & 0x0F) as usize % banks;
        log::debug!("NES UxROM: PRG bank {}", self.bank);
    }
}
