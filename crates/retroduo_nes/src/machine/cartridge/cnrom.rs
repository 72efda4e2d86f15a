use super::{bank_offset, CHR_UNIT};

/// Mapper 3: fixed PRG, switchable 8 KiB CHR bank.
#[derive(Debug, Default)]
pub(in super::super) struct Cnrom {
    chr_bank: usize,
}

impl Cnrom {
    pub(super) fn prg_offset(&self, addr: u16) -> usize {
        (addr as usize) & 0x7FFF
    }

    pub(super) fn chr_offset(&self, addr: u16, chr_len: usize) -> usize {
        bank_offset(chr_len, CHR_UNIT, self.chr_bank, addr as usize)
    }

    pub(super) fn write_register(&mut self, value: u8) {
        self.chr_bank = (value & 0x03) as usize;
        log::debug!("NES CNROM: CHR bank {}", self.chr_bank);
    }
}
