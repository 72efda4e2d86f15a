use anyhow::{bail, Result};

use super::Mirroring;

pub const PRG_UNIT: usize = 0x4000;
pub const CHR_UNIT: usize = 0x2000;
const TRAINER_LEN: usize = 512;

/// Fields of the 16-byte iNES header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NesHeader {
    /// PRG ROM size in 16 KiB units.
    pub prg_units: usize,
    /// CHR ROM size in 8 KiB units; 0 means the board carries CHR RAM.
    pub chr_units: usize,
    pub mapper: u8,
    pub mirroring: Mirroring,
    pub battery: bool,
    pub trainer: bool,
}

impl NesHeader {
    pub fn parse(rom: &[u8]) -> Result<Self> {
        if rom.len() < 16 {
            bail!("ROM is only {} bytes, shorter than the iNES header", rom.len());
        }
        if &rom[0..4] != b"NES\x1A" {
            bail!("missing iNES magic");
        }

        let flags6 = rom[6];
        let flags7 = rom[7];
        // Old dumpers wrote junk such as "DiskDude!" into bytes 7-15; the
        // upper mapper nibble is only trusted when the tail is clean.
        let clean_tail = rom[12..16].iter().all(|&b| b == 0);
        let mapper = if clean_tail {
            (flags7 & 0xF0) | (flags6 >> 4)
        } else {
            flags6 >> 4
        };
        // Four-screen boards are treated as vertical.
        let mirroring = if flags6 & 0x09 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let header = Self {
            prg_units: rom[4] as usize,
            chr_units: rom[5] as usize,
            mapper,
            mirroring,
            battery: flags6 & 0x02 != 0,
            trainer: flags6 & 0x04 != 0,
        };
        if header.prg_units == 0 {
            bail!("iNES header declares no PRG ROM");
        }
        let needed = header.prg_offset() + header.prg_len() + header.chr_len();
        if rom.len() < needed {
            bail!(
                "ROM is {} bytes but the header needs {} (PRG {} x 16K, CHR {} x 8K)",
                rom.len(),
                needed,
                header.prg_units,
                header.chr_units
            );
        }
        Ok(header)
    }

    /// File offset of the first PRG byte.
    pub fn prg_offset(&self) -> usize {
        16 + if self.trainer { TRAINER_LEN } else { 0 }
    }

    pub fn prg_len(&self) -> usize {
        self.prg_units * PRG_UNIT
    }

    pub fn chr_len(&self) -> usize {
        self.chr_units * CHR_UNIT
    }

    pub fn mapper_name(&self) -> &'static str {
        match self.mapper {
            0 => "NROM",
            2 => "UxROM",
            3 => "CNROM",
            4 => "MMC3",
            _ => "unsupported",
        }
    }
}
