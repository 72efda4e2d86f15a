mod cnrom;
mod header;
mod mmc3;
mod nrom;
mod uxrom;

use anyhow::{bail, Result};

pub use header::NesHeader;
pub(super) use header::{CHR_UNIT, PRG_UNIT};

use cnrom::Cnrom;
use mmc3::Mmc3;
use nrom::Nrom;
use uxrom::Uxrom;

const PRG_RAM_SIZE: usize = 0x2000;

/// Nametable arrangement selected by the board or the mapper.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Mirroring {
    #[default]
    Horizontal,
    Vertical,
}

/// Offset of `addr` inside bank `bank` of `bank_size`, with the bank number
/// wrapped to the banks that actually exist in a `len`-byte image.
pub(super) fn bank_offset(len: usize, bank_size: usize, bank: usize, addr: usize) -> usize {
    let banks = (len / bank_size).max(1);
    (bank % banks) * bank_size + (addr % bank_size)
}

/// Supported mappers.
enum Mapper {
    Nrom(Nrom),
    Uxrom(Uxrom),
    Cnrom(Cnrom),
    Mmc3(Mmc3),
}

/// iNES cartridge: PRG ROM, CHR ROM or RAM, 8 KiB PRG RAM at 0x6000 and
/// the mapper's bank state.
pub(super) struct Cartridge {
    pub(super) header: NesHeader,
    prg: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    prg_ram: Vec<u8>,
    mapper: Mapper,
}

impl Cartridge {
    pub(super) fn from_rom(rom: &[u8]) -> Result<Self> {
        let header = NesHeader::parse(rom)?;
        let mapper = match header.mapper {
            0 => Mapper::Nrom(Nrom),
            2 => Mapper::Uxrom(Uxrom::default()),
            3 => Mapper::Cnrom(Cnrom::default()),
            4 => Mapper::Mmc3(Mmc3::new(header.mirroring)),
            other => bail!("unsupported mapper {other}"),
        };

        let prg_start = header.prg_offset();
        let chr_start = prg_start + header.prg_len();
        let prg = rom[prg_start..chr_start].to_vec();
        let chr_is_ram = header.chr_units == 0;
        let chr = if chr_is_ram {
            vec![0; CHR_UNIT]
        } else {
            rom[chr_start..chr_start + header.chr_len()].to_vec()
        };

        Ok(Self {
            header,
            prg,
            chr,
            chr_is_ram,
            prg_ram: vec![0; PRG_RAM_SIZE],
            mapper,
        })
    }

    /// CPU read from 0x6000-0xFFFF.
    pub(super) fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize],
            0x8000..=0xFFFF => {
                let offset = match &self.mapper {
                    Mapper::Nrom(m) => m.prg_offset(addr),
                    Mapper::Uxrom(m) => m.prg_offset(addr, self.prg.len()),
                    Mapper::Cnrom(m) => m.prg_offset(addr),
                    Mapper::Mmc3(m) => m.prg_offset(addr, self.prg.len()),
                };
                self.prg[offset % self.prg.len()]
            }
            _ => 0,
        }
    }

    /// CPU write to 0x6000-0xFFFF: PRG RAM or mapper registers.
    pub(super) fn cpu_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize] = value,
            0x8000..=0xFFFF => match &mut self.mapper {
                Mapper::Nrom(_) => {}
                Mapper::Uxrom(m) => m.write_register(value, self.prg.len()),
                Mapper::Cnrom(m) => m.write_register(value),
                Mapper::Mmc3(m) => m.write_register(addr, value),
            },
            _ => {}
        }
    }

    fn chr_offset(&self, addr: u16) -> usize {
        let addr = addr & 0x1FFF;
        let offset = match &self.mapper {
            Mapper::Nrom(m) => m.chr_offset(addr),
            Mapper::Uxrom(m) => m.chr_offset(addr),
            Mapper::Cnrom(m) => m.chr_offset(addr, self.chr.len()),
            Mapper::Mmc3(m) => m.chr_offset(addr, self.chr.len()),
        };
        offset % self.chr.len()
    }

    /// PPU read from the pattern tables (0x0000-0x1FFF).
    pub(super) fn ppu_read(&self, addr: u16) -> u8 {
        self.chr[self.chr_offset(addr)]
    }

    /// Pattern table writes only land when the board has CHR RAM.
    pub(super) fn ppu_write(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            let offset = self.chr_offset(addr);
            self.chr[offset] = value;
        }
    }

    pub(super) fn mirroring(&self) -> Mirroring {
        match &self.mapper {
            Mapper::Mmc3(m) => m.mirroring(),
            _ => self.header.mirroring,
        }
    }

    /// One rendered scanline finished.
    pub(super) fn clock_scanline(&mut self) {
        if let Mapper::Mmc3(m) = &mut self.mapper {
            m.clock_scanline();
        }
    }

    pub(super) fn irq_pending(&self) -> bool {
        match &self.mapper {
            Mapper::Mmc3(m) => m.irq_pending(),
            _ => false,
        }
    }

    pub(super) fn prg_ram(&self) -> &[u8] {
        &self.prg_ram
    }

    pub(super) fn prg_ram_mut(&mut self) -> &mut [u8] {
        &mut self.prg_ram
    }
}
