mod header;
mod mbc1;
mod mbc3;
mod mbc5;
mod rom_only;

use anyhow::{bail, Result};

pub use header::CartridgeHeader;
pub(super) use mbc1::Mbc1Cartridge;
pub(super) use mbc3::Mbc3Cartridge;
pub(super) use mbc5::Mbc5Cartridge;
pub(super) use rom_only::RomOnlyCartridge;

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// Supported memory bank controllers.
pub(super) enum Cartridge {
    RomOnly(RomOnlyCartridge),
    Mbc1(Mbc1Cartridge),
    Mbc3(Mbc3Cartridge),
    Mbc5(Mbc5Cartridge),
}

impl Cartridge {
    /// Build the controller named by header byte 0x147.
    pub(super) fn from_rom(rom: &[u8], header: &CartridgeHeader) -> Result<Self> {
        let ram = vec![0u8; header.ram_bytes()];
        let cart = match header.cartridge_type {
            0x00 | 0x08 | 0x09 => Cartridge::RomOnly(RomOnlyCartridge::new(rom, ram)),
            0x01..=0x03 => Cartridge::Mbc1(Mbc1Cartridge::new(rom, ram)),
            0x0F..=0x13 => Cartridge::Mbc3(Mbc3Cartridge::new(rom, ram)),
            0x19..=0x1E => Cartridge::Mbc5(Mbc5Cartridge::new(rom, ram)),
            other => bail!("unsupported cartridge type 0x{other:02X}"),
        };
        Ok(cart)
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::RomOnly(m) => m.rom_read(addr),
            Cartridge::Mbc1(m) => m.rom_read(addr),
            Cartridge::Mbc3(m) => m.rom_read(addr),
            Cartridge::Mbc5(m) => m.rom_read(addr),
        }
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::RomOnly(_) => {}
            Cartridge::Mbc1(m) => m.rom_write(addr, value),
            Cartridge::Mbc3(m) => m.rom_write(addr, value),
            Cartridge::Mbc5(m) => m.rom_write(addr, value),
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::RomOnly(m) => m.ram_read(addr),
            Cartridge::Mbc1(m) => m.ram_read(addr),
            Cartridge::Mbc3(m) => m.ram_read(addr),
            Cartridge::Mbc5(m) => m.ram_read(addr),
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::RomOnly(m) => m.ram_write(addr, value),
            Cartridge::Mbc1(m) => m.ram_write(addr, value),
            Cartridge::Mbc3(m) => m.ram_write(addr, value),
            Cartridge::Mbc5(m) => m.ram_write(addr, value),
        }
    }

    /// Whole external RAM image, as persisted to the save file.
    pub(super) fn ram(&self) -> &[u8] {
        match self {
            Cartridge::RomOnly(m) => &m.ram,
            Cartridge::Mbc1(m) => &m.ram,
            Cartridge::Mbc3(m) => &m.ram,
            Cartridge::Mbc5(m) => &m.ram,
        }
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        match self {
            Cartridge::RomOnly(m) => &mut m.ram,
            Cartridge::Mbc1(m) => &mut m.ram,
            Cartridge::Mbc3(m) => &mut m.ram,
            Cartridge::Mbc5(m) => &mut m.ram,
        }
    }
}

/// Offset into the ROM image for `addr` in a 16 KiB window showing `bank`.
/// The bank wraps to the number of banks actually present.
#[inline]
fn rom_offset(rom_len: usize, bank: usize, addr: u16) -> usize {
    let banks = (rom_len / ROM_BANK_SIZE).max(1);
    (bank % banks) * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1))
}

/// Offset into external RAM for `addr` (0xA000-0xBFFF) in `bank`, or `None`
/// when the cartridge has no RAM. Small RAM chips mirror across the window.
#[inline]
fn ram_offset(ram_len: usize, bank: usize, addr: u16) -> Option<usize> {
    if ram_len == 0 {
        return None;
    }
    let offset = bank * RAM_BANK_SIZE + (addr as usize & (RAM_BANK_SIZE - 1));
    Some(offset % ram_len)
}
