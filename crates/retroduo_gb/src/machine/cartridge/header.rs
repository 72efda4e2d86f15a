use anyhow::{bail, Result};

/// Fields of the cartridge header at 0x0100-0x014F.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cgb: bool,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self> {
        if rom.len() < 0x150 {
            bail!("ROM is {} bytes, too small for a cartridge header", rom.len());
        }

        let title_bytes = &rom[0x134..0x143];
        let end = title_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(title_bytes.len());
        let title = String::from_utf8_lossy(&title_bytes[..end]).trim().to_string();

        Ok(Self {
            title,
            cgb: matches!(rom[0x143], 0x80 | 0xC0),
            cartridge_type: rom[0x147],
            rom_size_code: rom[0x148],
            ram_size_code: rom[0x149],
        })
    }

    /// External RAM size declared by byte 0x149.
    ///
    /// MBC2's built-in 512x4 bits are not covered since MBC2 is not
    /// supported.
    pub fn ram_bytes(&self) -> usize {
        match self.ram_size_code {
            0x01 => 0x800,
            0x02 => 0x2000,
            0x03 => 0x8000,
            0x04 => 0x20000,
            0x05 => 0x10000,
            _ => 0,
        }
    }

    /// Cartridge types with a battery keeping external RAM alive.
    pub fn has_battery(&self) -> bool {
        matches!(
            self.cartridge_type,
            0x03 | 0x09 | 0x0F | 0x10 | 0x13 | 0x1B | 0x1E
        )
    }

    pub fn mbc_name(&self) -> &'static str {
        match self.cartridge_type {
            0x00 | 0x08 | 0x09 => "ROM",
            0x01..=0x03 => "MBC1",
            0x0F..=0x13 => "MBC3",
            0x19..=0x1E => "MBC5",
            _ => "unknown",
        }
    }
}
