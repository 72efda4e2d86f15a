mod apu;
mod bus;
mod cartridge;
mod gameboy;
mod joypad;
mod ppu;
mod serial;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use cartridge::CartridgeHeader;
pub use gameboy::{GameBoy, CYCLES_PER_FRAME};

/// Hardware model selected from the cartridge header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum GameBoyModel {
    #[default]
    Dmg,
    /// CGB hardware running a cartridge flagged 0x80 or 0xC0 at 0x143.
    Cgb,
}

#[cfg(test)]
mod tests;
