mod bus;
mod cartridge;
mod joypad;
mod nes;
mod ppu;

pub(crate) use bus::NesBus;
pub use cartridge::{Mirroring, NesHeader};
pub use nes::{Nes, CYCLES_PER_FRAME};

#[cfg(test)]
mod tests;
