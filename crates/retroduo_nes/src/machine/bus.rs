use anyhow::Result;
use retroduo_common::Buttons;

use crate::cpu::Bus;

use super::cartridge::Cartridge;
use super::joypad::Joypad;
use super::ppu::Ppu;

/// CPU cycles OAM DMA holds the bus for.
const OAM_DMA_CYCLES: u32 = 513;

/// CPU address space of the NES.
///
/// 0x0000-0x1FFF: 2 KiB RAM, mirrored four times
/// 0x2000-0x3FFF: PPU registers, mirrored every 8 bytes
/// 0x4000-0x4017: APU and I/O (only OAM DMA and controller 1 are wired)
/// 0x6000-0xFFFF: cartridge
pub(crate) struct NesBus {
    ram: [u8; 0x800],
    pub(super) ppu: Ppu,
    pub(super) cartridge: Cartridge,
    joypad: Joypad,
    /// DMA cycles to charge on the next CPU step.
    stall: u32,
}

impl NesBus {
    pub(crate) fn new(rom: &[u8]) -> Result<Self> {
        Ok(Self {
            ram: [0; 0x800],
            ppu: Ppu::new(),
            cartridge: Cartridge::from_rom(rom)?,
            joypad: Joypad::new(),
            stall: 0,
        })
    }

    pub(super) fn set_buttons(&mut self, buttons: Buttons) {
        self.joypad.set_buttons(buttons);
    }

    pub(super) fn step_ppu(&mut self, dots: u32) {
        self.ppu.step(dots, &mut self.cartridge);
    }

    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..=0xFF {
            let value = self.read8(base | i);
            self.ppu.write_oam_dma(value);
        }
        self.stall += OAM_DMA_CYCLES;
    }
}

impl Bus for NesBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            0x2000..=0x3FFF => self.ppu.read_register(addr, &self.cartridge),
            0x4016 => self.joypad.read(),
            // APU status and the second controller are not emulated.
            0x4000..=0x4017 => 0,
            0x4018..=0x5FFF => 0xFF,
            0x6000..=0xFFFF => self.cartridge.cpu_read(addr),
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = value,
            0x2000..=0x3FFF => self.ppu.write_register(addr, value, &mut self.cartridge),
            0x4014 => self.oam_dma(value),
            0x4016 => self.joypad.write(value),
            0x4000..=0x4017 => {}
            0x4018..=0x5FFF => {}
            0x6000..=0xFFFF => self.cartridge.cpu_write(addr, value),
        }
    }

    fn take_nmi(&mut self) -> bool {
        self.ppu.take_nmi()
    }

    fn irq_line(&mut self) -> bool {
        self.cartridge.irq_pending()
    }

    fn take_stall_cycles(&mut self) -> u32 {
        std::mem::take(&mut self.stall)
    }
}
