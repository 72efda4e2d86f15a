use anyhow::Result;
use retroduo_common::Buttons;

use crate::cpu::Bus;

use super::apu::Apu;
use super::cartridge::{Cartridge, CartridgeHeader};
use super::joypad::Joypad;
use super::ppu::Ppu;
use super::serial::Serial;
use super::timer::Timer;
use super::GameBoyModel;

mod dma;
mod init;
mod read;
mod write;

use dma::{Hdma, OamDma};

const WRAM_BANK_SIZE: usize = 0x1000;

/// System bus: owns every peripheral and routes CPU accesses by address.
pub(crate) struct GameBoyBus {
    pub(crate) model: GameBoyModel,
    cartridge: Cartridge,
    /// Bank 0 plus seven switchable banks (only bank 1 used on DMG).
    wram: Vec<u8>,
    /// SVBK value (0..7); bank 0 selects bank 1.
    wram_bank: u8,
    hram: [u8; 0x7F],
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    pub(super) timer: Timer,
    pub(super) ppu: Ppu,
    pub(super) apu: Apu,
    joypad: Joypad,
    pub(crate) serial: Serial,
    oam_dma: OamDma,
    hdma: Hdma,
    key1_armed: bool,
    pub(super) double_speed: bool,
    /// Set when the bus detects an inconsistent internal state.
    fault: Option<String>,
}

impl GameBoyBus {
    pub(super) fn new(rom: &[u8], header: &CartridgeHeader) -> Result<Self> {
        let model = if header.cgb {
            GameBoyModel::Cgb
        } else {
            GameBoyModel::Dmg
        };
        let cgb = model == GameBoyModel::Cgb;
        let mut bus = Self {
            model,
            cartridge: Cartridge::from_rom(rom, header)?,
            wram: vec![0; WRAM_BANK_SIZE * 8],
            wram_bank: 1,
            hram: [0; 0x7F],
            if_reg: 0,
            ie_reg: 0,
            timer: Timer::new(),
            ppu: Ppu::new(cgb),
            apu: Apu::new(),
            joypad: Joypad::new(),
            serial: Serial::default(),
            oam_dma: OamDma::default(),
            hdma: Hdma::default(),
            key1_armed: false,
            double_speed: false,
            fault: None,
        };
        bus.apply_post_boot_state();
        Ok(bus)
    }

    #[inline]
    pub(super) fn is_cgb(&self) -> bool {
        self.model == GameBoyModel::Cgb
    }

    pub(super) fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub(super) fn cartridge_ram(&self) -> &[u8] {
        self.cartridge.ram()
    }

    pub(super) fn cartridge_ram_mut(&mut self) -> &mut [u8] {
        self.cartridge.ram_mut()
    }

    pub(super) fn set_buttons(&mut self, buttons: Buttons) {
        if self.joypad.set_buttons(buttons) {
            self.if_reg |= 0x10;
        }
    }

    /// Advance the PPU (and any HBlank DMA it unlocks) by `dots`.
    pub(super) fn step_ppu(&mut self, dots: u32) {
        self.ppu.step(dots, &mut self.if_reg);
        for _ in 0..self.ppu.take_hblanks() {
            self.hdma_hblank_block();
        }
    }

    pub(super) fn step_timer(&mut self, cycles: u32, stopped: bool) {
        self.timer.tick(cycles, stopped, &mut self.if_reg);
    }

    #[inline]
    fn wram_index(&self, addr: u16) -> usize {
        let offset = addr as usize & 0x0FFF;
        if addr < 0xD000 {
            offset
        } else {
            let bank = if self.is_cgb() {
                self.wram_bank.max(1) as usize
            } else {
                1
            };
            bank * WRAM_BANK_SIZE + offset
        }
    }
}

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn pending_interrupts(&mut self) -> u8 {
        self.ie_reg & self.if_reg & 0x1F
    }

    fn acknowledge_interrupt(&mut self, index: u8) {
        self.if_reg &= !(1 << index);
    }

    fn dma_active(&self) -> bool {
        self.oam_dma.active
    }

    fn dma_step(&mut self) {
        self.oam_dma_step();
    }

    fn speed_switch(&mut self) -> bool {
        if !self.is_cgb() || !self.key1_armed {
            return false;
        }
        self.key1_armed = false;
        self.double_speed = !self.double_speed;
        log::debug!("GB CGB speed switch: double_speed={}", self.double_speed);
        true
    }
}
