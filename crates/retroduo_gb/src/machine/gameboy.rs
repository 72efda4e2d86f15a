use anyhow::{Context, Result};
use retroduo_common::audio::AudioConsumer;
use retroduo_common::trace::TraceRing;
use retroduo_common::{Buttons, ConsoleSession, Fault};

use crate::cpu::{Cpu, CpuTrace};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::cartridge::CartridgeHeader;
use super::{GameBoyBus, GameBoyModel};

/// Single-speed CPU clocks per 60 Hz host frame. Kept fractional so the
/// remainder carries over between frames.
pub const CYCLES_PER_FRAME: f64 = 4_194_304.0 / 60.0;

/// High-level Game Boy / Game Boy Color machine.
///
/// Owns the CPU core, the bus with all peripherals and the trace ring used
/// for fault dumps.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    header: CartridgeHeader,
    trace: TraceRing<CpuTrace>,
    /// Cycles run so far against the current frame budget.
    cycles: f64,
    fault: Option<Fault>,
}

impl GameBoy {
    /// Build a machine from a cartridge image, starting in the post-boot
    /// state at 0x0100.
    pub fn from_rom(rom: &[u8]) -> Result<Self> {
        let header = CartridgeHeader::parse(rom).context("reading Game Boy cartridge header")?;
        let bus = GameBoyBus::new(rom, &header)?;
        let cgb = bus.model == GameBoyModel::Cgb;
        log::info!(
            "GB cartridge \"{}\": type 0x{:02X} ({}), {} bytes RAM, {}",
            header.title,
            header.cartridge_type,
            header.mbc_name(),
            header.ram_bytes(),
            if cgb { "CGB mode" } else { "DMG mode" },
        );

        Ok(Self {
            cpu: Cpu::new(cgb),
            bus,
            header,
            trace: TraceRing::new(),
            cycles: 0.0,
            fault: None,
        })
    }

    pub fn model(&self) -> GameBoyModel {
        self.bus.model
    }

    pub fn frame_count(&self) -> u64 {
        self.bus.ppu.frame_count()
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }

    /// CPU clock multiplier: 2 in CGB double-speed mode.
    #[inline]
    fn speed(&self) -> u32 {
        if self.bus.double_speed {
            2
        } else {
            1
        }
    }

    fn check_fault(&mut self) -> Result<(), Fault> {
        let reason = self
            .cpu
            .fault()
            .or_else(|| self.bus.fault())
            .map(str::to_string);
        if let Some(reason) = reason {
            let fault = Fault::new(reason, self.trace.dump());
            self.fault = Some(fault.clone());
            return Err(fault);
        }
        Ok(())
    }
}

impl ConsoleSession for GameBoy {
    fn step(&mut self) -> Result<u32, Fault> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let speed = self.speed();
        let cycles = self.cpu.step(&mut self.bus);
        self.bus.step_timer(cycles, self.cpu.is_stopped());
        self.bus.step_ppu(cycles / speed);
        self.bus.apu.step(cycles / speed);
        self.trace.record(self.cpu.trace_entry());

        self.check_fault()?;
        Ok(cycles)
    }

    fn run_frame(&mut self) -> Result<(), Fault> {
        let budget = CYCLES_PER_FRAME * self.speed() as f64;
        while self.cycles < budget {
            let cycles = self.step()?;
            self.cycles += cycles as f64;
        }
        self.cycles -= budget;
        Ok(())
    }

    fn frame_buffer(&self) -> &[u8] {
        self.bus.ppu.frame()
    }

    fn audio_samples(&mut self) -> Option<AudioConsumer> {
        self.bus.apu.take_consumer()
    }

    fn load_save(&mut self, data: &[u8]) {
        let ram = self.bus.cartridge_ram_mut();
        if data.len() != ram.len() {
            log::warn!(
                "GB save is {} bytes, cartridge RAM is {}; copying the overlap",
                data.len(),
                ram.len()
            );
        }
        let len = data.len().min(ram.len());
        ram[..len].copy_from_slice(&data[..len]);
    }

    fn save_data(&self) -> Vec<u8> {
        self.bus.cartridge_ram().to_vec()
    }

    fn has_battery(&self) -> bool {
        self.header.has_battery()
    }

    fn set_buttons(&mut self, buttons: Buttons) {
        self.bus.set_buttons(buttons);
    }

    fn trace_dump(&self) -> Vec<String> {
        self.trace.dump()
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn title(&self) -> String {
        self.header.title.clone()
    }
}
