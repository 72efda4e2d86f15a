use anyhow::{Context, Result};
use retroduo_common::audio::AudioConsumer;
use retroduo_common::trace::TraceRing;
use retroduo_common::{Buttons, ConsoleSession, Fault};

use crate::cpu::{Cpu, CpuTrace};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::NesBus;

/// NTSC CPU clocks per frame (1.789773 MHz at 60.0988 Hz), about 29781.
/// Kept fractional so the remainder carries over between frames.
pub const CYCLES_PER_FRAME: f64 = 1_789_773.0 / 60.0988;

/// PPU dots per CPU cycle on NTSC.
const DOTS_PER_CYCLE: u32 = 3;

/// High-level NES machine.
pub struct Nes {
    pub cpu: Cpu,
    pub(crate) bus: NesBus,
    trace: TraceRing<CpuTrace>,
    cycles: f64,
    fault: Option<Fault>,
}

impl Nes {
    /// Build a machine from an iNES image and run the reset sequence.
    pub fn from_rom(rom: &[u8]) -> Result<Self> {
        let mut bus = NesBus::new(rom).context("loading iNES cartridge")?;
        let header = &bus.cartridge.header;
        log::info!(
            "NES cartridge: mapper {} ({}), PRG {} x 16K, CHR {}, {:?} mirroring{}",
            header.mapper,
            header.mapper_name(),
            header.prg_units,
            if header.chr_units == 0 {
                "RAM".to_string()
            } else {
                format!("{} x 8K", header.chr_units)
            },
            header.mirroring,
            if header.battery { ", battery" } else { "" },
        );

        let mut cpu = Cpu::new();
        let reset_cycles = cpu.reset(&mut bus);
        bus.step_ppu(reset_cycles * DOTS_PER_CYCLE);

        Ok(Self {
            cpu,
            bus,
            trace: TraceRing::new(),
            cycles: 0.0,
            fault: None,
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.bus.ppu.frame_count()
    }

    fn check_fault(&mut self) -> Result<(), Fault> {
        if let Some(reason) = self.cpu.fault() {
            let fault = Fault::new(reason, self.trace.dump());
            self.fault = Some(fault.clone());
            return Err(fault);
        }
        Ok(())
    }
}

impl ConsoleSession for Nes {
    fn step(&mut self) -> Result<u32, Fault> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let cycles = self.cpu.step(&mut self.bus);
        self.bus.step_ppu(cycles * DOTS_PER_CYCLE);
        self.trace.record(self.cpu.trace_entry());

        self.check_fault()?;
        Ok(cycles)
    }

    fn run_frame(&mut self) -> Result<(), Fault> {
        while self.cycles < CYCLES_PER_FRAME {
            let cycles = self.step()?;
            self.cycles += cycles as f64;
        }
        self.cycles -= CYCLES_PER_FRAME;
        Ok(())
    }

    fn frame_buffer(&self) -> &[u8] {
        self.bus.ppu.frame()
    }

    fn audio_samples(&mut self) -> Option<AudioConsumer> {
        None
    }

    fn load_save(&mut self, data: &[u8]) {
        let ram = self.bus.cartridge.prg_ram_mut();
        if data.len() != ram.len() {
            log::warn!(
                "NES save is {} bytes, PRG RAM is {}; copying the overlap",
                data.len(),
                ram.len()
            );
        }
        let len = data.len().min(ram.len());
        ram[..len].copy_from_slice(&data[..len]);
    }

    fn save_data(&self) -> Vec<u8> {
        if self.has_battery() {
            self.bus.cartridge.prg_ram().to_vec()
        } else {
            Vec::new()
        }
    }

    fn has_battery(&self) -> bool {
        self.bus.cartridge.header.battery
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
        format!("NES mapper {}", self.bus.cartridge.header.mapper)
    }
}
