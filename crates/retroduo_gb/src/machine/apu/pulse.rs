use super::units::{Envelope, LengthTimer};
use super::{SAMPLES_PER_SWEEP_TICK, SAMPLE_RATE};

const DUTY_RATIOS: [f64; 4] = [0.125, 0.25, 0.5, 0.75];

/// Square wave channel (1 and 2). Only channel 1 has a sweep unit; for
/// channel 2 `nr0` stays zero.
#[derive(Default)]
pub(super) struct Pulse {
    pub(super) nr0: u8,
    pub(super) nr1: u8,
    pub(super) nr2: u8,
    pub(super) nr3: u8,
    pub(super) nr4: u8,
    period: u16,
    phase: f64,
    sweep_samples: f64,
    length: LengthTimer,
    envelope: Envelope,
}

impl Pulse {
    pub(super) fn write_nr1(&mut self, value: u8) {
        self.length.load((value & 0x3F) as u32);
        self.nr1 = value;
    }

    /// Returns false when the write turns the DAC off.
    pub(super) fn write_nr2(&mut self, value: u8) -> bool {
        self.nr2 = value;
        value & 0xF8 != 0
    }

    pub(super) fn write_nr3(&mut self, value: u8) {
        self.period = ((self.nr4 as u16 & 0x07) << 8) | value as u16;
        self.nr3 = value;
    }

    /// Returns true when the write triggers the channel.
    pub(super) fn write_nr4(&mut self, value: u8) -> bool {
        self.period = ((value as u16 & 0x07) << 8) | self.nr3 as u16;
        self.nr4 = value;
        if value & 0x80 == 0 {
            return false;
        }
        self.envelope.trigger(self.nr2);
        self.length.trigger((self.nr1 & 0x3F) as u32);
        self.sweep_samples = 0.0;
        self.phase = 0.0;
        true
    }

    fn clock_sweep(&mut self, on: &mut bool) {
        let pace = (self.nr0 >> 4) & 0x07;
        if pace == 0 {
            return;
        }
        let interval = SAMPLES_PER_SWEEP_TICK * pace as f64;
        self.sweep_samples += 1.0;
        while self.sweep_samples >= interval {
            self.sweep_samples -= interval;
            let mut delta = (self.period >> (self.nr0 & 0x07)) as i32;
            if self.nr0 & 0x08 != 0 {
                delta = -delta;
            }
            let next = self.period as i32 + delta;
            if !(0..=0x7FF).contains(&next) {
                *on = false;
            } else {
                self.period = next as u16;
            }
        }
    }

    /// Advance by one output sample and return the signed amplitude in
    /// -1.0..=1.0, before panning.
    pub(super) fn generate(&mut self, on: &mut bool) -> f64 {
        self.clock_sweep(on);

        let frequency = 131072.0 / (2048.0 - self.period as f64);
        self.phase = (self.phase + frequency / SAMPLE_RATE).fract();
        let duty = DUTY_RATIOS[(self.nr1 >> 6) as usize];

        self.length.clock(self.nr4, 64, on);
        self.envelope.clock(self.nr2);

        let amplitude = self.envelope.amplitude();
        if self.phase < duty {
            amplitude
        } else {
            -amplitude
        }
    }
}
