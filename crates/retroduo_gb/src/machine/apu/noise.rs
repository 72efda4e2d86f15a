use super::units::{Envelope, LengthTimer};
use super::SAMPLE_RATE;

const LFSR_SEED: u16 = 0x7FFF;

/// Channel 4: pseudo-random noise from a 15-bit (or 7-bit) LFSR.
pub(super) struct Noise {
    pub(super) nr1: u8,
    pub(super) nr2: u8,
    pub(super) nr3: u8,
    pub(super) nr4: u8,
    lfsr: u16,
    lfsr_samples: f64,
    length: LengthTimer,
    envelope: Envelope,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            nr1: 0,
            nr2: 0,
            nr3: 0,
            nr4: 0,
            lfsr: LFSR_SEED,
            lfsr_samples: 0.0,
            length: LengthTimer::default(),
            envelope: Envelope::default(),
        }
    }
}

impl Noise {
    pub(super) fn write_nr1(&mut self, value: u8) {
        self.length.load((value & 0x3F) as u32);
        self.nr1 = value;
    }

    pub(super) fn write_nr2(&mut self, value: u8) -> bool {
        self.nr2 = value;
        value & 0xF8 != 0
    }

    pub(super) fn write_nr4(&mut self, value: u8) -> bool {
        self.nr4 = value;
        if value & 0x80 == 0 {
            return false;
        }
        self.envelope.trigger(self.nr2);
        self.length.trigger((self.nr1 & 0x3F) as u32);
        self.lfsr = LFSR_SEED;
        self.lfsr_samples = 0.0;
        true
    }

    fn clock_lfsr(&mut self) {
        let shift = (self.nr3 >> 4) as i32;
        let divider = match self.nr3 & 0x07 {
            0 => 0.5,
            d => d as f64,
        };
        let clock = 262144.0 / (divider * 2f64.powi(shift));
        // The LFSR can run faster than the sample rate; clock it at most
        // once per sample.
        let samples_per_clock = (SAMPLE_RATE / clock).max(1.0);

        self.lfsr_samples += 1.0;
        while self.lfsr_samples >= samples_per_clock {
            self.lfsr_samples -= samples_per_clock;
            let xor = (self.lfsr & 1) ^ ((self.lfsr >> 1) & 1);
            self.lfsr = (self.lfsr & !(1 << 15)) | (xor << 15);
            if self.nr3 & 0x08 != 0 {
                self.lfsr = (self.lfsr & !(1 << 7)) | (xor << 7);
            }
            self.lfsr >>= 1;
        }
    }

    pub(super) fn generate(&mut self, on: &mut bool) -> f64 {
        self.clock_lfsr();
        self.length.clock(self.nr4, 64, on);
        self.envelope.clock(self.nr2);

        let amplitude = self.envelope.amplitude();
        if self.lfsr & 1 == 0 {
            amplitude
        } else {
            -amplitude
        }
    }
}
