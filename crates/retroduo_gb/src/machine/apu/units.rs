use super::{SAMPLES_PER_ENVELOPE_TICK, SAMPLES_PER_LENGTH_TICK};

/// Length timer: counts up once per 1/256 s while enabled in NRx4 bit 6 and
/// switches the channel off when it reaches its maximum.
#[derive(Default)]
pub(super) struct LengthTimer {
    counter: u32,
    samples: f64,
}

impl LengthTimer {
    pub(super) fn load(&mut self, value: u32) {
        self.counter = value;
    }

    pub(super) fn trigger(&mut self, value: u32) {
        self.counter = value;
        self.samples = 0.0;
    }

    pub(super) fn clock(&mut self, control: u8, max: u32, on: &mut bool) {
        if !*on || control & 0x40 == 0 {
            return;
        }
        self.samples += 1.0;
        while self.samples >= SAMPLES_PER_LENGTH_TICK {
            self.samples -= SAMPLES_PER_LENGTH_TICK;
            if self.counter >= max {
                *on = false;
            } else {
                self.counter += 1;
            }
        }
    }
}

/// Volume envelope driven by NRx2: initial volume in bits 7-4, direction
/// in bit 3, period (in 1/64 s) in bits 2-0. A zero period freezes the
/// volume.
#[derive(Default)]
pub(super) struct Envelope {
    pub(super) volume: u8,
    samples: f64,
}

impl Envelope {
    pub(super) fn trigger(&mut self, nrx2: u8) {
        self.volume = nrx2 >> 4;
        self.samples = 0.0;
    }

    pub(super) fn clock(&mut self, nrx2: u8) {
        let period = (nrx2 & 0x07) as f64;
        if period == 0.0 {
            return;
        }
        self.samples += 1.0;
        let interval = SAMPLES_PER_ENVELOPE_TICK * period;
        while self.samples >= interval {
            self.samples -= interval;
            if nrx2 & 0x08 != 0 {
                self.volume = (self.volume + 1).min(15);
            } else {
                self.volume = self.volume.saturating_sub(1);
            }
        }
    }

    pub(super) fn amplitude(&self) -> f64 {
        self.volume as f64 / 15.0
    }
}
