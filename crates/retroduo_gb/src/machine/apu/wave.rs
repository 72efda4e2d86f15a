use super::units::LengthTimer;
use super::SAMPLE_RATE;

/// Channel 3: plays 32 4-bit samples from wave RAM, high nibble first.
#[derive(Default)]
pub(super) struct Wave {
    pub(super) nr0: u8,
    pub(super) nr1: u8,
    pub(super) nr2: u8,
    pub(super) nr3: u8,
    pub(super) nr4: u8,
    pub(super) ram: [u8; 16],
    phase: f64,
    position: usize,
    length: LengthTimer,
}

impl Wave {
    pub(super) fn write_nr1(&mut self, value: u8) {
        self.length.load(value as u32);
        self.nr1 = value;
    }

    pub(super) fn write_nr4(&mut self, value: u8) -> bool {
        self.nr4 = value;
        if value & 0x80 == 0 {
            return false;
        }
        self.length.trigger(self.nr1 as u32);
        self.position = 0;
        self.phase = 0.0;
        true
    }

    fn dac_on(&self) -> bool {
        self.nr0 & 0x80 != 0
    }

    pub(super) fn generate(&mut self, on: &mut bool) -> f64 {
        let period = ((self.nr4 as u16 & 0x07) << 8) | self.nr3 as u16;
        let frequency = 65536.0 / (2048.0 - period as f64) * 32.0;
        self.phase += frequency / SAMPLE_RATE;
        while self.phase >= 1.0 {
            self.phase -= 1.0;
            self.position = (self.position + 1) % 32;
        }

        let byte = self.ram[self.position / 2];
        let mut sample = if self.position % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        };
        sample = match (self.nr2 >> 5) & 0x03 {
            0 => 0,
            1 => sample,
            2 => sample >> 1,
            _ => sample >> 2,
        };

        self.length.clock(self.nr4, 256, on);

        if !self.dac_on() {
            return 0.0;
        }
        sample as f64 / 7.5 - 1.0
    }
}
