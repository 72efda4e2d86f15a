//! Sample-clocked audio unit.
//!
//! Instead of emulating the frame sequencer and per-channel timers at CPU
//! rate, every channel is advanced once per output sample: phases
//! accumulate the channel frequency divided by the sample rate and the
//! length, envelope and sweep units are clocked at fixed sample counts.
//! Finished stereo frames go into the lock-free audio ring.

mod noise;
mod pulse;
mod units;
mod wave;

use retroduo_common::audio::{self, AudioConsumer, AudioProducer};

use noise::Noise;
use pulse::Pulse;
use wave::Wave;

const SAMPLE_RATE: f64 = audio::SAMPLE_RATE as f64;
const CPU_HZ: f64 = 4_194_304.0;
const CYCLES_PER_SAMPLE: f64 = CPU_HZ / SAMPLE_RATE;
const SAMPLES_PER_LENGTH_TICK: f64 = SAMPLE_RATE / 256.0;
const SAMPLES_PER_ENVELOPE_TICK: f64 = SAMPLE_RATE / 64.0;
const SAMPLES_PER_SWEEP_TICK: f64 = SAMPLE_RATE / 128.0;

const BUFFER_MILLIS: u32 = 120;
/// Fill deviation from half-full, as a fraction of capacity, beyond which
/// the sampling rate is pushed up or down.
const DISTANCE_THRESHOLD: f64 = 0.40;
const ACCELERATION_SMOOTHING: f64 = 0.01;

pub(super) struct Apu {
    producer: AudioProducer,
    consumer: Option<AudioConsumer>,
    cycles: f64,
    acceleration: f64,

    nr50: u8,
    nr51: u8,
    /// Bit 7: master enable. Bits 0-3: channel on flags.
    nr52: u8,

    ch1: Pulse,
    ch2: Pulse,
    ch3: Wave,
    ch4: Noise,
}

impl Apu {
    pub(super) fn new() -> Self {
        let (producer, consumer) = audio::audio_queue(audio::frames_for_millis(BUFFER_MILLIS));
        Self {
            producer,
            consumer: Some(consumer),
            cycles: 0.0,
            acceleration: 1.0,
            nr50: 0,
            nr51: 0,
            nr52: 0,
            ch1: Pulse::default(),
            ch2: Pulse::default(),
            ch3: Wave::default(),
            ch4: Noise::default(),
        }
    }

    /// Register contents left behind by the DMG boot ROM.
    pub(super) fn init_post_boot(&mut self) {
        self.nr52 = 0xF1;
        self.ch1.nr0 = 0x80;
        self.ch1.nr1 = 0xBF;
        self.ch1.nr2 = 0xF3;
        self.ch1.nr3 = 0xFF;
        self.ch1.nr4 = 0xBF;
        self.ch2.nr1 = 0x3F;
        self.ch2.nr2 = 0x00;
        self.ch2.nr3 = 0xFF;
        self.ch2.nr4 = 0xBF;
        self.ch3.nr0 = 0x7F;
        self.ch3.nr1 = 0xFF;
        self.ch3.nr2 = 0x9F;
        self.ch3.nr3 = 0xFF;
        self.ch3.nr4 = 0xBF;
        self.ch4.nr1 = 0xFF;
        self.ch4.nr2 = 0x00;
        self.ch4.nr3 = 0x00;
        self.ch4.nr4 = 0xBF;
        self.nr50 = 0x77;
        self.nr51 = 0xF3;
    }

    pub(super) fn take_consumer(&mut self) -> Option<AudioConsumer> {
        self.consumer.take()
    }

    /// Advance by `cpu_cycles` single-speed clocks, emitting as many stereo
    /// frames as the accumulated (rate-adjusted) cycles cover.
    pub(super) fn step(&mut self, cpu_cycles: u32) {
        self.adjust_acceleration();
        self.cycles += cpu_cycles as f64 * self.acceleration;
        while self.cycles >= CYCLES_PER_SAMPLE {
            self.cycles -= CYCLES_PER_SAMPLE;
            let (left, right) = self.generate_sample();
            self.producer.push_stereo(left, right);
        }
    }

    /// Steer production toward a half-full ring: speed up when it runs
    /// dry, slow down when it backs up.
    fn adjust_acceleration(&mut self) {
        let capacity = self.producer.capacity_frames() as f64;
        let deviation = self.producer.len() as f64 - capacity / 2.0;
        let threshold = capacity * DISTANCE_THRESHOLD;
        let target = if deviation < -threshold {
            1.5
        } else if deviation > threshold {
            0.5
        } else {
            1.0
        };
        self.acceleration += (target - self.acceleration) * ACCELERATION_SMOOTHING;
    }

    #[inline]
    fn channel_on(&self, index: u8) -> bool {
        self.nr52 & (1 << index) != 0
    }

    #[inline]
    fn set_channel_on(&mut self, index: u8, on: bool) {
        if on {
            self.nr52 |= 1 << index;
        } else {
            self.nr52 &= !(1 << index);
        }
    }

    /// Produce one (left, right) frame.
    pub(super) fn generate_sample(&mut self) -> (f32, f32) {
        let mut on = [false; 4];
        for (i, flag) in on.iter_mut().enumerate() {
            *flag = self.channel_on(i as u8);
        }

        let amplitudes = [
            self.ch1.generate(&mut on[0]),
            self.ch2.generate(&mut on[1]),
            self.ch3.generate(&mut on[2]),
            self.ch4.generate(&mut on[3]),
        ];

        let mut left = 0.0;
        let mut right = 0.0;
        for (i, amplitude) in amplitudes.iter().enumerate() {
            self.set_channel_on(i as u8, on[i]);
            let (r, l) = self.mix(i as u8, *amplitude);
            right += r;
            left += l;
        }
        ((left / 4.0) as f32, (right / 4.0) as f32)
    }

    /// Apply master enable, channel flag, NR51 panning and NR50 volume.
    /// Returns (right, left).
    fn mix(&self, index: u8, amplitude: f64) -> (f64, f64) {
        if self.nr52 & 0x80 == 0 || !self.channel_on(index) {
            return (0.0, 0.0);
        }
        let pan_right = ((self.nr51 >> index) & 1) as f64;
        let pan_left = ((self.nr51 >> (index + 4)) & 1) as f64;
        let master_right = (self.nr50 & 0x07) as f64 / 7.0;
        let master_left = ((self.nr50 >> 4) & 0x07) as f64 / 7.0;
        (
            amplitude * pan_right * master_right,
            amplitude * pan_left * master_left,
        )
    }

    pub(super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF10 => self.ch1.nr0 | 0x80,
            0xFF11 => self.ch1.nr1 | 0x3F,
            0xFF12 => self.ch1.nr2,
            0xFF13 => 0xFF,
            0xFF14 => self.ch1.nr4 | 0xBF,
            0xFF16 => self.ch2.nr1 | 0x3F,
            0xFF17 => self.ch2.nr2,
            0xFF18 => 0xFF,
            0xFF19 => self.ch2.nr4 | 0xBF,
            0xFF1A => self.ch3.nr0 | 0x7F,
            0xFF1B => 0xFF,
            0xFF1C => self.ch3.nr2 | 0x9F,
            0xFF1D => 0xFF,
            0xFF1E => self.ch3.nr4 | 0xBF,
            0xFF20 => 0xFF,
            0xFF21 => self.ch4.nr2,
            0xFF22 => self.ch4.nr3,
            0xFF23 => self.ch4.nr4 | 0xBF,
            0xFF24 => self.nr50,
            0xFF25 => self.nr51,
            0xFF26 => self.nr52 | 0x70,
            0xFF30..=0xFF3F => self.ch3.ram[(addr - 0xFF30) as usize],
            _ => 0xFF,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        if addr == 0xFF26 {
            self.write_nr52(value);
            return;
        }
        if (0xFF30..=0xFF3F).contains(&addr) {
            self.ch3.ram[(addr - 0xFF30) as usize] = value;
            return;
        }
        // Everything else is read-only while the APU is powered off.
        if self.nr52 & 0x80 == 0 {
            return;
        }

        match addr {
            0xFF10 => self.ch1.nr0 = value,
            0xFF11 => self.ch1.write_nr1(value),
            0xFF12 => {
                if !self.ch1.write_nr2(value) {
                    self.set_channel_on(0, false);
                }
            }
            0xFF13 => self.ch1.write_nr3(value),
            0xFF14 => {
                if self.ch1.write_nr4(value) {
                    self.set_channel_on(0, true);
                }
            }
            0xFF16 => self.ch2.write_nr1(value),
            0xFF17 => {
                if !self.ch2.write_nr2(value) {
                    self.set_channel_on(1, false);
                }
            }
            0xFF18 => self.ch2.write_nr3(value),
            0xFF19 => {
                if self.ch2.write_nr4(value) {
                    self.set_channel_on(1, true);
                }
            }
            0xFF1A => self.ch3.nr0 = value,
            0xFF1B => self.ch3.write_nr1(value),
            0xFF1C => self.ch3.nr2 = value,
            0xFF1D => self.ch3.nr3 = value,
            0xFF1E => {
                if self.ch3.write_nr4(value) {
                    self.set_channel_on(2, true);
                }
            }
            0xFF20 => self.ch4.write_nr1(value),
            0xFF21 => {
                if !self.ch4.write_nr2(value) {
                    self.set_channel_on(3, false);
                }
            }
            0xFF22 => self.ch4.nr3 = value,
            0xFF23 => {
                if self.ch4.write_nr4(value) {
                    self.set_channel_on(3, true);
                }
            }
            0xFF24 => self.nr50 = value,
            0xFF25 => self.nr51 = value,
            _ => {}
        }
    }

    /// Only the master bit is writable. Powering off clears every sound
    /// register but leaves wave RAM alone.
    fn write_nr52(&mut self, value: u8) {
        if value & 0x80 == 0 {
            let ram = self.ch3.ram;
            self.ch1 = Pulse::default();
            self.ch2 = Pulse::default();
            self.ch3 = Wave::default();
            self.ch3.ram = ram;
            self.ch4 = Noise::default();
            self.nr50 = 0;
            self.nr51 = 0;
            self.nr52 = 0;
            log::debug!("GB APU: powered off");
        } else {
            self.nr52 |= 0x80;
        }
    }
}
