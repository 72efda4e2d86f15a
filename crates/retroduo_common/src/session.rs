use std::fmt;

use crate::audio::AudioConsumer;
use crate::input::Buttons;

/// Fatal runtime condition raised by an emulated CPU.
///
/// Carries the formatted trace ring (oldest first) captured at the moment
/// the fault was detected.
#[derive(Clone, Debug)]
pub struct Fault {
    pub reason: String,
    pub trace: Vec<String>,
}

impl Fault {
    pub fn new(reason: impl Into<String>, trace: Vec<String>) -> Self {
        Self {
            reason: reason.into(),
            trace,
        }
    }

    /// Log the fault and its trace through the `log` facade.
    pub fn log_dump(&self) {
        log::error!("fatal: {}", self.reason);
        for line in &self.trace {
            log::error!("  {line}");
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} trace entries)", self.reason, self.trace.len())
    }
}

impl std::error::Error for Fault {}

/// Uniform host-facing view of one emulated console.
pub trait ConsoleSession {
    /// Execute one CPU step and advance every peripheral by the cycles it
    /// consumed. Returns the CPU cycle count.
    fn step(&mut self) -> Result<u32, Fault>;

    /// Run until one video frame's cycle budget is consumed.
    ///
    /// On `Err` the frame is abandoned; `frame_buffer` still returns the
    /// last completed frame.
    fn run_frame(&mut self) -> Result<(), Fault>;

    /// Last completed frame, RGB24, `width() * height() * 3` bytes.
    fn frame_buffer(&self) -> &[u8];

    /// Hand out the consumer end of the audio ring. Returns `None` after the
    /// first call or when the console produces no audio.
    fn audio_samples(&mut self) -> Option<AudioConsumer>;

    /// Copy a battery RAM image in; only the overlapping prefix is used.
    fn load_save(&mut self, data: &[u8]);

    /// Current battery RAM contents.
    fn save_data(&self) -> Vec<u8>;

    fn has_battery(&self) -> bool;

    fn set_buttons(&mut self, buttons: Buttons);

    /// Formatted trace ring, oldest first.
    fn trace_dump(&self) -> Vec<String>;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
