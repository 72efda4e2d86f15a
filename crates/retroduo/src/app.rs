use std::path::PathBuf;
use std::time::{Duration, Instant};

use retroduo_common::app::App;
use retroduo_common::audio::AudioConsumer;
use retroduo_common::key::Key;
use retroduo_common::{Buttons, ConsoleSession, Fault};

use crate::config::Config;
use crate::save;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Drives one console session from the SDL frontend.
///
/// Owns the host-side state: pause/single-step, the merged keyboard and
/// gamepad input, the debug report and the battery save written on exit.
pub struct SessionApp {
    session: Box<dyn ConsoleSession>,
    save_path: Option<PathBuf>,
    scale: u32,
    show_debug: bool,
    gamepad_enabled: bool,
    bind: [i32; 8],

    keys: Buttons,
    pad: Buttons,
    paused: bool,
    step_requested: bool,
    should_exit: bool,
    saved: bool,
    fault: Option<Fault>,

    frames: u64,
    report_frames: u64,
    last_report: Instant,
}

impl SessionApp {
    pub fn new(session: Box<dyn ConsoleSession>, save_path: Option<PathBuf>, config: &Config) -> Self {
        Self {
            session,
            save_path,
            scale: config.scale(),
            show_debug: config.video.show_debug,
            gamepad_enabled: config.gamepad.enabled,
            bind: config.bind(),
            keys: Buttons::empty(),
            pad: Buttons::empty(),
            paused: false,
            step_requested: false,
            should_exit: false,
            saved: false,
            fault: None,
            frames: 0,
            report_frames: 0,
            last_report: Instant::now(),
        }
    }

    pub fn session(&self) -> &dyn ConsoleSession {
        self.session.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    fn push_buttons(&mut self) {
        self.session.set_buttons(self.keys | self.pad);
    }

    fn on_fault(&mut self, fault: Fault) {
        fault.log_dump();
        self.fault = Some(fault);
        self.should_exit = true;
    }

    fn single_step(&mut self) {
        match self.session.step() {
            Ok(cycles) => {
                let last = self.session.trace_dump().pop().unwrap_or_default();
                log::info!("step ({cycles} cycles): {last}");
            }
            Err(fault) => self.on_fault(fault),
        }
    }

    fn dump_trace(&self) {
        let trace = self.session.trace_dump();
        log::info!("trace dump, {} entries:", trace.len());
        for line in &trace {
            log::info!("  {line}");
        }
    }

    fn report(&mut self) {
        let elapsed = self.last_report.elapsed();
        if elapsed < REPORT_INTERVAL {
            return;
        }
        let fps = (self.frames - self.report_frames) as f64 / elapsed.as_secs_f64();
        let last = self.session.trace_dump().pop().unwrap_or_default();
        log::info!("frame={} fps={:.1} {}", self.frames, fps, last);
        self.report_frames = self.frames;
        self.last_report = Instant::now();
    }

    fn write_save(&mut self) {
        if self.saved || !self.session.has_battery() {
            return;
        }
        let Some(path) = &self.save_path else {
            return;
        };
        match save::write_save(path, &self.session.save_data()) {
            Ok(()) => log::info!("Wrote save file {}", path.display()),
            Err(e) => log::error!("{e:#}"),
        }
        self.saved = true;
    }
}

impl App for SessionApp {
    fn init(&mut self) {
        log::info!("Starting {}", self.session.title());
        self.last_report = Instant::now();
    }

    fn update(&mut self, screen: &mut [u8]) {
        if self.fault.is_none() && !self.should_exit {
            if !self.paused {
                match self.session.run_frame() {
                    Ok(()) => self.frames += 1,
                    Err(fault) => self.on_fault(fault),
                }
            } else if self.step_requested {
                self.step_requested = false;
                self.single_step();
            }
        }

        let frame = self.session.frame_buffer();
        if let Some(dst) = screen.get_mut(..frame.len()) {
            dst.copy_from_slice(frame);
        }

        if self.show_debug {
            self.report();
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match (key, is_down) {
            (Key::P, true) => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            (Key::S, true) if self.paused => self.step_requested = true,
            (Key::Escape, true) => {
                self.dump_trace();
                self.should_exit = true;
            }
            _ => {
                if let Some(button) = Buttons::from_key(key) {
                    self.keys.set(button, is_down);
                    self.push_buttons();
                }
            }
        }
    }

    fn handle_gamepad_button(&mut self, button: u8, is_down: bool) {
        if !self.gamepad_enabled {
            return;
        }
        let mapped = Buttons::from_gamepad(&self.bind, button);
        if mapped.is_empty() {
            log::debug!("unbound gamepad button {button}");
            return;
        }
        self.pad.set(mapped, is_down);
        self.push_buttons();
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        self.should_exit = true;
        self.write_save();
    }

    fn audio_consumer(&mut self) -> Option<AudioConsumer> {
        self.session.audio_samples()
    }

    fn width(&self) -> u32 {
        self.session.width()
    }

    fn height(&self) -> u32 {
        self.session.height()
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        format!("RetroDuo - {}", self.session.title())
    }
}
