use std::time::{Duration, Instant};

use anyhow::{Error, Result};
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use retroduo_common::app::App;
use retroduo_common::audio::{AudioConsumer, SAMPLE_RATE};
use retroduo_common::key::Key;
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Open the first joystick and forward its buttons to the app.
    #[builder(default = false)]
    pub gamepad: bool,
    #[builder(default = 60.0)]
    pub target_fps: f64,
}

/// SDL audio callback draining the emulator's sample ring.
struct RingPlayback {
    consumer: AudioConsumer,
}

impl AudioCallback for RingPlayback {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        // Underrun is padded with silence by the ring itself.
        self.consumer.fill_interleaved(out);
    }
}

fn open_audio(sdl: &sdl2::Sdl, consumer: AudioConsumer) -> Result<AudioDevice<RingPlayback>> {
    let audio = sdl.audio().map_err(Error::msg)?;
    let desired = AudioSpecDesired {
        freq: Some(SAMPLE_RATE as i32),
        channels: Some(2),
        samples: Some(1024),
    };
    let device = audio
        .open_playback(None, &desired, |spec| {
            log::info!(
                "SDL audio: {} Hz, {} channels, {} frame buffer",
                spec.freq,
                spec.channels,
                spec.samples
            );
            RingPlayback { consumer }
        })
        .map_err(Error::msg)?;
    device.resume();
    Ok(device)
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            gamepad,
            target_fps,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(Error::msg)?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(Error::msg)?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_target(map_pixel_format(pixel_format), width, height)?;

        // Both handles must stay alive for the whole session.
        let _audio_device = match app.audio_consumer() {
            Some(consumer) => match open_audio(&sdl_context, consumer) {
                Ok(device) => Some(device),
                Err(err) => {
                    log::warn!("SDL audio unavailable: {err}");
                    None
                }
            },
            None => None,
        };
        let _joystick = if gamepad {
            open_joystick(&sdl_context)
        } else {
            None
        };

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let frame_interval = Duration::from_secs_f64(1.0 / target_fps);
        let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;

        app.init();
        loop {
            let frame_start = Instant::now();
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => app.handle_key_event(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), false),
                    Event::JoyButtonDown { button_idx, .. } => {
                        app.handle_gamepad_button(button_idx, true)
                    }
                    Event::JoyButtonUp { button_idx, .. } => {
                        app.handle_gamepad_button(button_idx, false)
                    }
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.copy(&texture, None, None).map_err(Error::msg)?;
            canvas.present();

            if let Some(rest) = frame_interval.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        Ok(())
    }
}

fn open_joystick(sdl: &sdl2::Sdl) -> Option<sdl2::joystick::Joystick> {
    let subsystem = match sdl.joystick() {
        Ok(subsystem) => subsystem,
        Err(err) => {
            log::warn!("SDL joystick subsystem unavailable: {err}");
            return None;
        }
    };
    match subsystem.num_joysticks() {
        Ok(0) | Err(_) => {
            log::info!("No joystick connected");
            None
        }
        Ok(_) => match subsystem.open(0) {
            Ok(joystick) => {
                log::info!(
                    "Opened joystick '{}' with {} buttons",
                    joystick.name(),
                    joystick.num_buttons()
                );
                Some(joystick)
            }
            Err(err) => {
                log::warn!("Failed to open joystick 0: {err}");
                None
            }
        },
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}
pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Z => Key::Z,
        Keycode::X => Key::X,
        Keycode::LShift => Key::LShift,
        Keycode::Return => Key::Return,
        Keycode::P => Key::P,
        Keycode::S => Key::S,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
