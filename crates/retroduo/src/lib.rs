pub mod app;
pub mod config;
pub mod save;

use std::path::Path;

use anyhow::{Context, Result};
use retroduo_common::app::App;
use retroduo_common::ConsoleSession;
use retroduo_gb::GameBoy;
use retroduo_nes::Nes;
use retroduo_sdl2::{SdlContext, SdlInitInfo};

pub use app::SessionApp;
pub use config::Config;

const INES_MAGIC: &[u8] = b"NES\x1A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKind {
    GameBoy,
    Nes,
}

/// Pick the console family from the image contents.
pub fn detect(rom: &[u8]) -> ConsoleKind {
    if rom.starts_with(INES_MAGIC) {
        ConsoleKind::Nes
    } else {
        ConsoleKind::GameBoy
    }
}

pub fn open_session(rom: &[u8]) -> Result<Box<dyn ConsoleSession>> {
    let kind = detect(rom);
    log::info!("Detected {:?} image", kind);
    let session: Box<dyn ConsoleSession> = match kind {
        ConsoleKind::GameBoy => Box::new(GameBoy::from_rom(rom)?),
        ConsoleKind::Nes => Box::new(Nes::from_rom(rom)?),
    };
    Ok(session)
}

/// Load the ROM and its save file and build the app, without opening a
/// window.
pub fn prepare(rom_path: &Path, config: &Config) -> Result<SessionApp> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("reading ROM file {}", rom_path.display()))?;
    let mut session = open_session(&rom)?;

    let save_path = save::save_path(rom_path);
    if session.has_battery() {
        match save::read_save(&save_path)? {
            Some(data) => {
                log::info!("Loaded save file {} ({} bytes)", save_path.display(), data.len());
                session.load_save(&data);
            }
            None => log::info!("No save file at {}, starting blank", save_path.display()),
        }
    }

    Ok(SessionApp::new(session, Some(save_path), config))
}

pub fn run(rom_path: &Path) -> Result<()> {
    let config = config::load_from_file(Path::new(config::CONFIG_FILE));
    log::info!("Playing ROM path: '{}'", rom_path.display());
    let app = prepare(rom_path, &config)?;

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .gamepad(config.gamepad.enabled)
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests;
