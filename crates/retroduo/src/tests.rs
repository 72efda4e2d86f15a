use std::fs;

use retroduo_common::app::App;
use retroduo_common::key::Key;
use tempfile::tempdir;

use super::*;

/// MBC1 + RAM + battery, 8 KiB RAM, spinning on `JR -2` at 0x0100.
fn gb_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0102].copy_from_slice(&[0x18, 0xFE]);
    rom[0x0134..0x0138].copy_from_slice(b"DEMO");
    rom[0x0147] = 0x03;
    rom[0x0149] = 0x02;
    rom
}

/// NROM with battery RAM; `program` runs from 0x8000.
fn nes_rom(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 16 + 0x4000 + 0x2000];
    rom[0..4].copy_from_slice(b"NES\x1A");
    rom[4] = 1;
    rom[5] = 1;
    rom[6] = 0x02;
    rom[16..16 + program.len()].copy_from_slice(program);
    rom[16 + 0x3FFC] = 0x00;
    rom[16 + 0x3FFD] = 0x80;
    rom
}

fn spin_nes() -> Vec<u8> {
    nes_rom(&[0x4C, 0x00, 0x80])
}

fn screen_for(app: &SessionApp) -> Vec<u8> {
    vec![0u8; (app.width() * app.height() * 3) as usize]
}

#[test]
fn console_is_detected_from_magic() {
    assert_eq!(detect(&spin_nes()), ConsoleKind::Nes);
    assert_eq!(detect(&gb_rom()), ConsoleKind::GameBoy);
    assert_eq!(detect(b"NES"), ConsoleKind::GameBoy);
}

#[test]
fn sessions_report_their_geometry() {
    let gb = open_session(&gb_rom()).unwrap();
    assert_eq!((gb.width(), gb.height()), (160, 144));
    assert_eq!(gb.title(), "DEMO");

    let nes = open_session(&spin_nes()).unwrap();
    assert_eq!((nes.width(), nes.height()), (256, 240));
}

#[test]
fn unsupported_cartridges_fail_to_load() {
    let mut rom = spin_nes();
    rom[6] = 0x10;
    assert!(open_session(&rom).is_err());

    let mut rom = gb_rom();
    rom[0x0147] = 0xFC;
    assert!(open_session(&rom).is_err());
}

#[test]
fn unreadable_rom_is_an_error() {
    let dir = tempdir().unwrap();
    let err = prepare(&dir.path().join("missing.gb"), &Config::default())
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("reading ROM file"));
}

#[test]
fn save_file_is_loaded_next_to_rom() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("demo.gb");
    fs::write(&rom_path, gb_rom()).unwrap();
    fs::write(dir.path().join("demo.sav"), [0xAA, 0xBB, 0xCC]).unwrap();

    let app = prepare(&rom_path, &Config::default()).unwrap();
    let save = app.session().save_data();
    assert_eq!(save.len(), 0x2000);
    assert_eq!(&save[..4], &[0xAA, 0xBB, 0xCC, 0x00]);
}

#[test]
fn missing_save_starts_blank_and_exit_writes_it() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("demo.gb");
    fs::write(&rom_path, gb_rom()).unwrap();

    let mut app = prepare(&rom_path, &Config::default()).unwrap();
    let mut screen = screen_for(&app);
    app.update(&mut screen);
    app.exit();

    let written = fs::read(dir.path().join("demo.sav")).unwrap();
    assert_eq!(written.len(), 0x2000);
    assert!(written.iter().all(|&b| b == 0));
}

#[test]
fn fault_ends_session_and_still_saves() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("crash.nes");
    fs::write(&rom_path, nes_rom(&[0xEA, 0x02])).unwrap();

    let mut app = prepare(&rom_path, &Config::default()).unwrap();
    let mut screen = screen_for(&app);
    app.update(&mut screen);

    let fault = app.fault().unwrap();
    assert!(fault.reason.contains("KIL"));
    assert_eq!(fault.trace.len(), 2);
    assert!(app.should_exit());

    app.exit();
    assert_eq!(fs::read(dir.path().join("crash.sav")).unwrap().len(), 0x2000);
}

#[test]
fn pause_and_single_step() {
    let config = Config::default();
    let mut app = SessionApp::new(open_session(&gb_rom()).unwrap(), None, &config);
    let mut screen = screen_for(&app);

    app.handle_key_event(Key::P, true);
    app.handle_key_event(Key::P, false);
    assert!(app.is_paused());

    app.update(&mut screen);
    assert!(app.session().trace_dump().is_empty());

    app.handle_key_event(Key::S, true);
    app.update(&mut screen);
    assert_eq!(app.session().trace_dump().len(), 1);
    app.update(&mut screen);
    assert_eq!(app.session().trace_dump().len(), 1);

    app.handle_key_event(Key::P, true);
    assert!(!app.is_paused());
    app.update(&mut screen);
    assert_eq!(app.session().trace_dump().len(), 256);
}

#[test]
fn escape_quits() {
    let mut app = SessionApp::new(open_session(&spin_nes()).unwrap(), None, &Config::default());
    assert!(!app.should_exit());
    app.handle_key_event(Key::Escape, true);
    assert!(app.should_exit());
    app.exit();
}

#[test]
fn window_title_names_the_cartridge() {
    let app = SessionApp::new(open_session(&gb_rom()).unwrap(), None, &Config::default());
    assert_eq!(app.title(), "RetroDuo - DEMO");

    let config = Config::parse("[video]\nscale = 7").unwrap();
    let app = SessionApp::new(open_session(&spin_nes()).unwrap(), None, &config);
    assert_eq!(app.scale(), 4);
}
