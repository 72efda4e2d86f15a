use retroduo_common::{Buttons, ConsoleSession};

use super::cartridge::Cartridge;
use super::ppu::{DOTS_PER_LINE, LINES_PER_FRAME};
use super::{Mirroring, Nes, NesBus, NesHeader};
use crate::cpu::{Bus, Status};

const PRG_UNIT: usize = 0x4000;
const CHR_UNIT: usize = 0x2000;

/// Build an iNES image. Every 8 KiB PRG bank carries its index at offset
/// 0x1000 and every 1 KiB CHR bank its index at offset 0. `program` starts
/// at 0xC020 (the reset vector); NMI and IRQ point at `INC $FF; RTI` at
/// 0xC010.
fn ines(mapper: u8, prg_units: usize, chr_units: usize, flags6: u8, program: &[u8]) -> Vec<u8> {
    let prg_len = prg_units * PRG_UNIT;
    let mut rom = vec![0u8; 16 + prg_len + chr_units * CHR_UNIT];
    rom[0..4].copy_from_slice(b"NES\x1A");
    rom[4] = prg_units as u8;
    rom[5] = chr_units as u8;
    rom[6] = (mapper << 4) | (flags6 & 0x0F);
    rom[7] = mapper & 0xF0;

    for bank in 0..prg_len / 0x2000 {
        rom[16 + bank * 0x2000 + 0x1000] = bank as u8;
    }
    for bank in 0..chr_units * 8 {
        rom[16 + prg_len + bank * 0x400] = bank as u8;
    }

    let last = 16 + prg_len - PRG_UNIT;
    rom[last + 0x10..last + 0x13].copy_from_slice(&[0xE6, 0xFF, 0x40]);
    rom[last + 0x20..last + 0x20 + program.len()].copy_from_slice(program);
    let vectors = 16 + prg_len - 6;
    rom[vectors..vectors + 6].copy_from_slice(&[0x10, 0xC0, 0x20, 0xC0, 0x10, 0xC0]);
    rom
}

fn cartridge(mapper: u8, prg_units: usize, chr_units: usize) -> Cartridge {
    Cartridge::from_rom(&ines(mapper, prg_units, chr_units, 0, &[])).unwrap()
}

fn bus_with(rom: &[u8]) -> NesBus {
    NesBus::new(rom).unwrap()
}

/// Point PPUADDR at `addr`.
fn set_ppu_addr(bus: &mut NesBus, addr: u16) {
    bus.write8(0x2006, (addr >> 8) as u8);
    bus.write8(0x2006, addr as u8);
}

fn step_lines(bus: &mut NesBus, lines: u32) {
    bus.step_ppu(lines * DOTS_PER_LINE);
}

#[test]
fn header_fields() {
    let rom = ines(4, 2, 1, 0x03, &[]);
    let header = NesHeader::parse(&rom).unwrap();
    assert_eq!(header.mapper, 4);
    assert_eq!(header.prg_units, 2);
    assert_eq!(header.chr_units, 1);
    assert_eq!(header.mirroring, Mirroring::Vertical);
    assert!(header.battery);
    assert!(!header.trainer);
    assert_eq!(header.mapper_name(), "MMC3");
}

#[test]
fn dirty_header_tail_ignores_upper_mapper_nibble() {
    let mut rom = ines(2, 1, 1, 0, &[]);
    rom[7] = 0x44;
    rom[12..16].copy_from_slice(b"Dude");
    assert_eq!(NesHeader::parse(&rom).unwrap().mapper, 2);
}

#[test]
fn bad_images_are_rejected() {
    let mut rom = ines(0, 1, 1, 0, &[]);
    rom[3] = 0;
    assert!(Nes::from_rom(&rom).is_err());

    let rom = ines(1, 1, 1, 0, &[]);
    let err = Nes::from_rom(&rom).err().unwrap();
    assert!(format!("{err:#}").contains("unsupported mapper 1"), "{err:#}");

    let rom = ines(0, 2, 1, 0, &[]);
    assert!(Nes::from_rom(&rom[..0x5000]).is_err());
    assert!(Nes::from_rom(&rom[..8]).is_err());
}

#[test]
fn trainer_is_skipped() {
    let plain = ines(0, 1, 1, 0x04, &[0xA9, 0x42]);
    let mut rom = plain[..16].to_vec();
    rom.extend([0xEE; 512]);
    rom.extend_from_slice(&plain[16..]);

    let cart = Cartridge::from_rom(&rom).unwrap();
    assert!(cart.header.trainer);
    assert_eq!(cart.cpu_read(0xC020), 0xA9);
    assert_eq!(cart.cpu_read(0xC021), 0x42);
}

#[test]
fn chr_ram_when_no_chr_rom() {
    let mut rom_cart = cartridge(0, 1, 1);
    rom_cart.ppu_write(0x0010, 0x5A);
    assert_eq!(rom_cart.ppu_read(0x0010), 0);

    let mut ram_cart = cartridge(0, 1, 0);
    ram_cart.ppu_write(0x0010, 0x5A);
    assert_eq!(ram_cart.ppu_read(0x0010), 0x5A);
}

#[test]
fn ram_and_ppu_register_mirrors() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));

    bus.write8(0x0001, 0x11);
    assert_eq!(bus.read8(0x0801), 0x11);
    assert_eq!(bus.read8(0x1801), 0x11);
    bus.write8(0x1FFF, 0x22);
    assert_eq!(bus.read8(0x07FF), 0x22);

    bus.write8(0x6000, 0x33);
    assert_eq!(bus.read8(0x6000), 0x33);

    // 0x3FFE mirrors PPUADDR, 0x200F mirrors PPUDATA.
    bus.write8(0x3FFE, 0x21);
    bus.write8(0x3FFE, 0x00);
    bus.write8(0x200F, 0x77);
    set_ppu_addr(&mut bus, 0x2100);
    bus.read8(0x2007);
    assert_eq!(bus.read8(0x2007), 0x77);
}

#[test]
fn ppudata_reads_are_buffered_except_palette() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    set_ppu_addr(&mut bus, 0x2000);
    bus.write8(0x2007, 0xAB);
    bus.write8(0x2007, 0xCD);

    set_ppu_addr(&mut bus, 0x2000);
    let stale = bus.read8(0x2007);
    assert_ne!(stale, 0xAB);
    assert_eq!(bus.read8(0x2007), 0xAB);
    assert_eq!(bus.read8(0x2007), 0xCD);

    set_ppu_addr(&mut bus, 0x3F01);
    bus.write8(0x2007, 0x2A);
    set_ppu_addr(&mut bus, 0x3F01);
    assert_eq!(bus.read8(0x2007), 0x2A);
}

#[test]
fn palette_background_mirrors() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    set_ppu_addr(&mut bus, 0x3F10);
    bus.write8(0x2007, 0x0F);
    set_ppu_addr(&mut bus, 0x3F00);
    assert_eq!(bus.read8(0x2007), 0x0F);

    // 0x3F11 is a real sprite entry.
    set_ppu_addr(&mut bus, 0x3F11);
    bus.write8(0x2007, 0x16);
    set_ppu_addr(&mut bus, 0x3F01);
    assert_ne!(bus.read8(0x2007), 0x16);
}

#[test]
fn nametable_mirroring_follows_header() {
    let mut vertical = bus_with(&ines(0, 1, 0, 0x01, &[]));
    set_ppu_addr(&mut vertical, 0x2005);
    vertical.write8(0x2007, 0x99);
    set_ppu_addr(&mut vertical, 0x2805);
    vertical.read8(0x2007);
    assert_eq!(vertical.read8(0x2007), 0x99);

    let mut horizontal = bus_with(&ines(0, 1, 0, 0x00, &[]));
    set_ppu_addr(&mut horizontal, 0x2005);
    horizontal.write8(0x2007, 0x99);
    set_ppu_addr(&mut horizontal, 0x2405);
    horizontal.read8(0x2007);
    assert_eq!(horizontal.read8(0x2007), 0x99);
}

#[test]
fn vblank_nmi_fires_once_per_frame() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    bus.write8(0x2000, 0x80);

    let total = LINES_PER_FRAME as u32 * DOTS_PER_LINE * 5;
    let mut done = 0;
    let mut nmis = 0;
    while done < total {
        let dots = 7u32.min(total - done);
        bus.step_ppu(dots);
        done += dots;
        if bus.take_nmi() {
            nmis += 1;
        }
    }
    assert_eq!(nmis, 5);
    assert_eq!(bus.ppu.frame_count(), 5);
}

#[test]
fn status_read_clears_vblank_and_latch() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    step_lines(&mut bus, 241);
    assert_eq!(bus.ppu.line(), 241);
    assert_eq!(bus.read8(0x2002) & 0x80, 0x80);
    assert_eq!(bus.read8(0x2002) & 0x80, 0);

    // A half-written PPUADDR is reset by the status read.
    bus.write8(0x2006, 0x3F);
    bus.read8(0x2002);
    set_ppu_addr(&mut bus, 0x2001);
    bus.write8(0x2007, 0x44);
    set_ppu_addr(&mut bus, 0x2001);
    bus.read8(0x2007);
    assert_eq!(bus.read8(0x2007), 0x44);

    // Pre-render clears the flag without a read.
    step_lines(&mut bus, 21 + 241);
    assert_eq!(bus.ppu.line(), 241);
    assert_eq!(bus.ppu.status() & 0x80, 0x80);
    step_lines(&mut bus, 20);
    assert_eq!(bus.ppu.line(), 261);
    assert_eq!(bus.ppu.status() & 0x80, 0);
}

#[test]
fn enabling_nmi_during_vblank_fires() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    step_lines(&mut bus, 245);
    assert!(!bus.take_nmi());
    bus.write8(0x2000, 0x80);
    assert!(bus.take_nmi());
    assert!(!bus.take_nmi());
}

#[test]
fn sprite_cap_with_all_sprites_on_one_line() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    for i in 0..64 {
        bus.ppu.oam[i * 4] = 50;
        bus.ppu.oam[i * 4 + 3] = (i * 4) as u8;
    }

    let (sprites, overflow) = bus.ppu.sprites_on_line(51);
    assert_eq!(sprites, (0..8).collect::<Vec<_>>());
    assert!(overflow);
    let (sprites, overflow) = bus.ppu.sprites_on_line(50);
    assert!(sprites.is_empty());
    assert!(!overflow);

    for line in 0..240 {
        assert!(bus.ppu.sprites_on_line(line).0.len() <= 8);
    }

    bus.write8(0x2001, 0x10);
    step_lines(&mut bus, 60);
    assert_eq!(bus.ppu.status() & 0x20, 0x20);
}

/// CHR RAM tile 1 is solid colour 1; the first nametable is all tile 1.
fn solid_background(bus: &mut NesBus) {
    set_ppu_addr(bus, 0x0010);
    for _ in 0..8 {
        bus.write8(0x2007, 0xFF);
    }
    set_ppu_addr(bus, 0x2000);
    for _ in 0..0x3C0 {
        bus.write8(0x2007, 0x01);
    }
    set_ppu_addr(bus, 0x3F00);
    bus.write8(0x2007, 0x0F);
    bus.write8(0x2007, 0x30);
    set_ppu_addr(bus, 0x3F11);
    bus.write8(0x2007, 0x16);
    set_ppu_addr(bus, 0x0000);
}

#[test]
fn sprite_zero_hit() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    solid_background(&mut bus);
    bus.ppu.oam[0..4].copy_from_slice(&[30, 0x01, 0x00, 40]);
    bus.write8(0x2001, 0x1E);

    step_lines(&mut bus, 31);
    assert_eq!(bus.ppu.status() & 0x40, 0);
    step_lines(&mut bus, 1);
    assert_eq!(bus.ppu.status() & 0x40, 0x40);
}

#[test]
fn background_and_sprite_priority_in_frame() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    solid_background(&mut bus);
    // Sprite 0 in front at x=16, sprite 1 behind the background at x=64.
    bus.ppu.oam[0..8].copy_from_slice(&[9, 0x01, 0x00, 16, 9, 0x01, 0x20, 64]);
    bus.write8(0x2001, 0x1E);
    step_lines(&mut bus, 241);

    let frame = bus.ppu.frame();
    let pixel = |x: usize, y: usize| {
        let i = (y * 256 + x) * 3;
        [frame[i], frame[i + 1], frame[i + 2]]
    };
    let white = pixel(0, 0);
    let sprite = pixel(16, 12);
    assert_ne!(white, sprite);
    assert_eq!(pixel(64, 12), white);
    assert_eq!(pixel(100, 12), white);
}

#[test]
fn nrom_mirrors_16k_image() {
    let cart = cartridge(0, 1, 1);
    assert_eq!(cart.cpu_read(0x9000), 0);
    assert_eq!(cart.cpu_read(0xB000), 1);
    assert_eq!(cart.cpu_read(0xD000), 0);
    assert_eq!(cart.cpu_read(0xF000), 1);

    let cart = cartridge(0, 2, 1);
    assert_eq!(cart.cpu_read(0xD000), 2);
}

#[test]
fn uxrom_switches_low_window_and_wraps() {
    let mut cart = cartridge(2, 4, 0);
    assert_eq!(cart.cpu_read(0x9000), 0);
    assert_eq!(cart.cpu_read(0xD000), 6);

    cart.cpu_write(0x8000, 2);
    assert_eq!(cart.cpu_read(0x9000), 4);
    assert_eq!(cart.cpu_read(0xB000), 5);

    // Bank 15 wraps to 3 on a 4-bank board.
    cart.cpu_write(0xFFFF, 0x0F);
    assert_eq!(cart.cpu_read(0x9000), 6);
    assert_eq!(cart.cpu_read(0xD000), 6);
}

#[test]
fn cnrom_switches_chr_and_wraps() {
    let mut cart = cartridge(3, 1, 4);
    assert_eq!(cart.ppu_read(0x0000), 0);
    cart.cpu_write(0x8000, 2);
    assert_eq!(cart.ppu_read(0x0000), 16);
    assert_eq!(cart.ppu_read(0x1C00), 23);
    cart.cpu_write(0x8000, 0x07);
    assert_eq!(cart.ppu_read(0x0000), 24);

    let mut small = cartridge(3, 1, 2);
    small.cpu_write(0x8000, 3);
    assert_eq!(small.ppu_read(0x0000), 8);
}

#[test]
fn mmc3_prg_banking_modes() {
    let mut cart = cartridge(4, 4, 8);
    cart.cpu_write(0x8000, 6);
    cart.cpu_write(0x8001, 3);
    assert_eq!(cart.cpu_read(0x9000), 3);
    assert_eq!(cart.cpu_read(0xB000), 1);
    assert_eq!(cart.cpu_read(0xD000), 6);
    assert_eq!(cart.cpu_read(0xF000), 7);

    // PRG mode 1 swaps 0x8000 and 0xC000.
    cart.cpu_write(0x8000, 0x46);
    assert_eq!(cart.cpu_read(0x9000), 6);
    assert_eq!(cart.cpu_read(0xD000), 3);

    // R6 = 11 wraps to bank 3 of 8.
    cart.cpu_write(0x8001, 11);
    assert_eq!(cart.cpu_read(0xD000), 3);
}

#[test]
fn mmc3_chr_banking_and_inversion() {
    let mut cart = cartridge(4, 2, 8);
    cart.cpu_write(0x8000, 0);
    cart.cpu_write(0x8001, 5);
    assert_eq!(cart.ppu_read(0x0000), 4);
    assert_eq!(cart.ppu_read(0x0400), 5);
    cart.cpu_write(0x8000, 2);
    cart.cpu_write(0x8001, 70);
    assert_eq!(cart.ppu_read(0x1000), 6);

    cart.cpu_write(0x8000, 0x80);
    assert_eq!(cart.ppu_read(0x1000), 4);
    assert_eq!(cart.ppu_read(0x1400), 5);
    assert_eq!(cart.ppu_read(0x0000), 6);
}

#[test]
fn mmc3_mirroring_control() {
    let mut cart = cartridge(4, 2, 8);
    cart.cpu_write(0xA000, 1);
    assert_eq!(cart.mirroring(), Mirroring::Horizontal);
    cart.cpu_write(0xA000, 0);
    assert_eq!(cart.mirroring(), Mirroring::Vertical);
}

#[test]
fn mmc3_scanline_irq_counter() {
    let mut cart = cartridge(4, 2, 8);
    cart.cpu_write(0xC000, 2);
    cart.cpu_write(0xC001, 0);
    cart.cpu_write(0xE001, 0);

    cart.clock_scanline();
    cart.clock_scanline();
    assert!(!cart.irq_pending());
    cart.clock_scanline();
    assert!(cart.irq_pending());

    cart.cpu_write(0xE000, 0);
    assert!(!cart.irq_pending());
}

#[test]
fn mmc3_counter_is_clocked_by_rendered_lines() {
    let mut bus = bus_with(&ines(4, 2, 8, 0, &[]));
    bus.write8(0xC000, 10);
    bus.write8(0xC001, 0);
    bus.write8(0xE001, 0);

    step_lines(&mut bus, 10);
    assert!(!bus.irq_line(), "rendering off: no clocks");

    bus.write8(0x2001, 0x08);
    step_lines(&mut bus, 10);
    assert!(!bus.irq_line());
    step_lines(&mut bus, 1);
    assert!(bus.irq_line());
}

#[test]
fn oam_dma_copies_a_page_and_stalls() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    for i in 0..256u16 {
        bus.write8(0x0200 + i, i as u8 ^ 0x5A);
    }
    bus.write8(0x2003, 0x00);
    bus.write8(0x4014, 0x02);
    for i in 0..256 {
        assert_eq!(bus.ppu.oam[i], i as u8 ^ 0x5A);
    }
    assert_eq!(bus.take_stall_cycles(), 513);
    assert_eq!(bus.take_stall_cycles(), 0);
}

#[test]
fn joypad_shift_order() {
    let mut bus = bus_with(&ines(0, 1, 0, 0, &[]));
    bus.set_buttons(Buttons::A | Buttons::START | Buttons::RIGHT);

    bus.write8(0x4016, 1);
    assert_eq!(bus.read8(0x4016) & 1, 1);
    assert_eq!(bus.read8(0x4016) & 1, 1, "strobe held: always A");
    bus.write8(0x4016, 0);

    let bits: Vec<u8> = (0..10).map(|_| bus.read8(0x4016) & 1).collect();
    assert_eq!(bits, vec![1, 0, 0, 1, 0, 0, 0, 1, 1, 1]);
}

const FILL_PROGRAM: [u8; 14] = [
    0xA2, 0x00, // LDX #$00
    0x8A, // TXA
    0x9D, 0x00, 0x02, // STA $0200,X
    0xE8, // INX
    0xE0, 0x10, // CPX #$10
    0xD0, 0xF7, // BNE -9
    0x4C, 0x2B, 0xC0, // JMP $C02B
];

#[test]
fn minimal_rom_writes_pattern() {
    let mut nes = Nes::from_rom(&ines(0, 1, 1, 0, &FILL_PROGRAM)).unwrap();
    nes.run_frame().unwrap();
    nes.run_frame().unwrap();

    for i in 0..16u16 {
        assert_eq!(nes.bus.read8(0x0200 + i), i as u8);
    }
    assert_eq!(nes.cpu.regs.pc, 0xC02B);
    assert!(nes.frame_count() >= 1);
    assert_eq!(nes.frame_buffer().len(), 256 * 240 * 3);
}

#[test]
fn nmi_handler_runs_each_frame() {
    let program = [
        0xA9, 0x80, // LDA #$80
        0x8D, 0x00, 0x20, // STA $2000
        0x4C, 0x25, 0xC0, // JMP $C025
    ];
    let mut nes = Nes::from_rom(&ines(0, 1, 1, 0, &program)).unwrap();
    for _ in 0..4 {
        nes.run_frame().unwrap();
    }
    let count = nes.bus.read8(0x00FF);
    assert!((3..=4).contains(&count), "NMI count {count}");
}

#[test]
fn kil_opcode_faults_with_trace() {
    let mut nes = Nes::from_rom(&ines(0, 1, 1, 0, &[0xEA, 0x02])).unwrap();
    let fault = nes.run_frame().unwrap_err();
    assert!(fault.reason.contains("KIL opcode 0x02"), "{}", fault.reason);
    assert_eq!(fault.trace.len(), 2);
    assert!(fault.trace[0].starts_with("C020: EA"), "{}", fault.trace[0]);
    assert!(fault.trace[1].starts_with("C021: 02"), "{}", fault.trace[1]);

    assert!(nes.step().is_err());
    assert_eq!(nes.trace_dump().len(), 2);
}

#[test]
fn save_round_trip() {
    let rom = ines(0, 1, 1, 0x02, &[]);
    let mut nes = Nes::from_rom(&rom).unwrap();
    assert!(nes.has_battery());
    for (i, value) in [0xDE, 0xAD, 0xBE, 0xEF].into_iter().enumerate() {
        nes.bus.write8(0x6000 + i as u16, value);
    }
    nes.bus.write8(0x7FFF, 0x42);
    let save = nes.save_data();
    assert_eq!(save.len(), 0x2000);

    let mut fresh = Nes::from_rom(&rom).unwrap();
    fresh.load_save(&save);
    assert_eq!(fresh.bus.read8(0x6001), 0xAD);
    assert_eq!(fresh.bus.read8(0x7FFF), 0x42);

    let mut short = Nes::from_rom(&rom).unwrap();
    short.load_save(&[1, 2, 3]);
    assert_eq!(short.bus.read8(0x6002), 3);
    assert_eq!(short.bus.read8(0x6003), 0);
}

#[test]
fn no_battery_no_save_and_no_audio() {
    let mut nes = Nes::from_rom(&ines(0, 1, 1, 0, &[])).unwrap();
    assert!(!nes.has_battery());
    assert!(nes.save_data().is_empty());
    assert!(nes.audio_samples().is_none());
    assert_eq!((nes.width(), nes.height()), (256, 240));
}

/// Path of an external test ROM: `$var` if set, else `roms/<file>` at the
/// workspace root. `None` when the file is absent so the test can skip.
fn external_rom(var: &str, file: &str) -> Option<std::path::PathBuf> {
    let path = match std::env::var_os(var) {
        Some(path) => std::path::PathBuf::from(path),
        None => std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../roms").join(file),
    };
    if path.exists() {
        Some(path)
    } else {
        eprintln!("skipping: {} not found (set {var})", path.display());
        None
    }
}

#[test]
fn nestest_automation_run_passes() {
    let Some(path) = external_rom("NESTEST_ROM", "nestest.nes") else {
        return;
    };
    let rom = std::fs::read(&path).unwrap();
    let mut nes = Nes::from_rom(&rom).unwrap();

    // Automation mode: enter at 0xC000 with the register state nestest.log
    // starts from.
    nes.cpu.regs.pc = 0xC000;
    nes.cpu.regs.a = 0;
    nes.cpu.regs.x = 0;
    nes.cpu.regs.y = 0;
    nes.cpu.regs.sp = 0xFD;
    nes.cpu.regs.p = Status::from_bits_truncate(0x24);

    let mut cycles = 0u64;
    let mut steps = 0;
    while nes.cpu.regs.pc != 0xC66E {
        cycles += nes.step().unwrap() as u64;
        steps += 1;
        assert!(steps < 10_000, "runaway at pc {:04X}", nes.cpu.regs.pc);
    }

    // 0x02 holds the official-opcode result, 0x03 the unofficial one.
    assert_eq!(nes.bus.read8(0x0002), 0x00, "official opcode failure code");
    assert_eq!(nes.bus.read8(0x0003), 0x00, "unofficial opcode failure code");
    assert_eq!(nes.cpu.regs.a, 0x00);
    assert_eq!(nes.cpu.regs.x, 0xFF);
    assert_eq!(nes.cpu.regs.y, 0x15);
    assert_eq!(nes.cpu.regs.sp, 0xFD);
    assert_eq!(nes.cpu.regs.p.bits(), 0x27);
    // nestest.log reports CYC:26554 at 0xC66E, counting from CYC:7.
    assert_eq!(cycles, 26554 - 7);
}
