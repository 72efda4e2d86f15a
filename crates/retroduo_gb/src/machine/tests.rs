use retroduo_common::{Buttons, ConsoleSession};

use super::apu::Apu;
use super::ppu::{Ppu, DOTS_PER_LINE, LINES_PER_FRAME};
use super::timer::Timer;
use super::{GameBoy, GameBoyModel};
use crate::cpu::Bus;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

const BANK: usize = 0x4000;

/// Cartridge image with `banks` 16 KiB banks, a header for `cart_type` /
/// `ram_code` and `program` placed at the 0x0100 entry point.
fn rom_with(cart_type: u8, banks: usize, ram_code: u8, program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; banks * BANK];
    rom[0x100..0x100 + program.len()].copy_from_slice(program);
    rom[0x134..0x138].copy_from_slice(b"TEST");
    rom[0x147] = cart_type;
    rom[0x148] = match banks {
        0..=2 => 0,
        n => n.trailing_zeros() as u8 - 1,
    };
    rom[0x149] = ram_code;
    // Tag every bank with its own number so bank switches are observable.
    for bank in 0..banks {
        rom[bank * BANK + 0x0200] = bank as u8;
    }
    rom
}

fn machine(program: &[u8]) -> GameBoy {
    GameBoy::from_rom(&rom_with(0x00, 2, 0, program)).unwrap()
}

/// Turn the LCD off so VRAM/OAM are accessible at any time.
fn lcd_off(gb: &mut GameBoy) {
    gb.bus.write8(0xFF40, 0x00);
}

#[test]
fn header_fields_are_parsed() {
    let mut rom = rom_with(0x1B, 4, 0x03, &[]);
    rom[0x134..0x143].copy_from_slice(b"POCKET\0\0\0\0\0\0\0\0\0");
    rom[0x143] = 0x80;
    let gb = GameBoy::from_rom(&rom).unwrap();
    assert_eq!(gb.title(), "POCKET");
    assert_eq!(gb.model(), GameBoyModel::Cgb);
    assert!(gb.has_battery());
    assert_eq!(gb.save_data().len(), 0x8000);
    assert_eq!(gb.cpu.regs.a, 0x11);
}

#[test]
fn unsupported_cartridge_type_is_a_load_error() {
    let rom = rom_with(0x05, 2, 0, &[]);
    let err = GameBoy::from_rom(&rom).err().unwrap();
    assert!(err.to_string().contains("0x05"));
    assert!(GameBoy::from_rom(&[0u8; 0x100]).is_err());
}

#[test]
fn bus_reads_back_plain_memory_writes() {
    let mut gb = machine(&[]);
    lcd_off(&mut gb);

    let ranges = [
        0x8000u16..=0x9FFF,
        0xC000..=0xDFFF,
        0xFE00..=0xFE9F,
        0xFF80..=0xFFFE,
    ];
    for range in ranges {
        for addr in range.step_by(0x0F) {
            let value = (addr as u8) ^ 0x5A;
            gb.bus.write8(addr, value);
            assert_eq!(gb.bus.read8(addr), value, "addr {addr:04X}");
        }
    }
}

#[test]
fn bus_masked_and_special_addresses() {
    let mut gb = machine(&[]);
    lcd_off(&mut gb);

    // Echo RAM aliases work RAM in both directions.
    gb.bus.write8(0xC123, 0x42);
    assert_eq!(gb.bus.read8(0xE123), 0x42);
    gb.bus.write8(0xFDFF, 0x24);
    assert_eq!(gb.bus.read8(0xDDFF), 0x24);

    // Unusable area.
    gb.bus.write8(0xFEA0, 0x12);
    assert_eq!(gb.bus.read8(0xFEA0), 0xFF);

    // IF keeps 5 bits and reads the top three as set.
    gb.bus.write8(0xFF0F, 0xFF);
    assert_eq!(gb.bus.read8(0xFF0F), 0xFF);
    gb.bus.write8(0xFF0F, 0x01);
    assert_eq!(gb.bus.read8(0xFF0F), 0xE1);
    gb.bus.write8(0xFFFF, 0x05);
    assert_eq!(gb.bus.read8(0xFFFF), 0xE5);

    // LY is read-only, DIV resets on any write.
    gb.bus.write8(0xFF44, 0x33);
    assert_eq!(gb.bus.read8(0xFF44), 0x00);
    gb.bus.write8(0xFF04, 0x99);
    assert_eq!(gb.bus.read8(0xFF04), 0x00);

    // ROM is not writable; cartridge RAM is absent on this cartridge.
    gb.bus.write8(0x0200, 0x77);
    assert_eq!(gb.bus.read8(0x0200), 0x00);
    gb.bus.write8(0xA000, 0x77);
    assert_eq!(gb.bus.read8(0xA000), 0xFF);

    // CGB-only registers are open bus on DMG.
    gb.bus.write8(0xFF4D, 0x01);
    assert_eq!(gb.bus.read8(0xFF4D), 0xFF);
    gb.bus.write8(0xFF70, 0x03);
    assert_eq!(gb.bus.read8(0xFF70), 0xFF);
}

#[test]
fn post_boot_io_state() {
    let mut gb = machine(&[]);
    let expected = [
        (0xFF10u16, 0x80u8),
        (0xFF11, 0xBF),
        (0xFF12, 0xF3),
        (0xFF14, 0xBF),
        (0xFF24, 0x77),
        (0xFF25, 0xF3),
        (0xFF26, 0xF1),
        (0xFF40, 0x91),
        (0xFF47, 0xFC),
        (0xFF0F, 0xE1),
        (0xFF04, 0xAB),
    ];
    for (addr, value) in expected {
        assert_eq!(gb.bus.read8(addr), value, "addr {addr:04X}");
    }
}

#[test]
fn video_memory_is_locked_during_pixel_transfer() {
    let mut gb = machine(&[]);
    // Post-boot LCD is on at the start of mode 2; move into mode 3.
    gb.bus.step_ppu(100);
    assert_eq!(gb.bus.read8(0xFF41) & 0x03, 3);
    gb.bus.write8(0x8000, 0x12);
    assert_eq!(gb.bus.read8(0x8000), 0xFF);
    assert_eq!(gb.bus.read8(0xFE00), 0xFF);

    lcd_off(&mut gb);
    assert_eq!(gb.bus.read8(0x8000), 0x00);
}

#[test]
fn cgb_work_ram_bank_zero_selects_bank_one() {
    let mut rom = rom_with(0x00, 2, 0, &[]);
    rom[0x143] = 0xC0;
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    gb.bus.write8(0xFF70, 0x01);
    gb.bus.write8(0xD000, 0x11);
    gb.bus.write8(0xFF70, 0x02);
    gb.bus.write8(0xD000, 0x22);
    assert_eq!(gb.bus.read8(0xD000), 0x22);
    gb.bus.write8(0xFF70, 0x00);
    assert_eq!(gb.bus.read8(0xD000), 0x11);
    assert_eq!(gb.bus.read8(0xFF70), 0xF8);
}

#[test]
fn timer_rate_three_increments_once_per_256_cycles() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write_tac(0x07);

    timer.tick(255, false, &mut if_reg);
    assert_eq!(timer.tima, 0);
    timer.tick(1, false, &mut if_reg);
    assert_eq!(timer.tima, 1);
    timer.tick(256, false, &mut if_reg);
    assert_eq!(timer.tima, 2);
    assert_eq!(if_reg, 0);
}

#[test]
fn timer_overflow_reloads_after_four_cycles() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write_tac(0x05);
    timer.tima = 0xFF;
    timer.tma = 0x42;

    timer.tick(16, false, &mut if_reg);
    assert_eq!(timer.tima, 0x00);
    assert_eq!(if_reg, 0);

    timer.tick(3, false, &mut if_reg);
    assert_eq!(timer.tima, 0x00);
    assert_eq!(if_reg, 0);

    timer.tick(1, false, &mut if_reg);
    assert_eq!(timer.tima, 0x42);
    assert_eq!(if_reg, 0x04);
}

#[test]
fn timer_write_during_overflow_delay() {
    let mut if_reg = 0;

    // TIMA write cancels the reload.
    let mut timer = Timer::new();
    timer.write_tac(0x05);
    timer.tima = 0xFF;
    timer.tick(16, false, &mut if_reg);
    timer.write_tima(0x10);
    timer.tick(8, false, &mut if_reg);
    assert_eq!(timer.tima, 0x10);
    assert_eq!(if_reg, 0);

    // TMA write is picked up by the pending reload.
    let mut timer = Timer::new();
    timer.write_tac(0x05);
    timer.tima = 0xFF;
    timer.tma = 0x01;
    timer.tick(17, false, &mut if_reg);
    timer.write_tma(0x80);
    timer.tick(3, false, &mut if_reg);
    assert_eq!(timer.tima, 0x80);
    assert_eq!(if_reg, 0x04);

    // DIV write drops it.
    let mut if_reg = 0;
    let mut timer = Timer::new();
    timer.write_tac(0x05);
    timer.tima = 0xFF;
    timer.tick(16, false, &mut if_reg);
    timer.write_div();
    timer.tick(8, false, &mut if_reg);
    assert_eq!(timer.tima, 0x00);
    assert_eq!(if_reg, 0);
}

#[test]
fn timer_div_write_on_high_bit_ticks_tima() {
    let mut if_reg = 0;
    let mut timer = Timer::new();
    timer.write_tac(0x05);
    // Bit 3 high: resetting the counter is a falling edge.
    timer.tick(8, false, &mut if_reg);
    assert_eq!(timer.tima, 0);
    timer.write_div();
    assert_eq!(timer.tima, 1);
    assert_eq!(timer.read_div(), 0);

    // Bit 3 low: no edge.
    timer.tick(4, false, &mut if_reg);
    timer.write_div();
    assert_eq!(timer.tima, 1);
}

#[test]
fn timer_is_frozen_while_stopped() {
    let mut if_reg = 0;
    let mut timer = Timer::new();
    timer.write_tac(0x05);
    timer.tick(0x300, false, &mut if_reg);
    let tima = timer.tima;

    timer.tick(0x1000, true, &mut if_reg);
    assert_eq!(timer.read_div(), 0);
    assert_eq!(timer.tima, tima);
}

#[test]
fn vblank_fires_exactly_once_per_frame() {
    let mut ppu = Ppu::new(false);
    ppu.init_post_boot();
    let mut if_reg = 0u8;
    let mut vblanks = 0;
    let frame_dots = DOTS_PER_LINE * LINES_PER_FRAME as u32;

    // Odd step size so chunks straddle mode boundaries.
    let mut dots = 0;
    while dots < frame_dots * 5 {
        ppu.step(7, &mut if_reg);
        dots += 7;
        if if_reg & 0x01 != 0 {
            vblanks += 1;
            if_reg &= !0x01;
        }
    }
    assert_eq!(vblanks, 5);
    assert_eq!(ppu.frame_count(), 5);
}

#[test]
fn stat_lyc_interrupt_is_edge_triggered() {
    let mut ppu = Ppu::new(false);
    ppu.init_post_boot();
    let mut if_reg = 0u8;
    ppu.write_register(0xFF45, 2, &mut if_reg);
    ppu.write_register(0xFF41, 0x40, &mut if_reg);
    assert_eq!(if_reg & 0x02, 0);

    ppu.step(DOTS_PER_LINE * 2, &mut if_reg);
    assert_eq!(ppu.ly(), 2);
    assert_eq!(if_reg & 0x02, 0x02);

    // Still on the matching line: no second request.
    if_reg = 0;
    ppu.step(100, &mut if_reg);
    assert_eq!(if_reg & 0x02, 0);
    assert_eq!(ppu.read_register(0xFF41) & 0x04, 0x04);
}

#[test]
fn at_most_ten_sprites_per_line() {
    let mut ppu = Ppu::new(false);
    ppu.init_post_boot();
    let mut if_reg = 0u8;
    // BG on, sprites on, 8x8, tile data at 0x8000.
    ppu.write_register(0xFF40, 0x93, &mut if_reg);

    // Tile 1: solid color 3.
    for i in 0..16 {
        ppu.write_vram_bank(0, 0x8010 + i, 0xFF);
    }
    // Twelve non-overlapping sprites on line 0.
    for i in 0..12 {
        ppu.write_oam_raw(i * 4, 16);
        ppu.write_oam_raw(i * 4 + 1, 8 + i as u8 * 8);
        ppu.write_oam_raw(i * 4 + 2, 1);
        ppu.write_oam_raw(i * 4 + 3, 0);
    }
    assert_eq!(ppu.sprites_on_line(0).len(), 10);

    ppu.step(DOTS_PER_LINE * LINES_PER_FRAME as u32, &mut if_reg);
    let frame = ppu.frame();
    let dark = (0..SCREEN_WIDTH)
        .filter(|x| frame[x * 3] == 0x00)
        .count();
    assert_eq!(dark, 80);
    // The eleventh sprite would start at x=80.
    assert_eq!(frame[80 * 3], 0xFF);
    assert_eq!(frame.len(), SCREEN_WIDTH * SCREEN_HEIGHT * 3);
}

#[test]
fn dmg_sprite_priority_prefers_lower_x() {
    let mut ppu = Ppu::new(false);
    ppu.init_post_boot();
    let mut if_reg = 0u8;
    ppu.write_register(0xFF40, 0x93, &mut if_reg);
    ppu.write_register(0xFF48, 0xE4, &mut if_reg);
    ppu.write_register(0xFF49, 0x00, &mut if_reg);

    for i in 0..16 {
        ppu.write_vram_bank(0, 0x8010 + i, 0xFF);
    }
    // OAM 0 at x=12 uses OBP1 (all white); OAM 1 at x=8 uses OBP0.
    for (slot, x, attr) in [(0usize, 12u8, 0x10u8), (1, 8, 0x00)] {
        ppu.write_oam_raw(slot * 4, 16);
        ppu.write_oam_raw(slot * 4 + 1, x);
        ppu.write_oam_raw(slot * 4 + 2, 1);
        ppu.write_oam_raw(slot * 4 + 3, attr);
    }
    assert_eq!(ppu.sprites_on_line(0), vec![1, 0]);

    ppu.step(DOTS_PER_LINE * LINES_PER_FRAME as u32, &mut if_reg);
    // Overlap at x=4..8 belongs to the x=8 sprite (black through OBP0).
    assert_eq!(ppu.frame()[5 * 3], 0x00);
    // Beyond it only the OBP1 sprite covers, drawing white.
    assert_eq!(ppu.frame()[10 * 3], 0xFF);
}

#[test]
fn mbc1_banks_wrap_and_zero_maps_to_one() {
    let rom = rom_with(0x01, 4, 0, &[]);
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    assert_eq!(gb.bus.read8(0x4200), 1);
    gb.bus.write8(0x2000, 3);
    assert_eq!(gb.bus.read8(0x4200), 3);
    gb.bus.write8(0x2000, 5);
    assert_eq!(gb.bus.read8(0x4200), 1);
    gb.bus.write8(0x2000, 0);
    assert_eq!(gb.bus.read8(0x4200), 1);
}

#[test]
fn mbc1_mode_one_remaps_low_window() {
    let rom = rom_with(0x03, 64, 0x03, &[]);
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    gb.bus.write8(0x4000, 1);
    gb.bus.write8(0x2000, 1);
    assert_eq!(gb.bus.read8(0x4200), 33);
    assert_eq!(gb.bus.read8(0x0200), 0);

    gb.bus.write8(0x6000, 1);
    assert_eq!(gb.bus.read8(0x0200), 32);

    // Mode 1 also selects the RAM bank.
    gb.bus.write8(0x0000, 0x0A);
    gb.bus.write8(0xA000, 0xB1);
    gb.bus.write8(0x6000, 0);
    gb.bus.write8(0xA000, 0xB0);
    gb.bus.write8(0x6000, 1);
    assert_eq!(gb.bus.read8(0xA000), 0xB1);
    assert_eq!(gb.save_data()[0x2000], 0xB1);
    assert_eq!(gb.save_data()[0], 0xB0);
}

#[test]
fn mbc5_nine_bit_bank_wraps_and_allows_zero() {
    let rom = rom_with(0x19, 4, 0, &[]);
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    gb.bus.write8(0x2000, 0);
    assert_eq!(gb.bus.read8(0x4200), 0);
    gb.bus.write8(0x3000, 1);
    gb.bus.write8(0x2000, 2);
    // Bank 0x102 wraps to 2 on a four-bank ROM.
    assert_eq!(gb.bus.read8(0x4200), 2);
}

#[test]
fn mbc3_rtc_registers_latch() {
    let rom = rom_with(0x10, 4, 0x02, &[]);
    let mut gb = GameBoy::from_rom(&rom).unwrap();
    gb.bus.write8(0x0000, 0x0A);

    gb.bus.write8(0x4000, 0x08);
    gb.bus.write8(0xA000, 42);
    assert_eq!(gb.bus.read8(0xA000), 42);

    gb.bus.write8(0x4000, 0x00);
    gb.bus.write8(0xA000, 7);
    assert_eq!(gb.bus.read8(0xA000), 7);

    gb.bus.write8(0x6000, 0);
    gb.bus.write8(0x6000, 1);
    gb.bus.write8(0x4000, 0x08);
    assert_eq!(gb.bus.read8(0xA000), 42);

    // Disabled RAM reads open bus.
    gb.bus.write8(0x0000, 0x00);
    assert_eq!(gb.bus.read8(0xA000), 0xFF);
}

#[test]
fn save_data_round_trips_and_truncates() {
    let rom = rom_with(0x03, 4, 0x02, &[]);
    let mut gb = GameBoy::from_rom(&rom).unwrap();
    gb.bus.write8(0x0000, 0x0A);
    for i in 0..0x100u16 {
        gb.bus.write8(0xA000 + i, i as u8 ^ 0xC3);
    }
    let save = gb.save_data();
    assert_eq!(save.len(), 0x2000);

    let mut restored = GameBoy::from_rom(&rom).unwrap();
    restored.load_save(&save);
    restored.bus.write8(0x0000, 0x0A);
    for i in 0..0x100u16 {
        assert_eq!(restored.bus.read8(0xA000 + i), i as u8 ^ 0xC3);
    }

    // A short image fills only its prefix.
    let mut short = GameBoy::from_rom(&rom).unwrap();
    short.load_save(&[0xAA; 4]);
    let data = short.save_data();
    assert_eq!(&data[..4], &[0xAA; 4]);
    assert!(data[4..].iter().all(|&b| b == 0));

    // An oversized image is truncated.
    let mut long = GameBoy::from_rom(&rom).unwrap();
    long.load_save(&vec![0x55; 0x3000]);
    assert_eq!(long.save_data(), vec![0x55; 0x2000]);
}

#[test]
fn apu_is_silent_with_all_channels_off() {
    let mut apu = Apu::new();
    let mut consumer = apu.take_consumer().unwrap();
    assert!(apu.take_consumer().is_none());

    apu.write_register(0xFF26, 0x80);
    apu.write_register(0xFF24, 0x77);
    apu.write_register(0xFF25, 0xFF);
    apu.step(70_224);

    let mut frames = 0;
    while let Some((left, right)) = consumer.pop_stereo() {
        assert_eq!(left, 0.0);
        assert_eq!(right, 0.0);
        frames += 1;
    }
    assert!(frames > 500, "only {frames} frames produced");
}

#[test]
fn pulse_channel_zero_crossings_match_frequency() {
    let mut apu = Apu::new();
    apu.write_register(0xFF26, 0x80);
    apu.write_register(0xFF24, 0x77);
    apu.write_register(0xFF25, 0x11);
    apu.write_register(0xFF11, 0x80); // 50% duty
    apu.write_register(0xFF12, 0xF0); // full volume, no envelope
    let period: u16 = 1750;
    apu.write_register(0xFF13, period as u8);
    apu.write_register(0xFF14, 0x80 | (period >> 8) as u8);
    assert_eq!(apu.read_register(0xFF26) & 0x01, 0x01);

    let mut crossings = 0;
    let mut previous = 0.0f32;
    for _ in 0..44_100 {
        let (left, _) = apu.generate_sample();
        if previous != 0.0 && left.signum() != previous.signum() {
            crossings += 1;
        }
        previous = left;
    }

    let expected = 2.0 * 131_072.0 / (2048.0 - period as f64);
    let error = (crossings as f64 - expected).abs() / expected;
    assert!(error < 0.02, "{crossings} crossings, expected ~{expected:.0}");
}

#[test]
fn length_timer_disables_channel() {
    let mut apu = Apu::new();
    apu.write_register(0xFF26, 0x80);
    apu.write_register(0xFF11, 0x3E); // two ticks left
    apu.write_register(0xFF12, 0xF0);
    apu.write_register(0xFF14, 0xC0); // trigger with length enabled
    assert_eq!(apu.read_register(0xFF26), 0xF1);

    for _ in 0..600 {
        apu.generate_sample();
    }
    assert_eq!(apu.read_register(0xFF26), 0xF0);
}

#[test]
fn apu_power_off_clears_registers_but_not_wave_ram() {
    let mut apu = Apu::new();
    apu.init_post_boot();
    apu.write_register(0xFF30, 0x12);
    apu.write_register(0xFF26, 0x00);
    assert_eq!(apu.read_register(0xFF26), 0x70);
    assert_eq!(apu.read_register(0xFF24), 0x00);
    assert_eq!(apu.read_register(0xFF30), 0x12);

    // Writes are ignored while powered off.
    apu.write_register(0xFF24, 0x77);
    assert_eq!(apu.read_register(0xFF24), 0x00);
}

#[test]
fn oam_dma_copies_one_byte_per_step() {
    let mut gb = machine(&[]);
    lcd_off(&mut gb);
    for i in 0..0xA0u16 {
        gb.bus.write8(0xC000 + i, i as u8 + 1);
    }
    gb.bus.write8(0xFF46, 0xC0);
    assert_eq!(gb.bus.read8(0xFF46), 0xC0);

    for _ in 0..0x9F {
        gb.bus.dma_step();
    }
    assert!(gb.bus.dma_active());
    gb.bus.dma_step();
    assert!(!gb.bus.dma_active());
    for i in 0..0xA0u16 {
        assert_eq!(gb.bus.read8(0xFE00 + i), i as u8 + 1);
    }
}

#[test]
fn oam_dma_with_bad_source_mid_transfer_faults() {
    let mut gb = machine(&[0x00; 4]);
    gb.bus.write8(0xFF46, 0xC0);
    gb.bus.dma_step();
    // Out-of-range source: does not restart, but the running transfer
    // now points at it.
    gb.bus.write8(0xFF46, 0xE0);
    assert!(gb.bus.dma_active());

    let fault = gb.step().unwrap_err();
    assert!(fault.reason.contains("OAM DMA"), "{}", fault.reason);
    assert!(gb.step().is_err());
}

#[test]
fn general_purpose_hdma_copies_blocks() {
    let mut rom = rom_with(0x00, 2, 0, &[]);
    rom[0x143] = 0x80;
    let mut gb = GameBoy::from_rom(&rom).unwrap();
    lcd_off(&mut gb);

    for i in 0..0x20u16 {
        gb.bus.write8(0xC000 + i, 0x80 + i as u8);
    }
    gb.bus.write8(0xFF51, 0xC0);
    gb.bus.write8(0xFF52, 0x00);
    gb.bus.write8(0xFF53, 0x81);
    gb.bus.write8(0xFF54, 0x00);
    gb.bus.write8(0xFF55, 0x01);

    for i in 0..0x20u16 {
        assert_eq!(gb.bus.read8(0x8100 + i), 0x80 + i as u8);
    }
    assert_eq!(gb.bus.read8(0xFF55), 0xFF);
}

#[test]
fn hblank_hdma_copies_one_block_per_line() {
    let mut rom = rom_with(0x00, 2, 0, &[]);
    rom[0x143] = 0x80;
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    for i in 0..0x30u16 {
        gb.bus.write8(0xC000 + i, 0x40 + i as u8);
    }
    gb.bus.write8(0xFF51, 0xC0);
    gb.bus.write8(0xFF52, 0x00);
    gb.bus.write8(0xFF53, 0x00);
    gb.bus.write8(0xFF54, 0x00);
    gb.bus.write8(0xFF55, 0x82);
    assert_eq!(gb.bus.read8(0xFF55), 0x02);

    gb.bus.step_ppu(DOTS_PER_LINE);
    assert_eq!(gb.bus.read8(0xFF55), 0x01);
    gb.bus.step_ppu(DOTS_PER_LINE * 2);
    assert_eq!(gb.bus.read8(0xFF55), 0xFF);

    lcd_off(&mut gb);
    for i in 0..0x30u16 {
        assert_eq!(gb.bus.read8(0x8000 + i), 0x40 + i as u8);
    }
}

#[test]
fn cancelled_hblank_hdma_reports_blocks_left() {
    let mut rom = rom_with(0x00, 2, 0, &[]);
    rom[0x143] = 0x80;
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    for i in 0..0x50u16 {
        gb.bus.write8(0xC000 + i, 0x20 + i as u8);
    }
    gb.bus.write8(0xFF51, 0xC0);
    gb.bus.write8(0xFF52, 0x00);
    gb.bus.write8(0xFF53, 0x00);
    gb.bus.write8(0xFF54, 0x00);
    gb.bus.write8(0xFF55, 0x84);
    gb.bus.step_ppu(DOTS_PER_LINE);
    assert_eq!(gb.bus.read8(0xFF55), 0x03);

    // Bit 7 clear stops the transfer; four blocks were left.
    gb.bus.write8(0xFF55, 0x00);
    assert_eq!(gb.bus.read8(0xFF55), 0x83);
    gb.bus.step_ppu(DOTS_PER_LINE * 2);
    assert_eq!(gb.bus.read8(0xFF55), 0x83);

    lcd_off(&mut gb);
    assert_eq!(gb.bus.read8(0x800F), 0x2F);
    assert_eq!(gb.bus.read8(0x8010), 0x00);

    // A new general-purpose transfer clears the cancelled state.
    gb.bus.write8(0xFF55, 0x00);
    assert_eq!(gb.bus.read8(0xFF55), 0xFF);
    assert_eq!(gb.bus.read8(0x8010), 0x30);
}

#[test]
fn joypad_press_requests_interrupt() {
    let mut gb = machine(&[]);
    gb.bus.write8(0xFF0F, 0x00);

    gb.set_buttons(Buttons::A | Buttons::DOWN);
    assert_eq!(gb.bus.read8(0xFF0F) & 0x10, 0x10);

    gb.bus.write8(0xFF00, 0x10); // action buttons
    assert_eq!(gb.bus.read8(0xFF00) & 0x0F, 0x0E);
    gb.bus.write8(0xFF00, 0x20); // d-pad
    assert_eq!(gb.bus.read8(0xFF00) & 0x0F, 0x07);

    // Holding the same buttons does not re-request.
    gb.bus.write8(0xFF0F, 0x00);
    gb.set_buttons(Buttons::A | Buttons::DOWN);
    assert_eq!(gb.bus.read8(0xFF0F) & 0x10, 0x00);
}

#[test]
fn serial_transfer_completes_immediately() {
    let mut gb = machine(&[]);
    gb.bus.write8(0xFF0F, 0x00);
    gb.bus.write8(0xFF01, b'G');
    gb.bus.write8(0xFF02, 0x81);
    assert_eq!(gb.serial_output(), b"G");
    assert_eq!(gb.bus.read8(0xFF01), 0xFF);
    assert_eq!(gb.bus.read8(0xFF02) & 0x80, 0x00);
    assert_eq!(gb.bus.read8(0xFF0F) & 0x08, 0x08);
}

/// Fill 0xC000..0xC00F with 0..15 then halt.
#[test]
fn minimal_rom_writes_ram_pattern_and_halts() {
    let program = [
        0x21, 0x00, 0xC0, // LD HL,0xC000
        0x06, 0x10, // LD B,16
        0x3E, 0x00, // LD A,0
        0x22, // loop: LD (HL+),A
        0x3C, // INC A
        0x05, // DEC B
        0x20, 0xFB, // JR NZ,loop
        0x76, // HALT
    ];
    let mut gb = machine(&program);
    gb.run_frame().unwrap();

    assert!(gb.cpu.halted);
    for i in 0..16u16 {
        assert_eq!(gb.bus.read8(0xC000 + i), i as u8);
    }
    assert_eq!(gb.bus.read8(0xC010), 0x00);
    assert_eq!(gb.frame_buffer().len(), SCREEN_WIDTH * SCREEN_HEIGHT * 3);
}

#[test]
fn illegal_opcode_ends_the_frame_with_a_trace() {
    let program = [0x00, 0x00, 0xD3];
    let mut gb = machine(&program);
    let before = gb.frame_buffer().to_vec();

    let fault = gb.run_frame().unwrap_err();
    assert!(fault.reason.contains("0xD3"), "{}", fault.reason);
    assert_eq!(fault.trace.len(), 3);
    assert!(fault.trace[2].starts_with("0102"));
    assert_eq!(gb.frame_buffer(), &before[..]);

    // Further steps keep reporting the same fault.
    assert!(gb.step().is_err());
}

#[test]
fn run_frame_consumes_the_fractional_budget() {
    // JR -2 forever.
    let mut gb = machine(&[0x18, 0xFE]);
    for _ in 0..3 {
        gb.run_frame().unwrap();
    }
    assert!(gb.frame_count() >= 2);
    assert_eq!(gb.trace_dump().len(), 256);
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
fn blargg_cpu_instrs_reports_passed() {
    let Some(path) = external_rom("CPU_INSTRS_ROM", "cpu_instrs.gb") else {
        return;
    };
    let rom = std::fs::read(&path).unwrap();
    let mut gb = GameBoy::from_rom(&rom).unwrap();

    // The full suite needs about a minute of emulated time.
    for _ in 0..60 * 120 {
        gb.run_frame().unwrap();
        let output = String::from_utf8_lossy(gb.serial_output());
        if output.contains("Passed") || output.contains("Failed") {
            break;
        }
    }

    let output = String::from_utf8_lossy(gb.serial_output()).into_owned();
    assert!(output.contains("Passed"), "serial output:\n{output}");
    assert!(!output.contains("Failed"), "serial output:\n{output}");
}
