use retroduo_common::Color;

/// Palette RAM slot for a 0x3F00-0x3FFF address. 0x3F10/14/18/1C are
/// mirrors of the background entries below them.
pub(super) fn index(addr: u16) -> usize {
    let i = (addr & 0x1F) as usize;
    if i & 0x13 == 0x10 {
        i & !0x10
    } else {
        i
    }
}

const fn c(r: u8, g: u8, b: u8) -> Color {
    Color::new_rgb(r, g, b)
}

/// 2C02 master palette.
#[rustfmt::skip]
pub(super) static MASTER_PALETTE: [Color; 64] = [
    c(84, 84, 84), c(0, 30, 116), c(8, 16, 144), c(48, 0, 136),
    c(68, 0, 100), c(92, 0, 48), c(84, 4, 0), c(60, 24, 0),
    c(32, 42, 0), c(8, 58, 0), c(0, 64, 0), c(0, 60, 0),
    c(0, 50, 60), c(0, 0, 0), c(0, 0, 0), c(0, 0, 0),

    c(152, 150, 152), c(8, 76, 196), c(48, 50, 236), c(92, 30, 228),
    c(136, 20, 176), c(160, 20, 100), c(152, 34, 32), c(120, 60, 0),
    c(84, 90, 0), c(40, 114, 0), c(8, 124, 0), c(0, 118, 40),
    c(0, 102, 120), c(0, 0, 0), c(0, 0, 0), c(0, 0, 0),

    c(236, 238, 236), c(76, 154, 236), c(120, 124, 236), c(176, 98, 236),
    c(228, 84, 236), c(236, 88, 180), c(236, 106, 100), c(212, 136, 32),
    c(160, 170, 0), c(116, 196, 0), c(76, 208, 32), c(56, 204, 108),
    c(56, 180, 204), c(60, 60, 60), c(0, 0, 0), c(0, 0, 0),

    c(236, 238, 236), c(168, 204, 236), c(188, 188, 236), c(212, 178, 236),
    c(236, 174, 236), c(236, 174, 212), c(236, 180, 176), c(228, 196, 144),
    c(204, 210, 120), c(180, 222, 120), c(168, 226, 144), c(152, 226, 180),
    c(160, 214, 228), c(160, 162, 160), c(0, 0, 0), c(0, 0, 0),
];
