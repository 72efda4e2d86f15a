use bitflags::bitflags;

use crate::key::Key;

bitflags! {
    /// Snapshot of the eight logical controller buttons shared by both
    /// consoles.
    ///
    /// The bit order matches the NES controller shift order, so the NES
    /// joypad can shift it out directly.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Buttons: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
        const LEFT = 1 << 6;
        const RIGHT = 1 << 7;
    }
}

impl Buttons {
    /// Buttons in bit order, used to translate a gamepad binding array.
    pub const ORDER: [Buttons; 8] = [
        Buttons::A,
        Buttons::B,
        Buttons::SELECT,
        Buttons::START,
        Buttons::UP,
        Buttons::DOWN,
        Buttons::LEFT,
        Buttons::RIGHT,
    ];

    /// Default keyboard layout: Z/X for A/B, Left Shift for Select,
    /// Return for Start and the arrow keys for the D-pad.
    pub fn from_key(key: Key) -> Option<Buttons> {
        match key {
            Key::Z => Some(Buttons::A),
            Key::X => Some(Buttons::B),
            Key::LShift => Some(Buttons::SELECT),
            Key::Return => Some(Buttons::START),
            Key::Up => Some(Buttons::UP),
            Key::Down => Some(Buttons::DOWN),
            Key::Left => Some(Buttons::LEFT),
            Key::Right => Some(Buttons::RIGHT),
            _ => None,
        }
    }

    /// Translate a pressed gamepad button index through a binding array.
    ///
    /// `bind[i]` is the gamepad button index that drives `ORDER[i]`.
    pub fn from_gamepad(bind: &[i32; 8], button: u8) -> Buttons {
        let mut out = Buttons::empty();
        for (slot, &index) in bind.iter().enumerate() {
            if index == button as i32 {
                out |= Self::ORDER[slot];
            }
        }
        out
    }
}
