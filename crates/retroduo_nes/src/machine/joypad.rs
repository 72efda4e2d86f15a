use retroduo_common::Buttons;

/// Standard controller on 0x4016: an 8-bit shift register loaded while
/// the strobe bit is high.
pub(super) struct Joypad {
    buttons: Buttons,
    strobe: bool,
    /// Next bit to shift out; reads past 8 return 1.
    index: u8,
}

impl Joypad {
    pub(super) fn new() -> Self {
        Self {
            buttons: Buttons::empty(),
            strobe: false,
            index: 0,
        }
    }

    pub(super) fn set_buttons(&mut self, buttons: Buttons) {
        self.buttons = buttons;
    }

    pub(super) fn write(&mut self, value: u8) {
        self.strobe = value & 1 != 0;
        if self.strobe {
            self.index = 0;
        }
    }

    /// Bits arrive as A, B, Select, Start, Up, Down, Left, Right. The upper
    /// bits read back as open bus (0x40).
    pub(super) fn read(&mut self) -> u8 {
        let bit = if self.index >= 8 {
            1
        } else {
            (self.buttons.bits() >> self.index) & 1
        };
        if !self.strobe && self.index < 8 {
            self.index += 1;
        }
        0x40 | bit
    }
}
