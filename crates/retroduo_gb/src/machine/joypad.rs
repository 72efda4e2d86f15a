use retroduo_common::Buttons;

/// P1/JOYP register: two selectable 4-bit groups, active low.
pub(super) struct Joypad {
    /// Selection bits 5 (action buttons) and 4 (d-pad); 0 selects.
    select: u8,
    pressed: Buttons,
}

impl Joypad {
    pub(super) fn new() -> Self {
        Self {
            select: 0x30,
            pressed: Buttons::empty(),
        }
    }

    pub(super) fn read(&self) -> u8 {
        let mut low = 0x0F;
        if self.select & 0x10 == 0 {
            low &= !self.dpad_bits();
        }
        if self.select & 0x20 == 0 {
            low &= !self.action_bits();
        }
        0xC0 | self.select | (low & 0x0F)
    }

    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Replace the held buttons. Returns true when any button went from
    /// released to pressed, which requests the joypad interrupt.
    pub(super) fn set_buttons(&mut self, buttons: Buttons) -> bool {
        let newly_pressed = buttons & !self.pressed;
        self.pressed = buttons;
        !newly_pressed.is_empty()
    }

    /// bit0=A, bit1=B, bit2=Select, bit3=Start.
    fn action_bits(&self) -> u8 {
        self.pressed.bits() & 0x0F
    }

    /// bit0=Right, bit1=Left, bit2=Up, bit3=Down.
    fn dpad_bits(&self) -> u8 {
        let mut bits = 0;
        if self.pressed.contains(Buttons::RIGHT) {
            bits |= 0x01;
        }
        if self.pressed.contains(Buttons::LEFT) {
            bits |= 0x02;
        }
        if self.pressed.contains(Buttons::UP) {
            bits |= 0x04;
        }
        if self.pressed.contains(Buttons::DOWN) {
            bits |= 0x08;
        }
        bits
    }
}
