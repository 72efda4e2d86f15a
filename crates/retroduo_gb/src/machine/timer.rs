/// Timer / divider unit.
///
/// DIV is the upper byte of a free-running 16-bit counter advanced once per
/// clock. TIMA increments on the falling edge of the counter bit selected by
/// TAC, ANDed with the enable bit. An overflow leaves TIMA at 0x00 for four
/// clocks before it is reloaded from TMA and INT $50 is requested.
pub(super) struct Timer {
    /// Hidden system counter; DIV exposes bits 15:8.
    pub(super) counter: u16,
    pub(super) tima: u8,
    pub(super) tma: u8,
    /// TAC raw value (lower 3 bits meaningful).
    pub(super) tac: u8,
    /// Clocks left before a pending overflow reloads TIMA. Zero when idle.
    overflow_delay: u8,
    was_stopped: bool,
}

const OVERFLOW_DELAY: u8 = 4;

impl Timer {
    pub(super) fn new() -> Self {
        Self {
            counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            overflow_delay: 0,
            was_stopped: false,
        }
    }

    /// Post-boot state, with DIV reading 0xAB at PC=0x0100.
    pub(super) fn init_post_boot(&mut self) {
        self.counter = 0xABCC;
        self.tima = 0x00;
        self.tma = 0x00;
        self.tac = 0xF8;
        self.overflow_delay = 0;
    }

    /// Counter bit watched for TIMA increments:
    /// 00 → bit 9, 01 → bit 3, 10 → bit 5, 11 → bit 7.
    #[inline]
    fn input_bit(&self) -> u16 {
        match self.tac & 0x03 {
            0x00 => 1 << 9,
            0x01 => 1 << 3,
            0x02 => 1 << 5,
            _ => 1 << 7,
        }
    }

    #[inline]
    fn input_high(&self, tac: u8) -> bool {
        let mask = match tac & 0x03 {
            0x00 => 1u16 << 9,
            0x01 => 1 << 3,
            0x02 => 1 << 5,
            _ => 1 << 7,
        };
        tac & 0x04 != 0 && self.counter & mask != 0
    }

    #[inline]
    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            self.overflow_delay = OVERFLOW_DELAY;
        }
    }

    /// Advance the timer by `cycles` clocks. Entering STOP clears the
    /// divider and the counter stays frozen until the CPU wakes.
    pub(super) fn tick(&mut self, cycles: u32, stopped: bool, if_reg: &mut u8) {
        if stopped {
            if !self.was_stopped {
                self.counter = 0;
            }
            self.was_stopped = true;
            return;
        }
        self.was_stopped = false;
        for _ in 0..cycles {
            self.tick_one(if_reg);
        }
    }

    fn tick_one(&mut self, if_reg: &mut u8) {
        if self.overflow_delay > 0 {
            self.overflow_delay -= 1;
            if self.overflow_delay == 0 {
                self.tima = self.tma;
                *if_reg |= 0x04;
            }
        }

        let before = self.input_high(self.tac);
        self.counter = self.counter.wrapping_add(1);
        if before && !self.input_high(self.tac) {
            self.increment_tima();
        }
    }

    pub(super) fn read_div(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    pub(super) fn read_tac(&self) -> u8 {
        self.tac | 0xF8
    }

    /// Any write to DIV clears the whole counter and drops a pending
    /// overflow. If the selected bit was high this is a falling edge and
    /// TIMA ticks once.
    pub(super) fn write_div(&mut self) {
        self.overflow_delay = 0;
        if self.input_high(self.tac) {
            self.increment_tima();
        }
        self.counter = 0;
    }

    /// Writing TIMA during the overflow delay cancels the pending reload.
    pub(super) fn write_tima(&mut self, value: u8) {
        self.overflow_delay = 0;
        self.tima = value;
    }

    /// TMA is latched into TIMA when the reload happens, so a write during
    /// the delay is picked up by that reload.
    pub(super) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    pub(super) fn write_tac(&mut self, value: u8) {
        let before = self.input_high(self.tac);
        let after = self.input_high(value);
        self.tac = value & 0x07;
        if before && !after {
            self.increment_tima();
        }
        log::trace!(
            "GB timer TAC=0x{:02X} input mask=0x{:04X}",
            self.tac,
            self.input_bit()
        );
    }
}
