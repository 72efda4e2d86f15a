use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is two bytes; the second is discarded.
        let _padding = self.fetch8(bus);

        if bus.speed_switch() {
            self.stopped = false;
            self.halted = false;
            return 4;
        }

        // Low-power mode until a joypad line goes low (polled in `step`).
        self.stopped = true;
        self.halted = false;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        if !self.ime {
            self.ime_enable_pending = true;
        }
        4
    }
}
