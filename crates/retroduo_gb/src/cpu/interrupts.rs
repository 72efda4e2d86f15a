use super::{Bus, Cpu};

impl Cpu {
    /// Dispatch the lowest-numbered pending interrupt if IME allows it.
    ///
    /// A halted CPU wakes whenever `IE & IF` is non-zero, even with IME
    /// clear; in that case nothing is dispatched and execution resumes after
    /// the HALT. Returns the 20-cycle dispatch cost when an interrupt was
    /// taken.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let pending = bus.pending_interrupts();
        if pending == 0 {
            return None;
        }

        if self.halted && !self.ime {
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        // VBlank > LCD STAT > Timer > Serial > Joypad.
        let index = pending.trailing_zeros() as u8;
        let vector = 0x0040 + (index as u16) * 8;

        self.ime = false;
        self.halted = false;
        bus.acknowledge_interrupt(index);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;

        log::debug!(
            "GB CPU interrupt: idx={} vector=0x{:04X} from pc=0x{:04X} sp=0x{:04X}",
            index,
            vector,
            pc,
            self.regs.sp,
        );

        Some(20)
    }

    /// Apply the one-instruction delay of EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
