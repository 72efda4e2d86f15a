use super::{Bus, Cpu};

impl Cpu {
    /// Execute one step and return the number of T-cycles taken.
    ///
    /// The order is: interrupt dispatch, HALT stall, OAM DMA copy, then a
    /// normal fetch/execute. A faulted CPU does nothing and reports 0.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.fault.is_some() {
            return 0;
        }

        if self.stopped {
            // STOP ends when any selected joypad line reads low.
            let p1 = bus.read8(0xFF00);
            if (p1 & 0x0F) != 0x0F {
                self.stopped = false;
            }
            return 4;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return cycles;
        }

        if self.halted {
            if bus.dma_active() {
                bus.dma_step();
            }
            return 4;
        }

        if bus.dma_active() {
            bus.dma_step();
            return 4;
        }

        self.last_pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        self.last_opcode = opcode as u16;
        let cycles = self.exec_opcode(bus, opcode);

        // EI's delay counts instructions, so the EI itself arms it and the
        // following instruction completes it.
        self.apply_ime_delay();
        cycles
    }
}
