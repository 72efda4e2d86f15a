use super::{Bus, Cpu};

impl Cpu {
    /// Execute one step and return the number of CPU cycles taken.
    ///
    /// Pending NMI is serviced first, then IRQ (unless masked), then a
    /// normal fetch/execute. Cycles the bus stole since the last step are
    /// added to the result. A faulted CPU does nothing and reports 0.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.fault.is_some() {
            return 0;
        }

        let stall = bus.take_stall_cycles();

        if let Some(cycles) = self.handle_interrupts(bus) {
            return cycles + stall;
        }

        self.last_pc = self.regs.pc;
        self.last_interrupt = None;
        let opcode = self.fetch8(bus);
        self.last_opcode = opcode;
        self.exec_opcode(bus, opcode) + stall
    }
}
