use super::init::{IRQ_VECTOR, NMI_VECTOR};
use super::{Bus, Cpu, Status};

impl Cpu {
    /// Enter the NMI or IRQ handler if one is pending. NMI wins; IRQ is
    /// ignored while I is set. Both take 7 cycles.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if bus.take_nmi() {
            self.enter_interrupt(bus, NMI_VECTOR, "NMI");
            return Some(7);
        }
        if !self.flag(Status::IRQ_DISABLE) && bus.irq_line() {
            self.enter_interrupt(bus, IRQ_VECTOR, "IRQ");
            return Some(7);
        }
        None
    }

    fn enter_interrupt<B: Bus>(&mut self, bus: &mut B, vector: u16, kind: &'static str) {
        let pc = self.regs.pc;
        self.last_pc = pc;
        self.last_interrupt = Some(kind);

        self.push16(bus, pc);
        let status = (self.regs.p - Status::BREAK) | Status::UNUSED;
        self.push8(bus, status.bits());
        self.regs.p |= Status::IRQ_DISABLE;
        self.regs.pc = bus.read16(vector);

        log::debug!(
            "NES CPU {}: vector=0x{:04X} handler=0x{:04X} from pc=0x{:04X}",
            kind,
            vector,
            self.regs.pc,
            pc,
        );
    }
}
