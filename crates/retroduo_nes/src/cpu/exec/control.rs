use super::super::addressing::Operand;
use super::super::init::IRQ_VECTOR;
use super::super::{Bus, Cpu, Status};

impl Cpu {
    /// Returns the extra cycles: one when taken, two when the target is on
    /// another page.
    pub(in crate::cpu) fn branch(&mut self, condition: bool, operand: Operand) -> u32 {
        if !condition {
            return 0;
        }
        self.regs.pc = operand.addr;
        1 + operand.crossed as u32
    }

    pub(in crate::cpu) fn jsr<B: Bus>(&mut self, bus: &mut B, target: u16) {
        let ret = self.regs.pc.wrapping_sub(1);
        self.push16(bus, ret);
        self.regs.pc = target;
    }

    pub(in crate::cpu) fn rts<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pull16(bus).wrapping_add(1);
    }

    pub(in crate::cpu) fn rti<B: Bus>(&mut self, bus: &mut B) {
        let status = self.pull8(bus);
        self.regs.restore_status(status);
        self.regs.pc = self.pull16(bus);
    }

    /// BRK skips a padding byte, so the pushed return address is PC + 2
    /// relative to the opcode.
    pub(in crate::cpu) fn brk<B: Bus>(&mut self, bus: &mut B) {
        let ret = self.regs.pc.wrapping_add(1);
        self.push16(bus, ret);
        self.push8(bus, self.regs.pushed_status());
        self.regs.p |= Status::IRQ_DISABLE;
        self.regs.pc = bus.read16(IRQ_VECTOR);
    }

    /// KIL/JAM locks the real CPU up. Latch a fault and leave PC on the
    /// offending byte.
    pub(in crate::cpu) fn jam(&mut self, opcode: u8) {
        let reason = format!(
            "KIL opcode 0x{opcode:02X} at PC=0x{:04X} (A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X})",
            self.last_pc,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.p.bits(),
            self.regs.sp,
        );
        log::error!("NES CPU halted: {reason}");
        self.regs.pc = self.last_pc;
        self.fault = Some(reason);
    }
}
