use super::super::{Bus, Cpu};

const STACK_PAGE: u16 = 0x0100;

impl Cpu {
    pub(in crate::cpu) fn push8<B: Bus>(&mut self, bus: &mut B, value: u8) {
        bus.write8(STACK_PAGE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(in crate::cpu) fn pull8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        bus.read8(STACK_PAGE | self.regs.sp as u16)
    }

    pub(in crate::cpu) fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push8(bus, hi);
        self.push8(bus, lo);
    }

    pub(in crate::cpu) fn pull16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.pull8(bus);
        let hi = self.pull8(bus);
        u16::from_le_bytes([lo, hi])
    }
}
