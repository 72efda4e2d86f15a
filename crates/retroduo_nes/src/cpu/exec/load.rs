use super::super::addressing::Operand;
use super::super::{Bus, Cpu};

impl Cpu {
    #[inline]
    pub(in crate::cpu) fn lda(&mut self, value: u8) {
        self.regs.a = value;
        self.set_zn(value);
    }

    #[inline]
    pub(in crate::cpu) fn ldx(&mut self, value: u8) {
        self.regs.x = value;
        self.set_zn(value);
    }

    #[inline]
    pub(in crate::cpu) fn ldy(&mut self, value: u8) {
        self.regs.y = value;
        self.set_zn(value);
    }

    pub(in crate::cpu) fn lax(&mut self, value: u8) {
        self.regs.a = value;
        self.regs.x = value;
        self.set_zn(value);
    }

    pub(in crate::cpu) fn las(&mut self, value: u8) {
        let value = value & self.regs.sp;
        self.regs.a = value;
        self.regs.x = value;
        self.regs.sp = value;
        self.set_zn(value);
    }

    /// SHA/SHX/SHY/TAS: store `value & (H + 1)` where H is the high byte
    /// of the unindexed base. On a page cross the stored value also
    /// replaces the high byte of the target address.
    pub(in crate::cpu) fn unstable_store<B: Bus>(&mut self, bus: &mut B, operand: Operand, value: u8) {
        let high = ((operand.addr >> 8) as u8).wrapping_sub(operand.crossed as u8);
        let data = value & high.wrapping_add(1);
        let addr = if operand.crossed {
            ((data as u16) << 8) | (operand.addr & 0x00FF)
        } else {
            operand.addr
        };
        bus.write8(addr, data);
    }
}
