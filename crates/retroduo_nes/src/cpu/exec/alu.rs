use super::super::{Cpu, Status};

impl Cpu {
    /// Binary add; the 2A03 has no decimal mode so D is ignored.
    pub(in crate::cpu) fn adc(&mut self, value: u8) {
        let a = self.regs.a;
        let sum = a as u16 + value as u16 + self.flag(Status::CARRY) as u16;
        let result = sum as u8;
        self.set_flag(Status::CARRY, sum > 0xFF);
        self.set_flag(Status::OVERFLOW, (!(a ^ value) & (a ^ result) & 0x80) != 0);
        self.lda(result);
    }

    #[inline]
    pub(in crate::cpu) fn sbc(&mut self, value: u8) {
        self.adc(!value);
    }

    pub(in crate::cpu) fn and(&mut self, value: u8) {
        self.lda(self.regs.a & value);
    }

    pub(in crate::cpu) fn ora(&mut self, value: u8) {
        self.lda(self.regs.a | value);
    }

    pub(in crate::cpu) fn eor(&mut self, value: u8) {
        self.lda(self.regs.a ^ value);
    }

    pub(in crate::cpu) fn compare(&mut self, register: u8, value: u8) {
        self.set_flag(Status::CARRY, register >= value);
        self.set_zn(register.wrapping_sub(value));
    }

    pub(in crate::cpu) fn bit(&mut self, value: u8) {
        self.set_flag(Status::ZERO, self.regs.a & value == 0);
        self.set_flag(Status::OVERFLOW, value & 0x40 != 0);
        self.set_flag(Status::NEGATIVE, value & 0x80 != 0);
    }

    pub(in crate::cpu) fn anc(&mut self, value: u8) {
        self.and(value);
        self.set_flag(Status::CARRY, self.regs.a & 0x80 != 0);
    }

    pub(in crate::cpu) fn alr(&mut self, value: u8) {
        let a = self.regs.a & value;
        self.regs.a = self.lsr(a);
    }

    pub(in crate::cpu) fn arr(&mut self, value: u8) {
        let carry_in = (self.flag(Status::CARRY) as u8) << 7;
        let result = ((self.regs.a & value) >> 1) | carry_in;
        self.lda(result);
        self.set_flag(Status::CARRY, result & 0x40 != 0);
        self.set_flag(Status::OVERFLOW, ((result >> 6) ^ (result >> 5)) & 1 != 0);
    }

    pub(in crate::cpu) fn sbx(&mut self, value: u8) {
        let masked = self.regs.a & self.regs.x;
        self.set_flag(Status::CARRY, masked >= value);
        self.ldx(masked.wrapping_sub(value));
    }

    /// Unstable on hardware; uses the common 0xEE magic constant.
    pub(in crate::cpu) fn ane(&mut self, value: u8) {
        self.lda((self.regs.a | 0xEE) & self.regs.x & value);
    }

    pub(in crate::cpu) fn lxa(&mut self, value: u8) {
        self.lax((self.regs.a | 0xEE) & value);
    }
}
