use super::super::{Bus, Cpu, Status};

impl Cpu {
    /// Read-modify-write cycle on memory. The unmodified value is written
    /// back first, as the hardware does, then the result.
    pub(in crate::cpu) fn modify<B, F>(&mut self, bus: &mut B, addr: u16, op: F) -> u8
    where
        B: Bus,
        F: FnOnce(&mut Self, u8) -> u8,
    {
        let value = bus.read8(addr);
        bus.write8(addr, value);
        let result = op(self, value);
        bus.write8(addr, result);
        result
    }

    pub(in crate::cpu) fn asl(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.set_flag(Status::CARRY, value & 0x80 != 0);
        self.set_zn(result);
        result
    }

    pub(in crate::cpu) fn lsr(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.set_flag(Status::CARRY, value & 0x01 != 0);
        self.set_zn(result);
        result
    }

    pub(in crate::cpu) fn rol(&mut self, value: u8) -> u8 {
        let result = (value << 1) | self.flag(Status::CARRY) as u8;
        self.set_flag(Status::CARRY, value & 0x80 != 0);
        self.set_zn(result);
        result
    }

    pub(in crate::cpu) fn ror(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | ((self.flag(Status::CARRY) as u8) << 7);
        self.set_flag(Status::CARRY, value & 0x01 != 0);
        self.set_zn(result);
        result
    }

    pub(in crate::cpu) fn inc(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_zn(result);
        result
    }

    pub(in crate::cpu) fn dec(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_zn(result);
        result
    }
}
