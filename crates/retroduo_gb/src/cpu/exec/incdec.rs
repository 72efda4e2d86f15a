use crate::cpu::{Bus, Cpu, Reg8};

impl Cpu {
    pub(super) fn exec_inc8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x04, "unexpected INC r opcode {opcode:#04x}");
        let reg = Reg8::from_index(opcode >> 3);
        let value = self.read_r8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_r8(bus, reg, result);

        if reg.is_memory() {
            12
        } else {
            4
        }
    }

    pub(super) fn exec_dec8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x05, "unexpected DEC r opcode {opcode:#04x}");
        let reg = Reg8::from_index(opcode >> 3);
        let value = self.read_r8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_r8(bus, reg, result);

        if reg.is_memory() {
            12
        } else {
            4
        }
    }

    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let rp = opcode >> 4;
        let value = self.regs.rp(rp).wrapping_add(1);
        self.regs.set_rp(rp, value);
        8
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let rp = opcode >> 4;
        let value = self.regs.rp(rp).wrapping_sub(1);
        self.regs.set_rp(rp, value);
        8
    }
}
