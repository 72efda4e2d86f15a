use crate::cpu::alu::AluOp;
use crate::cpu::{Bus, Cpu, Flag, Reg8};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = Reg8::from_index(opcode);
        let value = self.read_r8(bus, src);
        self.alu(AluOp::from_bits(opcode >> 3), value);

        if src.is_memory() {
            8
        } else {
            4
        }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC6);
        let value = self.fetch8(bus);
        self.alu(AluOp::from_bits(opcode >> 3), value);
        8
    }

    /// RLCA, RRCA, RLA and RRA. Unlike their CB forms these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C) as u8;
        let (result, carry) = match opcode {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | carry_in, a & 0x80 != 0),
            _ => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
        };
        self.regs.a = result;
        self.set_flags(false, false, false, carry);
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.rp(opcode >> 4);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        let zero = self.get_flag(Flag::Z);
        self.set_flags(zero, false, false, true);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let zero = self.get_flag(Flag::Z);
        let carry = self.get_flag(Flag::C);
        self.set_flags(zero, false, false, !carry);
        4
    }
}
