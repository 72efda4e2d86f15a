use super::{Cpu, Flag};

/// The eight accumulator operations selected by bits 3-5 of the
/// 0x80-0xBF and 0xC6-0xFE opcode groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotate/shift group of the CB table (bits 3-5 when bits 6-7 are zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    #[inline]
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

impl Cpu {
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => {
                self.regs.a &= value;
                self.set_flags(self.regs.a == 0, false, true, false);
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            // CP discards the difference.
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry = (use_carry && self.get_flag(Flag::C)) as u8;
        let full = a as u16 + value as u16 + carry as u16;
        let half = (a & 0x0F) + (value & 0x0F) + carry;
        let result = full as u8;
        self.regs.a = result;
        self.set_flags(result == 0, false, half > 0x0F, full > 0xFF);
    }

    /// A - value (- carry). Flags are set, the difference is returned and A
    /// is left untouched.
    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry = (use_carry && self.get_flag(Flag::C)) as i16;
        let full = a as i16 - value as i16 - carry;
        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry;
        let result = full as u8;
        self.set_flags(result == 0, true, half < 0, full < 0);
        result
    }

    /// Decimal adjust after a BCD add or subtract. N is preserved.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let subtract = self.get_flag(Flag::N);
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) || (!subtract && (a & 0x0F) > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtract && a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        a = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        self.regs.a = a;
        self.set_flags(a == 0, subtract, false, carry);
    }

    /// INC r: Z N H updated, C preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, false, (value & 0x0F) == 0x0F, carry);
        result
    }

    /// DEC r: Z N H updated, C preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, true, (value & 0x0F) == 0, carry);
        result
    }

    /// ADD HL,rr: Z preserved, H from bit 11, C from bit 15.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let zero = self.get_flag(Flag::Z);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let carry = hl as u32 + value as u32 > 0xFFFF;
        self.set_flags(zero, false, half, carry);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP + signed immediate as used by ADD SP,e8 and LD HL,SP+e8.
    /// Z and N are cleared; H and C come from the low byte.
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let half = (base & 0x000F) + (offset & 0x000F) > 0x000F;
        let carry = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset)
    }

    /// CB rotate/shift. Z reflects the result, N and H are cleared.
    pub(super) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C) as u8;
        let (result, carry) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry);
        result
    }
}
