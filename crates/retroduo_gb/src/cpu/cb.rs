use super::alu::ShiftOp;
use super::{Bus, Cpu, Flag, Reg8};

impl Cpu {
    /// Execute a CB-prefixed instruction. The returned count includes the
    /// prefix fetch.
    ///
    /// Register operands take 8 cycles; (HL) takes 16, except BIT b,(HL)
    /// which only reads and takes 12.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        self.last_opcode = 0xCB00 | cb as u16;
        let bit = (cb >> 3) & 0x07;
        let target = Reg8::from_index(cb);
        let value = self.read_r8(bus, target);

        match cb >> 6 {
            0 => {
                let result = self.alu_shift(ShiftOp::from_bits(bit), value);
                self.write_r8(bus, target, result);
            }
            1 => {
                let carry = self.get_flag(Flag::C);
                self.set_flags(value & (1 << bit) == 0, false, true, carry);
                return if target.is_memory() { 12 } else { 8 };
            }
            2 => self.write_r8(bus, target, value & !(1 << bit)),
            _ => self.write_r8(bus, target, value | (1 << bit)),
        }

        if target.is_memory() {
            16
        } else {
            8
        }
    }
}
