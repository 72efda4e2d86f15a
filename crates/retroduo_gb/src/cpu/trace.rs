use std::fmt;

use super::table::{CB_OPCODES, OPCODES};
use super::Registers;

/// One executed step as kept in the machine's trace ring.
///
/// `opcode` holds `0xCBxx` for prefixed instructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuTrace {
    pub pc: u16,
    pub opcode: u16,
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
}

impl fmt::Display for CpuTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = if self.opcode >> 8 == 0xCB {
            CB_OPCODES[(self.opcode & 0xFF) as usize].mnemonic
        } else {
            OPCODES[(self.opcode & 0xFF) as usize].mnemonic
        };
        let r = &self.regs;
        write!(
            f,
            "{:04X}: {:<4X} {:<14} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} IME={} HALT={}",
            self.pc,
            self.opcode,
            mnemonic,
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            self.ime as u8,
            self.halted as u8,
        )
    }
}
