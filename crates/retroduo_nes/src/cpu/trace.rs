use std::fmt;

use super::table::OPCODES;
use super::Registers;

/// One executed step as kept in the machine's trace ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuTrace {
    pub pc: u16,
    pub opcode: u8,
    /// `Some("NMI")`/`Some("IRQ")` when the step was an interrupt entry.
    pub interrupt: Option<&'static str>,
    pub regs: Registers,
}

impl fmt::Display for CpuTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        let registers = format!(
            "A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X}",
            r.a,
            r.x,
            r.y,
            r.p.bits(),
            r.sp
        );
        if let Some(kind) = self.interrupt {
            return write!(f, "{:04X}: -- {:<9} {}", self.pc, kind, registers);
        }
        let info = &OPCODES[self.opcode as usize];
        let marker = if info.official { ' ' } else { '*' };
        let mnemonic = format!("{}{:?} {:?}", marker, info.instr, info.mode);
        write!(f, "{:04X}: {:02X} {:<9} {}", self.pc, self.opcode, mnemonic, registers)
    }
}
