mod addressing;
mod bus;
mod exec;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;
mod trace;

pub use bus::Bus;
pub use regs::{Registers, Status};
pub use table::{Instr, Mode, OpInfo, OPCODES};
pub use trace::CpuTrace;

/// Ricoh 2A03 core: a 6502 without decimal mode.
///
/// `step` executes one instruction (or one interrupt entry) and returns the
/// CPU cycles it consumed, including any stall the bus charged since the
/// previous step.
pub struct Cpu {
    pub regs: Registers,
    /// Set once a KIL/JAM opcode is executed. The CPU does nothing further.
    fault: Option<String>,
    last_pc: u16,
    last_opcode: u8,
    /// Set when the last step entered an interrupt handler instead of
    /// executing an instruction.
    last_interrupt: Option<&'static str>,
}

impl Cpu {
    #[inline]
    pub fn flag(&self, flag: Status) -> bool {
        self.regs.p.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.regs.p.set(flag, value);
    }

    #[inline]
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.regs.p.set(Status::ZERO, value == 0);
        self.regs.p.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    #[inline]
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn trace_entry(&self) -> CpuTrace {
        CpuTrace {
            pc: self.last_pc,
            opcode: self.last_opcode,
            interrupt: self.last_interrupt,
            regs: self.regs,
        }
    }
}
