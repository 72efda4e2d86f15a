mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;
mod trace;

pub use bus::Bus;
pub use regs::{Flag, Reg8, Registers};
pub use table::{OpInfo, CB_OPCODES, OPCODES};
pub use trace::CpuTrace;

/// Sharp SM83 core used by the Game Boy and Game Boy Color.
///
/// `step` executes one instruction (or one interrupt dispatch, HALT stall,
/// or OAM DMA copy) and returns the T-cycles it consumed.
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    pub(crate) stopped: bool,
    halt_bug: bool,
    /// EI was executed; IME turns on after the next instruction.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Set once an opcode hole is executed. The CPU does nothing further.
    fault: Option<String>,
    /// Address and opcode of the last instruction fetched, for tracing.
    last_pc: u16,
    last_opcode: u16,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }

    /// Overwrite all four flags at once.
    #[inline]
    pub(crate) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = ((z as u8) << Flag::Z as u8)
            | ((n as u8) << Flag::N as u8)
            | ((h as u8) << Flag::H as u8)
            | ((c as u8) << Flag::C as u8);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Snapshot of the register file for the trace ring.
    pub fn trace_entry(&self) -> CpuTrace {
        CpuTrace {
            pc: self.last_pc,
            opcode: self.last_opcode,
            regs: self.regs,
            ime: self.ime,
            halted: self.halted,
        }
    }
}
