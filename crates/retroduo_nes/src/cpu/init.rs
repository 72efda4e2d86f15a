use super::{Bus, Cpu, Registers, Status};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

impl Cpu {
    /// CPU with the power-on register state; PC is zero until `reset`.
    pub fn new() -> Self {
        Self::with_registers(Registers {
            sp: 0xFD,
            p: Status::IRQ_DISABLE | Status::UNUSED,
            ..Registers::default()
        })
    }

    pub fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            fault: None,
            last_pc: regs.pc,
            last_opcode: 0,
            last_interrupt: None,
        }
    }

    /// Load PC from the reset vector. Returns the 7 cycles the reset
    /// sequence takes.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = bus.read16(RESET_VECTOR);
        self.regs.sp = 0xFD;
        self.regs.p |= Status::IRQ_DISABLE | Status::UNUSED;
        self.last_pc = self.regs.pc;
        log::debug!("NES CPU reset: pc=0x{:04X}", self.regs.pc);
        7
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
