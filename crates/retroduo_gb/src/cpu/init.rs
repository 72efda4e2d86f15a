use super::{Cpu, Registers};

impl Cpu {
    /// CPU in the state the boot ROM leaves it when it jumps to 0x0100.
    ///
    /// The CGB boot ROM differs only in A (0x11), which is how cartridges
    /// detect colour hardware.
    pub fn new(cgb: bool) -> Self {
        let regs = Registers {
            a: if cgb { 0x11 } else { 0x01 },
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        };
        Self::with_registers(regs)
    }

    pub fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            fault: None,
            last_pc: regs.pc,
            last_opcode: 0,
        }
    }
}
