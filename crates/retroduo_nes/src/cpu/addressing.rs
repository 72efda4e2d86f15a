use super::{Bus, Cpu, Mode};

/// Resolved operand of one instruction.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Operand {
    /// Effective address. Immediate operands point at the byte after the
    /// opcode; implied and accumulator modes leave it at 0.
    pub addr: u16,
    /// The indexed address landed on a different page than its base.
    pub crossed: bool,
}

#[inline]
fn page_crossed(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

impl Cpu {
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Read a 16-bit pointer from the zero page, wrapping within it.
    fn zero_page_pointer<B: Bus>(bus: &mut B, ptr: u8) -> u16 {
        let lo = bus.read8(ptr as u16);
        let hi = bus.read8(ptr.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    pub(super) fn resolve<B: Bus>(&mut self, bus: &mut B, mode: Mode) -> Operand {
        match mode {
            Mode::Imp | Mode::Acc => Operand::default(),
            Mode::Imm => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                Operand {
                    addr,
                    crossed: false,
                }
            }
            Mode::Zpg => Operand {
                addr: self.fetch8(bus) as u16,
                crossed: false,
            },
            Mode::Zpx => Operand {
                addr: self.fetch8(bus).wrapping_add(self.regs.x) as u16,
                crossed: false,
            },
            Mode::Zpy => Operand {
                addr: self.fetch8(bus).wrapping_add(self.regs.y) as u16,
                crossed: false,
            },
            Mode::Rel => {
                let offset = self.fetch8(bus) as i8;
                let next = self.regs.pc;
                let addr = next.wrapping_add(offset as u16);
                Operand {
                    addr,
                    crossed: page_crossed(next, addr),
                }
            }
            Mode::Abs => Operand {
                addr: self.fetch16(bus),
                crossed: false,
            },
            Mode::Abx => {
                let base = self.fetch16(bus);
                let addr = base.wrapping_add(self.regs.x as u16);
                Operand {
                    addr,
                    crossed: page_crossed(base, addr),
                }
            }
            Mode::Aby => {
                let base = self.fetch16(bus);
                let addr = base.wrapping_add(self.regs.y as u16);
                Operand {
                    addr,
                    crossed: page_crossed(base, addr),
                }
            }
            Mode::Ind => {
                let ptr = self.fetch16(bus);
                // The high byte is fetched without carrying into the page:
                // JMP ($10FF) reads 0x10FF and 0x1000.
                let lo = bus.read8(ptr);
                let hi = bus.read8((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF));
                Operand {
                    addr: u16::from_le_bytes([lo, hi]),
                    crossed: false,
                }
            }
            Mode::Inx => {
                let ptr = self.fetch8(bus).wrapping_add(self.regs.x);
                Operand {
                    addr: Self::zero_page_pointer(bus, ptr),
                    crossed: false,
                }
            }
            Mode::Iny => {
                let ptr = self.fetch8(bus);
                let base = Self::zero_page_pointer(bus, ptr);
                let addr = base.wrapping_add(self.regs.y as u16);
                Operand {
                    addr,
                    crossed: page_crossed(base, addr),
                }
            }
        }
    }
}
