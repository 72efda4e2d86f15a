mod alu;
mod control;
mod load;
mod rmw;
mod stack;

use super::{Bus, Cpu, Instr, Mode, Status, OPCODES};

impl Cpu {
    /// Decode and execute a single opcode and return the number of cycles.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let info = OPCODES[opcode as usize];
        let operand = self.resolve(bus, info.mode);
        let addr = operand.addr;

        let mut cycles = info.cycles as u32;
        if info.page_penalty && operand.crossed {
            cycles += 1;
        }

        match info.instr {
            Instr::LDA => self.lda(bus.read8(addr)),
            Instr::LDX => self.ldx(bus.read8(addr)),
            Instr::LDY => self.ldy(bus.read8(addr)),
            Instr::LAX => self.lax(bus.read8(addr)),
            Instr::LAS => self.las(bus.read8(addr)),
            Instr::STA => bus.write8(addr, self.regs.a),
            Instr::STX => bus.write8(addr, self.regs.x),
            Instr::STY => bus.write8(addr, self.regs.y),
            Instr::SAX => bus.write8(addr, self.regs.a & self.regs.x),
            Instr::SHA => self.unstable_store(bus, operand, self.regs.a & self.regs.x),
            Instr::SHX => self.unstable_store(bus, operand, self.regs.x),
            Instr::SHY => self.unstable_store(bus, operand, self.regs.y),
            Instr::TAS => {
                self.regs.sp = self.regs.a & self.regs.x;
                self.unstable_store(bus, operand, self.regs.sp);
            }

            Instr::TAX => self.ldx(self.regs.a),
            Instr::TAY => self.ldy(self.regs.a),
            Instr::TXA => self.lda(self.regs.x),
            Instr::TYA => self.lda(self.regs.y),
            Instr::TSX => self.ldx(self.regs.sp),
            Instr::TXS => self.regs.sp = self.regs.x,

            Instr::ADC => self.adc(bus.read8(addr)),
            Instr::SBC => self.sbc(bus.read8(addr)),
            Instr::AND => self.and(bus.read8(addr)),
            Instr::ORA => self.ora(bus.read8(addr)),
            Instr::EOR => self.eor(bus.read8(addr)),
            Instr::CMP => self.compare(self.regs.a, bus.read8(addr)),
            Instr::CPX => self.compare(self.regs.x, bus.read8(addr)),
            Instr::CPY => self.compare(self.regs.y, bus.read8(addr)),
            Instr::BIT => self.bit(bus.read8(addr)),
            Instr::ANC => self.anc(bus.read8(addr)),
            Instr::ALR => self.alr(bus.read8(addr)),
            Instr::ARR => self.arr(bus.read8(addr)),
            Instr::SBX => self.sbx(bus.read8(addr)),
            Instr::ANE => self.ane(bus.read8(addr)),
            Instr::LXA => self.lxa(bus.read8(addr)),

            Instr::ASL if info.mode == Mode::Acc => self.regs.a = self.asl(self.regs.a),
            Instr::LSR if info.mode == Mode::Acc => self.regs.a = self.lsr(self.regs.a),
            Instr::ROL if info.mode == Mode::Acc => self.regs.a = self.rol(self.regs.a),
            Instr::ROR if info.mode == Mode::Acc => self.regs.a = self.ror(self.regs.a),
            Instr::ASL => {
                self.modify(bus, addr, Self::asl);
            }
            Instr::LSR => {
                self.modify(bus, addr, Self::lsr);
            }
            Instr::ROL => {
                self.modify(bus, addr, Self::rol);
            }
            Instr::ROR => {
                self.modify(bus, addr, Self::ror);
            }
            Instr::INC => {
                self.modify(bus, addr, Self::inc);
            }
            Instr::DEC => {
                self.modify(bus, addr, Self::dec);
            }
            Instr::SLO => {
                let value = self.modify(bus, addr, Self::asl);
                self.ora(value);
            }
            Instr::RLA => {
                let value = self.modify(bus, addr, Self::rol);
                self.and(value);
            }
            Instr::SRE => {
                let value = self.modify(bus, addr, Self::lsr);
                self.eor(value);
            }
            Instr::RRA => {
                let value = self.modify(bus, addr, Self::ror);
                self.adc(value);
            }
            Instr::DCP => {
                let value = self.modify(bus, addr, Self::dec);
                self.compare(self.regs.a, value);
            }
            Instr::ISC => {
                let value = self.modify(bus, addr, Self::inc);
                self.sbc(value);
            }

            Instr::INX => self.regs.x = self.inc(self.regs.x),
            Instr::INY => self.regs.y = self.inc(self.regs.y),
            Instr::DEX => self.regs.x = self.dec(self.regs.x),
            Instr::DEY => self.regs.y = self.dec(self.regs.y),

            Instr::BCC => cycles += self.branch(!self.flag(Status::CARRY), operand),
            Instr::BCS => cycles += self.branch(self.flag(Status::CARRY), operand),
            Instr::BNE => cycles += self.branch(!self.flag(Status::ZERO), operand),
            Instr::BEQ => cycles += self.branch(self.flag(Status::ZERO), operand),
            Instr::BPL => cycles += self.branch(!self.flag(Status::NEGATIVE), operand),
            Instr::BMI => cycles += self.branch(self.flag(Status::NEGATIVE), operand),
            Instr::BVC => cycles += self.branch(!self.flag(Status::OVERFLOW), operand),
            Instr::BVS => cycles += self.branch(self.flag(Status::OVERFLOW), operand),

            Instr::JMP => self.regs.pc = addr,
            Instr::JSR => self.jsr(bus, addr),
            Instr::RTS => self.rts(bus),
            Instr::RTI => self.rti(bus),
            Instr::BRK => self.brk(bus),

            Instr::PHA => self.push8(bus, self.regs.a),
            Instr::PHP => self.push8(bus, self.regs.pushed_status()),
            Instr::PLA => {
                let value = self.pull8(bus);
                self.lda(value);
            }
            Instr::PLP => {
                let value = self.pull8(bus);
                self.regs.restore_status(value);
            }

            Instr::CLC => self.set_flag(Status::CARRY, false),
            Instr::SEC => self.set_flag(Status::CARRY, true),
            Instr::CLI => self.set_flag(Status::IRQ_DISABLE, false),
            Instr::SEI => self.set_flag(Status::IRQ_DISABLE, true),
            Instr::CLD => self.set_flag(Status::DECIMAL, false),
            Instr::SED => self.set_flag(Status::DECIMAL, true),
            Instr::CLV => self.set_flag(Status::OVERFLOW, false),

            Instr::NOP => {}
            Instr::JAM => self.jam(opcode),
        }

        cycles
    }
}
