/// Addressing modes of the 6502.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Imp,
    Acc,
    Imm,
    Zpg,
    Zpx,
    Zpy,
    Rel,
    Abs,
    Abx,
    Aby,
    Ind,
    Inx,
    Iny,
}

impl Mode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            Mode::Imp | Mode::Acc => 0,
            Mode::Abs | Mode::Abx | Mode::Aby | Mode::Ind => 2,
            _ => 1,
        }
    }
}

#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instr {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,

    // Unofficial
    ALR, ANC, ANE, ARR, DCP, ISC, LAS, LAX, LXA, RLA, RRA, SAX, SBX, SHA,
    SHX, SHY, SLO, SRE, TAS, JAM,
}

/// Static description of one opcode.
///
/// `cycles` is the base cost. `page_penalty` adds one cycle when the
/// indexed address crosses a page; branches add their own taken/crossed
/// cycles on top of `cycles`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpInfo {
    pub instr: Instr,
    pub mode: Mode,
    pub cycles: u8,
    pub page_penalty: bool,
    pub official: bool,
}

impl OpInfo {
    pub const fn length(&self) -> u8 {
        1 + self.mode.operand_len()
    }
}

const fn op(instr: Instr, mode: Mode, cycles: u8) -> OpInfo {
    OpInfo {
        instr,
        mode,
        cycles,
        page_penalty: false,
        official: true,
    }
}

const fn op_p(instr: Instr, mode: Mode, cycles: u8) -> OpInfo {
    OpInfo {
        page_penalty: true,
        ..op(instr, mode, cycles)
    }
}

const fn un(instr: Instr, mode: Mode, cycles: u8) -> OpInfo {
    OpInfo {
        official: false,
        ..op(instr, mode, cycles)
    }
}

const fn un_p(instr: Instr, mode: Mode, cycles: u8) -> OpInfo {
    OpInfo {
        official: false,
        ..op_p(instr, mode, cycles)
    }
}

const KIL: OpInfo = un(Instr::JAM, Mode::Imp, 2);

use Instr::*;
use Mode::*;

pub static OPCODES: [OpInfo; 256] = [
    // 0x00
    op(BRK, Imp, 7), op(ORA, Inx, 6), KIL, un(SLO, Inx, 8),
    un(NOP, Zpg, 3), op(ORA, Zpg, 3), op(ASL, Zpg, 5), un(SLO, Zpg, 5),
    op(PHP, Imp, 3), op(ORA, Imm, 2), op(ASL, Acc, 2), un(ANC, Imm, 2),
    un(NOP, Abs, 4), op(ORA, Abs, 4), op(ASL, Abs, 6), un(SLO, Abs, 6),
    // 0x10
    op(BPL, Rel, 2), op_p(ORA, Iny, 5), KIL, un(SLO, Iny, 8),
    un(NOP, Zpx, 4), op(ORA, Zpx, 4), op(ASL, Zpx, 6), un(SLO, Zpx, 6),
    op(CLC, Imp, 2), op_p(ORA, Aby, 4), un(NOP, Imp, 2), un(SLO, Aby, 7),
    un_p(NOP, Abx, 4), op_p(ORA, Abx, 4), op(ASL, Abx, 7), un(SLO, Abx, 7),
    // 0x20
    op(JSR, Abs, 6), op(AND, Inx, 6), KIL, un(RLA, Inx, 8),
    op(BIT, Zpg, 3), op(AND, Zpg, 3), op(ROL, Zpg, 5), un(RLA, Zpg, 5),
    op(PLP, Imp, 4), op(AND, Imm, 2), op(ROL, Acc, 2), un(ANC, Imm, 2),
    op(BIT, Abs, 4), op(AND, Abs, 4), op(ROL, Abs, 6), un(RLA, Abs, 6),
    // 0x30
    op(BMI, Rel, 2), op_p(AND, Iny, 5), KIL, un(RLA, Iny, 8),
    un(NOP, Zpx, 4), op(AND, Zpx, 4), op(ROL, Zpx, 6), un(RLA, Zpx, 6),
    op(SEC, Imp, 2), op_p(AND, Aby, 4), un(NOP, Imp, 2), un(RLA, Aby, 7),
    un_p(NOP, Abx, 4), op_p(AND, Abx, 4), op(ROL, Abx, 7), un(RLA, Abx, 7),
    // 0x40
    op(RTI, Imp, 6), op(EOR, Inx, 6), KIL, un(SRE, Inx, 8),
    un(NOP, Zpg, 3), op(EOR, Zpg, 3), op(LSR, Zpg, 5), un(SRE, Zpg, 5),
    op(PHA, Imp, 3), op(EOR, Imm, 2), op(LSR, Acc, 2), un(ALR, Imm, 2),
    op(JMP, Abs, 3), op(EOR, Abs, 4), op(LSR, Abs, 6), un(SRE, Abs, 6),
    // 0x50
    op(BVC, Rel, 2), op_p(EOR, Iny, 5), KIL, un(SRE, Iny, 8),
    un(NOP, Zpx, 4), op(EOR, Zpx, 4), op(LSR, Zpx, 6), un(SRE, Zpx, 6),
    op(CLI, Imp, 2), op_p(EOR, Aby, 4), un(NOP, Imp, 2), un(SRE, Aby, 7),
    un_p(NOP, Abx, 4), op_p(EOR, Abx, 4), op(LSR, Abx, 7), un(SRE, Abx, 7),
    // 0x60
    op(RTS, Imp, 6), op(ADC, Inx, 6), KIL, un(RRA, Inx, 8),
    un(NOP, Zpg, 3), op(ADC, Zpg, 3), op(ROR, Zpg, 5), un(RRA, Zpg, 5),
    op(PLA, Imp, 4), op(ADC, Imm, 2), op(ROR, Acc, 2), un(ARR, Imm, 2),
    op(JMP, Ind, 5), op(ADC, Abs, 4), op(ROR, Abs, 6), un(RRA, Abs, 6),
    // 0x70
    op(BVS, Rel, 2), op_p(ADC, Iny, 5), KIL, un(RRA, Iny, 8),
    un(NOP, Zpx, 4), op(ADC, Zpx, 4), op(ROR, Zpx, 6), un(RRA, Zpx, 6),
    op(SEI, Imp, 2), op_p(ADC, Aby, 4), un(NOP, Imp, 2), un(RRA, Aby, 7),
    un_p(NOP, Abx, 4), op_p(ADC, Abx, 4), op(ROR, Abx, 7), un(RRA, Abx, 7),
    // 0x80
    un(NOP, Imm, 2), op(STA, Inx, 6), un(NOP, Imm, 2), un(SAX, Inx, 6),
    op(STY, Zpg, 3), op(STA, Zpg, 3), op(STX, Zpg, 3), un(SAX, Zpg, 3),
    op(DEY, Imp, 2), un(NOP, Imm, 2), op(TXA, Imp, 2), un(ANE, Imm, 2),
    op(STY, Abs, 4), op(STA, Abs, 4), op(STX, Abs, 4), un(SAX, Abs, 4),
    // 0x90
    op(BCC, Rel, 2), op(STA, Iny, 6), KIL, un(SHA, Iny, 6),
    op(STY, Zpx, 4), op(STA, Zpx, 4), op(STX, Zpy, 4), un(SAX, Zpy, 4),
    op(TYA, Imp, 2), op(STA, Aby, 5), op(TXS, Imp, 2), un(TAS, Aby, 5),
    un(SHY, Abx, 5), op(STA, Abx, 5), un(SHX, Aby, 5), un(SHA, Aby, 5),
    // 0xA0
    op(LDY, Imm, 2), op(LDA, Inx, 6), op(LDX, Imm, 2), un(LAX, Inx, 6),
    op(LDY, Zpg, 3), op(LDA, Zpg, 3), op(LDX, Zpg, 3), un(LAX, Zpg, 3),
    op(TAY, Imp, 2), op(LDA, Imm, 2), op(TAX, Imp, 2), un(LXA, Imm, 2),
    op(LDY, Abs, 4), op(LDA, Abs, 4), op(LDX, Abs, 4), un(LAX, Abs, 4),
    // 0xB0
    op(BCS, Rel, 2), op_p(LDA, Iny, 5), KIL, un_p(LAX, Iny, 5),
    op(LDY, Zpx, 4), op(LDA, Zpx, 4), op(LDX, Zpy, 4), un(LAX, Zpy, 4),
    op(CLV, Imp, 2), op_p(LDA, Aby, 4), op(TSX, Imp, 2), un_p(LAS, Aby, 4),
    op_p(LDY, Abx, 4), op_p(LDA, Abx, 4), op_p(LDX, Aby, 4), un_p(LAX, Aby, 4),
    // 0xC0
    op(CPY, Imm, 2), op(CMP, Inx, 6), un(NOP, Imm, 2), un(DCP, Inx, 8),
    op(CPY, Zpg, 3), op(CMP, Zpg, 3), op(DEC, Zpg, 5), un(DCP, Zpg, 5),
    op(INY, Imp, 2), op(CMP, Imm, 2), op(DEX, Imp, 2), un(SBX, Imm, 2),
    op(CPY, Abs, 4), op(CMP, Abs, 4), op(DEC, Abs, 6), un(DCP, Abs, 6),
    // 0xD0
    op(BNE, Rel, 2), op_p(CMP, Iny, 5), KIL, un(DCP, Iny, 8),
    un(NOP, Zpx, 4), op(CMP, Zpx, 4), op(DEC, Zpx, 6), un(DCP, Zpx, 6),
    op(CLD, Imp, 2), op_p(CMP, Aby, 4), un(NOP, Imp, 2), un(DCP, Aby, 7),
    un_p(NOP, Abx, 4), op_p(CMP, Abx, 4), op(DEC, Abx, 7), un(DCP, Abx, 7),
    // 0xE0
    op(CPX, Imm, 2), op(SBC, Inx, 6), un(NOP, Imm, 2), un(ISC, Inx, 8),
    op(CPX, Zpg, 3), op(SBC, Zpg, 3), op(INC, Zpg, 5), un(ISC, Zpg, 5),
    op(INX, Imp, 2), op(SBC, Imm, 2), op(NOP, Imp, 2), un(SBC, Imm, 2),
    op(CPX, Abs, 4), op(SBC, Abs, 4), op(INC, Abs, 6), un(ISC, Abs, 6),
    // 0xF0
    op(BEQ, Rel, 2), op_p(SBC, Iny, 5), KIL, un(ISC, Iny, 8),
    un(NOP, Zpx, 4), op(SBC, Zpx, 4), op(INC, Zpx, 6), un(ISC, Zpx, 6),
    op(SED, Imp, 2), op_p(SBC, Aby, 4), un(NOP, Imp, 2), un(ISC, Aby, 7),
    un_p(NOP, Abx, 4), op_p(SBC, Abx, 4), op(INC, Abx, 7), un(ISC, Abx, 7),
];
