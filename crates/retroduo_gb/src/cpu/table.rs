/// Static description of one opcode: mnemonic, encoded length in bytes and
/// T-cycle cost.
///
/// `cycles` is the cost when a conditional instruction is not taken (or the
/// only cost for unconditional ones); `cycles_taken` is the taken cost.
/// Dispatch itself is a `match` in `exec.rs`; this table is used for trace
/// output and to check the executor's cycle accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpInfo {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub cycles_taken: u8,
}

const fn op(mnemonic: &'static str, length: u8, cycles: u8) -> OpInfo {
    OpInfo {
        mnemonic,
        length,
        cycles,
        cycles_taken: cycles,
    }
}

const fn op_cc(mnemonic: &'static str, length: u8, cycles: u8, cycles_taken: u8) -> OpInfo {
    OpInfo {
        mnemonic,
        length,
        cycles,
        cycles_taken,
    }
}

pub static OPCODES: [OpInfo; 256] = [
    op("NOP", 1, 4), // 0x00
    op("LD BC,d16", 3, 12), // 0x01
    op("LD (BC),A", 1, 8), // 0x02
    op("INC BC", 1, 8), // 0x03
    op("INC B", 1, 4), // 0x04
    op("DEC B", 1, 4), // 0x05
    op("LD B,d8", 2, 8), // 0x06
    op("RLCA", 1, 4), // 0x07
    op("LD (a16),SP", 3, 20), // 0x08
    op("ADD HL,BC", 1, 8), // 0x09
    op("LD A,(BC)", 1, 8), // 0x0A
    op("DEC BC", 1, 8), // 0x0B
    op("INC C", 1, 4), // 0x0C
    op("DEC C", 1, 4), // 0x0D
    op("LD C,d8", 2, 8), // 0x0E
    op("RRCA", 1, 4), // 0x0F
    op("STOP", 2, 4), // 0x10
    op("LD DE,d16", 3, 12), // 0x11
    op("LD (DE),A", 1, 8), // 0x12
    op("INC DE", 1, 8), // 0x13
    op("INC D", 1, 4), // 0x14
    op("DEC D", 1, 4), // 0x15
    op("LD D,d8", 2, 8), // 0x16
    op("RLA", 1, 4), // 0x17
    op("JR r8", 2, 12), // 0x18
    op("ADD HL,DE", 1, 8), // 0x19
    op("LD A,(DE)", 1, 8), // 0x1A
    op("DEC DE", 1, 8), // 0x1B
    op("INC E", 1, 4), // 0x1C
    op("DEC E", 1, 4), // 0x1D
    op("LD E,d8", 2, 8), // 0x1E
    op("RRA", 1, 4), // 0x1F
    op_cc("JR NZ,r8", 2, 8, 12), // 0x20
    op("LD HL,d16", 3, 12), // 0x21
    op("LD (HL+),A", 1, 8), // 0x22
    op("INC HL", 1, 8), // 0x23
    op("INC H", 1, 4), // 0x24
    op("DEC H", 1, 4), // 0x25
    op("LD H,d8", 2, 8), // 0x26
    op("DAA", 1, 4), // 0x27
    op_cc("JR Z,r8", 2, 8, 12), // 0x28
    op("ADD HL,HL", 1, 8), // 0x29
    op("LD A,(HL+)", 1, 8), // 0x2A
    op("DEC HL", 1, 8), // 0x2B
    op("INC L", 1, 4), // 0x2C
    op("DEC L", 1, 4), // 0x2D
    op("LD L,d8", 2, 8), // 0x2E
    op("CPL", 1, 4), // 0x2F
    op_cc("JR NC,r8", 2, 8, 12), // 0x30
    op("LD SP,d16", 3, 12), // 0x31
    op("LD (HL-),A", 1, 8), // 0x32
    op("INC SP", 1, 8), // 0x33
    op("INC (HL)", 1, 12), // 0x34
    op("DEC (HL)", 1, 12), // 0x35
    op("LD (HL),d8", 2, 12), // 0x36
    op("SCF", 1, 4), // 0x37
    op_cc("JR C,r8", 2, 8, 12), // 0x38
    op("ADD HL,SP", 1, 8), // 0x39
    op("LD A,(HL-)", 1, 8), // 0x3A
    op("DEC SP", 1, 8), // 0x3B
    op("INC A", 1, 4), // 0x3C
    op("DEC A", 1, 4), // 0x3D
    op("LD A,d8", 2, 8), // 0x3E
    op("CCF", 1, 4), // 0x3F
    op("LD B,B", 1, 4), // 0x40
    op("LD B,C", 1, 4), // 0x41
    op("LD B,D", 1, 4), // 0x42
    op("LD B,E", 1, 4), // 0x43
    op("LD B,H", 1, 4), // 0x44
    op("LD B,L", 1, 4), // 0x45
    op("LD B,(HL)", 1, 8), // 0x46
    op("LD B,A", 1, 4), // 0x47
    op("LD C,B", 1, 4), // 0x48
    op("LD C,C", 1, 4), // 0x49
    op("LD C,D", 1, 4), // 0x4A
    op("LD C,E", 1, 4), // 0x4B
    op("LD C,H", 1, 4), // 0x4C
    op("LD C,L", 1, 4), // 0x4D
    op("LD C,(HL)", 1, 8), // 0x4E
    op("LD C,A", 1, 4), // 0x4F
    op("LD D,B", 1, 4), // 0x50
    op("LD D,C", 1, 4), // 0x51
    op("LD D,D", 1, 4), // 0x52
    op("LD D,E", 1, 4), // 0x53
    op("LD D,H", 1, 4), // 0x54
    op("LD D,L", 1, 4), // 0x55
    op("LD D,(HL)", 1, 8), // 0x56
    op("LD D,A", 1, 4), // 0x57
    op("LD E,B", 1, 4), // 0x58
    op("LD E,C", 1, 4), // 0x59
    op("LD E,D", 1, 4), // 0x5A
    op("LD E,E", 1, 4), // 0x5B
    op("LD E,H", 1, 4), // 0x5C
    op("LD E,L", 1, 4), // 0x5D
    op("LD E,(HL)", 1, 8), // 0x5E
    op("LD E,A", 1, 4), // 0x5F
    op("LD H,B", 1, 4), // 0x60
    op("LD H,C", 1, 4), // 0x61
    op("LD H,D", 1, 4), // 0x62
    op("LD H,E", 1, 4), // 0x63
    op("LD H,H", 1, 4), // 0x64
    op("LD H,L", 1, 4), // 0x65
    op("LD H,(HL)", 1, 8), // 0x66
    op("LD H,A", 1, 4), // 0x67
    op("LD L,B", 1, 4), // 0x68
    op("LD L,C", 1, 4), // 0x69
    op("LD L,D", 1, 4), // 0x6A
    op("LD L,E", 1, 4), // 0x6B
    op("LD L,H", 1, 4), // 0x6C
    op("LD L,L", 1, 4), // 0x6D
    op("LD L,(HL)", 1, 8), // 0x6E
    op("LD L,A", 1, 4), // 0x6F
    op("LD (HL),B", 1, 8), // 0x70
    op("LD (HL),C", 1, 8), // 0x71
    op("LD (HL),D", 1, 8), // 0x72
    op("LD (HL),E", 1, 8), // 0x73
    op("LD (HL),H", 1, 8), // 0x74
    op("LD (HL),L", 1, 8), // 0x75
    op("HALT", 1, 4), // 0x76
    op("LD (HL),A", 1, 8), // 0x77
    op("LD A,B", 1, 4), // 0x78
    op("LD A,C", 1, 4), // 0x79
    op("LD A,D", 1, 4), // 0x7A
    op("LD A,E", 1, 4), // 0x7B
    op("LD A,H", 1, 4), // 0x7C
    op("LD A,L", 1, 4), // 0x7D
    op("LD A,(HL)", 1, 8), // 0x7E
    op("LD A,A", 1, 4), // 0x7F
    op("ADD A,B", 1, 4), // 0x80
    op("ADD A,C", 1, 4), // 0x81
    op("ADD A,D", 1, 4), // 0x82
    op("ADD A,E", 1, 4), // 0x83
    op("ADD A,H", 1, 4), // 0x84
    op("ADD A,L", 1, 4), // 0x85
    op("ADD A,(HL)", 1, 8), // 0x86
    op("ADD A,A", 1, 4), // 0x87
    op("ADC A,B", 1, 4), // 0x88
    op("ADC A,C", 1, 4), // 0x89
    op("ADC A,D", 1, 4), // 0x8A
    op("ADC A,E", 1, 4), // 0x8B
    op("ADC A,H", 1, 4), // 0x8C
    op("ADC A,L", 1, 4), // 0x8D
    op("ADC A,(HL)", 1, 8), // 0x8E
    op("ADC A,A", 1, 4), // 0x8F
    op("SUB B", 1, 4), // 0x90
    op("SUB C", 1, 4), // 0x91
    op("SUB D", 1, 4), // 0x92
    op("SUB E", 1, 4), // 0x93
    op("SUB H", 1, 4), // 0x94
    op("SUB L", 1, 4), // 0x95
    op("SUB (HL)", 1, 8), // 0x96
    op("SUB A", 1, 4), // 0x97
    op("SBC A,B", 1, 4), // 0x98
    op("SBC A,C", 1, 4), // 0x99
    op("SBC A,D", 1, 4), // 0x9A
    op("SBC A,E", 1, 4), // 0x9B
    op("SBC A,H", 1, 4), // 0x9C
    op("SBC A,L", 1, 4), // 0x9D
    op("SBC A,(HL)", 1, 8), // 0x9E
    op("SBC A,A", 1, 4), // 0x9F
    op("AND B", 1, 4), // 0xA0
    op("AND C", 1, 4), // 0xA1
    op("AND D", 1, 4), // 0xA2
    op("AND E", 1, 4), // 0xA3
    op("AND H", 1, 4), // 0xA4
    op("AND L", 1, 4), // 0xA5
    op("AND (HL)", 1, 8), // 0xA6
    op("AND A", 1, 4), // 0xA7
    op("XOR B", 1, 4), // 0xA8
    op("XOR C", 1, 4), // 0xA9
    op("XOR D", 1, 4), // 0xAA
    op("XOR E", 1, 4), // 0xAB
    op("XOR H", 1, 4), // 0xAC
    op("XOR L", 1, 4), // 0xAD
    op("XOR (HL)", 1, 8), // 0xAE
    op("XOR A", 1, 4), // 0xAF
    op("OR B", 1, 4), // 0xB0
    op("OR C", 1, 4), // 0xB1
    op("OR D", 1, 4), // 0xB2
    op("OR E", 1, 4), // 0xB3
    op("OR H", 1, 4), // 0xB4
    op("OR L", 1, 4), // 0xB5
    op("OR (HL)", 1, 8), // 0xB6
    op("OR A", 1, 4), // 0xB7
    op("CP B", 1, 4), // 0xB8
    op("CP C", 1, 4), // 0xB9
    op("CP D", 1, 4), // 0xBA
    op("CP E", 1, 4), // 0xBB
    op("CP H", 1, 4), // 0xBC
    op("CP L", 1, 4), // 0xBD
    op("CP (HL)", 1, 8), // 0xBE
    op("CP A", 1, 4), // 0xBF
    op_cc("RET NZ", 1, 8, 20), // 0xC0
    op("POP BC", 1, 12), // 0xC1
    op_cc("JP NZ,a16", 3, 12, 16), // 0xC2
    op("JP a16", 3, 16), // 0xC3
    op_cc("CALL NZ,a16", 3, 12, 24), // 0xC4
    op("PUSH BC", 1, 16), // 0xC5
    op("ADD A,d8", 2, 8), // 0xC6
    op("RST 00H", 1, 16), // 0xC7
    op_cc("RET Z", 1, 8, 20), // 0xC8
    op("RET", 1, 16), // 0xC9
    op_cc("JP Z,a16", 3, 12, 16), // 0xCA
    op("PREFIX CB", 1, 4), // 0xCB
    op_cc("CALL Z,a16", 3, 12, 24), // 0xCC
    op("CALL a16", 3, 24), // 0xCD
    op("ADC A,d8", 2, 8), // 0xCE
    op("RST 08H", 1, 16), // 0xCF
    op_cc("RET NC", 1, 8, 20), // 0xD0
    op("POP DE", 1, 12), // 0xD1
    op_cc("JP NC,a16", 3, 12, 16), // 0xD2
    op("ILLEGAL", 1, 4), // 0xD3
    op_cc("CALL NC,a16", 3, 12, 24), // 0xD4
    op("PUSH DE", 1, 16), // 0xD5
    op("SUB d8", 2, 8), // 0xD6
    op("RST 10H", 1, 16), // 0xD7
    op_cc("RET C", 1, 8, 20), // 0xD8
    op("RETI", 1, 16), // 0xD9
    op_cc("JP C,a16", 3, 12, 16), // 0xDA
    op("ILLEGAL", 1, 4), // 0xDB
    op_cc("CALL C,a16", 3, 12, 24), // 0xDC
    op("ILLEGAL", 1, 4), // 0xDD
    op("SBC A,d8", 2, 8), // 0xDE
    op("RST 18H", 1, 16), // 0xDF
    op("LDH (a8),A", 2, 12), // 0xE0
    op("POP HL", 1, 12), // 0xE1
    op("LD (C),A", 1, 8), // 0xE2
    op("ILLEGAL", 1, 4), // 0xE3
    op("ILLEGAL", 1, 4), // 0xE4
    op("PUSH HL", 1, 16), // 0xE5
    op("AND d8", 2, 8), // 0xE6
    op("RST 20H", 1, 16), // 0xE7
    op("ADD SP,r8", 2, 16), // 0xE8
    op("JP (HL)", 1, 4), // 0xE9
    op("LD (a16),A", 3, 16), // 0xEA
    op("ILLEGAL", 1, 4), // 0xEB
    op("ILLEGAL", 1, 4), // 0xEC
    op("ILLEGAL", 1, 4), // 0xED
    op("XOR d8", 2, 8), // 0xEE
    op("RST 28H", 1, 16), // 0xEF
    op("LDH A,(a8)", 2, 12), // 0xF0
    op("POP AF", 1, 12), // 0xF1
    op("LD A,(C)", 1, 8), // 0xF2
    op("DI", 1, 4), // 0xF3
    op("ILLEGAL", 1, 4), // 0xF4
    op("PUSH AF", 1, 16), // 0xF5
    op("OR d8", 2, 8), // 0xF6
    op("RST 30H", 1, 16), // 0xF7
    op("LD HL,SP+r8", 2, 12), // 0xF8
    op("LD SP,HL", 1, 8), // 0xF9
    op("LD A,(a16)", 3, 16), // 0xFA
    op("EI", 1, 4), // 0xFB
    op("ILLEGAL", 1, 4), // 0xFC
    op("ILLEGAL", 1, 4), // 0xFD
    op("CP d8", 2, 8), // 0xFE
    op("RST 38H", 1, 16), // 0xFF
];

/// CB-prefixed table. Cycle counts include the prefix byte.
pub static CB_OPCODES: [OpInfo; 256] = [
    op("RLC B", 2, 8), // 0xCB00
    op("RLC C", 2, 8), // 0xCB01
    op("RLC D", 2, 8), // 0xCB02
    op("RLC E", 2, 8), // 0xCB03
    op("RLC H", 2, 8), // 0xCB04
    op("RLC L", 2, 8), // 0xCB05
    op("RLC (HL)", 2, 16), // 0xCB06
    op("RLC A", 2, 8), // 0xCB07
    op("RRC B", 2, 8), // 0xCB08
    op("RRC C", 2, 8), // 0xCB09
    op("RRC D", 2, 8), // 0xCB0A
    op("RRC E", 2, 8), // 0xCB0B
    op("RRC H", 2, 8), // 0xCB0C
    op("RRC L", 2, 8), // 0xCB0D
    op("RRC (HL)", 2, 16), // 0xCB0E
    op("RRC A", 2, 8), // 0xCB0F
    op("RL B", 2, 8), // 0xCB10
    op("RL C", 2, 8), // 0xCB11
    op("RL D", 2, 8), // 0xCB12
    op("RL E", 2, 8), // 0xCB13
    op("RL H", 2, 8), // 0xCB14
    op("RL L", 2, 8), // 0xCB15
    op("RL (HL)", 2, 16), // 0xCB16
    op("RL A", 2, 8), // 0xCB17
    op("RR B", 2, 8), // 0xCB18
    op("RR C", 2, 8), // 0xCB19
    op("RR D", 2, 8), // 0xCB1A
    op("RR E", 2, 8), // 0xCB1B
    op("RR H", 2, 8), // 0xCB1C
    op("RR L", 2, 8), // 0xCB1D
    op("RR (HL)", 2, 16), // 0xCB1E
    op("RR A", 2, 8), // 0xCB1F
    op("SLA B", 2, 8), // 0xCB20
    op("SLA C", 2, 8), // 0xCB21
    op("SLA D", 2, 8), // 0xCB22
    op("SLA E", 2, 8), // 0xCB23
    op("SLA H", 2, 8), // 0xCB24
    op("SLA L", 2, 8), // 0xCB25
    op("SLA (HL)", 2, 16), // 0xCB26
    op("SLA A", 2, 8), // 0xCB27
    op("SRA B", 2, 8), // 0xCB28
    op("SRA C", 2, 8), // 0xCB29
    op("SRA D", 2, 8), // 0xCB2A
    op("SRA E", 2, 8), // 0xCB2B
    op("SRA H", 2, 8), // 0xCB2C
    op("SRA L", 2, 8), // 0xCB2D
    op("SRA (HL)", 2, 16), // 0xCB2E
    op("SRA A", 2, 8), // 0xCB2F
    op("SWAP B", 2, 8), // 0xCB30
    op("SWAP C", 2, 8), // 0xCB31
    op("SWAP D", 2, 8), // 0xCB32
    op("SWAP E", 2, 8), // 0xCB33
    op("SWAP H", 2, 8), // 0xCB34
    op("SWAP L", 2, 8), // 0xCB35
    op("SWAP (HL)", 2, 16), // 0xCB36
    op("SWAP A", 2, 8), // 0xCB37
    op("SRL B", 2, 8), // 0xCB38
    op("SRL C", 2, 8), // 0xCB39
    op("SRL D", 2, 8), // 0xCB3A
    op("SRL E", 2, 8), // 0xCB3B
    op("SRL H", 2, 8), // 0xCB3C
    op("SRL L", 2, 8), // 0xCB3D
    op("SRL (HL)", 2, 16), // 0xCB3E
    op("SRL A", 2, 8), // 0xCB3F
    op("BIT 0,B", 2, 8), // 0xCB40
    op("BIT 0,C", 2, 8), // 0xCB41
    op("BIT 0,D", 2, 8), // 0xCB42
    op("BIT 0,E", 2, 8), // 0xCB43
    op("BIT 0,H", 2, 8), // 0xCB44
    op("BIT 0,L", 2, 8), // 0xCB45
    op("BIT 0,(HL)", 2, 12), // 0xCB46
    op("BIT 0,A", 2, 8), // 0xCB47
    op("BIT 1,B", 2, 8), // 0xCB48
    op("BIT 1,C", 2, 8), // 0xCB49
    op("BIT 1,D", 2, 8), // 0xCB4A
    op("BIT 1,E", 2, 8), // 0xCB4B
    op("BIT 1,H", 2, 8), // 0xCB4C
    op("BIT 1,L", 2, 8), // 0xCB4D
    op("BIT 1,(HL)", 2, 12), // 0xCB4E
    op("BIT 1,A", 2, 8), // 0xCB4F
    op("BIT 2,B", 2, 8), // 0xCB50
    op("BIT 2,C", 2, 8), // 0xCB51
    op("BIT 2,D", 2, 8), // 0xCB52
    op("BIT 2,E", 2, 8), // 0xCB53
    op("BIT 2,H", 2, 8), // 0xCB54
    op("BIT 2,L", 2, 8), // 0xCB55
    op("BIT 2,(HL)", 2, 12), // 0xCB56
    op("BIT 2,A", 2, 8), // 0xCB57
    op("BIT 3,B", 2, 8), // 0xCB58
    op("BIT 3,C", 2, 8), // 0xCB59
    op("BIT 3,D", 2, 8), // 0xCB5A
    op("BIT 3,E", 2, 8), // 0xCB5B
    op("BIT 3,H", 2, 8), // 0xCB5C
    op("BIT 3,L", 2, 8), // 0xCB5D
    op("BIT 3,(HL)", 2, 12), // 0xCB5E
    op("BIT 3,A", 2, 8), // 0xCB5F
    op("BIT 4,B", 2, 8), // 0xCB60
    op("BIT 4,C", 2, 8), // 0xCB61
    op("BIT 4,D", 2, 8), // 0xCB62
    op("BIT 4,E", 2, 8), // 0xCB63
    op("BIT 4,H", 2, 8), // 0xCB64
    op("BIT 4,L", 2, 8), // 0xCB65
    op("BIT 4,(HL)", 2, 12), // 0xCB66
    op("BIT 4,A", 2, 8), // 0xCB67
    op("BIT 5,B", 2, 8), // 0xCB68
    op("BIT 5,C", 2, 8), // 0xCB69
    op("BIT 5,D", 2, 8), // 0xCB6A
    op("BIT 5,E", 2, 8), // 0xCB6B
    op("BIT 5,H", 2, 8), // 0xCB6C
    op("BIT 5,L", 2, 8), // 0xCB6D
    op("BIT 5,(HL)", 2, 12), // 0xCB6E
    op("BIT 5,A", 2, 8), // 0xCB6F
    op("BIT 6,B", 2, 8), // 0xCB70
    op("BIT 6,C", 2, 8), // 0xCB71
    op("BIT 6,D", 2, 8), // 0xCB72
    op("BIT 6,E", 2, 8), // 0xCB73
    op("BIT 6,H", 2, 8), // 0xCB74
    op("BIT 6,L", 2, 8), // 0xCB75
    op("BIT 6,(HL)", 2, 12), // 0xCB76
    op("BIT 6,A", 2, 8), // 0xCB77
    op("BIT 7,B", 2, 8), // 0xCB78
    op("BIT 7,C", 2, 8), // 0xCB79
    op("BIT 7,D", 2, 8), // 0xCB7A
    op("BIT 7,E", 2, 8), // 0xCB7B
    op("BIT 7,H", 2, 8), // 0xCB7C
    op("BIT 7,L", 2, 8), // 0xCB7D
    op("BIT 7,(HL)", 2, 12), // 0xCB7E
    op("BIT 7,A", 2, 8), // 0xCB7F
    op("RES 0,B", 2, 8), // 0xCB80
    op("RES 0,C", 2, 8), // 0xCB81
    op("RES 0,D", 2, 8), // 0xCB82
    op("RES 0,E", 2, 8), // 0xCB83
    op("RES 0,H", 2, 8), // 0xCB84
    op("RES 0,L", 2, 8), // 0xCB85
    op("RES 0,(HL)", 2, 16), // 0xCB86
    op("RES 0,A", 2, 8), // 0xCB87
    op("RES 1,B", 2, 8), // 0xCB88
    op("RES 1,C", 2, 8), // 0xCB89
    op("RES 1,D", 2, 8), // 0xCB8A
    op("RES 1,E", 2, 8), // 0xCB8B
    op("RES 1,H", 2, 8), // 0xCB8C
    op("RES 1,L", 2, 8), // 0xCB8D
    op("RES 1,(HL)", 2, 16), // 0xCB8E
    op("RES 1,A", 2, 8), // 0xCB8F
    op("RES 2,B", 2, 8), // 0xCB90
    op("RES 2,C", 2, 8), // 0xCB91
    op("RES 2,D", 2, 8), // 0xCB92
    op("RES 2,E", 2, 8), // 0xCB93
    op("RES 2,H", 2, 8), // 0xCB94
    op("RES 2,L", 2, 8), // 0xCB95
    op("RES 2,(HL)", 2, 16), // 0xCB96
    op("RES 2,A", 2, 8), // 0xCB97
    op("RES 3,B", 2, 8), // 0xCB98
    op("RES 3,C", 2, 8), // 0xCB99
    op("RES 3,D", 2, 8), // 0xCB9A
    op("RES 3,E", 2, 8), // 0xCB9B
    op("RES 3,H", 2, 8), // 0xCB9C
    op("RES 3,L", 2, 8), // 0xCB9D
    op("RES 3,(HL)", 2, 16), // 0xCB9E
    op("RES 3,A", 2, 8), // 0xCB9F
    op("RES 4,B", 2, 8), // 0xCBA0
    op("RES 4,C", 2, 8), // 0xCBA1
    op("RES 4,D", 2, 8), // 0xCBA2
    op("RES 4,E", 2, 8), // 0xCBA3
    op("RES 4,H", 2, 8), // 0xCBA4
    op("RES 4,L", 2, 8), // 0xCBA5
    op("RES 4,(HL)", 2, 16), // 0xCBA6
    op("RES 4,A", 2, 8), // 0xCBA7
    op("RES 5,B", 2, 8), // 0xCBA8
    op("RES 5,C", 2, 8), // 0xCBA9
    op("RES 5,D", 2, 8), // 0xCBAA
    op("RES 5,E", 2, 8), // 0xCBAB
    op("RES 5,H", 2, 8), // 0xCBAC
    op("RES 5,L", 2, 8), // 0xCBAD
    op("RES 5,(HL)", 2, 16), // 0xCBAE
    op("RES 5,A", 2, 8), // 0xCBAF
    op("RES 6,B", 2, 8), // 0xCBB0
    op("RES 6,C", 2, 8), // 0xCBB1
    op("RES 6,D", 2, 8), // 0xCBB2
    op("RES 6,E", 2, 8), // 0xCBB3
    op("RES 6,H", 2, 8), // 0xCBB4
    op("RES 6,L", 2, 8), // 0xCBB5
    op("RES 6,(HL)", 2, 16), // 0xCBB6
    op("RES 6,A", 2, 8), // 0xCBB7
    op("RES 7,B", 2, 8), // 0xCBB8
    op("RES 7,C", 2, 8), // 0xCBB9
    op("RES 7,D", 2, 8), // 0xCBBA
    op("RES 7,E", 2, 8), // 0xCBBB
    op("RES 7,H", 2, 8), // 0xCBBC
    op("RES 7,L", 2, 8), // 0xCBBD
    op("RES 7,(HL)", 2, 16), // 0xCBBE
    op("RES 7,A", 2, 8), // 0xCBBF
    op("SET 0,B", 2, 8), // 0xCBC0
    op("SET 0,C", 2, 8), // 0xCBC1
    op("SET 0,D", 2, 8), // 0xCBC2
    op("SET 0,E", 2, 8), // 0xCBC3
    op("SET 0,H", 2, 8), // 0xCBC4
    op("SET 0,L", 2, 8), // 0xCBC5
    op("SET 0,(HL)", 2, 16), // 0xCBC6
    op("SET 0,A", 2, 8), // 0xCBC7
    op("SET 1,B", 2, 8), // 0xCBC8
    op("SET 1,C", 2, 8), // 0xCBC9
    op("SET 1,D", 2, 8), // 0xCBCA
    op("SET 1,E", 2, 8), // 0xCBCB
    op("SET 1,H", 2, 8), // 0xCBCC
    op("SET 1,L", 2, 8), // 0xCBCD
    op("SET 1,(HL)", 2, 16), // 0xCBCE
    op("SET 1,A", 2, 8), // 0xCBCF
    op("SET 2,B", 2, 8), // 0xCBD0
    op("SET 2,C", 2, 8), // 0xCBD1
    op("SET 2,D", 2, 8), // 0xCBD2
    op("SET 2,E", 2, 8), // 0xCBD3
    op("SET 2,H", 2, 8), // 0xCBD4
    op("SET 2,L", 2, 8), // 0xCBD5
    op("SET 2,(HL)", 2, 16), // 0xCBD6
    op("SET 2,A", 2, 8), // 0xCBD7
    op("SET 3,B", 2, 8), // 0xCBD8
    op("SET 3,C", 2, 8), // 0xCBD9
    op("SET 3,D", 2, 8), // 0xCBDA
    op("SET 3,E", 2, 8), // 0xCBDB
    op("SET 3,H", 2, 8), // 0xCBDC
    op("SET 3,L", 2, 8), // 0xCBDD
    op("SET 3,(HL)", 2, 16), // 0xCBDE
    op("SET 3,A", 2, 8), // 0xCBDF
    op("SET 4,B", 2, 8), // 0xCBE0
    op("SET 4,C", 2, 8), // 0xCBE1
    op("SET 4,D", 2, 8), // 0xCBE2
    op("SET 4,E", 2, 8), // 0xCBE3
    op("SET 4,H", 2, 8), // 0xCBE4
    op("SET 4,L", 2, 8), // 0xCBE5
    op("SET 4,(HL)", 2, 16), // 0xCBE6
    op("SET 4,A", 2, 8), // 0xCBE7
    op("SET 5,B", 2, 8), // 0xCBE8
    op("SET 5,C", 2, 8), // 0xCBE9
    op("SET 5,D", 2, 8), // 0xCBEA
    op("SET 5,E", 2, 8), // 0xCBEB
    op("SET 5,H", 2, 8), // 0xCBEC
    op("SET 5,L", 2, 8), // 0xCBED
    op("SET 5,(HL)", 2, 16), // 0xCBEE
    op("SET 5,A", 2, 8), // 0xCBEF
    op("SET 6,B", 2, 8), // 0xCBF0
    op("SET 6,C", 2, 8), // 0xCBF1
    op("SET 6,D", 2, 8), // 0xCBF2
    op("SET 6,E", 2, 8), // 0xCBF3
    op("SET 6,H", 2, 8), // 0xCBF4
    op("SET 6,L", 2, 8), // 0xCBF5
    op("SET 6,(HL)", 2, 16), // 0xCBF6
    op("SET 6,A", 2, 8), // 0xCBF7
    op("SET 7,B", 2, 8), // 0xCBF8
    op("SET 7,C", 2, 8), // 0xCBF9
    op("SET 7,D", 2, 8), // 0xCBFA
    op("SET 7,E", 2, 8), // 0xCBFB
    op("SET 7,H", 2, 8), // 0xCBFC
    op("SET 7,L", 2, 8), // 0xCBFD
    op("SET 7,(HL)", 2, 16), // 0xCBFE
    op("SET 7,A", 2, 8), // 0xCBFF
];
