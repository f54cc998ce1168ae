//! Static opcode table.
//!
//! Keyed on (page, opcode): page 0 is the unprefixed map, pages 1 and 2 are
//! selected by the $10 and $11 prefix bytes. Each entry carries the mnemonic,
//! the addressing mode the dispatcher hands to the instruction handler, and
//! the base cycle count. Indexed EA resolution, pushes/pulls, and taken
//! branches add cycles on top. Opcodes without an entry (SWI/RTI/CWAI/SYNC
//! and the undocumented holes) fault as illegal.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    Inherent,
    Immediate,
    Direct,
    Indexed,
    Extended,
    Relative,
}

pub struct CpuOp {
    pub name: &'static str,
    pub addr_mode: AddressingMode,
    pub cycles: u32,
}

pub fn lookup(page: u8, opcode: u8) -> Option<&'static CpuOp> {
    match page {
        0 => lookup_page0(opcode),
        1 => lookup_page1(opcode),
        2 => lookup_page2(opcode),
        _ => None,
    }
}

fn lookup_page0(opcode: u8) -> Option<&'static CpuOp> {
    use AddressingMode::*;
    Some(match opcode {
        // Direct-page unary/shift
        0x00 => &CpuOp { name: "NEG", addr_mode: Direct, cycles: 6 },
        0x03 => &CpuOp { name: "COM", addr_mode: Direct, cycles: 6 },
        0x04 => &CpuOp { name: "LSR", addr_mode: Direct, cycles: 6 },
        0x06 => &CpuOp { name: "ROR", addr_mode: Direct, cycles: 6 },
        0x07 => &CpuOp { name: "ASR", addr_mode: Direct, cycles: 6 },
        0x08 => &CpuOp { name: "ASL", addr_mode: Direct, cycles: 6 },
        0x09 => &CpuOp { name: "ROL", addr_mode: Direct, cycles: 6 },
        0x0A => &CpuOp { name: "DEC", addr_mode: Direct, cycles: 6 },
        0x0C => &CpuOp { name: "INC", addr_mode: Direct, cycles: 6 },
        0x0D => &CpuOp { name: "TST", addr_mode: Direct, cycles: 6 },
        0x0E => &CpuOp { name: "JMP", addr_mode: Direct, cycles: 3 },
        0x0F => &CpuOp { name: "CLR", addr_mode: Direct, cycles: 6 },

        // Misc
        0x12 => &CpuOp { name: "NOP", addr_mode: Inherent, cycles: 2 },
        0x16 => &CpuOp { name: "LBRA", addr_mode: Relative, cycles: 5 },
        0x17 => &CpuOp { name: "LBSR", addr_mode: Relative, cycles: 9 },
        0x19 => &CpuOp { name: "DAA", addr_mode: Inherent, cycles: 2 },
        0x1A => &CpuOp { name: "ORCC", addr_mode: Immediate, cycles: 3 },
        0x1C => &CpuOp { name: "ANDCC", addr_mode: Immediate, cycles: 3 },
        0x1D => &CpuOp { name: "SEX", addr_mode: Inherent, cycles: 2 },
        0x1E => &CpuOp { name: "EXG", addr_mode: Immediate, cycles: 8 },
        0x1F => &CpuOp { name: "TFR", addr_mode: Immediate, cycles: 6 },

        // Short branches
        0x20 => &CpuOp { name: "BRA", addr_mode: Relative, cycles: 3 },
        0x21 => &CpuOp { name: "BRN", addr_mode: Relative, cycles: 3 },
        0x22 => &CpuOp { name: "BHI", addr_mode: Relative, cycles: 3 },
        0x23 => &CpuOp { name: "BLS", addr_mode: Relative, cycles: 3 },
        0x24 => &CpuOp { name: "BCC", addr_mode: Relative, cycles: 3 },
        0x25 => &CpuOp { name: "BCS", addr_mode: Relative, cycles: 3 },
        0x26 => &CpuOp { name: "BNE", addr_mode: Relative, cycles: 3 },
        0x27 => &CpuOp { name: "BEQ", addr_mode: Relative, cycles: 3 },
        0x28 => &CpuOp { name: "BVC", addr_mode: Relative, cycles: 3 },
        0x29 => &CpuOp { name: "BVS", addr_mode: Relative, cycles: 3 },
        0x2A => &CpuOp { name: "BPL", addr_mode: Relative, cycles: 3 },
        0x2B => &CpuOp { name: "BMI", addr_mode: Relative, cycles: 3 },
        0x2C => &CpuOp { name: "BGE", addr_mode: Relative, cycles: 3 },
        0x2D => &CpuOp { name: "BLT", addr_mode: Relative, cycles: 3 },
        0x2E => &CpuOp { name: "BGT", addr_mode: Relative, cycles: 3 },
        0x2F => &CpuOp { name: "BLE", addr_mode: Relative, cycles: 3 },

        // LEA
        0x30 => &CpuOp { name: "LEAX", addr_mode: Indexed, cycles: 4 },
        0x31 => &CpuOp { name: "LEAY", addr_mode: Indexed, cycles: 4 },
        0x32 => &CpuOp { name: "LEAS", addr_mode: Indexed, cycles: 4 },
        0x33 => &CpuOp { name: "LEAU", addr_mode: Indexed, cycles: 4 },

        // Stack
        0x34 => &CpuOp { name: "PSHS", addr_mode: Immediate, cycles: 5 },
        0x35 => &CpuOp { name: "PULS", addr_mode: Immediate, cycles: 5 },
        0x36 => &CpuOp { name: "PSHU", addr_mode: Immediate, cycles: 5 },
        0x37 => &CpuOp { name: "PULU", addr_mode: Immediate, cycles: 5 },

        // Subroutine return, inherent arithmetic
        0x39 => &CpuOp { name: "RTS", addr_mode: Inherent, cycles: 5 },
        0x3A => &CpuOp { name: "ABX", addr_mode: Inherent, cycles: 3 },
        0x3D => &CpuOp { name: "MUL", addr_mode: Inherent, cycles: 11 },

        // A-register unary/shift
        0x40 => &CpuOp { name: "NEGA", addr_mode: Inherent, cycles: 2 },
        0x43 => &CpuOp { name: "COMA", addr_mode: Inherent, cycles: 2 },
        0x44 => &CpuOp { name: "LSRA", addr_mode: Inherent, cycles: 2 },
        0x46 => &CpuOp { name: "RORA", addr_mode: Inherent, cycles: 2 },
        0x47 => &CpuOp { name: "ASRA", addr_mode: Inherent, cycles: 2 },
        0x48 => &CpuOp { name: "ASLA", addr_mode: Inherent, cycles: 2 },
        0x49 => &CpuOp { name: "ROLA", addr_mode: Inherent, cycles: 2 },
        0x4A => &CpuOp { name: "DECA", addr_mode: Inherent, cycles: 2 },
        0x4C => &CpuOp { name: "INCA", addr_mode: Inherent, cycles: 2 },
        0x4D => &CpuOp { name: "TSTA", addr_mode: Inherent, cycles: 2 },
        0x4F => &CpuOp { name: "CLRA", addr_mode: Inherent, cycles: 2 },

        // B-register unary/shift
        0x50 => &CpuOp { name: "NEGB", addr_mode: Inherent, cycles: 2 },
        0x53 => &CpuOp { name: "COMB", addr_mode: Inherent, cycles: 2 },
        0x54 => &CpuOp { name: "LSRB", addr_mode: Inherent, cycles: 2 },
        0x56 => &CpuOp { name: "RORB", addr_mode: Inherent, cycles: 2 },
        0x57 => &CpuOp { name: "ASRB", addr_mode: Inherent, cycles: 2 },
        0x58 => &CpuOp { name: "ASLB", addr_mode: Inherent, cycles: 2 },
        0x59 => &CpuOp { name: "ROLB", addr_mode: Inherent, cycles: 2 },
        0x5A => &CpuOp { name: "DECB", addr_mode: Inherent, cycles: 2 },
        0x5C => &CpuOp { name: "INCB", addr_mode: Inherent, cycles: 2 },
        0x5D => &CpuOp { name: "TSTB", addr_mode: Inherent, cycles: 2 },
        0x5F => &CpuOp { name: "CLRB", addr_mode: Inherent, cycles: 2 },

        // Indexed unary/shift
        0x60 => &CpuOp { name: "NEG", addr_mode: Indexed, cycles: 6 },
        0x63 => &CpuOp { name: "COM", addr_mode: Indexed, cycles: 6 },
        0x64 => &CpuOp { name: "LSR", addr_mode: Indexed, cycles: 6 },
        0x66 => &CpuOp { name: "ROR", addr_mode: Indexed, cycles: 6 },
        0x67 => &CpuOp { name: "ASR", addr_mode: Indexed, cycles: 6 },
        0x68 => &CpuOp { name: "ASL", addr_mode: Indexed, cycles: 6 },
        0x69 => &CpuOp { name: "ROL", addr_mode: Indexed, cycles: 6 },
        0x6A => &CpuOp { name: "DEC", addr_mode: Indexed, cycles: 6 },
        0x6C => &CpuOp { name: "INC", addr_mode: Indexed, cycles: 6 },
        0x6D => &CpuOp { name: "TST", addr_mode: Indexed, cycles: 6 },
        0x6E => &CpuOp { name: "JMP", addr_mode: Indexed, cycles: 3 },
        0x6F => &CpuOp { name: "CLR", addr_mode: Indexed, cycles: 6 },

        // Extended unary/shift
        0x70 => &CpuOp { name: "NEG", addr_mode: Extended, cycles: 7 },
        0x73 => &CpuOp { name: "COM", addr_mode: Extended, cycles: 7 },
        0x74 => &CpuOp { name: "LSR", addr_mode: Extended, cycles: 7 },
        0x76 => &CpuOp { name: "ROR", addr_mode: Extended, cycles: 7 },
        0x77 => &CpuOp { name: "ASR", addr_mode: Extended, cycles: 7 },
        0x78 => &CpuOp { name: "ASL", addr_mode: Extended, cycles: 7 },
        0x79 => &CpuOp { name: "ROL", addr_mode: Extended, cycles: 7 },
        0x7A => &CpuOp { name: "DEC", addr_mode: Extended, cycles: 7 },
        0x7C => &CpuOp { name: "INC", addr_mode: Extended, cycles: 7 },
        0x7D => &CpuOp { name: "TST", addr_mode: Extended, cycles: 7 },
        0x7E => &CpuOp { name: "JMP", addr_mode: Extended, cycles: 4 },
        0x7F => &CpuOp { name: "CLR", addr_mode: Extended, cycles: 7 },

        // Accumulator A column, immediate
        0x80 => &CpuOp { name: "SUBA", addr_mode: Immediate, cycles: 2 },
        0x81 => &CpuOp { name: "CMPA", addr_mode: Immediate, cycles: 2 },
        0x82 => &CpuOp { name: "SBCA", addr_mode: Immediate, cycles: 2 },
        0x83 => &CpuOp { name: "SUBD", addr_mode: Immediate, cycles: 4 },
        0x84 => &CpuOp { name: "ANDA", addr_mode: Immediate, cycles: 2 },
        0x85 => &CpuOp { name: "BITA", addr_mode: Immediate, cycles: 2 },
        0x86 => &CpuOp { name: "LDA", addr_mode: Immediate, cycles: 2 },
        0x88 => &CpuOp { name: "EORA", addr_mode: Immediate, cycles: 2 },
        0x89 => &CpuOp { name: "ADCA", addr_mode: Immediate, cycles: 2 },
        0x8A => &CpuOp { name: "ORA", addr_mode: Immediate, cycles: 2 },
        0x8B => &CpuOp { name: "ADDA", addr_mode: Immediate, cycles: 2 },
        0x8C => &CpuOp { name: "CMPX", addr_mode: Immediate, cycles: 4 },
        0x8D => &CpuOp { name: "BSR", addr_mode: Relative, cycles: 7 },
        0x8E => &CpuOp { name: "LDX", addr_mode: Immediate, cycles: 3 },

        // Accumulator A column, direct
        0x90 => &CpuOp { name: "SUBA", addr_mode: Direct, cycles: 4 },
        0x91 => &CpuOp { name: "CMPA", addr_mode: Direct, cycles: 4 },
        0x92 => &CpuOp { name: "SBCA", addr_mode: Direct, cycles: 4 },
        0x93 => &CpuOp { name: "SUBD", addr_mode: Direct, cycles: 6 },
        0x94 => &CpuOp { name: "ANDA", addr_mode: Direct, cycles: 4 },
        0x95 => &CpuOp { name: "BITA", addr_mode: Direct, cycles: 4 },
        0x96 => &CpuOp { name: "LDA", addr_mode: Direct, cycles: 4 },
        0x97 => &CpuOp { name: "STA", addr_mode: Direct, cycles: 4 },
        0x98 => &CpuOp { name: "EORA", addr_mode: Direct, cycles: 4 },
        0x99 => &CpuOp { name: "ADCA", addr_mode: Direct, cycles: 4 },
        0x9A => &CpuOp { name: "ORA", addr_mode: Direct, cycles: 4 },
        0x9B => &CpuOp { name: "ADDA", addr_mode: Direct, cycles: 4 },
        0x9C => &CpuOp { name: "CMPX", addr_mode: Direct, cycles: 6 },
        0x9D => &CpuOp { name: "JSR", addr_mode: Direct, cycles: 7 },
        0x9E => &CpuOp { name: "LDX", addr_mode: Direct, cycles: 5 },
        0x9F => &CpuOp { name: "STX", addr_mode: Direct, cycles: 5 },

        // Accumulator A column, indexed
        0xA0 => &CpuOp { name: "SUBA", addr_mode: Indexed, cycles: 4 },
        0xA1 => &CpuOp { name: "CMPA", addr_mode: Indexed, cycles: 4 },
        0xA2 => &CpuOp { name: "SBCA", addr_mode: Indexed, cycles: 4 },
        0xA3 => &CpuOp { name: "SUBD", addr_mode: Indexed, cycles: 6 },
        0xA4 => &CpuOp { name: "ANDA", addr_mode: Indexed, cycles: 4 },
        0xA5 => &CpuOp { name: "BITA", addr_mode: Indexed, cycles: 4 },
        0xA6 => &CpuOp { name: "LDA", addr_mode: Indexed, cycles: 4 },
        0xA7 => &CpuOp { name: "STA", addr_mode: Indexed, cycles: 4 },
        0xA8 => &CpuOp { name: "EORA", addr_mode: Indexed, cycles: 4 },
        0xA9 => &CpuOp { name: "ADCA", addr_mode: Indexed, cycles: 4 },
        0xAA => &CpuOp { name: "ORA", addr_mode: Indexed, cycles: 4 },
        0xAB => &CpuOp { name: "ADDA", addr_mode: Indexed, cycles: 4 },
        0xAC => &CpuOp { name: "CMPX", addr_mode: Indexed, cycles: 6 },
        0xAD => &CpuOp { name: "JSR", addr_mode: Indexed, cycles: 7 },
        0xAE => &CpuOp { name: "LDX", addr_mode: Indexed, cycles: 5 },
        0xAF => &CpuOp { name: "STX", addr_mode: Indexed, cycles: 5 },

        // Accumulator A column, extended
        0xB0 => &CpuOp { name: "SUBA", addr_mode: Extended, cycles: 5 },
        0xB1 => &CpuOp { name: "CMPA", addr_mode: Extended, cycles: 5 },
        0xB2 => &CpuOp { name: "SBCA", addr_mode: Extended, cycles: 5 },
        0xB3 => &CpuOp { name: "SUBD", addr_mode: Extended, cycles: 7 },
        0xB4 => &CpuOp { name: "ANDA", addr_mode: Extended, cycles: 5 },
        0xB5 => &CpuOp { name: "BITA", addr_mode: Extended, cycles: 5 },
        0xB6 => &CpuOp { name: "LDA", addr_mode: Extended, cycles: 5 },
        0xB7 => &CpuOp { name: "STA", addr_mode: Extended, cycles: 5 },
        0xB8 => &CpuOp { name: "EORA", addr_mode: Extended, cycles: 5 },
        0xB9 => &CpuOp { name: "ADCA", addr_mode: Extended, cycles: 5 },
        0xBA => &CpuOp { name: "ORA", addr_mode: Extended, cycles: 5 },
        0xBB => &CpuOp { name: "ADDA", addr_mode: Extended, cycles: 5 },
        0xBC => &CpuOp { name: "CMPX", addr_mode: Extended, cycles: 7 },
        0xBD => &CpuOp { name: "JSR", addr_mode: Extended, cycles: 8 },
        0xBE => &CpuOp { name: "LDX", addr_mode: Extended, cycles: 6 },
        0xBF => &CpuOp { name: "STX", addr_mode: Extended, cycles: 6 },

        // Accumulator B column, immediate
        0xC0 => &CpuOp { name: "SUBB", addr_mode: Immediate, cycles: 2 },
        0xC1 => &CpuOp { name: "CMPB", addr_mode: Immediate, cycles: 2 },
        0xC2 => &CpuOp { name: "SBCB", addr_mode: Immediate, cycles: 2 },
        0xC3 => &CpuOp { name: "ADDD", addr_mode: Immediate, cycles: 4 },
        0xC4 => &CpuOp { name: "ANDB", addr_mode: Immediate, cycles: 2 },
        0xC5 => &CpuOp { name: "BITB", addr_mode: Immediate, cycles: 2 },
        0xC6 => &CpuOp { name: "LDB", addr_mode: Immediate, cycles: 2 },
        0xC8 => &CpuOp { name: "EORB", addr_mode: Immediate, cycles: 2 },
        0xC9 => &CpuOp { name: "ADCB", addr_mode: Immediate, cycles: 2 },
        0xCA => &CpuOp { name: "ORB", addr_mode: Immediate, cycles: 2 },
        0xCB => &CpuOp { name: "ADDB", addr_mode: Immediate, cycles: 2 },
        0xCC => &CpuOp { name: "LDD", addr_mode: Immediate, cycles: 3 },
        0xCE => &CpuOp { name: "LDU", addr_mode: Immediate, cycles: 3 },

        // Accumulator B column, direct
        0xD0 => &CpuOp { name: "SUBB", addr_mode: Direct, cycles: 4 },
        0xD1 => &CpuOp { name: "CMPB", addr_mode: Direct, cycles: 4 },
        0xD2 => &CpuOp { name: "SBCB", addr_mode: Direct, cycles: 4 },
        0xD3 => &CpuOp { name: "ADDD", addr_mode: Direct, cycles: 6 },
        0xD4 => &CpuOp { name: "ANDB", addr_mode: Direct, cycles: 4 },
        0xD5 => &CpuOp { name: "BITB", addr_mode: Direct, cycles: 4 },
        0xD6 => &CpuOp { name: "LDB", addr_mode: Direct, cycles: 4 },
        0xD7 => &CpuOp { name: "STB", addr_mode: Direct, cycles: 4 },
        0xD8 => &CpuOp { name: "EORB", addr_mode: Direct, cycles: 4 },
        0xD9 => &CpuOp { name: "ADCB", addr_mode: Direct, cycles: 4 },
        0xDA => &CpuOp { name: "ORB", addr_mode: Direct, cycles: 4 },
        0xDB => &CpuOp { name: "ADDB", addr_mode: Direct, cycles: 4 },
        0xDC => &CpuOp { name: "LDD", addr_mode: Direct, cycles: 5 },
        0xDD => &CpuOp { name: "STD", addr_mode: Direct, cycles: 5 },
        0xDE => &CpuOp { name: "LDU", addr_mode: Direct, cycles: 5 },
        0xDF => &CpuOp { name: "STU", addr_mode: Direct, cycles: 5 },

        // Accumulator B column, indexed
        0xE0 => &CpuOp { name: "SUBB", addr_mode: Indexed, cycles: 4 },
        0xE1 => &CpuOp { name: "CMPB", addr_mode: Indexed, cycles: 4 },
        0xE2 => &CpuOp { name: "SBCB", addr_mode: Indexed, cycles: 4 },
        0xE3 => &CpuOp { name: "ADDD", addr_mode: Indexed, cycles: 6 },
        0xE4 => &CpuOp { name: "ANDB", addr_mode: Indexed, cycles: 4 },
        0xE5 => &CpuOp { name: "BITB", addr_mode: Indexed, cycles: 4 },
        0xE6 => &CpuOp { name: "LDB", addr_mode: Indexed, cycles: 4 },
        0xE7 => &CpuOp { name: "STB", addr_mode: Indexed, cycles: 4 },
        0xE8 => &CpuOp { name: "EORB", addr_mode: Indexed, cycles: 4 },
        0xE9 => &CpuOp { name: "ADCB", addr_mode: Indexed, cycles: 4 },
        0xEA => &CpuOp { name: "ORB", addr_mode: Indexed, cycles: 4 },
        0xEB => &CpuOp { name: "ADDB", addr_mode: Indexed, cycles: 4 },
        0xEC => &CpuOp { name: "LDD", addr_mode: Indexed, cycles: 5 },
        0xED => &CpuOp { name: "STD", addr_mode: Indexed, cycles: 5 },
        0xEE => &CpuOp { name: "LDU", addr_mode: Indexed, cycles: 5 },
        0xEF => &CpuOp { name: "STU", addr_mode: Indexed, cycles: 5 },

        // Accumulator B column, extended
        0xF0 => &CpuOp { name: "SUBB", addr_mode: Extended, cycles: 5 },
        0xF1 => &CpuOp { name: "CMPB", addr_mode: Extended, cycles: 5 },
        0xF2 => &CpuOp { name: "SBCB", addr_mode: Extended, cycles: 5 },
        0xF3 => &CpuOp { name: "ADDD", addr_mode: Extended, cycles: 7 },
        0xF4 => &CpuOp { name: "ANDB", addr_mode: Extended, cycles: 5 },
        0xF5 => &CpuOp { name: "BITB", addr_mode: Extended, cycles: 5 },
        0xF6 => &CpuOp { name: "LDB", addr_mode: Extended, cycles: 5 },
        0xF7 => &CpuOp { name: "STB", addr_mode: Extended, cycles: 5 },
        0xF8 => &CpuOp { name: "EORB", addr_mode: Extended, cycles: 5 },
        0xF9 => &CpuOp { name: "ADCB", addr_mode: Extended, cycles: 5 },
        0xFA => &CpuOp { name: "ORB", addr_mode: Extended, cycles: 5 },
        0xFB => &CpuOp { name: "ADDB", addr_mode: Extended, cycles: 5 },
        0xFC => &CpuOp { name: "LDD", addr_mode: Extended, cycles: 6 },
        0xFD => &CpuOp { name: "STD", addr_mode: Extended, cycles: 6 },
        0xFE => &CpuOp { name: "LDU", addr_mode: Extended, cycles: 6 },
        0xFF => &CpuOp { name: "STU", addr_mode: Extended, cycles: 6 },

        _ => return None,
    })
}

fn lookup_page1(opcode: u8) -> Option<&'static CpuOp> {
    use AddressingMode::*;
    Some(match opcode {
        // Long branches (base cycles include the prefix byte)
        0x21 => &CpuOp { name: "LBRN", addr_mode: Relative, cycles: 5 },
        0x22 => &CpuOp { name: "LBHI", addr_mode: Relative, cycles: 5 },
        0x23 => &CpuOp { name: "LBLS", addr_mode: Relative, cycles: 5 },
        0x24 => &CpuOp { name: "LBCC", addr_mode: Relative, cycles: 5 },
        0x25 => &CpuOp { name: "LBCS", addr_mode: Relative, cycles: 5 },
        0x26 => &CpuOp { name: "LBNE", addr_mode: Relative, cycles: 5 },
        0x27 => &CpuOp { name: "LBEQ", addr_mode: Relative, cycles: 5 },
        0x28 => &CpuOp { name: "LBVC", addr_mode: Relative, cycles: 5 },
        0x29 => &CpuOp { name: "LBVS", addr_mode: Relative, cycles: 5 },
        0x2A => &CpuOp { name: "LBPL", addr_mode: Relative, cycles: 5 },
        0x2B => &CpuOp { name: "LBMI", addr_mode: Relative, cycles: 5 },
        0x2C => &CpuOp { name: "LBGE", addr_mode: Relative, cycles: 5 },
        0x2D => &CpuOp { name: "LBLT", addr_mode: Relative, cycles: 5 },
        0x2E => &CpuOp { name: "LBGT", addr_mode: Relative, cycles: 5 },
        0x2F => &CpuOp { name: "LBLE", addr_mode: Relative, cycles: 5 },

        // CMPD
        0x83 => &CpuOp { name: "CMPD", addr_mode: Immediate, cycles: 5 },
        0x93 => &CpuOp { name: "CMPD", addr_mode: Direct, cycles: 7 },
        0xA3 => &CpuOp { name: "CMPD", addr_mode: Indexed, cycles: 7 },
        0xB3 => &CpuOp { name: "CMPD", addr_mode: Extended, cycles: 8 },

        // CMPY
        0x8C => &CpuOp { name: "CMPY", addr_mode: Immediate, cycles: 5 },
        0x9C => &CpuOp { name: "CMPY", addr_mode: Direct, cycles: 7 },
        0xAC => &CpuOp { name: "CMPY", addr_mode: Indexed, cycles: 7 },
        0xBC => &CpuOp { name: "CMPY", addr_mode: Extended, cycles: 8 },

        // LDY / STY
        0x8E => &CpuOp { name: "LDY", addr_mode: Immediate, cycles: 4 },
        0x9E => &CpuOp { name: "LDY", addr_mode: Direct, cycles: 6 },
        0xAE => &CpuOp { name: "LDY", addr_mode: Indexed, cycles: 6 },
        0xBE => &CpuOp { name: "LDY", addr_mode: Extended, cycles: 7 },
        0x9F => &CpuOp { name: "STY", addr_mode: Direct, cycles: 6 },
        0xAF => &CpuOp { name: "STY", addr_mode: Indexed, cycles: 6 },
        0xBF => &CpuOp { name: "STY", addr_mode: Extended, cycles: 7 },

        // LDS / STS
        0xCE => &CpuOp { name: "LDS", addr_mode: Immediate, cycles: 4 },
        0xDE => &CpuOp { name: "LDS", addr_mode: Direct, cycles: 6 },
        0xEE => &CpuOp { name: "LDS", addr_mode: Indexed, cycles: 6 },
        0xFE => &CpuOp { name: "LDS", addr_mode: Extended, cycles: 7 },
        0xDF => &CpuOp { name: "STS", addr_mode: Direct, cycles: 6 },
        0xEF => &CpuOp { name: "STS", addr_mode: Indexed, cycles: 6 },
        0xFF => &CpuOp { name: "STS", addr_mode: Extended, cycles: 7 },

        _ => return None,
    })
}

fn lookup_page2(opcode: u8) -> Option<&'static CpuOp> {
    use AddressingMode::*;
    Some(match opcode {
        // CMPU
        0x83 => &CpuOp { name: "CMPU", addr_mode: Immediate, cycles: 5 },
        0x93 => &CpuOp { name: "CMPU", addr_mode: Direct, cycles: 7 },
        0xA3 => &CpuOp { name: "CMPU", addr_mode: Indexed, cycles: 7 },
        0xB3 => &CpuOp { name: "CMPU", addr_mode: Extended, cycles: 8 },

        // CMPS
        0x8C => &CpuOp { name: "CMPS", addr_mode: Immediate, cycles: 5 },
        0x9C => &CpuOp { name: "CMPS", addr_mode: Direct, cycles: 7 },
        0xAC => &CpuOp { name: "CMPS", addr_mode: Indexed, cycles: 7 },
        0xBC => &CpuOp { name: "CMPS", addr_mode: Extended, cycles: 8 },

        _ => return None,
    })
}
