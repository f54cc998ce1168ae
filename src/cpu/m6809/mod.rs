mod alu;
mod branch;
mod load_store;
mod optable;
mod stack;
mod transfer;

use std::fmt;

use crate::core::Bus;
use crate::cpu::state::M6809State;

pub use optable::{AddressingMode, CpuOp};

#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum CcFlag {
    C = 0x01, // Carry
    V = 0x02, // Overflow
    Z = 0x04, // Zero
    N = 0x08, // Negative
    I = 0x10, // IRQ mask
    H = 0x20, // Half carry
    F = 0x40, // FIRQ mask
    E = 0x80, // Entire
}

/// Fatal CPU faults. The Vectrex BIOS and commercial ROMs use a closed
/// instruction set, so hitting one of these means a corrupt ROM or an
/// emulator bug; execution cannot continue past the faulting instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuFault {
    /// No table entry for this (page, opcode) pair.
    IllegalOpcode { page: u8, opcode: u8, addr: u16 },
    /// Indexed post-byte selected one of the undefined submodes.
    IllegalIndexedMode { postbyte: u8, addr: u16 },
    /// EXG/TFR post-byte with mismatched widths or an out-of-range index.
    IllegalTransfer { postbyte: u8, addr: u16 },
}

impl fmt::Display for CpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalOpcode { page, opcode, addr } => {
                write!(f, "illegal opcode ${opcode:02X} (page {page}) at ${addr:04X}")
            }
            Self::IllegalIndexedMode { postbyte, addr } => {
                write!(f, "illegal indexed post-byte ${postbyte:02X} at ${addr:04X}")
            }
            Self::IllegalTransfer { postbyte, addr } => {
                write!(f, "illegal EXG/TFR post-byte ${postbyte:02X} at ${addr:04X}")
            }
        }
    }
}

impl std::error::Error for CpuFault {}

/// Motorola 6809 CPU.
///
/// Executes one whole instruction per `execute_one` call and returns the
/// cycle cost, which the machine distributes to the peripherals.
pub struct M6809 {
    // Registers (a, b, dp, x, y, u, s, pc, cc)
    pub a: u8,
    pub b: u8,
    pub dp: u8,
    pub x: u16,
    pub y: u16,
    pub u: u16,
    pub s: u16,
    pub pc: u16,
    pub cc: u8,

    // Cycle cost accumulator for the instruction in flight
    pub(crate) cycles: u32,
}

impl M6809 {
    pub fn new() -> Self {
        Self {
            a: 0,
            b: 0,
            dp: 0,
            x: 0,
            y: 0,
            u: 0,
            s: 0,
            pc: 0,
            cc: 0,
            cycles: 0,
        }
    }

    /// Reset the register file. All registers are zeroed except CC, which
    /// comes up with IRQ and FIRQ masked, and PC, which the caller supplies
    /// (the machine reads it from the reset vector at $FFFE).
    pub fn reset(&mut self, pc: u16) {
        self.a = 0;
        self.b = 0;
        self.dp = 0;
        self.x = 0;
        self.y = 0;
        self.u = 0;
        self.s = 0;
        self.pc = pc;
        self.cc = CcFlag::I as u8 | CcFlag::F as u8;
        self.cycles = 0;
    }

    /// The 16-bit D accumulator is not stored; it is A:B.
    pub fn get_d(&self) -> u16 {
        u16::from_be_bytes([self.a, self.b])
    }

    pub fn set_d(&mut self, val: u16) {
        let bytes = val.to_be_bytes();
        self.a = bytes[0];
        self.b = bytes[1];
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: CcFlag, set: bool) {
        if set {
            self.cc |= flag as u8
        } else {
            self.cc &= !(flag as u8)
        }
    }

    #[inline]
    pub(crate) fn flag(&self, flag: CcFlag) -> bool {
        self.cc & flag as u8 != 0
    }

    pub fn snapshot(&self) -> M6809State {
        M6809State {
            a: self.a,
            b: self.b,
            dp: self.dp,
            x: self.x,
            y: self.y,
            u: self.u,
            s: self.s,
            pc: self.pc,
            cc: self.cc,
        }
    }

    /// Fetch, decode, and fully execute one instruction.
    ///
    /// Opcodes are one or two bytes: $10 and $11 select pages 1 and 2.
    /// The (page, opcode) pair keys into a static table for the addressing
    /// mode and base cycle count; EA resolution, pushes/pulls, and taken
    /// branches add to it. Returns the total cycle cost.
    pub fn execute_one<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<u32, CpuFault> {
        self.cycles = 0;
        let op_addr = self.pc;

        let mut opcode = self.read_pc8(bus);
        let page = match opcode {
            0x10 => {
                opcode = self.read_pc8(bus);
                1
            }
            0x11 => {
                opcode = self.read_pc8(bus);
                2
            }
            _ => 0,
        };

        let op = optable::lookup(page, opcode).ok_or(CpuFault::IllegalOpcode {
            page,
            opcode,
            addr: op_addr,
        })?;
        self.cycles += op.cycles;

        match page {
            0 => self.execute_page0(opcode, op.addr_mode, bus)?,
            1 => self.execute_page1(opcode, op.addr_mode, bus)?,
            _ => self.execute_page2(opcode, op.addr_mode, bus)?,
        }

        Ok(self.cycles)
    }

    fn execute_page0<B: Bus + ?Sized>(
        &mut self,
        opcode: u8,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        match opcode {
            // Misc inherent/immediate
            0x12 => self.op_nop(),
            0x19 => self.op_daa(),
            0x1A => self.op_orcc(bus),
            0x1C => self.op_andcc(bus),
            0x1D => self.op_sex(),
            0x1E => self.op_exg(bus)?,
            0x1F => self.op_tfr(bus)?,
            0x3A => self.op_abx(),
            0x3D => self.op_mul(),

            // Memory unary/shift: direct $00-$0F, indexed $60-$6F, extended $70-$7F
            0x00 | 0x60 | 0x70 => self.op_neg_mem(mode, bus)?,
            0x03 | 0x63 | 0x73 => self.op_com_mem(mode, bus)?,
            0x04 | 0x64 | 0x74 => self.op_lsr_mem(mode, bus)?,
            0x06 | 0x66 | 0x76 => self.op_ror_mem(mode, bus)?,
            0x07 | 0x67 | 0x77 => self.op_asr_mem(mode, bus)?,
            0x08 | 0x68 | 0x78 => self.op_asl_mem(mode, bus)?,
            0x09 | 0x69 | 0x79 => self.op_rol_mem(mode, bus)?,
            0x0A | 0x6A | 0x7A => self.op_dec_mem(mode, bus)?,
            0x0C | 0x6C | 0x7C => self.op_inc_mem(mode, bus)?,
            0x0D | 0x6D | 0x7D => self.op_tst_mem(mode, bus)?,
            0x0E | 0x6E | 0x7E => self.op_jmp(mode, bus)?,
            0x0F | 0x6F | 0x7F => self.op_clr_mem(mode, bus)?,

            // Register unary/shift (A $40-$4F, B $50-$5F)
            0x40 => self.op_nega(),
            0x43 => self.op_coma(),
            0x44 => self.op_lsra(),
            0x46 => self.op_rora(),
            0x47 => self.op_asra(),
            0x48 => self.op_asla(),
            0x49 => self.op_rola(),
            0x4A => self.op_deca(),
            0x4C => self.op_inca(),
            0x4D => self.op_tsta(),
            0x4F => self.op_clra(),
            0x50 => self.op_negb(),
            0x53 => self.op_comb(),
            0x54 => self.op_lsrb(),
            0x56 => self.op_rorb(),
            0x57 => self.op_asrb(),
            0x58 => self.op_aslb(),
            0x59 => self.op_rolb(),
            0x5A => self.op_decb(),
            0x5C => self.op_incb(),
            0x5D => self.op_tstb(),
            0x5F => self.op_clrb(),

            // LEA
            0x30 => self.op_leax(bus)?,
            0x31 => self.op_leay(bus)?,
            0x32 => self.op_leas(bus)?,
            0x33 => self.op_leau(bus)?,

            // Stack
            0x34 => self.op_pshs(bus),
            0x35 => self.op_puls(bus),
            0x36 => self.op_pshu(bus),
            0x37 => self.op_pulu(bus),

            // Subroutine / return / long branch always
            0x16 => self.op_lbra(bus),
            0x17 => self.op_lbsr(bus),
            0x39 => self.op_rts(bus),
            0x8D => self.op_bsr(bus),
            0x9D | 0xAD | 0xBD => self.op_jsr(mode, bus)?,

            // Short branches
            0x20 => self.op_bra(bus),
            0x21 => self.op_brn(bus),
            0x22 => self.op_bhi(bus),
            0x23 => self.op_bls(bus),
            0x24 => self.op_bcc(bus),
            0x25 => self.op_bcs(bus),
            0x26 => self.op_bne(bus),
            0x27 => self.op_beq(bus),
            0x28 => self.op_bvc(bus),
            0x29 => self.op_bvs(bus),
            0x2A => self.op_bpl(bus),
            0x2B => self.op_bmi(bus),
            0x2C => self.op_bge(bus),
            0x2D => self.op_blt(bus),
            0x2E => self.op_bgt(bus),
            0x2F => self.op_ble(bus),

            // ALU / load / store, accumulator A column
            0x80 | 0x90 | 0xA0 | 0xB0 => self.op_suba(mode, bus)?,
            0x81 | 0x91 | 0xA1 | 0xB1 => self.op_cmpa(mode, bus)?,
            0x82 | 0x92 | 0xA2 | 0xB2 => self.op_sbca(mode, bus)?,
            0x83 | 0x93 | 0xA3 | 0xB3 => self.op_subd(mode, bus)?,
            0x84 | 0x94 | 0xA4 | 0xB4 => self.op_anda(mode, bus)?,
            0x85 | 0x95 | 0xA5 | 0xB5 => self.op_bita(mode, bus)?,
            0x86 | 0x96 | 0xA6 | 0xB6 => self.op_lda(mode, bus)?,
            0x97 | 0xA7 | 0xB7 => self.op_sta(mode, bus)?,
            0x88 | 0x98 | 0xA8 | 0xB8 => self.op_eora(mode, bus)?,
            0x89 | 0x99 | 0xA9 | 0xB9 => self.op_adca(mode, bus)?,
            0x8A | 0x9A | 0xAA | 0xBA => self.op_ora(mode, bus)?,
            0x8B | 0x9B | 0xAB | 0xBB => self.op_adda(mode, bus)?,
            0x8C | 0x9C | 0xAC | 0xBC => self.op_cmpx(mode, bus)?,
            0x8E | 0x9E | 0xAE | 0xBE => self.op_ldx(mode, bus)?,
            0x9F | 0xAF | 0xBF => self.op_stx(mode, bus)?,

            // ALU / load / store, accumulator B column plus D and U
            0xC0 | 0xD0 | 0xE0 | 0xF0 => self.op_subb(mode, bus)?,
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.op_cmpb(mode, bus)?,
            0xC2 | 0xD2 | 0xE2 | 0xF2 => self.op_sbcb(mode, bus)?,
            0xC3 | 0xD3 | 0xE3 | 0xF3 => self.op_addd(mode, bus)?,
            0xC4 | 0xD4 | 0xE4 | 0xF4 => self.op_andb(mode, bus)?,
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.op_bitb(mode, bus)?,
            0xC6 | 0xD6 | 0xE6 | 0xF6 => self.op_ldb(mode, bus)?,
            0xD7 | 0xE7 | 0xF7 => self.op_stb(mode, bus)?,
            0xC8 | 0xD8 | 0xE8 | 0xF8 => self.op_eorb(mode, bus)?,
            0xC9 | 0xD9 | 0xE9 | 0xF9 => self.op_adcb(mode, bus)?,
            0xCA | 0xDA | 0xEA | 0xFA => self.op_orb(mode, bus)?,
            0xCB | 0xDB | 0xEB | 0xFB => self.op_addb(mode, bus)?,
            0xCC | 0xDC | 0xEC | 0xFC => self.op_ldd(mode, bus)?,
            0xDD | 0xED | 0xFD => self.op_std(mode, bus)?,
            0xCE | 0xDE | 0xEE | 0xFE => self.op_ldu(mode, bus)?,
            0xDF | 0xEF | 0xFF => self.op_stu(mode, bus)?,

            _ => {
                return Err(CpuFault::IllegalOpcode {
                    page: 0,
                    opcode,
                    addr: self.pc,
                })
            }
        }
        Ok(())
    }

    fn execute_page1<B: Bus + ?Sized>(
        &mut self,
        opcode: u8,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        match opcode {
            // Long branches
            0x21 => self.op_lbrn(bus),
            0x22 => self.op_lbhi(bus),
            0x23 => self.op_lbls(bus),
            0x24 => self.op_lbcc(bus),
            0x25 => self.op_lbcs(bus),
            0x26 => self.op_lbne(bus),
            0x27 => self.op_lbeq(bus),
            0x28 => self.op_lbvc(bus),
            0x29 => self.op_lbvs(bus),
            0x2A => self.op_lbpl(bus),
            0x2B => self.op_lbmi(bus),
            0x2C => self.op_lbge(bus),
            0x2D => self.op_lblt(bus),
            0x2E => self.op_lbgt(bus),
            0x2F => self.op_lble(bus),

            // CMPD / CMPY
            0x83 | 0x93 | 0xA3 | 0xB3 => self.op_cmpd(mode, bus)?,
            0x8C | 0x9C | 0xAC | 0xBC => self.op_cmpy(mode, bus)?,

            // LDY / STY
            0x8E | 0x9E | 0xAE | 0xBE => self.op_ldy(mode, bus)?,
            0x9F | 0xAF | 0xBF => self.op_sty(mode, bus)?,

            // LDS / STS
            0xCE | 0xDE | 0xEE | 0xFE => self.op_lds(mode, bus)?,
            0xDF | 0xEF | 0xFF => self.op_sts(mode, bus)?,

            _ => {
                return Err(CpuFault::IllegalOpcode {
                    page: 1,
                    opcode,
                    addr: self.pc,
                })
            }
        }
        Ok(())
    }

    fn execute_page2<B: Bus + ?Sized>(
        &mut self,
        opcode: u8,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        match opcode {
            // CMPU / CMPS
            0x83 | 0x93 | 0xA3 | 0xB3 => self.op_cmpu(mode, bus)?,
            0x8C | 0x9C | 0xAC | 0xBC => self.op_cmps(mode, bus)?,

            _ => {
                return Err(CpuFault::IllegalOpcode {
                    page: 2,
                    opcode,
                    addr: self.pc,
                })
            }
        }
        Ok(())
    }
}

impl Default for M6809 {
    fn default() -> Self {
        Self::new()
    }
}
