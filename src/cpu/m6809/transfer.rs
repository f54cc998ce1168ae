use crate::core::Bus;
use crate::cpu::m6809::{CpuFault, M6809};

impl M6809 {
    // EXG/TFR post-byte: high nibble = source, low nibble = destination.
    // Bit 3 of each nibble selects the width and both must agree.
    // 8-bit indices 0-3 = {A, B, CC, DP}; 16-bit indices 0-5 =
    // {D, X, Y, U, S, PC}.

    fn reg8(&self, id: u8) -> u8 {
        match id {
            0 => self.a,
            1 => self.b,
            2 => self.cc,
            _ => self.dp,
        }
    }

    fn set_reg8(&mut self, id: u8, val: u8) {
        match id {
            0 => self.a = val,
            1 => self.b = val,
            2 => self.cc = val,
            _ => self.dp = val,
        }
    }

    fn reg16(&self, id: u8) -> u16 {
        match id {
            0 => self.get_d(),
            1 => self.x,
            2 => self.y,
            3 => self.u,
            4 => self.s,
            _ => self.pc,
        }
    }

    fn set_reg16(&mut self, id: u8, val: u16) {
        match id {
            0 => self.set_d(val),
            1 => self.x = val,
            2 => self.y = val,
            3 => self.u = val,
            4 => self.s = val,
            _ => self.pc = val,
        }
    }

    fn exchange_or_transfer<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        exchange: bool,
    ) -> Result<(), CpuFault> {
        let postbyte_addr = self.pc;
        let postbyte = self.read_pc8(bus);

        let fault = CpuFault::IllegalTransfer {
            postbyte,
            addr: postbyte_addr,
        };

        // Same width on both sides only
        if (postbyte & 0x08 != 0) != (postbyte & 0x80 != 0) {
            return Err(fault);
        }

        let src = (postbyte >> 4) & 0x07;
        let dst = postbyte & 0x07;

        if postbyte & 0x08 != 0 {
            if src > 3 || dst > 3 {
                return Err(fault);
            }
            let src_val = self.reg8(src);
            if exchange {
                let dst_val = self.reg8(dst);
                self.set_reg8(src, dst_val);
            }
            self.set_reg8(dst, src_val);
        } else {
            if src > 5 || dst > 5 {
                return Err(fault);
            }
            let src_val = self.reg16(src);
            if exchange {
                let dst_val = self.reg16(dst);
                self.set_reg16(src, dst_val);
            }
            self.set_reg16(dst, src_val);
        }

        Ok(())
    }

    /// EXG swaps two same-width registers. No flags (unless CC is named).
    pub(crate) fn op_exg<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.exchange_or_transfer(bus, true)
    }

    /// TFR copies source into destination.
    pub(crate) fn op_tfr<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.exchange_or_transfer(bus, false)
    }
}
