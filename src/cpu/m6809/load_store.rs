use crate::core::Bus;
use crate::cpu::m6809::{AddressingMode, CcFlag, CpuFault, M6809};

impl M6809 {
    // --- 8-bit loads/stores ---

    /// LDA: N from bit 7, Z on zero, V cleared.
    pub(crate) fn op_lda<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand8(mode, bus)?;
        self.set_flags_logical(value);
        self.a = value;
        Ok(())
    }

    pub(crate) fn op_ldb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand8(mode, bus)?;
        self.set_flags_logical(value);
        self.b = value;
        Ok(())
    }

    pub(crate) fn op_sta<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let ea = self.read_ea(mode, bus)?;
        bus.write(ea, self.a);
        let value = self.a;
        self.set_flags_logical(value);
        Ok(())
    }

    pub(crate) fn op_stb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let ea = self.read_ea(mode, bus)?;
        bus.write(ea, self.b);
        let value = self.b;
        self.set_flags_logical(value);
        Ok(())
    }

    // --- 16-bit loads (big-endian) ---

    pub(crate) fn op_ldd<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand16(mode, bus)?;
        self.set_flags_logical16(value);
        self.set_d(value);
        Ok(())
    }

    pub(crate) fn op_ldx<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand16(mode, bus)?;
        self.set_flags_logical16(value);
        self.x = value;
        Ok(())
    }

    pub(crate) fn op_ldy<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand16(mode, bus)?;
        self.set_flags_logical16(value);
        self.y = value;
        Ok(())
    }

    pub(crate) fn op_ldu<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand16(mode, bus)?;
        self.set_flags_logical16(value);
        self.u = value;
        Ok(())
    }

    pub(crate) fn op_lds<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let value = self.read_operand16(mode, bus)?;
        self.set_flags_logical16(value);
        self.s = value;
        Ok(())
    }

    // --- 16-bit stores (big-endian) ---

    fn st16<B: Bus + ?Sized>(
        &mut self,
        value: u16,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let ea = self.read_ea(mode, bus)?;
        bus.write16(ea, value);
        self.set_flags_logical16(value);
        Ok(())
    }

    pub(crate) fn op_std<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        self.st16(self.get_d(), mode, bus)
    }

    pub(crate) fn op_stx<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        self.st16(self.x, mode, bus)
    }

    pub(crate) fn op_sty<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        self.st16(self.y, mode, bus)
    }

    pub(crate) fn op_stu<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        self.st16(self.u, mode, bus)
    }

    pub(crate) fn op_sts<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        self.st16(self.s, mode, bus)
    }

    // --- Load effective address ---

    /// LEAX/LEAY update Z from the result; LEAS/LEAU touch no flags.
    pub(crate) fn op_leax<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.x = self.read_indexed_ea(bus)?;
        self.set_flag(CcFlag::Z, self.x == 0);
        Ok(())
    }

    pub(crate) fn op_leay<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.y = self.read_indexed_ea(bus)?;
        self.set_flag(CcFlag::Z, self.y == 0);
        Ok(())
    }

    pub(crate) fn op_leas<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.s = self.read_indexed_ea(bus)?;
        Ok(())
    }

    pub(crate) fn op_leau<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuFault> {
        self.u = self.read_indexed_ea(bus)?;
        Ok(())
    }
}
