use crate::core::Bus;
use crate::cpu::m6809::{AddressingMode, CcFlag, CpuFault, M6809};

impl M6809 {
    // --- 8-bit add/subtract core ---

    /// a + b + carry_in with full flag computation.
    ///
    /// Overflow is the sign bit of `(a ^ r) & (b ^ r)`. Half-carry is
    /// computed from the low nibbles of the operands (ADDA/ADDB/ADC only;
    /// 16-bit adds never touch H).
    #[inline]
    fn add8(&mut self, a: u8, b: u8, carry_in: u8, update_half: bool) -> u8 {
        let r16 = a as u16 + b as u16 + carry_in as u16;
        let result = r16 as u8;
        if update_half {
            self.set_flag(CcFlag::H, (a & 0x0F) + (b & 0x0F) > 0x0F);
        }
        let overflow = (a ^ result) & (b ^ result) & 0x80 != 0;
        self.set_flags_arithmetic(result, overflow, r16 > 0xFF);
        result
    }

    /// a - b, computed as a + !b + 1; the resulting carry is inverted so
    /// that C = 1 exactly when an unsigned borrow occurred (a < b).
    #[inline]
    fn sub8(&mut self, a: u8, b: u8) -> u8 {
        let result = self.add8(a, !b, 1, false);
        let carry = self.flag(CcFlag::C);
        self.set_flag(CcFlag::C, !carry);
        result
    }

    /// a - b - borrow, same carry convention as `sub8`.
    #[inline]
    fn sbc8(&mut self, a: u8, b: u8) -> u8 {
        let borrow_in = if self.flag(CcFlag::C) { 0 } else { 1 };
        let result = self.add8(a, !b, borrow_in, false);
        let carry = self.flag(CcFlag::C);
        self.set_flag(CcFlag::C, !carry);
        result
    }

    // --- ADD / ADC ---

    pub(crate) fn op_adda<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a = self.add8(self.a, operand, 0, true);
        Ok(())
    }

    pub(crate) fn op_addb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b = self.add8(self.b, operand, 0, true);
        Ok(())
    }

    pub(crate) fn op_adca<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        let carry_in = self.flag(CcFlag::C) as u8;
        self.a = self.add8(self.a, operand, carry_in, true);
        Ok(())
    }

    pub(crate) fn op_adcb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        let carry_in = self.flag(CcFlag::C) as u8;
        self.b = self.add8(self.b, operand, carry_in, true);
        Ok(())
    }

    // --- SUB / SBC / CMP ---

    pub(crate) fn op_suba<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a = self.sub8(self.a, operand);
        Ok(())
    }

    pub(crate) fn op_subb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b = self.sub8(self.b, operand);
        Ok(())
    }

    pub(crate) fn op_sbca<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a = self.sbc8(self.a, operand);
        Ok(())
    }

    pub(crate) fn op_sbcb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b = self.sbc8(self.b, operand);
        Ok(())
    }

    /// CMP subtracts to update CC and discards the result.
    pub(crate) fn op_cmpa<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.sub8(self.a, operand);
        Ok(())
    }

    pub(crate) fn op_cmpb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.sub8(self.b, operand);
        Ok(())
    }

    // --- Bitwise ---

    pub(crate) fn op_anda<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a &= operand;
        let result = self.a;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_andb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b &= operand;
        let result = self.b;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_ora<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a |= operand;
        let result = self.a;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_orb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b |= operand;
        let result = self.b;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_eora<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.a ^= operand;
        let result = self.a;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_eorb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        self.b ^= operand;
        let result = self.b;
        self.set_flags_logical(result);
        Ok(())
    }

    /// BIT tests reg AND operand without storing the result.
    pub(crate) fn op_bita<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        let result = self.a & operand;
        self.set_flags_logical(result);
        Ok(())
    }

    pub(crate) fn op_bitb<B: Bus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        bus: &mut B,
    ) -> Result<(), CpuFault> {
        let operand = self.read_operand8(mode, bus)?;
        let result = self.b & operand;
        self.set_flags_logical(result);
        Ok(())
    }

    // --- CC-register immediates ---

    /// ORCC merges bits into CC directly; the usual post-op flag update is
    /// skipped (the operand IS the flag update).
    pub(crate) fn op_orcc<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let operand = self.read_pc8(bus);
        self.cc |= operand;
    }

    /// ANDCC clears bits in CC directly, e.g. ANDCC #$FE clears carry.
    pub(crate) fn op_andcc<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let operand = self.read_pc8(bus);
        self.cc &= operand;
    }

    // --- MUL ---

    /// D = A * B (unsigned). Z from the 16-bit result, C = bit 7 of B.
    pub(crate) fn op_mul(&mut self) {
        let result = (self.a as u16) * (self.b as u16);
        self.set_d(result);
        self.set_flag(CcFlag::Z, result == 0);
        self.set_flag(CcFlag::C, self.b & 0x80 != 0);
    }
}
