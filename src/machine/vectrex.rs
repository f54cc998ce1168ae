//! The Vectrex machine: CPU + board, frame loop, host API.
//!
//! The board owns everything the CPU sees over the bus (RAM, ROMs, VIA,
//! PSG, controller state) so that one instruction can borrow the CPU and
//! the bus independently. The machine wraps both and owns the frame
//! budget: each `frame_update(dt)` runs `dt x 1.5 MHz` cycles of CPU time,
//! feeding every instruction's cycle count to the VIA and PSG before the
//! next fetch.

use std::fmt;
use std::path::Path;

use log::info;

use crate::core::Bus;
use crate::cpu::m6809::{CpuFault, M6809};
use crate::cpu::state::M6809State;
use crate::device::ay8912::{Ay8912, BusMode};
use crate::device::via6522::{self, Line, Via6522, ViaFault};
use crate::machine::rom::{self, RomLoadError};

/// Main CPU clock.
pub const CPU_HZ: u64 = via6522::CLOCK_HZ as u64;

/// Controller state as sampled by the BIOS through the PSG and the VIA
/// comparator.
#[derive(Debug, Default, Clone, Copy)]
pub struct JoystickInput {
    /// Button mask, 1 = pressed (inverted onto the PSG port).
    pub buttons: u8,
    /// Signed analog axes, centered at 0.
    pub x: i8,
    pub y: i8,
}

/// Everything reachable over the CPU bus.
pub struct VectrexBoard {
    cart: [u8; rom::CART_MAX_SIZE],
    ram: [u8; 0x400],
    bios: [u8; rom::BIOS_SIZE],
    pub via: Via6522,
    pub psg: Ay8912,
    input: JoystickInput,
}

impl VectrexBoard {
    fn new() -> Self {
        Self {
            cart: [0; rom::CART_MAX_SIZE],
            ram: [0; 0x400],
            bios: [0; rom::BIOS_SIZE],
            via: Via6522::new(),
            psg: Ay8912::new(),
            input: JoystickInput::default(),
        }
    }

    /// Propagate the VIA port lines to the PSG bus after a VIA write.
    ///
    /// Port A is the 8-bit DA bus; port B bit 4 is BDIR and bit 3 is BC1.
    /// When the PSG enters Read mode it drives DA back onto the VIA's
    /// port A input pins.
    fn sync_psg_lines(&mut self) {
        let port_b = self.via.port_b_output();
        self.psg.write_da(self.via.port_a_output());
        self.psg
            .set_bus_control(port_b & 0x10 != 0, port_b & 0x08 != 0);
        if self.psg.mode() == BusMode::Read {
            self.via.set_port_a_input(self.psg.read_da());
        }
    }

    /// Analog comparator feeding VIA port B bit 5: the MUX-selected
    /// joystick axis against the signed DAC level.
    fn compare_joystick(&self) -> bool {
        let sel = (self.via.port_b_output() >> 1) & 0x03;
        let axis = match sel {
            0 => self.input.x,
            1 => self.input.y,
            _ => 0,
        };
        let dac = self.via.port_a_output() as i16 - 128;
        axis as i16 > dac
    }
}

impl Bus for VectrexBoard {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM
            0x0000..=0x7FFF => self.cart[addr as usize],
            // 1 KiB RAM, mirrored
            0xC800..=0xCFFF => self.ram[(addr & 0x03FF) as usize],
            // VIA registers, mirrored
            0xD000..=0xD7FF => {
                let index = (addr & 0x000F) as u8;
                if index == 0 {
                    let compare = self.compare_joystick();
                    self.via.set_compare_input(compare);
                }
                self.via.read(index)
            }
            // BIOS ROM
            0xE000..=0xFFFF => self.bios[(addr - 0xE000) as usize],
            _ => {
                log::debug!("read from unmapped address ${addr:04X}");
                0
            }
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x7FFF => { /* cartridge ROM: discarded */ }
            0xC800..=0xCFFF => self.ram[(addr & 0x03FF) as usize] = data,
            0xD000..=0xD7FF => {
                self.via.write((addr & 0x000F) as u8, data);
                self.sync_psg_lines();
            }
            0xE000..=0xFFFF => { /* BIOS ROM: discarded */ }
            _ => log::debug!("write to unmapped address ${addr:04X}"),
        }
    }
}

/// One frame's observable output: the vector display list and the audio
/// samples accumulated since the previous frame boundary.
pub struct FrameOutput {
    pub lines: Vec<Line>,
    pub samples: Vec<f32>,
}

/// Fatal emulator faults surfaced by `frame_update`.
#[derive(Debug)]
pub enum VectrexError {
    Cpu(CpuFault),
    Via(ViaFault),
}

impl fmt::Display for VectrexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu(fault) => write!(f, "CPU fault: {fault}"),
            Self::Via(fault) => write!(f, "VIA fault: {fault}"),
        }
    }
}

impl std::error::Error for VectrexError {}

impl From<CpuFault> for VectrexError {
    fn from(fault: CpuFault) -> Self {
        Self::Cpu(fault)
    }
}

impl From<ViaFault> for VectrexError {
    fn from(fault: ViaFault) -> Self {
        Self::Via(fault)
    }
}

pub struct Vectrex {
    cpu: M6809,
    board: VectrexBoard,
    clock: u64,
    cycle_carry: f64,
}

impl Vectrex {
    pub fn new() -> Self {
        Self {
            cpu: M6809::new(),
            board: VectrexBoard::new(),
            clock: 0,
            cycle_carry: 0.0,
        }
    }

    // --- Image loading ---

    pub fn load_bios<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RomLoadError> {
        self.board.bios = rom::load_bios(path)?;
        Ok(())
    }

    pub fn load_bios_bytes(&mut self, data: &[u8]) -> Result<(), RomLoadError> {
        self.board.bios = rom::bios_from_bytes(data)?;
        Ok(())
    }

    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RomLoadError> {
        self.board.cart = rom::load_cart(path)?;
        Ok(())
    }

    pub fn load_rom_bytes(&mut self, data: &[u8]) -> Result<(), RomLoadError> {
        self.board.cart = rom::cart_from_bytes(data)?;
        Ok(())
    }

    // --- Lifecycle ---

    /// Power-on/reset: devices back to their initial state, CPU reset with
    /// PC taken from the big-endian reset vector at $FFFE. Loaded ROM
    /// images survive.
    pub fn reset(&mut self) {
        self.board.via = Via6522::new();
        self.board.psg = Ay8912::new();
        self.clock = 0;
        self.cycle_carry = 0.0;

        let pc = self.board.read16(0xFFFE);
        self.cpu.reset(pc);
        info!("reset: PC=${pc:04X}");
    }

    /// Advance the machine by `dt` seconds of emulated time.
    ///
    /// Executes whole instructions until the cycle budget `dt x 1.5 MHz`
    /// is met (the fractional remainder carries into the next frame), and
    /// hands each instruction's cycle count to the VIA and PSG before the
    /// next fetch. Device faults latched during an instruction surface at
    /// its boundary.
    pub fn frame_update(&mut self, dt: f64) -> Result<FrameOutput, VectrexError> {
        let target = dt * CPU_HZ as f64 + self.cycle_carry;
        let budget = target as u64;
        self.cycle_carry = target - budget as f64;

        self.board.psg.set_port_a_input(!self.board.input.buttons);

        let mut executed: u64 = 0;
        while executed < budget {
            let cycles = self.cpu.execute_one(&mut self.board)?;
            self.board.via.update(cycles);
            self.board.psg.update(cycles);
            if let Some(fault) = self.board.via.take_fault() {
                return Err(fault.into());
            }
            executed += cycles as u64;
        }
        self.clock += executed;

        Ok(FrameOutput {
            lines: self.board.via.take_lines(),
            samples: self.board.psg.drain_audio(),
        })
    }

    // --- Controller input ---

    pub fn set_buttons(&mut self, mask: u8) {
        self.board.input.buttons = mask;
        self.board.psg.set_port_a_input(!mask);
    }

    pub fn set_analog(&mut self, x: i8, y: i8) {
        self.board.input.x = x;
        self.board.input.y = y;
    }

    // --- Introspection ---

    pub fn cpu_state(&self) -> M6809State {
        self.cpu.snapshot()
    }

    pub fn cpu(&self) -> &M6809 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut M6809 {
        &mut self.cpu
    }

    pub fn via(&self) -> &Via6522 {
        &self.board.via
    }

    pub fn via_mut(&mut self) -> &mut Via6522 {
        &mut self.board.via
    }

    pub fn psg(&self) -> &Ay8912 {
        &self.board.psg
    }

    pub fn psg_mut(&mut self) -> &mut Ay8912 {
        &mut self.board.psg
    }

    /// Total cycles executed since the last reset.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Read a byte through the CPU's view of the address space.
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.board.read(addr)
    }

    /// Write a byte through the CPU's view of the address space (ROM
    /// regions stay read-only).
    pub fn poke(&mut self, addr: u16, data: u8) {
        self.board.write(addr, data);
    }
}

impl Default for Vectrex {
    fn default() -> Self {
        Self::new()
    }
}
