//! Vectrex console emulator core.
//!
//! A cycle-accurate virtual machine built from a Motorola 6809 CPU
//! interpreter, a memory bus with memory-mapped peripherals, a VIA 6522
//! driving the vector-beam analog front end, and an AY-3-8912 programmable
//! sound generator. The host feeds it wall-clock time and controller state;
//! it produces vector line segments and mono audio samples.

pub mod core;
pub mod cpu;
pub mod device;
pub mod machine;

pub mod prelude {
    pub use crate::core::Bus;
    pub use crate::cpu::m6809::{CcFlag, CpuFault, M6809};
    pub use crate::device::ay8912::Ay8912;
    pub use crate::device::via6522::{Line, Via6522, ViaFault};
    pub use crate::machine::vectrex::{FrameOutput, Vectrex, VectrexError};
}
