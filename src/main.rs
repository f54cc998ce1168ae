//! Headless runner.
//!
//! Takes one optional positional argument, the cartridge ROM path; without
//! it the machine boots straight into the BIOS (the built-in Mine Storm on
//! real hardware). The BIOS image path comes from the `VECTREX_BIOS`
//! environment variable, defaulting to `bios.bin`. Runs a bounded batch of
//! 1/60 s frames and prints an output summary. Exits 0 on clean shutdown,
//! nonzero on a load failure or emulator fault.

use std::env;
use std::process::ExitCode;

use log::{error, info};

use vectrex_core::machine::Vectrex;

const FRAME_DT: f64 = 1.0 / 60.0;
const FRAMES: u32 = 3600;

fn main() -> ExitCode {
    env_logger::init();

    let rom_path = env::args().skip(1).find(|arg| !arg.starts_with('-'));
    let bios_path = env::var("VECTREX_BIOS").unwrap_or_else(|_| "bios.bin".to_string());

    let mut vectrex = Vectrex::new();

    if let Err(e) = vectrex.load_bios(&bios_path) {
        error!("failed to load BIOS {bios_path}: {e}");
        return ExitCode::FAILURE;
    }

    match &rom_path {
        Some(path) => {
            if let Err(e) = vectrex.load_rom(path) {
                error!("failed to load rom file {path}: {e}");
                return ExitCode::FAILURE;
            }
            info!("loaded cartridge {path}");
        }
        None => info!("no cartridge given; running the built-in game"),
    }

    vectrex.reset();

    let mut total_lines = 0usize;
    let mut total_samples = 0usize;
    for _ in 0..FRAMES {
        match vectrex.frame_update(FRAME_DT) {
            Ok(frame) => {
                total_lines += frame.lines.len();
                total_samples += frame.samples.len();
            }
            Err(e) => {
                error!("emulator fault: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "ran {FRAMES} frames ({} cycles): {total_lines} line segments, {total_samples} audio samples",
        vectrex.clock()
    );
    ExitCode::SUCCESS
}
