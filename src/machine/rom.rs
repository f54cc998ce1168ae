//! BIOS and cartridge image loading.
//!
//! Both are raw byte streams: the BIOS fills the fixed 8 KiB region at
//! $E000-$FFFF, cartridges occupy up to 32 KiB from $0000. No headers, no
//! checksums.

use std::fmt;
use std::path::Path;

/// BIOS region size ($E000-$FFFF).
pub const BIOS_SIZE: usize = 0x2000;

/// Largest cartridge the address decoder can map ($0000-$7FFF).
pub const CART_MAX_SIZE: usize = 0x8000;

/// Errors from loading a BIOS or cartridge image.
#[derive(Debug)]
pub enum RomLoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// BIOS image is not exactly the size of its ROM region.
    BiosSizeMismatch { expected: usize, actual: usize },

    /// Cartridge image exceeds the mappable region.
    CartTooLarge { max: usize, actual: usize },
}

impl fmt::Display for RomLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::BiosSizeMismatch { expected, actual } => {
                write!(f, "BIOS image: expected {expected} bytes, got {actual}")
            }
            Self::CartTooLarge { max, actual } => {
                write!(f, "cartridge image: {actual} bytes exceeds the {max}-byte region")
            }
        }
    }
}

impl std::error::Error for RomLoadError {}

impl From<std::io::Error> for RomLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Validate and copy a BIOS image.
pub fn bios_from_bytes(data: &[u8]) -> Result<[u8; BIOS_SIZE], RomLoadError> {
    if data.len() != BIOS_SIZE {
        return Err(RomLoadError::BiosSizeMismatch {
            expected: BIOS_SIZE,
            actual: data.len(),
        });
    }
    let mut image = [0u8; BIOS_SIZE];
    image.copy_from_slice(data);
    Ok(image)
}

/// Read and validate a BIOS image from disk.
pub fn load_bios<P: AsRef<Path>>(path: P) -> Result<[u8; BIOS_SIZE], RomLoadError> {
    let data = std::fs::read(path)?;
    bios_from_bytes(&data)
}

/// Validate a cartridge image and return it zero-padded to the full
/// region.
pub fn cart_from_bytes(data: &[u8]) -> Result<[u8; CART_MAX_SIZE], RomLoadError> {
    if data.len() > CART_MAX_SIZE {
        return Err(RomLoadError::CartTooLarge {
            max: CART_MAX_SIZE,
            actual: data.len(),
        });
    }
    let mut image = [0u8; CART_MAX_SIZE];
    image[..data.len()].copy_from_slice(data);
    Ok(image)
}

/// Read and validate a cartridge image from disk.
pub fn load_cart<P: AsRef<Path>>(path: P) -> Result<[u8; CART_MAX_SIZE], RomLoadError> {
    let data = std::fs::read(path)?;
    cart_from_bytes(&data)
}
