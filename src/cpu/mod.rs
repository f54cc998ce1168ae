pub mod m6809;
pub mod state;

pub use m6809::M6809;
