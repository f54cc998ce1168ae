pub mod ay8912;
pub mod via6522;

pub use ay8912::Ay8912;
pub use via6522::Via6522;
