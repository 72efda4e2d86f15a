pub mod cpu;
pub mod machine;

pub use machine::GameBoy;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
