pub mod cpu;
pub mod machine;

pub use machine::Nes;

pub const SCREEN_WIDTH: usize = 256;
pub const SCREEN_HEIGHT: usize = 240;
