pub mod app;
pub mod audio;
pub mod input;
pub mod key;
pub mod session;
pub mod trace;

pub use input::Buttons;
pub use session::{ConsoleSession, Fault};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Store this colour at pixel `index` of an RGB24 buffer.
    #[inline]
    pub fn write_rgb24(&self, buffer: &mut [u8], index: usize) {
        let base = index * 3;
        if let Some(px) = buffer.get_mut(base..base + 3) {
            px[0] = self.r;
            px[1] = self.g;
            px[2] = self.b;
        }
    }
}
