use crate::audio::AudioConsumer;
use crate::key::Key;

/// Interface the SDL frontend drives once per host frame.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    /// Raw gamepad button index from the host joystick API.
    fn handle_gamepad_button(&mut self, _button: u8, _is_down: bool) {}
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    /// Consumer end of the audio ring, taken once by the frontend.
    fn audio_consumer(&mut self) -> Option<AudioConsumer> {
        None
    }

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
