/// Host keyboard keys understood by the frontends.
///
/// Only the keys that some console binding or host control actually uses
/// are listed; everything else maps to `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Z,
    X,
    LShift,
    Return,
    P,
    S,
    Escape,
    None,
}
