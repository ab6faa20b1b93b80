//! Logical keys and the input/clock services the shell reads each frame

use game_core::PaddleKeys;
use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
    Backspace,
    Enter,
    Num1,
    Num2,
    Num3,
    Quit,
}

pub const PAUSE_KEY: Key = Key::Escape;
pub const ABORT_KEY: Key = Key::Backspace;
pub const REPLAY_KEY: Key = Key::Enter;
pub const QUIT_KEY: Key = Key::Quit;

/// Current keyboard and pointer state
pub trait InputProvider {
    /// Key is being held this frame
    fn is_key_down(&self, key: Key) -> bool;

    /// Key went down since the previous frame
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Pointer location in playfield units, if known
    fn pointer_position(&self) -> Option<Vec2>;

    /// Primary button went down since the previous frame
    fn is_pointer_pressed(&self) -> bool;
}

/// Monotonic time source
pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;
}

/// Snapshot the four paddle keys
pub fn paddle_keys(input: &dyn InputProvider) -> PaddleKeys {
    PaddleKeys {
        w: input.is_key_down(Key::W),
        s: input.is_key_down(Key::S),
        up: input.is_key_down(Key::Up),
        down: input.is_key_down(Key::Down),
    }
}
