//! Input events

use winit::keyboard::KeyCode;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// J or the left arrow
    Left,
    /// K or the right arrow
    Right,
    /// Any other key
    Other,
}

impl Key {
    pub fn from_key_code(code: KeyCode) -> Self {
        match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::KeyJ | KeyCode::ArrowLeft => Key::Left,
            KeyCode::KeyK | KeyCode::ArrowRight => Key::Right,
            _ => Key::Other,
        }
    }
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the platform asked us to stop
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Non-blocking source of input events
pub trait EventSource {
    /// Next pending event, or `None` if nothing is queued
    fn poll(&mut self) -> Option<InputEvent>;
}
