//! Window and frame-rate settings
//!
//! There are no config files; the defaults come from `consts` and every
//! component receives the settings explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Create the window without decorations
    pub borderless: bool,
    /// Target frame rate
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Paddle Ball".to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            borderless: true,
            fps: FPS,
        }
    }
}

impl Settings {
    /// Settings with a different window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Minimum wall-clock time a frame must take, in whole milliseconds
    pub fn frame_target_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }

    /// Window size as the simulation arena
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Load settings (compile-time defaults; there is no settings file)
    pub fn load() -> Self {
        let settings = Self::default();
        log::debug!(
            "Settings: {}x{} @ {} fps",
            settings.window_width,
            settings.window_height,
            settings.fps
        );
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_target_is_integer_milliseconds() {
        let settings = Settings::default();
        assert_eq!(settings.frame_target_ms(), 16);

        let slow = Settings {
            fps: 30,
            ..Settings::default()
        };
        assert_eq!(slow.frame_target_ms(), 33);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let settings = Settings {
            fps: 0,
            ..Settings::default()
        };
        assert_eq!(settings.frame_target_ms(), 1000);
    }

    #[test]
    fn test_arena_matches_window() {
        let settings = Settings::default();
        assert_eq!(settings.arena(), Vec2::new(800.0, 600.0));
    }
}
