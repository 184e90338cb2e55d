//! Error types for startup failures.

use std::error::Error;
use std::fmt;

/// Everything that can stop the game from starting.
///
/// Both kinds are detected synchronously before the loop is entered.
/// Nothing inside the loop produces one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The event loop or the window could not be created
    WindowInit(String),
    /// The GPU surface, adapter, device or pipeline could not be created
    RendererInit(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameError::WindowInit(ref s) => write!(f, "Error creating window: {}", s),
            GameError::RendererInit(ref s) => write!(f, "Error creating renderer: {}", s),
        }
    }
}

impl Error for GameError {}

impl From<winit::error::EventLoopError> for GameError {
    fn from(e: winit::error::EventLoopError) -> GameError {
        GameError::WindowInit(e.to_string())
    }
}

impl From<winit::error::OsError> for GameError {
    fn from(e: winit::error::OsError) -> GameError {
        GameError::WindowInit(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for GameError {
    fn from(e: wgpu::CreateSurfaceError) -> GameError {
        GameError::RendererInit(e.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for GameError {
    fn from(e: wgpu::RequestAdapterError) -> GameError {
        GameError::RendererInit(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for GameError {
    fn from(e: wgpu::RequestDeviceError) -> GameError {
        GameError::RendererInit(e.to_string())
    }
}

/// A convenient result type consisting of a return type and a `GameError`
pub type GameResult<T = ()> = Result<T, GameError>;
