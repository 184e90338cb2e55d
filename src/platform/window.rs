//! Native window and event loop
//!
//! winit normally owns the main loop. Here it is pumped from our own loop
//! instead, one non-blocking pump whenever the event queue runs dry, so the
//! game keeps its own input → update → render order.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::input::{EventSource, InputEvent, Key};
use crate::error::{GameError, GameResult};
use crate::settings::Settings;

/// Pumps allowed before giving up on the window appearing
const MAX_STARTUP_PUMPS: u32 = 100;

/// Receives winit callbacks and queues them as `InputEvent`s
struct WindowHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    pending: VecDeque<InputEvent>,
    error: Option<GameError>,
}

impl WindowHandler {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            pending: VecDeque::new(),
            error: None,
        }
    }
}

/// Place the window in the middle of the monitor it opened on
fn center_window(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();

    let x = origin.x + (screen.width as i32 - outer.width as i32) / 2;
    let y = origin.y + (screen.height as i32 - outer.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                center_window(&window);
                let size = window.inner_size();
                log::info!("Window created: {}x{}", size.width, size.height);
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                log::error!("Window creation failed: {}", e);
                self.error = Some(e.into());
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.pending.push_back(InputEvent::Quit);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = Key::from_key_code(code);
                    self.pending.push_back(match event.state {
                        ElementState::Pressed => InputEvent::KeyDown(key),
                        ElementState::Released => InputEvent::KeyUp(key),
                    });
                }
            }
            _ => {}
        }
    }
}

/// The native window plus the event loop feeding it
pub struct Platform {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
    window: Arc<Window>,
}

impl Platform {
    /// Create the event loop and a centered, fixed-size window
    pub fn open(settings: &Settings) -> GameResult<Self> {
        let mut event_loop = EventLoop::new()?;

        let attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(
                settings.window_width,
                settings.window_height,
            ))
            .with_decorations(!settings.borderless)
            .with_resizable(false);
        let mut handler = WindowHandler::new(attributes);

        // Desktop backends deliver `resumed` during the first pumps
        let mut pumps = 0;
        while handler.window.is_none() && handler.error.is_none() {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(Duration::ZERO), &mut handler)
            {
                return Err(GameError::WindowInit(format!(
                    "event loop exited during startup with code {}",
                    code
                )));
            }
            pumps += 1;
            if pumps >= MAX_STARTUP_PUMPS {
                return Err(GameError::WindowInit(
                    "window was not created by the event loop".to_string(),
                ));
            }
        }

        if let Some(e) = handler.error.take() {
            return Err(e);
        }
        let window = handler
            .window
            .clone()
            .ok_or_else(|| GameError::WindowInit("window missing after startup".to_string()))?;

        Ok(Self {
            event_loop,
            handler,
            window,
        })
    }

    /// Shared handle for the renderer
    pub fn window(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }
}

impl EventSource for Platform {
    fn poll(&mut self) -> Option<InputEvent> {
        if self.handler.pending.is_empty() {
            if let PumpStatus::Exit(code) = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.handler)
            {
                log::info!("Event loop exited with code {}", code);
                self.handler.pending.push_back(InputEvent::Quit);
            }
        }
        self.handler.pending.pop_front()
    }
}
