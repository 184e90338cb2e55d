//! The game loop
//!
//! `GameLoop` owns a `Scene` and the three collaborators it needs (clock,
//! event source, render surface) and drives input → update → render until
//! asked to stop.

pub mod paddle;
pub mod square;

pub use paddle::PaddleGame;
pub use square::MovingSquare;

use std::process::ExitCode;

use crate::error::GameResult;
use crate::platform::{Clock, EventSource, FramePacer, InputEvent, Key, Platform, SystemClock};
use crate::renderer::{RenderState, RenderSurface};
use crate::settings::Settings;

/// Per-program behavior plugged into the loop
pub trait Scene {
    /// A key other than Escape was pressed (or auto-repeated)
    fn key_down(&mut self, _key: Key) {}

    /// A key other than Escape was released
    fn key_up(&mut self, _key: Key) {}

    /// Advance by `dt` seconds. May draw directly, e.g. a one-off frame
    /// when the game ends.
    fn update(&mut self, dt: f32, surface: &mut dyn RenderSurface);

    /// Draw the current state
    fn draw(&self, surface: &mut dyn RenderSurface);

    /// Called once before the first frame
    fn setup(&mut self, _surface: &mut dyn RenderSurface) {}
}

/// Fixed-target, variable-actual timestep loop
pub struct GameLoop<S, C, E, R> {
    scene: S,
    clock: C,
    events: E,
    surface: R,
    pacer: FramePacer,
    running: bool,
    frames: u64,
}

impl<S, C, E, R> GameLoop<S, C, E, R>
where
    S: Scene,
    C: Clock,
    E: EventSource,
    R: RenderSurface,
{
    pub fn new(scene: S, clock: C, events: E, surface: R, frame_target_ms: u64) -> Self {
        Self {
            scene,
            clock,
            events,
            surface,
            pacer: FramePacer::new(frame_target_ms),
            running: false,
            frames: 0,
        }
    }

    /// Stamp the first frame time and let the scene prepare
    pub fn setup(&mut self) {
        self.pacer.start(self.clock.now_ms());
        self.scene.setup(&mut self.surface);
    }

    /// Run until quit or escape
    pub fn run(&mut self) {
        self.running = true;
        self.setup();
        log::info!("Game loop started ({} ms frame target)", self.pacer.target_ms());

        while self.running {
            self.process_input();
            self.update();
            self.render();
        }

        log::info!("Game loop stopped after {} frames", self.frames);
    }

    /// Handle at most one pending event
    pub fn process_input(&mut self) {
        let Some(event) = self.events.poll() else {
            return;
        };

        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
            InputEvent::KeyDown(Key::Escape) => {
                log::info!("Escape pressed");
                self.running = false;
            }
            InputEvent::KeyDown(key) => self.scene.key_down(key),
            InputEvent::KeyUp(key) => self.scene.key_up(key),
        }
    }

    /// Wait out the frame, then advance the scene by the measured time
    pub fn update(&mut self) {
        let dt = self.pacer.wait(&mut self.clock);
        self.scene.update(dt, &mut self.surface);
        self.frames += 1;
    }

    pub fn render(&mut self) {
        self.scene.draw(&mut self.surface);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames updated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

/// Process exit status for the outcome of `run_windowed`
pub fn exit_status(result: &GameResult) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Report a startup failure on stderr and turn the outcome into an exit code
pub fn exit_code(result: GameResult) -> ExitCode {
    if let Err(ref e) = result {
        log::error!("{}", e);
        eprintln!("{}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// Open the window, run `scene` until the player quits, then tear down
///
/// Fails before the loop starts if the window or renderer cannot be
/// created. Everything acquired here is released by `Drop`.
pub fn run_windowed<S: Scene>(settings: &Settings, scene: S) -> GameResult {
    let platform = Platform::open(settings)?;
    let surface = pollster::block_on(RenderState::new(platform.window(), settings))?;

    let mut game_loop = GameLoop::new(
        scene,
        SystemClock::new(),
        platform,
        surface,
        settings.frame_target_ms(),
    );
    game_loop.run();

    log::info!("Shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_clean_quit_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
    }

    #[test]
    fn test_init_failures_exit_one() {
        let window = Err(GameError::WindowInit("no display".to_string()));
        let renderer = Err(GameError::RendererInit("no adapter".to_string()));
        assert_eq!(exit_status(&window), 1);
        assert_eq!(exit_status(&renderer), 1);
    }

    #[test]
    fn test_exit_code_matches_status() {
        assert_eq!(
            format!("{:?}", exit_code(Ok(()))),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", exit_code(Err(GameError::WindowInit("no display".to_string())))),
            format!("{:?}", ExitCode::FAILURE)
        );
        assert_eq!(
            format!("{:?}", exit_code(Err(GameError::RendererInit("no adapter".to_string())))),
            format!("{:?}", ExitCode::FAILURE)
        );
    }
}
