//! Paddle and ball scene

use crate::consts::PADDLE_NUDGE;
use crate::platform::Key;
use crate::renderer::{Color, Rect, RenderSurface};
use crate::settings::Settings;
use crate::sim::{GameEvent, SimulationState, tick};

/// Keep the ball off the floor with a paddle
#[derive(Debug, Clone)]
pub struct PaddleGame {
    state: SimulationState,
}

impl PaddleGame {
    pub fn new(settings: &Settings) -> Self {
        Self::from_state(SimulationState::new(settings.arena()))
    }

    pub fn from_state(state: SimulationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}

impl super::Scene for PaddleGame {
    fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.state.nudge_paddle(-PADDLE_NUDGE),
            Key::Right => self.state.nudge_paddle(PADDLE_NUDGE),
            _ => {}
        }
    }

    fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Left | Key::Right) {
            self.state.stop_paddle();
        }
    }

    /// The board is shown before the first update
    fn setup(&mut self, surface: &mut dyn RenderSurface) {
        self.draw(surface);
    }

    fn update(&mut self, dt: f32, surface: &mut dyn RenderSurface) {
        for event in tick(&mut self.state, dt) {
            match event {
                GameEvent::GameOver => {
                    log::info!("Game over: ball reached the floor");
                    log::debug!(
                        "Final state: {}",
                        serde_json::to_string(&self.state).unwrap_or_default()
                    );
                    // Drawn once; `draw` stays silent from now on
                    surface.clear(Color::RED);
                    surface.present();
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        if self.state.is_game_over() {
            return;
        }

        surface.clear(Color::BLACK);
        surface.fill_rect(Rect::from(&self.state.ball), Color::WHITE);
        surface.fill_rect(Rect::from(&self.state.paddle), Color::WHITE);
        surface.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Scene;
    use crate::platform::headless::RecordingSurface;
    use crate::renderer::DrawCommand;
    use crate::sim::{Body, GamePhase};

    fn game() -> PaddleGame {
        PaddleGame::new(&Settings::default())
    }

    #[test]
    fn test_movement_keys_nudge_and_release_stops() {
        let mut game = game();
        game.key_down(Key::Right);
        assert_eq!(game.state().paddle.vel.x, 200.0);
        game.key_down(Key::Right);
        assert_eq!(game.state().paddle.vel.x, 400.0);
        game.key_up(Key::Left);
        assert_eq!(game.state().paddle.vel.x, 0.0);

        game.key_down(Key::Left);
        assert_eq!(game.state().paddle.vel.x, -200.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut game = game();
        game.key_down(Key::Other);
        game.key_up(Key::Other);
        assert_eq!(game.state().paddle.vel.x, 0.0);
    }

    #[test]
    fn test_draw_ball_and_paddle() {
        let game = game();
        let mut surface = RecordingSurface::new();
        game.draw(&mut surface);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear(Color::BLACK),
                DrawCommand::FillRect(Rect::new(0, 0, 15, 15), Color::WHITE),
                DrawCommand::FillRect(Rect::new(350, 560, 100, 20), Color::WHITE),
                DrawCommand::Present,
            ]
        );
    }

    #[test]
    fn test_setup_shows_initial_board() {
        let mut game = game();
        let mut surface = RecordingSurface::new();
        game.setup(&mut surface);
        assert_eq!(surface.presents(), 1);
        assert_eq!(surface.commands().len(), 4);
    }

    #[test]
    fn test_game_over_draws_red_once() {
        let mut game = game();
        game.state_mut().ball = Body::new(100.0, 584.0, 15.0, 15.0).with_vel(300.0, 200.0);
        let mut surface = RecordingSurface::new();

        game.update(1.0 / 60.0, &mut surface);
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Clear(Color::RED), DrawCommand::Present]
        );

        // Neither further updates nor draws touch the surface
        game.update(1.0 / 60.0, &mut surface);
        game.draw(&mut surface);
        assert_eq!(surface.presents(), 1);
    }
}
