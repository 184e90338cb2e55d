//! Moving square scene

use crate::renderer::{Color, Rect, RenderSurface};
use crate::sim::DriftState;

/// A white square drifting down and to the right
#[derive(Debug, Clone, Default)]
pub struct MovingSquare {
    state: DriftState,
}

impl MovingSquare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DriftState {
        &self.state
    }
}

impl super::Scene for MovingSquare {
    fn update(&mut self, _dt: f32, _surface: &mut dyn RenderSurface) {
        self.state.step();
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.clear(Color::BLACK);
        surface.fill_rect(Rect::from(&self.state.square), Color::WHITE);
        surface.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Scene;
    use crate::platform::Key;
    use crate::platform::headless::RecordingSurface;
    use crate::renderer::DrawCommand;

    #[test]
    fn test_update_ignores_dt() {
        let mut square = MovingSquare::new();
        let mut surface = RecordingSurface::new();
        square.update(0.5, &mut surface);
        square.update(0.0, &mut surface);
        assert_eq!(Rect::from(&square.state().square), Rect::new(24, 24, 15, 15));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_keys_do_nothing() {
        let mut square = MovingSquare::new();
        square.key_down(Key::Left);
        square.key_up(Key::Right);
        assert_eq!(square.state(), &DriftState::default());
    }

    #[test]
    fn test_setup_draws_nothing() {
        let mut square = MovingSquare::new();
        let mut surface = RecordingSurface::new();
        square.setup(&mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_draw() {
        let square = MovingSquare::new();
        let mut surface = RecordingSurface::new();
        square.draw(&mut surface);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear(Color::BLACK),
                DrawCommand::FillRect(Rect::new(20, 20, 15, 15), Color::WHITE),
                DrawCommand::Present,
            ]
        );
    }
}
