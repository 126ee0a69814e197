//! Demo autopilot: plays the game by steering the pointer under the ball

use crate::sim::{GamePhase, GameState, TickInput};

/// Input a simple AI would give for the next step.
///
/// Starts from the menu but never restarts after game over. Aims slightly off
/// center so rallies don't settle into a vertical loop.
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase == GamePhase::Menu {
        return TickInput {
            confirm: true,
            ..Default::default()
        };
    }

    // Oscillating offset based on time to create variety
    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.2 + (time_factor * 0.7).sin() * 0.1) * state.paddle.width;

    let width = state.config.width;
    let target = (state.ball.pos.x + offset).clamp(1.0, width - 1.0);

    TickInput {
        pointer_x: Some(target),
        ..Default::default()
    }
}
