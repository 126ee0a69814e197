//! Per-frame simulation step
//!
//! One call to [`tick`] is one fixed physics step: the ball moves by exactly
//! its velocity, the paddle by its configured speed. `dt` only drives the
//! countdown timers.

use super::collision;
use super::state::{BrickStatus, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held (wins over left)
    pub right: bool,
    /// Accepted confirm press (already debounced)
    pub confirm: bool,
    /// Latest pointer x in field coordinates
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one step, `dt` seconds after the previous one
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.confirm {
        state.confirm();
    }

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Respawning => {
            state.respawn_countdown = (state.respawn_countdown - dt).max(0.0);
            if state.respawn_countdown <= 0.0 {
                state.finish_respawn();
            }
            return;
        }
        GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => return,
    }

    if state.countdown > 0.0 {
        state.countdown = (state.countdown - dt).max(0.0);
        if state.countdown <= 0.0 {
            state.serve_ball();
        }
    }

    state.time_ticks += 1;

    move_paddle(state, input);

    state.ball.pos += state.ball.vel;

    handle_collisions(state);
}

/// Keyboard and pointer paddle control; no-op while locked
fn move_paddle(state: &mut GameState, input: &TickInput) {
    if state.paddle.locked {
        return;
    }

    let max_x = state.config.paddle_max_x();

    if let Some(x) = input.pointer_x {
        if x > 0.0 && x < state.config.width {
            state.paddle.set_center(x, max_x);
        }
    }

    if input.right {
        state.paddle.move_by(state.config.paddle_speed, max_x);
    } else if input.left {
        state.paddle.move_by(-state.config.paddle_speed, max_x);
    }
}

/// Resolve wall, paddle/floor and brick contacts for the current ball position
pub fn handle_collisions(state: &mut GameState) {
    let width = state.config.width;
    let height = state.config.height;
    let max_bounce = state.config.paddle_max_bounce_deg.to_radians();

    let ball = &mut state.ball;
    let next = ball.pos + ball.vel;

    if collision::crosses_side_wall(next.x, ball.radius, width) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallHit);
    }

    if collision::hits_ceiling(next.y, ball.radius) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallHit);
    } else if collision::reaches_floor(next.y, ball.radius, height) {
        match collision::paddle_bounce(ball.pos.x, ball.vel, &state.paddle, max_bounce) {
            Some(vel) => {
                ball.vel = vel;
                state.events.push(GameEvent::PaddleHit);
            }
            None => {
                state.handle_life_loss();
                return;
            }
        }
    }

    handle_brick_collisions(state);
}

/// Destroy every alive brick containing the ball center
fn handle_brick_collisions(state: &mut GameState) {
    let center = state.ball.pos;
    let points = state.config.points_per_brick;
    let speedup_every = state.config.speedup_every_points;
    let speedup_factor = state.config.speedup_factor;

    for column in 0..state.bricks.column_count() {
        for row in 0..state.bricks.row_count() {
            let Some(brick) = state.bricks.get_mut(column, row) else {
                continue;
            };
            if !brick.is_alive() || !brick.contains(center) {
                continue;
            }

            brick.status = BrickStatus::Destroyed;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += points;
            state
                .events
                .push(GameEvent::BrickDestroyed { column, row });

            if speedup_every > 0 && state.score % speedup_every == 0 {
                state.ball.vel = collision::scale_speed(state.ball.vel, speedup_factor);
                let speed = state.ball.speed();
                log::debug!("Speed up at {} points: {:.2}", state.score, speed);
                state.events.push(GameEvent::SpeedUp { speed });
            }

            if state.check_win() {
                state.advance_level();
                return;
            }
        }
    }
}
