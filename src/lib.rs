//! Brick Breaker - a single-screen Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, collisions)
//! - `game_loop`: Fixed-step driver shared by the web and native frontends
//! - `renderer`: Backend-neutral scene building (+ canvas backend on the web)
//! - `platform`: Input collection and debouncing
//! - `settings`: Data-driven game configuration

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::GameLoop;
pub use settings::{ConfigError, GameConfig};

use glam::Vec2;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Fixed simulation timestep. One step moves the ball by one velocity unit.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Units per step
    pub const BALL_BASE_SPEED: f32 = 4.0;
    /// Distance from the floor to the ball's resting center
    pub const BALL_REST_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Units per step
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Number of distinct brick color tags (cycled by row)
    pub const BRICK_COLOR_COUNT: usize = 6;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_BRICK: u64 = 10;
    /// Ball speeds up each time the score crosses a multiple of this
    pub const SPEEDUP_EVERY_POINTS: u64 = 50;
    pub const SPEEDUP_FACTOR: f32 = 1.1;

    /// Timers (seconds)
    pub const START_COUNTDOWN_SECS: f32 = 3.0;
    pub const RESPAWN_COUNTDOWN_SECS: f32 = 1.5;

    /// Minimum time between accepted confirm presses (ms)
    pub const CONFIRM_DEBOUNCE_MS: f64 = 500.0;

    /// Serve angle range from horizontal (degrees)
    pub const SERVE_MIN_ANGLE_DEG: f32 = 30.0;
    pub const SERVE_MAX_ANGLE_DEG: f32 = 60.0;
    /// Maximum paddle deflection from vertical (degrees)
    pub const PADDLE_MAX_BOUNCE_DEG: f32 = 60.0;
}

/// Velocity of the given magnitude pointing along `angle` (radians, screen space)
#[inline]
pub fn velocity_from_angle(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Split a velocity into (speed, angle)
#[inline]
pub fn velocity_to_polar(vel: Vec2) -> (f32, f32) {
    (vel.length(), vel.y.atan2(vel.x))
}
