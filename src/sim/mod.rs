//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-step displacement; `dt` only drives countdowns
//! - Seeded RNG only
//! - Stable iteration order (column-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{paddle_bounce, point_in_rect, scale_speed};
pub use state::{Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, handle_collisions, tick};
