//! Game configuration
//!
//! Every gameplay constant lives here so levels can be tuned without code
//! changes. Defaults match the classic layout; a JSON file may override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Brick grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("Paddle width {paddle} must be positive and smaller than field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },

    #[error("Brick grid needs {needed:?} but the field is only {field:?}")]
    GridOutOfBounds { needed: (f32, f32), field: (f32, f32) },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be at least 1")]
    Zero { name: &'static str },

    #[error("speedup_every_points {every} is not a multiple of points_per_brick {points}")]
    SpeedupNotMultiple { every: u64, points: u64 },

    #[error("Ball rest offset {offset} must lie between the ball radius {radius} and the field height {height}")]
    RestOffsetOutOfRange { offset: f32, radius: f32, height: f32 },
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub width: f32,
    pub height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Speed assigned on every serve (units per step)
    pub ball_base_speed: f32,
    /// Distance from the floor to the resting ball center
    pub ball_rest_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard movement per step
    pub paddle_speed: f32,
    /// Deflection from vertical at either paddle edge (degrees)
    pub paddle_max_bounce_deg: f32,

    // === Bricks ===
    pub brick_columns: usize,
    pub brick_rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Scoring ===
    pub starting_lives: u8,
    pub points_per_brick: u64,
    /// Score interval between speed-ups; 0 disables them. Otherwise a
    /// multiple of `points_per_brick` so the score actually lands on it.
    pub speedup_every_points: u64,
    pub speedup_factor: f32,

    // === Timers ===
    pub start_countdown_secs: f32,
    pub respawn_countdown_secs: f32,
    pub confirm_debounce_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_rest_offset: BALL_REST_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_max_bounce_deg: PADDLE_MAX_BOUNCE_DEG,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
            speedup_every_points: SPEEDUP_EVERY_POINTS,
            speedup_factor: SPEEDUP_FACTOR,

            start_countdown_secs: START_COUNTDOWN_SECS,
            respawn_countdown_secs: RESPAWN_COUNTDOWN_SECS,
            confirm_debounce_ms: CONFIRM_DEBOUNCE_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Reject geometry the simulation cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("width", self.width),
            ("height", self.height),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_max_bounce_deg", self.paddle_max_bounce_deg),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("speedup_factor", self.speedup_factor),
        ];
        for (name, value) in positives {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::Zero { name: "starting_lives" });
        }
        if self.points_per_brick == 0 {
            return Err(ConfigError::Zero { name: "points_per_brick" });
        }
        if self.speedup_every_points % self.points_per_brick != 0 {
            return Err(ConfigError::SpeedupNotMultiple {
                every: self.speedup_every_points,
                points: self.points_per_brick,
            });
        }

        if self.ball_rest_offset <= self.ball_radius
            || self.ball_rest_offset >= self.height
            || !self.ball_rest_offset.is_finite()
        {
            return Err(ConfigError::RestOffsetOutOfRange {
                offset: self.ball_rest_offset,
                radius: self.ball_radius,
                height: self.height,
            });
        }

        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.brick_columns,
                rows: self.brick_rows,
            });
        }

        if self.paddle_width <= 0.0 || self.paddle_width >= self.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.width,
            });
        }

        let (grid_w, grid_h) = self.grid_extent();
        if grid_w > self.width || grid_h > self.ball_rest_y() - self.ball_radius {
            return Err(ConfigError::GridOutOfBounds {
                needed: (grid_w, grid_h),
                field: (self.width, self.height),
            });
        }

        Ok(())
    }

    /// Right/bottom extent of the brick grid, including offsets
    pub fn grid_extent(&self) -> (f32, f32) {
        let cols = self.brick_columns as f32;
        let rows = self.brick_rows as f32;
        (
            self.brick_offset_left + cols * self.brick_width + (cols - 1.0) * self.brick_padding,
            self.brick_offset_top + rows * self.brick_height + (rows - 1.0) * self.brick_padding,
        )
    }

    /// Y coordinate of the ball center when it rests above the paddle
    #[inline]
    pub fn ball_rest_y(&self) -> f32 {
        self.height - self.ball_rest_offset
    }

    /// Highest valid paddle x (left edge)
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.width - self.paddle_width
    }

    /// Total brick count
    pub fn brick_count(&self) -> usize {
        self.brick_columns * self.brick_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brick_count(), 45);
        // 30 + 9*75 + 8*10
        assert_eq!(config.grid_extent().0, 785.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "brick_rows": 3, "starting_lives": 5 }"#).unwrap();
        assert_eq!(config.brick_rows, 3);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.brick_columns, BRICK_COLUMNS);
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let result = GameConfig::from_json(r#"{ "brick_columns": 0 }"#);
        assert!(matches!(result, Err(ConfigError::EmptyGrid { columns: 0, .. })));
    }

    #[test]
    fn test_rejects_wide_paddle() {
        let config = GameConfig {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_grid_outside_field() {
        let config = GameConfig {
            brick_columns: 12,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let config = GameConfig {
            ball_base_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "ball_base_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let result = GameConfig::from_json(r#"{ "starting_lives": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Zero { name: "starting_lives" })));
    }

    #[test]
    fn test_rejects_zero_points() {
        let result = GameConfig::from_json(r#"{ "points_per_brick": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Zero { name: "points_per_brick" })));
    }

    #[test]
    fn test_rejects_zero_points_and_lives_together() {
        let result = GameConfig::from_json(r#"{ "points_per_brick": 0, "starting_lives": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Zero { .. })));
    }

    #[test]
    fn test_rejects_speedup_not_multiple() {
        let config = GameConfig {
            speedup_every_points: 45,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedupNotMultiple { every: 45, points: 10 })
        ));
    }

    #[test]
    fn test_speedup_disabled_is_valid() {
        let config = GameConfig::from_json(r#"{ "speedup_every_points": 0 }"#).unwrap();
        assert_eq!(config.speedup_every_points, 0);
    }

    #[test]
    fn test_rejects_rest_offset_out_of_range() {
        for offset in [0.0, BALL_RADIUS, FIELD_HEIGHT, 700.0] {
            let config = GameConfig {
                ball_rest_offset: offset,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::RestOffsetOutOfRange { .. })),
                "offset {offset} accepted"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = GameConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/definitely/not/here.json");
        assert_eq!(config, GameConfig::default());
    }
}
