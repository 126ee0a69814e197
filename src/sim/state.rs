//! Game state and core simulation types
//!
//! `GameState` is the whole session: it owns the ball, paddle and brick grid
//! and is the only thing the loop driver needs to hold.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use crate::consts::{BRICK_COLOR_COUNT, SERVE_MAX_ANGLE_DEG, SERVE_MIN_ANGLE_DEG};
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay (including the pre-serve countdown)
    Playing,
    /// Game is paused
    Paused,
    /// Life lost, waiting to re-serve with the paddle locked
    Respawning,
    /// Run ended
    GameOver,
}

/// Notable things that happened during a tick, drained by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Served,
    PaddleHit,
    WallHit,
    BrickDestroyed { column: usize, row: usize },
    SpeedUp { speed: f32 },
    LifeLost { lives_left: u8 },
    LevelCleared { level: u32 },
    GameOver { score: u64 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed assigned on every serve
    pub base_speed: f32,
}

impl Ball {
    /// Stationary ball at the field's horizontal center, resting height
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.ball_rest_y()),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            base_speed: config.ball_base_speed,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }
}

/// The player's paddle. Its bottom edge sits on the floor of the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Player control disabled (during respawn)
    pub locked: bool,
}

impl Paddle {
    /// Unlocked paddle centered in the field
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.width - config.paddle_width) / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            locked: false,
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shift horizontally, clamped to `[0, max_x]`
    pub fn move_by(&mut self, dx: f32, max_x: f32) {
        self.x = (self.x + dx).clamp(0.0, max_x);
    }

    /// Center the paddle on `center_x`, clamped to `[0, max_x]`
    pub fn set_center(&mut self, center_x: f32, max_x: f32) {
        self.x = (center_x - self.width / 2.0).clamp(0.0, max_x);
    }
}

/// Brick status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
    /// Palette index, cycles by row
    pub color: u8,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Strict point containment (edges don't count)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        collision::point_in_rect(point, self.pos, self.size)
    }
}

/// Brick grid indexed `[column][row]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    /// Fresh grid with every brick alive
    pub fn generate(config: &GameConfig) -> Self {
        let size = Vec2::new(config.brick_width, config.brick_height);
        let columns = (0..config.brick_columns)
            .map(|c| {
                (0..config.brick_rows)
                    .map(|r| Brick {
                        pos: Vec2::new(
                            c as f32 * (config.brick_width + config.brick_padding)
                                + config.brick_offset_left,
                            r as f32 * (config.brick_height + config.brick_padding)
                                + config.brick_offset_top,
                        ),
                        size,
                        status: BrickStatus::Alive,
                        color: (r % BRICK_COLOR_COUNT) as u8,
                    })
                    .collect()
            })
            .collect();
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.columns.get(column)?.get(row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        self.columns.get_mut(column)?.get_mut(row)
    }

    /// Column-major iteration
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.columns.iter_mut().flatten()
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|b| b.is_alive()).count()
    }

    /// True iff every brick is destroyed
    pub fn all_destroyed(&self) -> bool {
        self.iter().all(|b| !b.is_alive())
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// 1-based
    pub level: u32,
    /// Seconds until the ball is served (0 = inactive)
    pub countdown: f32,
    /// Seconds until respawn completes (0 = inactive)
    pub respawn_countdown: f32,
    /// Physics steps run since the current session started
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session sitting on the menu
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let paddle = Paddle::new(&config);
        let mut ball = Ball::new(&config);
        ball.pos.x = paddle.center();
        let bricks = BrickGrid::generate(&config);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: config.starting_lives,
            level: 1,
            countdown: 0.0,
            respawn_countdown: 0.0,
            time_ticks: 0,
            ball,
            paddle,
            bricks,
            events: Vec::new(),
            config,
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whole seconds left on the start countdown, if one is running
    pub fn countdown_display(&self) -> Option<u32> {
        (self.countdown > 0.0).then(|| self.countdown.ceil() as u32)
    }

    /// Enter play and begin the pre-serve countdown with a resting ball
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.countdown = self.config.start_countdown_secs;
        self.reset_ball();
        log::info!("Level {} starting (countdown {}s)", self.level, self.countdown);
    }

    /// Recreate the ball, stationary and centered on the paddle
    pub fn reset_ball(&mut self) {
        let mut ball = Ball::new(&self.config);
        ball.pos.x = self.paddle.center();
        self.ball = ball;
    }

    /// Launch the ball upward at a random 30°-60° angle, left or right, at base speed
    pub fn serve_ball(&mut self) {
        let angle = self
            .rng
            .random_range(SERVE_MIN_ANGLE_DEG..=SERVE_MAX_ANGLE_DEG)
            .to_radians();
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = self.ball.base_speed;
        self.ball.vel = Vec2::new(speed * angle.cos() * direction, -speed * angle.sin());
        self.events.push(GameEvent::Served);
    }

    /// Lose a life: respawn if any remain, otherwise end the run
    pub fn handle_life_loss(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            lives_left: self.lives,
        });

        if self.lives > 0 {
            log::debug!("Life lost, {} remaining", self.lives);
            self.phase = GamePhase::Respawning;
            self.paddle.locked = true;
            self.reset_ball();
            self.respawn_countdown = self.config.respawn_countdown_secs;
        } else {
            log::info!("Game over: score {} on level {}", self.score, self.level);
            self.phase = GamePhase::GameOver;
            self.countdown = 0.0;
            self.events.push(GameEvent::GameOver { score: self.score });
        }
    }

    /// Respawn countdown elapsed: unlock and serve
    pub fn finish_respawn(&mut self) {
        self.respawn_countdown = 0.0;
        self.phase = GamePhase::Playing;
        self.paddle.locked = false;
        self.serve_ball();
    }

    /// True iff every brick is destroyed
    pub fn check_win(&self) -> bool {
        self.bricks.all_destroyed()
    }

    /// Fresh bricks, resting ball, and a new pre-serve countdown
    pub fn reset_level(&mut self) {
        self.bricks = BrickGrid::generate(&self.config);
        self.reset_ball();
        self.countdown = self.config.start_countdown_secs;
    }

    /// All bricks cleared: move to the next level
    pub fn advance_level(&mut self) {
        self.events.push(GameEvent::LevelCleared { level: self.level });
        self.level += 1;
        log::info!("Level cleared! Advancing to level {}", self.level);
        self.reset_level();
    }

    /// Back to the initial session values, then start
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.respawn_countdown = 0.0;
        self.time_ticks = 0;
        self.bricks = BrickGrid::generate(&self.config);
        self.paddle = Paddle::new(&self.config);
        self.start_game();
    }

    /// Handle an accepted (already debounced) confirm press
    pub fn confirm(&mut self) {
        match self.phase {
            GamePhase::Menu => self.start_game(),
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            GamePhase::GameOver => self.reset_game(),
            GamePhase::Respawning => {}
        }
    }
}
