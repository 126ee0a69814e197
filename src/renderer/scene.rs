//! Backend-neutral draw commands for a game frame

use glam::Vec2;

use crate::sim::{Ball, BrickGrid, GamePhase, GameState, Paddle};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#rrggbb` for canvas fill styles
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::from_hex(0xFFFFFF);
    pub const PADDLE: Color = Color::from_hex(0xFFFFFF);
    pub const TEXT: Color = Color::from_hex(0xFFFFFF);

    /// Brick palette, indexed by brick color tag (row)
    pub const BRICKS: [Color; 6] = [
        Color::from_hex(0xFF5252),
        Color::from_hex(0xFF4081),
        Color::from_hex(0xE040FB),
        Color::from_hex(0x7C4DFF),
        Color::from_hex(0x536DFE),
        Color::from_hex(0x448AFF),
    ];

    pub fn brick(tag: u8) -> Color {
        BRICKS[tag as usize % BRICKS.len()]
    }
}

/// HUD text size (px)
pub const HUD_FONT_PX: u32 = 16;
/// Centered message size (px)
pub const MESSAGE_FONT_PX: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size_px: u32,
        align: TextAlign,
        color: Color,
    },
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Build the full frame for the current state
    pub fn build(state: &GameState) -> Self {
        let width = state.config.width;
        let height = state.config.height;

        let mut commands = vec![DrawCommand::Clear { width, height }];
        commands.push(ball(&state.ball));
        commands.push(paddle(&state.paddle, height));
        commands.extend(bricks(&state.bricks));
        commands.push(hud_text(format!("Score: {}", state.score), Vec2::new(8.0, 20.0)));
        commands.push(hud_text(
            format!("Lives: {}", state.lives),
            Vec2::new(width - 65.0, 20.0),
        ));

        if let Some(text) = overlay_message(state) {
            commands.push(DrawCommand::Text {
                text,
                pos: Vec2::new(width / 2.0, height / 2.0),
                size_px: MESSAGE_FONT_PX,
                align: TextAlign::Center,
                color: colors::TEXT,
            });
        }

        Self { commands }
    }

    /// All text drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub fn ball(ball: &Ball) -> DrawCommand {
    DrawCommand::Circle {
        center: ball.pos,
        radius: ball.radius,
        color: colors::BALL,
    }
}

/// Paddle rect resting on the floor
pub fn paddle(paddle: &Paddle, field_height: f32) -> DrawCommand {
    DrawCommand::Rect {
        pos: Vec2::new(paddle.x, field_height - paddle.height),
        size: Vec2::new(paddle.width, paddle.height),
        color: colors::PADDLE,
    }
}

/// One rect per alive brick
pub fn bricks(grid: &BrickGrid) -> impl Iterator<Item = DrawCommand> + '_ {
    grid.iter().filter(|b| b.is_alive()).map(|b| DrawCommand::Rect {
        pos: b.pos,
        size: b.size,
        color: colors::brick(b.color),
    })
}

fn hud_text(text: String, pos: Vec2) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos,
        size_px: HUD_FONT_PX,
        align: TextAlign::Left,
        color: colors::TEXT,
    }
}

/// Centered message for the current phase, if any
pub fn overlay_message(state: &GameState) -> Option<String> {
    match state.phase {
        GamePhase::Menu => Some("Press SPACE to Start".to_string()),
        GamePhase::Playing => state.countdown_display().map(|n| n.to_string()),
        GamePhase::Paused => Some("PAUSED - Press SPACE to Continue".to_string()),
        GamePhase::Respawning => Some(format!("READY? {:.1}", state.respawn_countdown)),
        GamePhase::GameOver => Some("GAME OVER - Press SPACE to Restart".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::BrickStatus;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 3)
    }

    #[test]
    fn test_menu_scene() {
        let s = state();
        let scene = Scene::build(&s);
        assert_eq!(
            scene.commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        let texts: Vec<_> = scene.texts().collect();
        assert_eq!(texts, ["Score: 0", "Lives: 3", "Press SPACE to Start"]);
    }

    #[test]
    fn test_overlay_per_phase() {
        let mut s = state();
        s.start_game();
        assert_eq!(overlay_message(&s).as_deref(), Some("3"));

        s.countdown = 0.0;
        assert_eq!(overlay_message(&s), None);

        s.confirm();
        assert_eq!(
            overlay_message(&s).as_deref(),
            Some("PAUSED - Press SPACE to Continue")
        );

        s.confirm();
        s.handle_life_loss();
        assert_eq!(overlay_message(&s).as_deref(), Some("READY? 1.5"));

        s.lives = 1;
        s.phase = GamePhase::Playing;
        s.handle_life_loss();
        assert_eq!(
            overlay_message(&s).as_deref(),
            Some("GAME OVER - Press SPACE to Restart")
        );
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut s = state();
        s.bricks.get_mut(0, 0).unwrap().status = BrickStatus::Destroyed;
        assert_eq!(bricks(&s.bricks).count(), 44);
    }

    #[test]
    fn test_brick_colors_by_row() {
        let s = state();
        let first = bricks(&s.bricks).next().unwrap();
        assert!(matches!(first, DrawCommand::Rect { color, .. } if color == colors::BRICKS[0]));
        assert_eq!(colors::brick(7), colors::BRICKS[1]);
        assert_eq!(colors::BRICKS[0].to_css(), "#ff5252");
    }

    #[test]
    fn test_paddle_on_floor() {
        let s = state();
        let cmd = paddle(&s.paddle, 600.0);
        assert_eq!(
            cmd,
            DrawCommand::Rect {
                pos: Vec2::new(350.0, 590.0),
                size: Vec2::new(100.0, 10.0),
                color: colors::PADDLE,
            }
        );
    }
}
