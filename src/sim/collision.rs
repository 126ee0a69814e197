//! Collision detection and response
//!
//! Everything is axis-aligned: the field walls, the paddle span and brick
//! boxes. Bricks are tested against the ball center only, not the full circle.

use glam::Vec2;

use super::state::Paddle;
use crate::{velocity_from_angle, velocity_to_polar};

/// Ball's next x would leave `[radius, width - radius]`
#[inline]
pub fn crosses_side_wall(next_x: f32, radius: f32, width: f32) -> bool {
    next_x > width - radius || next_x < radius
}

/// Ball's next y would pass above the ceiling
#[inline]
pub fn hits_ceiling(next_y: f32, radius: f32) -> bool {
    next_y < radius
}

/// Ball's next y would pass below the floor line
#[inline]
pub fn reaches_floor(next_y: f32, radius: f32, height: f32) -> bool {
    next_y > height - radius
}

/// Strict point-in-rectangle test; `min` is the top-left corner
#[inline]
pub fn point_in_rect(point: Vec2, min: Vec2, size: Vec2) -> bool {
    point.x > min.x && point.x < min.x + size.x && point.y > min.y && point.y < min.y + size.y
}

/// Where along the paddle `x` lies, normalized to [0, 1]
#[inline]
pub fn hit_fraction(x: f32, paddle: &Paddle) -> f32 {
    ((x - paddle.x) / paddle.width).clamp(0.0, 1.0)
}

/// Outgoing angle from vertical for a hit fraction: 0.5 goes straight up,
/// the edges deflect by `max_bounce` radians
#[inline]
pub fn paddle_bounce_angle(fraction: f32, max_bounce: f32) -> f32 {
    (fraction - 0.5) * 2.0 * max_bounce
}

/// Bounce off the paddle if `ball_x` is strictly within its span.
///
/// The outgoing velocity keeps the incoming speed and always points upward.
pub fn paddle_bounce(ball_x: f32, vel: Vec2, paddle: &Paddle, max_bounce: f32) -> Option<Vec2> {
    if ball_x <= paddle.x || ball_x >= paddle.x + paddle.width {
        return None;
    }

    let angle = paddle_bounce_angle(hit_fraction(ball_x, paddle), max_bounce);
    let speed = vel.length();
    Some(Vec2::new(speed * angle.sin(), -speed * angle.cos()))
}

/// Multiply speed by `factor` keeping the direction
#[inline]
pub fn scale_speed(vel: Vec2, factor: f32) -> Vec2 {
    let (speed, angle) = velocity_to_polar(vel);
    velocity_from_angle(speed * factor, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDLE_MAX_BOUNCE_DEG;
    use crate::settings::GameConfig;
    use std::f32::consts::FRAC_PI_3;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            x,
            ..Paddle::new(&GameConfig::default())
        }
    }

    #[test]
    fn test_side_walls() {
        assert!(!crosses_side_wall(400.0, 8.0, 800.0));
        assert!(crosses_side_wall(793.0, 8.0, 800.0));
        assert!(crosses_side_wall(7.0, 8.0, 800.0));
        // Exactly on the boundary is still inside
        assert!(!crosses_side_wall(8.0, 8.0, 800.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(hits_ceiling(7.5, 8.0));
        assert!(!hits_ceiling(8.0, 8.0));
        assert!(reaches_floor(593.0, 8.0, 600.0));
        assert!(!reaches_floor(592.0, 8.0, 600.0));
    }

    #[test]
    fn test_point_in_rect_is_strict() {
        let min = Vec2::new(30.0, 30.0);
        let size = Vec2::new(75.0, 20.0);
        assert!(point_in_rect(Vec2::new(50.0, 40.0), min, size));
        assert!(!point_in_rect(Vec2::new(30.0, 40.0), min, size));
        assert!(!point_in_rect(Vec2::new(50.0, 50.0), min, size));
        assert!(!point_in_rect(Vec2::new(200.0, 40.0), min, size));
    }

    #[test]
    fn test_dead_center_goes_straight_up() {
        let paddle = paddle_at(100.0);
        let vel = Vec2::new(3.0, 4.0);
        let out = paddle_bounce(150.0, vel, &paddle, FRAC_PI_3).unwrap();
        assert!(out.x.abs() < 1e-5);
        assert!((out.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_edge_hits_deflect_outward() {
        let paddle = paddle_at(100.0);
        let vel = Vec2::new(0.0, 5.0);

        let right = paddle_bounce(199.0, vel, &paddle, FRAC_PI_3).unwrap();
        assert!(right.x > 0.0 && right.y < 0.0);
        let left = paddle_bounce(101.0, vel, &paddle, FRAC_PI_3).unwrap();
        assert!(left.x < 0.0 && left.y < 0.0);

        // Near the edge the deflection approaches the maximum
        let angle = right.x.atan2(-right.y);
        assert!((angle - FRAC_PI_3).abs() < 0.05);
        assert!((right.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_angle_spans_full_range() {
        let max = PADDLE_MAX_BOUNCE_DEG.to_radians();
        assert!((paddle_bounce_angle(0.0, max) + max).abs() < 1e-6);
        assert!(paddle_bounce_angle(0.5, max).abs() < 1e-6);
        assert!((paddle_bounce_angle(1.0, max) - 60f32.to_radians()).abs() < 1e-6);
        assert!((paddle_bounce_angle(0.75, max) - 30f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = paddle_at(100.0);
        let vel = Vec2::new(0.0, 5.0);
        assert!(paddle_bounce(99.0, vel, &paddle, FRAC_PI_3).is_none());
        assert!(paddle_bounce(100.0, vel, &paddle, FRAC_PI_3).is_none());
        assert!(paddle_bounce(200.0, vel, &paddle, FRAC_PI_3).is_none());
    }

    #[test]
    fn test_scale_speed_keeps_direction() {
        let vel = Vec2::new(3.0, -4.0);
        let scaled = scale_speed(vel, 1.1);
        assert!((scaled.length() - 5.5).abs() < 1e-4);
        assert!((scaled.normalize() - vel.normalize()).length() < 1e-5);
    }
}
