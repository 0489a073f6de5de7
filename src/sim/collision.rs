//! Collision detection and response for the court
//!
//! Axis-aligned checks only: the ball against the top/bottom walls and
//! against each paddle's rectangle, plus the out-of-bounds scoring test.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Outcome of a paddle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Where to reposition the ball center so it sits just off the paddle
    /// face (prevents tunneling and immediate re-triggering)
    pub contact_x: f32,
    /// Ball velocity after the bounce
    pub velocity: Vec2,
}

/// Bounce the ball off the top/bottom walls. Returns true when a bounce
/// happened. Position is clamped exactly to boundary minus/plus radius and
/// the vertical velocity negated (elastic, no energy loss).
pub fn resolve_wall_bounce(ball: &mut Ball) -> bool {
    if ball.pos.y + ball.radius > WINDOW_HEIGHT {
        ball.pos.y = WINDOW_HEIGHT - ball.radius;
        ball.vel.y = -ball.vel.y;
        return true;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Check the ball against one paddle.
///
/// Triggers only while the ball's horizontal edge overlaps the paddle band,
/// its center lies within the paddle's vertical extent, and it is moving
/// toward that paddle. The returned velocity reflects the ball away with one
/// speed increment (capped) and a vertical component proportional to how far
/// from the paddle center it struck.
pub fn check_paddle_hit(ball: &Ball, paddle: &Paddle) -> Option<PaddleHit> {
    let half_h = PADDLE_HEIGHT / 2.0;
    if (ball.pos.y - paddle.y).abs() > half_h {
        return None;
    }

    let (overlaps, toward) = match paddle.side {
        Side::Left => (
            ball.pos.x - ball.radius <= paddle.face_x() && ball.pos.x + ball.radius >= paddle.x(),
            ball.vel.x < 0.0,
        ),
        Side::Right => (
            ball.pos.x + ball.radius >= paddle.face_x()
                && ball.pos.x - ball.radius <= paddle.x() + PADDLE_WIDTH,
            ball.vel.x > 0.0,
        ),
    };
    if !overlaps || !toward {
        return None;
    }

    let speed = (ball.vel.x.abs() + BALL_ACCEL).min(BALL_MAX_SPEED);
    let (vx, contact_x) = match paddle.side {
        Side::Left => (speed, paddle.face_x() + ball.radius),
        Side::Right => (-speed, paddle.face_x() - ball.radius),
    };
    let vy = (paddle.y - ball.pos.y) / half_h * DEFLECT_SCALE;

    Some(PaddleHit {
        contact_x,
        velocity: Vec2::new(vx, vy),
    })
}

/// The side that conceded, if the ball's leading edge has crossed that
/// side's boundary. The point lands on the same tick the edge crosses; the
/// ball never travels on outside the court.
pub fn scored_against(ball: &Ball) -> Option<Side> {
    if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Left)
    } else if ball.pos.x + ball.radius > WINDOW_WIDTH {
        Some(Side::Right)
    } else {
        None
    }
}
