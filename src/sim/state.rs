//! Match state and core simulation types

use glam::Vec2;

use crate::consts::*;
use crate::playfield_center;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball frozen at center until the serve delay elapses
    Waiting,
    /// Active gameplay
    Playing,
    /// Quit requested; the event loop shuts down when it observes this
    Quit,
}

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side that takes the point when the ball exits past this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: playfield_center(),
            vel: Vec2::splat(BALL_START_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Re-center after a point.
    ///
    /// Horizontal velocity is negated from its pre-exit value, accumulated
    /// speed included; the serve is not re-aimed at the conceding side. The
    /// vertical sign flips on the integer parity of the previous vertical
    /// speed, which is binary-biased rather than uniformly random.
    pub fn reset(&mut self) {
        self.pos = playfield_center();
        self.vel.x = -self.vel.x;
        let sign = if self.vel.y as i32 % 2 == 0 { 1.0 } else { -1.0 };
        self.vel.y = self.vel.y.abs() * sign;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// One player's paddle. Horizontal placement is fixed per side; only the
/// vertical center moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Vertical center
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            y: WINDOW_HEIGHT / 2.0,
        }
    }

    /// Left edge of the paddle band
    pub fn x(&self) -> f32 {
        match self.side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        }
    }

    /// The face the ball bounces off, i.e. the edge toward the court center
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x() + PADDLE_WIDTH,
            Side::Right => self.x(),
        }
    }

    /// Move one step up (`dir` = 1.0) or down (`dir` = -1.0), saturating at
    /// the court bounds
    pub fn advance(&mut self, dir: f32) {
        let half = PADDLE_HEIGHT / 2.0;
        self.y = (self.y + dir * PADDLE_SPEED).clamp(half, WINDOW_HEIGHT - half);
    }
}

/// Points per side, incremented only when the ball exits the court
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete match state, owned by the event loop and mutated only through
/// `tick` and `serve`
#[derive(Debug, Clone, PartialEq)]
pub struct GameWorld {
    pub phase: MatchPhase,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameWorld {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Waiting,
            ball: Ball::new(),
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            score: Score::default(),
            time_ticks: 0,
        }
    }

    /// Resume play when a serve event fires. Serve events always fire once
    /// scheduled; arriving in any other phase they do nothing.
    pub fn serve(&mut self) -> bool {
        if self.phase == MatchPhase::Waiting {
            self.phase = MatchPhase::Playing;
            true
        } else {
            false
        }
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
