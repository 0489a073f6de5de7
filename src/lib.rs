//! Pong Duel - a two-player paddle-and-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `input`: Keyboard press/release state
//! - `app`: Single-threaded event loop and deadline scheduler
//! - `scene`: Draw-primitive generation for the display sink
//! - `display`: Display sink seam (windowing/rendering live on the host side)

pub mod app;
pub mod display;
pub mod input;
pub mod scene;
pub mod sim;

pub use display::{DisplayError, DisplaySink, NullDisplay, RecordingDisplay};
pub use input::{InputState, Key};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (~60 Hz, one physics step per tick)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
    /// Delay between a point landing and the next serve
    pub const SERVE_DELAY: Duration = Duration::from_millis(1000);

    /// Playfield dimensions (origin bottom-left, +y up)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis speed of the opening serve
    pub const BALL_START_SPEED: f32 = 6.0;
    /// Horizontal speed gained on each paddle hit
    pub const BALL_ACCEL: f32 = 0.5;
    /// Cap on horizontal ball speed
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Vertical speed imparted by an extreme-edge paddle hit (center hit gives 0)
    pub const DEFLECT_SCALE: f32 = 5.0;
    /// Triangle-fan segments used to draw the ball
    pub const BALL_SEGMENTS: u32 = 100;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Left edge of each paddle band
    pub const LEFT_PADDLE_X: f32 = 20.0;
    pub const RIGHT_PADDLE_X: f32 = WINDOW_WIDTH - 30.0;
}

/// Center of the playfield
#[inline]
pub fn playfield_center() -> Vec2 {
    Vec2::new(consts::WINDOW_WIDTH / 2.0, consts::WINDOW_HEIGHT / 2.0)
}
