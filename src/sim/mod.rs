//! Deterministic simulation module
//!
//! All gameplay logic lives here. Fixed timestep only: one `tick` call
//! advances exactly one physics step. No platform or display dependencies.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, check_paddle_hit, resolve_wall_bounce, scored_against};
pub use state::{Ball, GameWorld, MatchPhase, Paddle, Score, Side};
pub use tick::{TickEvents, TickInput, tick};
