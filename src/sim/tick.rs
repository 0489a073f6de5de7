//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one step; the event loop invokes
//! it at the tick cadence and never accumulates delta time.

use super::collision::{check_paddle_hit, resolve_wall_bounce, scored_against};
use super::state::{GameWorld, MatchPhase, Side};
use crate::input::{InputState, Key};

/// Input commands for a single tick, read from the pressed-key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub quit: bool,
}

impl TickInput {
    /// Key bindings: `w`/`s` drive the left paddle (case-insensitive), the
    /// arrow keys the right one, Escape quits. Pure binding, no physics.
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left_up: input.is_pressed(Key::Char('w')) || input.is_pressed(Key::Char('W')),
            left_down: input.is_pressed(Key::Char('s')) || input.is_pressed(Key::Char('S')),
            right_up: input.is_pressed(Key::Up),
            right_down: input.is_pressed(Key::Down),
            quit: input.is_pressed(Key::Escape),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    /// Paddle that returned the ball
    pub paddle_hit: Option<Side>,
    /// Side awarded a point; the caller schedules the serve delay
    pub point_to: Option<Side>,
}

/// Advance the match by one fixed timestep
pub fn tick(world: &mut GameWorld, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if world.phase == MatchPhase::Quit {
        return events;
    }

    world.time_ticks += 1;

    // Paddles respond to input in every phase
    if input.left_up {
        world.left_paddle.advance(1.0);
    }
    if input.left_down {
        world.left_paddle.advance(-1.0);
    }
    if input.right_up {
        world.right_paddle.advance(1.0);
    }
    if input.right_down {
        world.right_paddle.advance(-1.0);
    }

    if world.phase == MatchPhase::Playing {
        step_ball(world, &mut events);
    }

    if input.quit {
        log::debug!("quit requested at tick {}", world.time_ticks);
        world.phase = MatchPhase::Quit;
    }

    events
}

fn step_ball(world: &mut GameWorld, events: &mut TickEvents) {
    let ball = &mut world.ball;
    ball.pos += ball.vel;

    events.wall_bounce = resolve_wall_bounce(ball);

    for paddle in [&world.left_paddle, &world.right_paddle] {
        if let Some(hit) = check_paddle_hit(ball, paddle) {
            ball.pos.x = hit.contact_x;
            ball.vel = hit.velocity;
            events.paddle_hit = Some(paddle.side);
            break;
        }
    }

    if let Some(conceding) = scored_against(ball) {
        let winner = conceding.opponent();
        world.score.award(winner);
        ball.reset();
        world.phase = MatchPhase::Waiting;
        events.point_to = Some(winner);
        log::debug!(
            "point to {:?}, score {}-{}",
            winner,
            world.score.left,
            world.score.right
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::playfield_center;
    use glam::Vec2;

    #[test]
    fn test_waiting_is_a_physics_noop() {
        let mut world = GameWorld::new();
        let ball_before = world.ball;

        // Repeated ticks while waiting leave the ball untouched
        for _ in 0..50 {
            let events = tick(&mut world, &TickInput::default());
            assert_eq!(events, TickEvents::default());
            assert_eq!(world.ball, ball_before);
        }
        assert_eq!(world.phase, MatchPhase::Waiting);
    }

    #[test]
    fn test_paddles_move_while_waiting() {
        let mut world = GameWorld::new();
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.left_paddle.y, WINDOW_HEIGHT / 2.0 + PADDLE_SPEED);
        assert_eq!(world.right_paddle.y, WINDOW_HEIGHT / 2.0 - PADDLE_SPEED);
    }

    #[test]
    fn test_playing_integrates_position() {
        let mut world = GameWorld::new();
        world.serve();
        let start = world.ball.pos;
        tick(&mut world, &TickInput::default());
        assert_eq!(world.ball.pos, start + Vec2::splat(BALL_START_SPEED));
    }

    #[test]
    fn test_quit_is_a_state_transition() {
        let mut world = GameWorld::new();
        world.serve();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.phase, MatchPhase::Quit);

        // Further ticks are inert
        let frozen = world.clone();
        tick(&mut world, &TickInput::default());
        assert_eq!(world, frozen);
    }

    #[test]
    fn test_point_awarded_once_and_ball_reset() {
        let mut world = GameWorld::new();
        world.serve();
        world.ball.pos = Vec2::new(WINDOW_WIDTH - BALL_RADIUS - 2.0, 300.0);
        world.ball.vel = Vec2::new(6.0, -6.0);

        let events = tick(&mut world, &TickInput::default());
        assert_eq!(events.point_to, Some(Side::Left));
        assert_eq!(world.score.left, 1);
        assert_eq!(world.score.right, 0);
        assert_eq!(world.phase, MatchPhase::Waiting);
        assert_eq!(world.ball.pos, playfield_center());
        // Serve keeps the accumulated speed, horizontally negated
        assert_eq!(world.ball.vel.x, -6.0);
    }

    #[test]
    fn test_point_lands_on_the_crossing_tick() {
        let mut world = GameWorld::new();
        world.serve();
        world.ball.pos = Vec2::new(400.0, 100.0);
        world.ball.vel = Vec2::new(6.0, 0.0);

        // A straight horizontal rally over the right paddle: the point must
        // land on the very tick the ball's edge crosses the boundary, never a
        // tick later with the ball traveling outside the court.
        loop {
            let events = tick(&mut world, &TickInput::default());
            if let Some(winner) = events.point_to {
                assert_eq!(winner, Side::Left);
                break;
            }
            assert!(world.ball.pos.x + world.ball.radius <= WINDOW_WIDTH);
            assert_eq!(world.phase, MatchPhase::Playing);
        }
        assert_eq!(world.score.left, 1);
        assert_eq!(world.score.right, 0);
        assert_eq!(world.phase, MatchPhase::Waiting);
        assert_eq!(world.ball.pos, playfield_center());
    }

    #[test]
    fn test_paddle_hits_speed_ball_up_monotonically() {
        let mut world = GameWorld::new();
        world.serve();
        world.ball.pos = Vec2::new(LEFT_PADDLE_X + PADDLE_WIDTH + BALL_RADIUS + 4.0, 300.0);
        world.ball.vel = Vec2::new(-6.0, 0.0);

        let events = tick(&mut world, &TickInput::default());
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(world.ball.vel.x, 6.0 + BALL_ACCEL);
        assert_eq!(world.ball.pos.x, LEFT_PADDLE_X + PADDLE_WIDTH + BALL_RADIUS);
    }

    #[test]
    fn test_wall_bounce_reported() {
        let mut world = GameWorld::new();
        world.serve();
        world.ball.pos = Vec2::new(400.0, WINDOW_HEIGHT - BALL_RADIUS - 2.0);
        world.ball.vel = Vec2::new(0.0, 6.0);

        let events = tick(&mut world, &TickInput::default());
        assert!(events.wall_bounce);
        assert_eq!(world.ball.pos.y, WINDOW_HEIGHT - BALL_RADIUS);
        assert_eq!(world.ball.vel.y, -6.0);
    }

    #[test]
    fn test_key_bindings() {
        let mut input = InputState::new();
        input.set(Key::Char('W'), true);
        input.set(Key::Down, true);
        let tick_input = TickInput::from_input(&input);
        assert!(tick_input.left_up);
        assert!(tick_input.right_down);
        assert!(!tick_input.left_down);
        assert!(!tick_input.right_up);
        assert!(!tick_input.quit);

        input.set(Key::Escape, true);
        assert!(TickInput::from_input(&input).quit);
    }

    #[test]
    fn test_unbound_keys_drive_nothing() {
        // Hosts deliver every named key; only the bound ones map to commands
        let mut input = InputState::new();
        input.set(Key::Left, true);
        input.set(Key::Right, true);
        input.set(Key::Char('x'), true);
        assert_eq!(TickInput::from_input(&input), TickInput::default());
    }
}
