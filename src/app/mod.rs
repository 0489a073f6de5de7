//! Single-threaded event loop
//!
//! One thread owns the world, the input state, and the display sink. Timer
//! deadlines, key events, and redraw requests all dispatch here in order
//! with strict call-then-return semantics; no locks, no reentrancy.

pub mod scheduler;

pub use scheduler::{Clock, Scheduler, SystemClock, VirtualClock};

use crate::consts::{SERVE_DELAY, TICK_INTERVAL};
use crate::display::DisplaySink;
use crate::input::{InputState, Key};
use crate::scene::build_frame;
use crate::sim::{GameWorld, MatchPhase, TickInput, tick};

/// Events dispatched by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Fixed-timestep simulation step; its handler reschedules the next one
    Tick,
    /// Serve delay elapsed, play resumes
    Serve,
    /// Host keyboard event
    Key { key: Key, pressed: bool },
    /// Host window resize, forwarded to the sink
    Resize { width: u32, height: u32 },
}

/// The running match: world, input, scheduler, and display sink
pub struct App<C: Clock, D: DisplaySink> {
    clock: C,
    display: D,
    scheduler: Scheduler,
    input: InputState,
    pub world: GameWorld,
}

impl<C: Clock, D: DisplaySink> App<C, D> {
    /// Set up a fresh match: the first tick one interval out, the opening
    /// serve after the serve delay.
    pub fn new(clock: C, display: D) -> Self {
        let mut scheduler = Scheduler::new();
        let now = clock.now();
        scheduler.schedule_after(now, TICK_INTERVAL, AppEvent::Tick);
        scheduler.schedule_after(now, SERVE_DELAY, AppEvent::Serve);

        Self {
            clock,
            display,
            scheduler,
            input: InputState::new(),
            world: GameWorld::new(),
        }
    }

    /// Deliver a host event; it dispatches before any later deadline
    pub fn push(&mut self, event: AppEvent) {
        self.scheduler.schedule_at(self.clock.now(), event);
    }

    /// Wait for and dispatch the next event. Returns false once the queue
    /// is empty, which can only happen after quit stops the tick chain.
    pub fn step(&mut self) -> bool {
        let Some((due, event)) = self.scheduler.pop() else {
            return false;
        };
        self.clock.wait_until(due);
        self.dispatch(event);
        true
    }

    /// Drive the match until the quit transition, then return for orderly
    /// shutdown
    pub fn run(&mut self) {
        while self.world.phase != MatchPhase::Quit {
            if !self.step() {
                break;
            }
        }
        log::info!(
            "match over: {} - {}",
            self.world.score.left,
            self.world.score.right
        );
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::Serve => {
                if self.world.serve() {
                    log::debug!("serve: play resumes");
                }
            }
            AppEvent::Key { key, pressed } => self.input.set(key, pressed),
            AppEvent::Resize { width, height } => self.display.resize(width, height),
        }
    }

    fn on_tick(&mut self) {
        let input = TickInput::from_input(&self.input);
        let events = tick(&mut self.world, &input);

        if let Some(side) = events.point_to {
            log::info!(
                "point to {:?}: {} - {}",
                side,
                self.world.score.left,
                self.world.score.right
            );
            self.scheduler
                .schedule_after(self.clock.now(), SERVE_DELAY, AppEvent::Serve);
        }

        let frame = build_frame(&self.world);
        self.display.submit(&frame);
        if let Err(err) = self.display.present() {
            log::warn!("present failed: {err}");
        }

        if self.world.phase != MatchPhase::Quit {
            self.scheduler
                .schedule_after(self.clock.now(), TICK_INTERVAL, AppEvent::Tick);
        }
    }
}
