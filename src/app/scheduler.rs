//! Deadline scheduler for the single-threaded event loop
//!
//! Replaces host-timer re-registration chains with an explicit
//! `schedule_after(delay, event)` queue. A scheduled event always fires;
//! there is no cancellation.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::thread;
use std::time::{Duration, Instant};

use super::AppEvent;

/// Time source for the loop. The system clock sleeps for real; the virtual
/// clock jumps straight to each deadline so headless runs finish instantly.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block until `deadline` (no-op if it is already past)
    fn wait_until(&mut self, deadline: Instant);
}

/// Wall-clock time. Cadence is approximately periodic, subject to host
/// scheduling jitter; drift is not compensated.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wait_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Virtual clock for tests and the headless demo
#[derive(Debug)]
pub struct VirtualClock {
    now: Instant,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn wait_until(&mut self, deadline: Instant) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    seq: u64,
    event: AppEvent,
}

// BinaryHeap is a max-heap; invert the ordering so the earliest deadline
// (then the lowest sequence number) pops first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.due.cmp(&self.due).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Deadline-ordered event queue; equal deadlines dispatch in scheduling
/// order
#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` to fire at `due`
    pub fn schedule_at(&mut self, due: Instant, event: AppEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due, seq, event });
    }

    /// Queue `event` to fire `delay` after `now`
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, event: AppEvent) {
        self.schedule_at(now + delay, event);
    }

    /// Remove and return the earliest pending event, if any
    pub fn pop(&mut self) -> Option<(Instant, AppEvent)> {
        self.heap.pop().map(|e| (e.due, e.event))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
