//! Single-threaded tick scheduling.
//!
//! Animations never sleep or reschedule themselves. They hand back the delay
//! before their next tick and the [`Scheduler`] keeps every pending tick on a
//! single virtual timeline, firing them one at a time in time order.

use crate::event::EventSink;
use crate::random::RandomSource;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Something driven by timed ticks on one or more tracks.
pub trait Animation {
    /// Starts a spin. Returns the first delay for every track that started;
    /// empty when a spin is already running.
    fn start(&mut self, rng: &mut dyn RandomSource) -> Vec<(usize, Duration)>;

    /// Fires one tick on `track`. Returns the delay before that track's next
    /// tick, or `None` when the track is done.
    fn fire(
        &mut self,
        track: usize,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Option<Duration>;

    fn is_spinning(&self) -> bool;
}

/// Waits out the gap between two ticks.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never waits; only adds up the time it was asked to sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock {
    pub slept: Duration,
}

impl Clock for InstantClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    at: Duration,
    seq: u64,
    track: usize,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks fired across all tracks.
    pub ticks: usize,
    /// Virtual time from start to the last tick.
    pub elapsed: Duration,
}

/// Timeline of pending ticks.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Pending>>,
    now: Duration,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position on the timeline.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues a tick for `track` after `delay`. Ticks due at the same instant
    /// fire in the order they were scheduled.
    pub fn schedule(&mut self, track: usize, delay: Duration) {
        let pending = Pending {
            at: self.now + delay,
            seq: self.seq,
            track,
        };
        self.seq += 1;
        self.queue.push(Reverse(pending));
    }

    /// Pops the next due tick, waiting on `clock` until it is due.
    pub fn next(&mut self, clock: &mut dyn Clock) -> Option<usize> {
        let Reverse(pending) = self.queue.pop()?;
        clock.sleep(pending.at.saturating_sub(self.now));
        self.now = self.now.max(pending.at);
        Some(pending.track)
    }

    /// Starts `animation` and fires its ticks until every track is done.
    /// Returns immediately with an empty summary when the animation refuses
    /// to start.
    pub fn run<A: Animation + ?Sized>(
        &mut self,
        animation: &mut A,
        rng: &mut dyn RandomSource,
        clock: &mut dyn Clock,
        sink: &mut dyn EventSink,
    ) -> RunSummary {
        let started_at = self.now;
        for (track, delay) in animation.start(rng) {
            self.schedule(track, delay);
        }

        let mut ticks = 0;
        while let Some(track) = self.next(clock) {
            ticks += 1;
            if let Some(delay) = animation.fire(track, rng, sink) {
                self.schedule(track, delay);
            }
        }

        RunSummary {
            ticks,
            elapsed: self.now - started_at,
        }
    }
}
