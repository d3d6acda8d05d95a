//! Three-reel slot machine.
//!
//! Reels spin independently with staggered durations so they stop left to
//! right; nothing synchronises them beyond that.

use crate::event::{EventSink, SpinEvent};
use crate::matching::MatchResult;
use crate::random::RandomSource;
use crate::reel::{Reel, ReelStep};
use crate::scheduler::Animation;
use crate::timing::Easing;
use std::sync::Arc;
use std::time::Duration;

pub const REEL_COUNT: usize = 3;

/// Shortest base duration of a reel, in ticks.
pub const MIN_REEL_STEPS: usize = 30;

/// Longest base duration of a reel, in ticks.
pub const MAX_REEL_STEPS: usize = 50;

/// Extra ticks added per reel position.
pub const REEL_STAGGER: usize = 20;

#[derive(Debug, Clone)]
pub struct SlotMachine {
    reels: [Reel; REEL_COUNT],
    is_spinning: bool,
    stopped_count: usize,
    results: Vec<String>,
}

impl SlotMachine {
    /// Builds three reels over the same items. An empty list is accepted but
    /// the machine then only shows placeholders and never spins.
    pub fn new(items: Vec<String>) -> Self {
        Self::with_easing(items, Easing::reel())
    }

    pub fn with_easing(items: Vec<String>, easing: Easing) -> Self {
        let items: Arc<[String]> = items.into();
        Self {
            reels: std::array::from_fn(|_| Reel::new(Arc::clone(&items), easing)),
            is_spinning: false,
            stopped_count: 0,
            results: Vec::with_capacity(REEL_COUNT),
        }
    }

    pub fn reels(&self) -> &[Reel; REEL_COUNT] {
        &self.reels
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn stopped_count(&self) -> usize {
        self.stopped_count
    }

    /// Values collected so far this spin, in stop order.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Outcome of the last finished spin.
    pub fn match_result(&self) -> Option<MatchResult> {
        if self.is_spinning {
            return None;
        }
        let results: &[String; REEL_COUNT] = self.results.as_slice().try_into().ok()?;
        Some(MatchResult::evaluate(results))
    }

    /// Starts every reel. Returns `(reel, first delay)` for each reel that
    /// started; empty when already spinning or when there is nothing to spin.
    pub fn start_spin(&mut self, rng: &mut dyn RandomSource) -> Vec<(usize, Duration)> {
        if self.is_spinning || self.reels[0].items().is_empty() {
            return Vec::new();
        }

        self.results.clear();
        self.stopped_count = 0;
        self.is_spinning = true;

        let mut started = Vec::with_capacity(REEL_COUNT);
        for (i, reel) in self.reels.iter_mut().enumerate() {
            let steps = rng.between(MIN_REEL_STEPS, MAX_REEL_STEPS) + i * REEL_STAGGER;
            if let Some(delay) = reel.start_spin(steps, rng) {
                log::debug!(
                    "reel {} spin: steps={} target={}",
                    i,
                    steps,
                    reel.target_index()
                );
                started.push((i, delay));
            }
        }
        started
    }

    /// One tick of reel `index`. Returns that reel's next delay, or `None`
    /// once it has stopped.
    pub fn advance_reel(&mut self, index: usize, sink: &mut dyn EventSink) -> Option<Duration> {
        match self.reels.get_mut(index)?.advance()? {
            ReelStep::Spinning { value, next } => {
                sink.emit(SpinEvent::ReelTick { reel: index, value });
                Some(next)
            }
            ReelStep::Stopped { value } => {
                sink.emit(SpinEvent::ReelStopped {
                    reel: index,
                    value: value.clone(),
                });
                self.on_reel_stopped(value, sink);
                None
            }
        }
    }

    fn on_reel_stopped(&mut self, value: String, sink: &mut dyn EventSink) {
        self.stopped_count += 1;
        self.results.push(value);
        if self.stopped_count < REEL_COUNT {
            return;
        }

        self.is_spinning = false;
        let results: [String; REEL_COUNT] = std::array::from_fn(|i| self.results[i].clone());
        log::debug!("all reels stopped: {:?}", results);
        sink.emit(SpinEvent::AllStopped { results });
    }
}

impl Animation for SlotMachine {
    fn start(&mut self, rng: &mut dyn RandomSource) -> Vec<(usize, Duration)> {
        self.start_spin(rng)
    }

    fn fire(
        &mut self,
        track: usize,
        _rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Option<Duration> {
        self.advance_reel(track, sink)
    }

    fn is_spinning(&self) -> bool {
        self.is_spinning
    }
}
