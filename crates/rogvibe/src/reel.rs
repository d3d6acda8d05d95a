//! One track of the slot machine.

use crate::random::RandomSource;
use crate::timing::Easing;
use std::sync::Arc;
use std::time::Duration;

/// Shown by a reel that has no items to spin through.
pub const UNKNOWN_ITEM: &str = "unknown";

/// What a single reel tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelStep {
    /// Moved to `value`; tick again after `next`.
    Spinning { value: String, next: Duration },
    /// Landed on `value` for good.
    Stopped { value: String },
}

/// A reel walks its items for `total_steps` ticks and then snaps onto the
/// target drawn when the spin began.
#[derive(Debug, Clone)]
pub struct Reel {
    items: Arc<[String]>,
    easing: Easing,
    current_index: usize,
    target_index: usize,
    spin_count: usize,
    total_steps: usize,
    is_spinning: bool,
}

impl Reel {
    pub fn new(items: Arc<[String]>, easing: Easing) -> Self {
        Self {
            items,
            easing,
            current_index: 0,
            target_index: 0,
            spin_count: 0,
            total_steps: 0,
            is_spinning: false,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn spin_count(&self) -> usize {
        self.spin_count
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    /// Item under the payline, or [`UNKNOWN_ITEM`] for an empty reel.
    pub fn display(&self) -> &str {
        self.items
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ITEM)
    }

    /// Starts a spin lasting `total_steps` ticks. Returns the first delay, or
    /// `None` if the reel is already spinning or has nothing to show.
    pub fn start_spin(
        &mut self,
        total_steps: usize,
        rng: &mut dyn RandomSource,
    ) -> Option<Duration> {
        if self.is_spinning || self.items.is_empty() {
            return None;
        }
        self.target_index = rng.below(self.items.len());
        self.total_steps = total_steps.max(1);
        self.spin_count = 0;
        self.is_spinning = true;
        Some(self.easing.base_delay())
    }

    /// One tick. `None` when the reel is idle.
    pub fn advance(&mut self) -> Option<ReelStep> {
        if !self.is_spinning {
            return None;
        }

        self.spin_count += 1;
        if self.spin_count >= self.total_steps {
            // Snap onto the target even if that skips over items.
            self.current_index = self.target_index;
            self.is_spinning = false;
            return Some(ReelStep::Stopped {
                value: self.display().to_string(),
            });
        }

        self.current_index = (self.current_index + 1) % self.items.len();
        let progress = self.spin_count as f64 / self.total_steps as f64;
        Some(ReelStep::Spinning {
            value: self.display().to_string(),
            next: self.easing.delay(progress),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandom;
    use crate::random::testing::ScriptedRandom;

    fn items(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_reel_never_spins() {
        let mut reel = Reel::new(items(&[]), Easing::reel());
        assert_eq!(reel.display(), UNKNOWN_ITEM);
        let mut rng = StdRandom::seeded(0);
        assert!(reel.start_spin(40, &mut rng).is_none());
        assert!(!reel.is_spinning());
        assert!(reel.advance().is_none());
    }

    #[test]
    fn test_spin_runs_total_steps_and_lands_on_target() {
        let mut reel = Reel::new(items(&["a", "b", "c", "d", "e"]), Easing::reel());
        // target index 3
        let mut rng = ScriptedRandom::new(&[3]);
        assert_eq!(reel.start_spin(12, &mut rng), Some(Easing::reel().base_delay()));

        let mut ticks = 0;
        let mut last_delay = Duration::ZERO;
        let stopped = loop {
            ticks += 1;
            match reel.advance().unwrap() {
                ReelStep::Spinning { next, .. } => {
                    assert!(next >= last_delay);
                    last_delay = next;
                }
                ReelStep::Stopped { value } => break value,
            }
        };
        assert_eq!(ticks, 12);
        assert_eq!(stopped, "d");
        assert_eq!(reel.current_index(), 3);
        assert!(!reel.is_spinning());
    }

    #[test]
    fn test_spinning_values_walk_forward() {
        let mut reel = Reel::new(items(&["a", "b", "c"]), Easing::reel());
        let mut rng = ScriptedRandom::new(&[0]);
        reel.start_spin(5, &mut rng).unwrap();
        let mut seen = Vec::new();
        while let Some(ReelStep::Spinning { value, .. }) = reel.advance() {
            seen.push(value);
        }
        assert_eq!(seen, ["b", "c", "a", "b"]);
        assert_eq!(reel.display(), "a");
    }

    #[test]
    fn test_restart_while_spinning_is_ignored() {
        let mut reel = Reel::new(items(&["a", "b"]), Easing::reel());
        let mut rng = StdRandom::seeded(5);
        reel.start_spin(30, &mut rng).unwrap();
        reel.advance();
        let (count, total, target) = (reel.spin_count(), reel.total_steps(), reel.target_index());
        assert!(reel.start_spin(99, &mut rng).is_none());
        assert_eq!(
            (reel.spin_count(), reel.total_steps(), reel.target_index()),
            (count, total, target)
        );
    }
}
