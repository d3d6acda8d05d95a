//! Deceleration curves for the wheel and the reels

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quadratic ease-out: ticks start at `base_delay_ms` and slow down towards
/// `base_delay_ms + spread_ms` as the spin progresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Easing {
    /// Delay between ticks at the start of a spin (ms)
    pub base_delay_ms: f64,

    /// Extra delay reached at the very end of a spin (ms)
    pub spread_ms: f64,
}

impl Easing {
    pub const fn new(base_delay_ms: f64, spread_ms: f64) -> Self {
        Self {
            base_delay_ms,
            spread_ms,
        }
    }

    /// Wheel default: 50 ms ticks slowing to 300 ms.
    pub const fn wheel() -> Self {
        Self::new(50.0, 250.0)
    }

    /// Reel default: 20 ms ticks slowing to 120 ms.
    pub const fn reel() -> Self {
        Self::new(20.0, 100.0)
    }

    /// First delay of a spin.
    pub fn base_delay(&self) -> Duration {
        millis(self.base_delay_ms)
    }

    /// Delay for a spin that is `progress` of the way done.
    ///
    /// `progress` is clamped into `[0, 1]`, so the result always lies within
    /// `[base, base + spread]`.
    pub fn delay(&self, progress: f64) -> Duration {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        millis(self.base_delay_ms + p * p * self.spread_ms)
    }

    /// Scale both ends by `factor` (< 1.0 = faster).
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.base_delay_ms * factor, self.spread_ms * factor)
    }
}

/// Timing for both game variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub wheel: Easing,
    pub reel: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wheel: Easing::wheel(),
            reel: Easing::reel(),
        }
    }
}

impl TimingConfig {
    /// Scale every curve by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            wheel: self.wheel.scaled(factor),
            reel: self.reel.scaled(factor),
        }
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_nanos((ms.max(0.0) * 1_000_000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_bounds() {
        let easing = Easing::wheel();
        assert_eq!(easing.delay(0.0), Duration::from_millis(50));
        assert_eq!(easing.delay(1.0), Duration::from_millis(300));
        assert_eq!(easing.delay(-0.3), easing.base_delay());
        assert_eq!(easing.delay(4.0), Duration::from_millis(300));
        assert_eq!(easing.delay(f64::NAN), easing.base_delay());
    }

    #[test]
    fn test_delay_is_monotonic() {
        let easing = Easing::reel();
        let mut last = Duration::ZERO;
        for i in 0..=100 {
            let d = easing.delay(i as f64 / 100.0);
            assert!(d >= last);
            last = d;
        }
    }

    #[test]
    fn test_scaled() {
        let fast = TimingConfig::default().scaled(0.5);
        assert_eq!(fast.wheel.base_delay_ms, 25.0);
        assert_eq!(fast.reel.spread_ms, 50.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: TimingConfig =
            serde_json::from_str(r#"{"reel":{"base_delay_ms":10.0,"spread_ms":40.0}}"#).unwrap();
        assert_eq!(cfg.wheel, Easing::wheel());
        assert_eq!(cfg.reel, Easing::new(10.0, 40.0));
    }
}
