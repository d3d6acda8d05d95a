//! The single-track selection wheel.
//!
//! Participants sit around a 2×2 or 3×3 grid and a highlight walks clockwise
//! through them. The landing index is drawn before the first tick; the number
//! of ticks is then chosen so the highlight always stops exactly there.

use crate::error::{PickerError, Result};
use crate::event::{EventSink, SpinEvent};
use crate::random::RandomSource;
use crate::scheduler::Animation;
use crate::timing::Easing;
use std::time::Duration;

/// Minimum number of participants a wheel accepts.
pub const MIN_PARTICIPANTS: usize = 4;

/// Die faces shown while the wheel turns.
pub const DICE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

/// Shown in the bullseye while a spin is starting.
pub const DICE_EMOJI: &str = "🎲";

/// Shown in the bullseye when the wheel is at rest.
pub const TARGET_EMOJI: &str = "🎯";

/// Grid geometry derived from the participant count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelLayout {
    /// Cells per side: 2 or 3.
    pub grid_size: usize,
    /// Visible slots: 4 for 2×2, 8 for the 3×3 perimeter.
    pub capacity: usize,
    /// Participants that did not fit.
    pub extra_count: usize,
}

impl WheelLayout {
    pub fn for_count(count: usize) -> Self {
        let (grid_size, capacity) = if count <= 4 { (2, 4) } else { (3, 8) };
        Self {
            grid_size,
            capacity,
            extra_count: count.saturating_sub(capacity),
        }
    }

    pub fn truncated(&self) -> bool {
        self.extra_count > 0
    }

    /// Participant index per grid cell in row-major order. Slots run
    /// clockwise from the top-left corner; `None` is the bullseye.
    pub fn cells(&self) -> Vec<Option<usize>> {
        match self.grid_size {
            2 => vec![Some(0), Some(1), Some(3), Some(2)],
            _ => vec![
                Some(0),
                Some(1),
                Some(2),
                Some(7),
                None,
                Some(3),
                Some(6),
                Some(5),
                Some(4),
            ],
        }
    }
}

/// Single-track spinner over a fixed participant list.
#[derive(Debug, Clone)]
pub struct Wheel {
    participants: Vec<String>,
    layout: WheelLayout,
    easing: Easing,
    current_index: usize,
    target_index: usize,
    is_spinning: bool,
    steps_remaining: i64,
    initial_steps: usize,
    delay: Duration,
    face: &'static str,
}

impl Wheel {
    /// Builds a wheel; fails with fewer than [`MIN_PARTICIPANTS`] names.
    ///
    /// Only the first `capacity` participants are kept.
    pub fn new(participants: Vec<String>) -> Result<Self> {
        Self::with_easing(participants, Easing::wheel())
    }

    pub fn with_easing(mut participants: Vec<String>, easing: Easing) -> Result<Self> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(PickerError::TooFewParticipants {
                count: participants.len(),
            });
        }
        let layout = WheelLayout::for_count(participants.len());
        participants.truncate(layout.capacity);
        Ok(Self {
            participants,
            layout,
            easing,
            current_index: 0,
            target_index: 0,
            is_spinning: false,
            steps_remaining: 0,
            initial_steps: 0,
            delay: easing.base_delay(),
            face: TARGET_EMOJI,
        })
    }

    /// Visible participants.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn layout(&self) -> WheelLayout {
        self.layout
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Landing index drawn by the last [`Wheel::start_spin`].
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn steps_remaining(&self) -> i64 {
        self.steps_remaining
    }

    pub fn initial_steps(&self) -> usize {
        self.initial_steps
    }

    /// Delay before the next tick.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Bullseye decoration.
    pub fn face(&self) -> &'static str {
        self.face
    }

    /// The highlighted participant.
    pub fn current(&self) -> &str {
        &self.participants[self.current_index]
    }

    /// Draws the landing index and step count. Returns the delay before the
    /// first tick, or `None` when a spin is already running.
    pub fn start_spin(&mut self, rng: &mut dyn RandomSource) -> Option<Duration> {
        if self.is_spinning {
            return None;
        }

        let count = self.participants.len();
        self.target_index = rng.below(count);
        self.initial_steps = rng.between(count * 4, count * 7);
        // Distance from where `initial_steps` leaves the highlight to the target.
        let offset =
            (self.target_index + count - (self.current_index + self.initial_steps) % count) % count;
        self.steps_remaining = (self.initial_steps + offset) as i64;
        self.is_spinning = true;
        self.face = DICE_EMOJI;
        self.delay = self.easing.base_delay();

        log::debug!(
            "wheel spin: target={} initial_steps={} offset={}",
            self.target_index,
            self.initial_steps,
            offset
        );
        Some(self.delay)
    }

    /// One tick. Returns the delay before the next tick, or `None` once the
    /// wheel has stopped.
    pub fn advance(
        &mut self,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Option<Duration> {
        if !self.is_spinning {
            return None;
        }

        self.current_index = (self.current_index + 1) % self.participants.len();
        self.steps_remaining -= 1;
        let face = DICE_FACES[rng.below(DICE_FACES.len())];
        self.face = face;
        sink.emit(SpinEvent::Tick {
            face: face.to_string(),
        });

        if self.steps_remaining <= 0 {
            self.is_spinning = false;
            self.face = TARGET_EMOJI;
            let winner = self.participants[self.current_index].clone();
            log::debug!("wheel stopped on {} ({})", self.current_index, winner);
            sink.emit(SpinEvent::SpinFinished { winner });
            return None;
        }

        let progress = 1.0 - self.steps_remaining as f64 / self.initial_steps as f64;
        self.delay = self.easing.delay(progress);
        Some(self.delay)
    }
}

impl Animation for Wheel {
    fn start(&mut self, rng: &mut dyn RandomSource) -> Vec<(usize, Duration)> {
        self.start_spin(rng).map(|d| (0, d)).into_iter().collect()
    }

    fn fire(
        &mut self,
        _track: usize,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Option<Duration> {
        self.advance(rng, sink)
    }

    fn is_spinning(&self) -> bool {
        self.is_spinning
    }
}
