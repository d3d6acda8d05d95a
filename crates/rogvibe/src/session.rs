//! Shell-side state between spins: which game is on screen and what would
//! run if the user asked to execute now.

use crate::event::{EventSink, SpinEvent};
use crate::matching::MatchResult;
use crate::random::RandomSource;
use crate::scheduler::Animation;
use crate::slot::SlotMachine;
use crate::wheel::Wheel;
use std::time::Duration;

/// Wheel winners that can be drawn but never executed.
pub const SPECIAL_PARTICIPANTS: [&str; 2] = ["lucky", "handy"];

/// Returns true for filler names such as `lucky` and `handy`.
pub fn is_special(name: &str) -> bool {
    SPECIAL_PARTICIPANTS.contains(&name)
}

/// A winner waiting to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommand {
    command: String,
    runnable: bool,
}

impl PendingCommand {
    /// Wheel winner: fillers are kept for display but are not runnable.
    pub fn from_wheel(winner: String) -> Self {
        let runnable = !is_special(&winner);
        Self {
            command: winner,
            runnable,
        }
    }

    /// Slot jackpot: always runnable.
    pub fn from_slot(value: String) -> Self {
        Self {
            command: value,
            runnable: true,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_runnable(&self) -> bool {
        self.runnable && !self.command.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Game {
    Wheel(Wheel),
    Slot(SlotMachine),
}

impl Game {
    fn animation(&mut self) -> &mut dyn Animation {
        match self {
            Game::Wheel(wheel) => wheel,
            Game::Slot(machine) => machine,
        }
    }
}

/// A game plus the command its last spin produced.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    pending: Option<PendingCommand>,
    last_match: Option<MatchResult>,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            pending: None,
            last_match: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn pending(&self) -> Option<&PendingCommand> {
        self.pending.as_ref()
    }

    /// Command to hand off, if the last spin produced a runnable one.
    pub fn runnable_command(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .filter(|p| p.is_runnable())
            .map(PendingCommand::command)
    }

    /// Slot outcome of the last spin.
    pub fn last_match(&self) -> Option<&MatchResult> {
        self.last_match.as_ref()
    }

    fn observe(&mut self, event: &SpinEvent) {
        match event {
            SpinEvent::SpinFinished { winner } => {
                self.pending = Some(PendingCommand::from_wheel(winner.clone()));
            }
            SpinEvent::AllStopped { results } => {
                let outcome = MatchResult::evaluate(results);
                if let MatchResult::Jackpot(value) = &outcome {
                    self.pending = Some(PendingCommand::from_slot(value.clone()));
                }
                self.last_match = Some(outcome);
            }
            _ => {}
        }
    }
}

impl Animation for Session {
    /// Clears the pending command, then starts the game.
    fn start(&mut self, rng: &mut dyn RandomSource) -> Vec<(usize, Duration)> {
        if self.is_spinning() {
            return Vec::new();
        }
        self.pending = None;
        self.last_match = None;
        self.game.animation().start(rng)
    }

    fn fire(
        &mut self,
        track: usize,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Option<Duration> {
        let mut events = Vec::new();
        let next = self.game.animation().fire(track, rng, &mut events);
        for event in events {
            self.observe(&event);
            sink.emit(event);
        }
        next
    }

    fn is_spinning(&self) -> bool {
        match &self.game {
            Game::Wheel(wheel) => wheel.is_spinning(),
            Game::Slot(machine) => machine.is_spinning(),
        }
    }
}
