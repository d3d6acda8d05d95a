#![doc = include_str!("../README.md")]

pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod handoff;
pub mod matching;
pub mod random;
pub mod reel;
pub mod scheduler;
pub mod session;
pub mod slot;
pub mod timing;
pub mod wheel;

pub use config::Config;
pub use discovery::{
    FALLBACK_PARTICIPANTS, FILLERS, KNOWN_TOOLS, default_participants, detect_participants,
    known_tools, normalize_names,
};
pub use error::{HandoffError, PickerError, Result};
pub use event::{Discard, EventSink, SpinEvent};
pub use handoff::{
    ExecResult, Handoff, Invocation, NoTerminal, ProcessImage, Resolve, SearchPath,
    SystemProcess, TerminalControl,
};
pub use matching::MatchResult;
pub use random::{RandomSource, StdRandom};
pub use reel::{Reel, ReelStep, UNKNOWN_ITEM};
pub use scheduler::{Animation, Clock, InstantClock, RunSummary, Scheduler, ThreadClock};
pub use session::{Game, PendingCommand, SPECIAL_PARTICIPANTS, Session, is_special};
pub use slot::SlotMachine;
pub use timing::{Easing, TimingConfig};
pub use wheel::{DICE_FACES, MIN_PARTICIPANTS, Wheel, WheelLayout};
