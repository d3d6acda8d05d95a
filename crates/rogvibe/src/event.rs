//! Events pushed from the engine to whoever draws it.

use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Something the presentation layer may want to redraw for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SpinEvent {
    /// The wheel moved one slot. `face` is purely decorative.
    Tick { face: String },
    /// The wheel stopped.
    SpinFinished { winner: String },
    /// A reel moved one item.
    ReelTick { reel: usize, value: String },
    /// A reel landed on its final value.
    ReelStopped { reel: usize, value: String },
    /// The last reel landed. Results are in stop order.
    AllStopped { results: [String; 3] },
}

impl SpinEvent {
    /// True for events that end a spin.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SpinEvent::SpinFinished { .. } | SpinEvent::AllStopped { .. }
        )
    }
}

/// Receiver of engine events.
pub trait EventSink {
    fn emit(&mut self, event: SpinEvent);
}

impl EventSink for Vec<SpinEvent> {
    fn emit(&mut self, event: SpinEvent) {
        self.push(event);
    }
}

impl EventSink for mpsc::Sender<SpinEvent> {
    fn emit(&mut self, event: SpinEvent) {
        // A hung-up receiver just stops listening; the spin still completes.
        let _ = self.send(event);
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: SpinEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects() {
        let mut sink = Vec::new();
        sink.emit(SpinEvent::Tick { face: "⚀".into() });
        sink.emit(SpinEvent::SpinFinished {
            winner: "claude".into(),
        });
        assert_eq!(sink.len(), 2);
        assert!(!sink[0].is_terminal());
        assert!(sink[1].is_terminal());
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = mpsc::channel();
        tx.emit(SpinEvent::ReelStopped {
            reel: 1,
            value: "amp".into(),
        });
        assert_eq!(
            rx.recv().unwrap(),
            SpinEvent::ReelStopped {
                reel: 1,
                value: "amp".into()
            }
        );
        drop(rx);
        tx.emit(SpinEvent::Tick { face: "⚁".into() });
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_string(&SpinEvent::AllStopped {
            results: ["a".into(), "b".into(), "a".into()],
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"all_stopped","results":["a","b","a"]}"#);
    }
}
