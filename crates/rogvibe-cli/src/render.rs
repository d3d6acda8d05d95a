use rogvibe::{Game, MatchResult, Session, SpinEvent, WheelLayout};

const SMALL_CELL: usize = 12;
const LARGE_CELL: usize = 14;

/// What the screen shows, kept in step with engine events.
pub enum View {
    Wheel {
        participants: Vec<String>,
        layout: WheelLayout,
        index: usize,
        face: String,
    },
    Slot {
        values: [String; 3],
    },
}

impl View {
    pub fn of(game: &Game) -> Self {
        match game {
            Game::Wheel(wheel) => View::Wheel {
                participants: wheel.participants().to_vec(),
                layout: wheel.layout(),
                index: wheel.current_index(),
                face: wheel.face().to_string(),
            },
            Game::Slot(machine) => View::Slot {
                values: std::array::from_fn(|i| machine.reels()[i].display().to_string()),
            },
        }
    }

    pub fn apply(&mut self, event: &SpinEvent) {
        match (self, event) {
            (
                View::Wheel {
                    participants,
                    index,
                    face: shown,
                    ..
                },
                SpinEvent::Tick { face },
            ) => {
                *index = (*index + 1) % participants.len();
                *shown = face.clone();
            }
            (View::Wheel { face, .. }, SpinEvent::SpinFinished { .. }) => {
                *face = rogvibe::wheel::TARGET_EMOJI.to_string();
            }
            (
                View::Slot { values },
                SpinEvent::ReelTick { reel, value } | SpinEvent::ReelStopped { reel, value },
            ) => {
                if let Some(slot) = values.get_mut(*reel) {
                    *slot = value.clone();
                }
            }
            _ => {}
        }
    }

    /// Full board, several lines.
    pub fn board(&self) -> String {
        match self {
            View::Wheel {
                participants,
                layout,
                index,
                face,
            } => {
                let width = if layout.grid_size == 2 {
                    SMALL_CELL
                } else {
                    LARGE_CELL
                };
                let mut out = String::new();
                for row in layout.cells().chunks(layout.grid_size) {
                    let line: Vec<String> = row
                        .iter()
                        .map(|cell| match cell {
                            None => center(face, width),
                            Some(i) => match participants.get(*i) {
                                Some(name) => cell_text(name, *i == *index, width),
                                None => " ".repeat(width),
                            },
                        })
                        .collect();
                    out.push_str(line.join(" ").trim_end());
                    out.push('\n');
                }
                out
            }
            View::Slot { .. } => format!("{}\n", self.status()),
        }
    }

    /// One-line frame redrawn on every tick.
    pub fn status(&self) -> String {
        match self {
            View::Wheel {
                participants,
                index,
                face,
                ..
            } => format!("{} Spinning... {}", face, participants[*index]),
            View::Slot { values } => {
                let cells: Vec<String> = values.iter().map(|v| center(v, LARGE_CELL)).collect();
                format!("|{}|", cells.join("|"))
            }
        }
    }
}

/// Message shown once a spin is over.
pub fn outcome(session: &Session) -> String {
    match session.game() {
        Game::Wheel(_) => match session.pending() {
            Some(p) if p.is_runnable() => format!(
                "🎉 viber: {}\n↩️  Press Enter to run and exit, or q to quit.",
                p.command()
            ),
            Some(p) => format!(
                "🎉 viber: {}\n🍀 Lucky winner! Press Enter to spin again, or q to quit.",
                p.command()
            ),
            None => String::new(),
        },
        Game::Slot(_) => match session.last_match() {
            Some(MatchResult::Jackpot(v)) => format!(
                "🎰 JACKPOT: {}\n↩️  Press Enter to run and exit, or q to quit.",
                v
            ),
            Some(MatchResult::Pair(v)) => {
                format!("✨ Pair of {}! So close. Press Enter to spin again, or q to quit.", v)
            }
            Some(MatchResult::NoMatch) => {
                "💨 No match. Press Enter to spin again, or q to quit.".to_string()
            }
            None => String::new(),
        },
    }
}

/// Warning for names that did not fit on the wheel.
pub fn truncation_notice(layout: &WheelLayout) -> Option<String> {
    layout.truncated().then(|| {
        format!(
            "Showing only the first {} names; the remaining {} are ignored.",
            layout.capacity, layout.extra_count
        )
    })
}

fn cell_text(name: &str, highlight: bool, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let label = ellipsize(name, inner);
    if highlight {
        format!("[{}]", center(&label, inner))
    } else {
        format!(" {} ", center(&label, inner))
    }
}

fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
