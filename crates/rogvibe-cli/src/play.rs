use crate::render::{self, View};
use crate::terminal::TerminalSession;
use anyhow::{Context, Result};
use rogvibe::{
    Clock, EventSink, ExecResult, Handoff, HandoffError, InstantClock, RandomSource, Scheduler,
    Session, SpinEvent, ThreadClock,
};
use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, BufRead, Write};

pub struct PlayOptions {
    pub once: bool,
    pub dry_run: bool,
    pub instant: bool,
}

/// Redraws the status line as events arrive.
struct Redraw {
    view: View,
    animate: bool,
}

impl EventSink for Redraw {
    fn emit(&mut self, event: SpinEvent) {
        self.view.apply(&event);
        if self.animate {
            let mut out = io::stdout();
            let _ = queue!(
                out,
                MoveToColumn(0),
                Print(self.view.status()),
                Clear(ClearType::UntilNewLine)
            );
            let _ = out.flush();
        }
    }
}

/// Spins until a command is handed off or the user quits. Returns the
/// process exit code.
pub fn run(
    session: &mut Session,
    rng: &mut dyn RandomSource,
    options: &PlayOptions,
) -> Result<u8> {
    let mut terminal = TerminalSession::start();
    let mut clock: Box<dyn Clock> = if options.instant {
        Box::new(InstantClock::default())
    } else {
        Box::new(ThreadClock)
    };

    print!("{}", View::of(session.game()).board());

    if options.once {
        spin(session, rng, clock.as_mut(), &mut terminal);
        return Ok(match session.runnable_command() {
            Some(command) => hand_off(command, options.dry_run, &mut terminal),
            None => 0,
        });
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("Press Enter or s to spin, q to quit.");
    loop {
        let Some(line) = lines.next() else {
            return Ok(0);
        };
        let line = line.context("Failed to read from stdin")?;
        match line.trim() {
            "q" => return Ok(0),
            "" => {
                if let Some(command) = session.runnable_command() {
                    return Ok(hand_off(command, options.dry_run, &mut terminal));
                }
                spin(session, rng, clock.as_mut(), &mut terminal);
            }
            "s" => spin(session, rng, clock.as_mut(), &mut terminal),
            other => log::debug!("ignoring input {:?}", other),
        }
    }
}

fn spin(
    session: &mut Session,
    rng: &mut dyn RandomSource,
    clock: &mut dyn Clock,
    terminal: &mut TerminalSession,
) {
    let mut redraw = Redraw {
        view: View::of(session.game()),
        animate: terminal.is_interactive(),
    };
    {
        let _spinning = terminal.spinning();
        let summary = Scheduler::new().run(session, rng, clock, &mut redraw);
        log::debug!("spin took {} ticks over {:?}", summary.ticks, summary.elapsed);
    }

    if redraw.animate {
        println!();
    }
    print!("{}", redraw.view.board());
    println!("{}", render::outcome(session));
}

fn hand_off(command: &str, dry_run: bool, terminal: &mut TerminalSession) -> u8 {
    let mut handoff = Handoff::system();
    if dry_run {
        return match handoff.plan(command) {
            Ok(Some(invocation)) => {
                println!(
                    "would run: {} {}",
                    invocation.path.display(),
                    invocation.argv.join(" ")
                );
                0
            }
            Ok(None) => 0,
            Err(err) => report(&err),
        };
    }

    match handoff.execute(command, terminal) {
        ExecResult::Nothing => 0,
        ExecResult::Failed(err) => report(&err),
    }
}

fn report(err: &HandoffError) -> u8 {
    eprintln!("[rogvibe] {}", err);
    u8::try_from(err.exit_code()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogvibe::{Game, Wheel};

    #[test]
    fn test_redraw_tracks_events_without_drawing() {
        let names = ["a", "b", "c", "d"].map(String::from).to_vec();
        let game = Game::Wheel(Wheel::new(names).unwrap());
        let mut redraw = Redraw {
            view: View::of(&game),
            animate: false,
        };
        redraw.emit(SpinEvent::Tick { face: "⚄".into() });
        redraw.emit(SpinEvent::Tick { face: "⚁".into() });
        assert_eq!(redraw.view.status(), "⚁ Spinning... c");
    }
}
