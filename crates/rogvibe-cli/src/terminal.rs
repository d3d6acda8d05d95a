use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use rogvibe::TerminalControl;
use std::io::{self, IsTerminal, Write};

/// The terminal while rogvibe is drawing on it.
///
/// The cursor is hidden only while a spin animates, and is always shown
/// again, whether the session ends normally, hands off to another program,
/// or unwinds.
pub struct TerminalSession {
    interactive: bool,
    hidden: bool,
    hidden_before_suspend: bool,
}

impl TerminalSession {
    pub fn start() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            hidden: false,
            hidden_before_suspend: false,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Hides the cursor until the returned guard is dropped.
    pub fn spinning(&mut self) -> Spinning<'_> {
        self.hide();
        Spinning { terminal: self }
    }

    fn hide(&mut self) {
        if self.interactive && !self.hidden {
            // Nothing useful to do if the terminal is gone.
            let _ = execute!(io::stdout(), Hide);
            self.hidden = true;
        }
    }

    fn show(&mut self) {
        if self.hidden {
            let _ = execute!(io::stdout(), Show);
            self.hidden = false;
        }
    }
}

impl TerminalControl for TerminalSession {
    fn suspend(&mut self) {
        self.hidden_before_suspend = self.hidden;
        self.show();
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }

    fn resume(&mut self) {
        if self.hidden_before_suspend {
            self.hide();
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.show();
    }
}

/// A spin in progress; shows the cursor again on drop.
pub struct Spinning<'a> {
    terminal: &'a mut TerminalSession,
}

impl Drop for Spinning<'_> {
    fn drop(&mut self) {
        self.terminal.show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(interactive: bool) -> TerminalSession {
        TerminalSession {
            interactive,
            hidden: false,
            hidden_before_suspend: false,
        }
    }

    #[test]
    fn test_cursor_visible_outside_spin() {
        let mut term = session(true);
        assert!(!term.hidden);
        {
            let spin = term.spinning();
            assert!(spin.terminal.hidden);
        }
        assert!(!term.hidden);
    }

    #[test]
    fn test_piped_output_never_hides() {
        let mut term = session(false);
        let spin = term.spinning();
        assert!(!spin.terminal.hidden);
    }

    #[test]
    fn test_resume_restores_previous_state() {
        let mut term = session(true);
        term.suspend();
        term.resume();
        assert!(!term.hidden);

        term.hide();
        term.suspend();
        assert!(!term.hidden);
        term.resume();
        assert!(term.hidden);
        term.show();
    }
}
