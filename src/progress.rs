//! Feedback while status reports are being collected.
//!
//! Collection is sequential and can take a while with many repositories, so
//! the terminal implementation keeps a single `collecting status: i/n` line
//! on stderr, rewritten in place and erased when done.

use std::io::{IsTerminal, Write, stderr};

use crossterm::{
    ExecutableCommand,
    cursor::{MoveToColumn, RestorePosition, SavePosition},
    terminal::{Clear, ClearType},
};

/// Receives collection progress. Implementations must not fail the run.
pub trait Progress {
    /// Called once before the first report is fetched.
    fn start(&mut self, total: usize);

    /// Called before fetching report number `current` (1-based).
    fn advance(&mut self, current: usize, total: usize);

    /// Called once after the last report, successful or not.
    fn finish(&mut self);
}

/// Silent progress, used when stderr isn't a terminal and in tests.
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&mut self, _total: usize) {}
    fn advance(&mut self, _current: usize, _total: usize) {}
    fn finish(&mut self) {}
}

/// In-place counter on stderr.
#[derive(Debug)]
pub struct TerminalProgress {
    active: bool,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Terminal progress when stderr is a TTY, otherwise silence.
    pub fn for_stderr() -> Box<dyn Progress> {
        if stderr().is_terminal() {
            Box::new(Self::new())
        } else {
            Box::new(NoProgress)
        }
    }

    fn draw(&mut self, current: usize, total: usize) -> std::io::Result<()> {
        let mut err = stderr();
        err.execute(RestorePosition)?;
        err.execute(Clear(ClearType::UntilNewLine))?;
        write!(err, "{current}/{total}")?;
        err.flush()
    }

    fn clear(&mut self) -> std::io::Result<()> {
        let mut err = stderr();
        err.execute(MoveToColumn(0))?;
        err.execute(Clear(ClearType::CurrentLine))?;
        err.flush()
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for TerminalProgress {
    fn start(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let mut err = stderr();
        let started = write!(err, "collecting status: ")
            .and_then(|_| err.execute(SavePosition).map(|_| ()))
            .and_then(|_| err.flush());
        if let Err(e) = started {
            log::debug!("progress disabled: {e}");
            return;
        }
        self.active = true;
    }

    fn advance(&mut self, current: usize, total: usize) {
        if self.active
            && let Err(e) = self.draw(current, total)
        {
            log::debug!("progress disabled: {e}");
            self.active = false;
        }
    }

    fn finish(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = self.clear() {
            log::debug!("failed to clear progress line: {e}");
        }
    }
}
