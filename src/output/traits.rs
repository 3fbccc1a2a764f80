//! Output handler trait with default implementations
//!
//! The two primitives are `write_message_line` (user messages, stderr) and
//! `write_data` (machine-consumable output, stdout). Everything else is built
//! on top of them.
//!
//! # Semantic Colors
//!
//! - hint → dimmed
//! - info → no color
//!
//! Errors are printed by `main`, not through a handler.
//!
//! Callers provide content with optional inner styling (like `<bold>`) using
//! `cformat!`; the trait adds the outer semantic color.

use std::io;
use std::path::Path;

use color_print::cformat;

use gitz::styling::{HINT_EMOJI, INFO_EMOJI};

/// Prefix of the line telling the shell wrapper where to go
pub const CD_DIRECTIVE: &str = "cd:";

pub trait OutputHandler {
    /// Write a single logical message line to the user stream (stderr)
    fn write_message_line(&mut self, line: &str) -> io::Result<()>;

    /// Write a line of output meant for other programs (stdout)
    fn write_data(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Emit a hint message (automatically wrapped in dim styling)
    fn hint(&mut self, message: String) -> io::Result<()> {
        self.write_message_line(&cformat!("{HINT_EMOJI} <dim>{message}</>"))
    }

    /// Emit an info message (no color)
    fn info(&mut self, message: String) -> io::Result<()> {
        self.write_message_line(&cformat!("{INFO_EMOJI} {message}"))
    }

    /// Emit a block of data (table, preview text) as-is
    fn data(&mut self, content: &str) -> io::Result<()> {
        self.write_data(content)
    }

    /// Ask the shell wrapper to change directory: `cd:<path>` on stdout
    fn change_directory(&mut self, path: &Path) -> io::Result<()> {
        self.write_data(&format!("{CD_DIRECTIVE}{}", path.display()))?;
        self.flush()
    }
}
