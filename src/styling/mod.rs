//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//! - Semantic style constants for the status table
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: the rendered table (`gitz list`), preview text and the `cd:` directive
//! - **stderr**: progress feedback, messages, errors and logs
//!
//! The table handed to the picker always carries ANSI codes; command output
//! goes through `anstream` streams, which strip them when not on a terminal.

mod constants;
mod format;
mod line;

// Re-export from anstream (strips colors when stderr isn't a terminal)
pub use anstream::eprintln;

pub use constants::*;
pub use format::{format_path_for_display, format_with_gutter};
pub use line::{StyledLine, strip_ansi_codes};
