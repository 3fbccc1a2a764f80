//! Semantic style constants and glyphs shared by the renderer and messages.

use anstyle::{AnsiColor, Color, RgbColor, Style};

/// Tracked changes (staged or modified files)
pub const TRACKING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Untracked files
pub const UNTRACKED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Unmerged (conflicted) entries
pub const UNMERGED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));

/// Commits only on the local branch
pub const AHEAD: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));

/// Commits only on the upstream
pub const BEHIND: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Low-intensity tone for branch fields that need no remote action
pub const RECEDED: Style = Style::new().fg_color(Some(Color::Rgb(RgbColor(100, 100, 100))));

/// Header titles
pub const HEADER: Style = Style::new().bold();

/// Header rule line
pub const RULE: Style = Style::new().dimmed();

/// Hint text in messages
pub const HINT: Style = Style::new().dimmed();

// Link indicators between branch head and upstream
pub const AHEAD_SYMBOL: &str = "⇢";
pub const BEHIND_SYMBOL: &str = "⇠";
pub const EQUAL_SYMBOL: &str = "⟚";
pub const DIVERGED_SYMBOL: &str = "⇅";

/// Fill character of the header rule line
pub const RULE_CHAR: char = '‾';

// Message prefixes
pub const ERROR_EMOJI: &str = "❌";
pub const HINT_EMOJI: &str = "💡";
pub const INFO_EMOJI: &str = "⚪";
