//! Table lines as runs of styled text.
//!
//! Widths are measured on the visible text only, so alignment code can mix
//! colored and plain cells.

use anstyle::Style;
use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences (SGR colors and OSC links).
pub fn strip_ansi_codes(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}

/// A run of text sharing one style; `None` is written without escapes.
#[derive(Clone, Debug)]
struct Run {
    text: String,
    style: Option<Style>,
}

/// One line of the status table.
#[derive(Clone, Debug, Default)]
pub struct StyledLine {
    runs: Vec<Run>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.runs.push(Run {
            text: text.into(),
            style: None,
        });
    }

    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.runs.push(Run {
            text: text.into(),
            style: Some(style),
        });
    }

    /// Append `other`'s runs, keeping their styles.
    pub fn extend(&mut self, other: StyledLine) {
        self.runs.extend(other.runs);
    }

    /// Terminal columns the line occupies
    pub fn width(&self) -> usize {
        self.runs
            .iter()
            .map(|run| strip_ansi_codes(&run.text).width())
            .sum()
    }

    /// Text with each styled run wrapped in its escape and reset codes
    pub fn render(&self) -> String {
        self.runs
            .iter()
            .map(|run| match run.style {
                Some(style) => format!("{}{}{}", style.render(), run.text, style.render_reset()),
                None => run.text.clone(),
            })
            .collect()
    }

    pub fn plain_text(&self) -> String {
        strip_ansi_codes(&self.runs.iter().map(|run| run.text.as_str()).collect::<String>())
    }
}
