//! Header and row rendering for the status table.
//!
//! Every line is built as a [`StyledLine`] so the same table can be handed
//! to the picker with ANSI codes or compared as plain text.

use anstyle::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::layout::{CountColumn, LayoutModel};
use crate::repo::Repository;
use crate::status::StatusSnapshot;
use crate::styling::{
    AHEAD, AHEAD_SYMBOL, BEHIND, BEHIND_SYMBOL, DIVERGED_SYMBOL, EQUAL_SYMBOL, HEADER, RECEDED,
    RULE, RULE_CHAR, StyledLine, TRACKING, UNMERGED, UNTRACKED, strip_ansi_codes,
};

const TITLE_NAME: &str = "REPO";
const TITLE_TRACKING: &str = "UPDATE";
const TITLE_UNTRACKED: &str = "UNTRACKED";
const TITLE_UNMERGED: &str = "UNMERGED";
const TITLE_BRANCH: &str = "BRANCH INFO";

/// Number of header lines preceding the rows
pub const HEADER_LINES: usize = 2;

/// Relationship between a branch and its upstream, shown between the two names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkIndicator {
    /// No upstream configured
    None,
    Ahead,
    Behind,
    Equal,
    Diverged,
}

impl LinkIndicator {
    pub fn for_snapshot(snapshot: &StatusSnapshot) -> Self {
        if snapshot.branch_upstream.is_empty() {
            return LinkIndicator::None;
        }
        match (snapshot.ahead, snapshot.behind) {
            (a, 0) if a > 0 => LinkIndicator::Ahead,
            (0, b) if b > 0 => LinkIndicator::Behind,
            (0, 0) => LinkIndicator::Equal,
            _ => LinkIndicator::Diverged,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LinkIndicator::None => "",
            LinkIndicator::Ahead => AHEAD_SYMBOL,
            LinkIndicator::Behind => BEHIND_SYMBOL,
            LinkIndicator::Equal => EQUAL_SYMBOL,
            LinkIndicator::Diverged => DIVERGED_SYMBOL,
        }
    }
}

/// Pad `text` on the left to `width` display columns
fn align_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(pad))
}

/// Pad `text` on the right to `width` display columns
fn align_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

/// Center `text` in `width` columns, extra space going to the right
fn align_center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}

/// The rendered header and rows, in display order.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: [StyledLine; HEADER_LINES],
    pub rows: Vec<StyledLine>,
}

impl Table {
    fn lines(&self) -> impl Iterator<Item = &StyledLine> {
        self.header.iter().chain(self.rows.iter())
    }

    /// Header and rows joined by newlines, with ANSI codes
    pub fn to_ansi(&self) -> String {
        self.lines()
            .map(StyledLine::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header and rows joined by newlines, without styling
    pub fn to_plain(&self) -> String {
        self.lines()
            .map(StyledLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders repositories against a precomputed [`LayoutModel`].
pub struct TableRenderer<'a> {
    layout: &'a LayoutModel,
}

impl<'a> TableRenderer<'a> {
    pub fn new(layout: &'a LayoutModel) -> Self {
        Self { layout }
    }

    /// Header and one row per repository, keeping the order of `repos`.
    pub fn render(&self, repos: &[Repository]) -> Table {
        Table {
            header: self.header(),
            rows: repos.iter().map(|repo| self.row(repo)).collect(),
        }
    }

    /// Title line and rule line
    pub fn header(&self) -> [StyledLine; HEADER_LINES] {
        let layout = self.layout;
        let mut titles = StyledLine::new();
        let mut rule = StyledLine::new();
        let fill = |width: usize| RULE_CHAR.to_string().repeat(width);

        titles.push_styled(align_right(TITLE_NAME, layout.name_field), HEADER);
        rule.push_styled(fill(layout.name_field), RULE);

        for (column, title) in [
            (&layout.tracking, TITLE_TRACKING),
            (&layout.untracked, TITLE_UNTRACKED),
            (&layout.unmerged, TITLE_UNMERGED),
        ] {
            if column.visible {
                titles.push_raw(" ");
                titles.push_styled(align_center(title, column.field), HEADER);
                rule.push_raw(" ");
                rule.push_styled(fill(column.field), RULE);
            }
        }

        titles.push_raw(" ");
        titles.push_styled(align_center(TITLE_BRANCH, layout.branch.field), HEADER);
        rule.push_raw(" ");
        rule.push_styled(fill(layout.branch.field), RULE);

        [titles, rule]
    }

    /// One repository's row
    pub fn row(&self, repo: &Repository) -> StyledLine {
        let layout = self.layout;
        let s = repo.snapshot();
        let mut line = StyledLine::new();

        line.push_raw(align_right(repo.name(), layout.name_field));

        for (column, value, style) in [
            (&layout.tracking, s.tracking, TRACKING),
            (&layout.untracked, s.untracked, UNTRACKED),
            (&layout.unmerged, s.unmerged, UNMERGED),
        ] {
            if column.visible {
                line.push_raw(" ");
                push_count(&mut line, column, value, style);
            }
        }

        line.push_raw(" ");
        line.extend(self.branch_field(s));
        line
    }

    /// `<head> <link> <upstream>`, dimmed as a whole when nothing diverges.
    fn branch_field(&self, s: &StatusSnapshot) -> StyledLine {
        let b = &self.layout.branch;
        let head = align_right(&s.branch_head, b.head);
        let upstream = align_left(&s.branch_upstream, b.upstream);

        let mut link = StyledLine::new();
        if b.show_ahead {
            push_commit_count(&mut link, s.ahead, b.ahead_digits, AHEAD, align_right);
            link.push_raw(" ");
        }
        link.push_raw(align_left(LinkIndicator::for_snapshot(s).symbol(), 2));
        if b.show_behind {
            link.push_raw(" ");
            push_commit_count(&mut link, s.behind, b.behind_digits, BEHIND, align_left);
        }

        let mut field = StyledLine::new();
        if s.is_diverged_from_upstream() {
            field.push_raw(head);
            field.push_raw(" ");
            field.extend(link);
            field.push_raw(" ");
            field.push_raw(upstream);
        } else {
            let text = format!("{head} {} {upstream}", link.plain_text());
            field.push_styled(text, RECEDED);
        }
        field
    }

    /// Recover the repository name from a rendered row (ANSI codes allowed).
    pub fn name_from_line(&self, line: &str) -> String {
        let plain = strip_ansi_codes(line);
        let mut taken = 0;
        let mut end = plain.len();
        for (idx, ch) in plain.char_indices() {
            let w = ch.width().unwrap_or(0);
            if taken + w > self.layout.name_field {
                end = idx;
                break;
            }
            taken += w;
        }
        plain[..end].trim().to_string()
    }
}

/// A count centered in its column; blank when zero, colored when positive.
fn push_count(line: &mut StyledLine, column: &CountColumn, value: usize, style: Style) {
    if value == 0 {
        line.push_raw(" ".repeat(column.field));
        return;
    }
    let block = align_right(&value.to_string(), column.digits);
    line.push_styled(align_center(&block, column.field), style);
}

/// An ahead/behind count aligned in its sub-column; blank when zero.
fn push_commit_count(
    line: &mut StyledLine,
    value: usize,
    width: usize,
    style: Style,
    align: fn(&str, usize) -> String,
) {
    if value == 0 {
        line.push_raw(" ".repeat(width));
    } else {
        line.push_styled(align(&value.to_string(), width), style);
    }
}
