//! Column widths and visibility derived from a whole collection.

use unicode_width::UnicodeWidthStr;

use crate::repo::Repository;

/// Minimum width of the name column
pub const NAME_FIELD_FLOOR: usize = 14;

/// Minimum width of each count column (fits the `UNTRACKED` title)
pub const COUNT_FIELD_FLOOR: usize = 9;

/// Spaces around the two-column link indicator inside the branch field
const LINK_ALLOWANCE: usize = 4;

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Width information for one count column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountColumn {
    /// Widest value across the collection, in digits
    pub digits: usize,
    /// Column width after the floor is applied
    pub field: usize,
    /// Whether any repository has a positive value
    pub visible: bool,
}

impl CountColumn {
    fn new(digits: usize, visible: bool) -> Self {
        Self {
            digits,
            field: digits.max(COUNT_FIELD_FLOOR),
            visible,
        }
    }
}

/// Widths of the parts of the branch field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchColumn {
    pub head: usize,
    pub upstream: usize,
    pub ahead_digits: usize,
    pub behind_digits: usize,
    pub show_ahead: bool,
    pub show_behind: bool,
    /// Width of the whole field, not counting its leading separator
    pub field: usize,
}

/// Layout computed fresh for every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutModel {
    pub max_name_width: usize,
    pub name_field: usize,
    pub tracking: CountColumn,
    pub untracked: CountColumn,
    pub unmerged: CountColumn,
    pub branch: BranchColumn,
}

impl LayoutModel {
    /// Scan every repository once and derive the layout.
    pub fn compute(repos: &[Repository]) -> Self {
        let mut max_name_width = 0;
        let (mut tracking_digits, mut untracked_digits, mut unmerged_digits) = (0, 0, 0);
        let (mut show_tracking, mut show_untracked, mut show_unmerged) = (false, false, false);
        let (mut max_head, mut max_upstream) = (0, 0);
        let (mut ahead_digits, mut behind_digits) = (0, 0);
        let (mut show_ahead, mut show_behind) = (false, false);

        for repo in repos {
            let s = repo.snapshot();

            max_name_width = max_name_width.max(repo.name().width());

            tracking_digits = tracking_digits.max(digits(s.tracking));
            untracked_digits = untracked_digits.max(digits(s.untracked));
            unmerged_digits = unmerged_digits.max(digits(s.unmerged));
            show_tracking |= s.tracking > 0;
            show_untracked |= s.untracked > 0;
            show_unmerged |= s.unmerged > 0;

            max_head = max_head.max(s.branch_head.width());
            max_upstream = max_upstream.max(s.branch_upstream.width());

            ahead_digits = ahead_digits.max(digits(s.ahead));
            behind_digits = behind_digits.max(digits(s.behind));
            show_ahead |= s.ahead > 0;
            show_behind |= s.behind > 0;
        }

        let mut branch_field = max_head + LINK_ALLOWANCE + max_upstream;
        if show_ahead {
            branch_field += 1 + ahead_digits;
        }
        if show_behind {
            branch_field += 1 + behind_digits;
        }

        let layout = Self {
            max_name_width,
            name_field: max_name_width.max(NAME_FIELD_FLOOR),
            tracking: CountColumn::new(tracking_digits, show_tracking),
            untracked: CountColumn::new(untracked_digits, show_untracked),
            unmerged: CountColumn::new(unmerged_digits, show_unmerged),
            branch: BranchColumn {
                head: max_head,
                upstream: max_upstream,
                ahead_digits,
                behind_digits,
                show_ahead,
                show_behind,
                field: branch_field,
            },
        };

        log::debug!(
            "widths: name:{} tracking:{} untracked:{} unmerged:{} branch:{}",
            layout.max_name_width,
            layout.tracking.digits,
            layout.untracked.digits,
            layout.unmerged.digits,
            layout.branch.field,
        );

        layout
    }

    /// Visible count columns in display order
    pub fn visible_counts(&self) -> impl Iterator<Item = &CountColumn> {
        [&self.tracking, &self.untracked, &self.unmerged]
            .into_iter()
            .filter(|c| c.visible)
    }

    /// Width of every rendered line
    pub fn line_width(&self) -> usize {
        let counts: usize = self.visible_counts().map(|c| 1 + c.field).sum();
        self.name_field + counts + 1 + self.branch.field
    }
}
