//! Parsing of `git status --porcelain=v2 --branch` reports.
//!
//! A report is classified line by line: [`ReportLine::parse`] turns one line
//! into a token and [`StatusSnapshot::parse`] folds the tokens into counts.
//! Nothing here can fail; lines that don't fit the expected shape are
//! absorbed as defaults or counted as skipped.
//!
//! ```text
//! # branch.oid 2ad3b0f0a7c9...
//! # branch.head main
//! # branch.upstream origin/main
//! # branch.ab +2 -0
//! 1 .M N... 100644 100644 100644 3b18e5... 3b18e5... src/lib.rs
//! 2 R. N... 100644 100644 100644 9f2c11... 9f2c11... R100 new.rs	old.rs
//! u UU N... 100644 100644 100644 100644 a1... b2... c3... conflict.rs
//! ? notes.txt
//! ```

const BRANCH_HEAD: &str = "# branch.head";
const BRANCH_UPSTREAM: &str = "# branch.upstream";
const BRANCH_AB: &str = "# branch.ab";

/// One classified line of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine<'a> {
    /// `# branch.head <name>`; `None` when the name is missing
    BranchHead(Option<&'a str>),
    /// `# branch.upstream <name>`; `None` when the name is missing
    BranchUpstream(Option<&'a str>),
    /// `# branch.ab +<ahead> -<behind>`; `None` when the counts don't parse
    BranchAheadBehind(Option<(usize, usize)>),
    /// Ordinary (`1`) or renamed/copied (`2`) change to a tracked file
    Tracked,
    /// Unmerged entry (`u`)
    Unmerged,
    /// Untracked entry (`?`)
    Untracked,
    /// Anything else: `# branch.oid`, ignored entries, unknown prefixes
    Other,
}

impl<'a> ReportLine<'a> {
    /// Classify one line by its prefix. First match wins.
    pub fn parse(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(BRANCH_HEAD) {
            ReportLine::BranchHead(branch_value(rest))
        } else if let Some(rest) = line.strip_prefix(BRANCH_UPSTREAM) {
            ReportLine::BranchUpstream(branch_value(rest))
        } else if let Some(rest) = line.strip_prefix(BRANCH_AB) {
            ReportLine::BranchAheadBehind(ahead_behind_value(rest))
        } else if line.starts_with('1') || line.starts_with('2') {
            ReportLine::Tracked
        } else if line.starts_with('u') {
            ReportLine::Unmerged
        } else if line.starts_with('?') {
            ReportLine::Untracked
        } else {
            ReportLine::Other
        }
    }
}

/// The text after `# branch.<key>`: a single space, then the value.
fn branch_value(rest: &str) -> Option<&str> {
    rest.strip_prefix(' ').filter(|value| !value.is_empty())
}

/// Parse ` +<ahead> -<behind>`.
fn ahead_behind_value(rest: &str) -> Option<(usize, usize)> {
    let rest = rest.strip_prefix(" +")?;
    let (ahead, behind) = rest.split_once(" -")?;
    Some((ahead.parse().ok()?, behind.parse().ok()?))
}

/// Counts and branch relationship of one repository's working tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Changes to files already known to git (staged or modified)
    pub tracking: usize,
    /// Files on disk not yet known to git
    pub untracked: usize,
    /// Files with unresolved merge conflicts
    pub unmerged: usize,
    /// Lines that carried no countable information
    pub skipped: usize,
    pub branch_head: String,
    /// Empty when no upstream is configured
    pub branch_upstream: String,
    pub ahead: usize,
    pub behind: usize,
}

impl StatusSnapshot {
    /// Build a snapshot from a raw report.
    pub fn parse(report: &str) -> Self {
        let mut snapshot = Self::default();
        for line in report.lines() {
            snapshot.absorb(ReportLine::parse(line));
        }

        // Ahead/behind only mean something relative to an upstream
        if snapshot.branch_upstream.is_empty() {
            snapshot.ahead = 0;
            snapshot.behind = 0;
        }

        log::trace!(
            "parsed status: tracking={} untracked={} unmerged={} skipped={} head={:?} upstream={:?} ab=+{}-{}",
            snapshot.tracking,
            snapshot.untracked,
            snapshot.unmerged,
            snapshot.skipped,
            snapshot.branch_head,
            snapshot.branch_upstream,
            snapshot.ahead,
            snapshot.behind,
        );

        snapshot
    }

    fn absorb(&mut self, line: ReportLine<'_>) {
        match line {
            ReportLine::BranchHead(Some(name)) => self.branch_head = name.to_string(),
            ReportLine::BranchUpstream(Some(name)) => self.branch_upstream = name.to_string(),
            ReportLine::BranchAheadBehind(Some((ahead, behind))) => {
                self.ahead = ahead;
                self.behind = behind;
            }
            ReportLine::BranchHead(None)
            | ReportLine::BranchUpstream(None)
            | ReportLine::BranchAheadBehind(None) => {
                log::debug!("ignoring malformed branch line");
            }
            ReportLine::Tracked => self.tracking += 1,
            ReportLine::Unmerged => self.unmerged += 1,
            ReportLine::Untracked => self.untracked += 1,
            ReportLine::Other => self.skipped += 1,
        }
    }

    /// Whether the local branch and its upstream point at different commits
    pub fn is_diverged_from_upstream(&self) -> bool {
        self.ahead > 0 || self.behind > 0
    }

    /// Total of entries and commits needing attention
    pub fn activity(&self) -> usize {
        self.tracking + self.untracked + self.unmerged + self.ahead + self.behind
    }
}
