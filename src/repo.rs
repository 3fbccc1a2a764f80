//! Repositories taking part in one collection run.

use std::path::{Path, PathBuf};

use crate::status::StatusSnapshot;

/// Priority of repositories listed explicitly in the configuration
pub const CONFIGURED_PRIORITY: i64 = 10;

/// Priority of repositories found by scanning `repos-under` directories
pub const DISCOVERED_PRIORITY: i64 = 5;

/// Identity of a repository before its status is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSeed {
    /// Display key, unique within a collection
    pub name: String,
    pub path: PathBuf,
    pub priority: i64,
}

impl RepoSeed {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, priority: i64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            priority,
        }
    }
}

/// A repository with its parsed working-tree status.
///
/// Built once per run from a seed and a report; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    name: String,
    path: PathBuf,
    priority: i64,
    snapshot: StatusSnapshot,
}

impl Repository {
    /// Parse `report` and attach the result to the seed's identity.
    pub fn from_report(seed: RepoSeed, report: &str) -> Self {
        Self::with_snapshot(seed, StatusSnapshot::parse(report))
    }

    pub fn with_snapshot(seed: RepoSeed, snapshot: StatusSnapshot) -> Self {
        Self {
            name: seed.name,
            path: seed.path,
            priority: seed.priority,
            snapshot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    /// Ranking key; larger sorts first.
    ///
    /// The priority term dominates so configured repositories stay above
    /// discovered ones, then having an upstream, then plain activity.
    /// Priorities come from user config, so the arithmetic saturates.
    pub fn sort_weight(&self) -> i64 {
        let s = &self.snapshot;
        let upstream_bonus = if s.branch_upstream.is_empty() { 0 } else { 200 };
        let activity = i64::try_from(s.activity()).unwrap_or(i64::MAX);
        self.priority
            .saturating_mul(300)
            .saturating_add(upstream_bonus)
            .saturating_add(activity)
    }
}
