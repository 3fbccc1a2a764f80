//! One run's worth of repositories: fetched, ranked, laid out, rendered.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use crate::error::GitzError;
use crate::git::ReportProvider;
use crate::layout::LayoutModel;
use crate::picker::{PickOutcome, Picker};
use crate::progress::Progress;
use crate::render::{Table, TableRenderer};
use crate::repo::{RepoSeed, Repository};

/// Fail on the first name that appears twice among `(name, path)` pairs.
fn ensure_unique<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a Path)>,
) -> Result<(), GitzError> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for (name, path) in entries {
        if let Some(first) = seen.insert(name, path) {
            return Err(GitzError::DuplicateRepository {
                name: name.to_string(),
                first: first.to_path_buf(),
                second: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Fail on the first seed name that appears twice.
pub fn check_unique_names(seeds: &[RepoSeed]) -> Result<(), GitzError> {
    ensure_unique(seeds.iter().map(|seed| (seed.name.as_str(), seed.path.as_path())))
}

/// Sort by descending weight; equal weights keep their order.
pub fn rank(repos: &mut [Repository]) {
    repos.sort_by_key(|repo| Reverse(repo.sort_weight()));
}

/// Ranked repositories and the layout derived from them.
#[derive(Debug)]
pub struct Collection {
    repos: Vec<Repository>,
    layout: LayoutModel,
}

impl Collection {
    /// Fetch and parse a report for every seed, in seed order.
    ///
    /// The first failing report aborts the run: a partial table would hide
    /// repositories without saying so.
    pub fn collect(
        seeds: Vec<RepoSeed>,
        provider: &dyn ReportProvider,
        progress: &mut dyn Progress,
    ) -> anyhow::Result<Self> {
        check_unique_names(&seeds)?;

        let total = seeds.len();
        progress.start(total);
        let fetched: anyhow::Result<Vec<_>> = seeds
            .into_iter()
            .enumerate()
            .map(|(idx, seed)| {
                progress.advance(idx + 1, total);
                let report = provider.status_report(&seed)?;
                Ok(Repository::from_report(seed, &report))
            })
            .collect();
        progress.finish();

        Ok(Self::ranked(fetched?))
    }

    /// Rank already-parsed repositories and compute their layout.
    pub fn from_repositories(repos: Vec<Repository>) -> Result<Self, GitzError> {
        ensure_unique(repos.iter().map(|repo| (repo.name(), repo.path())))?;
        Ok(Self::ranked(repos))
    }

    fn ranked(mut repos: Vec<Repository>) -> Self {
        rank(&mut repos);
        let layout = LayoutModel::compute(&repos);
        log::debug!("collected {} repositories", repos.len());
        Self { repos, layout }
    }

    /// Repositories in ranked order
    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn render(&self) -> Table {
        TableRenderer::new(&self.layout).render(&self.repos)
    }

    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.repos.iter().find(|repo| repo.name() == name)
    }

    /// Map a line chosen in the picker back to its repository.
    pub fn resolve_line(&self, line: &str) -> Result<&Repository, GitzError> {
        let name = TableRenderer::new(&self.layout).name_from_line(line);
        self.get(&name)
            .ok_or(GitzError::UnknownRepository { name })
    }

    /// Show the table in `picker` and resolve the chosen row.
    ///
    /// `None` when the user cancelled.
    pub fn choose(&self, picker: &dyn Picker) -> anyhow::Result<Option<&Repository>> {
        match picker.pick(&self.render())? {
            PickOutcome::Selected(line) => Ok(Some(self.resolve_line(&line)?)),
            PickOutcome::Cancelled => {
                log::debug!("selection cancelled");
                Ok(None)
            }
        }
    }
}
