//! Turning the configuration into the seed list for one run.

use std::fs;
use std::path::Path;

use crate::config::{GitzConfig, expand_tilde};
use crate::error::GitzError;
use crate::repo::{CONFIGURED_PRIORITY, DISCOVERED_PRIORITY, RepoSeed};
use crate::styling::strip_ansi_codes;

/// Configured repositories first, then (with `include_all`) every git
/// checkout directly under each `repos-under` directory.
pub fn discover(config: &GitzConfig, include_all: bool) -> Result<Vec<RepoSeed>, GitzError> {
    let mut seeds: Vec<RepoSeed> = config
        .repos
        .iter()
        .map(|entry| {
            RepoSeed::new(
                entry.name.clone(),
                entry.expanded_path(),
                entry.priority.unwrap_or(CONFIGURED_PRIORITY),
            )
        })
        .collect();

    if include_all {
        for dir in &config.repos_under {
            let found = scan(&expand_tilde(dir))?;
            log::debug!("found {} repositories under {}", found.len(), dir);
            seeds.extend(found);
        }
    }

    Ok(seeds)
}

/// Checkouts under every readable `repos-under` directory.
///
/// Unlike [`discover`], a directory that can't be scanned is logged and
/// skipped, for callers that only need to find a match.
pub fn scan_readable(config: &GitzConfig) -> Vec<RepoSeed> {
    config
        .repos_under
        .iter()
        .flat_map(|dir| match scan(&expand_tilde(dir)) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("skipping {dir}: {e:?}");
                Vec::new()
            }
        })
        .collect()
}

/// Immediate sub-directories of `dir` that contain a `.git` entry, sorted
/// by name. Hidden directories are skipped.
pub fn scan(dir: &Path) -> Result<Vec<RepoSeed>, GitzError> {
    let failed = |e: std::io::Error| GitzError::DiscoveryFailed {
        dir: dir.to_path_buf(),
        error: e.to_string(),
    };

    let mut seeds = Vec::new();
    for entry in fs::read_dir(dir).map_err(failed)? {
        let path = entry.map_err(failed)?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if !path.join(".git").exists() {
            log::trace!("skipping {}: not a git checkout", path.display());
            continue;
        }
        seeds.push(RepoSeed::new(name, path, DISCOVERED_PRIORITY));
    }
    seeds.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(seeds)
}

/// Find the seed a rendered table row belongs to without collecting status.
///
/// The row starts with the right-aligned name followed by a space, so the
/// longest seed name the trimmed row starts with wins.
pub fn seed_for_line<'a>(seeds: &'a [RepoSeed], line: &str) -> Option<&'a RepoSeed> {
    let plain = strip_ansi_codes(line);
    let row = plain.trim_start();
    seeds
        .iter()
        .filter(|seed| {
            row.strip_prefix(seed.name.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
        })
        .max_by_key(|seed| seed.name.len())
}
