//! Access to `git` for status reports.

use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::error::GitzError;
use crate::repo::RepoSeed;
use crate::shell_exec;

/// Arguments producing the machine-readable report parsed by [`crate::status`]
pub const STATUS_ARGS: [&str; 4] = [
    "status",
    "--porcelain=v2",
    "--untracked-files=all",
    "--branch",
];

/// Source of raw status reports, one repository at a time.
pub trait ReportProvider {
    /// The raw porcelain v2 report for `seed`.
    ///
    /// Fails when the report can't be produced; an empty report is a failure
    /// too, since git always prints branch headers for a real repository.
    fn status_report(&self, seed: &RepoSeed) -> anyhow::Result<String>;
}

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitStatusProvider;

impl ReportProvider for GitStatusProvider {
    fn status_report(&self, seed: &RepoSeed) -> anyhow::Result<String> {
        let mut cmd = git_in(&seed.path);
        cmd.args(STATUS_ARGS);
        let output = shell_exec::run(&mut cmd, Some(&seed.name))
            .with_context(|| format!("Failed to run {}", shell_exec::describe(&cmd)))?;

        if !output.status.success() {
            return Err(GitzError::ReportFailed {
                name: seed.name.clone(),
                path: seed.path.clone(),
                error: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        let report = String::from_utf8_lossy(&output.stdout).into_owned();
        if report.trim().is_empty() {
            return Err(GitzError::EmptyReport {
                name: seed.name.clone(),
                path: seed.path.clone(),
            }
            .into());
        }
        Ok(report)
    }
}

/// Human-readable `git status --short --branch` for the preview window.
pub fn short_status(seed: &RepoSeed, color: bool) -> anyhow::Result<String> {
    let mut cmd = git_in(&seed.path);
    if color {
        cmd.args(["-c", "color.status=always"]);
    }
    cmd.args(["status", "--short", "--branch"]);
    let output = shell_exec::run(&mut cmd, Some(&seed.name))
        .with_context(|| format!("Failed to run {}", shell_exec::describe(&cmd)))?;

    if !output.status.success() {
        return Err(GitzError::ReportFailed {
            name: seed.name.clone(),
            path: seed.path.clone(),
            error: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn git_in(path: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(path);
    cmd
}
