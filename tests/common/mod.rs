//! # Test Utilities for gitz
//!
//! ## TestWorkspace
//!
//! `TestWorkspace` owns a temporary home directory holding any number of git
//! repositories and a configuration file. Each test gets a fresh workspace
//! that is removed when the test ends.
//!
//! ## Environment Isolation
//!
//! Both git and gitz run with environments set per `Command`:
//! - No global or system git config
//! - Deterministic commit timestamps
//! - `HOME` and `XDG_CONFIG_HOME` inside the workspace
//! - No inherited `GIT_*`, `GITZ_*` or `FZF_*` variables
//!
//! ## Path Canonicalization
//!
//! The workspace root is canonicalized (macOS links /var to /private/var) so
//! paths printed by gitz match the ones tests compute.

// Each integration file uses a different subset of these helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

pub struct TestWorkspace {
    temp_dir: TempDir, // Must keep to ensure cleanup on drop
    home: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp path")
            .join("home");
        fs::create_dir_all(home.join("code")).expect("Failed to create home directory");
        Self { temp_dir, home }
    }

    fn root(&self) -> &Path {
        self.home.parent().unwrap_or(&self.home)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory the repositories created by `add_repo` live in.
    pub fn code_dir(&self) -> PathBuf {
        self.home.join("code")
    }

    /// Configure a git command with isolated environment
    pub fn configure_git_cmd(&self, cmd: &mut Command) {
        cmd.env("GIT_CONFIG_GLOBAL", "/dev/null");
        cmd.env("GIT_CONFIG_SYSTEM", "/dev/null");
        cmd.env("GIT_AUTHOR_NAME", "Test User");
        cmd.env("GIT_AUTHOR_EMAIL", "test@example.com");
        cmd.env("GIT_COMMITTER_NAME", "Test User");
        cmd.env("GIT_COMMITTER_EMAIL", "test@example.com");
        cmd.env("GIT_AUTHOR_DATE", "2025-01-01T00:00:00Z");
        cmd.env("GIT_COMMITTER_DATE", "2025-01-01T00:00:00Z");
        cmd.env("GIT_CEILING_DIRECTORIES", self.root());
        cmd.env("LC_ALL", "C");
        cmd.env("LANG", "C");
    }

    /// Run git in `dir`, panicking with its stderr on failure.
    pub fn git(&self, dir: &Path, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        self.configure_git_cmd(&mut cmd);
        let output = cmd
            .args(args)
            .current_dir(dir)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Create a repository under `code_dir` with one commit on `main`.
    pub fn add_repo(&self, name: &str) -> PathBuf {
        self.add_repo_in(&self.code_dir(), name)
    }

    pub fn add_repo_in(&self, parent: &Path, name: &str) -> PathBuf {
        let path = parent.join(name);
        fs::create_dir_all(&path).expect("Failed to create repo directory");
        self.git(&path, &["init", "-q", "-b", "main"]);
        self.commit(&path, "Initial commit");
        path
    }

    pub fn write_file(&self, repo: &Path, file: &str, content: &str) {
        fs::write(repo.join(file), content).expect("Failed to write file");
    }

    /// Write a file and commit it.
    pub fn commit(&self, repo: &Path, message: &str) {
        let file = format!("{}.txt", message.to_lowercase().replace(' ', "-"));
        self.write_file(repo, &file, message);
        self.git(repo, &["add", &file]);
        self.git(repo, &["commit", "-q", "-m", message]);
    }

    /// Give `repo` a bare `origin` and make `main` track `origin/main`.
    pub fn setup_upstream(&self, repo: &Path) -> PathBuf {
        let name = repo
            .file_name()
            .and_then(|n| n.to_str())
            .expect("Repository without a name");
        let remote = self.root().join("remotes").join(format!("{name}.git"));
        fs::create_dir_all(&remote).expect("Failed to create remote directory");
        self.git(&remote, &["init", "-q", "--bare", "-b", "main"]);
        self.git(repo, &["remote", "add", "origin", remote.to_str().unwrap()]);
        self.git(repo, &["push", "-q", "-u", "origin", "main"]);
        remote
    }

    /// Write `~/.config/gitz/config.toml`, the default XDG location.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home.join(".config").join("gitz");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// A `[[repos]]` table for `repo`, for building configs.
    pub fn repo_entry(name: &str, path: &Path) -> String {
        format!("[[repos]]\nname = \"{name}\"\npath = \"{}\"\n", path.display())
    }

    /// Command for the gitz binary, isolated from the caller's environment.
    pub fn gitz(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("gitz"));
        for (key, _) in std::env::vars() {
            if key.starts_with("GIT_") || key.starts_with("GITZ_") || key.starts_with("FZF_") {
                cmd.env_remove(&key);
            }
        }
        cmd.env_remove("CLICOLOR_FORCE");
        cmd.env("NO_COLOR", "1");
        cmd.env("HOME", &self.home);
        cmd.env("XDG_CONFIG_HOME", self.home.join(".config"));
        self.configure_git_cmd(&mut cmd);
        cmd.current_dir(&self.home);
        cmd
    }
}

/// Stdout of a successful run.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "gitz failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Repository names of a rendered table, top to bottom.
pub fn row_names(table: &str) -> Vec<String> {
    table
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// The table row for `name`.
pub fn row<'a>(table: &'a str, name: &str) -> &'a str {
    table
        .lines()
        .skip(2)
        .find(|line| line.split_whitespace().next() == Some(name))
        .unwrap_or_else(|| panic!("no row for {name} in:\n{table}"))
}
