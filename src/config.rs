//! User configuration: which repositories to show and how to pick one.
//!
//! ```json
//! {
//!   "repos": [
//!     { "name": "dotfiles", "path": "~/.dotfiles" },
//!     { "name": "notes", "path": "~/Documents/notes", "priority": 12 }
//!   ],
//!   "repos-under": ["~/Git"],
//!   "picker": { "backend": "fzf", "height": "50%", "preview": false }
//! }
//! ```
//!
//! The same keys work in TOML. Config file lookup, first existing wins:
//! 1. `--config <path>`
//! 2. `GITZ_CONFIG_PATH`
//! 3. `~/.gitz.json`
//! 4. `$XDG_CONFIG_HOME/gitz/config.toml` (`%APPDATA%\gitz\config.toml` on Windows)
//!
//! `GITZ_PICKER__BACKEND`, `GITZ_PICKER__HEIGHT` and `GITZ_PICKER__PREVIEW`
//! override the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

use crate::error::GitzError;

/// Environment variable naming the config file explicitly
pub const CONFIG_PATH_ENV_VAR: &str = "GITZ_CONFIG_PATH";

const ENV_PREFIX: &str = "GITZ";

/// Legacy location, relative to the home directory
const LEGACY_FILE_NAME: &str = ".gitz.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GitzConfig {
    /// Repositories listed explicitly
    #[serde(default)]
    pub repos: Vec<RepoEntry>,

    /// Directories whose immediate sub-directories are scanned with `--all`
    #[serde(default, rename = "repos-under", alias = "repos_under")]
    pub repos_under: Vec<String>,

    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    /// May start with `~`
    pub path: String,
    /// Overrides the priority given to configured repositories
    #[serde(default)]
    pub priority: Option<i64>,
}

impl RepoEntry {
    pub fn expanded_path(&self) -> PathBuf {
        expand_tilde(&self.path)
    }
}

/// Interactive selector to run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PickerBackend {
    /// External `fzf` binary
    #[default]
    Fzf,
    /// Built-in skim selector (unix only)
    Skim,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub backend: PickerBackend,

    /// Picker height, as passed to `fzf --height`
    #[serde(default = "default_height")]
    pub height: String,

    /// Show `gitz preview` output next to the list
    #[serde(default)]
    pub preview: bool,
}

fn default_height() -> String {
    "50%".to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            backend: PickerBackend::default(),
            height: default_height(),
            preview: false,
        }
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl GitzConfig {
    /// Locate and load the configuration.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, PathBuf), GitzError> {
        let path = locate(explicit)?;
        let config = Self::load_from(&path, None)?;
        Ok((config, path))
    }

    /// Load `path`, with `GITZ_*` overrides taken from `env` when given,
    /// otherwise from the process environment.
    pub fn load_from(
        path: &Path,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, GitzError> {
        let invalid = |e: config::ConfigError| GitzError::ConfigInvalid {
            path: path.to_path_buf(),
            error: e.to_string(),
        };

        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => FileFormat::Toml,
            _ => FileFormat::Json,
        };

        let config: Self = Config::builder()
            .add_source(File::from(path).format(format).required(true))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(invalid)?
            .try_deserialize()
            .map_err(invalid)?;

        log::debug!(
            "loaded config from {}: {} repos, {} scan dirs, picker {}",
            path.display(),
            config.repos.len(),
            config.repos_under.len(),
            config.picker.backend
        );
        Ok(config)
    }
}

/// Candidate config paths in lookup order.
///
/// Explicit and environment paths are exclusive: when given, nothing else
/// is considered.
fn candidates(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![expand_path(path)];
    }
    if let Some(path) = env_path {
        return vec![expand_path(&path)];
    }
    let mut paths = Vec::new();
    if let Some(home) = home {
        paths.push(home.join(LEGACY_FILE_NAME));
    }
    if let Some(dir) = config_dir {
        paths.push(dir.join("gitz").join("config.toml"));
    }
    paths
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}

/// Pick the first existing candidate.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, GitzError> {
    let env_path = std::env::var_os(CONFIG_PATH_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let strategy = choose_base_strategy().ok();
    let searched = candidates(
        explicit,
        env_path,
        strategy.as_ref().map(|s| s.home_dir().to_path_buf()),
        strategy.as_ref().map(|s| s.config_dir()),
    );
    first_existing(searched)
}

fn first_existing(searched: Vec<PathBuf>) -> Result<PathBuf, GitzError> {
    match searched.iter().find(|p| p.is_file()) {
        Some(path) => Ok(path.clone()),
        None => Err(GitzError::ConfigNotFound { searched }),
    }
}
