mod list;
mod preview;
mod select;

pub use list::handle_list;
pub use preview::handle_preview;
pub use select::handle_select;

use std::path::{Path, PathBuf};

use anyhow::Context;
use gitz::Collection;
use gitz::config::GitzConfig;
use gitz::discovery::discover;
use gitz::git::GitStatusProvider;
use gitz::progress::TerminalProgress;

/// Configuration plus the file it came from
pub struct LoadedConfig {
    pub config: GitzConfig,
    pub path: PathBuf,
}

impl LoadedConfig {
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (config, path) = GitzConfig::load(explicit)?;
        Ok(Self { config, path })
    }
}

/// Discover seeds and fetch every status report, showing progress on stderr.
fn collect(config: &GitzConfig, include_all: bool) -> anyhow::Result<Collection> {
    let seeds = discover(config, include_all)?;
    let mut progress = TerminalProgress::for_stderr();
    Collection::collect(seeds, &GitStatusProvider, progress.as_mut())
        .context("Failed to collect repository status")
}
