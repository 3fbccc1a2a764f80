use color_print::cformat;
use gitz::picker;

use super::{LoadedConfig, collect};
use crate::output::OutputHandler;

/// Collect, show the picker, and print `cd:<path>` for the chosen repository.
pub fn handle_select(
    loaded: &LoadedConfig,
    include_all: bool,
    output: &mut dyn OutputHandler,
) -> anyhow::Result<()> {
    let collection = collect(&loaded.config, include_all)?;
    if collection.is_empty() {
        output.info("No repositories to show".to_string())?;
        output.hint(cformat!(
            "Add entries to <bold>repos</> in {}, or pass --all to scan <bold>repos-under</>",
            loaded.path.display()
        ))?;
        return Ok(());
    }

    let picker = picker::from_config(&loaded.config.picker, Some(loaded.path.as_path()));
    if let Some(repo) = collection.choose(picker.as_ref())? {
        log::debug!("selected {} at {}", repo.name(), repo.path().display());
        output.change_directory(repo.path())?;
    }
    Ok(())
}
