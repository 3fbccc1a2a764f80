use gitz::GitzError;
use gitz::discovery::{discover, scan_readable, seed_for_line};
use gitz::git::short_status;
use gitz::styling::{HINT, format_path_for_display, strip_ansi_codes};

use super::LoadedConfig;
use crate::output::OutputHandler;

/// Describe the repository a table row belongs to.
///
/// Runs for every cursor move in fzf, so it resolves the row against the
/// configured seeds and never collects the whole table. Rows from `--all`
/// fall back to scanning `repos-under`, skipping directories that can't be
/// read.
pub fn handle_preview(
    loaded: &LoadedConfig,
    line: &str,
    color: bool,
    output: &mut dyn OutputHandler,
) -> anyhow::Result<()> {
    let configured = discover(&loaded.config, false)?;
    let seed = seed_for_line(&configured, line)
        .cloned()
        .or_else(|| seed_for_line(&scan_readable(&loaded.config), line).cloned());
    let Some(seed) = seed else {
        let name = strip_ansi_codes(line)
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        return Err(GitzError::UnknownRepository { name }.into());
    };

    output.data(&format!(
        "{HINT}{}{HINT:#}",
        format_path_for_display(&seed.path)
    ))?;
    output.data("")?;
    output.data(short_status(&seed, color)?.trim_end())?;
    output.flush()?;
    Ok(())
}
