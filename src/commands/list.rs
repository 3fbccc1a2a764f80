use super::{LoadedConfig, collect};
use crate::output::OutputHandler;

/// Print the table the picker would show.
pub fn handle_list(
    loaded: &LoadedConfig,
    include_all: bool,
    output: &mut dyn OutputHandler,
) -> anyhow::Result<()> {
    let collection = collect(&loaded.config, include_all)?;
    output.data(&collection.render().to_ansi())?;
    output.flush()?;
    Ok(())
}
