use anyhow::{Context, Result};

use crate::platform::fs::write_text_file;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;
    let text = matches
        .get_one::<String>("text")
        .context("Text argument is required")?;

    write_text_file(path, text).with_context(|| format!("Failed to write {}", path))?;
    log::info!("Wrote {} bytes to {}", text.len(), path);
    Ok(())
}
