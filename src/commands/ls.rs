use anyhow::{Context, Result};
use std::fs;

use crate::platform::with_working_directory;

/// List a directory by switching into it and reading `.`
pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;

    let names = with_working_directory(path, || -> std::io::Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(".")?
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    })
    .with_context(|| format!("Cannot enter {}", path))??;

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
