use anyhow::{Context, Result};

use crate::platform::fs::read_text_file;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;
    let missing_ok = matches.get_flag("missing-ok");

    let text = read_text_file(path, missing_ok)?;
    print!("{}", text);
    Ok(())
}
