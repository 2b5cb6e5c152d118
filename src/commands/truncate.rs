use anyhow::{Context, Result};

use crate::utils::text::truncate;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("Text argument is required")?;
    let length = matches
        .get_one::<usize>("length")
        .copied()
        .context("Length argument is required")?;
    let ellipsis = !matches.get_flag("no-ellipsis");

    println!("{}", truncate(text, length, ellipsis));
    Ok(())
}
