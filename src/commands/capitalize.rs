use anyhow::{Context, Result};

use crate::utils::text::capitalize_each_word;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("Text argument is required")?;
    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(String::as_str)
        .unwrap_or(" ");

    println!("{}", capitalize_each_word(text, delimiter));
    Ok(())
}
