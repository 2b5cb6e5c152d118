use anyhow::{Context, Result};
use std::io;

use crate::platform::{Platform, TerminalInput};
use crate::ui::prompts::picker;

pub fn execute(matches: &clap::ArgMatches, platform: Platform) -> Result<()> {
    let items: Vec<String> = matches
        .get_many::<String>("items")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut input = TerminalInput::new(platform);
    let chosen = picker(&mut input, &mut io::stdout(), &items).context("Nothing was picked")?;

    println!("{}", chosen);
    Ok(())
}
