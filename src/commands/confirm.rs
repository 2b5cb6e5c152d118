use anyhow::Result;
use std::io;

use crate::platform::{Platform, TerminalInput};
use crate::ui::prompts::{y_to_continue, DEFAULT_CONTINUE_PROMPT};

/// Exits with status 1 when the user does not confirm, so scripts can branch on it
pub fn execute(matches: &clap::ArgMatches, platform: Platform) -> Result<()> {
    let prompt = matches
        .get_one::<String>("prompt")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONTINUE_PROMPT);
    let requires_enter = matches.get_flag("enter");

    let mut input = TerminalInput::new(platform);
    let confirmed = y_to_continue(&mut input, &mut io::stdout(), prompt, requires_enter)?;

    if !confirmed {
        std::process::exit(1);
    }
    Ok(())
}
