use anyhow::Result;
use std::io;

use crate::platform::{Platform, TerminalInput};
use crate::ui::prompts::input_multiline;
use crate::utils::text::strip_each_line;

pub fn execute(matches: &clap::ArgMatches, platform: Platform) -> Result<()> {
    let default = matches
        .get_one::<String>("default")
        .map(String::as_str)
        .unwrap_or("");

    if platform.interactive {
        eprintln!("Type the text, then press Ctrl+D (Ctrl+Z on Windows) to finish:");
    }

    let mut input = TerminalInput::new(platform);
    let text = input_multiline(
        &mut input,
        &mut io::stdout(),
        Some("No input given"),
        default,
    )?;

    println!("{}", strip_each_line(&text));
    Ok(())
}
