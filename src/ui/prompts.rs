// UI prompts and user interaction module

use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

use crate::error::{Result, ToolbeltError};
use crate::platform::ConsoleInput;

pub const DEFAULT_CONTINUE_PROMPT: &str = "Enter y to continue:";
pub const PICKER_PROMPT: &str = "Select an option: ";

/// Ask the user to press `y` to continue
///
/// Without `requires_enter` a single keypress decides; with it the user
/// types a whole line. Only `y`/`Y` counts as yes, with no surrounding
/// whitespace.
pub fn y_to_continue<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
    requires_enter: bool,
) -> Result<bool>
where
    I: ConsoleInput + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{} ", prompt)?;
    out.flush()?;

    let confirmed = if requires_enter {
        input.read_line()?.eq_ignore_ascii_case("y")
    } else {
        let key = input.read_key()?;
        writeln!(out)?;
        key.eq_ignore_ascii_case(&'y')
    };

    Ok(confirmed)
}

/// Read multiline input until EOF
///
/// The text is trimmed. When nothing was typed, `warn` is logged (if given)
/// and `default` is returned instead.
pub fn input_multiline<I, W>(
    input: &mut I,
    out: &mut W,
    warn: Option<&str>,
    default: &str,
) -> Result<String>
where
    I: ConsoleInput + ?Sized,
    W: Write + ?Sized,
{
    let text = input.read_to_end()?;
    let text = text.trim();

    // EOF leaves the cursor right after the last char typed
    writeln!(out)?;

    if text.is_empty() {
        if let Some(warning) = warn {
            log::warn!("{}", warning);
        }
        return Ok(default.to_string());
    }

    Ok(text.to_string())
}

/// Let the user pick one item from a numbered list
///
/// A single item is returned straight away without prompting.
pub fn picker<'a, T, I, W>(input: &mut I, out: &mut W, items: &'a [T]) -> Result<&'a T>
where
    T: Display,
    I: ConsoleInput + ?Sized,
    W: Write + ?Sized,
{
    match items {
        [] => return Err(ToolbeltError::EmptyChoice),
        [only] => return Ok(only),
        _ => {}
    }

    for (index, item) in items.iter().enumerate() {
        writeln!(out, "  {} {}", format!("{}.", index + 1).cyan().bold(), item)?;
    }
    write!(out, "{}", PICKER_PROMPT.white().bold())?;
    out.flush()?;

    let answer = input.read_line()?;
    let selection = parse_selection(&answer, items.len())?;
    Ok(&items[selection])
}

/// Turn a 1-based answer into an index into a list of `len` items
pub fn parse_selection(answer: &str, len: usize) -> Result<usize> {
    let answer = answer.trim();

    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(ToolbeltError::invalid_selection(answer, len)),
    }
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display an error message
pub fn error(message: &str) {
    println!("{}", message.red().bold());
}
