// Console input: single keypresses, lines, and everything until EOF

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use std::io::{self, BufRead, Read, Write};

use super::Platform;

/// Source of user input for the prompts
///
/// The prompts only talk to this trait, so they can be driven by a real
/// terminal or by scripted input in tests.
pub trait ConsoleInput {
    /// Read a single keypress, echoing it back like `getche`
    fn read_key(&mut self) -> io::Result<char>;

    /// Read one line, without its trailing newline
    fn read_line(&mut self) -> io::Result<String>;

    /// Read everything until EOF
    fn read_to_end(&mut self) -> io::Result<String>;
}

/// [`ConsoleInput`] backed by the process stdin
pub struct TerminalInput {
    platform: Platform,
}

impl TerminalInput {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn read_raw_key(&self) -> io::Result<char> {
        terminal::enable_raw_mode().map_err(|e| {
            io::Error::other(format!(
                "Failed to enable raw mode: {}. Try running in a different terminal.",
                e
            ))
        })?;

        // Always disable raw mode, even if reading failed
        let result = self.wait_for_char();
        let _ = terminal::disable_raw_mode();

        let c = result?;
        if !c.is_control() {
            let mut stdout = io::stdout();
            write!(stdout, "{}", c)?;
            stdout.flush()?;
        }
        Ok(c)
    }

    fn wait_for_char(&self) -> io::Result<char> {
        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind,
                    ..
                }) => {
                    // Windows reports both press and release for every key
                    if self.platform.is_windows() && kind != KeyEventKind::Press {
                        continue;
                    }

                    match code {
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Err(io::Error::new(
                                io::ErrorKind::Interrupted,
                                "Input interrupted",
                            ));
                        }
                        KeyCode::Char(c) => return Ok(c),
                        KeyCode::Enter => return Ok('\n'),
                        KeyCode::Tab => return Ok('\t'),
                        KeyCode::Esc => return Ok('\x1b'),
                        _ => {
                            // Ignore arrows, function keys and the like
                        }
                    }
                }
                _ => {
                    // Ignore non-keyboard events (mouse, resize, etc.)
                }
            }
        }
    }
}

impl ConsoleInput for TerminalInput {
    fn read_key(&mut self) -> io::Result<char> {
        if self.platform.interactive {
            return self.read_raw_key();
        }

        // Piped stdin has no keypresses; take the first char of the next line
        let line = self.read_line()?;
        Ok(line.chars().next().unwrap_or('\n'))
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let trimmed_len = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(trimmed_len);
        Ok(input)
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        Ok(input)
    }
}
