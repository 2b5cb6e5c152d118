// Platform-specific code module

pub mod fs;
pub mod input;
pub mod workdir;

use std::io::IsTerminal;

// Re-exports para imports limpios
pub use fs::{read_text_file, write_text_file};
pub use input::{ConsoleInput, TerminalInput};
pub use workdir::{with_working_directory, WorkingDirectory};

/// Operating system family the process runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

/// Facts about the running platform
///
/// Computed once at process start with [`Platform::detect`] and handed to
/// whatever needs platform-specific behavior (key reading, mostly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: OsFamily,
    /// Whether stdin is attached to a terminal
    pub interactive: bool,
}

impl Platform {
    pub fn detect() -> Self {
        let os = if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        };

        Self {
            os,
            interactive: std::io::stdin().is_terminal(),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os == OsFamily::Windows
    }
}
