// Toolbelt Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, ToolbeltError};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{init_logging, ErrorRecord, LogConfig};
pub use platform::{Platform, WorkingDirectory};
pub use ui::{ProgressConfig, ProgressRunner, RunOutcome};
