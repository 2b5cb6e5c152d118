use chrono::{DateTime, Local};
use log::{Level, LevelFilter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, ToolbeltError};

/// How [`init_logging`] sets up the global logger
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Log to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Append to `file` rather than truncating it
    pub append: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
            append: true,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, file: P, append: bool) -> Self {
        self.file = Some(file.into());
        self.append = append;
        self
    }
}

/// `2024-01-31 09:15:02,123 [INFO] message`
pub fn format_log_line(time: DateTime<Local>, level: Level, message: &str) -> String {
    format!(
        "{} [{}] {}",
        time.format("%Y-%m-%d %H:%M:%S,%3f"),
        level,
        message
    )
}

/// Install the global logger
///
/// `RUST_LOG` still refines the configured level per module. Fails if a
/// logger is already installed or the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_log_line(Local::now(), record.level(), &record.args().to_string())
            )
        });

    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.append)
            .truncate(!config.append)
            .open(path)
            .map_err(|e| {
                ToolbeltError::logging(format!("Cannot open log file {}: {}", path.display(), e))
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| ToolbeltError::logging(e.to_string()))
}
