use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the toolbelt helpers
#[derive(Error, Debug)]
pub enum ToolbeltError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot pick from an empty list")]
    EmptyChoice,

    #[error("Invalid selection '{input}': expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Package version error: {0}")]
    PackageVersion(String),

    #[error("Release check error: {0}")]
    ReleaseCheck(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the toolbelt helpers
pub type Result<T> = std::result::Result<T, ToolbeltError>;

impl ToolbeltError {
    /// Create an invalid selection error
    pub fn invalid_selection<S: Into<String>>(input: S, max: usize) -> Self {
        ToolbeltError::InvalidSelection {
            input: input.into(),
            max,
        }
    }

    /// Create a package version error
    pub fn package_version<S: Into<String>>(msg: S) -> Self {
        ToolbeltError::PackageVersion(msg.into())
    }

    /// Create a release check error
    pub fn release_check<S: Into<String>>(msg: S) -> Self {
        ToolbeltError::ReleaseCheck(msg.into())
    }

    /// Create a logging error
    pub fn logging<S: Into<String>>(msg: S) -> Self {
        ToolbeltError::Logging(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ToolbeltError::Other(msg.into())
    }

    /// Stable name of the error kind, used when serializing errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            ToolbeltError::Io(_) => "Io",
            ToolbeltError::FileNotFound(_) => "FileNotFound",
            ToolbeltError::EmptyChoice => "EmptyChoice",
            ToolbeltError::InvalidSelection { .. } => "InvalidSelection",
            ToolbeltError::PackageVersion(_) => "PackageVersion",
            ToolbeltError::ReleaseCheck(_) => "ReleaseCheck",
            ToolbeltError::Logging(_) => "Logging",
            ToolbeltError::Other(_) => "Other",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolbeltError::FileNotFound(_))
    }
}
