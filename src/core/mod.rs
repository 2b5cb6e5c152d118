// Core helpers that are not tied to the console

pub mod dpkg;
pub mod error_record;
pub mod logging;
pub mod update;

// Re-export commonly used items
pub use dpkg::{dpkg_package_version, parse_dpkg_version};
pub use error_record::ErrorRecord;
pub use logging::{init_logging, LogConfig};
pub use update::{check_for_newer_version, OutdatedPolicy, UpdateChecker, VersionStatus};
