// Scoped working-directory switch

use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Guard that changes the process working directory while it is alive
///
/// The previous directory is restored when the guard drops, including
/// during unwinding. The working directory is process-wide state: two
/// guards alive on different threads will step on each other.
///
/// ```no_run
/// use toolbelt::platform::WorkingDirectory;
///
/// {
///     let _cwd = WorkingDirectory::enter("/tmp")?;
///     // relative paths resolve against /tmp here
/// }
/// // back where we started
/// # Ok::<(), toolbelt::ToolbeltError>(())
/// ```
#[derive(Debug)]
pub struct WorkingDirectory {
    previous: PathBuf,
}

impl WorkingDirectory {
    pub fn enter<P: AsRef<Path>>(path: P) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(path.as_ref())?;
        log::debug!(
            "Changed working directory: {} -> {}",
            previous.display(),
            path.as_ref().display()
        );
        Ok(Self { previous })
    }

    /// Directory that will be restored on drop
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirectory {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            log::error!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}

/// Run `f` with the working directory set to `path`
pub fn with_working_directory<P, F, T>(path: P, f: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let _guard = WorkingDirectory::enter(path)?;
    Ok(f())
}
