use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use super::release_info::{GithubReleases, ReleaseSource, RepoInfo};
use crate::error::Result;

/// Directory holding one `<owner>\n<repo>` file per application
pub const DEFAULT_GHINFO_DIR: &str = "/etc/ghinfo";

/// Version string that never triggers a release check
pub const DEV_VERSION: &str = "dev";

/// What to do when a newer release exists
pub enum OutdatedPolicy {
    /// Log a warning and carry on
    Warn,
    /// Log the problem and exit the process with status 1
    Exit,
    /// Log the problem and hand control to the caller
    Custom(Box<dyn FnOnce()>),
}

impl OutdatedPolicy {
    fn forces_close(&self) -> bool {
        !matches!(self, OutdatedPolicy::Warn)
    }
}

impl fmt::Debug for OutdatedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutdatedPolicy::Warn => write!(f, "Warn"),
            OutdatedPolicy::Exit => write!(f, "Exit"),
            OutdatedPolicy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// Development build, nothing was checked
    Skipped,
    UpToDate { latest: String },
    Outdated { current: String, latest: String },
}

/// Compares the running version of an app against its latest GitHub release
pub struct UpdateChecker {
    source: Box<dyn ReleaseSource>,
    ghinfo_dir: PathBuf,
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new(Box::new(GithubReleases::new()))
    }
}

impl UpdateChecker {
    pub fn new(source: Box<dyn ReleaseSource>) -> Self {
        Self {
            source,
            ghinfo_dir: PathBuf::from(DEFAULT_GHINFO_DIR),
        }
    }

    pub fn with_ghinfo_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.ghinfo_dir = dir.into();
        self
    }

    /// Verifica si hay una versión más reciente de `app_name`
    pub fn check(
        &self,
        app_name: &str,
        current_version: &str,
        policy: OutdatedPolicy,
    ) -> Result<VersionStatus> {
        if current_version == DEV_VERSION {
            log::debug!("Skipping release check for development build of {}", app_name);
            return Ok(VersionStatus::Skipped);
        }

        let repo = RepoInfo::load_from(&self.ghinfo_dir, app_name)?;
        let latest = self.source.latest_version(&repo)?;

        if !is_newer_version(&latest, current_version) {
            return Ok(VersionStatus::UpToDate { latest });
        }

        let message = format!(
            "You are using version {}, but {} is available on GitHub",
            current_version, latest
        );
        if policy.forces_close() {
            log::error!("{}", message);
            log::error!("Please update to continue using this application");
        } else {
            log::warn!("{}", message);
            log::warn!("Please consider upgrading for the latest features and bugfixes");
        }

        match policy {
            OutdatedPolicy::Warn => {}
            OutdatedPolicy::Exit => std::process::exit(1),
            OutdatedPolicy::Custom(close) => close(),
        }

        Ok(VersionStatus::Outdated {
            current: current_version.to_string(),
            latest,
        })
    }
}

/// Check `app_name` against GitHub using the default ghinfo directory
pub fn check_for_newer_version(
    app_name: &str,
    current_version: &str,
    policy: OutdatedPolicy,
) -> Result<VersionStatus> {
    UpdateChecker::default().check(app_name, current_version, policy)
}

/// Compara dos versiones semánticas
/// Retorna true si la nueva versión es más reciente
///
/// A leading `v` and build metadata (`+git`) are ignored. Missing components
/// count as zero, so `1.0` equals `1.0.0`. A pre-release (`1.2.0-rc1`,
/// `1.2.0rc1`) sorts below the final release of the same version.
pub fn is_newer_version(new: &str, current: &str) -> bool {
    ParsedVersion::parse(new) > ParsedVersion::parse(current)
}

#[derive(Debug, PartialEq, Eq)]
struct ParsedVersion {
    release: Vec<u32>,
    /// `None` for a final release
    pre: Option<(String, u32)>,
}

impl ParsedVersion {
    fn parse(version: &str) -> Self {
        let version = version.trim().trim_start_matches('v');
        let version = version.split('+').next().unwrap_or("");

        let release_end = version
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(version.len());
        let (release, pre) = version.split_at(release_end);

        let mut release: Vec<u32> = release
            .split('.')
            .filter_map(|s| s.parse::<u32>().ok())
            .collect();
        while release.last() == Some(&0) {
            release.pop();
        }

        let pre = pre.trim_start_matches(['-', '.', '_']);
        let pre = if pre.is_empty() {
            None
        } else {
            let digits_at = pre
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(pre.len());
            let (label, number) = pre.split_at(digits_at);
            let number = number
                .chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
                .parse()
                .unwrap_or(0);
            Some((label.trim_end_matches('.').to_ascii_lowercase(), number))
        };

        Self { release, pre }
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Trailing zeros are already dropped, so plain Vec ordering pads with zeros
        self.release
            .cmp(&other.release)
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}
