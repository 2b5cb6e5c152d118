use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolbeltError};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
}

impl ReleaseInfo {
    /// Extrae la versión del tag_name (ej: "v0.1.10" -> "0.1.10")
    pub fn version(&self) -> String {
        self.tag_name.trim_start_matches('v').to_string()
    }
}

/// GitHub repository an application publishes its releases to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
}

impl RepoInfo {
    pub fn new<O: Into<String>, N: Into<String>>(owner: O, name: N) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Read `<dir>/<app_name>`, a two-line file holding the owner and the repo name
    pub fn load_from<P: AsRef<Path>>(dir: P, app_name: &str) -> Result<Self> {
        let path = dir.as_ref().join(app_name);
        let text = fs::read_to_string(&path).map_err(|e| {
            ToolbeltError::release_check(format!(
                "Cannot read repository info {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        match lines.as_slice() {
            [owner, name] => Ok(Self::new(*owner, *name)),
            _ => Err(ToolbeltError::release_check(format!(
                "Expected 2 lines (owner, repository) but found {}",
                lines.len()
            ))),
        }
    }

    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Somewhere to ask for the latest published version of a repository
pub trait ReleaseSource {
    fn latest_version(&self, repo: &RepoInfo) -> Result<String>;
}

/// [`ReleaseSource`] backed by the GitHub REST API
pub struct GithubReleases {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl Default for GithubReleases {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubReleases {
    pub fn new() -> Self {
        Self::with_api_base(GITHUB_API_BASE)
    }

    pub fn with_api_base<S: Into<String>>(api_base: S) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Obtiene información sobre la última release desde GitHub API
    pub fn fetch_latest_release(&self, repo: &RepoInfo) -> Result<ReleaseInfo> {
        let url = format!(
            "{}/repos/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            repo.slug()
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", concat!("toolbelt/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| {
                ToolbeltError::release_check(format!(
                    "Failed to fetch latest release of {}: {}",
                    repo.slug(),
                    e
                ))
            })?;

        if !response.status().is_success() {
            return Err(ToolbeltError::release_check(format!(
                "GitHub API returned status {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        response.json::<ReleaseInfo>().map_err(|e| {
            ToolbeltError::release_check(format!("Failed to parse GitHub release JSON: {}", e))
        })
    }
}

impl ReleaseSource for GithubReleases {
    fn latest_version(&self, repo: &RepoInfo) -> Result<String> {
        Ok(self.fetch_latest_release(repo)?.version())
    }
}
