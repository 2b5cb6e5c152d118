mod checker;
mod release_info;

pub use checker::{
    check_for_newer_version, is_newer_version, OutdatedPolicy, UpdateChecker, VersionStatus,
    DEFAULT_GHINFO_DIR, DEV_VERSION,
};
pub use release_info::{GithubReleases, ReleaseInfo, ReleaseSource, RepoInfo};
