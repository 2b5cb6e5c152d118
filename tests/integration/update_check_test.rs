// Tests for the GitHub release check, using a fake release source

use std::cell::Cell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;
use toolbelt::core::update::{
    OutdatedPolicy, ReleaseSource, RepoInfo, UpdateChecker, VersionStatus,
};
use toolbelt::Result;

struct FixedRelease(&'static str);

impl ReleaseSource for FixedRelease {
    fn latest_version(&self, repo: &RepoInfo) -> Result<String> {
        assert_eq!(repo.slug(), "octocat/hello-world");
        Ok(self.0.to_string())
    }
}

fn ghinfo_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello"), "octocat\nhello-world\n").unwrap();
    dir
}

fn checker(latest: &'static str, dir: &TempDir) -> UpdateChecker {
    UpdateChecker::new(Box::new(FixedRelease(latest))).with_ghinfo_dir(dir.path())
}

#[test]
fn test_dev_version_skips_check() {
    // No ghinfo file needed: nothing is read for dev builds
    let dir = TempDir::new().unwrap();
    let status = checker("9.9.9", &dir)
        .check("hello", "dev", OutdatedPolicy::Warn)
        .unwrap();
    assert_eq!(status, VersionStatus::Skipped);
}

#[test]
fn test_up_to_date() {
    let dir = ghinfo_dir();
    let status = checker("1.2.0", &dir)
        .check("hello", "1.2.0", OutdatedPolicy::Warn)
        .unwrap();
    assert_eq!(
        status,
        VersionStatus::UpToDate {
            latest: "1.2.0".to_string()
        }
    );
}

#[test]
fn test_outdated_warns() {
    let dir = ghinfo_dir();
    let status = checker("1.3.0", &dir)
        .check("hello", "1.2.0", OutdatedPolicy::Warn)
        .unwrap();
    assert_eq!(
        status,
        VersionStatus::Outdated {
            current: "1.2.0".to_string(),
            latest: "1.3.0".to_string()
        }
    );
}

#[test]
fn test_outdated_runs_custom_close() {
    let dir = ghinfo_dir();
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);

    checker("2.0.0", &dir)
        .check(
            "hello",
            "1.9.9",
            OutdatedPolicy::Custom(Box::new(move || flag.set(true))),
        )
        .unwrap();

    assert!(closed.get());
}

#[test]
fn test_custom_close_not_called_when_current() {
    let dir = ghinfo_dir();
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);

    checker("1.0.0", &dir)
        .check(
            "hello",
            "1.0.0",
            OutdatedPolicy::Custom(Box::new(move || flag.set(true))),
        )
        .unwrap();

    assert!(!closed.get());
}

#[test]
fn test_missing_ghinfo_file() {
    let dir = TempDir::new().unwrap();
    let err = checker("1.0.0", &dir)
        .check("hello", "1.0.0", OutdatedPolicy::Warn)
        .unwrap_err();
    assert_eq!(err.kind_name(), "ReleaseCheck");
}
