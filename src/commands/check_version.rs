use anyhow::{Context, Result};

use crate::core::update::{OutdatedPolicy, UpdateChecker, VersionStatus};
use crate::ui::prompts::{info, success};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let app = matches
        .get_one::<String>("app")
        .context("App argument is required")?;
    let current = matches
        .get_one::<String>("current")
        .context("Current version argument is required")?;

    let policy = if matches.get_flag("exit") {
        OutdatedPolicy::Exit
    } else {
        OutdatedPolicy::Warn
    };

    let mut checker = UpdateChecker::default();
    if let Some(dir) = matches.get_one::<String>("ghinfo-dir") {
        checker = checker.with_ghinfo_dir(dir);
    }

    match checker.check(app, current, policy)? {
        VersionStatus::Skipped => info("Development build, release check skipped"),
        VersionStatus::UpToDate { latest } => {
            success(&format!("{} {} is up to date (latest: {})", app, current, latest))
        }
        VersionStatus::Outdated { latest, .. } => info(&format!("Latest release: {}", latest)),
    }
    Ok(())
}
