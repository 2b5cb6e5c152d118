use anyhow::{Context, Result};

use crate::core::dpkg::dpkg_package_version;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let package = matches
        .get_one::<String>("package")
        .context("Package argument is required")?;

    println!("{}", dpkg_package_version(package)?);
    Ok(())
}
