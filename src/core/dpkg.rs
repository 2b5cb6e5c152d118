// Installed Debian package version lookup

use regex::Regex;
use std::process::Command;

use crate::error::{Result, ToolbeltError};

/// Version of an installed package, as reported by `dpkg -s`
pub fn dpkg_package_version(package_name: &str) -> Result<String> {
    let output = Command::new("dpkg").args(["-s", package_name]).output()?;

    if !output.status.success() {
        return Err(ToolbeltError::package_version(format!(
            "dpkg -s {} failed: {}",
            package_name,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    parse_dpkg_version(&String::from_utf8_lossy(&output.stdout))
}

/// Pull the `Version:` field out of `dpkg -s` output
pub fn parse_dpkg_version(status: &str) -> Result<String> {
    let re = Regex::new(r"(?m)^Version:\s*(\S.*?)\s*$")
        .map_err(|e| ToolbeltError::package_version(e.to_string()))?;

    re.captures(status)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ToolbeltError::package_version("no Version field in dpkg output"))
}
