//! Node.js version comparison against framework minimums

use anyhow::Result;
use semver::Version;

/// Parse a version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Compare the installed Node.js version against the framework minimum.
/// Returns a warning message if the installed version is older.
pub fn check_node_version(installed: &str, minimum: &str, framework: &str) -> Option<String> {
    let installed_ver = parse_version(installed).ok()?;
    let minimum_ver = parse_version(minimum).ok()?;

    if installed_ver < minimum_ver {
        Some(format!(
            "{} expects Node.js {} or newer.\n\
             You are running {}.\n\
             The generator may refuse to run; consider upgrading Node.js.",
            framework, minimum, installed
        ))
    } else {
        None
    }
}
