//! Runtime detection for Node.js and package managers

use crate::config::PackageManager;
use anyhow::Result;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn detect(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    detect("Node.js", "node")
}

/// Check if the selected package manager is available
pub fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    let name = match pm {
        PackageManager::Npm => "npm",
        PackageManager::Pnpm => "pnpm",
        PackageManager::Bun => "Bun",
    };
    detect(name, pm.binary())
}

/// Check that Node.js and the package manager exist.
///
/// Bun runs its own runtime, so Node.js is only required for npm and pnpm.
pub fn check_runtimes(pm: PackageManager) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else if pm != PackageManager::Bun {
        missing.push("Node.js (install from https://nodejs.org)".to_string());
    }

    let manager = check_package_manager(pm);
    if manager.available {
        results.push(manager);
    } else {
        missing.push(format!("{} (not found in PATH)", pm));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
