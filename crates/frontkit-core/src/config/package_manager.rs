//! Package manager selection and command shapes

use std::fmt;
use std::str::FromStr;

/// Environment variable that forces a package manager
pub const PACKAGE_MANAGER_ENV: &str = "FRONTKIT_PACKAGE_MANAGER";

/// Supported package managers in order of preference when probing PATH
const PROBE_ORDER: &[PackageManager] = &[PackageManager::Npm, PackageManager::Pnpm, PackageManager::Bun];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// `create <initializer> <name> [flags]`
    ///
    /// npm needs `--` before flags meant for the initializer.
    pub fn create(&self, initializer: &str, name: &str, flags: &[&str]) -> (String, Vec<String>) {
        let mut args = vec!["create".to_string(), initializer.to_string(), name.to_string()];
        if *self == PackageManager::Npm && !flags.is_empty() {
            args.push("--".to_string());
        }
        args.extend(flags.iter().map(|f| f.to_string()));
        (self.binary().to_string(), args)
    }

    /// Install project dependencies from the lockfile/manifest
    pub fn install_all(&self) -> (String, Vec<String>) {
        (self.binary().to_string(), vec!["install".to_string()])
    }

    /// Add packages to the project
    pub fn add(&self, packages: &[&str], dev: bool) -> (String, Vec<String>) {
        let mut args = match self {
            PackageManager::Npm => vec!["install".to_string()],
            PackageManager::Pnpm | PackageManager::Bun => vec!["add".to_string()],
        };
        if dev {
            args.push(match self {
                PackageManager::Bun => "-d".to_string(),
                _ => "-D".to_string(),
            });
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        (self.binary().to_string(), args)
    }

    /// Run a package binary without installing it globally
    pub fn exec(&self, package: &str, args: &[&str]) -> (String, Vec<String>) {
        let (program, mut full): (&str, Vec<String>) = match self {
            PackageManager::Npm => ("npx", vec!["--yes".to_string()]),
            PackageManager::Pnpm => ("pnpm", vec!["dlx".to_string()]),
            PackageManager::Bun => ("bunx", Vec::new()),
        };
        full.push(package.to_string());
        full.extend(args.iter().map(|a| a.to_string()));
        (program.to_string(), full)
    }

    /// Command a developer types to start the dev server
    pub fn dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Bun => "bun run dev",
        }
    }

    fn is_available(&self) -> bool {
        std::process::Command::new(self.binary())
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            other => Err(format!("Unsupported package manager: {}", other)),
        }
    }
}

/// Parse the agent from an `npm_config_user_agent` value, e.g. `pnpm/9.1.0 npm/? node/v20.11.0`
fn from_user_agent(agent: &str) -> Option<PackageManager> {
    agent
        .split_whitespace()
        .next()
        .and_then(|first| first.split('/').next())
        .and_then(|name| name.parse().ok())
}

/// Pick the package manager: explicit override, then the agent that launched
/// us, then the first one found on PATH.
pub fn detect_package_manager() -> PackageManager {
    if let Ok(value) = std::env::var(PACKAGE_MANAGER_ENV) {
        match value.parse() {
            Ok(pm) => return pm,
            Err(e) => log::warn!("{} ignored: {}", PACKAGE_MANAGER_ENV, e),
        }
    }

    if let Some(pm) = std::env::var("npm_config_user_agent")
        .ok()
        .as_deref()
        .and_then(from_user_agent)
    {
        log::debug!("package manager from user agent: {}", pm);
        return pm;
    }

    for pm in PROBE_ORDER {
        if pm.is_available() {
            return *pm;
        }
    }
    // Default to npm if nothing detected (runtime check reports it as missing)
    PackageManager::Npm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_create_separates_flags() {
        let (program, args) = PackageManager::Npm.create("vue@latest", "app", &["--ts"]);
        assert_eq!(program, "npm");
        assert_eq!(args, ["create", "vue@latest", "app", "--", "--ts"]);
    }

    #[test]
    fn test_pnpm_create_passes_flags_directly() {
        let (_, args) = PackageManager::Pnpm.create("vue@latest", "app", &["--ts"]);
        assert_eq!(args, ["create", "vue@latest", "app", "--ts"]);
    }

    #[test]
    fn test_add_dev_dependency() {
        let (_, args) = PackageManager::Npm.add(&["daisyui"], true);
        assert_eq!(args, ["install", "-D", "daisyui"]);
        let (_, args) = PackageManager::Bun.add(&["daisyui"], true);
        assert_eq!(args, ["add", "-d", "daisyui"]);
    }

    #[test]
    fn test_exec() {
        let (program, args) = PackageManager::Npm.exec("astro", &["add", "tailwind"]);
        assert_eq!(program, "npx");
        assert_eq!(args, ["--yes", "astro", "add", "tailwind"]);
        let (program, args) = PackageManager::Pnpm.exec("astro", &["add"]);
        assert_eq!(program, "pnpm");
        assert_eq!(args, ["dlx", "astro", "add"]);
    }

    #[test]
    fn test_user_agent_parsing() {
        assert_eq!(
            from_user_agent("pnpm/9.1.0 npm/? node/v20.11.0 linux x64"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(from_user_agent("yarn/1.22.0 npm/? node/v18"), None);
        assert_eq!(from_user_agent(""), None);
    }

    #[test]
    fn test_detect_returns_a_supported_manager() {
        let pm = detect_package_manager();
        assert!(PROBE_ORDER.contains(&pm));
    }
}
