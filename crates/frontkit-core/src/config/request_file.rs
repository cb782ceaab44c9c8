//! YAML request files for non-interactive runs

use crate::catalog::{Framework, Language, StylingMode};
use crate::resolve::ProjectRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a request. The framework is implied by the binary and
/// only checked when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    #[serde(default)]
    pub framework: Option<Framework>,

    #[serde(default, alias = "project_name")]
    pub name: Option<String>,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub styling: Option<StylingMode>,

    #[serde(default, alias = "ui_library")]
    pub ui: Option<String>,

    #[serde(default)]
    pub database: Option<String>,
}

impl RequestFile {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse request file")
    }

    pub fn into_request(self, framework: Framework) -> Result<ProjectRequest> {
        if let Some(declared) = self.framework {
            if declared != framework {
                anyhow::bail!(
                    "Request file is for {} but this CLI scaffolds {} projects",
                    declared,
                    framework
                );
            }
        }

        Ok(ProjectRequest {
            framework,
            project_name: self.name,
            language: self.language,
            styling: self.styling,
            ui_library: self.ui,
            database: self.database,
        })
    }
}

/// Read a request file from disk
pub fn load_request(path: &Path, framework: Framework) -> Result<ProjectRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    RequestFile::parse(&content)
        .with_context(|| format!("Invalid request file {}", path.display()))?
        .into_request(framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let file = RequestFile::parse(
            "framework: vue\nname: shop\nlanguage: typescript\nstyling: plain\nui: element\n",
        )
        .unwrap();
        let request = file.into_request(Framework::Vue).unwrap();
        assert_eq!(request.project_name.as_deref(), Some("shop"));
        assert_eq!(request.language, Some(Language::Ts));
        assert_eq!(request.styling, Some(StylingMode::Plain));
        assert_eq!(request.ui_library.as_deref(), Some("element"));
        assert!(request.database.is_none());
    }

    #[test]
    fn test_framework_mismatch() {
        let file = RequestFile::parse("framework: astro\n").unwrap();
        assert!(file.into_request(Framework::Vue).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(RequestFile::parse("colour: blue\n").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ui_library: twonly").unwrap();
        let request = load_request(file.path(), Framework::Astro).unwrap();
        assert_eq!(request.ui_library.as_deref(), Some("twonly"));
        assert_eq!(request.framework, Framework::Astro);
    }
}
