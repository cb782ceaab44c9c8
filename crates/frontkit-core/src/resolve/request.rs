//! Partially-populated project request

use crate::catalog::{Framework, Language, StylingMode};
use serde::{Deserialize, Serialize};

/// Raw input to the resolver. Every field except `framework` may be absent.
///
/// Setters can be called in any order; the resolved result never depends on
/// which field was populated first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub framework: Framework,
    #[serde(default, alias = "name")]
    pub project_name: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub styling: Option<StylingMode>,
    #[serde(default, alias = "ui")]
    pub ui_library: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl ProjectRequest {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            project_name: None,
            language: None,
            styling: None,
            ui_library: None,
            database: None,
        }
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn styling(mut self, styling: StylingMode) -> Self {
        self.styling = Some(styling);
        self
    }

    pub fn ui_library(mut self, library: impl Into<String>) -> Self {
        self.ui_library = Some(library.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Overlay fields present in `other` on top of this request
    pub fn merge(mut self, other: ProjectRequest) -> Self {
        self.framework = other.framework;
        if other.project_name.is_some() {
            self.project_name = other.project_name;
        }
        if other.language.is_some() {
            self.language = other.language;
        }
        if other.styling.is_some() {
            self.styling = other.styling;
        }
        if other.ui_library.is_some() {
            self.ui_library = other.ui_library;
        }
        if other.database.is_some() {
            self.database = other.database;
        }
        self
    }

    /// True when no field is left for the operator to answer
    pub fn is_complete(&self) -> bool {
        self.project_name.is_some()
            && self.language.is_some()
            && self.styling.is_some()
            && self.ui_library.is_some()
            && self.database.is_some()
    }
}

/// Names become both the directory created under the parent and the
/// package name, so path separators and `.`/`..` are rejected.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
