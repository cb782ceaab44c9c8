//! Final configuration and its display summary

use super::request::is_valid_project_name;
use crate::catalog::{Framework, Language, NONE, TAILWIND_ONLY};
use serde::Serialize;

/// Fully-resolved, internally consistent project configuration.
///
/// Only the emitter constructs one, so every instance satisfies:
/// - a Tailwind-required library implies `use_tailwind`
/// - `tailwind-only` implies `use_tailwind`
/// - `none` implies `!use_tailwind`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedConfig {
    project_name: String,
    framework: Framework,
    language: Language,
    use_tailwind: bool,
    ui_library: String,
    database: String,
}

/// Accumulated controller fields at the point of emission
#[derive(Debug, Clone)]
pub(crate) struct Fields {
    pub project_name: Option<String>,
    pub framework: Framework,
    pub language: Language,
    pub use_tailwind: bool,
    pub ui_library: String,
    pub database: String,
}

pub(crate) fn emit(fields: Fields) -> ResolvedConfig {
    let catalog = fields.framework.catalog();
    debug_assert!(fields.use_tailwind || !catalog.requires_tailwind(&fields.ui_library));
    debug_assert!(fields.ui_library != NONE || !fields.use_tailwind);

    let project_name = fields
        .project_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| catalog.default_project_name.to_string());
    debug_assert!(is_valid_project_name(&project_name));

    ResolvedConfig {
        project_name,
        framework: fields.framework,
        language: fields.language,
        use_tailwind: fields.use_tailwind,
        ui_library: fields.ui_library,
        database: fields.database,
    }
}

impl ResolvedConfig {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn use_tailwind(&self) -> bool {
        self.use_tailwind
    }

    pub fn ui_library(&self) -> &str {
        &self.ui_library
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn is_typescript(&self) -> bool {
        self.language == Language::Ts
    }

    /// A component library is layered on top of the styling mode
    pub fn has_component_library(&self) -> bool {
        self.ui_library != NONE && self.ui_library != TAILWIND_ONLY
    }

    /// Ordered `(label, value)` pairs for the confirmation screen
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let catalog = self.framework.catalog();
        vec![
            ("Project", self.project_name.clone()),
            ("Framework", self.framework.display_name().to_string()),
            ("Language", self.language.display_name().to_string()),
            (
                "Tailwind CSS",
                if self.use_tailwind { "yes" } else { "no" }.to_string(),
            ),
            ("UI library", catalog.library_label(&self.ui_library).to_string()),
            ("Database", catalog.database_label(&self.database).to_string()),
        ]
    }
}
