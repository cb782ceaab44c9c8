//! Resolver error taxonomy

use crate::catalog::{Framework, StylingMode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Library is neither in the catalog nor aliasable
    #[error("UI library '{value}' is not implemented yet for {framework}")]
    UnknownLibrary { framework: Framework, value: String },

    #[error("Database '{value}' is not supported for {framework}")]
    UnknownDatabase { framework: Framework, value: String },

    /// Library and styling mode are mutually exclusive
    #[error("'{library}' requires Tailwind CSS but {styling} was requested")]
    HardConflict {
        library: String,
        styling: StylingMode,
    },

    /// Name would not stay a single directory under the parent
    #[error("Invalid project name '{name}': use letters, digits, '-', '_' or '.'")]
    InvalidProjectName { name: String },

    #[error("Answer {answer} does not match the pending question ({state})")]
    UnexpectedAnswer { state: String, answer: String },

    /// The prompt collaborator failed (terminal closed, interrupted)
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
