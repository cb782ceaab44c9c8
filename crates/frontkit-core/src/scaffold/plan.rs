//! Ordered scaffolding steps derived from a resolved configuration

use super::{astro, vue};
use crate::catalog::Framework;
use crate::config::PackageManager;
use crate::resolve::ResolvedConfig;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory a command runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workdir {
    /// The directory the project is created in
    Parent,
    /// The new project directory
    Project,
}

/// An external command (generator, installer, framework CLI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    pub description: String,
    pub program: String,
    pub args: Vec<String>,
    pub workdir: Workdir,
}

impl CommandStep {
    pub fn new(
        description: impl Into<String>,
        (program, args): (String, Vec<String>),
        workdir: Workdir,
    ) -> Self {
        Self {
            description: description.into(),
            program,
            args,
            workdir,
        }
    }

    /// Shell-like rendering for logs and dry runs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A starter file written into the project, path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub contents: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Run(CommandStep),
    Write(TemplateFile),
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStep::Run(cmd) => {
                let place = match cmd.workdir {
                    Workdir::Parent => "",
                    Workdir::Project => " (in project)",
                };
                write!(f, "run   {}{}", cmd.command_line(), place)
            }
            PlanStep::Write(file) => write!(f, "write {}", file.path.display()),
        }
    }
}

/// Everything the scaffolder will do, in order. Building a plan has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub parent_dir: PathBuf,
    pub project_dir: PathBuf,
    pub steps: Vec<PlanStep>,
}

impl ScaffoldPlan {
    pub fn build(config: &ResolvedConfig, pm: PackageManager, parent_dir: &Path) -> Self {
        let steps = match config.framework() {
            Framework::Astro => astro::steps(config, pm),
            Framework::Vue => vue::steps(config, pm),
        };
        Self {
            parent_dir: parent_dir.to_path_buf(),
            project_dir: parent_dir.join(config.project_name()),
            steps,
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandStep> {
        self.steps.iter().filter_map(|s| match s {
            PlanStep::Run(cmd) => Some(cmd),
            PlanStep::Write(_) => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &TemplateFile> {
        self.steps.iter().filter_map(|s| match s {
            PlanStep::Write(file) => Some(file),
            PlanStep::Run(_) => None,
        })
    }

    pub fn workdir(&self, workdir: Workdir) -> &Path {
        match workdir {
            Workdir::Parent => &self.parent_dir,
            Workdir::Project => &self.project_dir,
        }
    }
}
