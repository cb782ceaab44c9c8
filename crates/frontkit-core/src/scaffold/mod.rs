//! Turning a resolved configuration into a project on disk
//!
//! This module provides:
//! - `ScaffoldPlan`: the ordered list of commands and starter files
//! - `CommandRunner` / `TemplateWriter`: the collaborators that carry steps out
//! - `execute`: runs a plan strictly in order, stopping at the first failure

mod astro;
pub mod plan;
pub mod runner;
pub mod templates;
mod vue;
pub mod writer;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use plan::{CommandStep, PlanStep, ScaffoldPlan, TemplateFile, Workdir};
pub use runner::{CommandRunner, ProcessRunner};
pub use writer::{FsTemplateWriter, TemplateWriter};

/// What `execute` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub commands_run: usize,
    pub files_written: Vec<PathBuf>,
}

/// Run every plan step in order. Package installers are not safe to run
/// concurrently against one directory, so nothing here is parallel.
pub async fn execute<R, W>(plan: &ScaffoldPlan, runner: &mut R, writer: &mut W) -> Result<ExecutionReport>
where
    R: CommandRunner,
    W: TemplateWriter,
{
    let mut report = ExecutionReport::default();
    let total = plan.steps.len();

    for (i, step) in plan.steps.iter().enumerate() {
        log::debug!("step {}/{}: {}", i + 1, total, step);
        match step {
            PlanStep::Run(cmd) => {
                runner
                    .run(cmd, plan.workdir(cmd.workdir))
                    .await
                    .with_context(|| format!("Step failed: {}", cmd.description))?;
                report.commands_run += 1;
            }
            PlanStep::Write(file) => {
                let written = writer.write(&plan.project_dir, file).await?;
                report.files_written.push(written);
            }
        }
    }

    Ok(report)
}

/// Count project files, skipping dependency and VCS directories
pub fn count_project_files(project_dir: &Path) -> usize {
    WalkDir::new(project_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && (name == "node_modules" || name == ".git"))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<(String, PathBuf)>,
        fail_on: Option<String>,
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&mut self, step: &CommandStep, cwd: &Path) -> Result<()> {
            self.calls.push((step.command_line(), cwd.to_path_buf()));
            if self.fail_on.as_deref() == Some(step.program.as_str()) {
                anyhow::bail!("boom");
            }
            Ok(())
        }
    }

    fn sample_plan(dir: &Path) -> ScaffoldPlan {
        ScaffoldPlan {
            parent_dir: dir.to_path_buf(),
            project_dir: dir.join("app"),
            steps: vec![
                PlanStep::Run(CommandStep::new(
                    "Create",
                    ("npm".into(), vec!["create".into()]),
                    Workdir::Parent,
                )),
                PlanStep::Run(CommandStep::new(
                    "Install",
                    ("pnpm".into(), vec!["install".into()]),
                    Workdir::Project,
                )),
                PlanStep::Write(TemplateFile::new("src/App.vue", "<template/>")),
            ],
        }
    }

    #[tokio::test]
    async fn test_execute_runs_steps_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let plan = sample_plan(dir.path());
        let mut runner = RecordingRunner::default();

        let report = execute(&plan, &mut runner, &mut FsTemplateWriter).await.unwrap();

        assert_eq!(report.commands_run, 2);
        assert_eq!(runner.calls[0], ("npm create".to_string(), dir.path().to_path_buf()));
        assert_eq!(runner.calls[1], ("pnpm install".to_string(), dir.path().join("app")));
        assert_eq!(report.files_written, vec![dir.path().join("app/src/App.vue")]);
    }

    #[tokio::test]
    async fn test_execute_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let plan = sample_plan(dir.path());
        let mut runner = RecordingRunner {
            fail_on: Some("npm".into()),
            ..Default::default()
        };

        let err = execute(&plan, &mut runner, &mut FsTemplateWriter).await.unwrap_err();

        assert!(err.to_string().contains("Create"));
        assert_eq!(runner.calls.len(), 1);
        assert!(!dir.path().join("app/src/App.vue").exists());
    }

    #[test]
    fn test_count_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();
        std::fs::write(dir.path().join("src/main.ts"), "").unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        assert_eq!(count_project_files(dir.path()), 2);
    }
}
