//! One scaffolding session: resolve, then hand off to the collaborators

use crate::config::PackageManager;
use crate::resolve::{resolve_with, Controller, Mode, Outcome, ProjectRequest, Prompter, ResolvedConfig};
use crate::scaffold::{execute, CommandRunner, ExecutionReport, ScaffoldPlan, TemplateWriter};
use anyhow::Result;
use std::path::PathBuf;

/// Where and how the project gets created
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub parent_dir: PathBuf,
    pub package_manager: PackageManager,
    /// Build the plan but run nothing
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum SessionOutcome {
    Created {
        config: ResolvedConfig,
        plan: ScaffoldPlan,
        report: ExecutionReport,
    },
    Planned {
        config: ResolvedConfig,
        plan: ScaffoldPlan,
    },
    /// The operator rejected the configuration; nothing was run or written
    Cancelled,
}

/// Resolve `request`, then execute the resulting plan.
///
/// The runner and writer are only touched once a configuration is resolved.
pub async fn create_project<P, R, W>(
    request: ProjectRequest,
    mode: Mode,
    prompter: &mut P,
    runner: &mut R,
    writer: &mut W,
    ctx: &SessionContext,
) -> Result<SessionOutcome>
where
    P: Prompter + ?Sized,
    R: CommandRunner,
    W: TemplateWriter,
{
    let mut controller = Controller::new(request, mode);
    let config = match resolve_with(&mut controller, prompter)? {
        Outcome::Resolved(config) => config,
        Outcome::Cancelled => {
            log::debug!("session cancelled before scaffolding");
            return Ok(SessionOutcome::Cancelled);
        }
    };

    let plan = ScaffoldPlan::build(&config, ctx.package_manager, &ctx.parent_dir);
    if ctx.dry_run {
        return Ok(SessionOutcome::Planned { config, plan });
    }

    let report = execute(&plan, runner, writer).await?;
    Ok(SessionOutcome::Created {
        config,
        plan,
        report,
    })
}
