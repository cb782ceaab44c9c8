//! Charm-style CLI prompts using cliclack

use crate::catalog::{Language, StylingMode};
use crate::config::{self, PackageManager};
use crate::framework::FrameworkProfile;
use crate::resolve::{
    is_valid_project_name, Answer, Mode, ProjectRequest, Prompter, Question, ResolveError,
    ResolvedConfig,
};
use crate::runtime::{check, version};
use crate::scaffold::{self, FsTemplateWriter, ProcessRunner, ScaffoldPlan};
use crate::session::{self, SessionContext, SessionOutcome};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (also the directory created)
    pub name: Option<String>,

    pub language: Option<Language>,

    pub styling: Option<StylingMode>,

    /// UI library, aliases accepted
    pub ui: Option<String>,

    pub database: Option<String>,

    /// YAML request file; flags override its values
    pub config: Option<PathBuf>,

    /// Directory to create the project in (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Skip Node.js / package manager detection
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Resolve and print the plan without running anything
    pub dry_run: bool,
}

impl CreateArgs {
    fn overrides(&self, request: &ProjectRequest) -> ProjectRequest {
        ProjectRequest {
            framework: request.framework,
            project_name: self.name.clone(),
            language: self.language,
            styling: self.styling,
            ui_library: self.ui.clone(),
            database: self.database.clone(),
        }
    }
}

/// cliclack-backed operator for the resolver
pub struct ClackPrompter;

fn prompt_error(e: std::io::Error) -> ResolveError {
    ResolveError::Prompt(e.to_string())
}

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &Question) -> crate::resolve::error::Result<Answer> {
        match question {
            Question::ProjectName { default, notice } => {
                if let Some(notice) = notice {
                    cliclack::log::warning(notice).map_err(prompt_error)?;
                }
                prompt_project_name(default)
                    .map(Answer::ProjectName)
                    .map_err(|e| ResolveError::Prompt(e.to_string()))
            }
            Question::Language { options } => {
                let mut select = cliclack::select("Which language?");
                for lang in options.iter() {
                    select = select.item(*lang, lang.display_name(), "");
                }
                select.interact().map(Answer::Language).map_err(prompt_error)
            }
            Question::Styling { options } => {
                let mut select = cliclack::select("How do you want to style the project?");
                for styling in options.iter() {
                    select = select.item(*styling, styling.display_name(), "");
                }
                select.interact().map(Answer::Styling).map_err(prompt_error)
            }
            Question::Library { options, notice } => {
                if let Some(notice) = notice {
                    cliclack::log::warning(notice).map_err(prompt_error)?;
                }
                let mut select = cliclack::select("Pick a UI library");
                for choice in options.iter() {
                    select = select.item(choice.value, choice.label, choice.hint);
                }
                let value: &str = select.interact().map_err(prompt_error)?;
                Ok(Answer::Library(value.to_string()))
            }
            Question::EnableTailwind { library } => {
                let enable: bool = cliclack::confirm(format!(
                    "{} requires Tailwind CSS. Enable Tailwind?",
                    library
                ))
                .initial_value(true)
                .interact()
                .map_err(prompt_error)?;
                if !enable {
                    cliclack::log::info("Choose a library that works with plain CSS")
                        .map_err(prompt_error)?;
                }
                Ok(Answer::EnableTailwind(enable))
            }
            Question::Database { options, notice } => {
                if let Some(notice) = notice {
                    cliclack::log::warning(notice).map_err(prompt_error)?;
                }
                let mut select = cliclack::select("Add a database?");
                for choice in options.iter() {
                    select = select.item(choice.value, choice.label, choice.hint);
                }
                let value: &str = select.interact().map_err(prompt_error)?;
                Ok(Answer::Database(value.to_string()))
            }
            Question::Confirm { summary } => {
                cliclack::note("Configuration", format_summary(summary)).map_err(prompt_error)?;
                cliclack::confirm("Create the project?")
                    .initial_value(true)
                    .interact()
                    .map(Answer::Confirm)
                    .map_err(prompt_error)
            }
        }
    }
}

fn format_summary(summary: &[(&'static str, String)]) -> String {
    let width = summary.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    summary
        .iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the CLI with interactive prompts
pub async fn run<F: FrameworkProfile>(profile: &F, args: CreateArgs) -> Result<()> {
    cliclack::intro(format!("{} project setup", profile.display_name()))?;

    let mode = if args.yes {
        Mode::Programmatic
    } else {
        Mode::Interactive
    };

    // Step 1: Build the request (file, then flags)
    let mut request = build_request(profile, &args)?;

    // Step 2: Pick the parent directory and project name
    let parent_dir = select_parent_directory(&args)?;
    let project_name = choose_project_name(profile, request.project_name.as_deref(), mode)?;
    request.project_name = Some(project_name.clone());
    check_target_directory(&parent_dir.join(&project_name), &args)?;

    // Step 3: Package manager and runtimes
    let package_manager = config::detect_package_manager();
    cliclack::log::info(format!("Using {}", package_manager))?;
    if args.skip_runtime_check || args.dry_run {
        cliclack::log::info("Skipping runtime check")?;
    } else {
        check_runtimes(profile, package_manager, &args)?;
    }

    // Step 4: Resolve and scaffold
    let ctx = SessionContext {
        parent_dir,
        package_manager,
        dry_run: args.dry_run,
    };
    let outcome = session::create_project(
        request,
        mode,
        &mut ClackPrompter,
        &mut ProcessRunner::default(),
        &mut FsTemplateWriter,
        &ctx,
    )
    .await?;

    // Step 5: Report
    match outcome {
        SessionOutcome::Cancelled => {
            cliclack::outro_cancel("Setup cancelled. Nothing was created.")?;
        }
        SessionOutcome::Planned { config, plan } => {
            print_plan(&config, &plan)?;
            cliclack::outro("Dry run complete")?;
        }
        SessionOutcome::Created {
            config,
            plan,
            report,
        } => {
            if mode == Mode::Programmatic {
                cliclack::note("Configuration", format_summary(&config.summary()))?;
            }
            cliclack::log::success(format!(
                "Created {} in {} ({} commands, {} starter files, {} files total)",
                config.project_name(),
                plan.project_dir.display(),
                report.commands_run,
                report.files_written.len(),
                scaffold::count_project_files(&plan.project_dir)
            ))?;
            print_next_steps(profile, &plan.project_dir, &config, package_manager)?;
        }
    }

    Ok(())
}

fn build_request<F: FrameworkProfile>(profile: &F, args: &CreateArgs) -> Result<ProjectRequest> {
    let framework = profile.framework();
    let base = match &args.config {
        Some(path) => {
            cliclack::log::info(format!("Using request file {}", path.display()))?;
            config::load_request(path, framework)?
        }
        None => ProjectRequest::new(framework),
    };
    let overrides = args.overrides(&base);
    Ok(base.merge(overrides))
}

fn select_parent_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }

    Ok(path)
}

/// Settle the project name before the target directory is checked, so the
/// directory checked is the one the plan creates. Returns the trimmed name.
fn choose_project_name<F: FrameworkProfile>(
    profile: &F,
    given: Option<&str>,
    mode: Mode,
) -> Result<String> {
    let default = profile.framework().catalog().default_project_name;
    match given.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) if is_valid_project_name(name) => Ok(name.to_string()),
        Some(name) => {
            let err = ResolveError::InvalidProjectName {
                name: name.to_string(),
            };
            if mode == Mode::Programmatic {
                return Err(err.into());
            }
            cliclack::log::warning(err.to_string())?;
            prompt_project_name(default)
        }
        None if mode == Mode::Interactive => prompt_project_name(default),
        None => Ok(default.to_string()),
    }
}

fn prompt_project_name(default: &str) -> Result<String> {
    let input: String = cliclack::input("Project name")
        .placeholder(default)
        .default_input(default)
        .validate(|input: &String| {
            if is_valid_project_name(input.trim()) {
                Ok(())
            } else {
                Err("Use letters, digits, '-', '_' or '.'")
            }
        })
        .interact()?;
    Ok(input.trim().to_string())
}

fn check_target_directory(path: &Path, args: &CreateArgs) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if !path.is_dir() {
        anyhow::bail!("{} exists and is not a directory", path.display());
    }

    let count = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .count();
    if count == 0 {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} already has {} existing items",
        path.display(),
        count
    ))?;

    // Generators prompt on non-empty directories, which would hang --yes runs
    if args.yes {
        anyhow::bail!("Refusing to scaffold into a non-empty directory in --yes mode.");
    }

    let confirm: bool = cliclack::confirm("Continue anyway?")
        .initial_value(false)
        .interact()?;
    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }
    Ok(())
}

fn check_runtimes<F: FrameworkProfile>(
    profile: &F,
    pm: PackageManager,
    args: &CreateArgs,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes(pm) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

            if let Some(node) = runtimes.iter().find(|r| r.name == "Node.js") {
                if let Some(warning) = node.version.as_deref().and_then(|v| {
                    version::check_node_version(v, profile.min_node_version(), profile.display_name())
                }) {
                    cliclack::log::warning(warning)?;
                }
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            handle_missing_runtimes(args)
        }
    }
}

fn handle_missing_runtimes(args: &CreateArgs) -> Result<()> {
    if args.yes {
        anyhow::bail!("Please install the missing runtimes and try again.");
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item("docs", format!("Open Node.js downloads ({})", NODE_DOWNLOAD_URL), "")
        .item("skip", "Continue anyway", "commands will likely fail")
        .item("abort", "Abort", "")
        .interact()?;

    match action {
        "docs" => {
            open::that(NODE_DOWNLOAD_URL)?;
            cliclack::outro("After installing Node.js, run this command again.")?;
            std::process::exit(0);
        }
        "skip" => {
            cliclack::log::info("Continuing without a verified runtime")?;
            Ok(())
        }
        _ => anyhow::bail!("Setup cancelled."),
    }
}

fn print_plan(config: &ResolvedConfig, plan: &ScaffoldPlan) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    cliclack::note("Resolved configuration", yaml.trim_end())?;

    let steps: Vec<String> = plan
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{:>2}. {}", i + 1, step))
        .collect();
    cliclack::note(
        format!("Plan for {}", plan.project_dir.display()),
        steps.join("\n"),
    )?;
    Ok(())
}

fn print_next_steps<F: FrameworkProfile>(
    profile: &F,
    project_dir: &Path,
    config: &ResolvedConfig,
    pm: PackageManager,
) -> Result<()> {
    let steps = profile.next_steps(project_dir, config, pm);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", profile.docs_url()))?;

    Ok(())
}
