use anyhow::Result;
use frontkit_core::catalog::TAILWIND_ONLY;
use frontkit_core::resolve::{Answer, Prompter, Question, ResolveError};
use frontkit_core::scaffold::{CommandRunner, CommandStep, PlanStep, TemplateFile, TemplateWriter};
use frontkit_core::{
    create_project, resolve, Framework, Language, Mode, PackageManager, ProjectRequest,
    SessionContext, SessionOutcome, StylingMode,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct RecordingRunner {
    calls: Vec<(String, PathBuf)>,
}

impl CommandRunner for RecordingRunner {
    async fn run(&mut self, step: &CommandStep, cwd: &Path) -> Result<()> {
        self.calls.push((step.command_line(), cwd.to_path_buf()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingWriter {
    files: Vec<PathBuf>,
}

impl TemplateWriter for RecordingWriter {
    async fn write(&mut self, project_dir: &Path, file: &TemplateFile) -> Result<PathBuf> {
        let path = project_dir.join(&file.path);
        self.files.push(path.clone());
        Ok(path)
    }
}

/// Replays answers and keeps every question it was asked
struct Scripted {
    answers: VecDeque<Answer>,
    asked: Vec<Question>,
}

impl Scripted {
    fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    fn silent() -> Self {
        Self::new(Vec::<Answer>::new())
    }
}

impl Prompter for Scripted {
    fn ask(&mut self, question: &Question) -> frontkit_core::resolve::error::Result<Answer> {
        self.asked.push(question.clone());
        self.answers
            .pop_front()
            .ok_or_else(|| ResolveError::Prompt(format!("unscripted question {:?}", question)))
    }
}

fn ctx(dry_run: bool) -> SessionContext {
    SessionContext {
        parent_dir: PathBuf::from("/work"),
        package_manager: PackageManager::Pnpm,
        dry_run,
    }
}

fn complete_astro_request() -> ProjectRequest {
    ProjectRequest::new(Framework::Astro)
        .project_name("site")
        .language(Language::Ts)
        .styling(StylingMode::Tailwind)
        .ui_library("daisyui")
        .database("none")
}

#[test]
fn vue_tailwind_without_library_is_tailwind_only() {
    let config = resolve(
        ProjectRequest::new(Framework::Vue)
            .project_name("app")
            .language(Language::Ts)
            .styling(StylingMode::Tailwind),
    )
    .unwrap();
    assert!(config.use_tailwind());
    assert_eq!(config.ui_library(), TAILWIND_ONLY);
}

#[test]
fn astro_plain_with_shadcn_enables_tailwind() {
    let config = resolve(
        ProjectRequest::new(Framework::Astro)
            .styling(StylingMode::Plain)
            .ui_library("shadcn"),
    )
    .unwrap();
    assert!(config.use_tailwind());
    assert_eq!(config.ui_library(), "shadcn");
}

#[test]
fn plain_with_daisyui_enables_tailwind_for_both_frameworks() {
    for framework in [Framework::Astro, Framework::Vue] {
        let config = resolve(
            ProjectRequest::new(framework)
                .styling(StylingMode::Plain)
                .ui_library("daisyui"),
        )
        .unwrap();
        assert!(config.use_tailwind());
        assert_eq!(config.ui_library(), "daisyui");
    }
}

#[tokio::test]
async fn declining_tailwind_leads_to_a_plain_library() {
    let request = complete_astro_request().styling(StylingMode::Plain);
    let mut prompter = Scripted::new([
        Answer::EnableTailwind(false),
        Answer::Library("picocss".to_string()),
        Answer::Confirm(true),
    ]);
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let outcome = create_project(
        request,
        Mode::Interactive,
        &mut prompter,
        &mut runner,
        &mut writer,
        &ctx(true),
    )
    .await
    .unwrap();

    let SessionOutcome::Planned { config, .. } = outcome else {
        panic!("expected a dry-run plan");
    };
    assert!(!config.use_tailwind());
    assert_eq!(config.ui_library(), "picocss");

    let Question::Library { options, .. } = &prompter.asked[1] else {
        panic!("expected library question, got {:?}", prompter.asked[1]);
    };
    assert!(options.iter().all(|c| c.value != "daisyui"));
}

#[tokio::test]
async fn cancelling_touches_no_collaborator() {
    let mut prompter = Scripted::new([Answer::Confirm(false)]);
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let outcome = create_project(
        complete_astro_request(),
        Mode::Interactive,
        &mut prompter,
        &mut runner,
        &mut writer,
        &ctx(false),
    )
    .await
    .unwrap();

    assert!(matches!(outcome, SessionOutcome::Cancelled));
    assert!(runner.calls.is_empty());
    assert!(writer.files.is_empty());
}

#[tokio::test]
async fn dry_run_plans_without_running() {
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let outcome = create_project(
        complete_astro_request(),
        Mode::Programmatic,
        &mut Scripted::silent(),
        &mut runner,
        &mut writer,
        &ctx(true),
    )
    .await
    .unwrap();

    let SessionOutcome::Planned { plan, .. } = outcome else {
        panic!("expected a plan");
    };
    assert!(plan.commands().count() > 0);
    assert!(runner.calls.is_empty());
    assert!(writer.files.is_empty());
}

#[tokio::test]
async fn created_project_runs_generator_first_in_parent_dir() {
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let outcome = create_project(
        complete_astro_request(),
        Mode::Interactive,
        &mut Scripted::new([Answer::Confirm(true)]),
        &mut runner,
        &mut writer,
        &ctx(false),
    )
    .await
    .unwrap();

    let SessionOutcome::Created { plan, report, .. } = outcome else {
        panic!("expected a created project");
    };
    assert_eq!(report.commands_run, runner.calls.len());
    assert_eq!(report.files_written, writer.files);

    let (first, cwd) = &runner.calls[0];
    assert!(first.starts_with("pnpm create astro@latest site"));
    assert_eq!(cwd, Path::new("/work"));
    assert!(runner.calls[1..]
        .iter()
        .all(|(_, cwd)| cwd == Path::new("/work/site")));
    assert!(runner.calls.iter().any(|(cmd, _)| cmd.contains("daisyui")));
    assert!(matches!(plan.steps[0], PlanStep::Run(_)));
}

#[tokio::test]
async fn unknown_library_without_operator_is_an_error() {
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let err = create_project(
        ProjectRequest::new(Framework::Vue).ui_library("bulma"),
        Mode::Programmatic,
        &mut Scripted::silent(),
        &mut runner,
        &mut writer,
        &ctx(false),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("bulma"));
    assert!(runner.calls.is_empty());
}

#[tokio::test]
async fn escaping_project_name_never_reaches_the_filesystem() {
    let mut runner = RecordingRunner::default();
    let mut writer = RecordingWriter::default();

    let err = create_project(
        ProjectRequest::new(Framework::Vue).project_name("../../etc/x"),
        Mode::Programmatic,
        &mut Scripted::silent(),
        &mut runner,
        &mut writer,
        &ctx(false),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Invalid project name"));
    assert!(runner.calls.is_empty());
    assert!(writer.files.is_empty());
    assert_eq!(
        resolve(ProjectRequest::new(Framework::Vue).project_name("../../etc/x")).unwrap_err(),
        ResolveError::InvalidProjectName {
            name: "../../etc/x".to_string()
        }
    );
}
