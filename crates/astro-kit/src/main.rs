//! astro-kit - Project scaffolding for Astro sites

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use frontkit_core::tui::CreateArgs;
use frontkit_core::{Framework, FrameworkProfile, Language, PackageManager, ResolvedConfig, StylingMode};
use std::path::{Path, PathBuf};

/// Astro profile
#[derive(Clone)]
pub struct AstroProfile;

impl FrameworkProfile for AstroProfile {
    fn framework(&self) -> Framework {
        Framework::Astro
    }

    fn name(&self) -> &'static str {
        "astro-kit"
    }

    fn docs_url(&self) -> &'static str {
        "https://docs.astro.build"
    }

    fn min_node_version(&self) -> &'static str {
        "18.17.1"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Astro projects with Tailwind, UI libraries and databases"
    }

    fn next_steps(&self, dir: &Path, config: &ResolvedConfig, pm: PackageManager) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Database credentials
        match config.database() {
            "astrodb" => steps.push("Define tables in db/config.ts".to_string()),
            "supabase" => {
                steps.push("Add SUPABASE_URL and SUPABASE_KEY to .env".to_string())
            }
            _ => {}
        }

        // Step 3: Start dev server
        steps.push(pm.dev_command().to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "astro-kit")]
#[command(about = "CLI for scaffolding Astro projects with Tailwind, UI libraries and databases")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Astro project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name (also the directory created)
    pub name: Option<String>,

    /// Language (ts, js)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Styling mode (tailwind, plain)
    #[arg(short, long)]
    pub styling: Option<StylingMode>,

    /// UI library (daisyui, shadcn, flowbite, bootstrap, picocss, none, twonly)
    #[arg(short, long)]
    pub ui: Option<String>,

    /// Database (none, astrodb, supabase)
    #[arg(long)]
    pub database: Option<String>,

    /// YAML request file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip Node.js and package manager detection
    #[arg(long = "skip-runtime-check")]
    pub skip_runtime_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the resolved configuration and plan without running anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            language: args.language,
            styling: args.styling,
            ui: args.ui,
            database: args.database,
            config: args.config,
            directory: args.directory,
            skip_runtime_check: args.skip_runtime_check,
            yes: args.yes,
            dry_run: args.dry_run,
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let profile = AstroProfile;
    log::debug!("{} starting", profile.name());

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to create behavior (interactive mode)
        None => CreateArgs::default(),
    };

    let result = frontkit_core::run(&profile, create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
