//! Running external commands (generators, installers)
//!
//! Output of each child is streamed line by line so the developer sees the
//! generator's progress. Every step has an upper time bound.

use super::plan::CommandStep;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single step (generators download templates, installs hit the registry)
pub const STEP_TIMEOUT: Duration = Duration::from_secs(600);

/// Runs one command step to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&mut self, step: &CommandStep, cwd: &Path) -> Result<()>;
}

/// Spawns real processes with tokio
pub struct ProcessRunner {
    step_timeout: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(STEP_TIMEOUT)
    }
}

impl ProcessRunner {
    pub fn new(step_timeout: Duration) -> Self {
        Self { step_timeout }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&mut self, step: &CommandStep, cwd: &Path) -> Result<()> {
        let cmd = step.command_line();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();
        log::debug!("spawning `{}` in {}", cmd, cwd.display());

        let mut child = TokioCommand::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start `{}`", step.program))?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(self.step_timeout, output_task).await.is_err() {
            let _ = child.kill().await;
            anyhow::bail!(
                "`{}` timed out after {} seconds.\n\
                 Run it manually inside the project to finish setup.",
                cmd,
                self.step_timeout.as_secs()
            );
        }

        match timeout(Duration::from_secs(5), child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => anyhow::bail!(
                "{} failed with exit code: {}\n\
                 Command: {}",
                step.description,
                status.code().unwrap_or(-1),
                cmd
            ),
            Ok(Err(e)) => anyhow::bail!("Failed to wait for `{}`: {}", cmd, e),
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("`{}` hung after closing its output", cmd);
            }
        }
    }
}
