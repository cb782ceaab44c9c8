//! Writing starter files into the generated project

use super::plan::TemplateFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes one template file; returns the absolute path written
#[allow(async_fn_in_trait)]
pub trait TemplateWriter {
    async fn write(&mut self, project_dir: &Path, file: &TemplateFile) -> Result<PathBuf>;
}

/// Writes to the local filesystem, replacing files the generator created
#[derive(Debug, Default)]
pub struct FsTemplateWriter;

impl TemplateWriter for FsTemplateWriter {
    async fn write(&mut self, project_dir: &Path, file: &TemplateFile) -> Result<PathBuf> {
        if file.path.is_absolute()
            || file
                .path
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            anyhow::bail!("Refusing to write outside the project: {}", file.path.display());
        }

        let target_path = project_dir.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        log::debug!("wrote {}", target_path.display());
        Ok(target_path)
    }
}
