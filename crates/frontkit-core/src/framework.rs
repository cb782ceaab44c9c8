//! Framework profile trait for CLI binaries
//!
//! Each binary (astro-kit, vue-kit) implements this trait to define its
//! identity and the guidance printed once the project exists.

use crate::catalog::Framework;
use crate::config::PackageManager;
use crate::resolve::ResolvedConfig;
use std::path::Path;

pub trait FrameworkProfile: Clone + Send + Sync + 'static {
    /// Which catalog and scaffolding recipe this binary drives
    fn framework(&self) -> Framework;

    /// Internal name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str {
        self.framework().display_name()
    }

    /// URL for framework documentation
    fn docs_url(&self) -> &'static str;

    /// Oldest Node.js release the generator supports
    fn min_node_version(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &ResolvedConfig, pm: PackageManager) -> Vec<String>;
}
