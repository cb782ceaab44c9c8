//! Frontkit Core - Shared library for the Astro and Vue scaffolding CLIs
//!
//! This library decides one consistent project configuration from partial or
//! contradictory input, then drives external generators and package managers
//! to create the project. It is used by multiple CLI binaries (`astro-kit`,
//! `vue-kit`) that share the same logic but target different frameworks.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Resolution** - `catalog` tables and the `resolve` state machine; pure, no I/O
//! - **Layer 2: Scaffolding** - `scaffold` plans plus the command runner and template writer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use frontkit_core::catalog::{Framework, StylingMode};
//! use frontkit_core::resolve::{resolve, ProjectRequest};
//!
//! let request = ProjectRequest::new(Framework::Vue).styling(StylingMode::Tailwind);
//! let config = resolve(request).unwrap();
//! assert!(config.use_tailwind());
//! assert_eq!(config.ui_library(), "tailwind-only");
//! ```

pub mod catalog;
pub mod config;
pub mod framework;
pub mod resolve;
pub mod runtime;
pub mod scaffold;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Framework, Language, StylingMode};
pub use config::PackageManager;
pub use framework::FrameworkProfile;
pub use resolve::{resolve, Mode, Outcome, ProjectRequest, ResolveError, ResolvedConfig};
pub use session::{create_project, SessionContext, SessionOutcome};

#[cfg(feature = "tui")]
pub use tui::run;
