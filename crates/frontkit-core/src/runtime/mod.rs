//! Runtime detection
//!
//! This module provides:
//! - Node.js and package manager detection
//! - Node.js version advisories against a framework minimum

pub mod check;
pub mod version;

pub use check::{check_node, check_package_manager, check_runtimes, RuntimeInfo};
pub use version::check_node_version;
