//! Configuration sources outside the CLI flags
//!
//! - YAML request files (`--config`)
//! - package manager selection (environment override, invoking agent, PATH)

pub mod package_manager;
pub mod request_file;

pub use package_manager::{detect_package_manager, PackageManager};
pub use request_file::{load_request, RequestFile};
