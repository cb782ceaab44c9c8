//! Reconciles styling mode against UI library choice

use super::error::{ResolveError, Result};
use crate::catalog::{CatalogEntry, StylingMode, NONE, TAILWIND_ONLY};

/// Produce a consistent `(styling, library)` pair or report why it can't be done.
///
/// Absent and `none` libraries collapse to the canonical outcome for the
/// styling mode. A Tailwind-required library under plain styling is a
/// `HardConflict`; the caller decides how to resolve it.
pub fn reconcile(
    catalog: &CatalogEntry,
    styling: StylingMode,
    ui_library: Option<&str>,
) -> Result<(StylingMode, String)> {
    let canonical = ui_library.map(|raw| catalog.canonicalize(raw));

    let library = match (canonical, styling) {
        (None, StylingMode::Tailwind) => TAILWIND_ONLY.to_string(),
        (None, StylingMode::Plain) => NONE.to_string(),
        (Some(lib), StylingMode::Tailwind) if lib == NONE => TAILWIND_ONLY.to_string(),
        (Some(lib), _) => lib,
    };

    if catalog.requires_tailwind(&library) && styling != StylingMode::Tailwind {
        return Err(ResolveError::HardConflict { library, styling });
    }

    if !catalog.is_known_library(&library) {
        return Err(ResolveError::UnknownLibrary {
            framework: catalog.framework,
            value: library,
        });
    }

    Ok((styling, library))
}

/// Styling mode implied by a library when none was supplied.
///
/// Depends only on the library value, so it gives the same answer whichever
/// field was filled in first.
pub fn infer_styling(catalog: &CatalogEntry, ui_library: Option<&str>) -> StylingMode {
    match ui_library.map(|raw| catalog.canonicalize(raw)) {
        Some(lib) if catalog.is_plain_library(&lib) || lib == NONE => StylingMode::Plain,
        _ => StylingMode::Tailwind,
    }
}

/// Resolve a conflict without an operator: enable the styling mode the library needs.
pub fn force_required_styling(
    catalog: &CatalogEntry,
    ui_library: Option<&str>,
) -> Result<(StylingMode, String)> {
    reconcile(catalog, StylingMode::Tailwind, ui_library)
}
