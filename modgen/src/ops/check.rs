//! Check operation - manifest linting.

use std::path::Path;

use modgen_codegen::lints::Linter;
use modgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest has already been parsed and validated; this runs the lints.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        entity_count: manifest.entities.len(),
        diagnostics: Linter::new().run(manifest),
    }
}
