//! Check command report data structures.

use std::path::PathBuf;

use modgen_codegen::lints::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from manifest linting.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of entities declared in the manifest.
    pub entity_count: usize,
    /// Diagnostics from every lint.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };

            match diag.severity {
                Severity::Error => out.error(&msg),
                Severity::Warning => out.warning(&msg),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} entit{})",
                self.config_path.display(),
                self.entity_count,
                if self.entity_count == 1 { "y" } else { "ies" }
            ));
        }
    }
}
