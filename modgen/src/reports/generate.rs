//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from module generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Lint warnings about the manifest.
    pub warnings: Vec<String>,
    /// One entry per discovered entity, in discovery order.
    pub modules: Vec<GeneratedModule>,
}

/// A module generated for one entity.
#[derive(Debug)]
pub struct GeneratedModule {
    /// Entity file stem.
    pub name: String,
    /// Folder holding the entity and its module.
    pub folder: PathBuf,
    /// Module path relative to the discovery root.
    pub path: PathBuf,
    pub outcome: ModuleOutcome,
}

/// What happened to a generated module.
#[derive(Debug)]
pub enum ModuleOutcome {
    /// Written to disk.
    Written,
    /// Left alone because the file already exists.
    Skipped,
    /// Dry-run preview of the module source.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.modules.is_empty() {
            out.preformatted("No entity files found");
            return;
        }

        let previews: Vec<_> = self
            .modules
            .iter()
            .filter_map(|m| match &m.outcome {
                ModuleOutcome::Preview(content) => Some((m, content)),
                _ => None,
            })
            .collect();

        if !previews.is_empty() {
            for (module, content) in &previews {
                out.divider(&module.path.display().to_string());
                out.preformatted(content);
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} module{} would be generated",
                previews.len(),
                if previews.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        for module in &self.modules {
            out.preformatted(&format!(
                "Writing module for {} in {}",
                module.name,
                module.folder.display()
            ));
        }

        let written: Vec<_> = self.with_outcome(|o| matches!(o, ModuleOutcome::Written));
        let skipped: Vec<_> = self.with_outcome(|o| matches!(o, ModuleOutcome::Skipped));

        if !written.is_empty() {
            out.newline();
            out.section("Written");
            for path in written {
                out.added_item(&path);
            }
        }

        if !skipped.is_empty() {
            out.newline();
            out.section("Skipped (already exist, use --force to overwrite)");
            for path in skipped {
                out.skipped_item(&path);
            }
        }
    }
}

impl GenerateReport {
    fn with_outcome(&self, pred: impl Fn(&ModuleOutcome) -> bool) -> Vec<String> {
        self.modules
            .iter()
            .filter(|m| pred(&m.outcome))
            .map(|m| m.path.display().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn module(name: &str, outcome: ModuleOutcome) -> GeneratedModule {
        GeneratedModule {
            name: name.to_string(),
            folder: PathBuf::from("src"),
            path: PathBuf::from(format!("{}.module.ts", name)),
            outcome,
        }
    }

    #[test]
    fn test_render_written_and_skipped() {
        let report = GenerateReport {
            warnings: Vec::new(),
            modules: vec![
                module("profile", ModuleOutcome::Skipped),
                module("user", ModuleOutcome::Written),
            ],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Writing module for profile in src",
                "Writing module for user in src",
                "",
                "Written:",
                "  + user.module.ts",
                "",
                "Skipped (already exist, use --force to overwrite):",
                "  = profile.module.ts",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            warnings: vec!["relation 'Asset' in 'user' does not match any declared entity".into()],
            modules: vec![module("user", ModuleOutcome::Preview("export class UserModule {}".into()))],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: relation 'Asset' in 'user' does not match any declared entity",
                "── user.module.ts ──",
                "export class UserModule {}",
                "── Summary ──",
                "1 module would be generated",
            ]
        );
    }
}
