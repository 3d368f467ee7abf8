//! Checks over a manifest.
//!
//! Most lints report problems the generator silently tolerates (a duplicate
//! relation is imported once, a self relation is dropped) so the user can
//! clean up the manifest. `invalid-relation` reports, as an error, what
//! generation would reject outright.

mod diagnostic;
mod duplicate_relation;
mod invalid_relation;
mod lint;
mod self_relation;
mod unknown_relation;

pub use diagnostic::{Diagnostic, Severity};
pub use duplicate_relation::DuplicateRelationLint;
pub use invalid_relation::InvalidRelationLint;
pub use lint::Lint;
use modgen_manifest::Manifest;
pub use self_relation::SelfRelationLint;
pub use unknown_relation::UnknownRelationLint;

use crate::entity::clean_entity_name;

/// Runs a set of lints over a manifest.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(InvalidRelationLint),
                Box::new(DuplicateRelationLint),
                Box::new(SelfRelationLint),
                Box::new(UnknownRelationLint),
            ],
        }
    }

    /// Run every lint and collect their diagnostics.
    pub fn run(&self, manifest: &Manifest) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(manifest, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Symbol name an entity is imported under.
fn entity_symbol(manifest: &Manifest, name: &str) -> String {
    manifest
        .clean_name_of(name)
        .map(str::to_string)
        .unwrap_or_else(|| clean_entity_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lints_reported(src: &str) -> Vec<String> {
        let manifest: Manifest = src.parse().unwrap();
        Linter::new()
            .run(&manifest)
            .into_iter()
            .map(|d| d.lint)
            .collect()
    }

    #[test]
    fn test_clean_manifest() {
        let lints = lints_reported(
            r#"
            [project]
            name = "test"

            [entities.user]
            relations = ["Profile"]

            [entities.profile]
        "#,
        );

        assert!(lints.is_empty());
    }

    #[test]
    fn test_run_collects_all_diagnostics() {
        let lints = lints_reported(
            r#"
            [project]
            name = "test"

            [entities.user]
            relations = ["Profile", "Profile", "User"]
        "#,
        );

        assert_eq!(
            lints,
            ["duplicate-relation", "self-relation", "unknown-relation"]
        );
    }

    #[test]
    fn test_errors_come_first() {
        let manifest: Manifest = r#"
            [project]
            name = "test"

            [entities.user]
            relations = ["UserModule", "UserModule"]
        "#
        .parse()
        .unwrap();

        let diagnostics = Linter::new().run(&manifest);

        assert_eq!(diagnostics[0].lint, "invalid-relation");
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[1..].iter().all(|d| d.severity.is_warning()));
    }
}
