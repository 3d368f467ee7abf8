//! Lint for relations declared more than once.

use indexmap::IndexMap;
use modgen_manifest::Manifest;

use super::{Diagnostic, Lint};

/// Lint that warns when an entity repeats a relation.
pub struct DuplicateRelationLint;

impl Lint for DuplicateRelationLint {
    fn name(&self) -> &'static str {
        "duplicate-relation"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (name, entity) in &manifest.entities {
            let mut counts: IndexMap<&str, usize> = IndexMap::new();
            for relation in &entity.relations {
                *counts.entry(relation.as_str()).or_default() += 1;
            }

            for (relation, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "relation '{}' is declared {} times in '{}'; it is imported once",
                            relation, count, name
                        ),
                    )
                    .at(format!("entities.{}.relations", name)),
                );
            }
        }
    }
}
