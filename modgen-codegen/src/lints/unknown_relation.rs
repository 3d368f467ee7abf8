//! Lint for relations that name no known entity.

use std::collections::HashSet;

use modgen_manifest::Manifest;

use super::{Diagnostic, Lint, entity_symbol};

/// Lint that warns about relations to entities missing from the manifest.
///
/// The import path of such a relation is derived from its symbol name,
/// which may not match the real file.
pub struct UnknownRelationLint;

impl Lint for UnknownRelationLint {
    fn name(&self) -> &'static str {
        "unknown-relation"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let known: HashSet<String> = manifest
            .entities
            .keys()
            .map(|name| entity_symbol(manifest, name))
            .collect();

        for (name, entity) in &manifest.entities {
            let mut reported = HashSet::new();
            for relation in &entity.relations {
                if known.contains(relation) || !reported.insert(relation.as_str()) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "relation '{}' in '{}' does not match any declared entity",
                            relation, name
                        ),
                    )
                    .at(format!("entities.{}.relations", name)),
                );
            }
        }
    }
}
