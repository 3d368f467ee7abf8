//! Lint for relations the generator would reject.

use modgen_manifest::Manifest;

use super::{Diagnostic, Lint};
use crate::{ModuleGenerator, generator::entity_descriptor};

/// Lint that reports, as errors, every entity whose module cannot be
/// generated from the manifest.
pub struct InvalidRelationLint;

impl Lint for InvalidRelationLint {
    fn name(&self) -> &'static str {
        "invalid-relation"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let generator = match ModuleGenerator::for_manifest(manifest) {
            Ok(generator) => generator,
            Err(err) => {
                diagnostics.push(Diagnostic::error(self.name(), err.to_string()));
                return;
            }
        };

        for name in manifest.entities.keys() {
            let result = entity_descriptor(manifest, name)
                .and_then(|entity| generator.imports(&entity, manifest.relations_of(name)));

            if let Err(err) = result {
                diagnostics.push(
                    Diagnostic::error(self.name(), format!("'{}': {}", name, err))
                        .at(format!("entities.{}", name)),
                );
            }
        }
    }
}
