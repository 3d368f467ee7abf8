//! Lint for entities that list themselves as a relation.

use modgen_manifest::Manifest;

use super::{Diagnostic, Lint, entity_symbol};

/// Lint that warns when an entity names itself as a relation.
pub struct SelfRelationLint;

impl Lint for SelfRelationLint {
    fn name(&self) -> &'static str {
        "self-relation"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (name, entity) in &manifest.entities {
            let symbol = entity_symbol(manifest, name);
            if entity.relations.iter().any(|r| *r == symbol) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "'{}' lists itself ('{}') as a relation; it is ignored",
                            name, symbol
                        ),
                    )
                    .at(format!("entities.{}.relations", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_relation_with_derived_symbol() {
        let manifest: Manifest = r#"
            [project]
            name = "test"

            [entities.user]
            relations = ["Profile", "User"]
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        SelfRelationLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_self_relation_with_clean_name_override() {
        let manifest: Manifest = r#"
            [project]
            name = "test"

            [entities.user-profile]
            clean_name = "Profile"
            relations = ["UserProfile", "Profile"]
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        SelfRelationLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("('Profile')"));
    }
}
