//! Relation resolution.
//!
//! Turns an entity's raw relation list into the ordered, deduplicated set
//! of imports its module needs.

use indexmap::IndexMap;
use modgen_core::{to_kebab_case, validate_identifier};
use tracing::{debug, trace};

use crate::{EntityDescriptor, Error, Result};

/// One related entity to import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationImport {
    /// Symbol imported from the related entity file
    pub symbol_name: String,
    /// Relative module path (e.g., `./profile.entity`)
    pub module_path: String,
}

impl RelationImport {
    /// The import as an ordered `(symbol, path)` tuple for template loops.
    pub fn to_tuple(&self) -> Vec<String> {
        vec![self.symbol_name.clone(), self.module_path.clone()]
    }
}

/// Resolves raw relation names into [`RelationImport`]s.
///
/// Guarantees, for a single call:
/// - each relation appears once, at the position of its first declaration
/// - a relation naming the entity itself is dropped
/// - module paths are a pure function of the symbol name
#[derive(Debug, Clone, Default)]
pub struct RelationResolver {
    /// Symbol -> file stem, for entities whose stem does not follow from the symbol
    known_stems: IndexMap<String, String>,
    /// Symbols that are already taken in the generated file
    reserved_symbols: Vec<String>,
}

impl RelationResolver {
    /// Create a resolver deriving every path from the symbol name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the file stem of an entity symbol (`Profile` -> `user-profile`).
    pub fn with_known_entity(mut self, symbol: impl Into<String>, stem: impl Into<String>) -> Self {
        self.known_stems.insert(symbol.into(), stem.into());
        self
    }

    /// Reject relations that would shadow these symbols.
    pub fn reserving<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_symbols
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// File stem of the entity a symbol names.
    pub fn entity_stem(&self, symbol: &str) -> String {
        match self.known_stems.get(symbol) {
            Some(stem) => stem.clone(),
            None => to_kebab_case(symbol),
        }
    }

    /// Module path for a related entity symbol, in the importing entity's folder.
    pub fn module_path(&self, symbol: &str) -> String {
        format!("./{}.entity", self.entity_stem(symbol))
    }

    /// Resolve the relations declared by `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRelationName`] when a name is empty, is not an
    /// identifier, is a reserved word, or shadows a reserved symbol.
    pub fn resolve<S: AsRef<str>>(
        &self,
        entity: &EntityDescriptor,
        relations: &[S],
    ) -> Result<Vec<RelationImport>> {
        let mut imports: IndexMap<&str, RelationImport> = IndexMap::new();

        for relation in relations {
            let name = relation.as_ref();
            self.validate(name)?;

            if name == entity.clean_name() {
                trace!(entity = entity.name(), "dropping self relation");
                continue;
            }

            if imports.contains_key(name) {
                trace!(entity = entity.name(), relation = name, "dropping duplicate relation");
                continue;
            }

            imports.insert(
                name,
                RelationImport {
                    symbol_name: name.to_string(),
                    module_path: self.module_path(name),
                },
            );
        }

        debug!(
            entity = entity.name(),
            declared = relations.len(),
            resolved = imports.len(),
            "resolved relations"
        );

        Ok(imports.into_values().collect())
    }

    fn validate(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_relation(name, reason));
        }

        if self.reserved_symbols.iter().any(|s| s == name) {
            return Err(Error::invalid_relation(
                name,
                "name is already declared by the generated module",
            ));
        }

        Ok(())
    }
}
