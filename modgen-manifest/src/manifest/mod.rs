//! Manifest types and parsing for modgen.toml files.

mod file;
mod parse;
mod validate;

use std::collections::BTreeMap;

pub use file::ModgenToml;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{EntityConfig, ProjectConfig};

/// Root manifest for modgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectConfig,

    /// Entities keyed by file stem (`user` for `user.entity.ts`)
    #[serde(default)]
    pub entities: BTreeMap<String, EntityConfig>,
}

impl Manifest {
    /// Look up an entity by file stem
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.get(name)
    }

    /// Declared relations of an entity, empty when it is not in the manifest
    pub fn relations_of(&self, name: &str) -> &[String] {
        self.entity(name)
            .map(|e| e.relations.as_slice())
            .unwrap_or_default()
    }

    /// Symbol override for an entity, if any
    pub fn clean_name_of(&self, name: &str) -> Option<&str> {
        self.entity(name).and_then(|e| e.clean_name.as_deref())
    }
}
