use serde::Deserialize;

/// Per-entity configuration (`[entities.<name>]`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    /// Symbol name used in generated code, overriding the derived one
    pub clean_name: Option<String>,

    /// Related entities, by symbol name, in declaration order
    #[serde(default)]
    pub relations: Vec<String>,
}

impl EntityConfig {
    /// Check if the entity declares any relations
    pub fn has_relations(&self) -> bool {
        !self.relations.is_empty()
    }
}
