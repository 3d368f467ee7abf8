//! Entity descriptors.

use modgen_core::{to_pascal_case, validate_identifier};

use crate::{Error, Result};

/// One entity as seen by the generator.
///
/// `name` is the entity's file stem (`user` for `user.entity.ts`) and is
/// used to build the entity's own import path. `clean_name` is the symbol
/// emitted in generated code and is always a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityDescriptor {
    name: String,
    clean_name: String,
}

impl EntityDescriptor {
    /// Create a descriptor with an explicit symbol name.
    pub fn new(name: impl Into<String>, clean_name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let clean_name = clean_name.into();

        if let Some(reason) = validate_identifier(&clean_name) {
            return Err(Error::InvalidEntityName {
                name: clean_name,
                reason: reason.to_string(),
            });
        }

        Ok(Self { name, clean_name })
    }

    /// Create a descriptor whose symbol name is derived from `name`.
    ///
    /// See [`clean_entity_name`] for the derivation.
    pub fn from_name(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let clean_name = clean_entity_name(&name);
        Self::new(name, clean_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clean_name(&self) -> &str {
        &self.clean_name
    }
}

/// Derive the symbol name of an entity from its raw name.
///
/// Leading path segments and the `.entity` / `.entity.ts` suffix are
/// stripped, and the rest is converted to PascalCase:
/// `src/users/user_profile.entity.ts` -> `UserProfile`.
pub fn clean_entity_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let base = base.strip_suffix(".ts").unwrap_or(base);
    let base = base.strip_suffix(".entity").unwrap_or(base);
    to_pascal_case(base)
}
