//! Manifest parsing from files and strings.

use std::str::FromStr;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "modgen.toml")
    }
}

impl Manifest {
    /// Parse a modgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.project.name.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("project name cannot be empty", ctx.find_span("name")));
    }

    for (name, entity) in &manifest.entities {
        ctx.validate_stem(name, "entity")?;

        let entity_ctx = ctx.push(name);
        if let Some(clean_name) = &entity.clean_name {
            entity_ctx.validate_symbol(clean_name, "clean_name")?;
        }
        for relation in &entity.relations {
            entity_ctx.validate_symbol(relation, "relation")?;
        }
    }
    Ok(())
}
