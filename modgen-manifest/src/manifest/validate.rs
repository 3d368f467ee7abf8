//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use modgen_core::{is_reserved_word, validate_file_stem, validate_identifier};

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, so nested validation can report where
/// a bad name lives.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "modgen.toml");
/// ctx.validate_stem("user", "entity")?;
///
/// let nested = ctx.push("user");
/// nested.validate_symbol("Profile", "relation")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["user"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "relation in 'user'" or just "entity" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name can be emitted as a TypeScript symbol.
    pub fn validate_symbol(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self.source.reserved_word_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate that a name can be used as an entity file stem.
    pub fn validate_stem(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_file_stem(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Find the span of a name in the TOML source.
///
/// Searches table headers (`[entities.name]`, `[entities."name"]`) first,
/// then quoted string values (`"name"` / `'name'`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table header patterns with leading dot, e.g. [entities.user]
    let headers = [format!(".{}]", name), format!(".{}.", name)];
    for pattern in &headers {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Quoted values and quoted keys, e.g. relations = ["Profile"]
    let quoted = [format!("\"{}\"", name), format!("'{}'", name)];
    for pattern in &quoted {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "modgen.toml");
        assert_eq!(ctx.context_for("entity"), "entity");

        let nested = ctx.push("user");
        assert_eq!(nested.context_for("relation"), "relation in 'user'");
    }

    #[test]
    fn test_find_span_in_header() {
        let src = "[entities.user]\nrelations = []\n";
        let span = find_name_span(src, "user").unwrap();

        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_span_in_array() {
        let src = "[entities.user]\nrelations = [\"Profile\"]\n";
        let span = find_name_span(src, "Profile").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Profile");
    }

    #[test]
    fn test_find_span_missing() {
        assert!(find_name_span("[project]\nname = \"x\"\n", "Asset").is_none());
    }

    #[test]
    fn test_validate_symbol() {
        let ctx = ParseContext::new("", "modgen.toml");

        assert!(ctx.validate_symbol("Profile", "relation").is_ok());
        assert!(ctx.validate_symbol("class", "relation").is_err());
        assert!(ctx.validate_symbol("user-profile", "relation").is_err());
    }
}
