use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving relations or rendering a template.
///
/// Nothing is recovered locally: a failed generation never yields partial
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A declared relation name cannot be imported as a symbol.
    #[error("invalid relation name '{name}': {reason}")]
    InvalidRelationName { name: String, reason: String },

    /// An entity's symbol name is not a valid identifier.
    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    /// A scalar placeholder names a variable missing from the context.
    #[error("undefined template variable '{name}'")]
    UndefinedVariable { name: String },

    /// The template is structurally broken or does not fit the context.
    #[error("malformed template at byte {offset}: {reason}")]
    MalformedTemplate { offset: usize, reason: String },

    /// Generation of one entity's module failed.
    #[error("failed to generate module for entity '{entity}'")]
    GenerationFailed {
        entity: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_relation(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRelationName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
