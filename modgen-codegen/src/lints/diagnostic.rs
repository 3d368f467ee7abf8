//! Diagnostic types produced by lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that prevents generation.
    Error,
    /// A problem that doesn't prevent generation but should be addressed.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message from a lint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the manifest (e.g., "entities.user.relations").
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("self-relation", "ignored").at("entities.user.relations");

        assert!(diag.severity.is_warning());
        assert_eq!(
            diag.to_string(),
            "warning: ignored (at entities.user.relations)"
        );
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let diag = Diagnostic::error("duplicate-relation", "boom");
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["severity"], "error");
        assert_eq!(json["lint"], "duplicate-relation");
        assert!(json["location"].is_null());
    }
}
