//! Identifier rules for generated TypeScript.

/// JavaScript and TypeScript words that cannot name an imported symbol.
const TS_RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with", "yield",
    // TypeScript reserved words
    "any", "as", "async", "await", "boolean", "constructor", "declare", "get", "implements",
    "interface", "module", "namespace", "never", "number", "object", "package", "private",
    "protected", "public", "readonly", "require", "set", "static", "string", "symbol", "type",
    "undefined", "unknown",
];

/// Check if a name is a JavaScript/TypeScript reserved word
pub fn is_reserved_word(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Validate that a name can be used as a TypeScript symbol.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, numbers, underscores and dollar signs");
    }

    if is_reserved_word(name) {
        return Some("name is a TypeScript reserved word");
    }

    None
}

/// Validate that a name can be used as an entity file stem (`<stem>.entity.ts`).
///
/// Dashes are allowed (`user-profile.entity.ts`). Returns None if valid,
/// Some(reason) if invalid.
pub fn validate_file_stem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    let mut prev_was_dash = false;
    for c in chars {
        if c == '-' {
            if prev_was_dash {
                return Some("name cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            prev_was_dash = false;
        } else {
            return Some("name must contain only letters, numbers, underscores, and dashes");
        }
    }

    if prev_was_dash {
        return Some("name cannot end with a dash");
    }

    None
}
