//! Core utilities and types for the modgen module generator.
//!
//! This crate provides naming helpers, identifier validation and the
//! generated-file abstraction shared by the other modgen crates.

mod file;
mod ident;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier rules for the generated TypeScript
pub use ident::{is_reserved_word, validate_file_stem, validate_identifier};
// String utilities
pub use utils::{to_kebab_case, to_pascal_case};
