//! Relation-aware module generation for modgen.
//!
//! Given an entity and the entities it references, this crate computes the
//! imports its NestJS module needs and renders the module source:
//!
//! - [`entity`] - Entity descriptors (file stem + symbol name)
//! - [`relations`] - Relation resolution (dedup, self-exclusion, module paths)
//! - [`template`] - A small typed template engine (placeholders + `for` blocks)
//! - [`generator`] - The module generator tying the above together
//! - [`discover`] - Discovery of `*.entity.ts` files on disk
//! - [`files`] - Generated files written by the CLI
//! - [`lints`] - Non-fatal manifest checks

pub mod discover;
pub mod entity;
mod error;
pub mod files;
pub mod generator;
pub mod lints;
pub mod relations;
pub mod template;

pub use entity::EntityDescriptor;
pub use error::{Error, Result};
pub use generator::ModuleGenerator;
pub use relations::{RelationImport, RelationResolver};
pub use template::{RenderContext, Template, Value};
