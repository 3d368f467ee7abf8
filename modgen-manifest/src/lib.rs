// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `modgen.toml`.
//!
//! The manifest names the project, the directory holding the entity files
//! and, per entity, the other entities its module must import.

mod entity;
mod error;
mod manifest;
mod project;

pub use entity::EntityConfig;
pub use error::{Error, Result};
pub use manifest::{Manifest, ModgenToml, ParseContext};
pub use project::ProjectConfig;
