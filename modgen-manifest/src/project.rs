use std::path::PathBuf;

use serde::Deserialize;

/// Project configuration (`[project]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used in reports
    pub name: String,

    /// Directory scanned for `*.entity.ts` files, relative to the manifest
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Overwrite existing `*.module.ts` files instead of skipping them
    #[serde(default)]
    pub overwrite: bool,
}

fn default_source() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            source: default_source(),
            overwrite: false,
        }
    }
}
