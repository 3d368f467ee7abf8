//! `<entity>.module.ts` feature module.

use std::path::{Path, PathBuf};

use modgen_core::{FileRules, GeneratedFile};

use crate::discover::EntityFile;

/// Suffix of generated module files.
pub const MODULE_SUFFIX: &str = ".module.ts";

/// A rendered feature module, written next to its entity file.
///
/// Existing modules are left untouched unless overwriting is requested,
/// since they are usually edited by hand after scaffolding.
#[derive(Debug, Clone)]
pub struct ModuleTs {
    folder: PathBuf,
    name: String,
    content: String,
    overwrite: bool,
}

impl ModuleTs {
    pub fn new(entity: &EntityFile, content: impl Into<String>) -> Self {
        Self {
            folder: entity.folder.clone(),
            name: entity.name.clone(),
            content: content.into(),
            overwrite: false,
        }
    }

    /// Overwrite an existing module file.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Path relative to the discovery root.
    pub fn relative_path(&self) -> PathBuf {
        self.folder.join(format!("{}{}", self.name, MODULE_SUFFIX))
    }
}

impl GeneratedFile for ModuleTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        if self.overwrite {
            FileRules::always()
        } else {
            FileRules::create_once()
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
