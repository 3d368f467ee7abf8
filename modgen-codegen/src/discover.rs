//! Discovery of entity files on disk.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};
use tracing::debug;
use walkdir::WalkDir;

/// Suffix identifying TypeORM entity files.
pub const ENTITY_SUFFIX: &str = ".entity.ts";

/// An entity file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFile {
    /// Folder containing the file, relative to the discovery root
    pub folder: PathBuf,
    /// File name up to its first `.` (`user` for `user.entity.ts`)
    pub name: String,
}

impl EntityFile {
    /// Path of the entity file relative to the discovery root.
    pub fn path(&self) -> PathBuf {
        self.folder.join(format!("{}{}", self.name, ENTITY_SUFFIX))
    }
}

/// Entity files found under a root.
#[derive(Debug, Clone, Default)]
pub struct Discovered {
    /// Directory the entity folders are relative to
    pub root: PathBuf,
    /// Entities, sorted by path
    pub entities: Vec<EntityFile>,
}

impl Discovered {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Find a discovered entity by file stem.
    pub fn find(&self, name: &str) -> Option<&EntityFile> {
        self.entities.iter().find(|e| e.name == name)
    }
}

/// Check if a file name looks like an entity file.
pub fn is_entity_file(file_name: &str) -> bool {
    file_name.len() > ENTITY_SUFFIX.len() && file_name.ends_with(ENTITY_SUFFIX)
}

/// Find entity files at `path`.
///
/// A file path yields that single entity. A directory is walked
/// recursively for `*.entity.ts` files.
pub fn discover_entities(path: &Path) -> Result<Discovered> {
    if path.is_file() {
        let file_name = file_name_of(path)?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok(Discovered {
            root,
            entities: vec![EntityFile {
                folder: PathBuf::new(),
                name: entity_name(&file_name),
            }],
        });
    }

    if !path.is_dir() {
        bail!("'{}' is neither an entity file nor a directory", path.display());
    }

    let mut entities = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.wrap_err_with(|| format!("failed to walk '{}'", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !is_entity_file(&file_name) {
            continue;
        }

        let folder = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(path).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        entities.push(EntityFile {
            folder,
            name: entity_name(&file_name),
        });
    }

    debug!(root = %path.display(), count = entities.len(), "discovered entities");

    Ok(Discovered {
        root: path.to_path_buf(),
        entities,
    })
}

fn file_name_of(path: &Path) -> Result<String> {
    match path.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => bail!("'{}' has no file name", path.display()),
    }
}

/// The part of a file name before its first `.`.
fn entity_name(file_name: &str) -> String {
    file_name
        .split('.')
        .next()
        .unwrap_or(file_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_is_entity_file() {
        assert!(is_entity_file("user.entity.ts"));
        assert!(!is_entity_file(".entity.ts"));
        assert!(!is_entity_file("identity.ts"));
        assert!(!is_entity_file("user.module.ts"));
    }

    #[test]
    fn test_discover_directory_recursively_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "users/user.entity.ts");
        touch(temp.path(), "users/user.module.ts");
        touch(temp.path(), "assets/asset.entity.ts");
        touch(temp.path(), "assets/asset-group.entity.ts");
        touch(temp.path(), "README.md");

        let found = discover_entities(temp.path()).unwrap();

        assert_eq!(found.root, temp.path());
        let paths: Vec<PathBuf> = found.entities.iter().map(EntityFile::path).collect();
        assert_eq!(
            paths,
            [
                Path::new("assets").join("asset-group.entity.ts"),
                Path::new("assets").join("asset.entity.ts"),
                Path::new("users").join("user.entity.ts"),
            ]
        );
        assert_eq!(found.entities[2].name, "user");
        assert_eq!(found.entities[2].folder, Path::new("users"));
        assert_eq!(found.find("asset").map(EntityFile::path), Some(Path::new("assets").join("asset.entity.ts")));
        assert_eq!(found.find("profile"), None);
    }

    #[test]
    fn test_discover_single_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "users/user.entity.ts");

        let found = discover_entities(&temp.path().join("users/user.entity.ts")).unwrap();

        assert_eq!(found.root, temp.path().join("users"));
        assert_eq!(
            found.entities,
            [EntityFile {
                folder: PathBuf::new(),
                name: "user".to_string(),
            }]
        );
    }

    #[test]
    fn test_discover_missing_path() {
        let temp = TempDir::new().unwrap();

        assert!(discover_entities(&temp.path().join("nope")).is_err());
    }
}
