//! Generate operation - module generation for discovered entities.

use std::path::Path;

use eyre::{Context, Result};
use modgen_codegen::{
    ModuleGenerator,
    discover::discover_entities,
    files::ModuleTs,
    generator::entity_descriptor,
    lints::{Linter, Severity},
};
use modgen_core::{GeneratedFile, WriteResult};
use modgen_manifest::Manifest;
use tracing::debug;

use crate::reports::{GenerateReport, GeneratedModule, ModuleOutcome};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Entity file or directory to scan.
    pub path: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to replace existing module files.
    pub overwrite: bool,
}

/// Execute the generate operation.
///
/// Every entity is generated before anything is written, so a bad relation
/// leaves the tree untouched. Imports are same-folder paths; a related entity
/// discovered in another folder is reported as a warning.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut warnings: Vec<String> = Linter::new()
        .run(manifest)
        .into_iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message)
        .collect();

    let discovered = discover_entities(opts.path)?;
    if discovered.is_empty() {
        debug!(path = %opts.path.display(), "no entity files found");
    }
    let generator =
        ModuleGenerator::for_manifest(manifest).wrap_err("Failed to load the module template")?;

    let mut files = Vec::with_capacity(discovered.len());
    for entity_file in &discovered.entities {
        let entity = entity_descriptor(manifest, &entity_file.name)
            .wrap_err_with(|| format!("Invalid entity '{}'", entity_file.name))?;
        let relations = manifest.relations_of(&entity_file.name);
        let source = generator
            .generate(&entity, relations)
            .wrap_err("Failed to generate module")?;

        for import in generator.imports(&entity, relations)? {
            let stem = generator.entity_stem(&import.symbol_name);
            let Some(target) = discovered.find(&stem) else {
                continue;
            };
            if target.folder != entity_file.folder {
                warnings.push(format!(
                    "'{}' imports {} from '{}', but its entity file is {}",
                    entity_file.name,
                    import.symbol_name,
                    import.module_path,
                    target.path().display()
                ));
            }
        }

        files.push(ModuleTs::new(entity_file, source).overwrite(opts.overwrite));
    }

    let mut modules = Vec::with_capacity(files.len());
    for (entity_file, file) in discovered.entities.iter().zip(&files) {
        let outcome = if opts.dry_run {
            ModuleOutcome::Preview(file.render())
        } else {
            match file.write(&discovered.root)? {
                WriteResult::Written => ModuleOutcome::Written,
                WriteResult::Skipped => ModuleOutcome::Skipped,
            }
        };
        debug!(entity = %entity_file.name, path = %file.relative_path().display(), "module done");

        modules.push(GeneratedModule {
            name: entity_file.name.clone(),
            folder: discovered.root.join(&entity_file.folder),
            path: file.relative_path(),
            outcome,
        });
    }

    Ok(GenerateReport { warnings, modules })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("users")).unwrap();
        fs::write(dir.path().join("users/user.entity.ts"), "").unwrap();
        fs::write(dir.path().join("users/profile.entity.ts"), "").unwrap();
        dir
    }

    fn manifest() -> Manifest {
        r#"
            [project]
            name = "adam-rms"

            [entities.user]
            relations = ["Profile", "Profile", "User"]
        "#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_generate_writes_modules() {
        let dir = project();
        let opts = GenerateOptions {
            path: dir.path(),
            dry_run: false,
            overwrite: false,
        };

        let report = generate(&manifest(), opts).unwrap();

        assert_eq!(report.modules.len(), 2);
        assert!(
            report
                .modules
                .iter()
                .all(|m| matches!(m.outcome, ModuleOutcome::Written))
        );
        let user = fs::read_to_string(dir.path().join("users/user.module.ts")).unwrap();
        assert!(user.contains("import { Profile } from './profile.entity';"));
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_generate_skips_existing_modules() {
        let dir = project();
        fs::write(dir.path().join("users/profile.module.ts"), "// kept\n").unwrap();
        let opts = GenerateOptions {
            path: dir.path(),
            dry_run: false,
            overwrite: false,
        };

        let report = generate(&manifest(), opts).unwrap();

        let profile = report.modules.iter().find(|m| m.name == "profile").unwrap();
        assert!(matches!(profile.outcome, ModuleOutcome::Skipped));
        assert_eq!(
            fs::read_to_string(dir.path().join("users/profile.module.ts")).unwrap(),
            "// kept\n"
        );
    }

    #[test]
    fn test_related_entity_in_other_folder_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("users")).unwrap();
        fs::write(dir.path().join("users/user.entity.ts"), "").unwrap();
        fs::write(dir.path().join("profile.entity.ts"), "").unwrap();
        let manifest: Manifest = r#"
            [project]
            name = "adam-rms"

            [entities.user]
            relations = ["Profile"]

            [entities.profile]
        "#
        .parse()
        .unwrap();
        let opts = GenerateOptions {
            path: dir.path(),
            dry_run: true,
            overwrite: false,
        };

        let report = generate(&manifest, opts).unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("'user' imports Profile from './profile.entity'"));
        assert!(report.warnings[0].ends_with("profile.entity.ts"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project();
        let opts = GenerateOptions {
            path: dir.path(),
            dry_run: true,
            overwrite: false,
        };

        let report = generate(&manifest(), opts).unwrap();

        assert!(
            report
                .modules
                .iter()
                .all(|m| matches!(m.outcome, ModuleOutcome::Preview(_)))
        );
        assert!(!dir.path().join("users/user.module.ts").exists());
    }

    #[test]
    fn test_invalid_relation_writes_nothing() {
        let dir = project();
        let manifest = Manifest {
            entities: [(
                "profile".to_string(),
                modgen_manifest::EntityConfig {
                    clean_name: None,
                    relations: vec!["Module".to_string()],
                },
            )]
            .into_iter()
            .collect(),
            ..Manifest::default()
        };
        let opts = GenerateOptions {
            path: dir.path(),
            dry_run: false,
            overwrite: false,
        };

        assert!(generate(&manifest, opts).is_err());
        assert!(!dir.path().join("users/user.module.ts").exists());
    }
}
