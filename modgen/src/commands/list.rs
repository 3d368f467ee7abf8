use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modgen_codegen::{ModuleGenerator, generator::entity_descriptor};
use modgen_manifest::ModgenToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to modgen.toml (defaults to ./modgen.toml)
    #[arg(short, long, default_value = "modgen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let modgen_toml = ModgenToml::open(&self.config).unwrap_or_exit();
        let manifest = modgen_toml.manifest();

        if manifest.entities.is_empty() {
            println!("No entities defined");
            return Ok(());
        }

        let generator = ModuleGenerator::for_manifest(manifest)
            .wrap_err("Failed to load the module template")?;

        println!("Entities:");
        for (name, config) in &manifest.entities {
            let entity = entity_descriptor(manifest, name)
                .wrap_err_with(|| format!("Invalid entity '{}'", name))?;
            let imports = generator
                .imports(&entity, manifest.relations_of(name))
                .wrap_err_with(|| format!("Invalid relations for '{}'", name))?;

            println!("  {} ({})", name, entity.clean_name());
            if !config.has_relations() {
                println!("    (no relations)");
            }
            for import in &imports {
                println!("    + {} from '{}'", import.symbol_name, import.module_path);
            }
        }

        Ok(())
    }
}
