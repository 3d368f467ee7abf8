use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modgen_manifest::{Manifest, ModgenToml};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Entity file or directory to scan (defaults to project.source)
    pub path: Option<PathBuf>,

    /// Path to modgen.toml (defaults to ./modgen.toml)
    #[arg(short, long, default_value = "modgen.toml")]
    pub config: PathBuf,

    /// Preview generated modules without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite existing module files
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        // Without a manifest every entity is generated with no relations
        let (manifest, source) = if self.config.exists() {
            let modgen_toml = ModgenToml::open(&self.config).unwrap_or_exit();
            let source = modgen_toml
                .root()
                .join(&modgen_toml.manifest().project.source);
            (modgen_toml.manifest().clone(), source)
        } else {
            debug!(config = %self.config.display(), "no manifest, generating without relations");
            (Manifest::default(), PathBuf::from("."))
        };

        let path = self.path.clone().unwrap_or(source);
        let opts = GenerateOptions {
            path: &path,
            dry_run: self.dry_run,
            overwrite: self.force || manifest.project.overwrite,
        };

        let report = ops::generate(&manifest, opts)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
