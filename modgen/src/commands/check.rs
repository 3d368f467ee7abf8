use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modgen_manifest::ModgenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to modgen.toml (defaults to ./modgen.toml)
    #[arg(short, long, default_value = "modgen.toml")]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let modgen_toml = ModgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(modgen_toml.manifest(), modgen_toml.path());

        if self.json {
            let json = serde_json::to_string_pretty(&report.diagnostics)
                .wrap_err("Failed to serialize diagnostics")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
