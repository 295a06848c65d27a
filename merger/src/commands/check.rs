use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use javamerger_manifest::{DEFAULT_MANIFEST, MergerToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to javamerger.toml (defaults to ./javamerger.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let merger_toml = MergerToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&merger_toml);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
