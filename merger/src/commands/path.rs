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
pub struct PathCommand {
    /// Path to javamerger.toml (defaults to ./javamerger.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,

    /// Only print the folder of the unit generating this class name
    #[arg(long, value_name = "CLASS_NAME")]
    pub only: Option<String>,
}

impl PathCommand {
    pub fn run(&self) -> Result<()> {
        let merger_toml = MergerToml::open(&self.config).unwrap_or_exit();

        let report = ops::path(&merger_toml, self.only.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
