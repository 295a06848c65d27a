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
pub struct MergeCommand {
    /// Path to javamerger.toml (defaults to ./javamerger.toml)
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,

    /// Only run the unit generating this class name
    #[arg(long, value_name = "CLASS_NAME")]
    pub only: Option<String>,

    /// Print the merged sources instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl MergeCommand {
    /// Run the merge command
    pub fn run(&self) -> Result<()> {
        let merger_toml = MergerToml::open(&self.config).unwrap_or_exit();

        let report = ops::merge(
            &merger_toml,
            ops::merge::MergeOptions {
                only: self.only.as_deref(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
