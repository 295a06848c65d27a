mod check;
mod completions;
mod merge;
mod path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use merge::MergeCommand;
use path::PathCommand;

use crate::telemetry;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for javamerger_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "javamerger")]
#[command(version)]
#[command(about = "Merge single-type Java sources into one generated class or interface")]
pub(crate) struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        telemetry::init(self.verbose);

        match &self.command {
            Commands::Merge(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Path(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the merged sources described in javamerger.toml
    Merge(MergeCommand),

    /// Validate javamerger.toml and its source files without generating
    Check(CheckCommand),

    /// Print the generation folder of each merge unit
    Path(PathCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
