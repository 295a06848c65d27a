//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod merge;
mod output;
mod path;

pub use check::{CheckReport, UnitSummary};
pub use merge::{MergeReport, MergeResult, MergedUnit, PreviewFile};
pub use output::{Report, TerminalOutput};
pub use path::PathReport;
