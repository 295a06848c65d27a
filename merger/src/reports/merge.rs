//! Merge command report data structures.

use std::path::PathBuf;

use javamerger_core::DeclarationKind;

use super::output::{Output, Report};

/// Report data from a merge run.
#[derive(Debug)]
pub struct MergeReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Files written or previewed.
    pub result: MergeResult,
}

/// Result of a merge run.
#[derive(Debug)]
pub enum MergeResult {
    /// Files were written to disk.
    Written(Vec<MergedUnit>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A unit whose file was written.
#[derive(Debug)]
pub struct MergedUnit {
    /// Name of the generated type.
    pub class_name: String,
    /// Class or interface.
    pub kind: DeclarationKind,
    /// Number of merged source files.
    pub source_count: usize,
    /// The generated file.
    pub file_path: PathBuf,
    /// Distinct imports written.
    pub import_count: usize,
    /// Body lines copied from the sources.
    pub body_line_count: usize,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Where the file would be written.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for MergeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            MergeResult::Written(units) => self.render_written(out, units),
            MergeResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl MergeReport {
    fn render_written(&self, out: &mut dyn Output, units: &[MergedUnit]) {
        out.section(&format!("Merged ({})", units.len()));
        for unit in units {
            out.added_item(&unit.file_path.display().to_string());
            out.key_value_indented(
                &unit.kind.to_string(),
                &format!(
                    "{} from {} file{}",
                    unit.class_name,
                    unit.source_count,
                    plural(unit.source_count)
                ),
            );
            out.key_value_indented("imports", &unit.import_count.to_string());
            out.key_value_indented("body lines", &unit.body_line_count.to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(file.content.trim_end_matches(['\r', '\n']));
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            files.len(),
            plural(files.len())
        ));
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
