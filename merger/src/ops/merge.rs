//! Merge operation - generate the merged sources.

use eyre::{Context, Result};
use javamerger_codegen::Merger;
use javamerger_manifest::MergerToml;
use tracing::debug;

use crate::reports::{MergeReport, MergeResult, MergedUnit, PreviewFile};

/// Options for the merge operation.
pub struct MergeOptions<'a> {
    /// Only run the unit generating this class.
    pub only: Option<&'a str>,
    /// Whether to render without writing files.
    pub dry_run: bool,
}

/// Execute the merge operation.
///
/// Runs every selected unit in manifest order. The first failure aborts the
/// remaining units.
pub fn merge(merger_toml: &MergerToml, opts: MergeOptions) -> Result<MergeReport> {
    let requests = super::select_requests(merger_toml, opts.only)?;
    let mergers: Vec<Merger> = requests.into_iter().map(Merger::new).collect();
    debug!(units = mergers.len(), dry_run = opts.dry_run, "running merge units");

    let result = if opts.dry_run {
        let files = mergers
            .iter()
            .map(|merger| {
                let preview = merger.preview().wrap_err_with(|| {
                    format!("Failed to render {}", merger.request().class_name)
                })?;
                Ok(PreviewFile {
                    path: preview.file_path,
                    content: preview.content,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        MergeResult::Preview(files)
    } else {
        let units = mergers
            .iter()
            .map(|merger| {
                let request = merger.request();
                let outcome = merger.merge().wrap_err_with(|| {
                    format!("Error while merging Java files into {}", request.class_name)
                })?;
                Ok(MergedUnit {
                    class_name: request.class_name.clone(),
                    kind: request.kind,
                    source_count: request.source_files.len(),
                    file_path: outcome.file_path,
                    import_count: outcome.import_count,
                    body_line_count: outcome.body_line_count,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        MergeResult::Written(units)
    };

    Ok(MergeReport {
        config_path: merger_toml.path().to_path_buf(),
        result,
    })
}
