//! Path operation - generation folders for build tool integration.

use std::path::PathBuf;

use eyre::Result;
use javamerger_codegen::Merger;
use javamerger_manifest::MergerToml;

use crate::reports::PathReport;

/// Execute the path operation.
///
/// Computes the generation folder of each selected unit without touching
/// the filesystem. Units sharing a package share a folder, listed once.
pub fn path(merger_toml: &MergerToml, only: Option<&str>) -> Result<PathReport> {
    let mut folders: Vec<PathBuf> = Vec::new();

    for request in super::select_requests(merger_toml, only)? {
        let folder = Merger::new(request).generation_folder();
        if !folders.contains(&folder) {
            folders.push(folder);
        }
    }

    Ok(PathReport { folders })
}
