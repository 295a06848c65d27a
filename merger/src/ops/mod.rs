//! Core operations.
//!
//! This module contains the business logic for javamerger commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod merge;
pub mod path;

pub use check::check;
use eyre::{Result, eyre};
use javamerger_codegen::MergeRequest;
use javamerger_manifest::MergerToml;
pub use merge::merge;
pub use path::path;

/// Requests of the selected units: all of them, or the one generating `only`.
fn select_requests(merger_toml: &MergerToml, only: Option<&str>) -> Result<Vec<MergeRequest>> {
    let requests = merger_toml.requests();
    let Some(class_name) = only else {
        return Ok(requests);
    };

    let selected: Vec<MergeRequest> = requests
        .into_iter()
        .filter(|request| request.class_name == class_name)
        .collect();

    if selected.is_empty() {
        return Err(eyre!(
            "no [[merge]] unit in {} generates '{}'",
            merger_toml.path().display(),
            class_name
        ));
    }
    Ok(selected)
}
