//! Check operation - manifest and source validation.

use javamerger_codegen::Merger;
use javamerger_manifest::MergerToml;

use crate::reports::{CheckReport, UnitSummary};

/// Execute the check operation.
///
/// The manifest is already validated when opened; this also verifies that
/// every source file exists and warns about units that would generate an
/// empty type.
pub fn check(merger_toml: &MergerToml) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut units = Vec::new();

    for (unit, request) in merger_toml
        .manifest()
        .units
        .iter()
        .zip(merger_toml.requests())
    {
        for source in &request.source_files {
            if !source.is_file() {
                errors.push(format!(
                    "source file '{}' of {} does not exist",
                    source.display(),
                    unit.class_name
                ));
            }
        }

        if request.source_files.is_empty() {
            warnings.push(format!(
                "{} has no source files and will generate an empty {}",
                unit.class_name, unit.kind
            ));
        }

        units.push(UnitSummary {
            qualified_name: unit.qualified_name(),
            kind: unit.kind,
            source_count: request.source_files.len(),
            generation_folder: Merger::new(request).generation_folder(),
        });
    }

    CheckReport {
        config_path: merger_toml.path().to_path_buf(),
        errors,
        warnings,
        units,
    }
}
