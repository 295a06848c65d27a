//! Manifest types and parsing for javamerger.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use file::MergerToml;
use javamerger_codegen::MergeRequest;
use javamerger_core::DeclarationKind;
pub use validate::ParseContext;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "javamerger.toml";

/// Output root used when a unit does not set `output_dir`.
pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-sources/java-merger";

/// Directory of a manifest file, `.` for a bare file name.
pub(crate) fn manifest_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Root manifest for javamerger.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Merge units in file order
    pub units: Vec<MergeUnit>,
}

/// One `[[merge]]` table: a single generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeUnit {
    /// Output root, relative to the manifest directory unless absolute
    pub output_dir: PathBuf,
    /// Input files, relative to the manifest directory unless absolute
    pub source_files: Vec<PathBuf>,
    /// Dotted package of the generated type
    pub destination_package: String,
    /// Class or interface
    pub kind: DeclarationKind,
    /// Simple name of the generated type
    pub class_name: String,
    /// Annotation lines written above the declaration
    pub class_annotations: Vec<String>,
    /// Extra import lines
    pub additional_imports: Vec<String>,
}

impl Manifest {
    /// Find a unit by the name of the type it generates.
    pub fn unit(&self, class_name: &str) -> Option<&MergeUnit> {
        self.units.iter().find(|unit| unit.class_name == class_name)
    }

    /// Build merge requests for every unit, resolving paths against `base_dir`.
    pub fn requests(&self, base_dir: &Path) -> Vec<MergeRequest> {
        self.units
            .iter()
            .map(|unit| unit.to_request(base_dir))
            .collect()
    }
}

impl MergeUnit {
    /// Build the merge request for this unit, resolving paths against `base_dir`.
    pub fn to_request(&self, base_dir: &Path) -> MergeRequest {
        MergeRequest {
            output_dir: base_dir.join(&self.output_dir),
            source_files: self
                .source_files
                .iter()
                .map(|source| base_dir.join(source))
                .collect(),
            destination_package: self.destination_package.clone(),
            kind: self.kind,
            class_name: self.class_name.clone(),
            class_annotations: self.class_annotations.clone(),
            additional_imports: self.additional_imports.clone(),
        }
    }

    /// Qualified name of the generated type (`package.ClassName`).
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.destination_package, self.class_name)
    }
}
