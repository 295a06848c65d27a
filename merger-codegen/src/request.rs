use std::path::PathBuf;

use javamerger_core::DeclarationKind;

use crate::{MergeError, Result};

/// Fully resolved configuration of one merge run.
///
/// Optional inputs are plain empty vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Root under which the package folder is created.
    pub output_dir: PathBuf,
    /// Input files, merged in this order.
    pub source_files: Vec<PathBuf>,
    /// Dotted package of the generated type.
    pub destination_package: String,
    /// Whether a class or an interface is generated.
    pub kind: DeclarationKind,
    /// Simple name of the generated type.
    pub class_name: String,
    /// Lines written verbatim above the declaration.
    pub class_annotations: Vec<String>,
    /// Import lines added to those found in the inputs.
    pub additional_imports: Vec<String>,
}

impl MergeRequest {
    /// Create a request with no sources, annotations or additional imports.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        destination_package: impl Into<String>,
        kind: DeclarationKind,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            source_files: Vec::new(),
            destination_package: destination_package.into(),
            kind,
            class_name: class_name.into(),
            class_annotations: Vec::new(),
            additional_imports: Vec::new(),
        }
    }

    /// Check the fields a merge cannot run without.
    pub fn validate(&self) -> Result<()> {
        if self.destination_package.trim().is_empty() {
            return Err(MergeError::configuration(
                "destination package must not be empty",
            ));
        }
        if self.class_name.trim().is_empty() {
            return Err(MergeError::configuration("class name must not be empty"));
        }
        Ok(())
    }
}
