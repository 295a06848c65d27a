use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Failures of a merge run. Nothing is retried; every error aborts the run.
#[derive(Debug, Error, Diagnostic)]
pub enum MergeError {
    /// Reading an input, creating the generation folder or writing the
    /// generated file failed.
    #[error("I/O error on '{}'", .path.display())]
    #[diagnostic(code(javamerger::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request cannot be merged as configured.
    #[error("invalid merge configuration: {message}")]
    #[diagnostic(
        code(javamerger::configuration),
        help("destination package and class name must not be empty")
    )]
    Configuration { message: String },
}

impl MergeError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        MergeError::Configuration {
            message: message.into(),
        }
    }

    /// Whether this is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, MergeError::Io { .. })
    }

    /// Whether this is a configuration failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, MergeError::Configuration { .. })
    }
}
