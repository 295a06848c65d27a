use std::path::{Path, PathBuf};

use javamerger_codegen::MergeRequest;

use super::Manifest;
use crate::Result;

/// Represents a javamerger.toml file with both raw content and parsed manifest.
pub struct MergerToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl MergerToml {
    /// Open and parse a javamerger.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_in_dir(&content, &filename, super::manifest_dir(&path))?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        super::manifest_dir(&self.path)
    }

    /// Merge requests for every unit, with paths resolved against [`Self::base_dir`].
    pub fn requests(&self) -> Vec<MergeRequest> {
        self.manifest.requests(self.base_dir())
    }
}
