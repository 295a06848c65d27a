use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Write `content` to `path`, creating parent directories as needed.
///
/// The content lands in a temporary file next to the target which is
/// renamed over it once the whole content is on disk.
fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }

    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".javamerger-")
        .tempfile_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;

    // Temp files are created owner-only; generated sources should not be.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// A generated file, replaced atomically when written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, replacing any previous version in one rename.
    pub fn write(&self) -> io::Result<()> {
        write_file(&self.path, &self.content)
    }
}
