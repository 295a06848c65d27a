//! Path command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Generation folders, one per line, for build tools to add as source roots.
#[derive(Debug)]
pub struct PathReport {
    pub folders: Vec<PathBuf>,
}

impl Report for PathReport {
    fn render(&self, out: &mut dyn Output) {
        for folder in &self.folders {
            out.preformatted(&folder.display().to_string());
        }
    }
}
