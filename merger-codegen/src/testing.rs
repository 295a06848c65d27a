//! Test utilities for merge runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use crate::LINE_ENDING;

/// A temporary directory holding Java inputs and a merge output root.
///
/// Everything is removed when the tree is dropped.
pub struct SourceTree {
    dir: tempfile::TempDir,
}

impl SourceTree {
    /// Create an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: tempfile::TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Output root for merges. Not created until something writes to it.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("generated")
    }

    /// Write an input file relative to the tree root and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join("src").join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create source dir");
        }
        std::fs::write(&path, content).expect("failed to write source file");
        path
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Join lines the way generated files are written: each one CRLF terminated.
pub fn crlf(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}", line, LINE_ENDING))
        .collect()
}

/// Assert that two strings are equal, with a line diff on failure.
///
/// Line terminators are shown escaped so CRLF/LF mismatches are visible.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.split_inclusive('\n').collect();
        let actual_lines: Vec<&str> = actual.split_inclusive('\n').collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
