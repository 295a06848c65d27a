//! Line-based extraction of imports and type bodies.
//!
//! This is not a Java parser. A line is an import if it starts with the
//! literal `import`, and a type body is everything between a line starting
//! with `public class` / `public interface` and the next line whose first
//! column is `}`. Leading whitespace is significant in both checks.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{MergeError, Result};

const IMPORT_PREFIX: &str = "import";
const DECLARATION_PREFIXES: [&str; 2] = ["public interface", "public class"];
const BODY_END_PREFIX: char = '}';

/// Imports and body lines of a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Path the lines were read from.
    pub path: PathBuf,
    /// Import lines in file order.
    pub imports: Vec<String>,
    /// Lines strictly between the type declaration and its closing brace.
    pub body: Vec<String>,
}

/// Read the import lines of a Java file, in file order.
pub fn extract_imports(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = read_source(path)?;
    Ok(import_lines_of(&text))
}

/// Read the type-body lines of a Java file, in file order.
pub fn extract_body(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = read_source(path)?;
    Ok(body_lines_of(&text))
}

/// Read a Java file once and extract both its imports and its body.
pub fn extract_file(path: impl AsRef<Path>) -> Result<ExtractedFile> {
    let path = path.as_ref();
    let text = read_source(path)?;

    let mut imports = Vec::new();
    let mut body = Vec::new();
    let mut scanner = BodyScanner::new();
    for line in split_lines(&text) {
        if is_import_line(line) {
            imports.push(line.to_string());
        }
        if let Some(line) = scanner.feed(line) {
            body.push(line.to_string());
        }
    }

    debug!(
        path = %path.display(),
        imports = imports.len(),
        body_lines = body.len(),
        "extracted source file"
    );

    Ok(ExtractedFile {
        path: path.to_path_buf(),
        imports,
        body,
    })
}

/// Import lines of in-memory source text.
pub fn import_lines_of(text: &str) -> Vec<String> {
    split_lines(text)
        .filter(|line| is_import_line(line))
        .map(str::to_string)
        .collect()
}

/// Type-body lines of in-memory source text.
pub fn body_lines_of(text: &str) -> Vec<String> {
    let mut scanner = BodyScanner::new();
    split_lines(text)
        .filter_map(|line| scanner.feed(line))
        .map(str::to_string)
        .collect()
}

/// Whether a line is an import statement.
pub fn is_import_line(line: &str) -> bool {
    line.starts_with(IMPORT_PREFIX)
}

/// Whether a line opens a top-level type declaration.
pub fn is_type_declaration(line: &str) -> bool {
    DECLARATION_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Read a source file as text.
///
/// Bytes that are not valid UTF-8 (e.g. Latin-1 comments in legacy sources)
/// become U+FFFD instead of failing the merge.
fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| MergeError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Seeking,
    Collecting,
}

/// Two-state scanner that picks type-body lines out of a line stream.
///
/// Scanning continues after a body is closed, so a second declaration later
/// in the same file is collected too.
#[derive(Debug, Default)]
pub struct BodyScanner {
    state: ScanState,
}

impl BodyScanner {
    /// Create a scanner in the seeking state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line, returning it if it belongs to a type body.
    ///
    /// Boundary lines (declaration and closing brace) are consumed.
    pub fn feed<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        match self.state {
            ScanState::Seeking => {
                if is_type_declaration(line) {
                    self.state = ScanState::Collecting;
                }
                None
            }
            ScanState::Collecting => {
                if line.starts_with(BODY_END_PREFIX) {
                    self.state = ScanState::Seeking;
                    None
                } else {
                    Some(line)
                }
            }
        }
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`, stripping the terminator.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + terminator..];
                Some(line)
            }
        }
    }
}
