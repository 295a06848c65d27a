//! Import collection for merged files.

use std::collections::BTreeSet;

/// Sorted, de-duplicated set of import lines.
///
/// Lines are compared byte-wise, so the order does not depend on locale and
/// two imports are the same only if the lines are identical.
///
/// # Example
///
/// ```
/// use javamerger_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.insert("import java.util.Map;");
/// imports.insert("import java.util.List;");
/// imports.insert("import java.util.Map;");
///
/// let lines: Vec<&str> = imports.iter().collect();
/// assert_eq!(lines, ["import java.util.List;", "import java.util.Map;"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    lines: BTreeSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import line. Returns `false` if it was already present.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        self.lines.insert(line.into())
    }

    /// Check if a line is already imported.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Iterate over the import lines in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of distinct import lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
