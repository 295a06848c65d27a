//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use javamerger_core::{DeclarationKind, validate_java_identifier};
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the source content and filename together with the index of the
/// `[[merge]]` unit being validated, so errors can say which unit failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "javamerger.toml");
/// let unit = ctx.unit(0);
/// unit.validate_class_name("Merged")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across unit contexts)
    source: Arc<SourceContext>,
    /// Index of the current `[[merge]]` table
    unit: Option<usize>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            unit: None,
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Return a context scoped to the unit at `index`.
    pub fn unit(&self, index: usize) -> Self {
        Self {
            source: Arc::clone(&self.source),
            unit: Some(index),
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "class name in merge[1]" or just "class name" outside a unit.
    pub fn context_for(&self, kind: &str) -> String {
        match self.unit {
            Some(index) => format!("{} in merge[{}]", kind, index),
            None => kind.to_string(),
        }
    }

    /// Find the spans of every `key = "value"` assignment in the source.
    pub fn find_value_spans(&self, key: &str, value: &str) -> Vec<SourceSpan> {
        find_value_spans(self.source.src(), key, value)
    }

    fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        self.find_value_spans(key, value).first().copied()
    }

    /// Validate a dotted package name: non-empty, every segment an identifier.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        let span = self.find_value_span("destination_package", package);

        if package.is_empty() {
            return Err(self.source.validation_error(
                format!(
                    "{} must not be empty",
                    self.context_for("destination_package")
                ),
                span,
            ));
        }

        for segment in package.split('.') {
            if let Some(reason) = validate_java_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    segment,
                    self.context_for("package segment"),
                    reason,
                    span,
                ));
            }
        }

        Ok(())
    }

    /// Validate the name of the generated type.
    pub fn validate_class_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_java_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("class name"),
                reason,
                self.find_value_span("class_name", name),
            ));
        }
        Ok(())
    }

    /// Parse the declaration kind, reporting unknown values at their location.
    pub fn parse_kind(&self, kind: &str) -> Result<DeclarationKind> {
        kind.parse().map_err(|_| {
            self.source
                .unknown_kind_error(kind, self.find_value_span("kind", kind))
        })
    }
}

/// Find every `key = "value"` assignment, returning spans over `value`.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        if let Some(start) = value_start(line, key, value) {
            spans.push(SourceSpan::from((offset + start, value.len())));
        }
        offset += line.len();
    }

    spans
}

/// Byte offset of `value` in a `key = "value"` line, if the line is one.
fn value_start(line: &str, key: &str, value: &str) -> Option<usize> {
    let rest = line.trim_start().strip_prefix(key)?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let quoted = rest.trim_start().strip_prefix('"')?;
    let closing = quoted.strip_prefix(value)?;

    if closing.starts_with('"') {
        Some(line.len() - quoted.len())
    } else {
        None
    }
}
