//! Line-oriented builder for generated sources.

/// Terminator written after every generated line, whatever the host platform.
pub const LINE_ENDING: &str = "\r\n";

/// Fluent API for building a source file line by line.
///
/// Lines are written verbatim; every line, including the last, is
/// terminated with [`LINE_ENDING`].
///
/// # Example
///
/// ```
/// use javamerger_codegen::SourceBuilder;
///
/// let code = SourceBuilder::new()
///     .line("package p;")
///     .blank()
///     .line("public class A {")
///     .line("}")
///     .build();
///
/// assert_eq!(code, "package p;\r\n\r\npublic class A {\r\n}\r\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    buffer: String,
}

impl SourceBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push_str(LINE_ENDING);
        self
    }

    /// Add a blank line.
    pub fn blank(self) -> Self {
        self.line("")
    }

    /// Add every line of an iterator, in order.
    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(self, |builder, line| builder.line(line.as_ref()))
    }

    /// Consume the builder and return the content.
    pub fn build(self) -> String {
        self.buffer
    }
}
