//! Assembly of the merged type.

use std::{
    fs,
    path::{Path, PathBuf},
};

use javamerger_core::{File, JAVA_EXTENSION, package_to_path};
use tracing::info;

use crate::{
    ExtractedFile, ImportSet, MergeError, MergeRequest, Result, SourceBuilder, extract_file,
};

/// Summary of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Folder holding the generated file, to be registered as a source root.
    pub generation_folder: PathBuf,
    /// The generated file.
    pub file_path: PathBuf,
    /// Number of distinct import lines written.
    pub import_count: usize,
    /// Number of body lines copied from the inputs.
    pub body_line_count: usize,
}

/// A rendered file that was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePreview {
    /// Where the file would be written.
    pub file_path: PathBuf,
    /// Full content, CRLF terminated.
    pub content: String,
}

/// Rendered content plus the counts reported after a merge.
struct Assembled {
    content: String,
    import_count: usize,
    body_line_count: usize,
}

/// Merges the sources of a [`MergeRequest`] into one generated type.
///
/// # Example
///
/// ```no_run
/// use javamerger_codegen::{DeclarationKind, MergeRequest, Merger};
///
/// let mut request = MergeRequest::new("target/generated", "p", DeclarationKind::Class, "Merged");
/// request.source_files = vec!["src/A.java".into(), "src/B.java".into()];
///
/// let merger = Merger::new(request);
/// let outcome = merger.merge()?;
/// assert_eq!(outcome.file_path, merger.generated_file_path());
/// # Ok::<(), javamerger_codegen::MergeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Merger {
    request: MergeRequest,
}

impl Merger {
    pub fn new(request: MergeRequest) -> Self {
        Self { request }
    }

    /// The request this merger runs.
    pub fn request(&self) -> &MergeRequest {
        &self.request
    }

    /// Folder the generated file is written to: the output directory plus
    /// the destination package as a path.
    ///
    /// Pure path computation; nothing is touched on disk.
    pub fn generation_folder(&self) -> PathBuf {
        self.request
            .output_dir
            .join(package_to_path(&self.request.destination_package))
    }

    /// Path of the generated file.
    pub fn generated_file_path(&self) -> PathBuf {
        self.generation_folder()
            .join(format!("{}.{}", self.request.class_name, JAVA_EXTENSION))
    }

    /// Render the merged file without writing it.
    pub fn render(&self) -> Result<String> {
        self.request.validate()?;
        Ok(self.assemble()?.content)
    }

    /// Render the merged file along with the path it would be written to.
    pub fn preview(&self) -> Result<MergePreview> {
        Ok(MergePreview {
            file_path: self.generated_file_path(),
            content: self.render()?,
        })
    }

    /// Run the merge: create the generation folder and (over)write the file.
    ///
    /// The file is replaced atomically, so a failed run leaves any previous
    /// output intact.
    pub fn merge(&self) -> Result<MergeOutcome> {
        self.request.validate()?;
        self.log_request();

        let generation_folder = self.generation_folder();
        create_folder(&generation_folder)?;

        let assembled = self.assemble()?;
        let file_path = self.generated_file_path();
        File::new(&file_path, assembled.content)
            .write()
            .map_err(|e| MergeError::io(&file_path, e))?;

        info!(path = %file_path.display(), "generated merged source");

        Ok(MergeOutcome {
            generation_folder,
            file_path,
            import_count: assembled.import_count,
            body_line_count: assembled.body_line_count,
        })
    }

    fn log_request(&self) {
        info!("Merge of following files:");
        for source in &self.request.source_files {
            info!(" - {}", source.display());
        }
        info!("Merge destination: {}", self.request.destination_package);
        info!("Class name: {}", self.request.class_name);
        info!("Type: {}", self.request.kind);
    }

    fn assemble(&self) -> Result<Assembled> {
        let request = &self.request;
        let extracted = request
            .source_files
            .iter()
            .map(extract_file)
            .collect::<Result<Vec<ExtractedFile>>>()?;

        let mut imports = ImportSet::new();
        for file in &extracted {
            imports.extend(file.imports.iter().map(String::as_str));
        }
        imports.extend(request.additional_imports.iter().map(String::as_str));

        let body = extracted.iter().flat_map(|file| file.body.iter());
        let body_line_count = extracted.iter().map(|file| file.body.len()).sum();

        let content = SourceBuilder::new()
            .line(&format!("package {};", request.destination_package))
            .lines(imports.iter())
            .blank()
            .lines(&request.class_annotations)
            .line(&request.kind.declaration(&request.class_name))
            .lines(body)
            .line("}")
            .build();

        Ok(Assembled {
            content,
            import_count: imports.len(),
            body_line_count,
        })
    }
}

fn create_folder(folder: &Path) -> Result<()> {
    fs::create_dir_all(folder).map_err(|e| MergeError::io(folder, e))
}

#[cfg(test)]
mod tests {
    use javamerger_core::DeclarationKind;

    use super::*;
    use crate::testing::{SourceTree, assert_content_eq, crlf};

    fn request(tree: &SourceTree, kind: DeclarationKind, name: &str) -> MergeRequest {
        MergeRequest::new(tree.output_dir(), "p", kind, name)
    }

    #[test]
    fn test_generation_folder_uses_package_path() {
        let mut request = MergeRequest::new("out", "ch.cern.eam", DeclarationKind::Class, "X");
        let merger = Merger::new(request.clone());
        assert_eq!(
            merger.generation_folder(),
            Path::new("out").join("ch").join("cern").join("eam")
        );
        assert_eq!(
            merger.generated_file_path(),
            Path::new("out").join("ch/cern/eam/X.java")
        );

        request.destination_package = "p".to_string();
        assert_eq!(
            Merger::new(request).generation_folder(),
            Path::new("out").join("p")
        );
    }

    #[test]
    fn test_merge_two_classes() {
        let tree = SourceTree::new();
        let a = tree.source(
            "A.java",
            "import java.util.List;\npublic class A {\n  void m() {}\n}\n",
        );
        let b = tree.source(
            "B.java",
            "import java.util.List;\nimport java.util.Map;\npublic class B {\n  void n() {}\n}\n",
        );

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a, b];
        let merger = Merger::new(request);
        let outcome = merger.merge().unwrap();

        let content = fs::read_to_string(&outcome.file_path).unwrap();
        assert_content_eq(
            &crlf(&[
                "package p;",
                "import java.util.List;",
                "import java.util.Map;",
                "",
                "public class Merged {",
                "  void m() {}",
                "  void n() {}",
                "}",
            ]),
            &content,
        );
        assert_eq!(outcome.import_count, 2);
        assert_eq!(outcome.body_line_count, 2);
        assert_eq!(outcome.generation_folder, tree.output_dir().join("p"));
    }

    #[test]
    fn test_merge_without_sources() {
        let tree = SourceTree::new();
        let mut request = request(&tree, DeclarationKind::Interface, "Empty");
        request.additional_imports = vec!["import x.Y;".to_string()];
        request.class_annotations = vec!["@Deprecated".to_string()];

        let content = Merger::new(request).render().unwrap();
        assert_content_eq(
            &crlf(&[
                "package p;",
                "import x.Y;",
                "",
                "@Deprecated",
                "public interface Empty {",
                "}",
            ]),
            &content,
        );
    }

    #[test]
    fn test_additional_imports_are_merged_and_sorted() {
        let tree = SourceTree::new();
        let a = tree.source(
            "A.java",
            "import b.B;\nimport a.A;\nimport b.B;\npublic class A {\n}\n",
        );

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a];
        request.additional_imports = vec!["import a.A;".to_string(), "import 0.Z;".to_string()];

        let content = Merger::new(request).render().unwrap();
        assert!(content.starts_with(&crlf(&[
            "package p;",
            "import 0.Z;",
            "import a.A;",
            "import b.B;",
            "",
        ])));
    }

    #[test]
    fn test_body_lines_keep_file_order_without_dedup() {
        let tree = SourceTree::new();
        let a = tree.source("A.java", "public class A {\n  int x;\n\n  int x;\n}\n");
        let b = tree.source("B.java", "public interface B {\n  int x;\n}\n");

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![b, a];

        let content = Merger::new(request).render().unwrap();
        assert!(content.ends_with(&crlf(&[
            "public class Merged {",
            "  int x;",
            "  int x;",
            "",
            "  int x;",
            "}",
        ])));
    }

    #[test]
    fn test_malformed_source_collects_every_block() {
        let tree = SourceTree::new();
        let a = tree.source(
            "A.java",
            "public class A {\n  int a;\n}\n\npublic class Extra {\n  int extra;\n}\n",
        );

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a];

        let content = Merger::new(request).render().unwrap();
        assert!(content.contains("  int a;\r\n  int extra;\r\n}\r\n"));
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let tree = SourceTree::new();
        let a = tree.source("A.java", "public class A {\n  int a;\n}\n");

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a];
        let merger = Merger::new(request);

        let first = merger.merge().unwrap();
        let first_content = fs::read_to_string(&first.file_path).unwrap();
        let second = merger.merge().unwrap();
        let second_content = fs::read_to_string(&second.file_path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_content, second_content);
    }

    #[test]
    fn test_merge_overwrites_previous_output() {
        let tree = SourceTree::new();
        let request = request(&tree, DeclarationKind::Class, "Merged");
        let merger = Merger::new(request);

        let path = merger.generated_file_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale content that is much longer than the output").unwrap();

        merger.merge().unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            crlf(&["package p;", "", "public class Merged {", "}"])
        );
    }

    #[test]
    fn test_merge_latin1_source() {
        let tree = SourceTree::new();
        let a = tree.path().join("A.java");
        fs::write(&a, b"public class A {\n  // \xE9t\xE9\n  void m() {}\n}\n").unwrap();

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a];
        let outcome = Merger::new(request).merge().unwrap();

        let content = fs::read_to_string(&outcome.file_path).unwrap();
        assert_content_eq(
            &crlf(&[
                "package p;",
                "",
                "public class Merged {",
                "  // \u{FFFD}t\u{FFFD}",
                "  void m() {}",
                "}",
            ]),
            &content,
        );
    }

    #[test]
    fn test_missing_source_fails_with_io_error() {
        let tree = SourceTree::new();
        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![tree.path().join("Missing.java")];
        let merger = Merger::new(request);

        let err = merger.merge().unwrap_err();
        assert!(err.is_io());
        assert!(!merger.generated_file_path().exists());
    }

    #[test]
    fn test_failed_merge_keeps_previous_output() {
        let tree = SourceTree::new();
        let a = tree.source("A.java", "public class A {\n  int a;\n}\n");

        let mut request = request(&tree, DeclarationKind::Class, "Merged");
        request.source_files = vec![a.clone()];
        let merger = Merger::new(request.clone());
        let outcome = merger.merge().unwrap();
        let before = fs::read_to_string(&outcome.file_path).unwrap();

        fs::remove_file(&a).unwrap();
        assert!(Merger::new(request).merge().unwrap_err().is_io());
        assert_eq!(fs::read_to_string(&outcome.file_path).unwrap(), before);
    }

    #[test]
    fn test_invalid_request_writes_nothing() {
        let tree = SourceTree::new();
        let request = MergeRequest::new(tree.output_dir(), "", DeclarationKind::Class, "Merged");

        let err = Merger::new(request).merge().unwrap_err();
        assert!(err.is_configuration());
        assert!(!tree.output_dir().exists());
    }

    #[test]
    fn test_preview_does_not_write() {
        let tree = SourceTree::new();
        let merger = Merger::new(request(&tree, DeclarationKind::Interface, "Api"));

        let preview = merger.preview().unwrap();
        assert_eq!(preview.file_path, merger.generated_file_path());
        assert!(preview.content.contains("public interface Api {\r\n"));
        assert!(!tree.output_dir().exists());
    }
}
