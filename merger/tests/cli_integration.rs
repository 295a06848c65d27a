//! Integration tests for the merge, check and path commands.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use javamerger_codegen::testing::{SourceTree, crlf};

fn javamerger_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_javamerger"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(javamerger_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("JAVAMERGER_LOG")
        .output()
        .expect("failed to run javamerger")
}

fn write_manifest(tree: &SourceTree, content: &str) {
    fs::write(tree.path().join("javamerger.toml"), content).expect("failed to write manifest");
}

/// Two class sources and a manifest merging them into `p.Merged`.
fn scenario(tree: &SourceTree) {
    tree.source(
        "A.java",
        "import java.util.List;\npublic class A {\n  void m() {}\n}\n",
    );
    tree.source(
        "B.java",
        "import java.util.List;\nimport java.util.Map;\npublic class B {\n  void n() {}\n}\n",
    );
    write_manifest(
        tree,
        r#"
        [[merge]]
        output_dir = "out"
        source_files = ["src/A.java", "src/B.java"]
        destination_package = "p"
        class_name = "Merged"
        "#,
    );
}

#[test]
fn test_merge_writes_generated_file() {
    let tree = SourceTree::new();
    scenario(&tree);

    let output = run(tree.path(), &["merge"]);
    assert!(
        output.status.success(),
        "merge failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let generated = fs::read_to_string(tree.path().join("out/p/Merged.java")).unwrap();
    assert_eq!(
        generated,
        crlf(&[
            "package p;",
            "import java.util.List;",
            "import java.util.Map;",
            "",
            "public class Merged {",
            "  void m() {}",
            "  void n() {}",
            "}",
        ])
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Merged (1):"));
    assert!(stdout.contains("imports: 2"));
}

#[test]
fn test_merge_verbose_logs_request() {
    let tree = SourceTree::new();
    scenario(&tree);

    let output = run(tree.path(), &["-v", "merge"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Merge of following files:"));
    assert!(stderr.contains("Merge destination: p"));
    assert!(stderr.contains("Class name: Merged"));
    assert!(stderr.contains("Type: class"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let tree = SourceTree::new();
    scenario(&tree);

    let output = run(tree.path(), &["merge", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("public class Merged {"));
    assert!(stdout.contains("1 file would be generated"));
    assert!(!tree.path().join("out").exists());
}

#[test]
fn test_unknown_kind_fails_without_output() {
    let tree = SourceTree::new();
    write_manifest(
        &tree,
        r#"
        [[merge]]
        output_dir = "out"
        destination_package = "p"
        kind = "enum"
        class_name = "Merged"
        "#,
    );

    let output = run(tree.path(), &["merge"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown declaration kind 'enum'"));
    assert!(!tree.path().join("out").exists());
}

#[test]
fn test_missing_source_fails() {
    let tree = SourceTree::new();
    write_manifest(
        &tree,
        r#"
        [[merge]]
        output_dir = "out"
        source_files = ["src/Missing.java"]
        destination_package = "p"
        class_name = "Merged"
        "#,
    );

    let output = run(tree.path(), &["merge"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error while merging Java files into Merged"));
    assert!(!tree.path().join("out/p/Merged.java").exists());
}

#[test]
fn test_check_reports_missing_sources() {
    let tree = SourceTree::new();
    write_manifest(
        &tree,
        r#"
        [[merge]]
        source_files = ["src/Missing.java"]
        destination_package = "p"
        class_name = "Merged"
        "#,
    );

    let output = run(tree.path(), &["check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_check_valid_manifest() {
    let tree = SourceTree::new();
    scenario(&tree);

    let output = run(tree.path(), &["check"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is valid"));
    assert!(stdout.contains("class p.Merged (2 sources)"));
}

#[test]
fn test_path_prints_generation_folder() {
    let tree = SourceTree::new();
    scenario(&tree);

    let config = tree.path().join("javamerger.toml");
    let output = run(tree.path(), &["path", "-c", config.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed = PathBuf::from(stdout.trim());
    assert_eq!(printed, tree.path().join("out").join("p"));

    // A relative config resolves against the working directory
    let output = run(tree.path(), &["path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(PathBuf::from(stdout.trim()), Path::new(".").join("out").join("p"));
    // Path computation does not create anything
    assert!(!tree.path().join("out").exists());
}

#[test]
fn test_only_selects_a_unit() {
    let tree = SourceTree::new();
    write_manifest(
        &tree,
        r#"
        [[merge]]
        output_dir = "out"
        destination_package = "a"
        class_name = "First"

        [[merge]]
        output_dir = "out"
        destination_package = "b"
        kind = "interface"
        class_name = "Second"
        "#,
    );

    let output = run(tree.path(), &["merge", "--only", "Second"]);
    assert!(output.status.success());
    assert!(tree.path().join("out/b/Second.java").exists());
    assert!(!tree.path().join("out/a/First.java").exists());

    let output = run(tree.path(), &["merge", "--only", "Third"]);
    assert!(!output.status.success());
}
