//! Java naming helpers shared across crates.

use std::path::PathBuf;

/// File extension of generated Java sources.
pub const JAVA_EXTENSION: &str = "java";

/// Java reserved words, including the literals that cannot name a type.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Render a dotted package name as a relative path (`a.b.c` -> `a/b/c`).
pub fn package_to_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Check if a name is a Java reserved word.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable Java identifier.
///
/// Returns `None` if valid, or the reason it is not.
pub fn validate_java_identifier(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("identifier cannot be empty".to_string());
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Some(format!("identifier cannot start with '{}'", first));
    }

    if let Some(c) = chars.find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '$')) {
        return Some(format!("identifier cannot contain '{}'", c));
    }

    if is_java_keyword(name) {
        return Some(format!("'{}' is a Java reserved word", name));
    }

    None
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_package_to_path() {
        assert_eq!(package_to_path("p"), Path::new("p"));
        assert_eq!(
            package_to_path("ch.cern.eam.merged"),
            Path::new("ch").join("cern").join("eam").join("merged")
        );
        assert_eq!(package_to_path(""), PathBuf::new());
    }

    #[test]
    fn test_validate_java_identifier() {
        assert_eq!(validate_java_identifier("Merged"), None);
        assert_eq!(validate_java_identifier("_internal"), None);
        assert_eq!(validate_java_identifier("$Proxy1"), None);
        assert!(validate_java_identifier("").is_some());
        assert!(validate_java_identifier("1Merged").is_some());
        assert!(validate_java_identifier("My-Class").is_some());
        assert!(validate_java_identifier("class").is_some());
    }

    #[test]
    fn test_is_java_keyword() {
        assert!(is_java_keyword("interface"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("Interface"));
    }
}
