//! Core types and utilities for the javamerger source merger.
//!
//! This crate provides the fundamental types shared by the merge engine,
//! the manifest parser and the command line front end.

mod file;
mod kind;
mod utils;

// File operations
pub use file::File;
// Fundamental types
pub use kind::{DeclarationKind, UnknownDeclarationKind};
// Java naming utilities
pub use utils::{JAVA_EXTENSION, is_java_keyword, package_to_path, validate_java_identifier};
