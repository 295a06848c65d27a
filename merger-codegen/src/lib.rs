//! Merge engine for javamerger.
//!
//! Concatenates the bodies of Java source files that each declare a single
//! type into one generated class or interface, with a unified import block.
//!
//! # Module Organization
//!
//! - [`extract`] - Line classification: import lines and type-body lines
//! - [`imports`] - Sorted, de-duplicated import set
//! - [`merger`] - Assembly of the generated file and writing it to disk
//! - [`testing`] - Test utilities (feature-gated)

mod error;
pub mod extract;
pub mod imports;
pub mod merger;
mod request;
mod source_builder;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{MergeError, Result};
pub use extract::{ExtractedFile, extract_body, extract_file, extract_imports};
pub use imports::ImportSet;
pub use javamerger_core::DeclarationKind;
pub use merger::{MergeOutcome, MergePreview, Merger};
pub use request::MergeRequest;
pub use source_builder::{LINE_ENDING, SourceBuilder};
