// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `javamerger.toml`.
//!
//! A manifest holds one or more `[[merge]]` units. Each unit describes one
//! generated type and converts into a [`javamerger_codegen::MergeRequest`].

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIR, Manifest, MergeUnit, MergerToml, ParseContext,
};
