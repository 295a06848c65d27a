//! Manifest parsing from files and strings.

use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use super::{DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIR, Manifest, MergeUnit, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// javamerger.toml as written, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    merge: Vec<RawMergeUnit>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMergeUnit {
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
    #[serde(default)]
    source_files: Vec<PathBuf>,
    destination_package: String,
    #[serde(default = "default_kind")]
    kind: String,
    class_name: String,
    #[serde(default)]
    class_annotations: Vec<String>,
    #[serde(default)]
    additional_imports: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_kind() -> String {
    "class".to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_MANIFEST)
    }
}

impl Manifest {
    /// Parse a javamerger.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        parse_manifest_in(&content, &filename, super::manifest_dir(path))
    }

    /// Parse a javamerger.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Parse a javamerger.toml whose relative paths resolve against `base_dir`.
    pub fn from_str_in_dir(content: &str, filename: &str, base_dir: &Path) -> Result<Self> {
        parse_manifest_in(content, filename, base_dir)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    parse_manifest_in(content, filename, Path::new(""))
}

fn parse_manifest_in(content: &str, filename: &str, base_dir: &Path) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(raw, content, filename, base_dir)
}

/// Validate the raw manifest and convert it into typed units.
fn validate_manifest(
    raw: RawManifest,
    src: &str,
    filename: &str,
    base_dir: &Path,
) -> Result<Manifest> {
    let ctx = ParseContext::new(src, filename);

    if raw.merge.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("javamerger.toml must define at least one [[merge]] table", None));
    }

    let units = raw
        .merge
        .into_iter()
        .enumerate()
        .map(|(index, unit)| validate_unit(unit, &ctx.unit(index)))
        .collect::<Result<Vec<_>>>()?;

    check_unique_outputs(&units, &ctx, base_dir)?;
    Ok(Manifest { units })
}

fn validate_unit(raw: RawMergeUnit, ctx: &ParseContext) -> Result<MergeUnit> {
    ctx.validate_package(&raw.destination_package)?;
    ctx.validate_class_name(&raw.class_name)?;
    let kind = ctx.parse_kind(&raw.kind)?;

    Ok(MergeUnit {
        output_dir: raw.output_dir,
        source_files: raw.source_files,
        destination_package: raw.destination_package,
        kind,
        class_name: raw.class_name,
        class_annotations: raw.class_annotations,
        additional_imports: raw.additional_imports,
    })
}

/// Two units writing the same file would silently overwrite each other.
///
/// Output directories are compared after resolving them against `base_dir`
/// and dropping `.` components, so `out` and `./out` collide.
fn check_unique_outputs(units: &[MergeUnit], ctx: &ParseContext, base_dir: &Path) -> Result<()> {
    let mut seen: HashMap<(PathBuf, String), usize> = HashMap::new();

    for (index, unit) in units.iter().enumerate() {
        let key = (
            without_cur_dir(&base_dir.join(&unit.output_dir)),
            unit.qualified_name(),
        );
        if seen.insert(key, index).is_some() {
            let spans = ctx.find_value_spans("class_name", &unit.class_name);
            return Err(ctx.source_context().duplicate_output_error(
                unit.qualified_name(),
                spans.first().copied(),
                spans.get(1).copied(),
            ));
        }
    }
    Ok(())
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
