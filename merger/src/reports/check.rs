//! Check command report data structures.

use std::path::PathBuf;

use javamerger_core::DeclarationKind;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// One entry per merge unit.
    pub units: Vec<UnitSummary>,
}

/// Summary of a merge unit.
#[derive(Debug)]
pub struct UnitSummary {
    /// `package.ClassName` of the generated type.
    pub qualified_name: String,
    /// Class or interface.
    pub kind: DeclarationKind,
    /// Number of source files.
    pub source_count: usize,
    /// Folder the file is generated into.
    pub generation_folder: PathBuf,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.section(&format!("Units ({})", self.units.len()));
        for unit in &self.units {
            out.list_item(&format!(
                "{} {} ({} source{})",
                unit.kind,
                unit.qualified_name,
                unit.source_count,
                if unit.source_count == 1 { "" } else { "s" }
            ));
            out.key_value_indented("folder", &unit.generation_folder.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn unit() -> UnitSummary {
        UnitSummary {
            qualified_name: "p.Merged".to_string(),
            kind: DeclarationKind::Interface,
            source_count: 1,
            generation_folder: PathBuf::from("out/p"),
        }
    }

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("javamerger.toml"),
            errors: vec![],
            warnings: vec![],
            units: vec![unit()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(
            out.lines,
            vec![
                "✓ javamerger.toml is valid",
                "",
                "Units (1):",
                "  - interface p.Merged (1 source)",
                "    folder: out/p",
            ]
        );
    }

    #[test]
    fn test_render_errors_skip_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("javamerger.toml"),
            errors: vec!["source file 'A.java' of Merged does not exist".to_string()],
            warnings: vec![],
            units: vec![unit()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.lines,
            vec!["error: source file 'A.java' of Merged does not exist", ""]
        );
    }
}
