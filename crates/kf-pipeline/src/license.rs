//! Third-party license report.
//!
//! Layout:
//!
//! ```text
//! <banner>
//! <project license text>
//! ***********************************************************************   (71)
//!
//! <package name>
//! <normalized license text>
//! ...
//! ```

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Width of the separator line between package blocks.
pub const SEPARATOR_WIDTH: usize = 71;
const SEPARATOR_CHAR: char = '*';

/// Module metadata as supplied by the dependency resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub package_name: String,
    #[serde(default)]
    pub license_text: Option<String>,
    #[serde(default)]
    pub resolved_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    pub package_name: String,
    pub license_text: Option<String>,
}

impl LicenseEntry {
    pub fn new(package_name: impl Into<String>, license_text: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            license_text: Some(license_text.into()),
        }
    }

    fn text(&self) -> Option<&str> {
        self.license_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

impl From<&DependencyRecord> for LicenseEntry {
    fn from(record: &DependencyRecord) -> Self {
        Self {
            package_name: record.package_name.clone(),
            license_text: record.license_text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseAggregator {
    banner: String,
    project_license: String,
}

impl LicenseAggregator {
    pub fn new(banner: impl Into<String>, project_license: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            project_license: project_license.into(),
        }
    }

    /// Entries that make it into the report, in input order: text present and
    /// the first occurrence of each package name.
    pub fn surviving<'a>(&self, entries: &'a [LicenseEntry]) -> Vec<&'a LicenseEntry> {
        let mut seen = FxHashSet::default();
        entries
            .iter()
            .filter(|entry| {
                if entry.text().is_none() {
                    tracing::debug!("dropping {} from license report: no license text", entry.package_name);
                    return false;
                }
                if !seen.insert(entry.package_name.as_str()) {
                    tracing::debug!("dropping duplicate license entry for {}", entry.package_name);
                    return false;
                }
                true
            })
            .collect()
    }

    pub fn render(&self, entries: &[LicenseEntry]) -> String {
        let separator: String = std::iter::repeat_n(SEPARATOR_CHAR, SEPARATOR_WIDTH).collect();

        let mut report = String::new();
        report.push_str(&self.banner);
        report.push('\n');
        report.push_str(&self.project_license);

        for entry in self.surviving(entries) {
            let Some(text) = entry.text() else { continue };
            report.push('\n');
            report.push_str(&separator);
            report.push_str("\n\n");
            report.push_str(&entry.package_name);
            report.push('\n');
            report.push_str(&normalize_license_text(text));
        }

        report
    }

    pub fn render_records(&self, records: &[DependencyRecord]) -> String {
        let entries: Vec<LicenseEntry> = records.iter().map(LicenseEntry::from).collect();
        self.render(&entries)
    }
}

/// Join hard-wrapped lines: a newline between two non-whitespace characters
/// becomes a single space. Blank lines (paragraph breaks) are kept.
pub fn normalize_license_text(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let joins = c == '\n'
                && i > 0
                && !chars[i - 1].is_whitespace()
                && chars.get(i + 1).is_some_and(|next| !next.is_whitespace());
            if joins { ' ' } else { c }
        })
        .collect()
}

/// Read the project's own license text.
pub fn load_project_license(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        message: format!("Failed to read project license: {}", path.display()),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_joins_wrapped_lines() {
        assert_eq!(normalize_license_text("a\nb"), "a b");
        assert_eq!(normalize_license_text("one\ntwo\nthree"), "one two three");
    }

    #[test]
    fn normalize_keeps_paragraph_breaks() {
        assert_eq!(
            normalize_license_text("MIT License\n\nCopyright\nholder"),
            "MIT License\n\nCopyright holder"
        );
    }

    #[test]
    fn normalize_keeps_edge_and_indented_newlines() {
        assert_eq!(normalize_license_text("\ntext\n"), "\ntext\n");
        assert_eq!(normalize_license_text("list:\n  - item"), "list:\n  - item");
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let aggregator = LicenseAggregator::new("App", "");
        let entries = [LicenseEntry::new("blank", "  \n ")];
        assert!(aggregator.surviving(&entries).is_empty());
    }

    #[test]
    fn separator_is_71_stars() {
        let report = LicenseAggregator::new("App", "").render(&[LicenseEntry::new("y", "Lic Y")]);
        let line = report.lines().find(|l| l.starts_with('*')).unwrap();
        assert_eq!(line.len(), SEPARATOR_WIDTH);
        assert!(line.chars().all(|c| c == '*'));
    }
}
