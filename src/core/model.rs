//! Shared data model
//!
//! Types passed between the resolver, validator, tree walker and dumper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 1-based inclusive line range, written `[start, end]` in config files.
///
/// Raw values are kept as signed integers so the validator can report
/// zero or negative bounds instead of failing at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange(pub i64, pub i64);

impl LineRange {
    pub fn start(&self) -> i64 {
        self.0
    }

    pub fn end(&self) -> i64 {
        self.1
    }
}

/// One structural row of the rendered tree.
///
/// Traversal emits rows; glyph rendering happens in a separate pass so the
/// walk can be tested without string formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Entry name, or a sentinel such as `[Permission Denied]`.
    pub label: String,
    /// For each ancestor directory below the root: was it the last sibling
    /// at its level? Drives the `│   ` vs `    ` continuation columns.
    pub ancestors: Vec<bool>,
    /// Whether this row is the last sibling at its own level.
    pub is_last: bool,
}

impl TreeRow {
    pub fn new(label: impl Into<String>, ancestors: Vec<bool>, is_last: bool) -> Self {
        Self {
            label: label.into(),
            ancestors,
            is_last,
        }
    }
}

/// A structural validation failure for a display entry.
///
/// Issues are accumulated across all entries; any issue aborts the run
/// before the output file is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("the file '{key}' specified for display does not exist")]
    MissingFile { key: String },

    #[error("invalid line range ({start}, {end}) in '{key}'")]
    InvalidRange { key: String, start: i64, end: i64 },

    #[error("line range end {end} in '{key}' exceeds file length ({len})")]
    RangeExceedsFile { key: String, end: i64, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range_accessors() {
        let range = LineRange(3, 5);
        assert_eq!(range.start(), 3);
        assert_eq!(range.end(), 5);
    }

    #[test]
    fn test_line_range_deserializes_from_pair() {
        let range: LineRange = serde_json::from_str("[1, 23]").unwrap();
        assert_eq!(range, LineRange(1, 23));
    }

    #[test]
    fn test_issue_messages() {
        let missing = ValidationIssue::MissingFile {
            key: "notes.txt".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "the file 'notes.txt' specified for display does not exist"
        );

        let invalid = ValidationIssue::InvalidRange {
            key: "a.txt".to_string(),
            start: 5,
            end: 3,
        };
        assert!(invalid.to_string().contains("(5, 3)"));

        let exceeds = ValidationIssue::RangeExceedsFile {
            key: "a.txt".to_string(),
            end: 99,
            len: 10,
        };
        assert!(exceeds.to_string().contains("exceeds file length (10)"));
    }
}
