//! Display-entry validation
//!
//! Checks every display entry before any output is produced: the file must
//! exist, and every declared range must be sane and within the file's line
//! count. Issues are accumulated rather than failing fast, so one run
//! reports everything wrong with the config.

use std::io;
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::core::model::ValidationIssue;
use crate::core::reader::read_lines;

/// Validate all display entries against the filesystem.
///
/// Returns the accumulated issues; an empty vector means the config is
/// valid. I/O errors other than a missing file (e.g. permissions while
/// counting lines) propagate.
pub fn validate(root: &Path, resolved: &ResolvedConfig) -> io::Result<Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    for (key, ranges) in &resolved.display {
        let path = root.join(key);
        if !path.is_file() {
            issues.push(ValidationIssue::MissingFile { key: key.clone() });
            continue;
        }

        if ranges.is_empty() {
            continue;
        }

        let len = read_lines(&path, &resolved.encodings)?.len();
        for range in ranges {
            let (start, end) = (range.start(), range.end());
            if start < 1 || end < 1 || start > end {
                issues.push(ValidationIssue::InvalidRange {
                    key: key.clone(),
                    start,
                    end,
                });
            } else if end > len as i64 {
                issues.push(ValidationIssue::RangeExceedsFile {
                    key: key.clone(),
                    end,
                    len,
                });
            }
        }
    }

    Ok(issues)
}
