//! Snapshot pipeline - resolve config, validate, render tree, dump contents
//!
//! One synchronous pass: resolve the declared config into lookup sets,
//! validate every display entry (aborting with no output on any issue),
//! render the tree seeded with the root path, append the dumped file
//! contents, and write the newline-joined buffer to the output file.

pub mod dump;
pub mod tree;
pub mod validate;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SnapshotConfig;
use crate::core::model::ValidationIssue;

/// What a snapshot run produced.
#[derive(Debug)]
pub enum SnapshotOutcome {
    /// The output file was written at this path.
    Written(PathBuf),
    /// Validation failed; nothing was written.
    Invalid(Vec<ValidationIssue>),
}

/// Run the full pipeline against `root` with the given declared config.
///
/// Structural validation failures return `Invalid` without writing anything;
/// traversal- and dump-time degradations are annotated inline in the output
/// instead. The output file is fully overwritten on success.
pub fn run_snapshot(root: &Path, config: &SnapshotConfig) -> Result<SnapshotOutcome> {
    let resolved = config.resolve();

    let issues = validate::validate(root, &resolved)
        .with_context(|| format!("failed to validate display entries under {}", root.display()))?;
    if !issues.is_empty() {
        return Ok(SnapshotOutcome::Invalid(issues));
    }

    let mut buffer = vec![root.display().to_string()];

    let rows = tree::walk(root, &resolved.exclude, &resolved.shallow)
        .with_context(|| format!("failed to walk {}", root.display()))?;
    buffer.extend(tree::render_rows(&rows));

    dump::dump_contents(root, &resolved, &mut buffer)?;

    let out_path = root.join(&resolved.output);
    fs::write(&out_path, buffer.join("\n"))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(SnapshotOutcome::Written(out_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayEntry;
    use crate::core::model::LineRange;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_output_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.txt"), "hi there\n").unwrap();

        let mut config = SnapshotConfig::default();
        config.display.push(DisplayEntry {
            path: "hello.txt".to_string(),
            ranges: vec![],
        });

        let outcome = run_snapshot(temp.path(), &config).unwrap();
        let path = match outcome {
            SnapshotOutcome::Written(p) => p,
            other => panic!("expected Written, got {:?}", other),
        };

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with(&temp.path().display().to_string()));
        assert!(content.contains("└── hello.txt"));
        assert!(content.contains("Contents of hello.txt:"));
        assert!(content.contains("hi there"));
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("short.txt"), "one\n").unwrap();

        let mut config = SnapshotConfig::default();
        config.display.push(DisplayEntry {
            path: "short.txt".to_string(),
            ranges: vec![LineRange(1, 50)],
        });

        let outcome = run_snapshot(temp.path(), &config).unwrap();
        match outcome {
            SnapshotOutcome::Invalid(issues) => assert_eq!(issues.len(), 1),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(!temp.path().join(crate::config::DEFAULT_OUTPUT_FILE).exists());
    }

    #[test]
    fn test_output_fully_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(crate::config::DEFAULT_OUTPUT_FILE),
            "stale content that is much longer than the fresh snapshot will be",
        )
        .unwrap();
        fs::write(temp.path().join("a.txt"), "a\n").unwrap();

        let mut config = SnapshotConfig::default();
        // Keep the output file itself out of the tree, as the stock config does.
        config
            .exclude
            .insert(crate::config::DEFAULT_OUTPUT_FILE.to_string(), true);

        run_snapshot(temp.path(), &config).unwrap();

        let content =
            fs::read_to_string(temp.path().join(crate::config::DEFAULT_OUTPUT_FILE)).unwrap();
        assert!(!content.contains("stale content"));
        assert!(content.contains("└── a.txt"));
    }
}
