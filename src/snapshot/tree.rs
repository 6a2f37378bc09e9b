//! Directory tree traversal and rendering
//!
//! Traversal and presentation are two passes: `walk` produces structural
//! [`TreeRow`]s (no glyphs), `render_rows` turns them into the indented
//! ASCII listing. Excluded keys are dropped entirely; shallow directories
//! are listed but never descended into.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::model::TreeRow;
use crate::core::paths::rel_key;

const PERMISSION_DENIED: &str = "[Permission Denied]";
const NOT_FOUND: &str = "[Not Found]";

/// A directory entry with its name pre-rendered for sorting.
struct DirEntry {
    name: String,
    path: std::path::PathBuf,
}

/// List a directory's entries in lexicographic name order.
fn list_sorted(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Recursively walk `root`, producing one structural row per visible entry.
///
/// Permission and not-found errors while listing a directory become sentinel
/// rows and traversal continues with the siblings; any other I/O error
/// propagates.
pub fn walk(
    root: &Path,
    exclude: &HashSet<String>,
    shallow: &HashSet<String>,
) -> io::Result<Vec<TreeRow>> {
    let mut rows = Vec::new();
    let mut ancestors = Vec::new();
    walk_dir(root, root, exclude, shallow, &mut ancestors, &mut rows)?;
    Ok(rows)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    exclude: &HashSet<String>,
    shallow: &HashSet<String>,
    ancestors: &mut Vec<bool>,
    rows: &mut Vec<TreeRow>,
) -> io::Result<()> {
    let entries = match list_sorted(dir) {
        Ok(entries) => entries,
        Err(err) => {
            let label = match err.kind() {
                io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
                io::ErrorKind::NotFound => NOT_FOUND,
                _ => return Err(err),
            };
            rows.push(TreeRow::new(label, ancestors.clone(), true));
            return Ok(());
        }
    };

    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        // Last-sibling position is judged against the unfiltered listing,
        // before exclusions are applied.
        let is_last = i == count - 1;

        let key = rel_key(root, &entry.path);
        if exclude.contains(&key) {
            continue;
        }

        rows.push(TreeRow::new(entry.name.clone(), ancestors.clone(), is_last));

        if entry.path.is_dir() {
            if shallow.contains(&key) {
                continue;
            }
            ancestors.push(is_last);
            walk_dir(root, &entry.path, exclude, shallow, ancestors, rows)?;
            ancestors.pop();
        }
    }

    Ok(())
}

/// Render structural rows into tree lines with branch glyphs.
pub fn render_rows(rows: &[TreeRow]) -> Vec<String> {
    rows.iter().map(render_row).collect()
}

fn render_row(row: &TreeRow) -> String {
    let mut line = String::new();
    for &ancestor_was_last in &row.ancestors {
        line.push_str(if ancestor_was_last { "    " } else { "│   " });
    }
    line.push_str(if row.is_last { "└── " } else { "├── " });
    line.push_str(&row.label);
    line
}
