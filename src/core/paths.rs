//! Path normalization utilities
//!
//! Every user-supplied path and every traversed entry is reduced to a
//! normalized key before membership checks, so that equivalent spellings
//! (`./a/b`, `a\b`, `a//b`) compare equal.

use std::path::Path;

/// Whether the host filesystem is conventionally case-insensitive.
///
/// Windows and macOS (APFS default) fold case; everything else is treated
/// as case-sensitive.
const CASE_INSENSITIVE_HOST: bool = cfg!(any(windows, target_os = "macos"));

/// Normalize a user-specified relative path into its lookup key:
/// - strip leading `./` or `.\` noise
/// - unify separators to '/'
/// - collapse empty and `.` segments, resolve `..` against prior segments
/// - case-fold on case-insensitive hosts
/// - drop any trailing separator
///
/// Empty input normalizes to the empty key. There are no error conditions.
pub fn norm_key(raw: &str) -> String {
    let stripped = raw.trim().trim_start_matches(['.', '/', '\\']);
    let unified = stripped.replace('\\', "/");

    let mut segments: Vec<&str> = Vec::new();
    for seg in unified.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                // A `..` that cannot consume a prior segment is kept,
                // matching conventional normpath semantics.
                if matches!(segments.last(), None | Some(&"..")) {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if CASE_INSENSITIVE_HOST {
        joined.to_lowercase()
    } else {
        joined
    }
}

/// Normalized key for an absolute path relative to `root`, comparable to
/// [`norm_key`] output.
pub fn rel_key(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => norm_key(&rel.to_string_lossy()),
        Err(_) => norm_key(&path.to_string_lossy()),
    }
}
