//! Content dumping
//!
//! Emits the contents of each display entry into the output buffer, in
//! declaration order, with separator and header chunks between files.
//! Ranges are clamped here (validation has already rejected out-of-bounds
//! requests); a file that disappeared since validation degrades to a skip
//! notice instead of aborting the run.

use once_cell::sync::Lazy;
use std::io;
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::core::reader::read_lines;

/// Separator emitted between dumped files.
static SEPARATOR: Lazy<String> = Lazy::new(|| "=".repeat(90));

/// Append the contents of all display entries to the output buffer.
///
/// Each buffer element is a chunk; the orchestrator joins chunks with
/// newlines, so the leading `\n` on separators and headers yields a blank
/// line before them in the final file.
pub fn dump_contents(
    root: &Path,
    resolved: &ResolvedConfig,
    out: &mut Vec<String>,
) -> io::Result<()> {
    for (index, (key, ranges)) in resolved.display.iter().enumerate() {
        if index > 0 {
            out.push(format!("\n{}", *SEPARATOR));
        }
        out.push(format!("\nContents of {}:", key));

        let path = root.join(key);
        if !path.is_file() {
            // Validation passed earlier; the file vanished in between.
            out.push(format!("[Skipped: '{}' not found]", key));
            continue;
        }

        let lines = read_lines(&path, &resolved.encodings)?;

        if ranges.is_empty() {
            for (i, line) in lines.iter().enumerate() {
                out.push(numbered(line, i as i64 + 1, resolved.line_numbers));
            }
        } else {
            let len = lines.len() as i64;
            for range in ranges {
                let start = range.start().max(1);
                let end = range.end().min(len);
                // An empty clamped window emits nothing.
                for lineno in start..=end {
                    let line = &lines[(lineno - 1) as usize];
                    out.push(numbered(line, lineno, resolved.line_numbers));
                }
            }
        }
    }

    Ok(())
}

/// Right-trim a line and optionally prefix its absolute 1-based number.
fn numbered(line: &str, lineno: i64, line_numbers: bool) -> String {
    if line_numbers {
        format!("{} {}", lineno, line.trim_end())
    } else {
        line.trim_end().to_string()
    }
}
