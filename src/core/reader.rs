//! Text reading with an encoding cascade
//!
//! Reads a file into lines by trying each configured encoding in order with
//! a strict decoder; the first successful decode wins. If every candidate
//! fails the bytes are decoded lossily, so decoding itself never errors.
//! Non-decoding failures (missing file, permissions) propagate to the caller.

use encoding_rs::{UTF_16BE, UTF_16LE, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// A text encoding candidate for the read cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-8 with an optional byte-order mark stripped.
    #[serde(rename = "utf-8-sig")]
    Utf8Sig,
    #[serde(rename = "windows-1252")]
    Windows1252,
    /// ISO-8859-1; every byte sequence decodes, so a cascade ending here
    /// never reaches the lossy fallback.
    #[serde(rename = "latin-1")]
    Latin1,
    /// UTF-16 with BOM sniffing; little-endian when no BOM is present.
    #[serde(rename = "utf-16")]
    Utf16,
}

/// Default preference order, Windows-safe.
pub const DEFAULT_ENCODINGS: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Utf8Sig,
    TextEncoding::Windows1252,
    TextEncoding::Latin1,
    TextEncoding::Utf16,
];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Attempt a strict decode with a single encoding. `None` means the bytes
/// are not valid for that encoding.
fn decode_strict(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
        TextEncoding::Utf8Sig => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            std::str::from_utf8(body).ok().map(str::to_owned)
        }
        TextEncoding::Windows1252 => WINDOWS_1252
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned),
        TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        TextEncoding::Utf16 => {
            let (codec, body) = match bytes {
                [0xFF, 0xFE, rest @ ..] => (UTF_16LE, rest),
                [0xFE, 0xFF, rest @ ..] => (UTF_16BE, rest),
                _ => (UTF_16LE, bytes),
            };
            codec
                .decode_without_bom_handling_and_without_replacement(body)
                .map(Cow::into_owned)
        }
    }
}

/// Decode bytes through the cascade, falling back to lossy UTF-8.
pub fn decode_bytes(bytes: &[u8], encodings: &[TextEncoding]) -> String {
    for &encoding in encodings {
        if let Some(text) = decode_strict(bytes, encoding) {
            return text;
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// Read a file into lines (terminators stripped), trying each encoding in
/// order. I/O errors propagate; decode errors never surface.
pub fn read_lines(path: &Path, encodings: &[TextEncoding]) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = decode_bytes(&bytes, encodings);
    Ok(text.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "alpha\nbeta\n").unwrap();

        let lines = read_lines(&path, DEFAULT_ENCODINGS).unwrap();
        assert_eq!(lines, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_read_strips_utf8_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.txt");
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"hello\n");
        fs::write(&path, bytes).unwrap();

        // Plain utf-8 would keep the BOM character; utf-8-sig strips it.
        let lines = read_lines(&path, &[TextEncoding::Utf8Sig]).unwrap();
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_read_windows_1252() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cp1252.txt");
        // 0x93/0x94 are curly quotes in cp1252 and invalid UTF-8.
        fs::write(&path, [0x93, 0x68, 0x69, 0x94, 0x0A]).unwrap();

        let lines = read_lines(&path, DEFAULT_ENCODINGS).unwrap();
        assert_eq!(lines, vec!["\u{201C}hi\u{201D}"]);
    }

    #[test]
    fn test_read_utf16_le_with_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("utf16.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "ok\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).unwrap();

        let lines = read_lines(&path, &[TextEncoding::Utf16]).unwrap();
        assert_eq!(lines, vec!["ok"]);
    }

    #[test]
    fn test_latin1_accepts_anything() {
        let decoded = decode_bytes(&[0xFF, 0xFE, 0x41], &[TextEncoding::Latin1]);
        assert_eq!(decoded, "\u{FF}\u{FE}A");
    }

    #[test]
    fn test_lossy_fallback_when_cascade_exhausted() {
        // Invalid UTF-8 with no other candidates falls back to replacement.
        let decoded = decode_bytes(&[0xFF, 0x41], &[TextEncoding::Utf8]);
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.contains('A'));
    }

    #[test]
    fn test_missing_file_propagates() {
        let err = read_lines(Path::new("/nonexistent/file.txt"), DEFAULT_ENCODINGS)
            .expect_err("missing file must error");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_line_count_matches_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("count.txt");
        fs::write(&path, "1\n2\n3").unwrap();

        let lines = read_lines(&path, DEFAULT_ENCODINGS).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_encoding_names_round_trip() {
        let names = ["utf-8", "utf-8-sig", "windows-1252", "latin-1", "utf-16"];
        for (&enc, name) in DEFAULT_ENCODINGS.iter().zip(names) {
            let json = serde_json::to_string(&enc).unwrap();
            assert_eq!(json, format!("\"{}\"", name));
            let back: TextEncoding = serde_json::from_str(&json).unwrap();
            assert_eq!(back, enc);
        }
    }
}
