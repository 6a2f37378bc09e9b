//! Snapshot configuration
//!
//! The on-disk shape (`SnapshotConfig`) mirrors what a user declares in
//! `treedump.toml`: flag maps for exclusion and shallow listing, an ordered
//! display list with optional line ranges, and a few toggles. `resolve()`
//! turns the declared shape into normalized lookup structures and is a pure
//! function of its input, so tests can build configs without touching disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::core::model::LineRange;
use crate::core::paths::norm_key;
use crate::core::reader::{TextEncoding, DEFAULT_ENCODINGS};

/// Config file looked up under the root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "treedump.toml";

/// Output file written into the root directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Tree_And_Files_Output.txt";

/// One file selected for content dumping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayEntry {
    /// Path relative to the root.
    pub path: String,

    /// 1-based inclusive line ranges; empty means the whole file.
    #[serde(default)]
    pub ranges: Vec<LineRange>,
}

/// Declared configuration, as written in `treedump.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Paths omitted from the tree entirely (not listed, not descended
    /// into). Setting an entry to `false` disables it without deleting
    /// the line.
    pub exclude: BTreeMap<String, bool>,

    /// Directories listed once but never recursed into.
    pub shallow: BTreeMap<String, bool>,

    /// Files to dump, in declaration order.
    pub display: Vec<DisplayEntry>,

    /// Prefix dumped lines with their 1-based line number.
    pub line_numbers: bool,

    /// Encoding preference order for reading text files.
    pub encodings: Vec<TextEncoding>,

    /// Output file name, written into the root directory.
    pub output: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            exclude: BTreeMap::new(),
            shallow: BTreeMap::new(),
            display: Vec::new(),
            line_numbers: false,
            encodings: DEFAULT_ENCODINGS.to_vec(),
            output: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

/// Normalized lookup structures derived from a [`SnapshotConfig`].
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub exclude: HashSet<String>,
    pub shallow: HashSet<String>,
    /// Normalized key plus its ranges, in declaration order.
    pub display: Vec<(String, Vec<LineRange>)>,
    pub line_numbers: bool,
    pub encodings: Vec<TextEncoding>,
    pub output: String,
}

impl SnapshotConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: SnapshotConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load a config, falling back to built-in defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Produce normalized lookup sets and the ordered display map.
    ///
    /// Disabled (`false`) exclude/shallow entries are filtered out and every
    /// key is normalized, so membership checks use the same key form as the
    /// tree walk. Pure function of the declared config.
    pub fn resolve(&self) -> ResolvedConfig {
        let exclude = self
            .exclude
            .iter()
            .filter(|(_, &enabled)| enabled)
            .map(|(key, _)| norm_key(key))
            .collect();

        let shallow = self
            .shallow
            .iter()
            .filter(|(_, &enabled)| enabled)
            .map(|(key, _)| norm_key(key))
            .collect();

        let display = self
            .display
            .iter()
            .map(|entry| (norm_key(&entry.path), entry.ranges.clone()))
            .collect();

        ResolvedConfig {
            exclude,
            shallow,
            display,
            line_numbers: self.line_numbers,
            encodings: self.encodings.clone(),
            output: self.output.clone(),
        }
    }
}
