//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{SnapshotConfig, DEFAULT_CONFIG_FILE};
use crate::snapshot::{run_snapshot, SnapshotOutcome};

/// treedump - render a project tree and dump selected file contents.
#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(
    author,
    version,
    about,
    long_about = r#"treedump walks a project directory, renders an ASCII tree, and appends the
contents of configured files (whole or by line range) into a single text file.

Behavior is driven by a TOML config (default: <root>/treedump.toml):
- exclude: paths omitted from the tree entirely
- shallow: directories listed once but never descended into
- display: files to dump, in order, with optional 1-based line ranges

Examples:
    treedump snapshot
    treedump --root ../project snapshot --config review.toml
    treedump check
    treedump serve --addr 127.0.0.1:8080
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
All configured paths are interpreted relative to this root, and the output\n\
file is written into it."
    )]
    pub root: PathBuf,

    /// Disable colored diagnostics on stderr.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree and dump configured files to the output file.
    #[command(
        long_about = "Run the full pipeline: resolve the config, validate every display entry,\n\
render the directory tree, append the dumped file contents, and write the\n\
result to the configured output file under ROOT.\n\n\
If any display file is missing or a line range is out of bounds, all issues\n\
are reported and no output file is written.\n\n\
Examples:\n\
  treedump snapshot\n\
  treedump snapshot --config review.toml\n"
    )]
    Snapshot {
        /// Path to the TOML config (default: <ROOT>/treedump.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Validate the config's display entries without writing anything.
    #[command(
        long_about = "Check that every configured display file exists and that all declared\n\
line ranges are within bounds. Exits non-zero when issues are found, so it\n\
can gate CI.\n\n\
Example:\n\
  treedump check\n"
    )]
    Check {
        /// Path to the TOML config (default: <ROOT>/treedump.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Serve the liveness endpoint (GET /healthz).
    #[cfg(feature = "serve")]
    #[command(
        long_about = "Serve the health endpoint until interrupted.\n\n\
GET /healthz returns {\"status\": \"ok\", \"version\": ..., \"uptime\": ...}\n\
with uptime in seconds since startup, rounded to two decimals.\n"
    )]
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1:8080", value_name = "ADDR")]
        addr: String,
    },
}

/// Resolve the config path and load it, falling back to defaults when the
/// default file is absent. An explicitly passed `--config` must exist.
fn load_config(root: &Path, config: Option<&Path>) -> Result<SnapshotConfig> {
    match config {
        Some(path) => SnapshotConfig::load(path),
        None => SnapshotConfig::load_or_default(&root.join(DEFAULT_CONFIG_FILE)),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root.clone());

    match cli.command {
        Commands::Snapshot { config } => {
            let config = load_config(&root, config.as_deref())?;
            match run_snapshot(&root, &config)? {
                SnapshotOutcome::Written(path) => {
                    eprintln!("{}", format!("wrote {}", path.display()).green());
                }
                SnapshotOutcome::Invalid(issues) => {
                    // Reported and swallowed: the original tool returns
                    // silently with no output file on validation failure.
                    for issue in &issues {
                        eprintln!("{}", format!("error: {}", issue).red());
                    }
                }
            }
            Ok(())
        }

        Commands::Check { config } => {
            let config = load_config(&root, config.as_deref())?;
            let resolved = config.resolve();
            let issues = crate::snapshot::validate::validate(&root, &resolved)?;
            if issues.is_empty() {
                eprintln!("{}", "ok".green());
                return Ok(());
            }
            for issue in &issues {
                eprintln!("{}", format!("error: {}", issue).red());
            }
            bail!("validation failed with {} issue(s)", issues.len());
        }

        #[cfg(feature = "serve")]
        Commands::Serve { addr } => crate::server::run_serve(&addr),
    }
}
