//! treedump - render a project tree and dump selected file contents
//!
//! treedump provides:
//! - Config-driven directory tree rendering with exclude/shallow rules
//! - File content dumping, whole or by 1-based line ranges
//! - An encoding cascade so non-UTF-8 files never abort a run
//! - An optional liveness endpoint (GET /healthz)

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod core;
#[cfg(feature = "serve")]
mod server;
mod snapshot;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
