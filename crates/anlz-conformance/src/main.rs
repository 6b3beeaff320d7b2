//! anlz-conformance - legacy orientation conformance runner
//!
//! Writes one header/pixel pair per historical orientation byte into the
//! given directory, reads each back, and verifies pixel fidelity and
//! anatomical orientation. Exits non-zero when any scenario fails.

use anlz_conformance::run_all;
use anlz_io::AnalyzeReader;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anlz-conformance")]
#[command(author, version, about = "Legacy volume orientation conformance runner")]
#[command(long_about = "
Round-trips a captured little-endian Analyze 7.5 volume through every
historical orientation byte (0-5) and verifies that pixels survive
bit-exact and that each orientation decodes to the expected code.

Examples:
  anlz-conformance /tmp/scratch        # Run all scenarios in /tmp/scratch
  anlz-conformance /tmp/scratch -v     # Also log file writes and reads
")]
struct Cli {
    /// Directory where scenario files are written
    dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_target(false)
        .init();

    fs::create_dir_all(&cli.dir)
        .with_context(|| format!("cannot create scenario directory {}", cli.dir.display()))?;

    let report = run_all(&cli.dir, &AnalyzeReader::new());
    if !report.passed() {
        bail!(
            "{} of {} scenarios failed",
            report.failure_count(),
            report.outcomes.len()
        );
    }
    Ok(())
}
