//! CLI argument definitions.
//!
//! Flags only — running `courseprep` with no arguments performs the full
//! setup run.

use clap::Parser;
use std::path::PathBuf;

/// Courseprep - course environment setup and verification.
#[derive(Debug, Parser)]
#[command(name = "courseprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the course project root (overrides current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Path to the requirements manifest (overrides <dir>/requirements.txt)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
