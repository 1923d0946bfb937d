//! Courseprep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use courseprep::cli::Cli;
use courseprep::steps;
use courseprep::ui::{Console, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("courseprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courseprep=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("courseprep starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let root = cli
        .dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let manifest = cli
        .manifest
        .clone()
        .unwrap_or_else(|| root.join("requirements.txt"));

    let console = Console::new(output_mode);

    // Step failures land in the summary, not the exit status; only a fatal
    // error (directory creation) exits non-zero.
    match steps::run(&console, &root, &manifest) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
