//! Dependency installation from the requirements manifest.

use crate::shell::{execute, find_python, parse_system_path, CommandOptions};
use crate::ui::Console;
use std::path::{Path, PathBuf};

/// Install required packages with `pip install -r <manifest>`.
///
/// Installer output streams straight to the console through inherited stdio.
/// A missing manifest, a missing interpreter, and a non-zero installer exit
/// are all reported as failure without raising; pip's own atomicity is relied
/// on — there is no rollback or partial-install detection.
pub fn run(console: &Console, manifest: &Path) -> bool {
    run_with_path(console, manifest, &parse_system_path())
}

pub fn run_with_path(console: &Console, manifest: &Path, path_entries: &[PathBuf]) -> bool {
    if !manifest.exists() {
        console.error(&format!("Could not find {}", manifest.display()));
        console.message("Make sure you are running courseprep from the course repository root.");
        return false;
    }

    let Some(python) = find_python(path_entries) else {
        console.error("No Python interpreter found on PATH; cannot install packages.");
        return false;
    };
    console.detail(&format!("Using interpreter at {}", python.display()));

    console.message("Installing packages from the requirements manifest...");
    console.message("This may take a few minutes depending on your internet connection.");
    console.message("Some packages might require additional system dependencies.");

    let manifest_arg = manifest.to_string_lossy();
    let args = ["-m", "pip", "install", "-r", manifest_arg.as_ref()];
    match execute(&python, &args, &CommandOptions::default()) {
        Ok(result) if result.success => {
            console.success("All packages installed successfully!");
            true
        }
        Ok(result) => {
            let code = result
                .exit_code
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            console.error(&format!("Package installation failed with exit code {}", code));
            console.message("Try installing the packages manually with:");
            console.message(&format!("  pip install -r {}", manifest.display()));
            false
        }
        Err(err) => {
            console.error(&format!("Could not run the package installer: {}", err));
            false
        }
    }
}
