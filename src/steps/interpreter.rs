//! Interpreter version check.

use crate::shell::{execute_capture, find_python, parse_system_path};
use crate::ui::Console;
use crate::version::Version;
use regex::Regex;
use std::path::PathBuf;

/// Minimum interpreter version the course supports.
pub const MIN_PYTHON: (u32, u32) = (3, 9);

/// Check that the Python interpreter meets the course minimum.
///
/// A missing or below-minimum interpreter is reported as a warning; this
/// check never halts the remaining steps.
pub fn run(console: &Console) -> bool {
    run_with_path(console, &parse_system_path())
}

pub fn run_with_path(console: &Console, path_entries: &[PathBuf]) -> bool {
    let Some(python) = find_python(path_entries) else {
        console.warning("No Python interpreter found on PATH.");
        console.message(&format!(
            "Install Python {}.{} or higher from https://www.python.org/downloads/",
            MIN_PYTHON.0, MIN_PYTHON.1
        ));
        return false;
    };
    console.detail(&format!("Using interpreter at {}", python.display()));

    let result = match execute_capture(&python, &["--version"]) {
        Ok(result) => result,
        Err(err) => {
            console.warning(&format!("Could not run the interpreter: {}", err));
            return false;
        }
    };

    // Old interpreters printed the version banner on stderr.
    let banner = if result.stdout.trim().is_empty() {
        &result.stderr
    } else {
        &result.stdout
    };
    let Some(version) = extract_version(banner) else {
        console.warning(&format!(
            "Could not read an interpreter version from '{}'",
            banner.trim()
        ));
        return false;
    };

    console.message(&format!("Detected Python {}", version));

    if !meets_minimum(&version, MIN_PYTHON) {
        console.warning(&format!(
            "This course recommends Python {}.{} or higher.",
            MIN_PYTHON.0, MIN_PYTHON.1
        ));
        console.message("You may encounter issues with older versions.");
        return false;
    }

    console.success("Python version check passed!");
    true
}

/// Pull a dotted version out of an interpreter banner like `Python 3.11.4`.
fn extract_version(banner: &str) -> Option<Version> {
    let re = Regex::new(r"(\d+(?:\.\d+)+)").ok()?;
    let captures = re.captures(banner)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Whether a version meets the `(major, minor)` minimum.
fn meets_minimum(version: &Version, min: (u32, u32)) -> bool {
    version >= &Version::new(vec![min.0, min.1])
}
