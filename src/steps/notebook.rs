//! Notebook tool check.

use crate::shell::{execute_capture, find_python, parse_system_path};
use crate::ui::Console;
use std::path::PathBuf;

/// Check that the Jupyter notebook tool runs.
///
/// A spawn failure, a missing interpreter, and a non-zero exit all collapse
/// to the same report — the tool is either missing or broken and the remedy
/// is the same manual install.
pub fn run(console: &Console) -> bool {
    run_with_path(console, &parse_system_path())
}

pub fn run_with_path(console: &Console, path_entries: &[PathBuf]) -> bool {
    let healthy = find_python(path_entries).is_some_and(|python| {
        matches!(
            execute_capture(&python, &["-m", "jupyter", "notebook", "--version"]),
            Ok(result) if result.success
        )
    });

    if healthy {
        console.success("Jupyter notebook is properly installed!");
        console.message("To start the notebook server, run:");
        console.message("  jupyter notebook");
        console.message("Then open verification-notebook.ipynb to confirm everything works.");
        true
    } else {
        console.error("Jupyter notebook is not installed or not working properly.");
        console.message("Try installing it manually with:");
        console.message("  pip install jupyter notebook");
        false
    }
}
