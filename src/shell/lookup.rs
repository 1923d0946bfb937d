//! Tool lookup on PATH.
//!
//! Resolution iterates over PATH entries directly instead of shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Interpreter names probed in order.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate the Python interpreter, preferring `python3` over `python`.
pub fn find_python(path_entries: &[PathBuf]) -> Option<PathBuf> {
    let found = PYTHON_CANDIDATES
        .iter()
        .find_map(|name| resolve_tool_path(name, path_entries));
    match &found {
        Some(path) => tracing::debug!("resolved interpreter: {}", path.display()),
        None => tracing::debug!("no interpreter found on PATH"),
    }
    found
}
