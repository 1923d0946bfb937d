//! Course working-directory creation.

use crate::error::Result;
use crate::ui::Console;
use std::fs;
use std::path::Path;

/// Directories every course checkout needs.
pub const COURSE_DIRECTORIES: &[&str] = &["notebooks", "data", "solutions", "resources"];

/// Create the course directories under `root`.
///
/// Idempotent: existing directories are reported and left alone. Filesystem
/// errors are the one fatal failure class and propagate to the caller.
pub fn run(console: &Console, root: &Path) -> Result<bool> {
    for name in COURSE_DIRECTORIES {
        let path = root.join(name);
        if path.is_dir() {
            console.message(&format!("Directory already exists: {}", name));
        } else {
            fs::create_dir_all(&path)?;
            console.message(&format!("Created directory: {}", name));
        }
    }
    console.success("All necessary directories are in place!");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Console, OutputMode, Theme};
    use std::fs;
    use tempfile::TempDir;

    fn quiet_console() -> Console {
        Console::with_theme(OutputMode::Quiet, Theme::plain())
    }

    #[test]
    fn creates_all_four_directories() {
        let temp = TempDir::new().unwrap();
        assert!(run(&quiet_console(), temp.path()).unwrap());
        for name in COURSE_DIRECTORIES {
            assert!(temp.path().join(name).is_dir());
        }
    }

    #[test]
    fn second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let console = quiet_console();
        assert!(run(&console, temp.path()).unwrap());

        let created: Vec<_> = COURSE_DIRECTORIES
            .iter()
            .map(|name| temp.path().join(name).metadata().unwrap().modified().unwrap())
            .collect();

        assert!(run(&console, temp.path()).unwrap());
        for (name, before) in COURSE_DIRECTORIES.iter().zip(created) {
            let after = temp.path().join(name).metadata().unwrap().modified().unwrap();
            assert_eq!(before, after, "{} was recreated", name);
        }
    }

    #[test]
    fn partial_existing_set_is_completed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("data")).unwrap();
        assert!(run(&quiet_console(), temp.path()).unwrap());
        for name in COURSE_DIRECTORIES {
            assert!(temp.path().join(name).is_dir());
        }
    }

    #[test]
    fn filesystem_error_propagates() {
        let temp = TempDir::new().unwrap();
        // A regular file squatting on a directory name makes creation fail.
        fs::write(temp.path().join("data"), "not a directory").unwrap();
        assert!(run(&quiet_console(), temp.path()).is_err());
    }
}
