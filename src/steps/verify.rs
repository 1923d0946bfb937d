//! Installed-package verification against the manifest.

use crate::error::{Result, SetupError};
use crate::manifest::{self, Requirement};
use crate::shell::{execute_capture, find_python, parse_system_path};
use crate::ui::Console;
use crate::version::Version;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One entry from `pip list --format=json`.
#[derive(Debug, Clone, Deserialize)]
struct InstalledPackage {
    name: String,
    version: String,
}

/// Outcome of checking one requirement against the installed set.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Package present at a satisfying version.
    Satisfied {
        /// The installed version as pip reports it.
        version: String,
    },
    /// Package absent.
    Missing,
    /// Package present but at a version violating a constraint.
    Conflict {
        /// The installed version as pip reports it.
        installed: String,
    },
}

/// Verify every manifest requirement against the installed package set.
///
/// Every requirement is checked regardless of earlier failures; the results
/// accumulate into one overall boolean. Missing manifest and a broken
/// `pip list` are reported as failure without raising.
pub fn run(console: &Console, manifest_path: &Path) -> bool {
    run_with_path(console, manifest_path, &parse_system_path())
}

pub fn run_with_path(console: &Console, manifest_path: &Path, path_entries: &[PathBuf]) -> bool {
    let requirements = match manifest::load(manifest_path) {
        Ok(requirements) => requirements,
        Err(err) => {
            console.error(&format!("Cannot verify installations: {}", err));
            return false;
        }
    };
    console.message(&format!(
        "Checking {} required packages...",
        requirements.len()
    ));

    let Some(python) = find_python(path_entries) else {
        console.error("No Python interpreter found on PATH; cannot verify packages.");
        return false;
    };

    let listing = match execute_capture(&python, &["-m", "pip", "list", "--format=json"]) {
        Ok(result) if result.success => result.stdout,
        Ok(result) => {
            console.error(&format!(
                "Could not list installed packages (pip exited with {:?})",
                result.exit_code
            ));
            return false;
        }
        Err(err) => {
            console.error(&format!("Could not list installed packages: {}", err));
            return false;
        }
    };

    let installed = match parse_installed(&listing) {
        Ok(installed) => installed,
        Err(err) => {
            console.error(&err.to_string());
            return false;
        }
    };

    let mut all_satisfied = true;
    for requirement in &requirements {
        match check_requirement(requirement, &installed) {
            CheckOutcome::Satisfied { version } => {
                console.success(&format!("{} {} - installed", requirement.name, version));
            }
            CheckOutcome::Missing => {
                console.error(&format!("{} - not installed", requirement));
                all_satisfied = false;
            }
            CheckOutcome::Conflict { installed } => {
                console.error(&format!(
                    "{} - version conflict: {} installed",
                    requirement, installed
                ));
                all_satisfied = false;
            }
        }
    }

    if all_satisfied {
        console.success("All required packages are installed with correct versions!");
    } else {
        console.warning("Some packages are missing or have incorrect versions.");
        console.message("Run the installation step again or install them manually.");
    }

    all_satisfied
}

/// Decode pip's JSON listing into a normalized-name → version map.
pub fn parse_installed(json: &str) -> Result<HashMap<String, String>> {
    let packages: Vec<InstalledPackage> =
        serde_json::from_str(json).map_err(|e| SetupError::PackageListDecode {
            message: e.to_string(),
        })?;
    Ok(packages
        .into_iter()
        .map(|p| (manifest::normalize_name(&p.name), p.version))
        .collect())
}

/// Check one requirement against the installed map.
pub fn check_requirement(
    requirement: &Requirement,
    installed: &HashMap<String, String>,
) -> CheckOutcome {
    let Some(raw_version) = installed.get(&requirement.name) else {
        return CheckOutcome::Missing;
    };

    if requirement.constraints.is_empty() {
        return CheckOutcome::Satisfied {
            version: raw_version.clone(),
        };
    }

    match raw_version.parse::<Version>() {
        Ok(version) if requirement.constraints.iter().all(|c| c.matches(&version)) => {
            CheckOutcome::Satisfied {
                version: raw_version.clone(),
            }
        }
        // Unparseable installed versions can't satisfy a constraint.
        _ => CheckOutcome::Conflict {
            installed: raw_version.clone(),
        },
    }
}
