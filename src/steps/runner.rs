//! The setup driver.
//!
//! Runs the five steps in fixed order — no branching on failure, every step
//! always executes — and prints the final summary. Only directory creation
//! can return a fatal error; everything else folds into the success count.

use super::{directories, install, interpreter, notebook, verify};
use crate::error::Result;
use crate::ui::Console;
use std::path::Path;

/// Name + outcome for one executed step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Human-readable step name.
    pub name: &'static str,
    /// Whether the step succeeded.
    pub success: bool,
}

/// Aggregated outcome of a full setup run.
#[derive(Debug, Clone, Default)]
pub struct SetupSummary {
    /// Reports in execution order.
    pub reports: Vec<StepReport>,
}

impl SetupSummary {
    /// Number of steps that succeeded.
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.success).count()
    }

    /// Number of steps that ran.
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Whether every step succeeded.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Run the full setup sequence against `root`, reading `manifest`.
pub fn run(console: &Console, root: &Path, manifest: &Path) -> Result<SetupSummary> {
    console.section("Course Environment Setup");
    console.message("This will check your Python version, install required packages,");
    console.message("and verify that everything is working properly.");

    let mut reports = Vec::new();

    console.section("Checking Python Version");
    reports.push(StepReport {
        name: "python version",
        success: interpreter::run(console),
    });

    console.section("Installing Required Packages");
    reports.push(StepReport {
        name: "package installation",
        success: install::run(console, manifest),
    });

    console.section("Verifying Package Installations");
    reports.push(StepReport {
        name: "package verification",
        success: verify::run(console, manifest),
    });

    console.section("Creating Course Directories");
    reports.push(StepReport {
        name: "course directories",
        success: directories::run(console, root)?,
    });

    console.section("Checking Jupyter Notebook");
    reports.push(StepReport {
        name: "notebook check",
        success: notebook::run(console),
    });

    let summary = SetupSummary { reports };
    print_summary(console, &summary);
    Ok(summary)
}

fn print_summary(console: &Console, summary: &SetupSummary) {
    console.section("Setup Summary");
    console.summary(&format!(
        "Completed {}/{} setup steps successfully.",
        summary.passed(),
        summary.total()
    ));

    if summary.all_passed() {
        console.success("Your environment is fully set up for the course!");
        console.message("Open the verification notebook to confirm everything works.");
    } else {
        console.warning("Setup completed with some warnings or errors.");
        console.message("Address the issues above before starting the course.");
    }

    console.hint("If you run into problems, check the course Q&A or post in the discussion forum.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &'static str, success: bool) -> StepReport {
        StepReport { name, success }
    }

    #[test]
    fn summary_counts_successes() {
        let summary = SetupSummary {
            reports: vec![
                report("a", true),
                report("b", false),
                report("c", true),
            ],
        };
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
    }

    #[test]
    fn summary_all_passed() {
        let summary = SetupSummary {
            reports: vec![report("a", true), report("b", true)],
        };
        assert!(summary.all_passed());
    }

    #[test]
    fn empty_summary_trivially_passes() {
        let summary = SetupSummary::default();
        assert_eq!(summary.passed(), 0);
        assert!(summary.all_passed());
    }
}
