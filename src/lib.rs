//! Courseprep - course environment setup and verification.
//!
//! Courseprep bootstraps the working environment for a Python-based course:
//! it checks the interpreter version, installs the requirements manifest,
//! verifies installed packages, creates the course directories, and confirms
//! the notebook tool runs — then reports how many of the five steps passed.
//! Step failures are reported, never fatal; the whole sequence always runs.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Requirements manifest parsing
//! - [`shell`] - External process execution and tool lookup
//! - [`steps`] - The five setup steps and the driver
//! - [`ui`] - Themed terminal output
//! - [`version`] - Version parsing and constraint evaluation
//!
//! # Example
//!
//! ```
//! use courseprep::manifest;
//!
//! let requirements = manifest::parse("pytest>=7.0\n# tooling\njupyter\n").unwrap();
//! assert_eq!(requirements.len(), 2);
//! assert_eq!(requirements[0].name, "pytest");
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod steps;
pub mod ui;
pub mod version;

pub use error::{Result, SetupError};
