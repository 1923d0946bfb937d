//! Themed terminal output.
//!
//! This module provides:
//! - [`Theme`] for styled status vocabulary (`✓ ⚠ ✗`)
//! - [`OutputMode`] verbosity levels
//! - [`Console`] tying the two together for step reporting

pub mod console;
pub mod output;
pub mod theme;

pub use console::Console;
pub use output::OutputMode;
pub use theme::{should_use_colors, Theme};
