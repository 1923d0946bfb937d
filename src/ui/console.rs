//! Console reporting for setup steps.
//!
//! A thin wrapper tying [`Theme`] and [`OutputMode`] together. Warnings and
//! errors print in every mode; errors go to stderr so failure reports survive
//! output redirection.

use super::output::OutputMode;
use super::theme::{should_use_colors, Theme};

/// Console writer used by every setup step.
#[derive(Debug, Clone)]
pub struct Console {
    theme: Theme,
    mode: OutputMode,
}

impl Console {
    /// Create a console, picking a colored or plain theme from the terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme, mode }
    }

    /// Create a console with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self { theme, mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a section banner.
    pub fn section(&self, title: &str) {
        if self.mode.shows_status() {
            println!();
            println!("{}", self.theme.format_section(title));
        }
    }

    /// Print a plain status line.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Print a dim detail line (verbose mode only).
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", self.theme.dim.apply_to(msg));
        }
    }

    /// Print a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Print a warning line; shown in every mode.
    pub fn warning(&self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    /// Print an error line to stderr; shown in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Print the run summary line; shown in every mode.
    pub fn summary(&self, msg: &str) {
        println!("{}", self.theme.highlight.apply_to(msg));
    }

    /// Print a contextual hint.
    pub fn hint(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.hint.apply_to(msg));
        }
    }
}
