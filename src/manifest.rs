//! Requirements manifest parsing.
//!
//! The manifest is a pip-style `requirements.txt`: one requirement per line,
//! blank lines and `#` comments ignored. Package names are normalized the way
//! the package index normalizes them (lowercase, runs of `-`, `_`, `.` folded
//! to a single `-`) so lookups against the installed set are spelling-proof.

use crate::error::{Result, SetupError};
use crate::version::Constraint;
use std::fmt;
use std::fs;
use std::path::Path;

/// A single parsed requirement: package name plus optional version constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    /// Normalized package name.
    pub name: String,
    /// Version constraints, all of which must hold. Empty means any version.
    pub constraints: Vec<Constraint>,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

/// Normalize a package name: lowercase, runs of `-`, `_`, `.` become `-`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_was_sep {
                out.push('-');
            }
            last_was_sep = true;
        } else {
            out.extend(c.to_lowercase());
            last_was_sep = false;
        }
    }
    out
}

/// Parse one manifest line into a requirement.
///
/// Accepts `name`, `name>=1.2`, `name>=1.2,<2.0`, and an extras suffix on the
/// name (`uvicorn[standard]`) — pip resolves extras, version checks ignore them.
pub fn parse_line(line: &str) -> Result<Requirement> {
    let invalid = |message: String| SetupError::InvalidRequirement {
        line: line.to_string(),
        message,
    };

    let spec_start = line.find(|c| matches!(c, '<' | '>' | '=' | '!'));
    let (raw_name, spec) = match spec_start {
        Some(i) => (&line[..i], &line[i..]),
        None => (line, ""),
    };

    let mut name = raw_name.trim().to_string();
    if let Some(bracket) = name.find('[') {
        name.truncate(bracket);
    }
    if name.is_empty() {
        return Err(invalid("missing package name".into()));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid(format!("invalid package name '{}'", name)));
    }

    let mut constraints = Vec::new();
    for part in spec.split(',').filter(|p| !p.trim().is_empty()) {
        constraints.push(part.parse::<Constraint>().map_err(|m| invalid(m))?);
    }

    Ok(Requirement {
        name: normalize_name(&name),
        constraints,
    })
}

/// Parse manifest contents: one requirement per non-blank, non-comment line.
///
/// Inline comments after `#` are stripped before parsing.
pub fn parse(contents: &str) -> Result<Vec<Requirement>> {
    let mut requirements = Vec::new();
    for line in contents.lines() {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        requirements.push(parse_line(line)?);
    }
    Ok(requirements)
}

/// Load and parse a manifest file, guarding for its absence.
pub fn load(path: &Path) -> Result<Vec<Requirement>> {
    if !path.exists() {
        return Err(SetupError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}
