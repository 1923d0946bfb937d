//! Version parsing and constraint evaluation.
//!
//! Release versions are compared as dotted numeric segments with the shorter
//! side padded with zeros, so `1.2` equals `1.2.0`. Suffixes after the numeric
//! release portion (`7.0rc1`, `2.1.post3`) end the comparison — course
//! manifests pin plain releases.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A dotted numeric release version.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    segments: Vec<u32>,
}

impl Version {
    /// Build a version from explicit segments.
    pub fn new(segments: Vec<u32>) -> Self {
        Self { segments }
    }

    /// The numeric release segments.
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        for part in s.trim().split('.') {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                break;
            }
            let value = digits
                .parse()
                .map_err(|_| format!("version segment out of range: '{}'", part))?;
            segments.push(value);
            if digits.len() != part.len() {
                // A suffix like `rc1` ends the numeric release portion.
                break;
            }
        }
        if segments.is_empty() {
            return Err(format!("no numeric version segments in '{}'", s));
        }
        Ok(Self { segments })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Comparison operator in a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `<`
    Lt,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Lt => "<",
        };
        write!(f, "{}", s)
    }
}

/// A single operator + version pair, e.g. `>=7.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// The comparison operator.
    pub op: CompareOp,
    /// The version to compare against.
    pub version: Version,
}

impl Constraint {
    /// Whether an installed version satisfies this constraint.
    pub fn matches(&self, installed: &Version) -> bool {
        match self.op {
            CompareOp::Eq => installed == &self.version,
            CompareOp::Ne => installed != &self.version,
            CompareOp::Ge => installed >= &self.version,
            CompareOp::Gt => installed > &self.version,
            CompareOp::Le => installed <= &self.version,
            CompareOp::Lt => installed < &self.version,
        }
    }
}

impl FromStr for Constraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (op, rest) = if let Some(rest) = s.strip_prefix(">=") {
            (CompareOp::Ge, rest)
        } else if let Some(rest) = s.strip_prefix("<=") {
            (CompareOp::Le, rest)
        } else if let Some(rest) = s.strip_prefix("==") {
            (CompareOp::Eq, rest)
        } else if let Some(rest) = s.strip_prefix("!=") {
            (CompareOp::Ne, rest)
        } else if let Some(rest) = s.strip_prefix('>') {
            (CompareOp::Gt, rest)
        } else if let Some(rest) = s.strip_prefix('<') {
            (CompareOp::Lt, rest)
        } else {
            return Err(format!("missing comparison operator in '{}'", s));
        };
        let version = rest.trim().parse::<Version>()?;
        Ok(Self { op, version })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}
