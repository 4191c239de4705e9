//! Three-part component versions with an optional qualifier.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A component version: `major.minor.micro` plus an optional qualifier.
///
/// Versions are ordered by comparing major, minor, and micro numerically,
/// then the qualifier as a plain string. `1.2.3` sorts below `1.2.3.beta`
/// because the empty qualifier compares less than any non-empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    /// Empty string when the version carries no qualifier.
    pub qualifier: String,
}

impl Version {
    /// Create a version without a qualifier.
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Create a version with a qualifier.
    pub fn with_qualifier(major: u32, minor: u32, micro: u32, qualifier: &str) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: qualifier.to_string(),
        }
    }

    /// Parse a dotted version string.
    ///
    /// Accepts `"1"`, `"1.2"`, `"1.2.3"` and `"1.2.3.qualifier"`; omitted
    /// numeric segments default to 0. Fails with the offending string when a
    /// numeric segment is malformed or the string is empty.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            bail!("invalid version (empty string)");
        }

        // At most four segments; everything after the third dot is the
        // qualifier, verbatim.
        let mut parts = trimmed.splitn(4, '.');
        let major = parse_segment(parts.next(), trimmed)?;
        let minor = parse_segment(parts.next(), trimmed)?;
        let micro = parse_segment(parts.next(), trimmed)?;
        let qualifier = parts.next().unwrap_or("").to_string();

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }
}

fn parse_segment(segment: Option<&str>, original: &str) -> Result<u32> {
    match segment {
        None => Ok(0),
        Some(s) => s
            .parse::<u32>()
            .with_context(|| format!("invalid version segment {:?} in {:?}", s, original)),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.micro.cmp(&other.micro))
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}
