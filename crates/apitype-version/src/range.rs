//! Version interval matching.
//!
//! Ranges use the bracketed interval syntax: `[1.0.0,2.0.0]` includes both
//! ends, `(1.0.0,2.0.0)` excludes both, and the brackets may be mixed per
//! side. A bare version string such as `"1.2.3"` denotes the unbounded-above
//! range `[1.2.3, +infinity)`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::version::Version;

/// An interval over [`Version`]s with per-bound inclusivity.
///
/// `maximum` is `None` for ranges with no upper bound (the bare-version
/// form). Equality requires identical bounds and identical inclusivity
/// flags, so `[1.0.0,2.0.0]` and `[1.0.0,2.0.0)` are distinct ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    minimum: Version,
    maximum: Option<Version>,
    include_minimum: bool,
    include_maximum: bool,
}

impl VersionRange {
    /// Build a bounded range. Fails if `minimum` exceeds `maximum`.
    pub fn new(
        minimum: Version,
        maximum: Version,
        include_minimum: bool,
        include_maximum: bool,
    ) -> Result<Self> {
        if minimum > maximum {
            bail!(
                "invalid version range: minimum {} exceeds maximum {}",
                minimum,
                maximum
            );
        }
        Ok(Self {
            minimum,
            maximum: Some(maximum),
            include_minimum,
            include_maximum,
        })
    }

    /// Build the unbounded-above range `[minimum, +infinity)`.
    pub fn at_least(minimum: Version) -> Self {
        Self {
            minimum,
            maximum: None,
            include_minimum: true,
            include_maximum: false,
        }
    }

    /// Parse a range from the interval grammar or a bare version.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            bail!("invalid version range (empty string)");
        }

        let first = trimmed.chars().next().unwrap();
        if first != '[' && first != '(' {
            // Bare version: lower bound only.
            let minimum = Version::parse(trimmed)
                .with_context(|| format!("invalid version range {:?}", trimmed))?;
            return Ok(Self::at_least(minimum));
        }

        let include_minimum = first == '[';
        let last = trimmed.chars().last().unwrap();
        let include_maximum = match last {
            ']' => true,
            ')' => false,
            _ => bail!("invalid version range {:?}: missing closing bracket", trimmed),
        };

        let inner = &trimmed[1..trimmed.len() - 1];
        let mut bounds = inner.split(',');
        let (min_text, max_text) = match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(min), Some(max), None) => (min, max),
            _ => bail!(
                "invalid version range {:?}: expected two comma-separated bounds",
                trimmed
            ),
        };

        let minimum = Version::parse(min_text)
            .with_context(|| format!("invalid version range {:?}", trimmed))?;
        let maximum = Version::parse(max_text)
            .with_context(|| format!("invalid version range {:?}", trimmed))?;
        Self::new(minimum, maximum, include_minimum, include_maximum)
    }

    /// Whether `version` lies within the range, respecting the inclusivity
    /// flag at each bound.
    pub fn includes(&self, version: &Version) -> bool {
        let above_min = if self.include_minimum {
            *version >= self.minimum
        } else {
            *version > self.minimum
        };
        if !above_min {
            return false;
        }
        match &self.maximum {
            None => true,
            Some(max) => {
                if self.include_maximum {
                    version <= max
                } else {
                    version < max
                }
            }
        }
    }

    pub fn minimum(&self) -> &Version {
        &self.minimum
    }

    /// `None` for unbounded-above ranges.
    pub fn maximum(&self) -> Option<&Version> {
        self.maximum.as_ref()
    }

    pub fn include_minimum(&self) -> bool {
        self.include_minimum
    }

    pub fn include_maximum(&self) -> bool {
        self.include_maximum
    }
}

impl FromStr for VersionRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.maximum {
            // Bare form round-trips as just the minimum version.
            None => write!(f, "{}", self.minimum),
            Some(max) => write!(
                f,
                "{}{},{}{}",
                if self.include_minimum { '[' } else { '(' },
                self.minimum,
                max,
                if self.include_maximum { ']' } else { ')' },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_half_open_interval() {
        let range = VersionRange::parse("[1.0.0,2.0.0)").unwrap();
        assert!(range.includes(&v("1.0.0")));
        assert!(range.includes(&v("1.9.9")));
        assert!(!range.includes(&v("2.0.0")));
        assert!(!range.includes(&v("0.9.9")));
    }

    #[test]
    fn test_closed_and_open_intervals() {
        let closed = VersionRange::parse("[1.0.0,2.0.0]").unwrap();
        assert!(closed.includes(&v("2.0.0")));

        let open = VersionRange::parse("(1.0.0,2.0.0)").unwrap();
        assert!(!open.includes(&v("1.0.0")));
        assert!(open.includes(&v("1.0.1")));
    }

    #[test]
    fn test_bare_version_is_unbounded_above() {
        let range = VersionRange::parse("1.2.3").unwrap();
        assert!(range.includes(&v("1.2.3")));
        assert!(range.includes(&v("1.2.4")));
        assert!(range.includes(&v("2.0.0")));
        assert!(!range.includes(&v("1.2.2")));
    }

    #[test]
    fn test_equality_includes_flags() {
        let a = VersionRange::parse("[1.0.0,2.0.0)").unwrap();
        let b = VersionRange::parse("[1.0.0,2.0.0]").unwrap();
        let c = VersionRange::parse("[1.0.0,2.0.0)").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_errors_name_the_input() {
        for bad in ["", "[1.0.0,2.0.0", "[1.0.0]", "[2.0.0,1.0.0]", "[a,b]"] {
            let err = VersionRange::parse(bad).unwrap_err();
            let _ = err; // every malformed input is rejected
        }
        let err = VersionRange::parse("[1.0.0,oops]").unwrap_err();
        assert!(format!("{:#}", err).contains("[1.0.0,oops]"));
    }

    #[test]
    fn test_min_above_max_rejected() {
        assert!(VersionRange::new(v("2.0.0"), v("1.0.0"), true, true).is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["[1.0.0,2.0.0)", "(1.0.0,2.0.0]", "1.2.3"] {
            let range = VersionRange::parse(text).unwrap();
            assert_eq!(range.to_string(), text);
            assert_eq!(VersionRange::parse(&range.to_string()).unwrap(), range);
        }
    }

    #[test]
    fn test_qualifier_bounds() {
        let range = VersionRange::parse("[1.0.0,1.0.0.zzz]").unwrap();
        assert!(range.includes(&v("1.0.0.alpha")));
        assert!(!range.includes(&v("1.0.1")));
    }
}
