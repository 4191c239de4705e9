//! Required-component descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::range::VersionRange;

/// A declared dependency on another component: an identifier plus the
/// version range the depending component accepts.
///
/// `optional` and `exported` are descriptive flags; identity (equality and
/// hash) is defined on the id and range only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredComponentDescription {
    pub id: String,
    pub range: VersionRange,
    pub optional: bool,
    pub exported: bool,
}

impl RequiredComponentDescription {
    /// Create a required (non-optional, non-exported) description.
    pub fn new(id: &str, range: VersionRange) -> Self {
        Self::with_flags(id, range, false, false)
    }

    /// Create a description with explicit optional/exported flags.
    pub fn with_flags(id: &str, range: VersionRange, optional: bool, exported: bool) -> Self {
        Self {
            id: id.to_string(),
            range,
            optional,
            exported,
        }
    }
}

impl PartialEq for RequiredComponentDescription {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.range == other.range
    }
}

impl Eq for RequiredComponentDescription {}

impl Hash for RequiredComponentDescription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.range.hash(state);
    }
}

impl fmt::Display for RequiredComponentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn range(text: &str) -> VersionRange {
        VersionRange::parse(text).unwrap()
    }

    #[test]
    fn test_flags_do_not_affect_identity() {
        let a = RequiredComponentDescription::new("org.example.core", range("[1.0.0,2.0.0)"));
        let b = RequiredComponentDescription::with_flags(
            "org.example.core",
            range("[1.0.0,2.0.0)"),
            true,
            true,
        );
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b), "hash must follow equality");
    }

    #[test]
    fn test_distinct_id_or_range() {
        let a = RequiredComponentDescription::new("org.example.core", range("[1.0.0,2.0.0)"));
        let b = RequiredComponentDescription::new("org.example.ui", range("[1.0.0,2.0.0)"));
        let c = RequiredComponentDescription::new("org.example.core", range("[1.0.0,2.0.0]"));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let d = RequiredComponentDescription::new("org.example.core", range("[1.0.0,2.0.0)"));
        assert_eq!(d.to_string(), "org.example.core [1.0.0,2.0.0)");

        let bare = RequiredComponentDescription::new("org.example.ui", range("1.2.3"));
        assert_eq!(bare.to_string(), "org.example.ui 1.2.3");
    }

    #[test]
    fn test_default_flags() {
        let d = RequiredComponentDescription::new("x", range("1.0.0"));
        assert!(!d.optional);
        assert!(!d.exported);
    }
}
