//! System-property matching for component applicability.
//!
//! Components may be restricted to particular operating systems, windowing
//! systems, or architectures. A wildcard is an explicit [`PropertyMatch::Any`]
//! variant rather than a value whose equality matches everything, so equality
//! stays reflexive and transitive.

use serde::{Deserialize, Serialize};

/// One system-property axis: either an exact value or a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyMatch {
    /// Matches every value on this axis.
    Any,
    /// Matches only the given value.
    Exact(String),
}

impl PropertyMatch {
    pub fn exact(value: &str) -> Self {
        Self::Exact(value.to_string())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

/// Applicability filter over the three standard environment axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFilter {
    pub os: PropertyMatch,
    pub ws: PropertyMatch,
    pub arch: PropertyMatch,
}

impl EnvironmentFilter {
    /// A filter that matches every environment.
    pub fn any() -> Self {
        Self {
            os: PropertyMatch::Any,
            ws: PropertyMatch::Any,
            arch: PropertyMatch::Any,
        }
    }

    pub fn matches(&self, os: &str, ws: &str, arch: &str) -> bool {
        self.os.matches(os) && self.ws.matches(ws) && self.arch.matches(arch)
    }
}
