//! Version increment policies.
//!
//! Used by release tooling that bumps a component version when its API
//! fingerprint changes. The amount is validated at construction so that a
//! misconfigured policy fails before any version is touched.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Which numeric segment an [`IncrementPolicy`] bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionSegment {
    Major,
    Minor,
    Micro,
}

/// A validated "bump segment X by N" policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementPolicy {
    segment: VersionSegment,
    amount: u32,
}

impl IncrementPolicy {
    /// Create a policy. A zero amount is a configuration error.
    pub fn new(segment: VersionSegment, amount: u32) -> Result<Self> {
        if amount == 0 {
            bail!("invalid increment amount 0: must be positive");
        }
        Ok(Self { segment, amount })
    }

    pub fn segment(&self) -> VersionSegment {
        self.segment
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Apply the bump: lower segments reset to zero and the qualifier is
    /// dropped, matching how release versions are derived.
    pub fn apply(&self, version: &Version) -> Version {
        match self.segment {
            VersionSegment::Major => Version::new(version.major + self.amount, 0, 0),
            VersionSegment::Minor => {
                Version::new(version.major, version.minor + self.amount, 0)
            }
            VersionSegment::Micro => {
                Version::new(version.major, version.minor, version.micro + self.amount)
            }
        }
    }
}
