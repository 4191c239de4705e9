//! Modification stamps: content checksums for change detection.

use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::xxh3_64;

/// A content fingerprint over the exact byte sequence of an artifact, with
/// the bytes retained for downstream use.
///
/// Two stamps with equal fingerprints are treated as structurally identical
/// even when one has dropped its content snapshot, so equality and hashing
/// are defined on the fingerprint alone. Checksum collisions are accepted:
/// fingerprint equality is a build-skipping heuristic, not a guarantee of
/// byte-for-byte identity.
#[derive(Debug, Clone)]
pub struct ModificationStamp {
    fingerprint: u64,
    content: Option<Vec<u8>>,
}

impl ModificationStamp {
    /// Stamp a byte buffer, retaining it.
    pub fn of(bytes: Vec<u8>) -> Self {
        Self {
            fingerprint: xxh3_64(&bytes),
            content: Some(bytes),
        }
    }

    /// The fail-open stamp: fingerprint 0, no content. Returned instead of
    /// an error when the underlying bytes cannot be read, so callers degrade
    /// to "always rebuild" rather than failing.
    pub fn sentinel() -> Self {
        Self {
            fingerprint: 0,
            content: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.fingerprint == 0 && self.content.is_none()
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// The retained bytes, if this stamp still holds them.
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Drop the retained bytes to save memory; the fingerprint is kept.
    pub fn without_content(self) -> Self {
        Self {
            fingerprint: self.fingerprint,
            content: None,
        }
    }
}

impl PartialEq for ModificationStamp {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl Eq for ModificationStamp {}

impl Hash for ModificationStamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
    }
}
