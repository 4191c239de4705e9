//! Whole-component structural fingerprinting.
//!
//! Folds a sequence of API elements into a single 64-bit checksum (XXH3,
//! streaming). Two descriptions with equal fingerprints are treated as
//! structurally identical; collisions are accepted as a speed/memory
//! trade-off.
//!
//! The fingerprint is sensitive to visiting order: callers must fold
//! elements in a canonical traversal (e.g. lexicographic by qualified name)
//! and only ever compare fingerprints produced by the same traversal.

use xxhash_rust::xxh3::Xxh3;

use crate::annotations::ApiAnnotations;

/// Streaming fingerprint accumulator.
///
/// A fresh, locally owned accumulator per computation; there is no shared
/// instance to synchronize on.
#[derive(Default)]
pub struct StructuralFingerprint {
    hasher: Xxh3,
}

impl StructuralFingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one element in. Per element, the accumulator consumes in order:
    /// the identifying signature bytes if present, the simple name bytes if
    /// present, the packed restriction byte, the packed visibility byte.
    pub fn fold(
        &mut self,
        signature: Option<&str>,
        name: Option<&str>,
        annotations: ApiAnnotations,
    ) {
        if let Some(signature) = signature {
            self.hasher.update(signature.as_bytes());
        }
        if let Some(name) = name {
            self.hasher.update(name.as_bytes());
        }
        // Both fields fit a byte: restrictions are 5 bits, visibility 4.
        self.hasher.update(&[annotations.restrictions().bits() as u8]);
        self.hasher.update(&[annotations.visibility().bits() as u8]);
    }

    /// The running checksum over everything folded so far.
    pub fn finish(&self) -> u64 {
        self.hasher.digest()
    }
}
