//! The structure-resolution pipeline.
//!
//! Ties the pieces together: a [`TypeContainer`] resolves a qualified name
//! to a class file, the class file's bytes are stamped, and the stamp
//! decides whether the cached structure can be reused or the external
//! builder must run again. Built structures live in an
//! [`OverflowingLruCache`] keyed by qualified name.
//!
//! Structure building always happens outside every lock held by this layer,
//! so a builder that re-enters the resolver cannot deadlock it.

use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use apitype_cache::OverflowingLruCache;
use apitype_container::{StructureBuilder, TypeContainer};

/// Default number of cached structures before overflow handling kicks in.
pub const DEFAULT_SPACE_LIMIT: usize = 1000;

/// Resolves qualified names to built type structures, rebuilding only when
/// an artifact's content fingerprint changed since the last build.
pub struct StructureResolver<B: StructureBuilder> {
    container: Arc<dyn TypeContainer>,
    builder: B,
    cache: OverflowingLruCache<String, Arc<B::Structure>>,
    /// Qualified name -> fingerprint the cached structure was built from.
    fingerprints: Mutex<HashMap<String, u64>>,
}

impl<B: StructureBuilder> StructureResolver<B> {
    pub fn new(container: Arc<dyn TypeContainer>, builder: B) -> Self {
        Self::with_space_limit(container, builder, DEFAULT_SPACE_LIMIT)
    }

    pub fn with_space_limit(
        container: Arc<dyn TypeContainer>,
        builder: B,
        space_limit: usize,
    ) -> Self {
        Self {
            container,
            builder,
            cache: OverflowingLruCache::new(space_limit),
            fingerprints: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a qualified name to its type structure.
    ///
    /// `Ok(None)` is a resolution miss. A cached structure is returned
    /// without rebuilding when the artifact's fingerprint is unchanged; a
    /// sentinel stamp (unreadable source at stamping time) always forces a
    /// rebuild attempt, and an unreadable source at build time is an error.
    pub fn resolve_structure(&self, qualified_name: &str) -> Result<Option<Arc<B::Structure>>> {
        let Some(class_file) = self.container.resolve(qualified_name) else {
            return Ok(None);
        };

        let stamp = class_file.modification_stamp();
        if !stamp.is_sentinel() {
            let unchanged = self
                .fingerprints
                .lock()
                .get(qualified_name)
                .is_some_and(|recorded| *recorded == stamp.fingerprint());
            if unchanged {
                if let Some(structure) = self.cache.get(&qualified_name.to_string()) {
                    return Ok(Some(structure));
                }
            }
        }

        // Build outside every lock. The stamp retains the bytes it hashed,
        // which saves a second read on the common path.
        let structure = match stamp.content() {
            Some(bytes) => {
                self.builder
                    .build_type_structure(bytes, class_file.origin(), &class_file)?
            }
            None => class_file.build_structure(&self.builder)?,
        };
        let structure = Arc::new(structure);

        self.cache
            .put(qualified_name.to_string(), Arc::clone(&structure));
        self.fingerprints
            .lock()
            .insert(qualified_name.to_string(), stamp.fingerprint());
        Ok(Some(structure))
    }

    /// Drop all cached structures and recorded fingerprints.
    pub fn flush(&self) {
        self.cache.flush();
        self.fingerprints.lock().clear();
    }

    /// Change the structure cache's space limit (may evict immediately).
    pub fn set_space_limit(&self, space_limit: usize) {
        self.cache.set_space_limit(space_limit);
    }

    /// Qualified names of currently cached structures, most recent first.
    pub fn cached_names(&self) -> Vec<String> {
        self.cache.keys_snapshot()
    }

    pub fn container(&self) -> &Arc<dyn TypeContainer> {
        &self.container
    }
}
