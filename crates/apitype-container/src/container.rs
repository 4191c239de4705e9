//! Type containers: ordered lookup sources for qualified names.
//!
//! A leaf container resolves a qualified name against one backing source (a
//! class-file directory, an in-memory table, an archive living behind an
//! external implementation). A [`CompositeContainer`] tries an ordered list
//! of children and returns the first hit, so earlier children shadow later
//! ones for names present in both.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::class_file::ClassFile;
use crate::source::{FileByteSource, MemoryByteSource};

/// Resolves qualified type names to class files.
///
/// A miss is a normal outcome (`None`), indistinguishable from "does not
/// exist".
pub trait TypeContainer: Send + Sync {
    fn resolve(&self, qualified_name: &str) -> Option<ClassFile>;

    /// Diagnostic label identifying where this container's membership came
    /// from. Orthogonal to resolution order.
    fn origin(&self) -> &str;
}

/// A leaf container over a directory of class files.
///
/// Resolves `a.b.C` to `<root>/a/b/C.class`.
pub struct DirectoryContainer {
    root: PathBuf,
    origin: String,
}

impl DirectoryContainer {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let origin = root.display().to_string();
        Self { root, origin }
    }

    fn path_for(&self, qualified_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in qualified_name.split('.') {
            path.push(segment);
        }
        path.set_extension("class");
        path
    }
}

impl TypeContainer for DirectoryContainer {
    fn resolve(&self, qualified_name: &str) -> Option<ClassFile> {
        let path = self.path_for(qualified_name);
        if !path.is_file() {
            return None;
        }
        Some(ClassFile::new(
            qualified_name,
            &self.origin,
            Arc::new(FileByteSource::new(path)),
        ))
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

/// A leaf container over an in-memory name → bytes table.
pub struct MemoryContainer {
    origin: String,
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryContainer {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, qualified_name: &str, bytes: Vec<u8>) {
        self.entries.insert(qualified_name.to_string(), bytes);
    }
}

impl TypeContainer for MemoryContainer {
    fn resolve(&self, qualified_name: &str) -> Option<ClassFile> {
        let bytes = self.entries.get(qualified_name)?;
        Some(ClassFile::new(
            qualified_name,
            &self.origin,
            Arc::new(MemoryByteSource::new(bytes.clone())),
        ))
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

type ChildProvider = Box<dyn Fn() -> Vec<Arc<dyn TypeContainer>> + Send + Sync>;

/// An ordered aggregate of child containers with first-match-wins
/// resolution.
///
/// The child list may be given eagerly or computed lazily by a provider; the
/// provider runs at most once per instance unless
/// [`invalidate`](CompositeContainer::invalidate) discards the computed
/// list. The internal lock is released before any child is consulted.
pub struct CompositeContainer {
    origin: String,
    provider: ChildProvider,
    children: Mutex<Option<Vec<Arc<dyn TypeContainer>>>>,
}

impl CompositeContainer {
    /// Create a composite over a fixed child list.
    pub fn new(origin: &str, children: Vec<Arc<dyn TypeContainer>>) -> Self {
        Self {
            origin: origin.to_string(),
            provider: Box::new(move || children.clone()),
            children: Mutex::new(None),
        }
    }

    /// Create a composite whose children are computed on first use.
    pub fn with_provider<F>(origin: &str, provider: F) -> Self
    where
        F: Fn() -> Vec<Arc<dyn TypeContainer>> + Send + Sync + 'static,
    {
        Self {
            origin: origin.to_string(),
            provider: Box::new(provider),
            children: Mutex::new(None),
        }
    }

    /// The (possibly lazily computed) child list, in resolution order.
    pub fn children(&self) -> Vec<Arc<dyn TypeContainer>> {
        let mut children = self.children.lock();
        children
            .get_or_insert_with(|| (self.provider)())
            .clone()
    }

    /// Discard the computed child list; the provider runs again on next use.
    pub fn invalidate(&self) {
        *self.children.lock() = None;
    }
}

impl TypeContainer for CompositeContainer {
    fn resolve(&self, qualified_name: &str) -> Option<ClassFile> {
        // Clone the list out so no lock is held across child resolution.
        for child in self.children() {
            if let Some(class_file) = child.resolve(qualified_name) {
                return Some(class_file);
            }
        }
        None
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
