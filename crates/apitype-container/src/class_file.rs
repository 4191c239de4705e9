//! The class-file abstraction and the structure-builder seam.

use anyhow::Result;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::source::ByteSource;
use crate::stamp::ModificationStamp;

/// Builds an opaque type structure from raw class-file bytes.
///
/// This is the external collaborator boundary: the container layer never
/// interprets the bytes itself. Implementations receive the owning
/// container's origin and the class file as context.
pub trait StructureBuilder: Send + Sync {
    type Structure;

    fn build_type_structure(
        &self,
        bytes: &[u8],
        origin: &str,
        class_file: &ClassFile,
    ) -> Result<Self::Structure>;
}

impl<B: StructureBuilder + ?Sized> StructureBuilder for Arc<B> {
    type Structure = B::Structure;

    fn build_type_structure(
        &self,
        bytes: &[u8],
        origin: &str,
        class_file: &ClassFile,
    ) -> Result<Self::Structure> {
        (**self).build_type_structure(bytes, origin, class_file)
    }
}

/// One binary type artifact resolved out of a container.
///
/// Bytes are obtained lazily from the backing source; the modification
/// stamp is computed on first use and cached until invalidated.
pub struct ClassFile {
    qualified_name: String,
    origin: String,
    source: Arc<dyn ByteSource>,
    stamp: Mutex<Option<ModificationStamp>>,
}

impl ClassFile {
    pub fn new(qualified_name: &str, origin: &str, source: Arc<dyn ByteSource>) -> Self {
        Self {
            qualified_name: qualified_name.to_string(),
            origin: origin.to_string(),
            source,
            stamp: Mutex::new(None),
        }
    }

    /// The fully qualified type name this artifact was resolved under.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Diagnostic label of the container this artifact came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Read the raw bytes. I/O failures surface to the caller.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        self.source.bytes()
    }

    /// The artifact's modification stamp.
    ///
    /// Fail-open: if the bytes cannot be read, the failure is logged and the
    /// sentinel stamp is returned, which downstream change detection treats
    /// as "always rebuild". Successful stamps are cached; the sentinel is
    /// not, so a transient failure does not stick.
    pub fn modification_stamp(&self) -> ModificationStamp {
        if let Some(stamp) = self.stamp.lock().as_ref() {
            return stamp.clone();
        }
        match self.bytes() {
            Ok(bytes) => {
                let stamp = ModificationStamp::of(bytes);
                *self.stamp.lock() = Some(stamp.clone());
                stamp
            }
            Err(err) => {
                warn!(
                    class_file = %self.qualified_name,
                    origin = %self.origin,
                    error = %err,
                    "failed to stamp class file, substituting sentinel"
                );
                ModificationStamp::sentinel()
            }
        }
    }

    /// Discard the cached stamp so the next call re-reads the source.
    pub fn invalidate_stamp(&self) {
        *self.stamp.lock() = None;
    }

    /// Build this artifact's type structure via the external builder.
    pub fn build_structure<B: StructureBuilder>(&self, builder: &B) -> Result<B::Structure> {
        let bytes = self.bytes()?;
        builder.build_type_structure(&bytes, &self.origin, self)
    }
}

impl fmt::Debug for ClassFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassFile")
            .field("qualified_name", &self.qualified_name)
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FileByteSource, MemoryByteSource};
    use tempfile::TempDir;

    struct LengthBuilder;

    impl StructureBuilder for LengthBuilder {
        type Structure = usize;

        fn build_type_structure(
            &self,
            bytes: &[u8],
            _origin: &str,
            _class_file: &ClassFile,
        ) -> Result<Self::Structure> {
            Ok(bytes.len())
        }
    }

    fn memory_class_file(bytes: Vec<u8>) -> ClassFile {
        ClassFile::new("x.Y", "test-origin", Arc::new(MemoryByteSource::new(bytes)))
    }

    #[test]
    fn test_identity_and_origin() {
        let cf = memory_class_file(vec![1]);
        assert_eq!(cf.qualified_name(), "x.Y");
        assert_eq!(cf.origin(), "test-origin");
    }

    #[test]
    fn test_stamp_is_cached_until_invalidated() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("Y.class");
        std::fs::write(&path, b"v1")?;

        let cf = ClassFile::new("x.Y", "dir", Arc::new(FileByteSource::new(&path)));
        let first = cf.modification_stamp();

        // The cached stamp survives a content change on disk.
        std::fs::write(&path, b"v2 with different length")?;
        assert_eq!(cf.modification_stamp(), first);

        cf.invalidate_stamp();
        assert_ne!(cf.modification_stamp(), first);
        Ok(())
    }

    #[test]
    fn test_unreadable_source_yields_sentinel_not_error() {
        let cf = ClassFile::new(
            "x.Y",
            "dir",
            Arc::new(FileByteSource::new("/nonexistent/Y.class")),
        );
        let stamp = cf.modification_stamp();
        assert!(stamp.is_sentinel());
        // bytes() itself still surfaces the failure.
        assert!(cf.bytes().is_err());
    }

    #[test]
    fn test_sentinel_is_not_cached() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("Z.class");

        let cf = ClassFile::new("x.Z", "dir", Arc::new(FileByteSource::new(&path)));
        assert!(cf.modification_stamp().is_sentinel());

        // Once the file appears, stamping recovers without invalidation.
        std::fs::write(&path, b"now present")?;
        assert!(!cf.modification_stamp().is_sentinel());
        Ok(())
    }

    #[test]
    fn test_build_structure_delegates() -> Result<()> {
        let cf = memory_class_file(vec![0; 42]);
        assert_eq!(cf.build_structure(&LengthBuilder)?, 42);
        Ok(())
    }
}
