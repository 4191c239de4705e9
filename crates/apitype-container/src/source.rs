//! Byte sources backing class files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Supplies the raw bytes of one binary artifact.
///
/// Implementations acquire and release the underlying resource within the
/// call; the returned buffer is owned by the caller. Archive-backed sources
/// live with their container implementations outside this crate.
pub trait ByteSource: Send + Sync {
    fn bytes(&self) -> Result<Vec<u8>>;
}

/// A byte source reading a file from disk on each call.
#[derive(Debug, Clone)]
pub struct FileByteSource {
    path: PathBuf,
}

impl FileByteSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileByteSource {
    fn bytes(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path)
            .with_context(|| format!("failed to read class file {}", self.path.display()))
    }
}

/// An in-memory byte source.
#[derive(Debug, Clone)]
pub struct MemoryByteSource {
    contents: Vec<u8>,
}

impl MemoryByteSource {
    pub fn new(contents: Vec<u8>) -> Self {
        Self { contents }
    }
}

impl ByteSource for MemoryByteSource {
    fn bytes(&self) -> Result<Vec<u8>> {
        Ok(self.contents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_reads_contents() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("A.class");
        std::fs::write(&path, [0xCA, 0xFE, 0xBA, 0xBE])?;

        let source = FileByteSource::new(&path);
        assert_eq!(source.bytes()?, vec![0xCA, 0xFE, 0xBA, 0xBE]);
        Ok(())
    }

    #[test]
    fn test_file_source_error_names_the_path() {
        let source = FileByteSource::new("/nonexistent/B.class");
        let err = source.bytes().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/B.class"));
    }

    #[test]
    fn test_memory_source() -> Result<()> {
        let source = MemoryByteSource::new(vec![1, 2, 3]);
        assert_eq!(source.bytes()?, vec![1, 2, 3]);
        Ok(())
    }
}
