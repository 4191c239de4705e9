//! End-to-end tests for the structure-resolution pipeline over real files.

use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use apitype::{
    ClassFile, CompositeContainer, DirectoryContainer, StructureBuilder, StructureResolver,
    TypeContainer,
};

/// Builder standing in for the external type-structure builder: records how
/// often it ran and keeps the bytes it was given.
struct RecordingBuilder {
    builds: AtomicUsize,
}

impl RecordingBuilder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            builds: AtomicUsize::new(0),
        })
    }

    fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl StructureBuilder for RecordingBuilder {
    type Structure = Vec<u8>;

    fn build_type_structure(
        &self,
        bytes: &[u8],
        _origin: &str,
        _class_file: &ClassFile,
    ) -> Result<Self::Structure> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(bytes.to_vec())
    }
}

fn write_class(root: &Path, qualified_name: &str, bytes: &[u8]) -> Result<()> {
    let mut path = root.to_path_buf();
    for segment in qualified_name.split('.') {
        path.push(segment);
    }
    path.set_extension("class");
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(&path, bytes)?;
    Ok(())
}

#[test]
fn rebuilds_only_when_content_changes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_class(temp_dir.path(), "org.example.Widget", b"v1")?;

    let container: Arc<dyn TypeContainer> = Arc::new(DirectoryContainer::new(temp_dir.path()));
    let builder = RecordingBuilder::new();
    let resolver = StructureResolver::new(container, Arc::clone(&builder));

    let first = resolver.resolve_structure("org.example.Widget")?.unwrap();
    assert_eq!(*first, b"v1".to_vec());
    assert_eq!(builder.builds(), 1);

    // Same content on disk: the cached structure is reused.
    resolver.resolve_structure("org.example.Widget")?;
    assert_eq!(builder.builds(), 1);

    // Rewriting with identical bytes still skips the rebuild.
    write_class(temp_dir.path(), "org.example.Widget", b"v1")?;
    resolver.resolve_structure("org.example.Widget")?;
    assert_eq!(builder.builds(), 1);

    // Actual content change triggers a rebuild.
    write_class(temp_dir.path(), "org.example.Widget", b"v2 changed")?;
    let rebuilt = resolver.resolve_structure("org.example.Widget")?.unwrap();
    assert_eq!(*rebuilt, b"v2 changed".to_vec());
    assert_eq!(builder.builds(), 2);
    Ok(())
}

#[test]
fn composite_shadowing_is_deterministic() -> Result<()> {
    let dir_a = TempDir::new()?;
    let dir_b = TempDir::new()?;
    write_class(dir_a.path(), "x.Y", b"from A")?;
    write_class(dir_b.path(), "x.Y", b"from B")?;
    write_class(dir_b.path(), "x.OnlyB", b"only B")?;

    let children: Vec<Arc<dyn TypeContainer>> = vec![
        Arc::new(DirectoryContainer::new(dir_a.path())),
        Arc::new(DirectoryContainer::new(dir_b.path())),
    ];
    let composite: Arc<dyn TypeContainer> =
        Arc::new(CompositeContainer::new("test-deps", children));

    let builder = RecordingBuilder::new();
    let resolver = StructureResolver::new(composite, builder);

    let shadowed = resolver.resolve_structure("x.Y")?.unwrap();
    assert_eq!(*shadowed, b"from A".to_vec());

    let only_b = resolver.resolve_structure("x.OnlyB")?.unwrap();
    assert_eq!(*only_b, b"only B".to_vec());

    assert!(resolver.resolve_structure("x.Nowhere")?.is_none());
    Ok(())
}

#[test]
fn concurrent_resolution_is_safe() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for i in 0..20 {
        write_class(temp_dir.path(), &format!("p.C{}", i), &[i as u8; 16])?;
    }

    let container: Arc<dyn TypeContainer> = Arc::new(DirectoryContainer::new(temp_dir.path()));
    let builder = RecordingBuilder::new();
    let resolver = Arc::new(StructureResolver::with_space_limit(
        container,
        Arc::clone(&builder),
        8,
    ));

    let mut handles = Vec::new();
    for t in 0..4 {
        let resolver = Arc::clone(&resolver);
        handles.push(std::thread::spawn(move || -> Result<()> {
            for round in 0..10 {
                let name = format!("p.C{}", (t * 5 + round) % 20);
                let structure = resolver.resolve_structure(&name)?.unwrap();
                assert_eq!(structure.len(), 16);
                let _ = resolver.cached_names();
            }
            Ok(())
        }));
    }
    for handle in handles {
        handle.join().unwrap()?;
    }

    // Every resolution produced a structure; the cache stayed bounded.
    assert!(builder.builds() >= 20);
    assert!(resolver.cached_names().len() <= 8 + 4);
    Ok(())
}
