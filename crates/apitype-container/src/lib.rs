//! Binary type-artifact containers and change detection.
//!
//! This crate provides:
//! - [`source`]: Byte sources backing individual class files
//! - [`stamp`]: Modification stamps (content checksums) for cheap
//!   changed-since-last-build checks
//! - [`class_file`]: The class-file abstraction and the external
//!   structure-builder seam
//! - [`container`]: Leaf and composite containers resolving qualified type
//!   names with deterministic first-match precedence
//! - [`deps`]: Dependency-list ingestion (archive paths from a text file)

pub mod class_file;
pub mod container;
pub mod deps;
pub mod source;
pub mod stamp;

pub use class_file::{ClassFile, StructureBuilder};
pub use container::{CompositeContainer, DirectoryContainer, MemoryContainer, TypeContainer};
pub use deps::scan_dependency_list;
pub use source::{ByteSource, FileByteSource, MemoryByteSource};
pub use stamp::ModificationStamp;
