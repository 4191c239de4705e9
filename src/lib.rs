//! apitype: binary type-artifact resolution and change detection.
//!
//! The core of an API-compatibility tool:
//!
//! - **Containers**: Uniform resolution of qualified type names across
//!   heterogeneous, possibly overlapping binary sources with deterministic
//!   first-match precedence
//! - **Change detection**: Content stamps over class-file bytes and a
//!   structural fingerprint over whole API descriptions, so unchanged
//!   artifacts skip rebuilding
//! - **Bounded caching**: A concurrency-safe LRU cache with overflow
//!   tolerance holding built type structures
//! - **Version matching**: Interval-based version ranges and
//!   required-component descriptions for dependency compatibility checks
//!
//! See [`pipeline`] for the resolver that wires these together.

pub mod pipeline;

pub use pipeline::StructureResolver;

pub use apitype_annotation::{ApiAnnotations, Restrictions, StructuralFingerprint, Visibility};
pub use apitype_cache::OverflowingLruCache;
pub use apitype_container::{
    scan_dependency_list, ByteSource, ClassFile, CompositeContainer, DirectoryContainer,
    MemoryContainer, ModificationStamp, StructureBuilder, TypeContainer,
};
pub use apitype_version::{
    EnvironmentFilter, IncrementPolicy, PropertyMatch, RequiredComponentDescription, Version,
    VersionRange, VersionSegment,
};
