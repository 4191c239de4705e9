//! Component versions and dependency range matching.
//!
//! This crate provides:
//! - [`version`]: Three-part (`major.minor.micro`) versions with an optional
//!   string qualifier, ordered lexicographically across the four fields
//! - [`range`]: Bracketed version intervals (`[1.0.0,2.0.0)`) and bare
//!   lower-bound ranges used for dependency compatibility checks
//! - [`component`]: Required-component descriptions pairing an identifier
//!   with a range plus optional/exported flags
//! - [`increment`]: Fail-fast version increment policies
//! - [`environment`]: Explicit any-or-exact matching for system-property
//!   axes (operating system, windowing system, architecture)

pub mod component;
pub mod environment;
pub mod increment;
pub mod range;
pub mod version;

pub use component::RequiredComponentDescription;
pub use environment::{EnvironmentFilter, PropertyMatch};
pub use increment::{IncrementPolicy, VersionSegment};
pub use range::VersionRange;
pub use version::Version;
