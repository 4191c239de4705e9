//! API annotations and structural fingerprinting.
//!
//! This crate provides:
//! - [`annotations`]: Visibility and restriction flag sets packed into a
//!   single integer for compact storage on every program element
//! - [`fingerprint`]: A streaming accumulator that folds an API description
//!   into one 64-bit fingerprint for whole-component change detection

pub mod annotations;
pub mod fingerprint;

pub use annotations::{ApiAnnotations, Restrictions, Visibility};
pub use fingerprint::StructuralFingerprint;
