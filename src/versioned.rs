//! The capability contract through which versioned asset names are resolved.

use anyhow::Result;

/// Capability mapping a source file path to its current published, version-stamped
/// output path.
///
/// The host build environment supplies an implementation: a manifest lookup, a
/// hashing scheme, a caching layer, or a test double. The rewrite engine calls
/// [`versioned_path`](Self::versioned_path) once per non-absolute reference in
/// external mode and never caches or retries; failures are propagated to the caller
/// tagged with the source file and reference that triggered the lookup.
pub trait VersionedAssets {
    /// Return the versioned output path for the given source file path.
    fn versioned_path(&self, file_path: &str) -> Result<String>;
}
