//! Repository Traits
//!
//! Paths handed to these methods have already passed the containment
//! check; implementations do not re-validate them.

use std::path::{Path, PathBuf};

use crate::error::PathTraversalResult;

/// Per-user profile image storage
#[trait_variant::make(ProfileImageStore: Send)]
pub trait LocalProfileImageStore {
    /// Remove `dir` (if present) and create it empty
    async fn recreate_dir(&self, dir: &Path) -> PathTraversalResult<()>;

    /// Create `path` and write `contents`; a partial file is removed on error
    async fn write_file(&self, path: &Path, contents: &[u8]) -> PathTraversalResult<()>;

    /// Entries of `dir`, sorted by file name
    async fn list_dir(&self, dir: &Path) -> PathTraversalResult<Vec<PathBuf>>;

    /// Read the whole file
    async fn read_file(&self, path: &Path) -> PathTraversalResult<Vec<u8>>;
}
