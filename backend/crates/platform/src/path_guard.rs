//! Canonical Path Containment
//!
//! Every file operation driven by user input goes through this module.
//! A candidate path is accepted only if its canonical form is a strict
//! descendant of the canonical base directory.
//!
//! ## Rules
//! - Symlinks and `.`/`..` segments are resolved before comparing
//! - Comparison is component-wise: `/base-evil` is not inside `/base`
//! - The base directory itself is not a descendant of itself
//! - Any I/O error while resolving rejects the path

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Path containment errors
#[derive(Debug, Error)]
pub enum PathGuardError {
    /// Canonical path is not strictly inside the base directory
    #[error("Path is outside of the base directory: {path}")]
    OutsideBase { path: String },

    /// Segment is not exactly one plain path component
    #[error("Invalid path segment: {segment}")]
    InvalidSegment { segment: String },

    /// Path could not be resolved
    #[error("Path could not be resolved: {0}")]
    Io(#[from] io::Error),
}

/// Canonicalize a path that may not exist yet
///
/// Existing prefixes are resolved through the filesystem (following
/// symlinks). Components past the last existing directory are applied
/// lexically, so a file about to be created resolves to where it will
/// actually land.
pub fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(segment) => {
                resolved.push(segment);
                match std::fs::symlink_metadata(&resolved) {
                    Ok(_) => resolved = std::fs::canonicalize(&resolved)?,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(resolved)
}

/// Check that `candidate` resolves strictly inside `base`
///
/// Returns the canonical candidate on success.
pub fn ensure_within(base: &Path, candidate: &Path) -> Result<PathBuf, PathGuardError> {
    let canonical_base = canonicalize_lenient(base)?;
    let canonical_candidate = canonicalize_lenient(candidate)?;

    if canonical_candidate != canonical_base && canonical_candidate.starts_with(&canonical_base) {
        Ok(canonical_candidate)
    } else {
        Err(PathGuardError::OutsideBase {
            path: canonical_candidate.to_string_lossy().into_owned(),
        })
    }
}

/// Join an untrusted segment onto `base` and check containment
///
/// An absolute `untrusted` value replaces `base` entirely when joined,
/// which the containment check then rejects.
pub fn resolve_within(
    base: &Path,
    untrusted: impl AsRef<Path>,
) -> Result<PathBuf, PathGuardError> {
    ensure_within(base, &base.join(untrusted))
}

/// Resolve a direct child of `base` named by an untrusted value
///
/// `name` must be a single normal component: no separators, no `.` or
/// `..`, not absolute. The result is also checked for containment, so a
/// symlinked child pointing elsewhere is rejected.
pub fn resolve_child(base: &Path, name: &str) -> Result<PathBuf, PathGuardError> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(segment)), None) if segment == name
    );

    if !single_normal || name.chars().any(std::path::is_separator) {
        return Err(PathGuardError::InvalidSegment {
            segment: name.to_string(),
        });
    }

    resolve_within(base, name)
}

/// True when the file name has one of the given extensions (case-sensitive)
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
