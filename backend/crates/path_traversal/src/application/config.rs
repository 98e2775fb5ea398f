//! Application Configuration

use std::path::PathBuf;

use platform::path_guard::{self, PathGuardError};

use super::LESSON_DIRECTORY;

/// Path traversal lesson configuration
#[derive(Debug, Clone)]
pub struct PathTraversalConfig {
    /// Trusted base directory; every lesson file lives below it
    pub home_directory: PathBuf,
}

impl Default for PathTraversalConfig {
    fn default() -> Self {
        Self {
            home_directory: PathBuf::from("/var/lib/webgoat"),
        }
    }
}

impl PathTraversalConfig {
    pub fn new(home_directory: impl Into<PathBuf>) -> Self {
        Self {
            home_directory: home_directory.into(),
        }
    }

    /// Create config for development (home under the system temp dir)
    pub fn development() -> Self {
        Self::new(std::env::temp_dir().join("webgoat"))
    }

    /// Directory holding every user's upload folder
    pub fn lesson_directory(&self) -> PathBuf {
        self.home_directory.join(LESSON_DIRECTORY)
    }

    /// Canonical upload folder for `username`
    ///
    /// The username must name exactly one folder strictly inside the
    /// lesson directory.
    pub fn user_directory(&self, username: &str) -> Result<PathBuf, PathGuardError> {
        path_guard::resolve_child(&self.lesson_directory(), username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_user_directory_is_below_lesson_directory() {
        let tmp = TempDir::new().unwrap();
        let config = PathTraversalConfig::new(tmp.path());

        let dir = config.user_directory("tom").unwrap();
        assert!(dir.ends_with("PathTraversal/tom"));

        for username in [".", "..", "../other_lesson", "a/../b", "tom/sub"] {
            assert!(config.user_directory(username).is_err(), "{username:?}");
        }
    }
}
