//! Local Filesystem Store

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::repository::ProfileImageStore;
use crate::error::PathTraversalResult;

/// Profile images stored as plain files under the lesson home directory
#[derive(Debug, Clone, Default)]
pub struct FsProfileImageStore;

impl FsProfileImageStore {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileImageStore for FsProfileImageStore {
    async fn recreate_dir(&self, dir: &Path) -> PathTraversalResult<()> {
        match fs::remove_dir_all(dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == IoErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::create_dir_all(dir).await?;
        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> PathTraversalResult<()> {
        if let Err(e) = fs::write(path, contents).await {
            if let Err(cleanup) = fs::remove_file(path).await
                && cleanup.kind() != IoErrorKind::NotFound
            {
                tracing::warn!(
                    path = %path.display(),
                    error = %cleanup,
                    "Could not remove partially written file"
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn list_dir(&self, dir: &Path) -> PathTraversalResult<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    async fn read_file(&self, path: &Path) -> PathTraversalResult<Vec<u8>> {
        Ok(fs::read(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_recreate_dir_empties_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("PathTraversal").join("tom");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("old.png"), b"old").unwrap();

        let store = FsProfileImageStore::new();
        store.recreate_dir(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_list_dir_is_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.png", "a.jpg", "b.txt"] {
            std::fs::write(tmp.path().join(name), b"x").unwrap();
        }

        let names: Vec<_> = FsProfileImageStore::new()
            .list_dir(tmp.path())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.txt", "c.png"]);
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails_without_leftovers() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("me.png");

        let result = FsProfileImageStore::new().write_file(&path, b"img").await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = FsProfileImageStore::new()
            .list_dir(&tmp.path().join("nobody"))
            .await;
        assert!(result.is_err());
    }
}
