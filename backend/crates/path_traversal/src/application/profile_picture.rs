//! Profile Picture Use Case
//!
//! Returns the user's picture as base64. Any rejection or I/O failure
//! yields the bundled default image instead of an error.

use std::path::PathBuf;
use std::sync::Arc;

use platform::path_guard;

use crate::application::config::PathTraversalConfig;
use crate::domain::repository::ProfileImageStore;

const DEFAULT_IMAGE: &[u8] = include_bytes!("../../assets/account.png");

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Base64 of the bundled default profile image
pub fn default_image() -> String {
    platform::crypto::to_base64(DEFAULT_IMAGE)
}

/// Profile Picture Use Case
pub struct ProfilePictureUseCase<S>
where
    S: ProfileImageStore,
{
    store: Arc<S>,
    config: Arc<PathTraversalConfig>,
}

impl<S> ProfilePictureUseCase<S>
where
    S: ProfileImageStore,
{
    pub fn new(store: Arc<S>, config: Arc<PathTraversalConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, username: &str) -> String {
        match self.find_picture(username).await {
            Some(encoded) => encoded,
            None => default_image(),
        }
    }

    async fn find_picture(&self, username: &str) -> Option<String> {
        let user_dir = match self.config.user_directory(username) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Profile directory rejected");
                return None;
            }
        };

        let entries = self.store.list_dir(&user_dir).await.ok()?;
        let picture: PathBuf = entries
            .into_iter()
            .find(|path| path_guard::has_extension(path, IMAGE_EXTENSIONS))?;

        // Re-check each discovered file; a symlink may point elsewhere
        let picture = match path_guard::ensure_within(&user_dir, &picture) {
            Ok(picture) => picture,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Profile picture rejected");
                return None;
            }
        };

        let bytes = self.store.read_file(&picture).await.ok()?;
        Some(platform::crypto::to_base64(&bytes))
    }
}
