//! Upload Profile Picture Use Case
//!
//! The upload directory is `home/PathTraversal/<user>`, where `<user>` must
//! be a single plain folder name. The file name
//! comes from the request and is only used after its canonical form has
//! been checked to lie strictly inside that directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kernel::AttackResult;
use platform::path_guard::{self, PathGuardError};

use super::{ASSIGNMENT, LESSON_DIRECTORY};
use crate::application::config::PathTraversalConfig;
use crate::domain::repository::ProfileImageStore;

/// Input DTO for profile upload
#[derive(Debug, Clone)]
pub struct UploadProfileInput {
    pub username: String,
    pub full_name: String,
    pub contents: Vec<u8>,
}

/// Upload Profile Picture Use Case
pub struct UploadProfileUseCase<S>
where
    S: ProfileImageStore,
{
    store: Arc<S>,
    config: Arc<PathTraversalConfig>,
}

impl<S> UploadProfileUseCase<S>
where
    S: ProfileImageStore,
{
    pub fn new(store: Arc<S>, config: Arc<PathTraversalConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: UploadProfileInput) -> AttackResult {
        if input.contents.is_empty() {
            return AttackResult::failed(ASSIGNMENT)
                .feedback("path-traversal-profile-empty-file")
                .build();
        }
        if input.full_name.is_empty() {
            return AttackResult::failed(ASSIGNMENT)
                .feedback("path-traversal-profile-empty-name")
                .build();
        }

        let upload_dir = match self.config.user_directory(&input.username) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!(username = %input.username, error = %e, "Invalid username");
                return AttackResult::failed(ASSIGNMENT)
                    .output("Invalid username")
                    .build();
            }
        };

        if let Err(e) = self.store.recreate_dir(&upload_dir).await {
            return AttackResult::failed(ASSIGNMENT).output(e.to_string()).build();
        }

        let target = match path_guard::resolve_within(&upload_dir, &input.full_name) {
            Ok(target) => target,
            Err(PathGuardError::OutsideBase { path }) => {
                tracing::warn!(
                    username = %input.username,
                    full_name = %input.full_name,
                    resolved = %path,
                    "Upload target escapes the user directory"
                );
                return AttackResult::failed(ASSIGNMENT)
                    .output("File is outside of the target directory")
                    .build();
            }
            Err(e) => {
                return AttackResult::failed(ASSIGNMENT).output(e.to_string()).build();
            }
        };

        if let Err(e) = self.store.write_file(&target, &input.contents).await {
            return AttackResult::failed(ASSIGNMENT).output(e.to_string()).build();
        }

        if let Some(parent) = attempt_directory(&upload_dir, &target) {
            return solved_it(&parent, &target);
        }

        tracing::info!(
            username = %input.username,
            path = %target.display(),
            "Profile picture updated"
        );

        AttackResult::information_message(ASSIGNMENT)
            .feedback("path-traversal-profile-updated")
            .feedback_args([target.display().to_string()])
            .build()
    }
}

/// Parent directory of the written file when it is not the upload directory
fn attempt_directory(upload_dir: &Path, target: &Path) -> Option<PathBuf> {
    let parent = target.parent()?;
    let parent = path_guard::canonicalize_lenient(parent).ok()?;
    (parent != upload_dir).then_some(parent)
}

fn solved_it(parent: &Path, target: &Path) -> AttackResult {
    let lands_in_lesson_dir = parent
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(LESSON_DIRECTORY))
        .unwrap_or(false);

    if lands_in_lesson_dir {
        tracing::info!(path = %target.display(), "Path traversal lesson solved");
        return AttackResult::success(ASSIGNMENT).build();
    }

    AttackResult::failed(ASSIGNMENT)
        .attempt_was_made()
        .feedback("path-traversal-profile-attempt")
        .feedback_args([target.display().to_string()])
        .build()
}
