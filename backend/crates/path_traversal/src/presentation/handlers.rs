//! HTTP Handlers

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use kernel::AttackResult;
use platform::header::extract_current_user;

use crate::application::config::PathTraversalConfig;
use crate::application::profile_picture::ProfilePictureUseCase;
use crate::application::upload_profile::{UploadProfileInput, UploadProfileUseCase};
use crate::domain::repository::ProfileImageStore;
use crate::error::{PathTraversalError, PathTraversalResult};

const FILE_FIELD: &str = "uploadedFile";
const NAME_FIELD: &str = "fullName";

/// Shared state for path traversal handlers
#[derive(Clone)]
pub struct PathTraversalAppState<S>
where
    S: ProfileImageStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<PathTraversalConfig>,
}

/// POST /PathTraversal/profile-upload
pub async fn upload_profile<S>(
    State(state): State<PathTraversalAppState<S>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> PathTraversalResult<AttackResult>
where
    S: ProfileImageStore + Clone + Send + Sync + 'static,
{
    let username = extract_current_user(&headers).ok_or(PathTraversalError::MissingUser)?;

    let mut contents = Vec::new();
    let mut full_name = String::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PathTraversalError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some(FILE_FIELD) => {
                contents = field
                    .bytes()
                    .await
                    .map_err(|e| PathTraversalError::Multipart(e.to_string()))?
                    .to_vec();
            }
            Some(NAME_FIELD) => {
                full_name = field
                    .text()
                    .await
                    .map_err(|e| PathTraversalError::Multipart(e.to_string()))?;
            }
            _ => {}
        }
    }

    let use_case = UploadProfileUseCase::new(state.store.clone(), state.config.clone());

    Ok(use_case
        .execute(UploadProfileInput {
            username,
            full_name,
            contents,
        })
        .await)
}

/// GET /PathTraversal/profile-picture
pub async fn profile_picture<S>(
    State(state): State<PathTraversalAppState<S>>,
    headers: HeaderMap,
) -> PathTraversalResult<impl IntoResponse>
where
    S: ProfileImageStore + Clone + Send + Sync + 'static,
{
    let username = extract_current_user(&headers).ok_or(PathTraversalError::MissingUser)?;

    let use_case = ProfilePictureUseCase::new(state.store.clone(), state.config.clone());
    let encoded = use_case.execute(&username).await;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], encoded))
}
