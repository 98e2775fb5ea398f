//! Path Traversal Lesson Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::PathTraversalConfig;
use crate::domain::repository::ProfileImageStore;
use crate::infra::filesystem::FsProfileImageStore;
use crate::presentation::handlers::{self, PathTraversalAppState};

/// Create the path traversal router backed by the local filesystem
pub fn path_traversal_router(config: PathTraversalConfig) -> Router {
    path_traversal_router_generic(FsProfileImageStore::new(), config)
}

/// Create a generic path traversal router for any image store
pub fn path_traversal_router_generic<S>(store: S, config: PathTraversalConfig) -> Router
where
    S: ProfileImageStore + Clone + Send + Sync + 'static,
{
    let state = PathTraversalAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/PathTraversal/profile-upload",
            post(handlers::upload_profile::<S>),
        )
        .route(
            "/PathTraversal/profile-picture",
            get(handlers::profile_picture::<S>),
        )
        .with_state(state)
}
