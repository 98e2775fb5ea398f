//! Insecure Deserialization Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::DeserializationConfig;
use crate::domain::registry::TypeRegistry;
use crate::presentation::handlers::{self, DeserializationAppState};

/// Create the insecure deserialization router
pub fn deserialization_router(registry: TypeRegistry, config: DeserializationConfig) -> Router {
    let state = DeserializationAppState {
        registry: Arc::new(registry),
        config: Arc::new(config),
    };

    Router::new()
        .route("/InsecureDeserialization/task", post(handlers::run_task))
        .with_state(state)
}
