//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use kernel::AttackResult;

use crate::application::config::DeserializationConfig;
use crate::application::run_task::RunTaskUseCase;
use crate::domain::registry::TypeRegistry;
use crate::presentation::dto::TaskForm;

/// Shared state for deserialization handlers
#[derive(Clone)]
pub struct DeserializationAppState {
    pub registry: Arc<TypeRegistry>,
    pub config: Arc<DeserializationConfig>,
}

/// POST /InsecureDeserialization/task
pub async fn run_task(
    State(state): State<DeserializationAppState>,
    Form(form): Form<TaskForm>,
) -> AttackResult {
    let use_case = RunTaskUseCase::new(state.registry.clone(), state.config.clone());
    use_case.execute(&form.token)
}
