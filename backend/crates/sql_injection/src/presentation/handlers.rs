//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use kernel::AttackResult;

use crate::application::assignment5b::{Assignment5bInput, Assignment5bUseCase};
use crate::application::attack6a::Attack6aUseCase;
use crate::domain::repository::UserDataRepository;
use crate::error::SqlInjectionResult;
use crate::presentation::dto::{Assignment5bForm, Attack6aForm};

/// Shared state for SQL injection handlers
#[derive(Clone)]
pub struct SqlInjectionAppState<R>
where
    R: UserDataRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /SqlInjection/assignment5b
pub async fn assignment5b<R>(
    State(state): State<SqlInjectionAppState<R>>,
    Form(form): Form<Assignment5bForm>,
) -> SqlInjectionResult<AttackResult>
where
    R: UserDataRepository + Clone + Send + Sync + 'static,
{
    let use_case = Assignment5bUseCase::new(state.repo.clone());

    use_case
        .execute(Assignment5bInput {
            userid: form.userid,
            login_count: form.login_count,
        })
        .await
}

/// POST /SqlInjectionAdvanced/attack6a
pub async fn attack6a<R>(
    State(state): State<SqlInjectionAppState<R>>,
    Form(form): Form<Attack6aForm>,
) -> SqlInjectionResult<AttackResult>
where
    R: UserDataRepository + Clone + Send + Sync + 'static,
{
    let use_case = Attack6aUseCase::new(state.repo.clone());

    use_case.execute(&form.userid_6a).await
}
