//! SQL Injection Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::domain::repository::UserDataRepository;
use crate::infra::postgres::PgUserDataRepository;
use crate::presentation::handlers::{self, SqlInjectionAppState};

/// Create the SQL injection router with PostgreSQL repository
pub fn sql_injection_router(repo: PgUserDataRepository) -> Router {
    sql_injection_router_generic(repo)
}

/// Create a generic SQL injection router for any repository implementation
pub fn sql_injection_router_generic<R>(repo: R) -> Router
where
    R: UserDataRepository + Clone + Send + Sync + 'static,
{
    let state = SqlInjectionAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/SqlInjection/assignment5b", post(handlers::assignment5b::<R>))
        .route(
            "/SqlInjectionAdvanced/attack6a",
            post(handlers::attack6a::<R>),
        )
        .with_state(state)
}
