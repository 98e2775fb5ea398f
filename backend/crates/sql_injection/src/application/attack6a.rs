//! Advanced lesson 6a: lookup by last name

use std::sync::Arc;

use kernel::AttackResult;
use platform::html::escape;

use super::YOUR_QUERY_WAS;
use crate::domain::repository::UserDataRepository;
use crate::domain::services::union_before_nul;
use crate::error::SqlInjectionResult;
use crate::infra::postgres::QUERY_6A;

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "SqlInjectionLesson6a";

/// Lesson 6a Use Case
pub struct Attack6aUseCase<R>
where
    R: UserDataRepository,
{
    repo: Arc<R>,
}

impl<R> Attack6aUseCase<R>
where
    R: UserDataRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, last_name: &str) -> SqlInjectionResult<AttackResult> {
        let used_union = union_before_nul(last_name);
        if used_union {
            tracing::info!("Lesson 6a input uses UNION before a NUL byte");
        }

        match self.repo.find_by_last_name(last_name).await {
            Ok(rows) if !rows.is_empty() => Ok(AttackResult::success(ASSIGNMENT)
                .feedback("sql-injection.advanced.6a.success")
                .build()),
            Ok(_) => Ok(AttackResult::failed(ASSIGNMENT)
                .feedback("sql-injection.advanced.6a.no.results")
                .build()),
            Err(e) if e.is_unavailable() => Err(e),
            Err(e) => {
                e.log();
                Ok(AttackResult::failed(ASSIGNMENT)
                    .output(format!("{}{YOUR_QUERY_WAS}{QUERY_6A}", escape(&e.to_string())))
                    .build())
            }
        }
    }
}
