//! Lesson 5b: numeric and string parameters
//!
//! Solved when a single lookup returns at least six rows.

use std::sync::Arc;

use kernel::AttackResult;
use platform::html::escape;

use super::YOUR_QUERY_WAS;
use crate::domain::repository::UserDataRepository;
use crate::domain::services::{describe_query, render_table};
use crate::error::SqlInjectionResult;
use crate::infra::postgres::QUERY_5B;

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "SqlInjectionLesson5b";

const SOLVING_ROW_COUNT: usize = 6;

/// Input DTO for lesson 5b
#[derive(Debug, Clone)]
pub struct Assignment5bInput {
    pub userid: String,
    pub login_count: String,
}

/// Lesson 5b Use Case
pub struct Assignment5bUseCase<R>
where
    R: UserDataRepository,
{
    repo: Arc<R>,
}

impl<R> Assignment5bUseCase<R>
where
    R: UserDataRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Grade one attempt; only an unreachable database is an `Err`
    pub async fn execute(&self, input: Assignment5bInput) -> SqlInjectionResult<AttackResult> {
        let query = describe_query(
            QUERY_5B,
            &[input.login_count.as_str(), input.userid.as_str()],
        );

        let Ok(login_count) = input.login_count.parse::<i32>() else {
            return Ok(AttackResult::failed(ASSIGNMENT)
                .output(format!(
                    "Could not parse: {} to a number{YOUR_QUERY_WAS}{query}",
                    escape(&input.login_count)
                ))
                .build());
        };

        let rows = match self
            .repo
            .find_by_login_count_and_userid(login_count, &input.userid)
            .await
        {
            Ok(rows) => rows,
            Err(e) if e.is_unavailable() => return Err(e),
            Err(e) => {
                e.log();
                return Ok(AttackResult::failed(ASSIGNMENT)
                    .output(format!("{}{YOUR_QUERY_WAS}{query}", escape(&e.to_string())))
                    .build());
            }
        };

        tracing::info!(rows = rows.len(), "Lesson 5b query executed");

        if rows.is_empty() {
            return Ok(AttackResult::failed(ASSIGNMENT)
                .feedback("sql-injection.5b.no.results")
                .output(format!("Your query was: {query}"))
                .build());
        }

        let table = render_table(&rows);
        if rows.len() >= SOLVING_ROW_COUNT {
            return Ok(AttackResult::success(ASSIGNMENT)
                .feedback("sql-injection.5b.success")
                .output(format!("Your query was: {query}"))
                .feedback_args([table])
                .build());
        }

        Ok(AttackResult::failed(ASSIGNMENT)
            .output(format!("{table}{YOUR_QUERY_WAS}{query}"))
            .build())
    }
}
