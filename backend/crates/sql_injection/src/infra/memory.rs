//! In-Memory Repository
//!
//! Same matching rules as the SQL queries: every input is compared as a
//! literal value, never interpreted.

use crate::domain::entities::UserData;
use crate::domain::repository::UserDataRepository;
use crate::error::SqlInjectionResult;

/// Fixed set of `user_data` rows
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDataRepository {
    rows: Vec<UserData>,
}

impl InMemoryUserDataRepository {
    pub fn new(rows: Vec<UserData>) -> Self {
        Self { rows }
    }
}

impl UserDataRepository for InMemoryUserDataRepository {
    async fn find_by_login_count_and_userid(
        &self,
        login_count: i32,
        userid: &str,
    ) -> SqlInjectionResult<Vec<UserData>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.login_count == login_count && row.userid.to_string() == userid)
            .cloned()
            .collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> SqlInjectionResult<Vec<UserData>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.last_name == last_name)
            .cloned()
            .collect())
    }
}
