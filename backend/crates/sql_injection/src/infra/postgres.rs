//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entities::UserData;
use crate::domain::repository::UserDataRepository;
use crate::error::SqlInjectionResult;

/// Lesson 5b: login count and user id, both bound
pub const QUERY_5B: &str =
    "SELECT * From user_data WHERE login_count = $1 and CAST(userid AS VARCHAR) = $2";

/// Lesson 6a: last name, bound
pub const QUERY_6A: &str = "SELECT * FROM user_data WHERE last_name = $1";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgUserDataRepository {
    pool: PgPool,
}

impl PgUserDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserDataRepository for PgUserDataRepository {
    async fn find_by_login_count_and_userid(
        &self,
        login_count: i32,
        userid: &str,
    ) -> SqlInjectionResult<Vec<UserData>> {
        let rows = sqlx::query_as::<_, UserDataRow>(QUERY_5B)
            .bind(login_count)
            .bind(userid)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserDataRow::into_user_data).collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> SqlInjectionResult<Vec<UserData>> {
        let rows = sqlx::query_as::<_, UserDataRow>(QUERY_6A)
            .bind(last_name)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserDataRow::into_user_data).collect())
    }
}

#[derive(sqlx::FromRow)]
struct UserDataRow {
    userid: i32,
    first_name: Option<String>,
    last_name: Option<String>,
    cc_number: Option<String>,
    cc_type: Option<String>,
    cookie: Option<String>,
    login_count: Option<i32>,
}

impl UserDataRow {
    fn into_user_data(self) -> UserData {
        UserData {
            userid: self.userid,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            cc_number: self.cc_number.unwrap_or_default(),
            cc_type: self.cc_type.unwrap_or_default(),
            cookie: self.cookie.unwrap_or_default(),
            login_count: self.login_count.unwrap_or_default(),
        }
    }
}
