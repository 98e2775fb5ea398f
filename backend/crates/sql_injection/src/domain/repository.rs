//! Repository Traits
//!
//! User input reaches the database only as bound parameters.

use crate::domain::entities::UserData;
use crate::error::SqlInjectionResult;

/// Read access to the lesson's `user_data` table
#[trait_variant::make(UserDataRepository: Send)]
pub trait LocalUserDataRepository {
    /// Rows with the given login count and user id
    async fn find_by_login_count_and_userid(
        &self,
        login_count: i32,
        userid: &str,
    ) -> SqlInjectionResult<Vec<UserData>>;

    /// Rows with the given last name
    async fn find_by_last_name(&self, last_name: &str) -> SqlInjectionResult<Vec<UserData>>;
}
