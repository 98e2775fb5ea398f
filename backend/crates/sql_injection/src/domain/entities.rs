//! Domain Entities

/// Column names of `user_data`, in table order
pub const USER_DATA_COLUMNS: [&str; 7] = [
    "userid",
    "first_name",
    "last_name",
    "cc_number",
    "cc_type",
    "cookie",
    "login_count",
];

/// One row of the `user_data` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub userid: i32,
    pub first_name: String,
    pub last_name: String,
    pub cc_number: String,
    pub cc_type: String,
    pub cookie: String,
    pub login_count: i32,
}

impl UserData {
    /// Values as text, in column order
    pub fn values(&self) -> [String; 7] {
        [
            self.userid.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.cc_number.clone(),
            self.cc_type.clone(),
            self.cookie.clone(),
            self.login_count.to_string(),
        ]
    }
}
