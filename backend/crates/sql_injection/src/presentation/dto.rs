//! API DTOs

use serde::Deserialize;

/// Form for POST /SqlInjection/assignment5b
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment5bForm {
    pub userid: String,
    pub login_count: String,
}

/// Form for POST /SqlInjectionAdvanced/attack6a
#[derive(Debug, Clone, Deserialize)]
pub struct Attack6aForm {
    pub userid_6a: String,
}
