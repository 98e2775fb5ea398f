//! API DTOs

use serde::Deserialize;

/// Form for POST /InsecureDeserialization/task
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub token: String,
}
