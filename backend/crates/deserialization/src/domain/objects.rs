//! Lesson Object Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TASK_HOLDER_TYPE: &str = "org.dummy.insecure.framework.VulnerableTaskHolder";
pub const INTEGER_TYPE: &str = "java.lang.Integer";
pub const STRING_TYPE: &str = "java.lang.String";
pub const DATE_TYPE: &str = "java.util.Date";

/// A scheduled task as submitted by the lesson client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerableTaskHolder {
    pub task_name: String,
    pub task_action: String,
    pub requested_execution_time: DateTime<Utc>,
}

impl VulnerableTaskHolder {
    pub fn new(
        task_name: impl Into<String>,
        task_action: impl Into<String>,
        requested_execution_time: DateTime<Utc>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            task_action: task_action.into(),
            requested_execution_time,
        }
    }
}

/// Any object the stream can carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonObject {
    TaskHolder(VulnerableTaskHolder),
    Integer(i32),
    Text(String),
    Date(DateTime<Utc>),
}

impl LessonObject {
    /// Wire name of the object's type
    pub fn type_name(&self) -> &'static str {
        match self {
            LessonObject::TaskHolder(_) => TASK_HOLDER_TYPE,
            LessonObject::Integer(_) => INTEGER_TYPE,
            LessonObject::Text(_) => STRING_TYPE,
            LessonObject::Date(_) => DATE_TYPE,
        }
    }

    /// JSON body for the object
    pub fn encode_body(&self) -> serde_json::Result<Vec<u8>> {
        match self {
            LessonObject::TaskHolder(holder) => serde_json::to_vec(holder),
            LessonObject::Integer(value) => serde_json::to_vec(value),
            LessonObject::Text(value) => serde_json::to_vec(value),
            LessonObject::Date(value) => serde_json::to_vec(value),
        }
    }
}
