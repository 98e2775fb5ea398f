//! Application Configuration

use std::time::Duration;

use crate::domain::policy::AllowListPolicy;

/// Insecure deserialization lesson configuration
#[derive(Debug, Clone)]
pub struct DeserializationConfig {
    /// Types the task endpoint may reconstruct
    pub policy: AllowListPolicy,
    /// Oldest accepted requested execution time
    pub max_task_age: Duration,
    /// Actions must be strictly shorter than this many characters
    pub max_action_len: usize,
    /// Sleep durations (seconds) that solve the lesson
    pub solving_sleep_secs: std::ops::RangeInclusive<u64>,
}

impl Default for DeserializationConfig {
    fn default() -> Self {
        Self {
            policy: AllowListPolicy::task_holder(),
            max_task_age: Duration::from_secs(10 * 60),
            max_action_len: 22,
            solving_sleep_secs: 3..=7,
        }
    }
}
