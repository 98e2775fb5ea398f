//! Run Task Use Case
//!
//! Decodes a submitted task holder through the allow-listed reader and
//! grades it. Tasks are validated and reported on, never executed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::AttackResult;

use crate::application::config::DeserializationConfig;
use crate::domain::objects::{LessonObject, VulnerableTaskHolder};
use crate::domain::registry::TypeRegistry;
use crate::domain::stream::ObjectReader;
use crate::error::DeserializationError;

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "InsecureDeserializationTask";

const ALLOWED_ACTIONS: &[&str] = &["sleep", "ping"];

/// Run Task Use Case
pub struct RunTaskUseCase {
    registry: Arc<TypeRegistry>,
    config: Arc<DeserializationConfig>,
}

impl RunTaskUseCase {
    pub fn new(registry: Arc<TypeRegistry>, config: Arc<DeserializationConfig>) -> Self {
        Self { registry, config }
    }

    pub fn execute(&self, token: &str) -> AttackResult {
        self.execute_at(token, Utc::now())
    }

    pub fn execute_at(&self, token: &str, now: DateTime<Utc>) -> AttackResult {
        // Accept URL-safe base64 as well
        let normalized = token.trim().replace('-', "+").replace('_', "/");
        let Ok(bytes) = platform::crypto::from_base64(&normalized) else {
            return invalid_version();
        };

        let reader = ObjectReader::new(&self.config.policy, &self.registry);
        let holder = match reader.read_object(&bytes) {
            Ok(LessonObject::TaskHolder(holder)) => holder,
            Ok(LessonObject::Text(_)) => {
                return AttackResult::failed(ASSIGNMENT)
                    .feedback("insecure-deserialization.stringobject")
                    .build();
            }
            Ok(_) => return wrong_object(),
            Err(DeserializationError::Rejected { type_name }) => {
                return AttackResult::failed(ASSIGNMENT)
                    .feedback("insecure-deserialization.rejected")
                    .output(format!("Unauthorized deserialization attempt: {type_name}"))
                    .build();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Task token could not be read");
                return invalid_version();
            }
        };

        if self.is_expired(holder.requested_execution_time, now) {
            return AttackResult::failed(ASSIGNMENT)
                .feedback("insecure-deserialization.expired")
                .build();
        }

        if !self.is_allowed_action(&holder.task_action) {
            tracing::warn!(
                task_name = %holder.task_name,
                task_action = %holder.task_action,
                "Task action refused"
            );
            return wrong_object();
        }

        self.grade(&holder)
    }

    fn is_expired(&self, requested: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(requested).to_std() {
            Ok(age) => age > self.config.max_task_age,
            // Negative age: scheduled in the future
            Err(_) => true,
        }
    }

    fn is_allowed_action(&self, action: &str) -> bool {
        action.chars().count() < self.config.max_action_len
            && ALLOWED_ACTIONS.iter().any(|prefix| action.starts_with(prefix))
    }

    fn grade(&self, holder: &VulnerableTaskHolder) -> AttackResult {
        tracing::info!(
            task_name = %holder.task_name,
            task_action = %holder.task_action,
            "Task accepted (not executed)"
        );

        match sleep_seconds(&holder.task_action) {
            Some(secs) if self.config.solving_sleep_secs.contains(&secs) => {
                AttackResult::success(ASSIGNMENT).build()
            }
            _ => AttackResult::information_message(ASSIGNMENT)
                .feedback("insecure-deserialization.stillvalid")
                .build(),
        }
    }
}

fn sleep_seconds(action: &str) -> Option<u64> {
    action.strip_prefix("sleep ")?.trim().parse().ok()
}

fn invalid_version() -> AttackResult {
    AttackResult::failed(ASSIGNMENT)
        .feedback("insecure-deserialization.invalidversion")
        .build()
}

fn wrong_object() -> AttackResult {
    AttackResult::failed(ASSIGNMENT)
        .feedback("insecure-deserialization.wrongobject")
        .build()
}
