//! Attack Result - the reporting convention shared by every lesson endpoint
//!
//! A lesson endpoint never renders text itself. It answers with an
//! [`AttackResult`] carrying a feedback *key*; the surrounding lesson
//! container translates and renders it.
//!
//! ```rust
//! use kernel::AttackResult;
//!
//! let result = AttackResult::failed("JWTRefreshEndpoint")
//!     .feedback("jwt-refresh-not-tom")
//!     .feedback_args(["Jerry"])
//!     .build();
//! assert!(!result.lesson_completed);
//! assert_eq!(result.feedback_args, vec!["Jerry".to_string()]);
//! ```

use serde::Serialize;

/// Feedback key used when a success result does not set one
pub const DEFAULT_SUCCESS_FEEDBACK: &str = "assignment.solved";

/// Feedback key used when a failed result does not set one
pub const DEFAULT_FAILED_FEEDBACK: &str = "assignment.not.solved";

/// Result of one lesson attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackResult {
    pub lesson_completed: bool,
    pub feedback: String,
    pub feedback_args: Vec<String>,
    pub output: Option<String>,
    pub output_args: Vec<String>,
    pub assignment: String,
    pub attempt_was_made: bool,
}

impl AttackResult {
    /// Start a result that marks the assignment as solved
    pub fn success(assignment: impl Into<String>) -> AttackResultBuilder {
        AttackResultBuilder::new(assignment.into(), Outcome::Success)
    }

    /// Start a result that marks the assignment as not solved
    pub fn failed(assignment: impl Into<String>) -> AttackResultBuilder {
        AttackResultBuilder::new(assignment.into(), Outcome::Failed)
    }

    /// Start a neutral result: not solved, but not a failure either
    pub fn information_message(assignment: impl Into<String>) -> AttackResultBuilder {
        AttackResultBuilder::new(assignment.into(), Outcome::Information)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Failed,
    Information,
}

/// Builder for [`AttackResult`]
#[derive(Debug, Clone)]
pub struct AttackResultBuilder {
    assignment: String,
    outcome: Outcome,
    feedback: Option<String>,
    feedback_args: Vec<String>,
    output: Option<String>,
    output_args: Vec<String>,
    attempt_was_made: bool,
}

impl AttackResultBuilder {
    fn new(assignment: String, outcome: Outcome) -> Self {
        Self {
            assignment,
            outcome,
            feedback: None,
            feedback_args: Vec::new(),
            output: None,
            output_args: Vec::new(),
            attempt_was_made: false,
        }
    }

    pub fn feedback(mut self, key: impl Into<String>) -> Self {
        self.feedback = Some(key.into());
        self
    }

    pub fn feedback_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feedback_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Mark that the user got close (e.g. the payload reached the check)
    pub fn attempt_was_made(mut self) -> Self {
        self.attempt_was_made = true;
        self
    }

    pub fn build(self) -> AttackResult {
        let lesson_completed = self.outcome == Outcome::Success;
        let feedback = self.feedback.unwrap_or_else(|| {
            match self.outcome {
                Outcome::Success => DEFAULT_SUCCESS_FEEDBACK,
                Outcome::Failed | Outcome::Information => DEFAULT_FAILED_FEEDBACK,
            }
            .to_string()
        });

        AttackResult {
            lesson_completed,
            feedback,
            feedback_args: self.feedback_args,
            output: self.output,
            output_args: self.output_args,
            assignment: self.assignment,
            attempt_was_made: self.attempt_was_made,
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AttackResult {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_defaults() {
        let result = AttackResult::success("SqlInjectionLesson5b").build();
        assert!(result.lesson_completed);
        assert_eq!(result.feedback, DEFAULT_SUCCESS_FEEDBACK);
        assert_eq!(result.assignment, "SqlInjectionLesson5b");
        assert!(!result.attempt_was_made);
        assert!(result.output.is_none());
    }

    #[test]
    fn test_failed_defaults() {
        let result = AttackResult::failed("CrossSiteScriptingLesson4").build();
        assert!(!result.lesson_completed);
        assert_eq!(result.feedback, DEFAULT_FAILED_FEEDBACK);
    }

    #[test]
    fn test_information_message_is_not_completed() {
        let result = AttackResult::information_message("ProfileUpload")
            .feedback("path-traversal-profile-updated")
            .feedback_args(["/tmp/home/PathTraversal/tom/me.png"])
            .build();
        assert!(!result.lesson_completed);
        assert_eq!(result.feedback, "path-traversal-profile-updated");
        assert_eq!(result.feedback_args.len(), 1);
    }

    #[test]
    fn test_attempt_was_made_flag() {
        let result = AttackResult::failed("ProfileUpload")
            .attempt_was_made()
            .build();
        assert!(result.attempt_was_made);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = AttackResult::failed("JWTRefreshEndpoint")
            .output("Token expired")
            .build();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lessonCompleted"], false);
        assert_eq!(json["attemptWasMade"], false);
        assert_eq!(json["output"], "Token expired");
        assert!(json["feedbackArgs"].as_array().unwrap().is_empty());
    }
}
