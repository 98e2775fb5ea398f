//! Attack 4 Use Case

use kernel::AttackResult;

use crate::domain::review::review_snippet;

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "CrossSiteScriptingLesson4";

/// Grades a sanitizer snippet submitted through the lesson editor
pub struct Attack4UseCase;

impl Attack4UseCase {
    pub fn execute(&self, editor: &str) -> AttackResult {
        let review = review_snippet(editor);

        if review.passed() {
            return AttackResult::success(ASSIGNMENT)
                .feedback("xss-mitigation-4-success")
                .build();
        }

        tracing::debug!(
            loads_policy = review.loads_policy,
            missing = ?review.missing,
            "Sanitizer snippet incomplete"
        );
        AttackResult::failed(ASSIGNMENT)
            .feedback("xss-mitigation-4-failed")
            .build()
    }
}
