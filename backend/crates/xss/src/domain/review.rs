//! Sanitizer Snippet Review
//!
//! A submission passes when it loads the slashdot policy, scans the new
//! comment with it and stores only the cleaned HTML.

/// Any one of these loads the policy
const POLICY_LOADERS: &[&str] = &[
    r#"Policy.getInstance("antisamy-slashdot.xml""#,
    r#".scan(newComment, "antisamy-slashdot.xml""#,
    r#".scan(newComment, new File("antisamy-slashdot.xml")"#,
];

/// All of these must be present
const REQUIRED_CALLS: &[&str] = &[
    "new AntiSamy()",
    ".scan(newComment,",
    "CleanResults",
    "MyCommentDAO.addComment(threadID, userID",
    ".getCleanHTML())",
];

/// Outcome of reviewing one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetReview {
    pub loads_policy: bool,
    pub missing: Vec<&'static str>,
}

impl SnippetReview {
    pub fn passed(&self) -> bool {
        self.loads_policy && self.missing.is_empty()
    }
}

/// Strip markup from `submission` and check it for the required calls
pub fn review_snippet(submission: &str) -> SnippetReview {
    let text = platform::html::strip_tags(submission);

    SnippetReview {
        loads_policy: POLICY_LOADERS.iter().any(|s| text.contains(s)),
        missing: REQUIRED_CALLS
            .iter()
            .copied()
            .filter(|s| !text.contains(s))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str = r#"
        import org.owasp.validator.html.*;
        import MyCommentDAO;

        public class AntiSamyController {
            public void saveNewComment(int threadID, int userID, String newComment) {
                Policy p = Policy.getInstance("antisamy-slashdot.xml");
                AntiSamy as = new AntiSamy();
                CleanResults cr = as.scan(newComment, p, AntiSamy.DOM);
                MyCommentDAO.addComment(threadID, userID, cr.getCleanHTML());
            }
        }
    "#;

    #[test]
    fn test_policy_instance_solution_passes() {
        let review = review_snippet(SOLUTION);
        assert!(review.loads_policy);
        assert!(review.passed(), "{review:?}");
    }

    #[test]
    fn test_policy_file_passed_to_scan() {
        let snippet = r#"AntiSamy as = new AntiSamy();
            CleanResults cr = as.scan(newComment, new File("antisamy-slashdot.xml"));
            MyCommentDAO.addComment(threadID, userID, cr.getCleanHTML());"#;
        assert!(review_snippet(snippet).passed());
    }

    #[test]
    fn test_markup_is_stripped_before_matching() {
        let wrapped = SOLUTION.replace("new AntiSamy()", "new <b>AntiSamy</b>()");
        assert!(review_snippet(&wrapped).passed());
    }

    #[test]
    fn test_raw_comment_stored_fails() {
        let snippet = SOLUTION.replace("cr.getCleanHTML()", "newComment");
        let review = review_snippet(&snippet);
        assert!(!review.passed());
        assert_eq!(review.missing, vec![".getCleanHTML())"]);
    }

    #[test]
    fn test_other_policy_fails() {
        let snippet = SOLUTION.replace("antisamy-slashdot.xml", "antisamy-anythinggoes.xml");
        let review = review_snippet(&snippet);
        assert!(!review.loads_policy);
        assert!(review.missing.is_empty());
        assert!(!review.passed());
    }

    #[test]
    fn test_empty_submission_misses_everything() {
        let review = review_snippet("");
        assert!(!review.loads_policy);
        assert_eq!(review.missing.len(), REQUIRED_CALLS.len());
    }
}
