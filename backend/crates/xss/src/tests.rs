//! Router-level tests for the XSS mitigation lesson

#[cfg(test)]
mod router_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::presentation::router::xss_router;

    async fn submit(body: &'static str) -> Value {
        let response = xss_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/CrossSiteScripting/attack4")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_encoded_solution_is_accepted() {
        // Policy.getInstance("antisamy-slashdot.xml"); new AntiSamy(); CleanResults cr =
        // as.scan(newComment, p); MyCommentDAO.addComment(threadID, userID, cr.getCleanHTML());
        let body = "editor2=Policy.getInstance%28%22antisamy-slashdot.xml%22%29%3B+new+AntiSamy%28%29%3B+\
                    CleanResults+cr+%3D+as.scan%28newComment%2C+p%29%3B+\
                    MyCommentDAO.addComment%28threadID%2C+userID%2C+cr.getCleanHTML%28%29%29%3B";
        let result = submit(body).await;

        assert_eq!(result["lessonCompleted"], true);
        assert_eq!(result["feedback"], "xss-mitigation-4-success");
        assert_eq!(result["assignment"], "CrossSiteScriptingLesson4");
    }

    #[tokio::test]
    async fn test_unsanitized_comment_is_failed() {
        let body = "editor2=MyCommentDAO.addComment%28threadID%2C+userID%2C+newComment%29%3B";
        let result = submit(body).await;

        assert_eq!(result["lessonCompleted"], false);
        assert_eq!(result["feedback"], "xss-mitigation-4-failed");
    }

    #[tokio::test]
    async fn test_missing_field_is_failed() {
        let result = submit("").await;
        assert_eq!(result["feedback"], "xss-mitigation-4-failed");
    }
}
