//! Router-level tests for the insecure deserialization lesson

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::config::DeserializationConfig;
    use crate::domain::objects::{LessonObject, VulnerableTaskHolder};
    use crate::domain::registry::TypeRegistry;
    use crate::domain::stream::ObjectWriter;
    use crate::presentation::router::deserialization_router;

    fn app() -> Router {
        deserialization_router(TypeRegistry::standard(), DeserializationConfig::default())
    }

    fn url_encode(value: &str) -> String {
        value
            .replace('%', "%25")
            .replace('+', "%2B")
            .replace('/', "%2F")
            .replace('=', "%3D")
    }

    async fn submit(token: &str) -> Value {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/InsecureDeserialization/task")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(format!("token={}", url_encode(token))))
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

    fn encode(object: &LessonObject) -> String {
        platform::crypto::to_base64(&ObjectWriter::write_object(object).unwrap())
    }

    #[tokio::test]
    async fn test_valid_sleep_task_solves_lesson() {
        let holder = VulnerableTaskHolder::new("wait", "sleep 5", Utc::now());
        let body = submit(&encode(&LessonObject::TaskHolder(holder))).await;

        assert_eq!(body["lessonCompleted"], true);
        assert_eq!(body["assignment"], "InsecureDeserializationTask");
    }

    #[tokio::test]
    async fn test_forbidden_type_is_reported() {
        let body = submit(&encode(&LessonObject::Text("payload".into()))).await;

        assert_eq!(body["lessonCompleted"], false);
        assert_eq!(body["feedback"], "insecure-deserialization.rejected");
        assert_eq!(
            body["output"],
            "Unauthorized deserialization attempt: java.lang.String"
        );
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid_version() {
        let body = submit("bm90IGEgc3RyZWFt").await;
        assert_eq!(body["feedback"], "insecure-deserialization.invalidversion");
    }
}
