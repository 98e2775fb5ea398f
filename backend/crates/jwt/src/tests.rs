//! Unit tests for the JWT refresh lesson crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::{Duration as ChronoDuration, Utc};

    use crate::application::checkout::CheckoutUseCase;
    use crate::application::config::JwtConfig;
    use crate::application::login::{LoginInput, LoginUseCase, TokenPair};
    use crate::application::refresh::{RefreshInput, RefreshTokenUseCase};
    use crate::domain::repository::RefreshTokenRepository;
    use crate::domain::services::{JwtTokenService, TokenParse};
    use crate::error::JwtError;
    use crate::infra::memory::InMemoryRefreshTokenStore;

    struct Fixture {
        store: Arc<InMemoryRefreshTokenStore>,
        tokens: Arc<JwtTokenService>,
        config: Arc<JwtConfig>,
    }

    fn fixture() -> Fixture {
        let config = JwtConfig::development();
        let tokens = JwtTokenService::new(config.signing_key(), config.access_token_ttl);
        Fixture {
            store: Arc::new(InMemoryRefreshTokenStore::new()),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }

    impl Fixture {
        fn login(&self) -> LoginUseCase<InMemoryRefreshTokenStore> {
            LoginUseCase::new(self.store.clone(), self.tokens.clone(), self.config.clone())
        }

        fn refresh(&self) -> RefreshTokenUseCase<InMemoryRefreshTokenStore> {
            RefreshTokenUseCase::new(self.store.clone(), self.tokens.clone(), self.config.clone())
        }

        async fn login_jerry(&self) -> TokenPair {
            self.login()
                .execute(LoginInput {
                    user: Some("Jerry".to_string()),
                    password: Some(self.config.login_password.clone()),
                })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_login_issues_recorded_refresh_token() {
        let fx = fixture();
        let pair = fx.login_jerry().await;

        assert!(fx.store.contains(&pair.refresh_token));
        assert_eq!(pair.refresh_token.len(), 32);
        match fx.tokens.parse_token(&pair.access_token) {
            TokenParse::Valid(claims) => assert_eq!(claims.subject(), Some("Jerry")),
            other => panic!("expected valid token, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_user_name_is_case_insensitive() {
        let fx = fixture();
        let result = fx
            .login()
            .execute(LoginInput {
                user: Some("jErRy".to_string()),
                password: Some(fx.config.login_password.clone()),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_other_users() {
        let fx = fixture();

        let wrong_password = fx
            .login()
            .execute(LoginInput {
                user: Some("Jerry".to_string()),
                password: Some("guess".to_string()),
            })
            .await;
        assert!(matches!(wrong_password, Err(JwtError::InvalidCredentials)));

        let tom = fx
            .login()
            .execute(LoginInput {
                user: Some("Tom".to_string()),
                password: Some(fx.config.login_password.clone()),
            })
            .await;
        assert!(matches!(tom, Err(JwtError::InvalidCredentials)));

        let missing = fx
            .login()
            .execute(LoginInput {
                user: None,
                password: None,
            })
            .await;
        assert!(matches!(missing, Err(JwtError::InvalidCredentials)));

        assert!(fx.store.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_token_is_single_use() {
        let fx = fixture();
        let pair = fx.login_jerry().await;

        let rotated = fx
            .refresh()
            .execute(RefreshInput {
                access_token: pair.access_token.clone(),
                refresh_token: Some(pair.refresh_token.clone()),
            })
            .await
            .unwrap();

        assert_ne!(rotated.refresh_token, pair.refresh_token);
        assert!(!fx.store.contains(&pair.refresh_token));
        assert!(fx.store.contains(&rotated.refresh_token));

        let reused = fx
            .refresh()
            .execute(RefreshInput {
                access_token: pair.access_token,
                refresh_token: Some(pair.refresh_token),
            })
            .await;
        assert!(matches!(reused, Err(JwtError::UnknownRefreshToken)));
    }

    #[tokio::test]
    async fn test_concurrent_exchange_has_exactly_one_winner() {
        let fx = fixture();
        let pair = fx.login_jerry().await;
        let use_case = Arc::new(fx.refresh());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let use_case = use_case.clone();
            let input = RefreshInput {
                access_token: pair.access_token.clone(),
                refresh_token: Some(pair.refresh_token.clone()),
            };
            handles.push(tokio::spawn(async move { use_case.execute(input).await }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(fx.store.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_accepts_expired_access_token_subject() {
        let fx = fixture();
        let jerry = fx.login_jerry().await;
        let expired_tom = fx
            .tokens
            .create_token_at("Tom", Utc::now() - ChronoDuration::hours(3))
            .unwrap();

        let pair = fx
            .refresh()
            .execute(RefreshInput {
                access_token: expired_tom,
                refresh_token: Some(jerry.refresh_token),
            })
            .await
            .unwrap();

        match fx.tokens.parse_token(&pair.access_token) {
            TokenParse::Valid(claims) => assert_eq!(claims.subject(), Some("Tom")),
            other => panic!("expected valid token, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refresh_rejects_invalid_access_token() {
        let fx = fixture();
        let pair = fx.login_jerry().await;
        let forged = JwtTokenService::new("other-key", fx.config.access_token_ttl)
            .create_token("Tom")
            .unwrap();

        let result = fx
            .refresh()
            .execute(RefreshInput {
                access_token: forged,
                refresh_token: Some(pair.refresh_token.clone()),
            })
            .await;

        assert!(matches!(result, Err(JwtError::InvalidAccessToken(_))));
        // The refresh token is untouched by a rejected request
        assert!(fx.store.contains(&pair.refresh_token));
    }

    #[tokio::test]
    async fn test_refresh_rejects_missing_refresh_token() {
        let fx = fixture();
        let pair = fx.login_jerry().await;

        let result = fx
            .refresh()
            .execute(RefreshInput {
                access_token: pair.access_token,
                refresh_token: None,
            })
            .await;

        assert!(matches!(result, Err(JwtError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_rejects_never_issued_token() {
        let fx = fixture();
        let pair = fx.login_jerry().await;
        fx.store.store("planted").await.unwrap();

        let result = fx
            .refresh()
            .execute(RefreshInput {
                access_token: pair.access_token,
                refresh_token: Some("not-planted".to_string()),
            })
            .await;

        assert!(matches!(result, Err(JwtError::UnknownRefreshToken)));
    }

    #[test]
    fn test_checkout_outcomes() {
        let fx = fixture();
        let checkout = CheckoutUseCase::new(fx.tokens.clone());

        let tom = fx.tokens.create_token("Tom").unwrap();
        let result = checkout.execute(&tom);
        assert!(result.lesson_completed);

        let jerry = fx.tokens.create_token("Jerry").unwrap();
        let result = checkout.execute(&jerry);
        assert!(!result.lesson_completed);
        assert_eq!(result.feedback, "jwt-refresh-not-tom");
        assert_eq!(result.feedback_args, vec!["Jerry".to_string()]);

        let expired = fx
            .tokens
            .create_token_at("Tom", Utc::now() - ChronoDuration::hours(3))
            .unwrap();
        let result = checkout.execute(&expired);
        assert!(!result.lesson_completed);
        assert!(result.output.unwrap().starts_with("JWT expired at"));

        let result = checkout.execute("garbage");
        assert!(!result.lesson_completed);
        assert_eq!(result.feedback, "jwt-invalid-token");
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{Duration as ChronoDuration, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::JwtConfig;
    use crate::domain::services::JwtTokenService;
    use crate::infra::memory::InMemoryRefreshTokenStore;
    use crate::presentation::dto::TokenResponse;
    use crate::presentation::router::jwt_router;

    fn app() -> (Router, JwtConfig) {
        let config = JwtConfig::development();
        (
            jwt_router(InMemoryRefreshTokenStore::new(), config.clone()),
            config,
        )
    }

    fn post(uri: &str, bearer: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(app: &Router, config: &JwtConfig) -> TokenResponse {
        let response = app
            .clone()
            .oneshot(post(
                "/JWT/refresh/login",
                None,
                Some(json!({ "user": "Jerry", "password": config.login_password })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_value(body_json(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_login_without_body_is_unauthorized() {
        let (app, _) = app();
        let response = app
            .oneshot(post("/JWT/refresh/login", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let (app, _) = app();
        let response = app
            .oneshot(post(
                "/JWT/refresh/login",
                None,
                Some(json!({ "user": "Jerry", "password": "nope" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_checkout_without_header_is_unauthorized() {
        let (app, _) = app();
        let response = app
            .oneshot(post("/JWT/refresh/checkout", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_checkout_as_jerry_is_not_tom() {
        let (app, config) = app();
        let tokens = login(&app, &config).await;

        let response = app
            .oneshot(post("/JWT/refresh/checkout", Some(&tokens.access_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["lessonCompleted"], false);
        assert_eq!(body["feedback"], "jwt-refresh-not-tom");
        assert_eq!(body["feedbackArgs"][0], "Jerry");
    }

    #[tokio::test]
    async fn test_new_token_requires_header_and_body() {
        let (app, config) = app();
        let tokens = login(&app, &config).await;

        let no_header = app
            .clone()
            .oneshot(post(
                "/JWT/refresh/newToken",
                None,
                Some(json!({ "refresh_token": tokens.refresh_token })),
            ))
            .await
            .unwrap();
        assert_eq!(no_header.status(), StatusCode::UNAUTHORIZED);

        let no_body = app
            .oneshot(post("/JWT/refresh/newToken", Some(&tokens.access_token), None))
            .await
            .unwrap();
        assert_eq!(no_body.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_tom_token_with_jerry_refresh_token_solves_checkout() {
        let (app, config) = app();
        let jerry = login(&app, &config).await;
        let expired_tom = JwtTokenService::new(config.signing_key(), config.access_token_ttl)
            .create_token_at("Tom", Utc::now() - ChronoDuration::days(1))
            .unwrap();

        let response = app
            .clone()
            .oneshot(post(
                "/JWT/refresh/newToken",
                Some(&expired_tom),
                Some(json!({ "refresh_token": jerry.refresh_token })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let tom: TokenResponse = serde_json::from_value(body_json(response).await).unwrap();

        let response = app
            .clone()
            .oneshot(post("/JWT/refresh/checkout", Some(&tom.access_token), None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["lessonCompleted"], true);

        // Jerry's refresh token was consumed by the exchange
        let replay = app
            .oneshot(post(
                "/JWT/refresh/newToken",
                Some(&expired_tom),
                Some(json!({ "refresh_token": jerry.refresh_token })),
            ))
            .await
            .unwrap();
        assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
    }
}
