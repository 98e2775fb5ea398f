//! API Server Entry Point
//!
//! Composes every lesson router under `/WebGoat`.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use deserialization::{DeserializationConfig, TypeRegistry, deserialization_router};
use jwt::{InMemoryRefreshTokenStore, JwtConfig, jwt_router};
use path_traversal::{PathTraversalConfig, path_traversal_router};
use platform::header::CURRENT_USER_HEADER;
use sql_injection::{PgUserDataRepository, sql_injection_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xss::xss_router;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,jwt=info,path_traversal=info,deserialization=info,\
                 sql_injection=info,xss=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection (lesson tables are provisioned externally)
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // JWT configuration
    // WEBGOAT_JWT_KEY is required in production
    let jwt_config = JwtConfig::from_settings(
        env::var("WEBGOAT_JWT_KEY").ok(),
        env::var("WEBGOAT_JWT_PASSWORD").ok(),
        cfg!(debug_assertions),
    )?;

    // Path traversal configuration
    let path_traversal_config = match env::var("WEBGOAT_HOME") {
        Ok(home) => PathTraversalConfig::new(home),
        Err(_) if cfg!(debug_assertions) => PathTraversalConfig::development(),
        Err(_) => PathTraversalConfig::default(),
    };
    tracing::info!(
        home = %path_traversal_config.home_directory.display(),
        "Profile uploads stored under home directory"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(CURRENT_USER_HEADER),
        ]))
        .allow_credentials(true);

    // Build router
    let lessons = Router::new()
        .merge(jwt_router(InMemoryRefreshTokenStore::new(), jwt_config))
        .merge(path_traversal_router(path_traversal_config))
        .merge(deserialization_router(
            TypeRegistry::standard(),
            DeserializationConfig::default(),
        ))
        .merge(sql_injection_router(PgUserDataRepository::new(pool)))
        .merge(xss_router());

    let app = Router::new()
        .nest("/WebGoat", lessons)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("WEBGOAT_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
