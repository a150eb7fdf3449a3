//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_admin};
use auth::{AuthConfig, SqliteAuthRepository, auth_router, ensure_default_admin, profile_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use feedback::{
    FeedbackConfig, SqliteFeedbackRepository, admin_feedback_router, public_feedback_router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,feedback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection (single-file SQLite store)
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:restaurant_feedback.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = Arc::new(load_auth_config()?);
    let feedback_config = Arc::new(FeedbackConfig::default());

    // Seed the single admin account on an empty database
    let auth_repo = SqliteAuthRepository::new(pool.clone());
    ensure_default_admin(&auth_repo, &auth_config).await?;

    let feedback_repo = SqliteFeedbackRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8080,http://localhost:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Protected admin surface: moderation + profile behind the token gate
    let auth_mw_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo.clone()),
        config: auth_config.clone(),
    };
    let admin_routes = admin_feedback_router(feedback_repo.clone(), feedback_config.clone())
        .merge(profile_router(auth_repo.clone(), auth_config.clone()))
        .layer(axum::middleware::from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                require_admin(auth_mw_state.clone(), req, next)
            },
        ));

    // Build router
    let app = Router::new()
        .nest(
            "/api/feedback",
            public_feedback_router(feedback_repo, feedback_config),
        )
        .nest("/api/auth", auth_router(auth_repo, auth_config))
        .nest("/api/admin", admin_routes)
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Restaurant Feedback API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Assemble the auth configuration from the environment
///
/// Debug builds fall back to a random token secret; production
/// requires `TOKEN_SECRET` (base64, 32 bytes) so tokens survive
/// restarts.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::with_random_secret()
    } else {
        let secret_b64 = env::var("TOKEN_SECRET")
            .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must be set in production"))?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let secret: [u8; 32] = secret_bytes
            .as_slice()
            .try_into()
            .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes"))?;
        AuthConfig::with_secret(secret)
    };

    if let Ok(username) = env::var("ADMIN_USERNAME") {
        config.default_admin_username = username;
    }
    if let Ok(password) = env::var("ADMIN_PASSWORD") {
        config.default_admin_password = password;
    }
    if let Ok(full_name) = env::var("ADMIN_FULL_NAME") {
        config.default_admin_full_name = full_name;
    }

    Ok(config)
}
