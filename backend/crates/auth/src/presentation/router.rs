//! Auth Routers

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AdminRepository;
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the public auth router with the SQLite repository
///
/// Mounted under `/api/auth`.
pub fn auth_router(repo: SqliteAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create the protected profile router with the SQLite repository
///
/// Mounted under `/api/admin`; the caller layers `require_admin` on top.
pub fn profile_router(repo: SqliteAuthRepository, config: Arc<AuthConfig>) -> Router {
    profile_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/verify", get(handlers::verify::<R>))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}

/// Create a generic profile router for any repository implementation
pub fn profile_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::update_profile::<R>),
        )
        .with_state(state)
}
