//! Feedback Routers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::domain::repository::FeedbackRepository;
use crate::infra::sqlite::SqliteFeedbackRepository;
use crate::presentation::handlers::{self, FeedbackAppState};

/// Create the public feedback router with the SQLite repository
///
/// Mounted under `/api/feedback`.
pub fn public_feedback_router(
    repo: SqliteFeedbackRepository,
    config: Arc<FeedbackConfig>,
) -> Router {
    public_feedback_router_generic(repo, config)
}

/// Create the moderation router with the SQLite repository
///
/// Mounted under `/api/admin`; the caller layers auth middleware on top.
pub fn admin_feedback_router(repo: SqliteFeedbackRepository, config: Arc<FeedbackConfig>) -> Router {
    admin_feedback_router_generic(repo, config)
}

/// Create a generic public router for any repository implementation
pub fn public_feedback_router_generic<R>(repo: R, config: Arc<FeedbackConfig>) -> Router
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = FeedbackAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/", post(handlers::submit_feedback::<R>))
        .route("/public", get(handlers::list_public_feedback::<R>))
        .route("/stats", get(handlers::public_stats::<R>))
        .with_state(state)
}

/// Create a generic moderation router for any repository implementation
pub fn admin_feedback_router_generic<R>(repo: R, config: Arc<FeedbackConfig>) -> Router
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = FeedbackAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/feedback", get(handlers::list_admin_feedback::<R>))
        .route(
            "/feedback/{id}/status",
            put(handlers::set_feedback_status::<R>),
        )
        .route("/feedback/{id}", delete(handlers::delete_feedback::<R>))
        .route("/stats", get(handlers::moderation_stats::<R>))
        .with_state(state)
}
