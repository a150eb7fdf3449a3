//! Auth Middleware
//!
//! Middleware for requiring a valid admin token on protected routes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::verify_token::VerifyTokenUseCase;
use crate::domain::repository::AdminRepository;
use crate::presentation::handlers::extract_bearer_token;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid admin bearer token
///
/// On success the resolved `AdminIdentity` is inserted into request
/// extensions for downstream handlers.
pub async fn require_admin<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer_token(req.headers()) {
        Ok(token) => token.to_string(),
        Err(e) => return Err(e.into_response()),
    };

    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.config.clone());
    let identity = match use_case.execute(&token).await {
        Ok(identity) => identity,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
