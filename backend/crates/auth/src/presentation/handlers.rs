//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::login::LoginUseCase;
use crate::application::update_profile::{UpdateProfileInput, UpdateProfileUseCase};
use crate::application::verify_token::VerifyTokenUseCase;
use crate::domain::entity::admin::AdminIdentity;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AdminDto, LoginRequest, LoginResponse, LogoutResponse, ProfileResponse, UpdateProfileRequest,
    UpdateProfileResponse, VerifyResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<(StatusCode, Json<LoginResponse>)>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let outcome = use_case.execute(&req.username, &req.password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "Login successful",
            token: outcome.token,
            admin: AdminDto::from(outcome.admin),
        }),
    ))
}

// ============================================================================
// Verify
// ============================================================================

/// GET /api/auth/verify
pub async fn verify<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<VerifyResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers)?;

    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.config.clone());
    let identity = use_case.execute(token).await?;

    Ok(Json(VerifyResponse {
        message: "Token is valid",
        admin: AdminDto::from(identity),
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless, so there is nothing to revoke server-side;
/// the client discards its copy. The endpoint exists so clients have
/// a uniform logout call.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        message: "Logged out successfully",
    })
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/admin/profile
pub async fn get_profile(
    axum::Extension(identity): axum::Extension<AdminIdentity>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        admin: AdminDto::from(identity),
    })
}

/// PUT /api/admin/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    axum::Extension(identity): axum::Extension<AdminIdentity>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UpdateProfileResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateProfileInput {
        username: req.username,
        full_name: req.full_name,
        current_password: req.current_password,
        new_password: req.new_password,
    };

    let updated = use_case.execute(identity.id, input).await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully",
        admin: AdminDto::from(updated),
    }))
}
