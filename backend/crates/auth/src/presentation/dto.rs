//! Auth DTOs
//!
//! JSON shapes for the auth endpoints. Envelope fields are camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::entity::admin::AdminIdentity;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Admin identity as exposed over the wire (never the password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDto {
    pub id: i64,
    pub username: String,
    pub full_name: String,
}

impl From<AdminIdentity> for AdminDto {
    fn from(identity: AdminIdentity) -> Self {
        Self {
            id: identity.id.value(),
            username: identity.username,
            full_name: identity.full_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub admin: AdminDto,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: &'static str,
    pub admin: AdminDto,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub admin: AdminDto,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: &'static str,
    pub admin: AdminDto,
}
