//! Token Verification Use Case
//!
//! Validates a presented bearer token and re-resolves the admin row.
//! Tokens are stateless, so deleting the admin (or rotating the
//! secret) invalidates every outstanding token at once.

use std::sync::Arc;

use kernel::id::AdminId;

use crate::application::config::AuthConfig;
use crate::domain::entity::admin::AdminIdentity;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::access_token;
use crate::error::{AuthError, AuthResult};

pub struct VerifyTokenUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AdminRepository> VerifyTokenUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<AdminIdentity> {
        let claims = access_token::verify(token, &self.config.token_secret).map_err(|e| {
            tracing::debug!(reason = %e, "token rejected");
            AuthError::TokenInvalid
        })?;

        let admin = self
            .repo
            .find_by_id(AdminId::new(claims.admin_id))
            .await?
            .ok_or(AuthError::AdminNotFound)?;

        Ok(AdminIdentity::from(&admin))
    }
}
