//! Login Use Case
//!
//! Credential check and token issuance. Lookup failure and password
//! mismatch collapse into the same `InvalidCredentials` response so
//! the endpoint does not reveal which usernames exist.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::admin::{Admin, AdminIdentity};
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::access_token::{self, TokenClaims};
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

/// Successful login output
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub admin: AdminIdentity,
}

pub struct LoginUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AdminRepository> LoginUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, username: &str, password: &str) -> AuthResult<LoginOutcome> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField(
                "Username and password are required",
            ));
        }

        let admin = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.check_password(&admin, password)?;

        let claims = TokenClaims {
            admin_id: admin.id.value(),
            username: admin.username.clone(),
            exp_ms: Utc::now().timestamp_millis() + self.config.token_ttl_ms,
        };
        let token = access_token::issue(&claims, &self.config.token_secret);

        tracing::info!(admin_id = admin.id.value(), username = %admin.username, "admin logged in");

        Ok(LoginOutcome {
            token,
            admin: AdminIdentity::from(&admin),
        })
    }

    fn check_password(&self, admin: &Admin, password: &str) -> AuthResult<()> {
        // Policy checks are skipped for login attempts; the stored hash
        // decides, not whatever the current policy happens to be.
        let attempt = ClearTextPassword::new_unchecked(password.to_string());
        if admin.password_hash.verify(&attempt, self.config.pepper()) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
