//! Profile Update Use Case
//!
//! Username and display name always change together; the password
//! changes only when a new one is supplied, and then only after the
//! current password has been re-verified.

use std::sync::Arc;

use kernel::id::AdminId;

use crate::application::config::AuthConfig;
use crate::domain::entity::admin::{AdminIdentity, ProfileUpdate};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use platform::password::{ClearTextPassword, HashedPassword};

/// Input for a profile update
#[derive(Debug)]
pub struct UpdateProfileInput {
    pub username: String,
    pub full_name: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub struct UpdateProfileUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AdminRepository> UpdateProfileUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        admin_id: AdminId,
        input: UpdateProfileInput,
    ) -> AuthResult<AdminIdentity> {
        let username = input.username.trim().to_string();
        let full_name = input.full_name.trim().to_string();
        if username.is_empty() || full_name.is_empty() {
            return Err(AuthError::MissingField("Username and full name are required"));
        }

        let password_hash = match input.new_password.as_deref() {
            Some(new_password) if !new_password.is_empty() => {
                Some(self.rehash(admin_id, input.current_password.as_deref(), new_password).await?)
            }
            _ => None,
        };

        let changed_password = password_hash.is_some();
        self.repo
            .update_profile(
                admin_id,
                ProfileUpdate {
                    username: username.clone(),
                    full_name: full_name.clone(),
                    password_hash,
                },
            )
            .await?;

        tracing::info!(
            admin_id = admin_id.value(),
            changed_password,
            "admin profile updated"
        );

        Ok(AdminIdentity {
            id: admin_id,
            username,
            full_name,
        })
    }

    async fn rehash(
        &self,
        admin_id: AdminId,
        current_password: Option<&str>,
        new_password: &str,
    ) -> AuthResult<HashedPassword> {
        let current = current_password
            .filter(|p| !p.is_empty())
            .ok_or(AuthError::CurrentPasswordRequired)?;

        let admin = self
            .repo
            .find_by_id(admin_id)
            .await?
            .ok_or(AuthError::AdminNotFound)?;

        let attempt = ClearTextPassword::new_unchecked(current.to_string());
        if !admin.password_hash.verify(&attempt, self.config.pepper()) {
            return Err(AuthError::CurrentPasswordIncorrect);
        }

        let validated = ClearTextPassword::new(new_password.to_string())
            .map_err(|e| AuthError::PasswordPolicy(e.to_string()))?;
        validated
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}
