//! First-Boot Seeding
//!
//! Creates the single administrator account when the admin table is
//! empty. Runs on every startup; a non-empty table makes it a no-op,
//! so existing credentials are never overwritten.

use crate::application::config::AuthConfig;
use crate::domain::entity::admin::NewAdmin;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

pub async fn ensure_default_admin<R: AdminRepository>(
    repo: &R,
    config: &AuthConfig,
) -> AuthResult<()> {
    if repo.count().await? > 0 {
        return Ok(());
    }

    let password = ClearTextPassword::new(config.default_admin_password.clone())
        .map_err(|e| AuthError::Internal(format!("default admin password: {e}")))?;
    let password_hash = password
        .hash(config.pepper())
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    let id = repo
        .create(NewAdmin::new(
            config.default_admin_username.clone(),
            config.default_admin_full_name.clone(),
            password_hash,
        ))
        .await?;

    tracing::info!(
        admin_id = id.value(),
        username = %config.default_admin_username,
        "seeded default admin account; change the password after first login"
    );

    Ok(())
}
