//! Auth Configuration

use platform::crypto::random_secret;

/// Token lifetime (24 hours)
const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Runtime configuration for the auth crate
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for access token signing
    pub token_secret: [u8; 32],
    /// Token lifetime in milliseconds
    pub token_ttl_ms: i64,
    /// Site-wide pepper mixed into password hashing
    pub password_pepper: Vec<u8>,
    /// Seed credentials, applied only when the admin table is empty
    pub default_admin_username: String,
    pub default_admin_password: String,
    pub default_admin_full_name: String,
}

impl AuthConfig {
    /// Config with a freshly generated signing secret.
    ///
    /// Tokens do not survive a restart with a random secret; production
    /// deployments supply a stable one via the environment.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: random_secret(),
            token_ttl_ms: TOKEN_TTL_MS,
            password_pepper: Vec::new(),
            default_admin_username: "admin".to_string(),
            default_admin_password: "admin123".to_string(),
            default_admin_full_name: "Restaurant Admin".to_string(),
        }
    }

    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Self::with_random_secret()
        }
    }

    /// Pepper for password hashing, `None` when unset
    pub fn pepper(&self) -> Option<&[u8]> {
        (!self.password_pepper.is_empty()).then_some(self.password_pepper.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_24_hours() {
        let config = AuthConfig::with_random_secret();
        assert_eq!(config.token_ttl_ms, 86_400_000);
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }
}
