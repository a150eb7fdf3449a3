//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin entity, access-token value object, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Administrator login with username + password
//! - Signed, time-limited bearer tokens (HMAC-SHA256, 24h expiry)
//! - Profile update with current-password gate for password changes
//! - Default administrator seeded at first boot
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; verification is constant-effort
//! - Token signature checked with constant-time comparison
//! - A valid token must still resolve to an existing admin row

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::bootstrap::ensure_default_admin;
pub use application::config::AuthConfig;
pub use domain::entity::admin::AdminIdentity;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::router::{auth_router, profile_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::sqlite::SqliteAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
