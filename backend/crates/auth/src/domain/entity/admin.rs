//! Administrator Entity
//!
//! The moderation account. There is exactly one seeded row at first
//! boot; administrators are never created through the public API.

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use platform::password::HashedPassword;

/// Administrator entity as stored
#[derive(Debug, Clone)]
pub struct Admin {
    /// Rowid, assigned by the store
    pub id: AdminId,
    /// Login name (unique)
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Argon2id hash in PHC format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// A new administrator row, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub full_name: String,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAdmin {
    pub fn new(username: String, full_name: String, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            username,
            full_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile changes applied by the administrator
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub full_name: String,
    /// Present only when the password is being changed
    pub password_hash: Option<HashedPassword>,
}

/// The non-sensitive identity attached to authenticated requests
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub id: AdminId,
    pub username: String,
    pub full_name: String,
}

impl From<&Admin> for AdminIdentity {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
            full_name: admin.full_name.clone(),
        }
    }
}
