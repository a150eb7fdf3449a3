//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AdminId;

use crate::domain::entity::admin::{Admin, NewAdmin, ProfileUpdate};
use crate::error::AuthResult;

/// Administrator repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Number of administrator rows. Used by first-boot seeding.
    async fn count(&self) -> AuthResult<i64>;

    /// Insert a new administrator, returning the assigned id.
    async fn create(&self, admin: NewAdmin) -> AuthResult<AdminId>;

    /// Look up by rowid.
    async fn find_by_id(&self, id: AdminId) -> AuthResult<Option<Admin>>;

    /// Look up by login name.
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Admin>>;

    /// Apply a profile update to an existing row.
    ///
    /// Fails with `UsernameTaken` when the new username collides and
    /// `AdminNotFound` when the row no longer exists.
    async fn update_profile(&self, id: AdminId, update: ProfileUpdate) -> AuthResult<()>;
}
