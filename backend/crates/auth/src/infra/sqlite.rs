//! SQLite Admin Repository

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use sqlx::SqlitePool;

use crate::domain::entity::admin::{Admin, NewAdmin, ProfileUpdate};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};
use platform::password::HashedPassword;

/// Extended result code for UNIQUE constraint violations
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

#[derive(Debug, Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape for the admin table
#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i64,
    username: String,
    full_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> AuthResult<Admin> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|_| AuthError::Internal(format!("corrupt password hash for admin {}", self.id)))?;

        Ok(Admin {
            id: AdminId::new(self.id),
            username: self.username,
            full_name: self.full_name,
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e.as_database_error().and_then(|d| d.code()),
        Some(code) if code == SQLITE_CONSTRAINT_UNIQUE
    )
}

impl AdminRepository for SqliteAuthRepository {
    async fn count(&self) -> AuthResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, admin: NewAdmin) -> AuthResult<AdminId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO admin (username, password_hash, full_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&admin.username)
        .bind(admin.password_hash.as_phc_string())
        .bind(&admin.full_name)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UsernameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(AdminId::new(id))
    }

    async fn find_by_id(&self, id: AdminId) -> AuthResult<Option<Admin>> {
        let row: Option<AdminRow> = sqlx::query_as(
            "SELECT id, username, full_name, password_hash, created_at, updated_at \
             FROM admin WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Admin>> {
        let row: Option<AdminRow> = sqlx::query_as(
            "SELECT id, username, full_name, password_hash, created_at, updated_at \
             FROM admin WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn update_profile(&self, id: AdminId, update: ProfileUpdate) -> AuthResult<()> {
        let result = match &update.password_hash {
            Some(hash) => {
                sqlx::query(
                    "UPDATE admin SET username = ?, full_name = ?, password_hash = ?, \
                     updated_at = CURRENT_TIMESTAMP WHERE id = ?",
                )
                .bind(&update.username)
                .bind(&update.full_name)
                .bind(hash.as_phc_string())
                .bind(id.value())
                .execute(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "UPDATE admin SET username = ?, full_name = ?, \
                     updated_at = CURRENT_TIMESTAMP WHERE id = ?",
                )
                .bind(&update.username)
                .bind(&update.full_name)
                .bind(id.value())
                .execute(&self.pool)
                .await
            }
        };

        let result = result.map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UsernameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::AdminNotFound);
        }
        Ok(())
    }
}
