//! SQLite Feedback Repository

use chrono::{DateTime, Utc};
use kernel::id::FeedbackId;
use sqlx::SqlitePool;

use crate::domain::entity::feedback::{FeedbackEntry, NewFeedback};
use crate::domain::repository::{FeedbackRepository, ModerationStats, PublicStats};
use crate::domain::value_object::pagination::PageRequest;
use crate::domain::value_object::rating::Rating;
use crate::domain::value_object::status::{FeedbackStatus, StatusFilter};
use crate::error::{FeedbackError, FeedbackResult};

#[derive(Debug, Clone)]
pub struct SqliteFeedbackRepository {
    pool: SqlitePool,
}

impl SqliteFeedbackRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape for the feedback table
#[derive(sqlx::FromRow)]
struct FeedbackRow {
    id: i64,
    customer_name: String,
    phone: String,
    rating: i64,
    review_text: String,
    dish_favorite: Option<String>,
    visit_date: Option<String>,
    location: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn into_entry(self) -> FeedbackResult<FeedbackEntry> {
        let rating = Rating::new(self.rating)
            .ok_or_else(|| FeedbackError::Internal(format!("corrupt rating on row {}", self.id)))?;
        let status = FeedbackStatus::from_code(&self.status)
            .ok_or_else(|| FeedbackError::Internal(format!("corrupt status on row {}", self.id)))?;

        Ok(FeedbackEntry {
            id: FeedbackId::new(self.id),
            customer_name: self.customer_name,
            phone: self.phone,
            rating,
            review_text: self.review_text,
            dish_favorite: self.dish_favorite,
            visit_date: self.visit_date,
            location: self.location,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Aggregate row for the moderation dashboard
#[derive(sqlx::FromRow)]
struct ModerationStatsRow {
    total_feedback: i64,
    pending_count: i64,
    approved_count: i64,
    rejected_count: i64,
    average_rating: Option<f64>,
    today_count: i64,
}

/// Aggregate row for the public stats endpoint
#[derive(sqlx::FromRow)]
struct PublicStatsRow {
    total_reviews: i64,
    average_rating: Option<f64>,
    one_star: i64,
    two_star: i64,
    three_star: i64,
    four_star: i64,
    five_star: i64,
}

impl FeedbackRepository for SqliteFeedbackRepository {
    async fn insert(&self, feedback: NewFeedback) -> FeedbackResult<FeedbackId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO feedback (
                customer_name, phone, rating, review_text,
                dish_favorite, visit_date, location, status,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?, ?)
            RETURNING id
            "#,
        )
        .bind(&feedback.customer_name)
        .bind(&feedback.phone)
        .bind(feedback.rating.value())
        .bind(&feedback.review_text)
        .bind(&feedback.dish_favorite)
        .bind(&feedback.visit_date)
        .bind(&feedback.location)
        .bind(feedback.created_at)
        .bind(feedback.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(FeedbackId::new(id))
    }

    async fn list(
        &self,
        filter: StatusFilter,
        page: PageRequest,
    ) -> FeedbackResult<(Vec<FeedbackEntry>, i64)> {
        // Newest first; id breaks ties between same-instant rows
        let (rows, total): (Vec<FeedbackRow>, i64) = match filter.status() {
            Some(status) => {
                let rows = sqlx::query_as(
                    "SELECT id, customer_name, phone, rating, review_text, \
                     dish_favorite, visit_date, location, status, created_at, updated_at \
                     FROM feedback WHERE status = ? \
                     ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                )
                .bind(status.code())
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await?;
                let total = sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE status = ?")
                    .bind(status.code())
                    .fetch_one(&self.pool)
                    .await?;
                (rows, total)
            }
            None => {
                let rows = sqlx::query_as(
                    "SELECT id, customer_name, phone, rating, review_text, \
                     dish_favorite, visit_date, location, status, created_at, updated_at \
                     FROM feedback ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                )
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await?;
                let total = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
                    .fetch_one(&self.pool)
                    .await?;
                (rows, total)
            }
        };

        let entries = rows
            .into_iter()
            .map(FeedbackRow::into_entry)
            .collect::<FeedbackResult<Vec<_>>>()?;

        Ok((entries, total))
    }

    async fn set_status(&self, id: FeedbackId, status: FeedbackStatus) -> FeedbackResult<()> {
        let result = sqlx::query(
            "UPDATE feedback SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(status.code())
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(FeedbackError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: FeedbackId) -> FeedbackResult<()> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(FeedbackError::NotFound);
        }
        Ok(())
    }

    async fn moderation_stats(&self) -> FeedbackResult<ModerationStats> {
        let row: ModerationStatsRow = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total_feedback,
                COUNT(CASE WHEN status = 'pending' THEN 1 END) AS pending_count,
                COUNT(CASE WHEN status = 'approved' THEN 1 END) AS approved_count,
                COUNT(CASE WHEN status = 'rejected' THEN 1 END) AS rejected_count,
                AVG(CASE WHEN status = 'approved' THEN rating END) AS average_rating,
                COUNT(CASE WHEN DATE(created_at) = DATE('now') THEN 1 END) AS today_count
            FROM feedback
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(ModerationStats {
            total_feedback: row.total_feedback,
            pending_count: row.pending_count,
            approved_count: row.approved_count,
            rejected_count: row.rejected_count,
            average_rating: row.average_rating,
            today_count: row.today_count,
        })
    }

    async fn public_stats(&self) -> FeedbackResult<PublicStats> {
        let row: PublicStatsRow = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total_reviews,
                AVG(rating) AS average_rating,
                COUNT(CASE WHEN rating = 1 THEN 1 END) AS one_star,
                COUNT(CASE WHEN rating = 2 THEN 1 END) AS two_star,
                COUNT(CASE WHEN rating = 3 THEN 1 END) AS three_star,
                COUNT(CASE WHEN rating = 4 THEN 1 END) AS four_star,
                COUNT(CASE WHEN rating = 5 THEN 1 END) AS five_star
            FROM feedback
            WHERE status = 'approved'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(PublicStats {
            total_reviews: row.total_reviews,
            average_rating: row.average_rating,
            rating_breakdown: [
                row.one_star,
                row.two_star,
                row.three_star,
                row.four_star,
                row.five_star,
            ],
        })
    }
}
