//! Feedback DTOs
//!
//! Feedback rows travel in snake_case, envelope and meta fields in
//! camelCase. Public items omit the phone number and status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::repository::{ModerationStats, PublicStats};
use crate::domain::value_object::pagination::PageInfo;
use crate::domain::value_object::status::FeedbackStatus;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    pub rating: Option<i64>,
    #[serde(default)]
    pub review_text: String,
    pub dish_favorite: Option<String>,
    pub visit_date: Option<String>,
    pub location: Option<String>,
}

/// Listing query parameters
///
/// `limit`/`offset` arrive as raw strings so a non-numeric value
/// falls back to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl ListQuery {
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset.as_deref().and_then(|s| s.parse().ok())
    }
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    #[serde(default)]
    pub status: String,
}

// ============================================================================
// Feedback items
// ============================================================================

/// Approved entry as shown on the public site
#[derive(Debug, Serialize)]
pub struct PublicFeedbackItem {
    pub id: i64,
    pub customer_name: String,
    pub rating: i64,
    pub review_text: String,
    pub dish_favorite: Option<String>,
    pub visit_date: Option<String>,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackEntry> for PublicFeedbackItem {
    fn from(entry: FeedbackEntry) -> Self {
        Self {
            id: entry.id.value(),
            customer_name: entry.customer_name,
            rating: entry.rating.value(),
            review_text: entry.review_text,
            dish_favorite: entry.dish_favorite,
            visit_date: entry.visit_date,
            location: entry.location,
            created_at: entry.created_at,
        }
    }
}

/// Full entry as shown on the moderation dashboard
#[derive(Debug, Serialize)]
pub struct AdminFeedbackItem {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub rating: i64,
    pub review_text: String,
    pub dish_favorite: Option<String>,
    pub visit_date: Option<String>,
    pub location: String,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FeedbackEntry> for AdminFeedbackItem {
    fn from(entry: FeedbackEntry) -> Self {
        Self {
            id: entry.id.value(),
            customer_name: entry.customer_name,
            phone: entry.phone,
            rating: entry.rating.value(),
            review_text: entry.review_text,
            dish_favorite: entry.dish_favorite,
            visit_date: entry.visit_date,
            location: entry.location,
            status: entry.status,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub message: &'static str,
    pub feedback_id: i64,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse<T> {
    pub feedback: Vec<T>,
    pub pagination: PageInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusResponse {
    pub message: String,
    pub feedback_id: i64,
    pub status: FeedbackStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFeedbackResponse {
    pub message: &'static str,
    pub feedback_id: i64,
}

/// Per-star counts keyed by the star value
#[derive(Debug, Serialize)]
pub struct RatingBreakdown {
    #[serde(rename = "1")]
    pub one: i64,
    #[serde(rename = "2")]
    pub two: i64,
    #[serde(rename = "3")]
    pub three: i64,
    #[serde(rename = "4")]
    pub four: i64,
    #[serde(rename = "5")]
    pub five: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStatsResponse {
    pub total_reviews: i64,
    pub average_rating: f64,
    pub rating_breakdown: RatingBreakdown,
}

impl PublicStatsResponse {
    pub fn from_stats(stats: PublicStats, average_rating: f64) -> Self {
        let [one, two, three, four, five] = stats.rating_breakdown;
        Self {
            total_reviews: stats.total_reviews,
            average_rating,
            rating_breakdown: RatingBreakdown {
                one,
                two,
                three,
                four,
                five,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationStatsResponse {
    pub total_feedback: i64,
    pub pending_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    pub average_rating: f64,
    pub today_count: i64,
}

impl ModerationStatsResponse {
    pub fn from_stats(stats: ModerationStats, average_rating: f64) -> Self {
        Self {
            total_feedback: stats.total_feedback,
            pending_count: stats.pending_count,
            approved_count: stats.approved_count,
            rejected_count: stats.rejected_count,
            average_rating,
            today_count: stats.today_count,
        }
    }
}
