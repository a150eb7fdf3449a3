//! Feedback Entity

use chrono::{DateTime, Utc};
use kernel::id::FeedbackId;

use crate::domain::value_object::rating::Rating;
use crate::domain::value_object::status::FeedbackStatus;

/// A guest feedback entry as stored
#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    /// Rowid, assigned by the store
    pub id: FeedbackId,
    pub customer_name: String,
    /// Contact number, stored as entered
    pub phone: String,
    pub rating: Rating,
    pub review_text: String,
    /// Favorite dish, if the guest named one
    pub dish_favorite: Option<String>,
    /// Opaque visit date string, if provided
    pub visit_date: Option<String>,
    pub location: String,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated submission, before the store assigns an id
///
/// Always enters the store as `pending`; only an administrator can
/// change the status afterwards.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub customer_name: String,
    pub phone: String,
    pub rating: Rating,
    pub review_text: String,
    pub dish_favorite: Option<String>,
    pub visit_date: Option<String>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
