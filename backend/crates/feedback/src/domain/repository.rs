//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::FeedbackId;

use crate::domain::entity::feedback::{FeedbackEntry, NewFeedback};
use crate::domain::value_object::pagination::PageRequest;
use crate::domain::value_object::status::{FeedbackStatus, StatusFilter};
use crate::error::FeedbackResult;

/// Aggregate counts for the moderation dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModerationStats {
    pub total_feedback: i64,
    pub pending_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    /// Mean rating over approved entries, `None` when there are none
    pub average_rating: Option<f64>,
    /// Entries created on the current UTC calendar day
    pub today_count: i64,
}

/// Aggregates over approved entries for the public site
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PublicStats {
    pub total_reviews: i64,
    /// Mean rating, `None` when there are no approved entries
    pub average_rating: Option<f64>,
    /// Approved entry counts per star, index 0 = one star
    pub rating_breakdown: [i64; 5],
}

/// Feedback repository trait
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// Insert a new entry as `pending`, returning the assigned id.
    async fn insert(&self, feedback: NewFeedback) -> FeedbackResult<FeedbackId>;

    /// Page of entries matching the filter, newest first, with the
    /// total count over the same filter.
    async fn list(
        &self,
        filter: StatusFilter,
        page: PageRequest,
    ) -> FeedbackResult<(Vec<FeedbackEntry>, i64)>;

    /// Set the moderation status, refreshing `updated_at`.
    ///
    /// Fails with `NotFound` when the id does not exist.
    async fn set_status(&self, id: FeedbackId, status: FeedbackStatus) -> FeedbackResult<()>;

    /// Permanently remove an entry. `NotFound` when absent.
    async fn delete(&self, id: FeedbackId) -> FeedbackResult<()>;

    /// Dashboard aggregates over all entries.
    async fn moderation_stats(&self) -> FeedbackResult<ModerationStats>;

    /// Public aggregates over approved entries.
    async fn public_stats(&self) -> FeedbackResult<PublicStats>;
}
