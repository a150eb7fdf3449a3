//! Statistics Use Cases
//!
//! Aggregates are computed by the store; this layer only rounds the
//! average. Ratings of pending and rejected entries never contribute
//! to an average, so moderation decisions are reflected immediately.

use std::sync::Arc;

use crate::domain::repository::{FeedbackRepository, ModerationStats, PublicStats};
use crate::error::FeedbackResult;

/// Round a mean rating to one decimal place, 0.0 when absent
pub fn round_average(average: Option<f64>) -> f64 {
    (average.unwrap_or(0.0) * 10.0).round() / 10.0
}

pub struct StatsUseCase<R> {
    repo: Arc<R>,
}

impl<R: FeedbackRepository> StatsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Aggregates for the public site (approved entries only)
    pub async fn public(&self) -> FeedbackResult<PublicStats> {
        self.repo.public_stats().await
    }

    /// Aggregates for the moderation dashboard
    pub async fn moderation(&self) -> FeedbackResult<ModerationStats> {
        self.repo.moderation_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_average() {
        assert_eq!(round_average(None), 0.0);
        assert_eq!(round_average(Some(4.0)), 4.0);
        assert_eq!(round_average(Some(4.25)), 4.3);
        assert_eq!(round_average(Some(4.24)), 4.2);
        assert_eq!(round_average(Some(10.0 / 3.0)), 3.3);
    }
}
