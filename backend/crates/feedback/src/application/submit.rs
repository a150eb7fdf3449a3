//! Submit Feedback Use Case
//!
//! Validates a public submission and stores it as `pending`. All
//! validation happens before any store access, so a rejected
//! submission never touches the database.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::FeedbackId;

use crate::application::config::FeedbackConfig;
use crate::domain::entity::feedback::NewFeedback;
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::phone::is_valid_phone;
use crate::domain::value_object::rating::Rating;
use crate::error::{FeedbackError, FeedbackResult};

/// Raw submission input, as received from the client
#[derive(Debug, Default)]
pub struct SubmitInput {
    pub customer_name: String,
    pub phone: String,
    pub rating: Option<i64>,
    pub review_text: String,
    pub dish_favorite: Option<String>,
    pub visit_date: Option<String>,
    pub location: Option<String>,
}

pub struct SubmitFeedbackUseCase<R> {
    repo: Arc<R>,
    config: Arc<FeedbackConfig>,
}

impl<R: FeedbackRepository> SubmitFeedbackUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<FeedbackConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SubmitInput) -> FeedbackResult<FeedbackId> {
        let feedback = self.validate(input)?;
        let id = self.repo.insert(feedback).await?;

        tracing::info!(feedback_id = id.value(), "feedback submitted");
        Ok(id)
    }

    fn validate(&self, input: SubmitInput) -> FeedbackResult<NewFeedback> {
        let customer_name = input.customer_name.trim();
        let phone = input.phone.trim();
        let review_text = input.review_text.trim();

        if customer_name.is_empty()
            || phone.is_empty()
            || review_text.is_empty()
            || input.rating.is_none()
        {
            return Err(FeedbackError::Validation(
                "Customer name, phone, rating, and review text are required",
            ));
        }

        let rating = input
            .rating
            .and_then(Rating::new)
            .ok_or(FeedbackError::Validation("Rating must be between 1 and 5"))?;

        if !is_valid_phone(phone) {
            return Err(FeedbackError::Validation(
                "Please provide a valid phone number",
            ));
        }

        let dish_favorite = input
            .dish_favorite
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let location = input
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.config.default_location)
            .to_string();

        let now = Utc::now();
        Ok(NewFeedback {
            customer_name: customer_name.to_string(),
            phone: phone.to_string(),
            rating,
            review_text: review_text.to_string(),
            dish_favorite,
            visit_date: input.visit_date.filter(|s| !s.is_empty()),
            location,
            created_at: now,
            updated_at: now,
        })
    }
}
