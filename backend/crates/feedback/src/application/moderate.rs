//! Moderation Use Cases
//!
//! Status changes and deletion. The state machine is fully connected:
//! any status may move to any other, so a moderation decision can
//! always be undone. Deletion is the only exit.

use std::sync::Arc;

use kernel::id::FeedbackId;

use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::status::FeedbackStatus;
use crate::error::{FeedbackError, FeedbackResult};

pub struct SetStatusUseCase<R> {
    repo: Arc<R>,
}

impl<R: FeedbackRepository> SetStatusUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: FeedbackId, status: &str) -> FeedbackResult<FeedbackStatus> {
        let status = FeedbackStatus::from_code(status).ok_or(FeedbackError::InvalidStatus)?;

        self.repo.set_status(id, status).await?;

        tracing::info!(feedback_id = id.value(), status = %status, "feedback status changed");
        Ok(status)
    }
}

pub struct DeleteFeedbackUseCase<R> {
    repo: Arc<R>,
}

impl<R: FeedbackRepository> DeleteFeedbackUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: FeedbackId) -> FeedbackResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(feedback_id = id.value(), "feedback deleted");
        Ok(())
    }
}
