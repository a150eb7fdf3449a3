//! List Feedback Use Cases
//!
//! Two listings share the repository: the public one is pinned to
//! approved entries, the moderation one takes a status filter.

use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::pagination::{PageInfo, PageRequest};
use crate::domain::value_object::status::{FeedbackStatus, StatusFilter};
use crate::error::{FeedbackError, FeedbackResult};

/// A page of entries with its pagination metadata
#[derive(Debug)]
pub struct FeedbackPage {
    pub entries: Vec<FeedbackEntry>,
    pub page_info: PageInfo,
}

pub struct ListFeedbackUseCase<R> {
    repo: Arc<R>,
    config: Arc<FeedbackConfig>,
}

impl<R: FeedbackRepository> ListFeedbackUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<FeedbackConfig>) -> Self {
        Self { repo, config }
    }

    /// Public listing: approved entries only
    pub async fn public_page(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> FeedbackResult<FeedbackPage> {
        let page = PageRequest::from_query(limit, offset, self.config.public_page_limit);
        self.fetch(StatusFilter::Only(FeedbackStatus::Approved), page)
            .await
    }

    /// Moderation listing: any status, or all
    pub async fn admin_page(
        &self,
        status: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> FeedbackResult<FeedbackPage> {
        let filter = StatusFilter::parse(status).ok_or(FeedbackError::Validation(
            "Invalid status filter. Must be pending, approved, rejected, or all",
        ))?;
        let page = PageRequest::from_query(limit, offset, self.config.admin_page_limit);
        self.fetch(filter, page).await
    }

    async fn fetch(&self, filter: StatusFilter, page: PageRequest) -> FeedbackResult<FeedbackPage> {
        let (entries, total) = self.repo.list(filter, page).await?;
        Ok(FeedbackPage {
            entries,
            page_info: PageInfo::new(page, total),
        })
    }
}
