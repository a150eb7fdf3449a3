//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::FeedbackId;

use crate::application::config::FeedbackConfig;
use crate::application::list::ListFeedbackUseCase;
use crate::application::moderate::{DeleteFeedbackUseCase, SetStatusUseCase};
use crate::application::stats::{StatsUseCase, round_average};
use crate::application::submit::{SubmitFeedbackUseCase, SubmitInput};
use crate::domain::repository::FeedbackRepository;
use crate::error::FeedbackResult;
use crate::presentation::dto::{
    AdminFeedbackItem, DeleteFeedbackResponse, FeedbackListResponse, ListQuery,
    ModerationStatsResponse, PublicFeedbackItem, PublicStatsResponse, SetStatusRequest,
    SetStatusResponse, SubmitFeedbackRequest, SubmitFeedbackResponse,
};

/// Shared state for feedback handlers
#[derive(Clone)]
pub struct FeedbackAppState<R>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<FeedbackConfig>,
}

// ============================================================================
// Public endpoints
// ============================================================================

/// POST /api/feedback
pub async fn submit_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> FeedbackResult<(StatusCode, Json<SubmitFeedbackResponse>)>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitFeedbackUseCase::new(state.repo.clone(), state.config.clone());

    let input = SubmitInput {
        customer_name: req.customer_name,
        phone: req.phone,
        rating: req.rating,
        review_text: req.review_text,
        dish_favorite: req.dish_favorite,
        visit_date: req.visit_date,
        location: req.location,
    };

    let id = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitFeedbackResponse {
            message: "Thank you for your feedback! It will be reviewed before being published.",
            feedback_id: id.value(),
        }),
    ))
}

/// GET /api/feedback/public
pub async fn list_public_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    Query(query): Query<ListQuery>,
) -> FeedbackResult<Json<FeedbackListResponse<PublicFeedbackItem>>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListFeedbackUseCase::new(state.repo.clone(), state.config.clone());
    let page = use_case.public_page(query.limit(), query.offset()).await?;

    Ok(Json(FeedbackListResponse {
        feedback: page.entries.into_iter().map(Into::into).collect(),
        pagination: page.page_info,
    }))
}

/// GET /api/feedback/stats
pub async fn public_stats<R>(
    State(state): State<FeedbackAppState<R>>,
) -> FeedbackResult<Json<PublicStatsResponse>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = StatsUseCase::new(state.repo.clone());
    let stats = use_case.public().await?;
    let average = round_average(stats.average_rating);

    Ok(Json(PublicStatsResponse::from_stats(stats, average)))
}

// ============================================================================
// Moderation endpoints (bearer-gated by the composing router)
// ============================================================================

/// GET /api/admin/feedback
pub async fn list_admin_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    Query(query): Query<ListQuery>,
) -> FeedbackResult<Json<FeedbackListResponse<AdminFeedbackItem>>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListFeedbackUseCase::new(state.repo.clone(), state.config.clone());
    let page = use_case
        .admin_page(query.status.as_deref(), query.limit(), query.offset())
        .await?;

    Ok(Json(FeedbackListResponse {
        feedback: page.entries.into_iter().map(Into::into).collect(),
        pagination: page.page_info,
    }))
}

/// PUT /api/admin/feedback/{id}/status
pub async fn set_feedback_status<R>(
    State(state): State<FeedbackAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<SetStatusRequest>,
) -> FeedbackResult<Json<SetStatusResponse>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = SetStatusUseCase::new(state.repo.clone());
    let status = use_case.execute(FeedbackId::new(id), &req.status).await?;

    Ok(Json(SetStatusResponse {
        message: format!("Feedback {status} successfully"),
        feedback_id: id,
        status,
    }))
}

/// DELETE /api/admin/feedback/{id}
pub async fn delete_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    Path(id): Path<i64>,
) -> FeedbackResult<Json<DeleteFeedbackResponse>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteFeedbackUseCase::new(state.repo.clone());
    use_case.execute(FeedbackId::new(id)).await?;

    Ok(Json(DeleteFeedbackResponse {
        message: "Feedback deleted successfully",
        feedback_id: id,
    }))
}

/// GET /api/admin/stats
pub async fn moderation_stats<R>(
    State(state): State<FeedbackAppState<R>>,
) -> FeedbackResult<Json<ModerationStatsResponse>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = StatsUseCase::new(state.repo.clone());
    let stats = use_case.moderation().await?;
    let average = round_average(stats.average_rating);

    Ok(Json(ModerationStatsResponse::from_stats(stats, average)))
}
