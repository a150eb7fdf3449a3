//! Feedback Crate Tests
//!
//! Use-case tests run against an in-memory repository so they cover
//! the same paths the SQLite implementation drives in production.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::FeedbackId;

use crate::application::config::FeedbackConfig;
use crate::application::list::ListFeedbackUseCase;
use crate::application::moderate::{DeleteFeedbackUseCase, SetStatusUseCase};
use crate::application::stats::{StatsUseCase, round_average};
use crate::application::submit::{SubmitFeedbackUseCase, SubmitInput};
use crate::domain::entity::feedback::{FeedbackEntry, NewFeedback};
use crate::domain::repository::{FeedbackRepository, ModerationStats, PublicStats};
use crate::domain::value_object::pagination::PageRequest;
use crate::domain::value_object::status::{FeedbackStatus, StatusFilter};
use crate::error::{FeedbackError, FeedbackResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemFeedbackRepo {
    rows: Arc<Mutex<Vec<FeedbackEntry>>>,
}

impl MemFeedbackRepo {
    fn status_of(&self, id: FeedbackId) -> Option<FeedbackStatus> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.status)
    }
}

impl FeedbackRepository for MemFeedbackRepo {
    async fn insert(&self, feedback: NewFeedback) -> FeedbackResult<FeedbackId> {
        let mut rows = self.rows.lock().unwrap();
        let id = FeedbackId::new(rows.iter().map(|e| e.id.value()).max().unwrap_or(0) + 1);
        rows.push(FeedbackEntry {
            id,
            customer_name: feedback.customer_name,
            phone: feedback.phone,
            rating: feedback.rating,
            review_text: feedback.review_text,
            dish_favorite: feedback.dish_favorite,
            visit_date: feedback.visit_date,
            location: feedback.location,
            status: FeedbackStatus::Pending,
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        });
        Ok(id)
    }

    async fn list(
        &self,
        filter: StatusFilter,
        page: PageRequest,
    ) -> FeedbackResult<(Vec<FeedbackEntry>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<FeedbackEntry> = rows
            .iter()
            .filter(|e| filter.status().is_none_or(|s| e.status == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.value().cmp(&a.id.value()))
        });
        let total = matching.len() as i64;
        let entries = matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();
        Ok((entries, total))
    }

    async fn set_status(&self, id: FeedbackId, status: FeedbackStatus) -> FeedbackResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(FeedbackError::NotFound)?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: FeedbackId) -> FeedbackResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(FeedbackError::NotFound);
        }
        Ok(())
    }

    async fn moderation_stats(&self) -> FeedbackResult<ModerationStats> {
        let rows = self.rows.lock().unwrap();
        let count = |s| rows.iter().filter(|e| e.status == s).count() as i64;
        let approved: Vec<i64> = rows
            .iter()
            .filter(|e| e.status == FeedbackStatus::Approved)
            .map(|e| e.rating.value())
            .collect();
        let today = Utc::now().date_naive();
        Ok(ModerationStats {
            total_feedback: rows.len() as i64,
            pending_count: count(FeedbackStatus::Pending),
            approved_count: count(FeedbackStatus::Approved),
            rejected_count: count(FeedbackStatus::Rejected),
            average_rating: (!approved.is_empty())
                .then(|| approved.iter().sum::<i64>() as f64 / approved.len() as f64),
            today_count: rows
                .iter()
                .filter(|e| e.created_at.date_naive() == today)
                .count() as i64,
        })
    }

    async fn public_stats(&self) -> FeedbackResult<PublicStats> {
        let rows = self.rows.lock().unwrap();
        let approved: Vec<i64> = rows
            .iter()
            .filter(|e| e.status == FeedbackStatus::Approved)
            .map(|e| e.rating.value())
            .collect();
        let mut breakdown = [0i64; 5];
        for rating in &approved {
            breakdown[(rating - 1) as usize] += 1;
        }
        Ok(PublicStats {
            total_reviews: approved.len() as i64,
            average_rating: (!approved.is_empty())
                .then(|| approved.iter().sum::<i64>() as f64 / approved.len() as f64),
            rating_breakdown: breakdown,
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> Arc<FeedbackConfig> {
    Arc::new(FeedbackConfig::default())
}

fn valid_input(name: &str, rating: i64) -> SubmitInput {
    SubmitInput {
        customer_name: name.to_string(),
        phone: "555-123-4567".to_string(),
        rating: Some(rating),
        review_text: "The pasta was excellent.".to_string(),
        dish_favorite: None,
        visit_date: None,
        location: None,
    }
}

async fn submit(repo: &Arc<MemFeedbackRepo>, name: &str, rating: i64) -> FeedbackId {
    SubmitFeedbackUseCase::new(repo.clone(), test_config())
        .execute(valid_input(name, rating))
        .await
        .unwrap()
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_stores_pending() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let id = submit(&repo, "Alice", 5).await;

    assert_eq!(repo.status_of(id), Some(FeedbackStatus::Pending));
}

#[tokio::test]
async fn test_submit_missing_fields() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let use_case = SubmitFeedbackUseCase::new(repo.clone(), test_config());

    for input in [
        SubmitInput {
            customer_name: "   ".to_string(),
            ..valid_input("x", 5)
        },
        SubmitInput {
            phone: String::new(),
            ..valid_input("Alice", 5)
        },
        SubmitInput {
            rating: None,
            ..valid_input("Alice", 5)
        },
        SubmitInput {
            review_text: " ".to_string(),
            ..valid_input("Alice", 5)
        },
    ] {
        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Customer name, phone, rating, and review text are required"
        );
    }

    // Nothing reached the store
    let (entries, total) = repo
        .list(StatusFilter::All, PageRequest { limit: 10, offset: 0 })
        .await
        .unwrap();
    assert!(entries.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_submit_rating_out_of_range() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let use_case = SubmitFeedbackUseCase::new(repo, test_config());

    for rating in [0, 6, -1] {
        let err = use_case.execute(valid_input("Alice", rating)).await.unwrap_err();
        assert_eq!(err.to_string(), "Rating must be between 1 and 5");
    }
}

#[tokio::test]
async fn test_submit_invalid_phone() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let use_case = SubmitFeedbackUseCase::new(repo, test_config());

    let input = SubmitInput {
        phone: "12345".to_string(),
        ..valid_input("Alice", 4)
    };
    let err = use_case.execute(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Please provide a valid phone number");
}

#[tokio::test]
async fn test_submit_normalizes_optionals() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let use_case = SubmitFeedbackUseCase::new(repo.clone(), test_config());

    let input = SubmitInput {
        customer_name: "  Alice  ".to_string(),
        dish_favorite: Some("   ".to_string()),
        location: None,
        ..valid_input("Alice", 4)
    };
    use_case.execute(input).await.unwrap();

    let (entries, _) = repo
        .list(StatusFilter::All, PageRequest { limit: 10, offset: 0 })
        .await
        .unwrap();
    let entry = &entries[0];
    assert_eq!(entry.customer_name, "Alice");
    assert_eq!(entry.dish_favorite, None);
    assert_eq!(entry.location, "Main Branch");
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_public_listing_approved_only() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let a = submit(&repo, "Alice", 5).await;
    let _b = submit(&repo, "Bob", 3).await;
    let c = submit(&repo, "Cara", 4).await;

    repo.set_status(a, FeedbackStatus::Approved).await.unwrap();
    repo.set_status(c, FeedbackStatus::Rejected).await.unwrap();

    let list = ListFeedbackUseCase::new(repo, test_config());
    let page = list.public_page(None, None).await.unwrap();

    assert_eq!(page.page_info.total, 1);
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].customer_name, "Alice");
}

#[tokio::test]
async fn test_admin_listing_filters() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let a = submit(&repo, "Alice", 5).await;
    let _b = submit(&repo, "Bob", 3).await;
    repo.set_status(a, FeedbackStatus::Approved).await.unwrap();

    let list = ListFeedbackUseCase::new(repo, test_config());

    let all = list.admin_page(None, None, None).await.unwrap();
    assert_eq!(all.page_info.total, 2);
    let all = list.admin_page(Some("all"), None, None).await.unwrap();
    assert_eq!(all.page_info.total, 2);

    let pending = list.admin_page(Some("pending"), None, None).await.unwrap();
    assert_eq!(pending.page_info.total, 1);
    assert_eq!(pending.entries[0].customer_name, "Bob");

    let err = list.admin_page(Some("archived"), None, None).await.unwrap_err();
    assert!(matches!(err, FeedbackError::Validation(_)));
}

#[tokio::test]
async fn test_pagination_has_more() {
    let repo = Arc::new(MemFeedbackRepo::default());
    for i in 0..25 {
        submit(&repo, &format!("Guest {i}"), 4).await;
    }

    let list = ListFeedbackUseCase::new(repo, test_config());

    let first = list.admin_page(None, Some(20), Some(0)).await.unwrap();
    assert_eq!(first.entries.len(), 20);
    assert!(first.page_info.has_more);

    let last = list.admin_page(None, Some(20), Some(20)).await.unwrap();
    assert_eq!(last.entries.len(), 5);
    assert!(!last.page_info.has_more);
    assert_eq!(last.page_info.total, 25);

    // Past the end: empty page, hasMore stays false
    let beyond = list.admin_page(None, Some(20), Some(100)).await.unwrap();
    assert!(beyond.entries.is_empty());
    assert!(!beyond.page_info.has_more);
}

// ============================================================================
// Moderation
// ============================================================================

#[tokio::test]
async fn test_set_status_all_transitions() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let id = submit(&repo, "Alice", 5).await;

    let use_case = SetStatusUseCase::new(repo.clone());

    // Fully connected state machine, including undo back to pending
    for (code, expected) in [
        ("approved", FeedbackStatus::Approved),
        ("rejected", FeedbackStatus::Rejected),
        ("approved", FeedbackStatus::Approved),
        ("pending", FeedbackStatus::Pending),
    ] {
        let status = use_case.execute(id, code).await.unwrap();
        assert_eq!(status, expected);
        assert_eq!(repo.status_of(id), Some(expected));
    }
}

#[tokio::test]
async fn test_set_status_rejects_bad_input() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let id = submit(&repo, "Alice", 5).await;
    let use_case = SetStatusUseCase::new(repo.clone());

    let err = use_case.execute(id, "published").await.unwrap_err();
    assert!(matches!(err, FeedbackError::InvalidStatus));
    // Entry untouched
    assert_eq!(repo.status_of(id), Some(FeedbackStatus::Pending));

    let err = use_case
        .execute(FeedbackId::new(9999), "approved")
        .await
        .unwrap_err();
    assert!(matches!(err, FeedbackError::NotFound));
}

#[tokio::test]
async fn test_delete_second_time_not_found() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let id = submit(&repo, "Alice", 5).await;
    let use_case = DeleteFeedbackUseCase::new(repo);

    use_case.execute(id).await.unwrap();
    let err = use_case.execute(id).await.unwrap_err();
    assert!(matches!(err, FeedbackError::NotFound));
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_stats_count_approved_only() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let a = submit(&repo, "Alice", 5).await;
    let b = submit(&repo, "Bob", 4).await;
    let _pending = submit(&repo, "Cara", 1).await;
    let rejected = submit(&repo, "Dan", 1).await;

    repo.set_status(a, FeedbackStatus::Approved).await.unwrap();
    repo.set_status(b, FeedbackStatus::Approved).await.unwrap();
    repo.set_status(rejected, FeedbackStatus::Rejected).await.unwrap();

    let stats = StatsUseCase::new(repo.clone());

    let public = stats.public().await.unwrap();
    assert_eq!(public.total_reviews, 2);
    assert_eq!(round_average(public.average_rating), 4.5);
    assert_eq!(public.rating_breakdown, [0, 0, 0, 1, 1]);

    let moderation = stats.moderation().await.unwrap();
    assert_eq!(moderation.total_feedback, 4);
    assert_eq!(moderation.pending_count, 1);
    assert_eq!(moderation.approved_count, 2);
    assert_eq!(moderation.rejected_count, 1);
    assert_eq!(round_average(moderation.average_rating), 4.5);
    assert_eq!(moderation.today_count, 4);
}

#[tokio::test]
async fn test_stats_empty_store() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let stats = StatsUseCase::new(repo);

    let public = stats.public().await.unwrap();
    assert_eq!(public.total_reviews, 0);
    assert_eq!(round_average(public.average_rating), 0.0);
    assert_eq!(public.rating_breakdown, [0; 5]);
}

// ============================================================================
// End-to-end moderation flow
// ============================================================================

#[tokio::test]
async fn test_moderation_scenario() {
    let repo = Arc::new(MemFeedbackRepo::default());
    let config = test_config();
    let list = ListFeedbackUseCase::new(repo.clone(), config.clone());
    let moderate = SetStatusUseCase::new(repo.clone());
    let stats = StatsUseCase::new(repo.clone());

    // A new submission is invisible to the public
    let id = submit(&repo, "Alice", 5).await;
    assert_eq!(list.public_page(None, None).await.unwrap().page_info.total, 0);
    assert_eq!(stats.public().await.unwrap().total_reviews, 0);

    // Approval publishes it
    moderate.execute(id, "approved").await.unwrap();
    let page = list.public_page(None, None).await.unwrap();
    assert_eq!(page.page_info.total, 1);
    assert_eq!(page.entries[0].id, id);
    assert_eq!(stats.public().await.unwrap().total_reviews, 1);

    // Rejection withdraws it again
    moderate.execute(id, "rejected").await.unwrap();
    assert_eq!(list.public_page(None, None).await.unwrap().page_info.total, 0);
    assert_eq!(stats.public().await.unwrap().total_reviews, 0);

    // Deletion removes it everywhere
    DeleteFeedbackUseCase::new(repo.clone()).execute(id).await.unwrap();
    assert_eq!(
        list.admin_page(None, None, None).await.unwrap().page_info.total,
        0
    );
}

// ============================================================================
// DTO shapes
// ============================================================================

#[test]
fn test_public_item_omits_phone_and_status() {
    use crate::presentation::dto::PublicFeedbackItem;
    use crate::domain::value_object::rating::Rating;

    let entry = FeedbackEntry {
        id: FeedbackId::new(1),
        customer_name: "Alice".to_string(),
        phone: "555-123-4567".to_string(),
        rating: Rating::new(5).unwrap(),
        review_text: "Great".to_string(),
        dish_favorite: Some("Ramen".to_string()),
        visit_date: None,
        location: "Main Branch".to_string(),
        status: FeedbackStatus::Approved,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let json = serde_json::to_value(PublicFeedbackItem::from(entry)).unwrap();
    assert!(json.get("phone").is_none());
    assert!(json.get("status").is_none());
    assert_eq!(json["customer_name"], "Alice");
}

#[test]
fn test_envelope_fields_camel_case() {
    use crate::presentation::dto::{SetStatusResponse, SubmitFeedbackResponse};

    let json = serde_json::to_value(SubmitFeedbackResponse {
        message: "ok",
        feedback_id: 7,
    })
    .unwrap();
    assert_eq!(json["feedbackId"], 7);

    let json = serde_json::to_value(SetStatusResponse {
        message: "Feedback approved successfully".to_string(),
        feedback_id: 7,
        status: FeedbackStatus::Approved,
    })
    .unwrap();
    assert_eq!(json["status"], "approved");
    assert_eq!(json["feedbackId"], 7);
}

#[test]
fn test_list_query_lenient_numbers() {
    use crate::presentation::dto::ListQuery;

    let query: ListQuery =
        serde_json::from_str(r#"{"status":"pending","limit":"15","offset":"abc"}"#).unwrap();
    assert_eq!(query.limit(), Some(15));
    assert_eq!(query.offset(), None);

    let query = ListQuery::default();
    assert_eq!(query.limit(), None);
    assert_eq!(query.offset(), None);
}

#[test]
fn test_rating_breakdown_keys() {
    use crate::presentation::dto::PublicStatsResponse;

    let stats = PublicStats {
        total_reviews: 3,
        average_rating: Some(4.0),
        rating_breakdown: [0, 0, 1, 1, 1],
    };
    let json = serde_json::to_value(PublicStatsResponse::from_stats(stats, 4.0)).unwrap();
    assert_eq!(json["ratingBreakdown"]["5"], 1);
    assert_eq!(json["ratingBreakdown"]["3"], 1);
    assert_eq!(json["ratingBreakdown"]["1"], 0);
    assert_eq!(json["averageRating"], 4.0);
}
