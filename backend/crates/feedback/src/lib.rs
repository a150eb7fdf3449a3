//! Feedback (Guest Review) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - FeedbackEntry entity, status/rating/phone/pagination value objects, repository trait
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Public submission with validation (rating 1..=5, phone format)
//! - Moderation queue: every entry starts `pending`
//! - Fully connected status state machine (decisions are reversible)
//! - Paginated public and moderation listings
//! - Aggregate statistics; averages count approved entries only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FeedbackConfig;
pub use domain::entity::feedback::FeedbackEntry;
pub use domain::value_object::status::FeedbackStatus;
pub use error::{FeedbackError, FeedbackResult};
pub use infra::sqlite::SqliteFeedbackRepository;
pub use presentation::router::{admin_feedback_router, public_feedback_router};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::sqlite::SqliteFeedbackRepository as FeedbackStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
