//! Feedback Configuration

/// Runtime configuration for the feedback crate
#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    /// Location recorded when a submission leaves it blank
    pub default_location: String,
    /// Default page size on the public listing
    pub public_page_limit: i64,
    /// Default page size on the moderation listing
    pub admin_page_limit: i64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            default_location: "Main Branch".to_string(),
            public_page_limit: 10,
            admin_page_limit: 20,
        }
    }
}
