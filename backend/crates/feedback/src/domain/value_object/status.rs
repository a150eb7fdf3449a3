//! Feedback Status Value Object
//!
//! Moderation state machine. Every entry starts as `Pending`; the
//! administrator may move an entry between any two states, so approval
//! and rejection are both reversible.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Moderation state of a feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Pending,
    Approved,
    Rejected,
}

impl FeedbackStatus {
    /// All states, in moderation order
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::Pending,
        FeedbackStatus::Approved,
        FeedbackStatus::Rejected,
    ];

    /// Storage code (TEXT column value)
    pub fn code(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Approved => "approved",
            FeedbackStatus::Rejected => "rejected",
        }
    }

    /// Parse a storage or wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(FeedbackStatus::Pending),
            "approved" => Some(FeedbackStatus::Approved),
            "rejected" => Some(FeedbackStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// List filter: a single status, or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeedbackStatus),
}

impl StatusFilter {
    /// Parse the `status` query parameter. `all`, empty or absent
    /// mean no filter; anything else must be a valid status code.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some("") | Some("all") => Some(StatusFilter::All),
            Some(code) => FeedbackStatus::from_code(code).map(StatusFilter::Only),
        }
    }

    pub fn status(&self) -> Option<FeedbackStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(*status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for status in FeedbackStatus::ALL {
            assert_eq!(FeedbackStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(FeedbackStatus::from_code("deleted"), None);
        assert_eq!(FeedbackStatus::from_code("Approved"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FeedbackStatus::Approved).unwrap();
        assert_eq!(json, r#""approved""#);
        let back: FeedbackStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(back, FeedbackStatus::Pending);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(StatusFilter::parse(None), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse(Some("all")), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse(Some("")), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::parse(Some("rejected")),
            Some(StatusFilter::Only(FeedbackStatus::Rejected))
        );
        assert_eq!(StatusFilter::parse(Some("bogus")), None);
    }
}
