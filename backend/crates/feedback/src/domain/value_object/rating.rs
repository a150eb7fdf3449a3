//! Rating Value Object

use serde::{Deserialize, Serialize};

/// Star rating, 1 through 5 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i64);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Construct a rating, rejecting out-of-range values
    pub fn new(value: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
