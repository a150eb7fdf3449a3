//! Common ID Types
//!
//! Type-safe wrappers around SQLite rowids. The store assigns ids via
//! `AUTOINCREMENT`, so they are immutable, never reused, and increase
//! monotonically with insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed rowid wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type FeedbackId = Id<markers::Feedback>;
/// let id = FeedbackId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a rowid from the database
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying rowid
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
///
/// Markers carry the derives so `Id<T>`'s own derived impls apply.
pub mod markers {
    /// Marker for feedback entry IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Feedback;

    /// Marker for administrator IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Admin;
}

/// Type aliases for common IDs
pub type FeedbackId = Id<markers::Feedback>;
pub type AdminId = Id<markers::Admin>;
