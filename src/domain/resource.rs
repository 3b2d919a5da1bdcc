//! Behaviour shared by every soft-deletable, uniquely keyed entity.

use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// An entity with a numeric identity, a natural key that must be unique
/// among active rows, and a soft-delete timestamp.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Field(s) that must be unique among active rows.
    type Key: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// Label used in messages ("company already exists").
    const NAME: &'static str;

    fn id(&self) -> i32;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn natural_key(&self) -> Self::Key;

    /// Whether this row occupies any part of `key`.
    fn holds_key(&self, key: &Self::Key) -> bool {
        self.natural_key() == *key
    }

    fn is_active(&self) -> bool {
        self.deleted_at().is_none()
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}
