//! Subscriber storage.
//!
//! Request handlers only talk to the [`SubscriberStore`] trait, so a persistent
//! backend can replace [`MemoryStore`] without touching the routes.
//! Implementations must perform the duplicate check and the append as one
//! atomic operation.

mod error;
mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::domain::ValidEmail;

/// What happened to an email handed to [`SubscriberStore::insert_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The email was appended. `total` is the size of the list right after the append.
    Inserted { total: usize },
    /// An identical email was already stored, nothing changed.
    AlreadyPresent,
}

#[async_trait::async_trait]
pub trait SubscriberStore: Send + Sync + 'static {
    /// Appends `email` unless an identical string is already stored.
    ///
    /// Uniqueness is by exact match: no case folding and no trimming.
    async fn insert_if_absent(&self, email: &ValidEmail) -> StoreResult<InsertOutcome>;

    /// Number of stored emails.
    async fn count(&self) -> StoreResult<usize>;

    /// A snapshot of every stored email in insertion order.
    async fn list(&self) -> StoreResult<Vec<String>>;
}
