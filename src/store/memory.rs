//! In-process subscriber list.
//!
//! Nothing is persisted: the list starts empty and is gone once the process exits.

use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::debug;

use super::{InsertOutcome, StoreResult, SubscriberStore};
use crate::domain::ValidEmail;

#[derive(Debug, Default)]
struct Subscribers {
    /// Emails in the order they were accepted.
    ordered: Vec<String>,
    index: HashSet<String>,
}

/// Ordered, append-only list of unique emails behind a single `RwLock`.
///
/// The write lock is held across both the lookup and the append, so two
/// concurrent inserts of the same new email can never both succeed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    subscribers: RwLock<Subscribers>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SubscriberStore for MemoryStore {
    async fn insert_if_absent(&self, email: &ValidEmail) -> StoreResult<InsertOutcome> {
        let mut subscribers = self.subscribers.write().await;

        if !subscribers.index.insert(email.as_ref().to_owned()) {
            debug!("{:<20} - email already present", "memory_store");
            return Ok(InsertOutcome::AlreadyPresent);
        }
        subscribers.ordered.push(email.as_ref().to_owned());

        Ok(InsertOutcome::Inserted {
            total: subscribers.ordered.len(),
        })
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.subscribers.read().await.ordered.len())
    }

    async fn list(&self) -> StoreResult<Vec<String>> {
        Ok(self.subscribers.read().await.ordered.clone())
    }
}
