//! Blurb repository.
//!
//! The store is process-lifetime only; the explicit lock makes the
//! concurrency contract for append/list explicit instead of relying on
//! runtime scheduling.

use crate::models::BlurbRecord;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Trait for blurb storage backends.
#[async_trait]
pub trait BlurbRepository: Send + Sync {
    /// Return all records in insertion order.
    async fn list(&self) -> Vec<BlurbRecord>;

    /// Append a record and return it unchanged.
    async fn append(&self, record: BlurbRecord) -> BlurbRecord;
}

/// In-memory repository backed by a guarded, unbounded sequence.
#[derive(Default)]
pub struct InMemoryBlurbRepository {
    records: RwLock<Vec<BlurbRecord>>,
}

impl InMemoryBlurbRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlurbRepository for InMemoryBlurbRepository {
    async fn list(&self) -> Vec<BlurbRecord> {
        self.records.read().await.clone()
    }

    async fn append(&self, record: BlurbRecord) -> BlurbRecord {
        let mut records = self.records.write().await;
        records.push(record.clone());
        tracing::debug!(id = record.id, total = records.len(), "Appended blurb record");
        record
    }
}
