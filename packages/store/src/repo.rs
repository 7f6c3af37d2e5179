//! # Record store — the persistence seam for memories and travels
//!
//! [`RecordStore`] is the async interface every backend implements. The API layer
//! only ever talks to `Arc<dyn RecordStore>`, so the same handlers run against
//! PostgreSQL in production and against [`crate::MemoryStore`] in tests and
//! database-less development runs.
//!
//! Each method maps to exactly one query or one insert. Listing returns the whole
//! matching set (no pagination), newest first:
//!
//! | Method | Order |
//! |--------|-------|
//! | [`list_memories`](RecordStore::list_memories) | `createdAt` descending |
//! | [`list_travels`](RecordStore::list_travels) | `dateVisited` descending |
//!
//! The `count_*` methods back the home page summary without loading any records.
//!
//! Inserts never deduplicate: the same payload inserted twice yields two records
//! with distinct identifiers.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Memory, MemoryFilter, NewMemory, NewTravel, Travel};

/// Failure reported by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("stored record is invalid: {0}")]
    Corrupt(String),
}

/// Async interface for reading and writing family records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_memories(&self, filter: MemoryFilter) -> Result<Vec<Memory>, StoreError>;

    async fn insert_memory(&self, memory: NewMemory) -> Result<Memory, StoreError>;

    async fn list_travels(&self) -> Result<Vec<Travel>, StoreError>;

    async fn insert_travel(&self, travel: NewTravel) -> Result<Travel, StoreError>;

    async fn count_memories(&self) -> Result<usize, StoreError>;

    async fn count_travels(&self) -> Result<usize, StoreError>;
}
